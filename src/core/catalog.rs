use crate::core::LessonProvider;
use crate::domain::model::{Lesson, Pattern, Source};
use crate::utils::error::Result;
use serde_json::{json, Value};

/// 記憶體中的課程清單
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    name: String,
    lessons: Vec<Lesson>,
}

impl StaticCatalog {
    pub fn new(name: impl Into<String>, lessons: Vec<Lesson>) -> Self {
        Self {
            name: name.into(),
            lessons,
        }
    }

    /// 內建的解構示範，依序涵蓋物件、陣列與字串
    pub fn builtin() -> Result<Self> {
        Ok(Self::new("destructuring-assignment", builtin_lessons()?))
    }

    /// 只保留標題包含 `needle` 的課程（不分大小寫）
    pub fn filtered(self, needle: &str) -> Self {
        let needle = needle.to_lowercase();
        let lessons = self
            .lessons
            .into_iter()
            .filter(|lesson| lesson.title.to_lowercase().contains(&needle))
            .collect();
        Self {
            name: self.name,
            lessons,
        }
    }

    pub fn titles(&self) -> Vec<&str> {
        self.lessons.iter().map(|l| l.title.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

impl LessonProvider for StaticCatalog {
    fn name(&self) -> &str {
        &self.name
    }

    fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}

fn doggie() -> Value {
    json!({
        "name": "Buzz",
        "breed": "Great Pyrenees",
        "furColor": "black and white",
        "activityLevel": "sloth-like",
        "favoriteFood": "hot dogs"
    })
}

fn doggie_nested() -> Value {
    json!({
        "name": "Buzz",
        "breed": "Great Pyrenees",
        "furColor": "black and white",
        "activityLevel": "sloth-like",
        "favoriteFoods": {
            "meats": {
                "ham": "smoked",
                "hotDog": "Oscar Meyer"
            },
            "cheeses": {
                "american": "kraft"
            }
        }
    })
}

fn dogs() -> Value {
    json!(["Great Pyrenees", "Pug", "Bull Mastiff"])
}

fn rainbow_colors() -> Value {
    json!(["red", "orange", "yellow", "green", "blue", "indigo", "violet"])
}

fn muppet() -> Value {
    json!({
        "muppetName": "Miss Piggy",
        "color": "pink",
        "song1": "The Rainbow Connection",
        "song2": "Movin’ Right Along",
        "song3": "Bein’ Green",
        "song4": "I Hope That Something Better Comes Along",
        "job": "Host of The Muppet Show",
        "partner": "Kermit"
    })
}

fn animal_characters() -> Value {
    json!({
        "kermit": "Kermit",
        "missPiggy": "Miss Piggy",
        "bigBird": "Big Bird",
        "elmo": "Elmo"
    })
}

fn muppet_songs() -> Value {
    json!({
        "song1": "Rainbow Connection",
        "song2": "Bein' Green",
        "song3": "Mahna Mahna",
        "song4": "Movin' Right Along"
    })
}

fn kermit_details() -> Value {
    json!({
        "name": "Kermit",
        "job": "Host",
        "partner": "Miss Piggy",
        "address": {
            "city": "Los Angeles",
            "state": "California"
        }
    })
}

const DOGS_NAME: &str = "Sir Woody BarksALot";
const FARM_ANIMALS: &str = "cow horse sheep pig chicken";

fn builtin_lessons() -> Result<Vec<Lesson>> {
    Ok(vec![
        Lesson::new(
            "Object: pick name and breed",
            Source::record(doggie())?,
            Pattern::fields(["name", "breed"]),
        )
        .one_per_line(),
        Lesson::new(
            "Object: rename while extracting",
            Source::record(doggie())?,
            Pattern::fields(["name:dogName", "breed:dogBreed"]),
        )
        .one_per_line(),
        Lesson::new(
            "Object: key order does not matter",
            Source::record(doggie())?,
            Pattern::fields(["breed:dogBreed2", "name:dogName2"]),
        )
        .with_reports([["dogName2"], ["dogBreed2"]]),
        Lesson::new(
            "Object: drill into nested records",
            Source::record(doggie_nested())?,
            Pattern::fields(["favoriteFoods.meats.ham", "favoriteFoods.meats.hotDog"]),
        )
        .one_per_line(),
        Lesson::new(
            "Array: bind every position",
            Source::sequence(dogs())?,
            Pattern::positions(["medium", "small", "giant"]),
        ),
        Lesson::new(
            "Array: skip the first position",
            Source::sequence(dogs())?,
            Pattern::positions(["_", "smallDog", "giantDog"]),
        ),
        Lesson::new(
            "String: split into title and names",
            Source::text(DOGS_NAME, ' '),
            Pattern::positions(["title", "firstName", "lastName"]),
        ),
        Lesson::new(
            "String: keep title and last name only",
            Source::text(DOGS_NAME, ' '),
            Pattern::positions(["titleOnly", "_", "lastNameOnly"]),
        ),
        Lesson::new(
            "String: five farm animals",
            Source::text(FARM_ANIMALS, ' '),
            Pattern::positions(["bessie", "horse", "dolly", "babe", "little"]),
        ),
        Lesson::new(
            "String: three traditional animal colors",
            Source::text("black and white chestnut black", ' '),
            Pattern::positions(["blackAndWhite", "chestnut", "black"]),
        ),
        Lesson::new(
            "Array: seven rainbow colors",
            Source::sequence(rainbow_colors())?,
            Pattern::positions(["red", "orange", "yellow", "green", "blue", "indigo", "violet"]),
        ),
        Lesson::new(
            "Array: rainbow initials without indigo",
            Source::sequence(rainbow_colors())?,
            Pattern::positions(["r", "o", "y", "g", "b", "_", "v"]),
        ),
        Lesson::new(
            "Array: indigo only",
            Source::sequence(rainbow_colors())?,
            Pattern::positions(["_", "_", "_", "_", "_", "indg"]),
        ),
        Lesson::new(
            "Object: every muppet property by key",
            Source::record(muppet())?,
            Pattern::fields([
                "muppetName", "color", "song1", "song2", "song3", "song4", "job", "partner",
            ]),
        ),
        Lesson::new(
            "Object: selected muppet songs and job",
            Source::record(muppet())?,
            Pattern::fields([
                "song2:secondSong",
                "song4:fourthSong",
                "job:kermitJob",
                "partner:kermitPartner",
            ]),
        ),
        Lesson::new(
            "String: five farm animal sounds",
            Source::text(FARM_ANIMALS, ' '),
            Pattern::positions(["moo", "neigh", "baa", "oink", "cluck"]),
        ),
        Lesson::new(
            "String: three animal colors",
            Source::text("cow horse sheep", ' '),
            Pattern::positions(["blackAndWhiteColor", "chestnutColor", "blackColor"]),
        ),
        Lesson::new(
            "Object: animal characters by key",
            Source::record(animal_characters())?,
            Pattern::fields(["kermit", "missPiggy", "bigBird", "elmo"]),
        )
        .one_per_line(),
        Lesson::new(
            "Object: muppet songs two and four",
            Source::record(muppet_songs())?,
            Pattern::fields(["song2:songTwo", "song4:songFour"]),
        )
        .one_per_line(),
        Lesson::new(
            "Object: Kermit's job and partner",
            Source::record(kermit_details())?,
            Pattern::fields(["job:nestedJob", "partner:kermitPartner"]),
        )
        .one_per_line(),
    ])
}
