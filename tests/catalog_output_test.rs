use anyhow::Result;
use binding_lab::core::LessonProvider;
use binding_lab::{Demonstrator, MemoryReporter, StaticCatalog};

const EXPECTED_TRANSCRIPT: &[&str] = &[
    "Buzz",
    "Great Pyrenees",
    "Buzz",
    "Great Pyrenees",
    "Buzz",
    "Great Pyrenees",
    "smoked",
    "Oscar Meyer",
    "Great Pyrenees Pug Bull Mastiff",
    "Pug Bull Mastiff",
    "Sir Woody BarksALot",
    "Sir BarksALot",
    "cow horse sheep pig chicken",
    "black and white",
    "red orange yellow green blue indigo violet",
    "red orange yellow green blue violet",
    "indigo",
    "Miss Piggy pink The Rainbow Connection Movin’ Right Along Bein’ Green I Hope That Something Better Comes Along Host of The Muppet Show Kermit",
    "Movin’ Right Along I Hope That Something Better Comes Along Host of The Muppet Show Kermit",
    "cow horse sheep pig chicken",
    "cow horse sheep",
    "Kermit",
    "Miss Piggy",
    "Big Bird",
    "Elmo",
    "Bein' Green",
    "Movin' Right Along",
    "Host",
    "Miss Piggy",
];

#[test]
fn test_builtin_catalog_transcript() -> Result<()> {
    let mut reporter = MemoryReporter::new();
    let summary = Demonstrator::new(&mut reporter, StaticCatalog::builtin()?).run()?;

    assert_eq!(reporter.lines(), EXPECTED_TRANSCRIPT);
    assert_eq!(summary.lessons, 20);
    assert_eq!(summary.lines, EXPECTED_TRANSCRIPT.len());
    Ok(())
}

#[test]
fn test_builtin_catalog_with_headings() -> Result<()> {
    let catalog = StaticCatalog::builtin()?.filtered("key order");
    assert_eq!(catalog.lessons().len(), 1);

    let mut reporter = MemoryReporter::new();
    Demonstrator::new(&mut reporter, catalog)
        .with_headings(true)
        .run()?;

    assert_eq!(
        reporter.lines(),
        &[
            "// Object: key order does not matter",
            "Buzz",
            "Great Pyrenees"
        ]
    );
    Ok(())
}

#[test]
fn test_bindings_are_counted_per_lesson() -> Result<()> {
    let catalog = StaticCatalog::builtin()?.filtered("indigo");
    let summary = Demonstrator::new(MemoryReporter::new(), catalog).run()?;

    // 「without indigo」綁定六個，「indigo only」綁定一個
    assert_eq!(summary.lessons, 2);
    assert_eq!(summary.bindings, 7);
    Ok(())
}
