use crate::utils::error::{LabError, Result};
use serde::Serialize;
use serde_json::{Map, Value};

/// 一個具名的輸出槽，持有從 Record 或 Sequence 複製出來的值
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Binding {
    pub name: String,
    pub value: Value,
}

/// 一次解構產生的所有綁定，依樣式順序排列。名稱不可重複。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Scope {
    bindings: Vec<Binding>,
}

impl Scope {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&mut self, name: impl Into<String>, value: Value) -> Result<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(LabError::DuplicateBinding { name });
        }
        self.bindings.push(Binding { name, value });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    pub fn names(&self) -> Vec<&str> {
        self.bindings.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Binding> {
        self.bindings.iter()
    }
}

impl<'a> IntoIterator for &'a Scope {
    type Item = &'a Binding;
    type IntoIter = std::slice::Iter<'a, Binding>;

    fn into_iter(self) -> Self::IntoIter {
        self.bindings.iter()
    }
}

/// 位置樣式中的一格
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    Skip,
    Bind(String),
}

impl Slot {
    pub fn bind(name: impl Into<String>) -> Self {
        Slot::Bind(name.into())
    }

    /// `"_"` 代表跳過，其餘視為綁定名稱
    pub fn parse(raw: &str) -> Self {
        if raw == crate::utils::validation::SKIP_MARKER {
            Slot::Skip
        } else {
            Slot::Bind(raw.to_string())
        }
    }
}

/// `path -> binding`，path 以 `.` 串接巢狀欄位
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSelector {
    pub path: String,
    pub binding: String,
}

impl FieldSelector {
    pub fn new(path: impl Into<String>, binding: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            binding: binding.into(),
        }
    }

    /// 省略寫法：綁定名稱沿用路徑最後一段的欄位名
    pub fn shorthand(path: impl Into<String>) -> Self {
        let path = path.into();
        let binding = path.rsplit('.').next().unwrap_or(&path).to_string();
        Self { path, binding }
    }

    /// 解析 `"path"` 或 `"path:binding"`
    pub fn parse(raw: &str) -> Self {
        match raw.split_once(':') {
            Some((path, binding)) => Self::new(path.trim(), binding.trim()),
            None => Self::shorthand(raw.trim()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Pattern {
    Fields(Vec<FieldSelector>),
    Positions(Vec<Slot>),
}

impl Pattern {
    pub fn fields<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Pattern::Fields(raw.into_iter().map(|s| FieldSelector::parse(s.as_ref())).collect())
    }

    pub fn positions<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Pattern::Positions(raw.into_iter().map(|s| Slot::parse(s.as_ref())).collect())
    }

    /// 樣式會宣告的綁定名稱，依宣告順序
    pub fn binding_names(&self) -> Vec<&str> {
        match self {
            Pattern::Fields(selectors) => selectors.iter().map(|s| s.binding.as_str()).collect(),
            Pattern::Positions(slots) => slots
                .iter()
                .filter_map(|slot| match slot {
                    Slot::Bind(name) => Some(name.as_str()),
                    Slot::Skip => None,
                })
                .collect(),
        }
    }
}

/// 被解構的字面值
#[derive(Debug, Clone, PartialEq)]
pub enum Source {
    Record(Map<String, Value>),
    Sequence(Vec<Value>),
    Text { value: String, delimiter: char },
}

impl Source {
    /// 從 JSON 字面值建立，必須是物件
    pub fn record(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Source::Record(map)),
            other => Err(LabError::NotARecord {
                path: ROOT_PATH.to_string(),
                found: describe(&other),
            }),
        }
    }

    pub fn sequence(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(Source::Sequence(items)),
            other => Err(LabError::NotASequence {
                found: describe(&other),
            }),
        }
    }

    pub fn text(value: impl Into<String>, delimiter: char) -> Self {
        Source::Text {
            value: value.into(),
            delimiter,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Source::Record(_) => "record",
            Source::Sequence(_) => "sequence",
            Source::Text { .. } => "text",
        }
    }
}

/// 一個解構敘述加上它的輸出
#[derive(Debug, Clone, PartialEq)]
pub struct Lesson {
    pub title: String,
    pub source: Source,
    pub pattern: Pattern,
    /// 每一組輸出一行；`None` 表示所有綁定印成一行
    pub reports: Option<Vec<Vec<String>>>,
}

impl Lesson {
    pub fn new(title: impl Into<String>, source: Source, pattern: Pattern) -> Self {
        Self {
            title: title.into(),
            source,
            pattern,
            reports: None,
        }
    }

    pub fn with_reports<I, G, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reports = Some(
            groups
                .into_iter()
                .map(|group| group.into_iter().map(Into::into).collect())
                .collect(),
        );
        self
    }

    /// 每個綁定各印一行
    pub fn one_per_line(mut self) -> Self {
        let groups = self
            .pattern
            .binding_names()
            .into_iter()
            .map(|name| vec![name.to_string()])
            .collect();
        self.reports = Some(groups);
        self
    }
}

/// 錯誤訊息中代表整個來源值的路徑
pub const ROOT_PATH: &str = "(root)";

/// 錯誤訊息用的值種類描述
pub fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(_) => "a boolean".to_string(),
        Value::Number(_) => "a number".to_string(),
        Value::String(_) => "text".to_string(),
        Value::Array(_) => "a sequence".to_string(),
        Value::Object(_) => "a record".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scope_rejects_redeclaration() {
        let mut scope = Scope::new();
        scope.declare("name", json!("Buzz")).unwrap();
        let err = scope.declare("name", json!("Woody")).unwrap_err();
        assert!(matches!(err, LabError::DuplicateBinding { name } if name == "name"));
        assert_eq!(scope.get("name"), Some(&json!("Buzz")));
        assert_eq!(scope.len(), 1);
    }

    #[test]
    fn test_field_selector_parse() {
        assert_eq!(
            FieldSelector::parse("name:dogName"),
            FieldSelector::new("name", "dogName")
        );
        assert_eq!(FieldSelector::parse("kermit"), FieldSelector::new("kermit", "kermit"));
        assert_eq!(
            FieldSelector::parse("favoriteFoods.meats.hotDog"),
            FieldSelector::new("favoriteFoods.meats.hotDog", "hotDog")
        );
    }

    #[test]
    fn test_slot_parse_and_binding_names() {
        let pattern = Pattern::positions(["_", "smallDog", "giantDog"]);
        assert_eq!(
            pattern,
            Pattern::Positions(vec![Slot::Skip, Slot::bind("smallDog"), Slot::bind("giantDog")])
        );
        assert_eq!(pattern.binding_names(), vec!["smallDog", "giantDog"]);
    }

    #[test]
    fn test_source_constructors_check_shape() {
        assert!(Source::record(json!({"a": 1})).is_ok());
        assert!(matches!(
            Source::record(json!([1, 2])),
            Err(LabError::NotARecord { .. })
        ));
        assert!(matches!(
            Source::sequence(json!("pug")),
            Err(LabError::NotASequence { found }) if found == "text"
        ));
    }

    #[test]
    fn test_one_per_line_reports() {
        let lesson = Lesson::new(
            "characters",
            Source::Record(Map::new()),
            Pattern::fields(["kermit", "elmo"]),
        )
        .one_per_line();
        assert_eq!(
            lesson.reports,
            Some(vec![vec!["kermit".to_string()], vec!["elmo".to_string()]])
        );
    }
}
