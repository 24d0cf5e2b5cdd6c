use crate::core::catalog::StaticCatalog;
use crate::domain::model::{Lesson, Pattern, Source};
use crate::utils::error::{LabError, Result};
use crate::utils::validation::{
    validate_delimiter, validate_field_path, validate_identifier, validate_non_empty_string,
    validate_required_field, validate_unique_names, Validate, SKIP_MARKER,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;
use std::sync::OnceLock;

/// TOML 課程檔
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonFile {
    pub catalog: Option<CatalogSection>,
    #[serde(default)]
    pub lessons: Vec<LessonSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSection {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonSection {
    pub title: String,
    pub source: SourceSection,
    /// `"path"` 或 `"path:binding"`
    pub fields: Option<Vec<String>>,
    /// 綁定名稱，`"_"` 表示跳過
    pub positions: Option<Vec<String>>,
    pub reports: Option<Vec<Vec<String>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceSection {
    Record {
        value: Map<String, Value>,
    },
    Sequence {
        items: Vec<Value>,
    },
    Text {
        value: String,
        #[serde(default = "default_delimiter")]
        delimiter: String,
    },
}

fn default_delimiter() -> String {
    " ".to_string()
}

impl SourceSection {
    fn kind(&self) -> &'static str {
        match self {
            SourceSection::Record { .. } => "record",
            SourceSection::Sequence { .. } => "sequence",
            SourceSection::Text { .. } => "text",
        }
    }

    fn to_source(&self) -> Result<Source> {
        Ok(match self {
            SourceSection::Record { value } => Source::Record(value.clone()),
            SourceSection::Sequence { items } => Source::Sequence(items.clone()),
            SourceSection::Text { value, delimiter } => {
                Source::text(value.clone(), validate_delimiter(delimiter)?)
            }
        })
    }
}

impl LessonSection {
    fn pattern(&self) -> Option<Pattern> {
        match (&self.fields, &self.positions) {
            (Some(fields), None) => Some(Pattern::fields(fields)),
            (None, Some(positions)) => Some(Pattern::positions(positions)),
            _ => None,
        }
    }

    fn validate_at(&self, index: usize) -> Result<()> {
        let prefix = format!("lessons[{}]", index);
        validate_non_empty_string(&format!("{}.title", prefix), &self.title)?;

        if let SourceSection::Text { delimiter, .. } = &self.source {
            validate_delimiter(delimiter)?;
        }

        match (&self.fields, &self.positions) {
            (Some(_), Some(_)) => {
                return Err(LabError::InvalidConfigValueError {
                    field: prefix,
                    value: self.title.clone(),
                    reason: "A lesson declares either `fields` or `positions`, not both"
                        .to_string(),
                })
            }
            (None, None) => {
                return Err(LabError::MissingConfigError {
                    field: format!("{}.fields or {}.positions", prefix, prefix),
                })
            }
            (Some(fields), None) => {
                if !matches!(self.source, SourceSection::Record { .. }) {
                    return Err(self.shape_mismatch(&prefix, "fields"));
                }
                let field_name = format!("{}.fields", prefix);
                for raw in fields {
                    let selector = crate::domain::model::FieldSelector::parse(raw);
                    validate_field_path(&field_name, &selector.path)?;
                    validate_identifier(&field_name, &selector.binding)?;
                }
            }
            (None, Some(positions)) => {
                if matches!(self.source, SourceSection::Record { .. }) {
                    return Err(self.shape_mismatch(&prefix, "positions"));
                }
                let field_name = format!("{}.positions", prefix);
                for raw in positions.iter().filter(|raw| raw.as_str() != SKIP_MARKER) {
                    validate_identifier(&field_name, raw)?;
                }
            }
        }

        let pattern = self.pattern().ok_or_else(|| LabError::ConfigError {
            message: format!("{} has no pattern", prefix),
        })?;
        let declared = pattern.binding_names();
        validate_unique_names(declared.iter().copied())?;

        if let Some(groups) = &self.reports {
            for name in groups.iter().flatten() {
                if !declared.contains(&name.as_str()) {
                    return Err(LabError::InvalidConfigValueError {
                        field: format!("{}.reports", prefix),
                        value: name.clone(),
                        reason: "Reports can only name bindings declared by the pattern"
                            .to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    fn shape_mismatch(&self, prefix: &str, pattern_kind: &str) -> LabError {
        LabError::InvalidConfigValueError {
            field: format!("{}.source.type", prefix),
            value: self.source.kind().to_string(),
            reason: format!("`{}` cannot destructure a {} source", pattern_kind, self.source.kind()),
        }
    }

    fn to_lesson(&self) -> Result<Lesson> {
        let pattern = self.pattern().ok_or_else(|| LabError::MissingConfigError {
            field: format!("{}: fields or positions", self.title),
        })?;
        let mut lesson = Lesson::new(self.title.clone(), self.source.to_source()?, pattern);
        lesson.reports = self.reports.clone();
        Ok(lesson)
    }
}

impl LessonFile {
    /// 從 TOML 檔案載入課程
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LabError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析課程
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${DOG_NAME})，未設定的保留原文
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR
            .get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"));

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        let catalog = validate_required_field("catalog", &self.catalog)?;
        validate_non_empty_string("catalog.name", &catalog.name)?;

        if self.lessons.is_empty() {
            return Err(LabError::ConfigError {
                message: "Lesson file declares no [[lessons]]".to_string(),
            });
        }

        for (index, lesson) in self.lessons.iter().enumerate() {
            lesson.validate_at(index)?;
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        self.catalog.as_ref().map(|c| c.name.as_str()).unwrap_or_default()
    }

    /// 驗證後轉成可執行的課程清單
    pub fn into_catalog(self) -> Result<StaticCatalog> {
        self.validate_config()?;
        let lessons = self
            .lessons
            .iter()
            .map(LessonSection::to_lesson)
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!("📄 Loaded {} lessons from '{}'", lessons.len(), self.name());
        Ok(StaticCatalog::new(self.name(), lessons))
    }
}

impl Validate for LessonFile {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
