use thiserror::Error;

#[derive(Error, Debug)]
pub enum LabError {
    #[error("Field not found: {path}")]
    MissingField { path: String },

    #[error("Expected a record at '{path}' but found {found}")]
    NotARecord { path: String, found: String },

    #[error("Expected a sequence but found {found}")]
    NotASequence { found: String },

    #[error("Position {index} is out of range for a sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Binding '{name}' is already declared in this scope")]
    DuplicateBinding { name: String },

    #[error("Binding '{name}' was never declared")]
    UnknownBinding { name: String },

    #[error("Delimiter must be exactly one character, got {delimiter:?}")]
    InvalidDelimiter { delimiter: String },

    #[error("Lesson '{title}' failed: {source}")]
    LessonFailed {
        title: String,
        #[source]
        source: Box<LabError>,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value:?} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// 解構失敗：欄位不存在、位置超出範圍等
    Extraction,
    /// 課程檔或 CLI 參數不合法
    Configuration,
    /// IO 或序列化錯誤
    System,
}

impl LabError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            LabError::MissingField { .. }
            | LabError::NotARecord { .. }
            | LabError::NotASequence { .. }
            | LabError::IndexOutOfRange { .. }
            | LabError::DuplicateBinding { .. }
            | LabError::UnknownBinding { .. } => ErrorCategory::Extraction,
            LabError::InvalidDelimiter { .. }
            | LabError::TomlError(_)
            | LabError::ConfigError { .. }
            | LabError::InvalidConfigValueError { .. }
            | LabError::MissingConfigError { .. } => ErrorCategory::Configuration,
            LabError::IoError(_) | LabError::SerializationError(_) => ErrorCategory::System,
            LabError::LessonFailed { source, .. } => source.category(),
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Extraction => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::System => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            LabError::MissingField { path } => format!("The record has no field '{}'", path),
            LabError::IndexOutOfRange { index, len } => format!(
                "The pattern asks for position {} but the sequence only has {} items",
                index, len
            ),
            LabError::LessonFailed { title, source } => {
                format!("{}: {}", title, source.user_friendly_message())
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            LabError::MissingField { .. } | LabError::NotARecord { .. } => {
                "Check the field path against the record literal"
            }
            LabError::NotASequence { .. } => "Use `fields` for records and `positions` for sequences or text",
            LabError::IndexOutOfRange { .. } => "Remove trailing slots from `positions`",
            LabError::DuplicateBinding { .. } => "Give every binding in a lesson a distinct name",
            LabError::UnknownBinding { .. } => "Only report bindings declared by the lesson pattern",
            LabError::InvalidDelimiter { .. } => "Use a single-character delimiter such as \" \"",
            LabError::LessonFailed { source, .. } => source.recovery_suggestion(),
            LabError::TomlError(_)
            | LabError::ConfigError { .. }
            | LabError::InvalidConfigValueError { .. }
            | LabError::MissingConfigError { .. } => "Fix the lesson file and run again",
            LabError::IoError(_) | LabError::SerializationError(_) => {
                "Check that the file exists and is readable"
            }
        }
    }

    pub(crate) fn in_lesson(self, title: &str) -> Self {
        LabError::LessonFailed {
            title: title.to_string(),
            source: Box::new(self),
        }
    }
}

pub type Result<T> = std::result::Result<T, LabError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lesson_failure_keeps_inner_category() {
        let err = LabError::IndexOutOfRange { index: 3, len: 3 }.in_lesson("Dogs");
        assert_eq!(err.category(), ErrorCategory::Extraction);
        assert_eq!(err.exit_code(), 1);
        assert!(err.to_string().contains("Dogs"));
    }

    #[test]
    fn test_config_errors_exit_with_two() {
        let err = LabError::MissingConfigError {
            field: "catalog.name".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.exit_code(), 2);
    }
}
