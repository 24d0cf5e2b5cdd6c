use crate::utils::error::{LabError, Result};
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 位置樣式中代表「跳過此位置」的標記
pub const SKIP_MARKER: &str = "_";

fn identifier_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier pattern is a valid regex")
    })
}

pub fn validate_identifier(field_name: &str, name: &str) -> Result<()> {
    if name == SKIP_MARKER {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: format!("'{}' is reserved for skipped positions", SKIP_MARKER),
        });
    }

    if !identifier_pattern().is_match(name) {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Binding names must start with a letter, '_' or '$' and contain only letters, digits, '_' or '$'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_field_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() || path.split('.').any(|segment| segment.is_empty()) {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Field paths cannot be empty or contain empty segments".to_string(),
        });
    }
    Ok(())
}

pub fn validate_delimiter(delimiter: &str) -> Result<char> {
    let mut chars = delimiter.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(LabError::InvalidDelimiter {
            delimiter: delimiter.to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LabError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LabError::MissingConfigError {
        field: field_name.to_string(),
    })
}

/// 同一個課程裡的綁定名稱不可重複
pub fn validate_unique_names<'a, I>(names: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(LabError::DuplicateBinding {
                name: name.to_string(),
            });
        }
    }
    Ok(())
}
