use crate::config::toml_config::LessonFile;
use crate::core::catalog::StaticCatalog;
use crate::utils::error::{LabError, Result};
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "binding-lab")]
#[command(about = "Walk through destructuring assignment over records, sequences and text")]
pub struct CliConfig {
    #[arg(long, help = "Run lessons from a TOML file instead of the built-in catalog")]
    pub lessons: Option<PathBuf>,

    #[arg(long, help = "Only run lessons whose title contains this text")]
    pub only: Option<String>,

    #[arg(long, help = "Print a `// title` line before each lesson")]
    pub headings: bool,

    #[arg(long, help = "List lesson titles and exit")]
    pub list: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(only) = &self.only {
            crate::utils::validation::validate_non_empty_string("only", only)?;
        }
        if let Some(path) = &self.lessons {
            if !path.is_file() {
                return Err(LabError::InvalidConfigValueError {
                    field: "lessons".to_string(),
                    value: path.display().to_string(),
                    reason: "Lesson file does not exist".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// 依 CLI 參數決定課程來源：課程檔或內建清單，再套用 `--only`
pub fn load_catalog(config: &CliConfig) -> Result<StaticCatalog> {
    let catalog = match &config.lessons {
        Some(path) => {
            tracing::info!("📄 Loading lessons from {}", path.display());
            LessonFile::from_file(path)?.into_catalog()?
        }
        None => StaticCatalog::builtin()?,
    };

    Ok(match &config.only {
        Some(needle) => {
            let filtered = catalog.filtered(needle);
            if filtered.is_empty() {
                tracing::warn!("⚠️ No lesson title contains '{}'", needle);
            }
            filtered
        }
        None => catalog,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LessonProvider;
    use clap::Parser;

    #[test]
    fn test_defaults_to_builtin_catalog() {
        let config = CliConfig::parse_from(["binding-lab"]);
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.name(), "destructuring-assignment");
        assert_eq!(catalog.lessons().len(), 20);
    }

    #[test]
    fn test_only_filters_lessons() {
        let config = CliConfig::parse_from(["binding-lab", "--only", "nested"]);
        let catalog = load_catalog(&config).unwrap();
        assert_eq!(catalog.titles(), vec!["Object: drill into nested records"]);
    }

    #[test]
    fn test_cli_flags_parse() {
        let config = CliConfig::parse_from([
            "binding-lab",
            "--lessons",
            "lessons.toml",
            "--headings",
            "--verbose",
        ]);
        assert_eq!(config.lessons.as_deref(), Some(std::path::Path::new("lessons.toml")));
        assert!(config.headings);
        assert!(config.verbose);
        assert!(!config.list);
    }

    #[test]
    fn test_validate_rejects_missing_lesson_file() {
        let config =
            CliConfig::parse_from(["binding-lab", "--lessons", "/nonexistent/lessons.toml"]);
        assert!(config.validate().is_err());

        let blank_only = CliConfig::parse_from(["binding-lab", "--only", "  "]);
        assert!(blank_only.validate().is_err());
    }
}
