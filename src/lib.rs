pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::reporter::{ConsoleReporter, MemoryReporter};
pub use config::toml_config::LessonFile;
pub use core::{catalog::StaticCatalog, engine::Demonstrator, lesson::LessonRunner};
pub use utils::error::{LabError, Result};
