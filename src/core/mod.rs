pub mod catalog;
pub mod engine;
pub mod extract;
pub mod lesson;

pub use crate::domain::model::{Binding, FieldSelector, Lesson, Pattern, Scope, Slot, Source};
pub use crate::domain::ports::{LessonProvider, Reporter};
pub use crate::utils::error::Result;
