use crate::core::extract::{destructure, render_line};
use crate::domain::model::{Lesson, Scope};
use crate::utils::error::Result;

#[derive(Debug, Clone)]
pub struct LessonOutcome {
    pub title: String,
    pub scope: Scope,
    pub lines: Vec<String>,
}

/// 執行單一課程：解構來源，再依報告分組輸出
#[derive(Debug, Default, Clone, Copy)]
pub struct LessonRunner;

impl LessonRunner {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self, lesson: &Lesson) -> Result<LessonOutcome> {
        tracing::debug!("📘 {}: destructuring {}", lesson.title, lesson.source.kind());
        let scope = destructure(&lesson.source, &lesson.pattern)
            .map_err(|e| e.in_lesson(&lesson.title))?;

        if tracing::enabled!(tracing::Level::DEBUG) {
            let dump = serde_json::to_string(&scope)?;
            tracing::debug!("📦 {}: scope = {}", lesson.title, dump);
        }

        let lines = match &lesson.reports {
            Some(groups) => groups
                .iter()
                .map(|group| render_line(&scope, group))
                .collect::<Result<Vec<_>>>()
                .map_err(|e| e.in_lesson(&lesson.title))?,
            None => vec![render_line(&scope, scope.names())?],
        };

        Ok(LessonOutcome {
            title: lesson.title.clone(),
            scope,
            lines,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Pattern, Source};
    use crate::utils::error::LabError;
    use serde_json::json;

    fn doggie() -> Source {
        Source::record(json!({
            "name": "Buzz",
            "breed": "Great Pyrenees",
            "furColor": "black and white"
        }))
        .unwrap()
    }

    #[test]
    fn test_default_report_is_one_line_in_pattern_order() {
        let lesson = Lesson::new("doggie", doggie(), Pattern::fields(["breed", "name"]));
        let outcome = LessonRunner::new().run(&lesson).unwrap();
        assert_eq!(outcome.lines, vec!["Great Pyrenees Buzz"]);
        assert_eq!(outcome.scope.names(), vec!["breed", "name"]);
    }

    #[test]
    fn test_report_groups_follow_call_order() {
        let lesson = Lesson::new(
            "doggie",
            doggie(),
            Pattern::fields(["breed:dogBreed2", "name:dogName2"]),
        )
        .with_reports([["dogName2"], ["dogBreed2"]]);

        let outcome = LessonRunner::new().run(&lesson).unwrap();
        assert_eq!(outcome.lines, vec!["Buzz", "Great Pyrenees"]);
    }

    #[test]
    fn test_failures_carry_the_lesson_title() {
        let lesson = Lesson::new("ghost dog", doggie(), Pattern::fields(["owner"]));
        let err = LessonRunner::new().run(&lesson).unwrap_err();
        match err {
            LabError::LessonFailed { title, source } => {
                assert_eq!(title, "ghost dog");
                assert!(matches!(*source, LabError::MissingField { .. }));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_unknown_report_name_fails() {
        let lesson = Lesson::new("doggie", doggie(), Pattern::fields(["name"]))
            .with_reports([["name", "breed"]]);
        let err = LessonRunner::new().run(&lesson).unwrap_err();
        assert!(err.to_string().contains("breed"));
    }
}
