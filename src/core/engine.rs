use crate::core::lesson::LessonRunner;
use crate::core::{LessonProvider, Reporter};
use crate::utils::error::Result;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub lessons: usize,
    pub bindings: usize,
    pub lines: usize,
}

pub struct Demonstrator<R: Reporter, P: LessonProvider> {
    reporter: R,
    provider: P,
    runner: LessonRunner,
    headings: bool,
}

impl<R: Reporter, P: LessonProvider> Demonstrator<R, P> {
    pub fn new(reporter: R, provider: P) -> Self {
        Self {
            reporter,
            provider,
            runner: LessonRunner::new(),
            headings: false,
        }
    }

    /// 每個課程前先輸出一行 `// 標題`
    pub fn with_headings(mut self, headings: bool) -> Self {
        self.headings = headings;
        self
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        tracing::info!(
            "🚀 Running {} lessons from '{}'",
            self.provider.lessons().len(),
            self.provider.name()
        );

        let mut summary = RunSummary::default();
        for lesson in self.provider.lessons() {
            tracing::info!("📘 {}", lesson.title);
            let outcome = self.runner.run(lesson)?;

            if self.headings {
                self.reporter.report(&format!("// {}", outcome.title))?;
            }
            for line in &outcome.lines {
                self.reporter.report(line)?;
            }

            summary.lessons += 1;
            summary.bindings += outcome.scope.len();
            summary.lines += outcome.lines.len();
        }

        tracing::info!(
            "✅ {} lessons, {} bindings, {} lines",
            summary.lessons,
            summary.bindings,
            summary.lines
        );
        Ok(summary)
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
