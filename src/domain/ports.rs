use crate::domain::model::Lesson;
use crate::utils::error::Result;

/// 報告行的輸出端
pub trait Reporter {
    fn report(&mut self, line: &str) -> Result<()>;
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: &str) -> Result<()> {
        (**self).report(line)
    }
}

/// 提供依序執行的課程
pub trait LessonProvider {
    fn name(&self) -> &str;
    fn lessons(&self) -> &[Lesson];
}
