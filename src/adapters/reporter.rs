use crate::core::Reporter;
use crate::utils::error::Result;
use std::io::{self, Write};

/// 每次 report 寫一行到 stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, line: &str) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", line)?;
        Ok(())
    }
}

/// 把報告行留在記憶體中，測試用
#[derive(Debug, Default, Clone)]
pub struct MemoryReporter {
    lines: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn transcript(&self) -> String {
        self.lines.join("\n")
    }
}

impl Reporter for MemoryReporter {
    fn report(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_reporter_keeps_call_order() {
        let mut reporter = MemoryReporter::new();
        reporter.report("Buzz").unwrap();
        reporter.report("Great Pyrenees").unwrap();
        assert_eq!(reporter.lines(), &["Buzz", "Great Pyrenees"]);
        assert_eq!(reporter.transcript(), "Buzz\nGreat Pyrenees");
    }

    #[test]
    fn test_reporter_through_mut_reference() {
        fn emit<R: Reporter>(mut reporter: R) {
            reporter.report("Pug").unwrap();
        }

        let mut reporter = MemoryReporter::new();
        emit(&mut reporter);
        assert_eq!(reporter.lines(), &["Pug"]);
    }
}
