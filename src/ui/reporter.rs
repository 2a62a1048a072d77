//! Output sink for sync progress.
//!
//! The core never prints directly; it reports through this trait so the CLI
//! can render coloured lines while tests capture plain text.

use super::messages;

pub trait Reporter {
    fn info(&mut self, msg: &str);
    fn success(&mut self, msg: &str);
    fn warning(&mut self, msg: &str);
    fn error(&mut self, msg: &str);
    /// Unstyled line (banners, samples).
    fn line(&mut self, msg: &str);
}

/// Terminal reporter backed by `ui::messages`.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn info(&mut self, msg: &str) {
        messages::info(msg);
    }
    fn success(&mut self, msg: &str) {
        messages::success(msg);
    }
    fn warning(&mut self, msg: &str) {
        messages::warning(msg);
    }
    fn error(&mut self, msg: &str) {
        messages::error(msg);
    }
    fn line(&mut self, msg: &str) {
        println!("{msg}");
    }
}

/// Collects every reported line, prefixed with its level.
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub lines: Vec<String>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|l| l.contains(needle))
    }
}

impl Reporter for MemoryReporter {
    fn info(&mut self, msg: &str) {
        self.lines.push(format!("INFO {msg}"));
    }
    fn success(&mut self, msg: &str) {
        self.lines.push(format!("OK {msg}"));
    }
    fn warning(&mut self, msg: &str) {
        self.lines.push(format!("WARN {msg}"));
    }
    fn error(&mut self, msg: &str) {
        self.lines.push(format!("ERROR {msg}"));
    }
    fn line(&mut self, msg: &str) {
        self.lines.push(msg.to_string());
    }
}
