//! Coloured one-line status messages for the terminal.

use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

/// Style of a status line: colour and leading icon.
#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }

    fn render(self, msg: &dyn Display) -> String {
        let (color, icon) = self.style();
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    }
}

pub fn info<T: Display>(msg: T) {
    println!("{}", Level::Info.render(&msg));
}

pub fn success<T: Display>(msg: T) {
    println!("{}", Level::Success.render(&msg));
}

/// Warnings stay on stdout next to the sync progress they qualify.
pub fn warning<T: Display>(msg: T) {
    println!("{}", Level::Warning.render(&msg));
}

pub fn error<T: Display>(msg: T) {
    eprintln!("{}", Level::Error.render(&msg));
}

/// Banner line made of `ch`, e.g. the `====` frame around a sync run.
pub fn rule(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}
