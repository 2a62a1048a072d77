/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color of an operation name in the internal log listing.
pub fn color_for_operation(op: &str) -> &'static str {
    match op {
        "sync" => GREEN,
        "init" => BLUE,
        "export" => CYAN,
        "migration_applied" => MAGENTA,
        other if other.starts_with("migrate") => MAGENTA,
        _ => RESET,
    }
}
