pub mod messages;
pub mod reporter;

pub use reporter::{ConsoleReporter, MemoryReporter, Reporter};
