pub mod app;
pub mod commands;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{CalendarTarget, Cli, Commands, LogLevel};
