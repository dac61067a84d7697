//! CLI command handlers
//!
//! This module bridges clap argument parsing with the report engines and
//! the app context.

pub mod report;
pub mod session;
pub mod theme;

pub use report::{handle_report_command, OutputArgs, ReportCommands};
pub use session::{handle_session_command, SessionCommands};
pub use theme::{handle_theme_command, ThemeAction};
