//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the store.

pub mod prompt;
pub mod report;
pub mod transaction;

pub use report::handle_report_command;
pub use transaction::{handle_add_command, AddArgs};
