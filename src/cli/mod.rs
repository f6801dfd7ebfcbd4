//! CLI command handlers
//!
//! Non-interactive access to the same three webhook calls the TUI makes,
//! plus the activity log.

pub mod activity;
pub mod expense;

pub use activity::handle_log_command;
pub use expense::{handle_add_command, handle_delete_command, handle_stats_command};
