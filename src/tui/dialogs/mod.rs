//! Modal dialogs for the TUI

pub mod help;
pub mod message;
