//! Display formatting utilities
//!
//! Formatting shared by the TUI and the CLI: dates, amounts, metrics,
//! status and payer styling, and plain-text snapshot output.

pub mod format;
pub mod snapshot;
pub mod style;

pub use format::{
    format_amount, format_date, format_metric, format_percentage, parse_amount, progress_ratio,
    truncate,
};
pub use snapshot::{format_snapshot_summary, format_transaction_table};
pub use style::{payer_accent, payer_color, progress_color, status_style, StatusStyle};
