//! Activity logging for Cuentas Claras
//!
//! Records every webhook call and its outcome in an append-only log.
//!
//! - `ActivityEntry`: one call with timestamp, operation, outcome, and the
//!   optional expense id, payload and error message.
//! - `ActivityLogger`: writes entries to the log file using a line-delimited
//!   JSON format (JSONL).
//!
//! # Example
//!
//! ```rust,ignore
//! use cuentas_claras::audit::{ActivityEntry, ActivityLogger, Operation};
//!
//! let logger = ActivityLogger::new(paths.activity_log());
//! let entry = ActivityEntry::from_result(Operation::DeleteExpense, &result)
//!     .with_entity(id);
//! logger.log(&entry)?;
//! ```

mod entry;
mod logger;

pub use entry::{ActivityEntry, Operation, Outcome};
pub use logger::ActivityLogger;
