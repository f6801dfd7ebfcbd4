//! Activity entry data structures
//!
//! Defines the operations that are recorded and the entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ClarasError;
use crate::models::ExpenseId;

/// Webhook operations that can be recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    /// GET stats
    FetchStats,
    /// POST ingest
    SubmitExpense,
    /// DELETE expense
    DeleteExpense,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::FetchStats => write!(f, "FETCH"),
            Operation::SubmitExpense => write!(f, "SUBMIT"),
            Operation::DeleteExpense => write!(f, "DELETE"),
        }
    }
}

/// Result of a recorded operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Ok,
    Failed,
}

/// A single activity log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityEntry {
    /// When the call completed (UTC)
    pub timestamp: DateTime<Utc>,

    /// Which webhook was called
    pub operation: Operation,

    /// Whether the call succeeded
    pub outcome: Outcome,

    /// Expense the call was about, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<ExpenseId>,

    /// Request body that was sent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,

    /// Error message for failed calls
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ActivityEntry {
    /// Create an entry with only the operation and outcome set
    pub fn new(operation: Operation, outcome: Outcome) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            outcome,
            entity_id: None,
            payload: None,
            error: None,
        }
    }

    /// Create an entry from a call result
    pub fn from_result<T>(operation: Operation, result: &Result<T, ClarasError>) -> Self {
        match result {
            Ok(_) => Self::new(operation, Outcome::Ok),
            Err(e) => {
                let mut entry = Self::new(operation, Outcome::Failed);
                entry.error = Some(e.to_string());
                entry
            }
        }
    }

    /// Attach the expense id
    pub fn with_entity(mut self, id: ExpenseId) -> Self {
        self.entity_id = Some(id);
        self
    }

    /// Attach the request body
    pub fn with_payload<T: Serialize>(mut self, payload: &T) -> Self {
        self.payload = serde_json::to_value(payload).ok();
        self
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let outcome = match self.outcome {
            Outcome::Ok => "ok",
            Outcome::Failed => "FAILED",
        };

        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            outcome
        );

        if let Some(id) = &self.entity_id {
            output.push_str(&format!(" id={}", id));
        }

        if let Some(payload) = &self.payload {
            output.push_str(&format!(" {}", payload));
        }

        if let Some(error) = &self.error {
            output.push_str(&format!("\n  Error: {}", error));
        }

        output
    }
}
