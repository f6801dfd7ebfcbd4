//! Budget snapshot returned by the stats webhook
//!
//! A snapshot is replaced wholesale on every successful fetch; the client
//! never merges or patches one.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::expense::{ExpenseId, Transaction};
use super::lenient;
use crate::error::{ClarasError, ClarasResult};

/// Severity levels reported by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetStatus {
    /// `VERDE`
    Green,
    /// `AMARILLO`
    Yellow,
    /// `ROJO`
    Red,
    /// Anything else the backend might send
    Unknown,
}

impl BudgetStatus {
    /// Map the backend status code (exact match)
    pub fn parse(code: &str) -> Self {
        match code {
            "VERDE" => Self::Green,
            "AMARILLO" => Self::Yellow,
            "ROJO" => Self::Red,
            _ => Self::Unknown,
        }
    }
}

/// Budget totals plus the most recent expenses
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSnapshot {
    #[serde(default, deserialize_with = "lenient::number")]
    pub total_budget: Option<f64>,

    #[serde(default, deserialize_with = "lenient::number")]
    pub total_spent: Option<f64>,

    /// Computed server-side as budget minus spent
    #[serde(default, deserialize_with = "lenient::number")]
    pub remaining: Option<f64>,

    /// Percentage of the budget used; may exceed 100
    #[serde(default, deserialize_with = "lenient::number")]
    pub percentage: Option<f64>,

    /// Raw status code (`VERDE`, `AMARILLO`, `ROJO`)
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,

    #[serde(default, deserialize_with = "lenient::text")]
    pub message: String,

    /// Most recent first; an absent or non-array field reads as empty
    #[serde(default, deserialize_with = "lenient::transactions")]
    pub transactions: Vec<Transaction>,
}

impl BudgetSnapshot {
    /// Parse a stats response body
    ///
    /// The body must be a JSON object; individual fields are read leniently.
    pub fn from_json_str(body: &str) -> ClarasResult<Self> {
        let value: Value = serde_json::from_str(body)?;
        if !value.is_object() {
            return Err(ClarasError::Json(
                "stats response is not a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Severity parsed from the status code
    pub fn budget_status(&self) -> BudgetStatus {
        BudgetStatus::parse(&self.status)
    }

    /// Whether an expense with this id is listed
    pub fn contains(&self, id: &ExpenseId) -> bool {
        self.transactions.iter().any(|t| &t.id == id)
    }
}
