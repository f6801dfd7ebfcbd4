//! Expense models
//!
//! Two independent schemas meet here: the Spanish field names the stats
//! webhook returns for existing expenses, and the English names the ingest
//! webhook expects for new ones.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::lenient;

/// Backend-assigned expense identifier
///
/// Kept as the raw JSON value (string or number) so it can be echoed back
/// to the delete webhook exactly as it was received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Value);

impl ExpenseId {
    /// Wrap a raw JSON value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse an identifier typed by the user: integers become JSON numbers
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        match input.parse::<i64>() {
            Ok(n) => Self(Value::from(n)),
            Err(_) => Self(Value::String(input.to_string())),
        }
    }

    /// Whether the backend omitted the identifier
    pub fn is_missing(&self) -> bool {
        self.0.is_null()
    }

    /// Borrow the raw value
    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

impl From<i64> for ExpenseId {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

impl From<&str> for ExpenseId {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_string()))
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            Value::Null => write!(f, "-"),
            other => write!(f, "{}", other),
        }
    }
}

/// People who share the expenses
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum Payer {
    #[default]
    Ricky,
    Rosa,
}

impl Payer {
    /// All payers in selector order
    pub const ALL: [Payer; 2] = [Payer::Ricky, Payer::Rosa];

    /// Display name (also the wire value)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ricky => "Ricky",
            Self::Rosa => "Rosa",
        }
    }

    /// The other payer
    pub fn toggle(self) -> Self {
        match self {
            Self::Ricky => Self::Rosa,
            Self::Rosa => Self::Ricky,
        }
    }
}

impl fmt::Display for Payer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Spending categories offered by the form
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
pub enum Category {
    #[default]
    Super,
    Mascota,
    Casa,
    Ocio,
}

impl Category {
    /// All categories in selector order
    pub const ALL: [Category; 4] = [
        Category::Super,
        Category::Mascota,
        Category::Casa,
        Category::Ocio,
    ];

    /// Display name (also the wire value)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Super => "Super",
            Self::Mascota => "Mascota",
            Self::Casa => "Casa",
            Self::Ocio => "Ocio",
        }
    }

    /// Icon shown in the category selector
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Super => "🛒",
            Self::Mascota => "🐾",
            Self::Casa => "🏠",
            Self::Ocio => "🎮",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|c| *c == self).unwrap_or(0)
    }

    /// Next category, wrapping around
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around
    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An expense as listed by the stats webhook
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default)]
    pub id: ExpenseId,

    #[serde(rename = "concepto", default, deserialize_with = "lenient::text")]
    pub concept: String,

    /// `None` when the backend sent something other than a number
    #[serde(rename = "cantidad", default, deserialize_with = "lenient::number")]
    pub amount: Option<f64>,

    #[serde(rename = "pagador", default, deserialize_with = "lenient::text")]
    pub payer: String,

    #[serde(rename = "categoria", default, deserialize_with = "lenient::text")]
    pub category: String,

    /// Raw date string as sent by the backend
    #[serde(rename = "fecha", default, deserialize_with = "lenient::text")]
    pub date: String,
}

/// Payload for the ingest webhook
///
/// `amount` is not validated: an unparsable amount is `NaN`, which
/// serde_json writes as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewExpense {
    pub payer: Payer,
    pub amount: f64,
    pub concept: String,
    pub category: Category,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transaction_from_backend_names() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": 42,
            "concepto": "Mercadona",
            "cantidad": 53.2,
            "pagador": "Rosa",
            "categoria": "Super",
            "fecha": "2024-01-03"
        }))
        .unwrap();

        assert_eq!(txn.id, ExpenseId::from(42));
        assert_eq!(txn.concept, "Mercadona");
        assert_eq!(txn.amount, Some(53.2));
        assert_eq!(txn.payer, "Rosa");
        assert_eq!(txn.date, "2024-01-03");
    }

    #[test]
    fn test_transaction_tolerates_bad_amount_and_missing_fields() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": "abc-1",
            "cantidad": "doce"
        }))
        .unwrap();

        assert_eq!(txn.id, ExpenseId::from("abc-1"));
        assert_eq!(txn.amount, None);
        assert!(txn.concept.is_empty());
        assert!(txn.date.is_empty());
    }

    #[test]
    fn test_missing_id_is_null() {
        let txn: Transaction = serde_json::from_value(json!({"concepto": "x"})).unwrap();
        assert!(txn.id.is_missing());
        assert_eq!(txn.id.to_string(), "-");
    }

    #[test]
    fn test_expense_id_parse() {
        assert_eq!(ExpenseId::parse("17").as_value(), &json!(17));
        assert_eq!(ExpenseId::parse(" rec_9 ").as_value(), &json!("rec_9"));
        assert_eq!(ExpenseId::parse("17").to_string(), "17");
    }

    #[test]
    fn test_new_expense_wire_format() {
        let expense = NewExpense {
            payer: Payer::Rosa,
            amount: 12.5,
            concept: "Pienso".into(),
            category: Category::Mascota,
        };
        let value = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            value,
            json!({"payer": "Rosa", "amount": 12.5, "concept": "Pienso", "category": "Mascota"})
        );
    }

    #[test]
    fn test_nan_amount_serializes_as_null() {
        let expense = NewExpense {
            payer: Payer::Ricky,
            amount: f64::NAN,
            concept: "Luz".into(),
            category: Category::Casa,
        };
        let body = serde_json::to_string(&expense).unwrap();
        assert!(body.contains("\"amount\":null"));
    }

    #[test]
    fn test_selector_cycling() {
        assert_eq!(Payer::Ricky.toggle(), Payer::Rosa);
        assert_eq!(Category::Ocio.next(), Category::Super);
        assert_eq!(Category::Super.prev(), Category::Ocio);
        assert_eq!(Category::Mascota.next(), Category::Casa);
    }
}
