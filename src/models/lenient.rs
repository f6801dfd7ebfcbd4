//! Forgiving deserializers for backend payloads
//!
//! The stats webhook is not schema-checked on our side. Fields that arrive
//! with an unexpected JSON type are read as "absent" instead of failing the
//! whole snapshot.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::expense::Transaction;

/// Read a number; anything that is not a JSON number becomes `None`
pub fn number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// Read a display string; null becomes empty, scalars are stringified
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

/// Read the transaction list; a non-array means "no transactions"
pub fn transactions<'de, D>(deserializer: D) -> Result<Vec<Transaction>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
