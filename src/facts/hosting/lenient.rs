//! Field deserializers that tolerate malformed API payloads.
//!
//! A field of the wrong shape is treated as absent instead of failing the whole record, and a
//! list drops the elements it cannot decode instead of failing the whole list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

const LOG_TARGET: &str = "   hosting";

/// Decode an optional field, treating `null` or a value of the wrong type as absent
pub fn or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Decode a field, falling back to its default when the value has the wrong type
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Record that a key is present, whatever its value, including an explicit `null`
pub fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Decode a list, skipping elements that cannot be decoded; a non-list decodes as empty
pub fn skip_invalid<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(decode_each(value))
}

/// Decode every element of a JSON array that has the expected shape
pub fn decode_each<T: DeserializeOwned>(value: Value) -> Vec<T> {
    match value {
        Value::Array(values) => values
            .into_iter()
            .filter_map(|v| match serde_json::from_value(v) {
                Ok(item) => Some(item),
                Err(e) => {
                    log::debug!(target: LOG_TARGET, "Skipping malformed list element: {e}");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}
