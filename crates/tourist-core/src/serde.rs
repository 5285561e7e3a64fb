use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::roles::Role;

/// Reads a stored `role` field without failing the whole record.
///
/// Missing, `null`, non-string and unrecognised values all become `None`.
pub fn deserialize_optional_role<'de, D>(deserializer: D) -> Result<Option<Role>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<Value> = Option::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok()))
}
