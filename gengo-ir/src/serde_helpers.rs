//! Serde helpers for optional strings, where an empty string means unset.

use serde::{Deserialize, Deserializer};

/// Skip predicate: `None` or `Some("")`.
pub fn is_unset(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Deserialize an optional string, reading `""` as `None`.
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.and_then(non_empty))
}

/// Drop an empty string.
pub fn non_empty(value: String) -> Option<String> {
    (!value.is_empty()).then_some(value)
}
