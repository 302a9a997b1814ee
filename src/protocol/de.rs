//! Lenient field deserializers
//!
//! A field holding `null` or a value of the wrong shape reads as its default
//! instead of failing the whole body, so the translators can report it as a
//! validation error naming that field.

use serde::{de::DeserializeOwned, Deserialize, Deserializer};
use serde_json::Value;

/// Read a field, falling back to its default when the value does not fit
pub(crate) fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Read a role string, keeping a non-string value as its JSON text
pub(crate) fn raw_role<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: From<String>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(role) => Some(T::from(role)),
        other => Some(T::from(other.to_string())),
    })
}

/// Like [`raw_role`], with `null` reading as the role's default
pub(crate) fn raw_role_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    Ok(raw_role(deserializer)?.unwrap_or_default())
}
