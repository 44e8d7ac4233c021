//! Field mutators
//!
//! Pure helpers that derive a new settings aggregate from an existing one
//! plus a targeted leaf change. Paths use the serialized field names, so
//! `"privacy.safeMode"` addresses the same leaf the frontend binds to.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::shared::errors::{SettingsError, SettingsResult};

/// Read the leaf value at `path`
pub fn get_field<T>(aggregate: &T, path: &str) -> SettingsResult<Value>
where
    T: Serialize,
{
    let root = serde_json::to_value(aggregate)
        .map_err(|e| SettingsError::InvalidValue {
            field: path.to_string(),
            detail: e.to_string(),
        })?;

    let mut node = &root;
    for segment in path.split('.') {
        node = match node.get(segment) {
            Some(child) => child,
            None => return Err(SettingsError::UnknownField(path.to_string())),
        };
    }

    // Sections are not readable as a whole here; only leaves are addressable
    if node.is_object() {
        return Err(SettingsError::UnknownField(path.to_string()));
    }

    Ok(node.clone())
}

/// Produce a new aggregate with the leaf at `path` replaced by `new_value`
///
/// Every sibling field keeps its value; the input aggregate is untouched.
/// Unknown paths are rejected, as are values the aggregate shape cannot
/// re-decode (e.g. a string written into a boolean field).
pub fn set_field<T>(aggregate: &T, path: &str, new_value: Value) -> SettingsResult<T>
where
    T: Serialize + DeserializeOwned,
{
    let mut root = serde_json::to_value(aggregate)
        .map_err(|e| SettingsError::InvalidValue {
            field: path.to_string(),
            detail: e.to_string(),
        })?;

    let mut segments: Vec<&str> = path.split('.').collect();
    let leaf = match segments.pop() {
        Some(leaf) => leaf,
        None => return Err(SettingsError::UnknownField(path.to_string())),
    };

    let mut node = &mut root;
    for section in segments {
        node = match node.get_mut(section) {
            Some(child) => child,
            None => return Err(SettingsError::UnknownField(path.to_string())),
        };
    }

    let slot = match node.get_mut(leaf) {
        Some(slot) => slot,
        None => return Err(SettingsError::UnknownField(path.to_string())),
    };

    // Whole sections are not assignable, only their leaves
    if slot.is_object() {
        return Err(SettingsError::UnknownField(path.to_string()));
    }

    *slot = new_value;

    serde_json::from_value(root).map_err(|e| SettingsError::InvalidValue {
        field: path.to_string(),
        detail: e.to_string(),
    })
}

/// Produce a new aggregate with the boolean leaf at `path` negated
pub fn toggle<T>(aggregate: &T, path: &str) -> SettingsResult<T>
where
    T: Serialize + DeserializeOwned,
{
    match get_field(aggregate, path)? {
        Value::Bool(current) => set_field(aggregate, path, Value::Bool(!current)),
        other => Err(SettingsError::InvalidValue {
            field: path.to_string(),
            detail: format!("expected a boolean leaf, found {}", other),
        }),
    }
}
