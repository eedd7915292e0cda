//! Readers for loosely-typed request fields.
//!
//! Request drafts keep every field as raw JSON so that a wrong type is
//! reported by the owning guard with its usual message instead of failing
//! body deserialization.

use serde_json::Value;

/// Returns the field as a non-empty string.
pub(crate) fn non_empty_text(value: Option<&Value>) -> Option<&str> {
    match value {
        Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
        _ => None,
    }
}

/// Returns the value as an integer greater than zero.
///
/// Whole floats such as `3.0` count as integers.
pub(crate) fn positive_integer(value: &Value) -> Option<u64> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64()
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && *f >= 1.0 && *f <= u64::MAX as f64)
                .map(|f| f as u64)
        })
        .filter(|n| *n > 0)
}

/// Returns a client-supplied `id` if one is meaningfully present.
///
/// Absent, `null`, `false` and empty-string ids count as not supplied.
pub(crate) fn supplied_id(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
