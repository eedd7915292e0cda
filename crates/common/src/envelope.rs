//! The `{ "data": ... }` wrapper used by every request and response body.

use serde::de::{DeserializeOwned, Deserializer, Error as _};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON envelope carrying a payload under the `data` key.
///
/// A missing `data` key, or a `data` value that is not a JSON object
/// (`null`, a string, an array), deserializes to `T::default()`, so the
/// payload's own validation reports the missing fields instead of the body
/// failing to parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned + Default"))]
pub struct Envelope<T> {
    #[serde(default, deserialize_with = "object_or_default")]
    pub data: T,
}

fn object_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).map_err(D::Error::custom),
        _ => Ok(T::default()),
    }
}

impl<T> Envelope<T> {
    /// Wraps a payload.
    pub fn new(data: T) -> Self {
        Self { data }
    }

    /// Unwraps the payload.
    pub fn into_inner(self) -> T {
        self.data
    }
}
