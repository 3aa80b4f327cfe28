//! Thin JSON helper exercise.
//!
//! Two narrow wrappers over [`serde_json`]: one to render any serializable
//! value as a JSON string, one to parse a JSON string into any
//! deserializable type. This is deliberately not a serialization framework;
//! the helpers exist so callers deal with exactly one error type and one
//! function per direction.

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from the JSON helpers, wrapping the underlying [`serde_json`]
/// error with the direction that failed.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The value could not be rendered as JSON (e.g. a map with non-string
    /// keys, or a non-finite float behind a format that rejects them).
    #[error("failed to serialize value to JSON")]
    Serialize(#[source] serde_json::Error),

    /// The text was not valid JSON, or did not match the target type.
    #[error("failed to parse JSON")]
    Parse(#[source] serde_json::Error),
}

/// Render `value` as a compact JSON string.
///
/// # Errors
///
/// [`JsonError::Serialize`] if `value`'s `Serialize` implementation fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(JsonError::Serialize)
}

/// Parse `text` as JSON into a `T`.
///
/// # Errors
///
/// [`JsonError::Parse`] if `text` is not valid JSON or does not match the
/// shape of `T`.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::Parse)
}
