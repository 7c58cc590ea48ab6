//! Response envelope unwrapping.
//!
//! API endpoints return either a raw payload (array or object) or a wrapper
//! of the form `{"success": bool, "data": ...}`. Unwrapping always yields the
//! inner payload, and leaves anything that is not a wrapper untouched.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::Error;

/// Extracts the `data` field from a `{success, data}` wrapper, or returns the
/// value unchanged when it is not a wrapper. A wrapper must carry both keys;
/// an object with only one of them is treated as a raw payload.
pub fn unwrap_envelope(value: Value) -> Value {
    if let Value::Object(mut map) = value {
        if map.contains_key("success") {
            if let Some(data) = map.remove("data") {
                return data;
            }
        }
        return Value::Object(map);
    }
    value
}

/// Parses a response body, unwraps the envelope, and deserializes the payload.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let value = serde_json::from_str::<Value>(body).map_err(|e| {
        tracing::error!("failed to parse response body: {} | body: {}", e, snippet(body));
        Error::Decode(e.to_string())
    })?;
    let payload = unwrap_envelope(value);
    serde_json::from_value(payload).map_err(|e| {
        tracing::error!("response payload has unexpected shape: {}", e);
        Error::Decode(e.to_string())
    })
}

/// Truncates a body for log output.
pub(crate) fn snippet(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
