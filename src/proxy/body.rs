//! Best-effort reading of backend bodies.

use serde_json::Value;

use crate::error::GENERIC_ERROR_MESSAGE;

/// Parse JSON, falling back to `Value::Null` for empty or non-JSON bytes.
pub fn json_or_null(bytes: &[u8]) -> Value {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Value::Null;
    }
    serde_json::from_slice(bytes).unwrap_or(Value::Null)
}

/// Pull a human readable message out of a backend error body.
///
/// Looks at `message` (string, or list of strings) then `error`; anything
/// else gives the generic message.
pub fn error_message(bytes: &[u8]) -> String {
    let body = json_or_null(bytes);

    match body.get("message") {
        Some(Value::String(message)) if !message.trim().is_empty() => return message.clone(),
        Some(Value::Array(messages)) => {
            let joined = messages
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join("; ");
            if !joined.is_empty() {
                return joined;
            }
        }
        _ => {}
    }

    match body.get("error") {
        Some(Value::String(error)) if !error.trim().is_empty() => error.clone(),
        _ => GENERIC_ERROR_MESSAGE.to_string(),
    }
}
