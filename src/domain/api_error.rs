//! Error-message extraction shared by the proxy and the HTTP client.

use serde_json::Value;

/// Pull a human-readable error message out of an upstream JSON error body.
///
/// Looks at `detail`, then `error` (string or `{ "message": .. }`), then `message`.
/// Non-string fields are skipped.
pub fn extract_error_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return Some(detail.to_string());
    }

    if let Some(error) = body.get("error") {
        if let Some(msg) = error.as_str() {
            return Some(msg.to_string());
        }
        if let Some(msg) = error.get("message").and_then(Value::as_str) {
            return Some(msg.to_string());
        }
    }

    body.get("message").and_then(Value::as_str).map(ToOwned::to_owned)
}
