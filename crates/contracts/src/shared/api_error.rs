//! Extraction of human-readable messages from backend error bodies.

use serde_json::Value;

const MESSAGE_KEYS: [&str; 4] = ["message", "detail", "error", "non_field_errors"];

/// Pull a displayable message out of an error response body.
///
/// Recognized shapes, in order:
/// - `{"message": "..."}`, `{"detail": "..."}`, `{"error": "..."}`
/// - `{"non_field_errors": ["..."]}`
/// - field errors `{"name": ["This field is required."]}` → `"name: This field is required."`
/// - a plain-text body
///
/// Returns `None` for empty bodies and HTML error pages.
pub fn extract_error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) => {
            for key in MESSAGE_KEYS {
                if let Some(msg) = map.get(key).and_then(first_text) {
                    return Some(msg);
                }
            }
            map.iter()
                .find_map(|(field, v)| first_text(v).map(|msg| format!("{}: {}", field, msg)))
        }
        Ok(other) => first_text(&other),
        Err(_) if trimmed.starts_with('<') => None,
        Err(_) => Some(trimmed.to_string()),
    }
}

fn first_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Value::Array(items) => items.iter().find_map(first_text),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_keys() {
        assert_eq!(extract_error_message(r#"{"message":"Vehicle type in use"}"#).as_deref(), Some("Vehicle type in use"));
        assert_eq!(extract_error_message(r#"{"detail":"Not found."}"#).as_deref(), Some("Not found."));
        assert_eq!(extract_error_message(r#"{"non_field_errors":["Duplicate name"]}"#).as_deref(), Some("Duplicate name"));
    }

    #[test]
    fn test_field_errors() {
        assert_eq!(
            extract_error_message(r#"{"name":["This field is required."]}"#).as_deref(),
            Some("name: This field is required.")
        );
    }

    #[test]
    fn test_unusable_bodies() {
        assert_eq!(extract_error_message(""), None);
        assert_eq!(extract_error_message("<html><body>502</body></html>"), None);
        assert_eq!(extract_error_message(r#"{"code":500}"#), None);
        assert_eq!(extract_error_message("Service unavailable").as_deref(), Some("Service unavailable"));
    }
}
