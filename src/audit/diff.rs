//! Diff generation for audit logging
//!
//! Summarizes which top-level fields changed between two JSON values.

use serde_json::Value;

/// Longest string value shown verbatim in a diff
const MAX_VALUE_CHARS: usize = 50;

/// Generate a human-readable diff between two JSON values
///
/// Only top-level field changes are reported. Returns `None` when nothing
/// changed.
pub fn generate_diff(before: &Value, after: &Value) -> Option<String> {
    match (before, after) {
        (Value::Object(before_obj), Value::Object(after_obj)) => {
            let mut changes = Vec::new();

            for (key, before_val) in before_obj {
                match after_obj.get(key) {
                    Some(after_val) if before_val != after_val => changes.push(format!(
                        "{}: {} -> {}",
                        key,
                        format_value(before_val),
                        format_value(after_val)
                    )),
                    Some(_) => {}
                    None => changes.push(format!(
                        "{}: {} -> (removed)",
                        key,
                        format_value(before_val)
                    )),
                }
            }

            for (key, after_val) in after_obj {
                if !before_obj.contains_key(key) {
                    changes.push(format!("{}: (added) -> {}", key, format_value(after_val)));
                }
            }

            if changes.is_empty() {
                None
            } else {
                Some(changes.join(", "))
            }
        }
        _ if before != after => Some(format!(
            "{} -> {}",
            format_value(before),
            format_value(after)
        )),
        _ => None,
    }
}

/// Format a JSON value for human-readable display
fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > MAX_VALUE_CHARS {
                let head: String = s.chars().take(MAX_VALUE_CHARS - 3).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("[{} items]", arr.len()),
        Value::Object(obj) => format!("{{{} fields}}", obj.len()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_changed_fields_only() {
        let before = json!({"description": "Coffee", "amount": 3.5, "category": "Food & Dining"});
        let after = json!({"description": "Coffee", "amount": 4.0, "category": "Food & Dining"});

        assert_eq!(
            generate_diff(&before, &after).as_deref(),
            Some("amount: 3.5 -> 4.0")
        );
    }

    #[test]
    fn test_no_changes() {
        let value = json!({"description": "Coffee"});
        assert!(generate_diff(&value, &value).is_none());
    }

    #[test]
    fn test_added_and_removed_fields() {
        let before = json!({"description": "Bus"});
        let after = json!({"paymentMethod": "Cash"});
        let diff = generate_diff(&before, &after).unwrap();

        assert!(diff.contains("description: \"Bus\" -> (removed)"));
        assert!(diff.contains("paymentMethod: (added) -> \"Cash\""));
    }

    #[test]
    fn test_long_multibyte_strings_truncate_safely() {
        let long = "₹".repeat(80);
        let diff = generate_diff(&json!(long), &json!("short")).unwrap();
        assert!(diff.starts_with('"'));
        assert!(diff.contains("...\" -> \"short\""));
    }
}
