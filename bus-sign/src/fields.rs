//! Field lookups on loosely-typed JSON.
//!
//! The Metlink API is not consistent about which keys it populates, so each
//! display field is resolved from an ordered list of candidate keys.

use serde_json::Value;

/// Whether a value counts as "set" for fallback purposes.
///
/// `null`, `false`, `0`, empty strings and empty containers do not.
pub fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a JSON value as display text. Strings are taken verbatim.
pub fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First candidate key whose value is set.
pub fn first_set<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find(|value| is_set(value))
}

/// First candidate key that is present and not `null`.
///
/// Unlike [`first_set`], an empty string stops the search.
pub fn first_non_null<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| record.get(key))
        .find(|value| !value.is_null())
}

/// [`first_set`] as display text.
pub fn first_set_text(record: &Value, keys: &[&str]) -> Option<String> {
    first_set(record, keys).map(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn first_set_skips_empty_values() {
        let record = json!({ "a": "", "b": null, "c": "x" });
        assert_eq!(first_set_text(&record, &["a", "b", "c"]), Some("x".to_string()));
    }

    #[test]
    fn first_set_respects_order() {
        let record = json!({ "a": "first", "b": "second" });
        assert_eq!(first_set_text(&record, &["b", "a"]), Some("second".to_string()));
    }

    #[test]
    fn first_set_none_when_absent() {
        assert_eq!(first_set(&json!({}), &["a"]), None);
        assert_eq!(first_set(&json!("not an object"), &["a"]), None);
    }

    #[test]
    fn first_non_null_stops_at_empty_string() {
        let record = json!({ "a": null, "b": "", "c": "x" });
        assert_eq!(first_non_null(&record, &["a", "b", "c"]), Some(&json!("")));
    }

    #[test]
    fn numbers_render_without_quotes() {
        assert_eq!(text(&json!(7958)), "7958");
        assert_eq!(text(&json!("7958")), "7958");
    }
}
