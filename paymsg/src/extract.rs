//! Dotted-path extraction over decoded response JSON.
//!
//! Gateway responses arrive as arbitrarily nested JSON: objects, arrays, or
//! a mix of the two at any depth. The functions here resolve a dotted path
//! string (e.g. `"3DSecure.status"`) against such a structure one segment at
//! a time. A missing segment is a normal, silent case — it yields `None` (or
//! the caller's default), never an error — and whatever value is found is
//! returned untouched, with no coercion.

use serde_json::Value;

/// Resolves `path` against `data`, descending one dot-separated segment per
/// level.
///
/// Objects are descended by key; arrays by the segment parsed as a decimal
/// index. A plain, non-dotted key is a one-segment path. Returns `None` if
/// any segment is absent or the structure terminates early.
#[must_use]
pub fn get<'a>(data: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = data;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Resolves `path` and returns the string value found there, if any.
///
/// Returns `None` when the path is absent or names a non-string value.
#[must_use]
pub fn get_str<'a>(data: &'a Value, path: &str) -> Option<&'a str> {
    get(data, path).and_then(Value::as_str)
}

/// Resolves `path`, falling back to `default` when the path is absent.
#[must_use]
pub fn get_or<'a>(data: &'a Value, path: &str, default: &'a Value) -> &'a Value {
    get(data, path).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_key() {
        let data = json!({"status": "Ok"});
        assert_eq!(get(&data, "status"), Some(&json!("Ok")));
    }

    #[test]
    fn test_nested_object_path() {
        let data = json!({"3DSecure": {"status": "Authenticated"}});
        assert_eq!(get_str(&data, "3DSecure.status"), Some("Authenticated"));
    }

    #[test]
    fn test_array_index_segment() {
        let data = json!({"errors": [{"code": 1003}, {"code": 1004}]});
        assert_eq!(get(&data, "errors.1.code"), Some(&json!(1004)));
    }

    #[test]
    fn test_missing_intermediate_segment_is_silent() {
        let data = json!({"outer": {"inner": 1}});
        assert_eq!(get(&data, "outer.missing.deeper"), None);
        assert_eq!(get(&data, "absent"), None);
    }

    #[test]
    fn test_structure_terminates_early() {
        let data = json!({"status": "Ok"});
        assert_eq!(get(&data, "status.code"), None);
    }

    #[test]
    fn test_no_type_coercion() {
        let data = json!({"amount": 999});
        assert_eq!(get(&data, "amount"), Some(&json!(999)));
        assert_eq!(get_str(&data, "amount"), None);
    }

    #[test]
    fn test_default_fallback() {
        let data = json!({});
        let default = json!("fallback");
        assert_eq!(get_or(&data, "a.b", &default), &default);
    }

    #[test]
    fn test_non_numeric_array_segment() {
        let data = json!(["a", "b"]);
        assert_eq!(get(&data, "first"), None);
        assert_eq!(get(&data, "0"), Some(&json!("a")));
    }
}
