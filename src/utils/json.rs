//! Path lookups over a parsed `serde_json::Value` with type coercion and
//! fallback defaults.
//!
//! Every helper takes the node to start from, a path of object keys, and a
//! default that is returned when the path is missing or the value found there
//! cannot be coerced to the requested type.

use serde_json::Value;

/// Walks `path` through nested objects, returning `None` as soon as a key is
/// missing or an intermediate value is not an object. `null` counts as missing.
pub fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let found = path
        .iter()
        .try_fold(value, |node, key| node.as_object()?.get(*key))?;

    if found.is_null() {
        None
    } else {
        Some(found)
    }
}

/// Textual form of a scalar. Containers and `null` have none.
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

pub fn as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f.trunc() as i64)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().map(|f| f.trunc() as i64))
        }
        _ => None,
    }
}

pub fn as_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

pub fn text_or(value: &Value, path: &[&str], default: &str) -> String {
    lookup(value, path)
        .and_then(as_text)
        .unwrap_or_else(|| default.to_string())
}

pub fn f64_or(value: &Value, path: &[&str], default: f64) -> f64 {
    lookup(value, path).and_then(as_f64).unwrap_or(default)
}

pub fn i64_or(value: &Value, path: &[&str], default: i64) -> i64 {
    lookup(value, path).and_then(as_i64).unwrap_or(default)
}

pub fn bool_or(value: &Value, path: &[&str], default: bool) -> bool {
    lookup(value, path).and_then(as_bool).unwrap_or(default)
}

/// Non-empty array found at `path`, if any.
pub fn non_empty_array<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    lookup(value, path)
        .and_then(Value::as_array)
        .filter(|items| !items.is_empty())
}

/// Non-empty object found at `path`, if any.
pub fn non_empty_object<'a>(
    value: &'a Value,
    path: &[&str],
) -> Option<&'a serde_json::Map<String, Value>> {
    lookup(value, path)
        .and_then(Value::as_object)
        .filter(|map| !map.is_empty())
}

/// First element of the array at `path` rendered as text.
pub fn first_text_or(value: &Value, path: &[&str], default: &str) -> String {
    non_empty_array(value, path)
        .and_then(|items| as_text(&items[0]))
        .unwrap_or_else(|| default.to_string())
}

/// All elements of the array at `path`, rendered as text and joined.
pub fn join_array_or(value: &Value, path: &[&str], separator: &str, default: &str) -> String {
    match non_empty_array(value, path) {
        Some(items) => join_texts(items.iter(), separator),
        None => default.to_string(),
    }
}

/// All values of the object at `path` in document order, rendered as text and
/// joined.
pub fn join_values_or(value: &Value, path: &[&str], separator: &str, default: &str) -> String {
    match non_empty_object(value, path) {
        Some(map) => join_texts(map.values(), separator),
        None => default.to_string(),
    }
}

fn join_texts<'a>(values: impl Iterator<Item = &'a Value>, separator: &str) -> String {
    values
        .map(|v| as_text(v).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(separator)
}
