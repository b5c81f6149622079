//! Base-locale message catalogs in the `{"key": {"message": "..."}}` shape.

use serde_json::Value;

use crate::catalog::FileEntries;

/// Nesting deeper than this is skipped with a warning.
pub const MAX_NESTING_DEPTH: usize = 64;

/// Flatten a message catalog into dotted keys.
///
/// An object with a non-empty string `message` field is an entry keyed by
/// its dotted path. Other objects (and arrays, by index) are descended into.
/// Malformed JSON yields no entries.
pub fn extract_from_message_catalog(content: &str) -> FileEntries {
    match serde_json::from_str::<Value>(content) {
        Ok(value) => flatten_messages(&value),
        Err(e) => {
            tracing::warn!(error = %e, "failed to parse message catalog");
            FileEntries::new()
        }
    }
}

/// Iterative depth-first walk; entries come out in document order.
pub fn flatten_messages(root: &Value) -> FileEntries {
    let mut entries = FileEntries::new();
    let mut stack: Vec<(String, &Value, usize)> = Vec::new();
    push_children(&mut stack, "", root, 0);

    while let Some((path, value, depth)) = stack.pop() {
        if let Some(message) = message_of(value) {
            entries.insert(path, message.to_string());
            continue;
        }

        if depth >= MAX_NESTING_DEPTH {
            tracing::warn!(key = %path, "message catalog nested too deeply, skipping");
            continue;
        }

        push_children(&mut stack, &path, value, depth + 1);
    }

    entries
}

fn message_of(value: &Value) -> Option<&str> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
}

fn push_children<'a>(
    stack: &mut Vec<(String, &'a Value, usize)>,
    prefix: &str,
    value: &'a Value,
    depth: usize,
) {
    let join = |key: &str| {
        if prefix.is_empty() {
            key.to_string()
        } else {
            format!("{}.{}", prefix, key)
        }
    };

    // pushed in reverse so the first child is popped first
    match value {
        Value::Object(map) => {
            for (key, child) in map.iter().rev() {
                if is_container(child) {
                    stack.push((join(key), child, depth));
                }
            }
        }
        Value::Array(items) => {
            for (index, child) in items.iter().enumerate().rev() {
                if is_container(child) {
                    stack.push((join(&index.to_string()), child, depth));
                }
            }
        }
        _ => {}
    }
}

fn is_container(value: &Value) -> bool {
    matches!(value, Value::Object(_) | Value::Array(_))
}
