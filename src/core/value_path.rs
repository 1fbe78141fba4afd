//! Dotted-path access over `serde_json::Value` trees.
//!
//! The mutation and transform layers address option fields by paths such as
//! `scales.y.ticks.stepSize`. Setters create intermediate objects so a missing
//! subtree is never an error.

use serde_json::{Map, Value};

/// Reads the value at `path`, if every segment exists.
#[must_use]
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Writes `value` at `path`, creating intermediate objects along the way.
///
/// A non-object intermediate (scalar or array in the way of the path) is
/// replaced by an object, matching the "setters never throw" contract.
pub fn set(root: &mut Value, path: &str, value: Value) {
    if !root.is_object() {
        *root = Value::Object(Map::new());
    }

    let mut current = root;
    let mut pending = Some(value);
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        let Some(map) = current.as_object_mut() else {
            return;
        };
        if segments.peek().is_none() {
            map.insert(segment.to_owned(), pending.take().unwrap_or(Value::Null));
            return;
        }
        let child = map
            .entry(segment.to_owned())
            .or_insert_with(|| Value::Object(Map::new()));
        if !child.is_object() {
            *child = Value::Object(Map::new());
        }
        current = child;
    }
}
