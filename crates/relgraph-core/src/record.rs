//! Helpers over raw JSON records.
//!
//! Records travel as `serde_json::Value` objects so callers can attach
//! arbitrary display fields next to the required `parent` / `color` /
//! `parentColor` keys.

use serde_json::{Map, Value};

/// Field names owned by the graph itself. Tooltips skip these regardless of
/// the casing used in the record.
pub const RESERVED_FIELDS: [&str; 5] = ["row", "index", "color", "parentcolor", "parent"];

pub fn parent_of(record: &Value) -> Option<&str> {
    record.get("parent")?.as_str()
}

pub fn color_of(record: &Value) -> Option<i64> {
    record.get("color")?.as_i64()
}

pub fn parent_color_of(record: &Value) -> Option<i64> {
    record.get("parentColor")?.as_i64()
}

pub fn is_reserved_field(key: &str) -> bool {
    crate::utils::array_contains(&RESERVED_FIELDS, key)
}

/// A stable identity string for a record: its JSON serialization with object
/// keys sorted at every level. Two records with the same fields and values
/// get the same key regardless of field order, which is what the renderer's
/// enter/exit diffing keys on.
pub fn canonical_key(record: &Value) -> String {
    sort_keys(record).to_string()
}

fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();
            let mut out = Map::with_capacity(map.len());
            for key in keys {
                out.insert(key.clone(), sort_keys(&map[key]));
            }
            Value::Object(out)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        other => other.clone(),
    }
}
