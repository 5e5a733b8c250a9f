//! Tooltip content construction.
//!
//! A tooltip shows the caller's display fields for one record. Bookkeeping
//! fields (`parent`, `color`, `parentColor`, plus the grid coordinates) are
//! skipped no matter how the record cases them.

use crate::model::BlockLayout;
use relgraph_core::TooltipPlacement;
use relgraph_core::record::is_reserved_field;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipRow {
    /// Present when key display is enabled.
    pub key: Option<String>,
    pub value: String,
}

/// A tooltip ready for the host surface: content rows plus the anchor point
/// on the hovered block's edge for the requested placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tooltip {
    pub rows: Vec<TooltipRow>,
    pub anchor_x: f64,
    pub anchor_y: f64,
    pub placement: TooltipPlacement,
}

impl Tooltip {
    pub fn for_block(block: &BlockLayout, placement: TooltipPlacement, show_keys: bool) -> Self {
        let (anchor_x, anchor_y) = anchor_point(block, placement);
        Self {
            rows: tooltip_rows(&block.source, show_keys),
            anchor_x,
            anchor_y,
            placement,
        }
    }
}

/// Builds the display rows for one record in field order, skipping reserved
/// fields case-insensitively. With `show_keys` each row carries its key;
/// otherwise only values are shown.
pub fn tooltip_rows(record: &Value, show_keys: bool) -> Vec<TooltipRow> {
    let Some(map) = record.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter(|(key, _)| !is_reserved_field(key))
        .map(|(key, value)| TooltipRow {
            key: show_keys.then(|| key.clone()),
            value: display_value(value),
        })
        .collect()
}

/// Scalars print bare (no JSON quoting around strings); compound values fall
/// back to compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

fn anchor_point(block: &BlockLayout, placement: TooltipPlacement) -> (f64, f64) {
    let left = block.x;
    let right = block.x + block.size;
    let top = block.y;
    let bottom = block.y + block.size;
    let center_x = block.x + block.size / 2.0;
    let center_y = block.y + block.size / 2.0;
    match placement {
        TooltipPlacement::North => (center_x, top),
        TooltipPlacement::NorthEast => (right, top),
        TooltipPlacement::East => (right, center_y),
        TooltipPlacement::SouthEast => (right, bottom),
        TooltipPlacement::South => (center_x, bottom),
        TooltipPlacement::SouthWest => (left, bottom),
        TooltipPlacement::West => (left, center_y),
        TooltipPlacement::NorthWest => (left, top),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reserved_fields_are_excluded_case_insensitively() {
        let record = json!({
            "Parent": "a",
            "COLOR": 1,
            "parentcolor": 2,
            "Row": 1,
            "INDEX": 2,
            "name": "build",
            "owner": "infra",
        });
        let rows = tooltip_rows(&record, true);
        let keys: Vec<&str> = rows.iter().filter_map(|r| r.key.as_deref()).collect();
        assert_eq!(keys, vec!["name", "owner"]);
    }

    #[test]
    fn show_keys_toggles_the_key_column() {
        let record = json!({ "parent": "a", "color": 0, "parentColor": 0, "name": "x" });
        let with_keys = tooltip_rows(&record, true);
        assert_eq!(with_keys[0].key.as_deref(), Some("name"));
        let without = tooltip_rows(&record, false);
        assert_eq!(without[0].key, None);
        assert_eq!(without[0].value, "x");
    }

    #[test]
    fn string_values_print_bare_and_compounds_as_json() {
        let record = json!({ "parent": "a", "label": "hello", "tags": ["x", "y"], "n": 3 });
        let rows = tooltip_rows(&record, true);
        let by_key = |k: &str| {
            rows.iter()
                .find(|r| r.key.as_deref() == Some(k))
                .expect("row")
                .value
                .clone()
        };
        assert_eq!(by_key("label"), "hello");
        assert_eq!(by_key("tags"), r#"["x","y"]"#);
        assert_eq!(by_key("n"), "3");
    }

    #[test]
    fn anchor_defaults_to_the_west_edge_center() {
        let block = BlockLayout {
            key: "k".to_string(),
            parent: "a".to_string(),
            row: 1,
            index: 1,
            x: 100.0,
            y: 40.0,
            size: 24.0,
            fill: "#000".to_string(),
            source: json!({ "parent": "a" }),
        };
        let tip = Tooltip::for_block(&block, TooltipPlacement::West, true);
        assert_eq!((tip.anchor_x, tip.anchor_y), (100.0, 52.0));
    }
}
