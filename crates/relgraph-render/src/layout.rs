//! Grouping and wrapped-grid layout.
//!
//! Records are stable-sorted by `parent` so each group is contiguous, then a
//! single pass assigns global 1-based `(row, index)` coordinates: a parent
//! change always starts a new row, and a row wraps once `index` would exceed
//! the effective column limit.

use crate::model::{BlockLayout, Bounds, ParentLabelLayout, RelationshipGraphLayout};
use crate::text::{TextMeasurer as _, TextStyle};
use crate::{LayoutOptions, Result};
use indexmap::IndexMap;
use relgraph_core::{GraphConfig, record, theme, utils, verify};
use rustc_hash::FxHashMap;
use serde_json::Value;

/// Space kept around the drawn content when sizing the overall canvas.
pub const CANVAS_MARGIN: f64 = 15.0;

/// Horizontal space reserved before deriving the column limit from the
/// available width.
pub const AUTO_WIDTH_MARGIN: f64 = 25.0;

/// Font used for parent labels. The same style must be used when a host
/// measures label text itself, or blocks and labels will overlap.
pub fn label_style() -> TextStyle {
    TextStyle {
        font_family: Some("Helvetica, Arial, sans-serif".to_string()),
        font_size: 13.0,
        font_weight: None,
    }
}

/// Resolves the effective column limit. A configured nonzero value wins;
/// otherwise the limit is derived from the available width. Degenerate
/// configs (zero or negative result) are an error, never a division by zero
/// or an endless wrap loop.
pub fn calculated_max_children(config: &GraphConfig) -> Result<u32> {
    if !(config.block_size > 0.0) {
        return Err(relgraph_core::Error::InvalidLayoutConfig {
            message: format!("block size must be > 0, got {}", config.block_size),
        }
        .into());
    }
    if config.max_child_count > 0 {
        return Ok(config.max_child_count);
    }
    let derived = ((config.available_width - AUTO_WIDTH_MARGIN) / config.block_size).floor();
    if derived < 1.0 {
        return Err(relgraph_core::Error::InvalidLayoutConfig {
            message: format!(
                "available width {} is too narrow for block size {}",
                config.available_width, config.block_size
            ),
        }
        .into());
    }
    Ok(derived as u32)
}

/// The sizing string for one parent label. The trailing spaces are part of
/// the measured text and provide the gap between labels and blocks.
fn sizing_label(abbreviated: &str, count: usize) -> String {
    format!("{abbreviated}   ({count})   ")
}

/// Picks the longest sizing label by character count. The caller measures
/// that single string for pixels; longest-by-length is a shortcut, not a
/// widest-by-pixels guarantee.
pub fn widest_label<'a>(parents: impl IntoIterator<Item = (&'a str, usize)>) -> String {
    let mut widest = String::new();
    let mut widest_chars = 0usize;
    for (abbreviated, count) in parents {
        let label = sizing_label(abbreviated, count);
        let chars = label.chars().count();
        if chars > widest_chars {
            widest_chars = chars;
            widest = label;
        }
    }
    widest
}

/// Groups records by parent, assigns wrapped `(row, index)` coordinates and
/// computes pixel geometry. Input records are validated first and never
/// mutated; blocks come back in parent-sorted order carrying a clone of
/// their source record.
pub fn layout_relationship_graph(
    records: &[Value],
    config: &GraphConfig,
    options: &LayoutOptions,
) -> Result<RelationshipGraphLayout> {
    verify(records)?;
    let max_children = calculated_max_children(config)?;
    let block_size = config.block_size;

    let mut sorted: Vec<&Value> = records.iter().collect();
    sorted.sort_by(|a, b| {
        record::parent_of(a)
            .unwrap_or_default()
            .cmp(record::parent_of(b).unwrap_or_default())
    });

    // Counts per distinct parent, first-seen order over the sorted pass.
    // The first record of a group decides the label color.
    let mut groups: IndexMap<&str, (usize, i64)> = IndexMap::new();
    for rec in &sorted {
        let parent = record::parent_of(rec).unwrap_or_default();
        let parent_color = record::parent_color_of(rec).unwrap_or(0);
        groups.entry(parent).or_insert((0, parent_color)).0 += 1;
    }

    let abbreviated: Vec<(String, usize)> = groups
        .iter()
        .map(|(name, (count, _))| (utils::abbreviate(name), *count))
        .collect();
    let widest = widest_label(abbreviated.iter().map(|(abbr, count)| (abbr.as_str(), *count)));
    let left_offset = options.text_measurer.measure(&widest, &label_style()).width;

    // Parent labels. The vertical position of a label is the top of its
    // group's first row: sum the rows-equivalent of all preceding groups
    // (each padded to a whole multiple of the column limit), then convert
    // back to rows and pixels.
    let mc = u64::from(max_children);
    let mut parents: Vec<ParentLabelLayout> = Vec::with_capacity(groups.len());
    let mut cumulative_rows_equivalent: u64 = 0;
    for (name, &(count, parent_color)) in &groups {
        let y = cumulative_rows_equivalent.div_ceil(mc) as f64 * block_size;
        let abbreviated = utils::abbreviate(name);
        let metrics = options
            .text_measurer
            .measure(&sizing_label(&abbreviated, count), &label_style());
        parents.push(ParentLabelLayout {
            name: (*name).to_string(),
            abbreviated_name: abbreviated,
            count,
            x: 0.0,
            y,
            width: metrics.width,
            height: metrics.height,
            fill: theme::parent_fill(parent_color).to_string(),
        });
        cumulative_rows_equivalent += (count as u64).div_ceil(mc) * mc;
    }

    // Wrapped (row, index) assignment over the parent-sorted records.
    // Byte-identical records are valid input; an occurrence counter keeps
    // their identity keys distinct so every record keeps its own block.
    let mut blocks: Vec<BlockLayout> = Vec::with_capacity(sorted.len());
    let mut key_occurrences: FxHashMap<String, usize> = FxHashMap::default();
    let mut row: u32 = 1;
    let mut index: u32 = 1;
    let mut previous_parent: Option<&str> = None;
    for rec in &sorted {
        let parent = record::parent_of(rec).unwrap_or_default();
        match previous_parent {
            Some(prev) if prev == parent => {
                if index > max_children {
                    row += 1;
                    index = 1;
                }
            }
            Some(_) => {
                row += 1;
                index = 1;
            }
            None => {}
        }

        let base_key = record::canonical_key(rec);
        let occurrence = key_occurrences.entry(base_key.clone()).or_insert(0);
        let key = if *occurrence == 0 {
            base_key
        } else {
            format!("{base_key}#{occurrence}")
        };
        *occurrence += 1;

        let color = record::color_of(rec).unwrap_or(0);
        blocks.push(BlockLayout {
            key,
            parent: parent.to_string(),
            row,
            index,
            x: left_offset + f64::from(index - 1) * block_size,
            y: f64::from(row - 1) * block_size,
            size: block_size,
            fill: theme::block_fill(color).to_string(),
            source: (*rec).clone(),
        });

        index += 1;
        previous_parent = Some(parent);
    }

    let mut max_w: f64 = 0.0;
    let mut max_h: f64 = 0.0;
    for label in &parents {
        max_w = max_w.max(label.x + label.width);
        max_h = max_h.max(label.y + label.height);
    }
    for block in &blocks {
        max_w = max_w.max(block.x + block.size);
        max_h = max_h.max(block.y + block.size);
    }
    let width = max_w + CANVAS_MARGIN;
    let height = max_h + CANVAS_MARGIN;

    tracing::debug!(
        records = records.len(),
        parents = parents.len(),
        max_children,
        width,
        height,
        "computed relationship graph layout"
    );

    Ok(RelationshipGraphLayout {
        bounds: Bounds::from_points([(0.0, 0.0), (width, height)]),
        width,
        height,
        left_offset,
        block_size,
        calculated_max_children: max_children,
        parents,
        blocks,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn widest_label_is_longest_by_characters() {
        let widest = widest_label([("aa", 1), ("aaaaaa", 2), ("bbb", 100)]);
        assert_eq!(widest, "aaaaaa   (2)   ");
    }

    #[test]
    fn auto_max_children_derives_from_available_width() {
        let config = GraphConfig {
            block_size: 24.0,
            max_child_count: 0,
            available_width: 960.0,
            ..GraphConfig::default()
        };
        // floor((960 - 25) / 24) = 38
        assert_eq!(calculated_max_children(&config).expect("derived"), 38);
    }

    #[test]
    fn too_narrow_container_is_an_error_not_a_hang() {
        let config = GraphConfig {
            block_size: 24.0,
            max_child_count: 0,
            available_width: 30.0,
            ..GraphConfig::default()
        };
        let err = calculated_max_children(&config).expect_err("too narrow");
        assert!(matches!(
            err,
            crate::Error::Core(relgraph_core::Error::InvalidLayoutConfig { .. })
        ));
    }

    #[test]
    fn zero_block_size_is_rejected() {
        let config = GraphConfig {
            block_size: 0.0,
            ..GraphConfig::default()
        };
        assert!(calculated_max_children(&config).is_err());
    }

    #[test]
    fn input_records_are_not_mutated() {
        let records = vec![json!({ "parent": "a", "color": 0, "parentColor": 0 })];
        let before = records.clone();
        layout_relationship_graph(&records, &GraphConfig::default(), &LayoutOptions::default())
            .expect("layout");
        assert_eq!(records, before);
        assert!(records[0].get("row").is_none());
    }
}
