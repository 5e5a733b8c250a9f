use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn from_points(points: impl IntoIterator<Item = (f64, f64)>) -> Option<Self> {
        let mut it = points.into_iter();
        let (x0, y0) = it.next()?;
        let mut b = Self {
            min_x: x0,
            min_y: y0,
            max_x: x0,
            max_y: y0,
        };
        for (x, y) in it {
            b.min_x = b.min_x.min(x);
            b.min_y = b.min_y.min(y);
            b.max_x = b.max_x.max(x);
            b.max_y = b.max_y.max(y);
        }
        Some(b)
    }
}

/// One parent label, drawn at the left edge of the graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParentLabelLayout {
    pub name: String,
    /// `name` cut to the display limit, with an ellipsis marker when cut.
    pub abbreviated_name: String,
    /// Number of child records in this group.
    pub count: usize,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: String,
}

impl ParentLabelLayout {
    /// The text drawn next to the blocks.
    pub fn display_text(&self) -> String {
        format!("{} ({})", self.abbreviated_name, self.count)
    }
}

/// One child block in the wrapped grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockLayout {
    /// Stable identity used for enter/exit diffing across `generate` calls.
    /// Duplicate records carry an occurrence suffix so each keeps its own
    /// block.
    pub key: String,
    pub parent: String,
    /// 1-based grid row, global across the whole record set.
    pub row: u32,
    /// 1-based column within the row.
    pub index: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub fill: String,
    /// The caller's record, untouched. Tooltips render from this.
    pub source: Value,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelationshipGraphLayout {
    pub bounds: Option<Bounds>,
    /// Overall canvas size, margins included.
    pub width: f64,
    pub height: f64,
    /// Where child blocks start horizontally; the measured width of the
    /// longest parent label.
    pub left_offset: f64,
    pub block_size: f64,
    /// Effective column limit per row, configured or derived. Always >= 1.
    pub calculated_max_children: u32,
    /// Parents in first-seen order over the parent-sorted records.
    pub parents: Vec<ParentLabelLayout>,
    /// Blocks in parent-sorted order, not input order.
    pub blocks: Vec<BlockLayout>,
}

impl RelationshipGraphLayout {
    pub fn block_by_key(&self, key: &str) -> Option<&BlockLayout> {
        self.blocks.iter().find(|b| b.key == key)
    }
}
