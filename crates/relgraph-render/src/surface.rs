//! The host rendering surface seam.
//!
//! A real host (browser canvas, native scene graph) implements [`Surface`]
//! and owns the drawn elements; the graph handle only issues keyed
//! upsert/remove calls, which is what gives re-`generate` its enter/exit
//! semantics. [`SvgSurface`] is the built-in headless implementation.

use crate::model::{BlockLayout, ParentLabelLayout};
use crate::svg::{self, SvgRenderOptions};
use crate::tooltip::Tooltip;
use indexmap::IndexMap;
use relgraph_core::TooltipPlacement;
use std::fmt::Write as _;

pub trait Surface {
    /// Adds or replaces the label for one parent group, keyed by parent name.
    fn upsert_label(&mut self, label: &ParentLabelLayout);
    fn remove_label(&mut self, name: &str);
    /// Adds or replaces one block, keyed by the block's record identity.
    fn upsert_block(&mut self, block: &BlockLayout);
    fn remove_block(&mut self, key: &str);
    /// Sizes the overall canvas.
    fn resize(&mut self, width: f64, height: f64);
    fn show_tooltip(&mut self, tooltip: &Tooltip);
    fn hide_tooltip(&mut self);
}

/// Retained-mode SVG surface. Keeps the current labels, blocks and tooltip
/// and re-renders the whole document on demand.
#[derive(Debug, Default)]
pub struct SvgSurface {
    labels: IndexMap<String, ParentLabelLayout>,
    blocks: IndexMap<String, BlockLayout>,
    width: f64,
    height: f64,
    block_size: f64,
    tooltip: Option<Tooltip>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn label_count(&self) -> usize {
        self.labels.len()
    }

    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    /// Renders the retained state as a standalone SVG document.
    pub fn to_svg(&self, options: &SvgRenderOptions) -> String {
        let mut out = String::new();
        svg::write_document_header(&mut out, self.width, self.height, options);

        out.push_str(r#"<g class="parents">"#);
        for label in self.labels.values() {
            svg::write_parent_label(&mut out, label, self.block_size);
        }
        out.push_str("</g>");

        out.push_str(r#"<g class="blocks">"#);
        for block in self.blocks.values() {
            svg::write_block(&mut out, block);
        }
        out.push_str("</g>");

        if let Some(tip) = &self.tooltip {
            write_tooltip(&mut out, tip);
        }

        out.push_str("</svg>\n");
        out
    }
}

fn write_tooltip(out: &mut String, tip: &Tooltip) {
    let anchor = match tip.placement {
        TooltipPlacement::East | TooltipPlacement::NorthEast | TooltipPlacement::SouthEast => {
            "start"
        }
        TooltipPlacement::West | TooltipPlacement::NorthWest | TooltipPlacement::SouthWest => "end",
        TooltipPlacement::North | TooltipPlacement::South => "middle",
    };
    let line_height = 14.0;
    let start_y = match tip.placement {
        TooltipPlacement::North | TooltipPlacement::NorthEast | TooltipPlacement::NorthWest => {
            tip.anchor_y - line_height * tip.rows.len() as f64
        }
        _ => tip.anchor_y,
    };
    out.push_str(r#"<g class="relationshipGraph-tooltip">"#);
    for (i, row) in tip.rows.iter().enumerate() {
        let text = match &row.key {
            Some(key) => format!("{key}: {}", row.value),
            None => row.value.clone(),
        };
        let _ = write!(
            out,
            r#"<text x="{x}" y="{y}" text-anchor="{anchor}">{text}</text>"#,
            x = svg::fmt(tip.anchor_x),
            y = svg::fmt(start_y + line_height * (i + 1) as f64),
            anchor = anchor,
            text = svg::escape_xml(&text),
        );
    }
    out.push_str("</g>");
}

impl Surface for SvgSurface {
    fn upsert_label(&mut self, label: &ParentLabelLayout) {
        self.labels.insert(label.name.clone(), label.clone());
    }

    fn remove_label(&mut self, name: &str) {
        self.labels.shift_remove(name);
    }

    fn upsert_block(&mut self, block: &BlockLayout) {
        self.block_size = block.size;
        self.blocks.insert(block.key.clone(), block.clone());
    }

    fn remove_block(&mut self, key: &str) {
        self.blocks.shift_remove(key);
    }

    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    fn show_tooltip(&mut self, tooltip: &Tooltip) {
        self.tooltip = Some(tooltip.clone());
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }
}
