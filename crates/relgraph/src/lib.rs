#![forbid(unsafe_code)]

//! `relgraph` renders relationship graphs: flat child records grouped by a
//! `parent` key, laid out as wrapped rows of colored blocks behind a column
//! of parent labels, with tooltip content and click callback plumbing.
//!
//! The crate is headless. Records are `serde_json::Value` objects with three
//! required fields (`parent`, `color` in `0..=3`, `parentColor` in `0..=4`)
//! plus any display fields, which is what tooltips show.
//!
//! # Features
//!
//! - `render` (default): enable layout + SVG rendering (`relgraph::render`)

pub use relgraph_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use relgraph_render::graph::RelationshipGraph;
    pub use relgraph_render::layout::layout_relationship_graph;
    pub use relgraph_render::model::RelationshipGraphLayout;
    pub use relgraph_render::surface::{Surface, SvgSurface};
    pub use relgraph_render::svg::{SvgRenderOptions, render_relationship_graph_svg};
    pub use relgraph_render::text::{DeterministicTextMeasurer, TextMeasurer};
    pub use relgraph_render::tooltip::{Tooltip, TooltipRow, tooltip_rows};
    pub use relgraph_render::LayoutOptions;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Core(#[from] relgraph_core::Error),
        #[error(transparent)]
        Render(#[from] relgraph_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// One-shot convenience: validate, lay out and render records straight
    /// to an SVG string with default options.
    pub fn generate_svg(
        records: &[serde_json::Value],
        config: &relgraph_core::GraphConfig,
    ) -> Result<String> {
        let layout = layout_relationship_graph(records, config, &LayoutOptions::default())?;
        Ok(render_relationship_graph_svg(
            &layout,
            &SvgRenderOptions::default(),
        ))
    }
}
