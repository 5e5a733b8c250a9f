#![forbid(unsafe_code)]

//! `relgraph-render` lays out and renders relationship graphs: child records
//! grouped by a `parent` key, drawn as wrapped rows of colored blocks behind
//! a column of parent labels.
//!
//! The crate is headless. Text measurement goes through the [`text::TextMeasurer`]
//! trait, drawing goes through the [`surface::Surface`] trait, and hover/click
//! events come in as plain method calls on [`graph::RelationshipGraph`]. A
//! retained [`surface::SvgSurface`] is provided for hosts that just want an
//! SVG string.

pub mod graph;
pub mod layout;
pub mod model;
pub mod surface;
pub mod svg;
pub mod text;
pub mod tooltip;

use crate::text::{DeterministicTextMeasurer, TextMeasurer};
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] relgraph_core::Error),
    #[error("record JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Clone)]
pub struct LayoutOptions {
    pub text_measurer: Arc<dyn TextMeasurer + Send + Sync>,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            text_measurer: Arc::new(DeterministicTextMeasurer::default()),
        }
    }
}

pub use graph::RelationshipGraph;
pub use layout::layout_relationship_graph;
pub use surface::{Surface, SvgSurface};
pub use svg::{SvgRenderOptions, render_relationship_graph_svg};
