#![forbid(unsafe_code)]

//! `relgraph-core` holds the headless data contract for relationship graphs:
//! the record shape, input validation, the graph configuration, the block
//! palette and a handful of small record helpers.
//!
//! A relationship graph groups flat child records by a `parent` key and lays
//! them out as wrapped rows of colored blocks. This crate never draws; layout
//! and rendering live in `relgraph-render`.

pub mod config;
pub mod error;
pub mod record;
pub mod theme;
pub mod utils;
pub mod verify;

pub use config::{GraphConfig, TooltipPlacement};
pub use error::{Error, Result};
pub use verify::verify;
