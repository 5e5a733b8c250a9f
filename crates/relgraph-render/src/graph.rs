//! The graph handle: one instance per embedded graph.
//!
//! Owns the config, the measurer and the host surface. The host forwards
//! pointer events with the block key it attached from the drawn `data-key`
//! attribute; the handle drives tooltips and the click callback from there.

use crate::layout::layout_relationship_graph;
use crate::model::RelationshipGraphLayout;
use crate::surface::Surface;
use crate::tooltip::Tooltip;
use crate::{LayoutOptions, Result};
use relgraph_core::{GraphConfig, TooltipPlacement};
use rustc_hash::FxHashSet;
use serde_json::Value;

type ClickCallback = Box<dyn FnMut(&Value)>;

pub struct RelationshipGraph<S: Surface> {
    surface: S,
    config: GraphConfig,
    options: LayoutOptions,
    on_click: Option<ClickCallback>,
    layout: Option<RelationshipGraphLayout>,
    bound_keys: FxHashSet<String>,
    bound_parents: FxHashSet<String>,
}

impl<S: Surface> RelationshipGraph<S> {
    pub fn new(surface: S, config: GraphConfig) -> Self {
        Self {
            surface,
            config,
            options: LayoutOptions::default(),
            on_click: None,
            layout: None,
            bound_keys: FxHashSet::default(),
            bound_parents: FxHashSet::default(),
        }
    }

    pub fn with_layout_options(mut self, options: LayoutOptions) -> Self {
        self.options = options;
        self
    }

    /// Installs the click callback. The default is a no-op.
    pub fn with_on_click(mut self, callback: impl FnMut(&Value) + 'static) -> Self {
        self.on_click = Some(Box::new(callback));
        self
    }

    pub fn set_on_click(&mut self, callback: impl FnMut(&Value) + 'static) {
        self.on_click = Some(Box::new(callback));
    }

    pub fn set_show_tooltip_keys(&mut self, show_keys: bool) {
        self.config.show_keys = show_keys;
    }

    /// Takes the short compass form (`n`..`nw`). Invalid directions are
    /// silently ignored. Takes effect the next time a tooltip is shown; an
    /// already-visible tooltip keeps its placement.
    pub fn set_tooltip_placement(&mut self, direction: &str) {
        if let Some(placement) = TooltipPlacement::parse(direction) {
            self.config.tooltip_placement = placement;
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// The last computed layout, if `generate` has succeeded at least once.
    pub fn layout(&self) -> Option<&RelationshipGraphLayout> {
        self.layout.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Validates, lays out and draws the given records. Validation and
    /// layout failures abort before any surface mutation, so a failed call
    /// leaves the previously drawn state intact.
    ///
    /// Re-generating diffs against the previous record set: blocks and
    /// labels that disappeared are removed, everything else is upserted in
    /// place, keyed by record identity.
    pub fn generate(&mut self, records: &[Value]) -> Result<()> {
        let layout = layout_relationship_graph(records, &self.config, &self.options)?;

        let new_keys: FxHashSet<String> = layout.blocks.iter().map(|b| b.key.clone()).collect();
        let new_parents: FxHashSet<String> =
            layout.parents.iter().map(|p| p.name.clone()).collect();

        let mut removed = 0usize;
        for stale in self.bound_keys.difference(&new_keys) {
            self.surface.remove_block(stale);
            removed += 1;
        }
        for stale in self.bound_parents.difference(&new_parents) {
            self.surface.remove_label(stale);
        }

        for label in &layout.parents {
            self.surface.upsert_label(label);
        }
        for block in &layout.blocks {
            self.surface.upsert_block(block);
        }
        self.surface.resize(layout.width, layout.height);

        tracing::debug!(
            blocks = layout.blocks.len(),
            parents = layout.parents.len(),
            removed,
            "generated relationship graph"
        );

        self.bound_keys = new_keys;
        self.bound_parents = new_parents;
        self.layout = Some(layout);
        Ok(())
    }

    /// Hover-in notification for the block with the given key. Shows the
    /// tooltip when tooltips are enabled; unknown keys are ignored.
    pub fn pointer_enter(&mut self, key: &str) {
        if !self.config.show_tooltips {
            return;
        }
        let Some(block) = self.layout.as_ref().and_then(|l| l.block_by_key(key)) else {
            return;
        };
        let tooltip = Tooltip::for_block(block, self.config.tooltip_placement, self.config.show_keys);
        self.surface.show_tooltip(&tooltip);
    }

    /// Hover-out notification.
    pub fn pointer_leave(&mut self) {
        self.surface.hide_tooltip();
    }

    /// Click notification. The tooltip is hidden before the callback runs.
    pub fn click(&mut self, key: &str) {
        self.surface.hide_tooltip();
        let Some(block) = self.layout.as_ref().and_then(|l| l.block_by_key(key)) else {
            return;
        };
        if let Some(callback) = self.on_click.as_mut() {
            callback(&block.source);
        }
    }
}
