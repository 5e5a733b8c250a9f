use relgraph_core::{GraphConfig, TooltipPlacement};
use relgraph_render::RelationshipGraph;
use relgraph_render::model::{BlockLayout, ParentLabelLayout};
use relgraph_render::surface::{Surface, SvgSurface};
use relgraph_render::tooltip::Tooltip;
use serde_json::{Value, json};
use std::cell::RefCell;
use std::rc::Rc;

/// Test double that records every surface call in order.
#[derive(Default)]
struct RecordingSurface {
    ops: Rc<RefCell<Vec<String>>>,
}

impl Surface for RecordingSurface {
    fn upsert_label(&mut self, label: &ParentLabelLayout) {
        self.ops.borrow_mut().push(format!("label+ {}", label.name));
    }
    fn remove_label(&mut self, name: &str) {
        self.ops.borrow_mut().push(format!("label- {name}"));
    }
    fn upsert_block(&mut self, block: &BlockLayout) {
        self.ops
            .borrow_mut()
            .push(format!("block+ {}:{}", block.row, block.index));
    }
    fn remove_block(&mut self, _key: &str) {
        self.ops.borrow_mut().push("block-".to_string());
    }
    fn resize(&mut self, width: f64, height: f64) {
        self.ops
            .borrow_mut()
            .push(format!("resize {width}x{height}"));
    }
    fn show_tooltip(&mut self, _tooltip: &Tooltip) {
        self.ops.borrow_mut().push("tooltip+".to_string());
    }
    fn hide_tooltip(&mut self) {
        self.ops.borrow_mut().push("tooltip-".to_string());
    }
}

fn records_v1() -> Vec<Value> {
    vec![
        json!({ "parent": "a", "color": 0, "parentColor": 0, "name": "one" }),
        json!({ "parent": "a", "color": 1, "parentColor": 0, "name": "two" }),
        json!({ "parent": "b", "color": 2, "parentColor": 1, "name": "three" }),
    ]
}

fn config() -> GraphConfig {
    GraphConfig {
        max_child_count: 2,
        ..GraphConfig::default()
    }
}

#[test]
fn generate_draws_labels_blocks_and_resizes() {
    let surface = RecordingSurface::default();
    let ops = Rc::clone(&surface.ops);
    let mut graph = RelationshipGraph::new(surface, config());
    graph.generate(&records_v1()).expect("generate ok");

    let ops = ops.borrow();
    assert!(ops.contains(&"label+ a".to_string()));
    assert!(ops.contains(&"label+ b".to_string()));
    assert_eq!(ops.iter().filter(|o| o.starts_with("block+")).count(), 3);
    assert!(ops.last().unwrap().starts_with("resize"));
}

#[test]
fn regenerate_removes_vanished_blocks_and_labels() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("first generate");
    assert_eq!(graph.surface().block_count(), 3);
    assert_eq!(graph.surface().label_count(), 2);

    // Drop parent "b" entirely and one of "a"'s children.
    let next = vec![json!({ "parent": "a", "color": 0, "parentColor": 0, "name": "one" })];
    graph.generate(&next).expect("second generate");
    assert_eq!(graph.surface().block_count(), 1);
    assert_eq!(graph.surface().label_count(), 1);
}

#[test]
fn duplicate_records_each_keep_their_own_drawn_block() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    let records = vec![
        json!({ "parent": "a", "color": 0, "parentColor": 0 }),
        json!({ "parent": "a", "color": 0, "parentColor": 0 }),
    ];
    graph.generate(&records).expect("generate");

    assert_eq!(graph.layout().unwrap().blocks.len(), 2);
    assert_eq!(graph.surface().block_count(), 2);

    // Dropping one copy removes exactly one block on regenerate.
    graph.generate(&records[..1]).expect("regenerate");
    assert_eq!(graph.surface().block_count(), 1);
}

#[test]
fn regenerate_with_same_records_is_idempotent() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("first");
    let svg1 = graph.surface().to_svg(&Default::default());
    graph.generate(&records_v1()).expect("second");
    let svg2 = graph.surface().to_svg(&Default::default());
    assert_eq!(svg1, svg2);
}

#[test]
fn failed_generate_leaves_previous_state_untouched() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("first");

    let bad = vec![json!({ "parent": "a", "color": 99, "parentColor": 0 })];
    graph.generate(&bad).expect_err("invalid color");
    assert_eq!(graph.surface().block_count(), 3);
    assert_eq!(graph.surface().label_count(), 2);
}

#[test]
fn hover_shows_and_hides_the_tooltip() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("generate");

    let key = graph.layout().unwrap().blocks[0].key.clone();
    graph.pointer_enter(&key);
    assert!(graph.surface().tooltip().is_some());
    graph.pointer_leave();
    assert!(graph.surface().tooltip().is_none());
}

#[test]
fn tooltips_can_be_disabled() {
    let mut graph = RelationshipGraph::new(
        SvgSurface::new(),
        GraphConfig {
            show_tooltips: false,
            ..config()
        },
    );
    graph.generate(&records_v1()).expect("generate");
    let key = graph.layout().unwrap().blocks[0].key.clone();
    graph.pointer_enter(&key);
    assert!(graph.surface().tooltip().is_none());
}

#[test]
fn click_hides_the_tooltip_before_invoking_the_callback() {
    let surface = RecordingSurface::default();
    let ops = Rc::clone(&surface.ops);
    let clicked = Rc::new(RefCell::new(Vec::<Value>::new()));
    let clicked_sink = Rc::clone(&clicked);
    let ops_in_callback = Rc::clone(&ops);

    let mut graph = RelationshipGraph::new(surface, config()).with_on_click(move |record| {
        // The tooltip must already be gone when the callback observes state.
        assert_eq!(
            ops_in_callback.borrow().last().map(String::as_str),
            Some("tooltip-")
        );
        clicked_sink.borrow_mut().push(record.clone());
    });
    graph.generate(&records_v1()).expect("generate");

    let key = graph.layout().unwrap().blocks[2].key.clone();
    graph.pointer_enter(&key);
    graph.click(&key);

    let clicked = clicked.borrow();
    assert_eq!(clicked.len(), 1);
    assert_eq!(clicked[0].get("name"), Some(&json!("three")));
}

#[test]
fn click_without_callback_is_a_no_op() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("generate");
    let key = graph.layout().unwrap().blocks[0].key.clone();
    graph.click(&key);
    graph.click("no-such-key");
}

#[test]
fn tooltip_placement_setter_ignores_invalid_directions() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    assert_eq!(graph.config().tooltip_placement, TooltipPlacement::West);

    graph.set_tooltip_placement("se");
    assert_eq!(graph.config().tooltip_placement, TooltipPlacement::SouthEast);

    graph.set_tooltip_placement("diagonal");
    assert_eq!(graph.config().tooltip_placement, TooltipPlacement::SouthEast);
}

#[test]
fn show_tooltip_keys_toggles_the_key_column_on_the_next_tooltip() {
    let mut graph = RelationshipGraph::new(SvgSurface::new(), config());
    graph.generate(&records_v1()).expect("generate");
    let key = graph.layout().unwrap().blocks[0].key.clone();

    graph.pointer_enter(&key);
    let with_keys = graph.surface().tooltip().unwrap().rows.clone();
    assert!(with_keys.iter().all(|r| r.key.is_some()));

    graph.set_show_tooltip_keys(false);
    graph.pointer_enter(&key);
    let without = graph.surface().tooltip().unwrap().rows.clone();
    assert!(without.iter().all(|r| r.key.is_none()));
}
