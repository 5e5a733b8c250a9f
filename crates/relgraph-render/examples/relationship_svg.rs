use relgraph_core::GraphConfig;
use relgraph_render::svg::{SvgRenderOptions, render_relationship_graph_svg};
use relgraph_render::{LayoutOptions, layout_relationship_graph};
use serde_json::Value;
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("read stdin");

    let records: Vec<Value> = serde_json::from_str(&input).expect("records json");
    let layout =
        layout_relationship_graph(&records, &GraphConfig::default(), &LayoutOptions::default())
            .expect("layout ok");

    let svg = render_relationship_graph_svg(&layout, &SvgRenderOptions::default());
    print!("{svg}");
}
