use crate::model::{BlockLayout, ParentLabelLayout, RelationshipGraphLayout};
use std::fmt::Write as _;

/// Corner radius of child blocks.
pub const BLOCK_CORNER_RADIUS: f64 = 4.0;

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Adds extra space around the computed viewBox.
    pub viewbox_padding: f64,
    /// Optional id used to scope the embedded stylesheet, so several graphs
    /// can live in the same document without style collisions.
    pub diagram_id: Option<String>,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            viewbox_padding: 0.0,
            diagram_id: None,
        }
    }
}

/// Renders a computed layout as a complete standalone SVG document.
///
/// Hosts that wire interactivity should key on the `data-key` attribute each
/// block carries and feed pointer events back through
/// [`crate::graph::RelationshipGraph`].
pub fn render_relationship_graph_svg(
    layout: &RelationshipGraphLayout,
    options: &SvgRenderOptions,
) -> String {
    let mut out = String::new();
    write_document_header(&mut out, layout.width, layout.height, options);

    out.push_str(r#"<g class="parents">"#);
    for label in &layout.parents {
        write_parent_label(&mut out, label, layout.block_size);
    }
    out.push_str("</g>");

    out.push_str(r#"<g class="blocks">"#);
    for block in &layout.blocks {
        write_block(&mut out, block);
    }
    out.push_str("</g>");

    out.push_str("</svg>\n");
    out
}

/// Writes the `<svg …>` root element and the scoped stylesheet. Shared by
/// the one-shot renderer and the retained surface so the preamble cannot
/// drift between the two.
pub(crate) fn write_document_header(
    out: &mut String,
    content_width: f64,
    content_height: f64,
    options: &SvgRenderOptions,
) {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("relationshipGraph");
    let diagram_id_esc = escape_xml(diagram_id);

    let pad = options.viewbox_padding.max(0.0);
    let vb_w = (content_width + pad * 2.0).max(1.0);
    let vb_h = (content_height + pad * 2.0).max(1.0);

    let _ = write!(
        out,
        r#"<svg id="{diagram_id_esc}" width="100%" xmlns="http://www.w3.org/2000/svg" viewBox="{min_x} {min_y} {w} {h}" style="max-width: {max_w}px; background-color: white;" role="graphics-document document" aria-roledescription="relationshipGraph">"#,
        min_x = fmt(-pad),
        min_y = fmt(-pad),
        w = fmt(vb_w),
        h = fmt(vb_h),
        max_w = fmt(vb_w),
    );
    let _ = write!(
        out,
        r#"<style>{}</style>"#,
        relationship_graph_css(diagram_id)
    );
}

pub(crate) fn write_parent_label(out: &mut String, label: &ParentLabelLayout, block_size: f64) {
    let _ = write!(
        out,
        r#"<text x="{x}" y="{y}" class="relationshipGraph-Text" dominant-baseline="middle" fill="{fill}">{text}</text>"#,
        x = fmt(label.x),
        y = fmt(label.y + block_size / 2.0),
        fill = escape_xml(&label.fill),
        text = escape_xml(&label.display_text()),
    );
}

pub(crate) fn write_block(out: &mut String, block: &BlockLayout) {
    let _ = write!(
        out,
        r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" rx="{r}" ry="{r}" fill="{fill}" class="relationshipGraph-block" data-key="{key}"/>"#,
        x = fmt(block.x),
        y = fmt(block.y),
        w = fmt(block.size),
        h = fmt(block.size),
        r = fmt(BLOCK_CORNER_RADIUS),
        fill = escape_xml(&block.fill),
        key = escape_xml(&block.key),
    );
}

pub(crate) fn relationship_graph_css(diagram_id: &str) -> String {
    let id = escape_xml(diagram_id);
    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"#{id} .relationshipGraph-Text{{font:13px Helvetica, Arial, sans-serif;}}#{id} .relationshipGraph-block{{stroke:none;cursor:pointer;}}"#,
    );
    out
}

pub(crate) fn fmt(v: f64) -> String {
    // Round-trippable decimal form without `-0` or tiny float noise from our
    // own calculations.
    if !v.is_finite() {
        return "0".to_string();
    }

    let mut v = if v.abs() < 1e-9 { 0.0 } else { v };
    let nearest = v.round();
    if (v - nearest).abs() < 1e-6 {
        v = nearest;
    }
    let s = v.to_string();
    if s == "-0" { "0".to_string() } else { s }
}

pub(crate) fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
