//! CSS class fills to inline `fill` attributes.
//!
//! Some image editors (Aseprite among them) ignore `<style>` rules, so the
//! class colors are written onto each `<path>` and `<g>` directly.

use crate::markup::style::{strip_style_blocks, ClassColors};
use crate::markup::{collapse_whitespace, scan_tags, splice, Tag};
use tracing::debug;

/// Replace class-based fills with inline `fill` attributes.
///
/// The first `<style>` block supplies the class colors and every style block
/// is removed. On `<path>` and `<g>` tags the `class` attribute is dropped; a
/// `fill` is appended from the first listed class that has a color, unless
/// the tag already carries its own `fill`. Whitespace in the result is
/// collapsed.
pub fn inline(svg: &str) -> String {
    let colors = ClassColors::from_svg(svg);
    debug!(classes = colors.len(), "collected class fills");

    let svg = strip_style_blocks(svg);

    let edits: Vec<_> = scan_tags(&svg)
        .into_iter()
        .filter(|tag| matches!(tag.name, "path" | "g"))
        .filter(|tag| tag.attrs.iter().any(|a| a.name == "class"))
        .map(|tag| (tag.span.clone(), rewrite_tag(&tag, &colors)))
        .collect();
    debug!(tags = edits.len(), "rewrote classed tags");

    collapse_whitespace(&splice(&svg, &edits))
}

fn rewrite_tag(tag: &Tag<'_>, colors: &ClassColors) -> String {
    let class_attr = tag.attrs.iter().find(|a| a.name == "class");
    let fill = class_attr.and_then(|a| colors.resolve(a.value.split_whitespace()));
    let has_inline_fill = tag
        .attrs
        .iter()
        .any(|a| a.name != "class" && a.name.eq_ignore_ascii_case("fill"));

    // Cut every class attribute out of the raw attribute text
    let class_spans: Vec<_> = tag
        .attrs
        .iter()
        .filter(|a| a.name == "class")
        .map(|a| (a.span.start - tag.attr_offset..a.span.end - tag.attr_offset, String::new()))
        .collect();
    let mut attrs = splice(tag.attr_text, &class_spans);

    if let (Some(color), false) = (fill, has_inline_fill) {
        attrs.push_str(&format!(r#" fill="{}""#, color));
    }

    let attrs = collapse_whitespace(&attrs);
    let closing = if tag.self_closing { "/" } else { "" };
    if attrs.is_empty() {
        format!("<{}{}>", tag.name, closing)
    } else {
        format!("<{} {}{}>", tag.name, attrs, closing)
    }
}
