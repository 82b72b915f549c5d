//! HTML serializer.
//!
//! Turns a node tree into the markup shown in the preview pane. Only text is
//! escaped; tag output is built from validated values, so a color or size can
//! never inject markup.

use std::borrow::Cow;
use std::fmt::Write;

use crate::error::MarkupError;
use crate::node::Node;
use crate::options::ParseOptions;
use crate::parser::{parse, parse_with};

/// Parse markup and serialize it to HTML.
///
/// # Examples
///
/// ```
/// use markup::render;
///
/// assert_eq!(render("<b><i>x</i></b>").unwrap(), "<b><i>x</i></b>");
/// assert_eq!(
///     render("<size=100>x</size>").unwrap(),
///     "<span style=\"font-size:40px\">x</span>"
/// );
/// assert!(render("<b>x").is_err());
/// ```
pub fn render(source: &str) -> Result<String, MarkupError> {
    Ok(parse(source)?.to_html())
}

/// Parse markup with explicit options and serialize it to HTML.
pub fn render_with(source: &str, options: &ParseOptions) -> Result<String, MarkupError> {
    Ok(parse_with(source, options)?.to_html())
}

/// Serialize a node sequence to HTML.
pub fn render_nodes(nodes: &[Node<'_>]) -> String {
    let mut out = String::new();
    write_children(&mut out, nodes);
    out
}

fn write_node(out: &mut String, node: &Node<'_>) {
    match node {
        Node::Text { text, .. } => out.push_str(&escape_text(text)),
        Node::LineBreak { .. } => out.push_str("<br>"),
        Node::Bold { inner, .. } => {
            out.push_str("<b>");
            write_children(out, inner);
            out.push_str("</b>");
        }
        Node::Italic { inner, .. } => {
            out.push_str("<i>");
            write_children(out, inner);
            out.push_str("</i>");
        }
        Node::Color { value: None, inner, .. } | Node::Size { value: None, inner, .. } => {
            write_children(out, inner);
        }
        Node::Color {
            value: Some(color),
            inner,
            ..
        } => {
            // Writing to a String cannot fail.
            let _ = write!(out, "<span style=\"color:{color}\">");
            write_children(out, inner);
            out.push_str("</span>");
        }
        Node::Size {
            value: Some(size),
            inner,
            ..
        } => {
            let _ = write!(out, "<span style=\"font-size:{}px\">", font_size_px(*size));
            write_children(out, inner);
            out.push_str("</span>");
        }
    }
}

fn write_children(out: &mut String, nodes: &[Node<'_>]) {
    for node in nodes {
        write_node(out, node);
    }
}

/// Pixel size for a `<size=value>` tag: `floor(value * 0.4)`.
pub fn font_size_px(value: u64) -> u64 {
    // value * 2 / 5 never exceeds u64::MAX once divided.
    (u128::from(value) * 2 / 5) as u64
}

/// Escape `&`, `<` and `>` in literal text.
///
/// Each character is replaced at most once, so entities already present in
/// the input (`&amp;`) have their ampersand escaped rather than being left
/// alone or escaped twice.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>']) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
