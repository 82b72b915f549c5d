//! Document result type.
//!
//! This is the result of parsing markup text.

use crate::node::Node;
use crate::render::render_nodes;

/// The top-level node sequence of a parsed source.
///
/// # Examples
///
/// ```
/// use markup::Document;
///
/// let doc = Document::parse("<b>Hi</b>\\nthere").unwrap();
/// assert_eq!(doc.plain_text(), "Hi\nthere");
/// assert_eq!(doc.to_html(), "<b>Hi</b><br>there");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Document<'a> {
    nodes: Vec<Node<'a>>,
}

impl<'a> Document<'a> {
    /// Create a document from already parsed nodes.
    pub fn new(nodes: Vec<Node<'a>>) -> Self {
        Self { nodes }
    }

    /// Parse markup text with the default options.
    pub fn parse(source: &'a str) -> Result<Self, crate::error::MarkupError> {
        crate::parser::parse(source)
    }

    /// Get the top-level nodes.
    pub fn nodes(&self) -> &[Node<'a>] {
        &self.nodes
    }

    /// Take the top-level nodes.
    pub fn into_nodes(self) -> Vec<Node<'a>> {
        self.nodes
    }

    /// Returns true if the source produced no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Literal text with all markup stripped. Line breaks become `\n`.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            node.push_plain_text(&mut out);
        }
        out
    }

    /// Serialize to escaped HTML.
    pub fn to_html(&self) -> String {
        render_nodes(&self.nodes)
    }
}
