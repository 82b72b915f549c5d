//! Node types produced by the parser.

use std::fmt;

use crate::color::Color;

/// The four tag kinds the markup understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `<b>...</b>`
    Bold,
    /// `<i>...</i>`
    Italic,
    /// `<color=...>...</color>`
    Color,
    /// `<size=...>...</size>`
    Size,
}

impl TagKind {
    /// All tag kinds, in the order end tags are tried.
    pub const ALL: [TagKind; 4] = [TagKind::Bold, TagKind::Italic, TagKind::Color, TagKind::Size];

    /// Tag name as written in markup.
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Bold => "b",
            TagKind::Italic => "i",
            TagKind::Color => "color",
            TagKind::Size => "size",
        }
    }

    /// Opening delimiter. Color and size openers stop before the optional
    /// `=value` and the closing `>`.
    pub fn opener(self) -> &'static str {
        match self {
            TagKind::Bold => "<b>",
            TagKind::Italic => "<i>",
            TagKind::Color => "<color",
            TagKind::Size => "<size",
        }
    }

    /// Closing delimiter.
    pub fn closer(self) -> &'static str {
        match self {
            TagKind::Bold => "</b>",
            TagKind::Italic => "</i>",
            TagKind::Color => "</color>",
            TagKind::Size => "</size>",
        }
    }

    /// Returns true for tags that accept an `=value` attribute.
    pub fn takes_value(self) -> bool {
        matches!(self, TagKind::Color | TagKind::Size)
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One element of a parsed document.
///
/// Text borrows from the source, so a tree lives no longer than the string it
/// was parsed from. `location` is the byte offset where the node starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node<'a> {
    /// A run of literal characters.
    Text { location: usize, text: &'a str },
    /// A newline or the escaped `\n` sequence.
    LineBreak { location: usize },
    Bold { location: usize, inner: Vec<Node<'a>> },
    Italic { location: usize, inner: Vec<Node<'a>> },
    /// `value` is `None` for a bare `<color>`.
    Color {
        location: usize,
        value: Option<Color>,
        inner: Vec<Node<'a>>,
    },
    /// `value` is `None` for a bare `<size>`.
    Size {
        location: usize,
        value: Option<u64>,
        inner: Vec<Node<'a>>,
    },
}

impl<'a> Node<'a> {
    /// Byte offset of the node in the source.
    pub fn location(&self) -> usize {
        match self {
            Node::Text { location, .. }
            | Node::LineBreak { location }
            | Node::Bold { location, .. }
            | Node::Italic { location, .. }
            | Node::Color { location, .. }
            | Node::Size { location, .. } => *location,
        }
    }

    /// The tag this node was opened with, if any.
    pub fn tag(&self) -> Option<TagKind> {
        match self {
            Node::Bold { .. } => Some(TagKind::Bold),
            Node::Italic { .. } => Some(TagKind::Italic),
            Node::Color { .. } => Some(TagKind::Color),
            Node::Size { .. } => Some(TagKind::Size),
            Node::Text { .. } | Node::LineBreak { .. } => None,
        }
    }

    /// Child nodes. Empty for text and line breaks.
    pub fn inner(&self) -> &[Node<'a>] {
        match self {
            Node::Bold { inner, .. }
            | Node::Italic { inner, .. }
            | Node::Color { inner, .. }
            | Node::Size { inner, .. } => inner,
            Node::Text { .. } | Node::LineBreak { .. } => &[],
        }
    }

    /// Literal text of this node and everything below it, markup stripped.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    pub(crate) fn push_plain_text(&self, out: &mut String) {
        match self {
            Node::Text { text, .. } => out.push_str(text),
            Node::LineBreak { .. } => out.push('\n'),
            _ => {
                for child in self.inner() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_kind_delimiters() {
        assert_eq!(TagKind::Italic.opener().len(), 3);
        assert_eq!(TagKind::Color.closer(), "</color>");
        assert!(TagKind::Size.takes_value());
        assert!(!TagKind::Bold.takes_value());
        assert_eq!(TagKind::Size.to_string(), "size");
    }

    #[test]
    fn plain_text_flattens_children() {
        let node = Node::Bold {
            location: 0,
            inner: vec![
                Node::Text { location: 3, text: "a" },
                Node::LineBreak { location: 4 },
                Node::Italic {
                    location: 5,
                    inner: vec![Node::Text { location: 8, text: "b" }],
                },
            ],
        };
        assert_eq!(node.plain_text(), "a\nb");
        assert_eq!(node.tag(), Some(TagKind::Bold));
        assert_eq!(node.inner().len(), 3);
    }

    #[test]
    fn leaf_nodes_have_no_children() {
        let text = Node::Text { location: 2, text: "x" };
        assert!(text.inner().is_empty());
        assert_eq!(text.tag(), None);
        assert_eq!(text.location(), 2);
    }
}
