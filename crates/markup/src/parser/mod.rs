//! Recursive-descent parser for the preview markup.
//!
//! Each call to [`parse`] builds its own [`Parser`], so nothing is shared
//! between parses and independent inputs can be parsed from different threads.

mod attribute;
mod cursor;

use crate::document::Document;
use crate::error::MarkupError;
use crate::node::{Node, TagKind};
use crate::options::ParseOptions;

use cursor::Cursor;

/// Parses markup into a [`Document`] using the default options.
///
/// # Examples
///
/// ```
/// use markup::parse;
///
/// let doc = parse("<b>Hello</b> World").unwrap();
/// assert_eq!(doc.plain_text(), "Hello World");
/// assert_eq!(doc.nodes().len(), 2);
/// ```
pub fn parse(source: &str) -> Result<Document<'_>, MarkupError> {
    parse_with(source, &ParseOptions::default())
}

/// Parses markup into a [`Document`] with explicit options.
pub fn parse_with<'a>(source: &'a str, options: &ParseOptions) -> Result<Document<'a>, MarkupError> {
    let mut parser = Parser::new(source, options);
    let mut nodes = Vec::new();

    loop {
        match parser.next_step() {
            Ok(Step::Node(node)) => nodes.push(node),
            Ok(Step::EndTag { tag, location }) => {
                log::debug!("dropping stray </{tag}> at position {location}");
            }
            Ok(Step::EndOfInput) => break,
            Err(err) => {
                log::debug!("markup parse failed: {err}");
                return Err(err);
            }
        }
    }

    Ok(Document::new(nodes))
}

/// What the dispatcher found at the cursor.
#[derive(Debug)]
enum Step<'a> {
    Node(Node<'a>),
    /// A closer for one of the four tags. Only the tag parser that opened
    /// the matching kind consumes it.
    EndTag { tag: TagKind, location: usize },
    EndOfInput,
}

/// Parsing state for a single source string.
struct Parser<'a> {
    cursor: Cursor<'a>,
    /// Number of tags currently open.
    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, options: &ParseOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Decide what starts at the cursor and parse it.
    fn next_step(&mut self) -> Result<Step<'a>, MarkupError> {
        let location = self.cursor.pos();

        let Some(c) = self.cursor.peek() else {
            return Ok(Step::EndOfInput);
        };

        match c {
            '<' => {
                if let Some(tag) = TagKind::ALL
                    .into_iter()
                    .find(|tag| self.cursor.starts_with_ignore_case(tag.opener()))
                {
                    return self.parse_tag(tag).map(Step::Node);
                }
                if self.cursor.peek_second() == Some('/') {
                    return Ok(self.parse_end_tag());
                }
                Ok(Step::Node(self.parse_text()))
            }
            '\n' => {
                self.cursor.advance();
                Ok(Step::Node(Node::LineBreak { location }))
            }
            '\\' if self.cursor.peek_second() == Some('n') => {
                self.cursor.skip("\\n");
                Ok(Step::Node(Node::LineBreak { location }))
            }
            _ => Ok(Step::Node(self.parse_text())),
        }
    }

    /// Consume text until a newline, `<` or backslash.
    ///
    /// The first character is always taken, which is how an unmatched `<`
    /// or a lone backslash ends up as literal text.
    fn parse_text(&mut self) -> Node<'a> {
        let location = self.cursor.pos();
        self.cursor.advance();

        while let Some(c) = self.cursor.peek() {
            if matches!(c, '\n' | '<' | '\\') {
                break;
            }
            self.cursor.advance();
        }

        Node::Text {
            location,
            text: self.cursor.slice_from(location),
        }
    }

    /// `</` found. Match one of the known closers or fall back to the two
    /// characters as text.
    fn parse_end_tag(&mut self) -> Step<'a> {
        let location = self.cursor.pos();

        for tag in TagKind::ALL {
            if self.cursor.starts_with_ignore_case(tag.closer()) {
                self.cursor.skip(tag.closer());
                return Step::EndTag { tag, location };
            }
        }

        self.cursor.skip("</");
        Step::Node(Node::Text {
            location,
            text: self.cursor.slice_from(location),
        })
    }

    /// Parse a tag whose opener is at the cursor, including its children and
    /// closer.
    fn parse_tag(&mut self, tag: TagKind) -> Result<Node<'a>, MarkupError> {
        let location = self.cursor.pos();

        if self.depth >= self.max_depth {
            return Err(MarkupError::RecursionLimitExceeded {
                tag,
                location,
                limit: self.max_depth,
            });
        }

        self.cursor.skip(tag.opener());
        log::trace!("open <{tag}> at {location}");

        let node = match tag {
            TagKind::Bold => Node::Bold {
                location,
                inner: self.parse_scope(tag, location)?,
            },
            TagKind::Italic => Node::Italic {
                location,
                inner: self.parse_scope(tag, location)?,
            },
            TagKind::Color => {
                let value = self.parse_color_attribute(location)?;
                Node::Color {
                    location,
                    value,
                    inner: self.parse_scope(tag, location)?,
                }
            }
            TagKind::Size => {
                let value = self.parse_size_attribute(location)?;
                Node::Size {
                    location,
                    value,
                    inner: self.parse_scope(tag, location)?,
                }
            }
        };

        log::trace!("close <{tag}> at {location}");
        Ok(node)
    }

    /// Collect children until the closer for `tag`.
    ///
    /// A closer of a different kind is left for nobody: the open tag is
    /// reported as unclosed.
    fn parse_scope(&mut self, tag: TagKind, location: usize) -> Result<Vec<Node<'a>>, MarkupError> {
        let mut inner = Vec::new();
        self.depth += 1;

        loop {
            match self.next_step()? {
                Step::Node(node) => inner.push(node),
                Step::EndTag { tag: closed, .. } if closed == tag => break,
                Step::EndTag { .. } | Step::EndOfInput => {
                    return Err(MarkupError::UnclosedTag { tag, location });
                }
            }
        }

        self.depth -= 1;
        Ok(inner)
    }
}
