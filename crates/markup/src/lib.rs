//! Parser and HTML serializer for the mail preview markup.
//!
//! The markup is a small fixed set of inline tags:
//!
//! - `<b>text</b>` - bold
//! - `<i>text</i>` - italic
//! - `<color=red>text</color>`, `<color=#f80>text</color>` - colored text
//! - `<size=40>text</size>` - font size, rendered at 40% as pixels
//! - a newline or the two characters `\n` - line break
//!
//! Tag names are case-insensitive. Anything that is not one of these tags is
//! literal text and gets escaped on output.
//!
//! # Errors
//!
//! Structural problems (an unclosed tag, a missing `>` after an attribute,
//! crossed tags) abort the parse with a [`MarkupError`] that points at the
//! offending tag. Bad attribute *content* does not: an unknown color renders
//! as [`Color::FALLBACK`].
//!
//! # Usage
//!
//! ```
//! use markup::{parse, render, MarkupError, TagKind};
//!
//! assert_eq!(
//!     render("<color=notacolor>x</color>").unwrap(),
//!     "<span style=\"color:white\">x</span>"
//! );
//!
//! let doc = parse("<b>Hello</b>\nWorld").unwrap();
//! assert_eq!(doc.plain_text(), "Hello\nWorld");
//!
//! assert_eq!(
//!     render("<b><i>x</b></i>"),
//!     Err(MarkupError::UnclosedTag { tag: TagKind::Italic, location: 3 })
//! );
//! ```

pub mod color;
pub mod document;
pub mod error;
pub mod node;
pub mod options;
pub mod parser;
pub mod render;

// Re-export main types at crate root
pub use color::{Color, NamedColor};
pub use document::Document;
pub use error::{ColorParseError, MarkupError};
pub use node::{Node, TagKind};
pub use options::{DEFAULT_MAX_DEPTH, ParseOptions};
pub use parser::{parse, parse_with};
pub use render::{escape_text, font_size_px, render, render_nodes, render_with};
