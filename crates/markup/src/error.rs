//! Error types for markup parsing.

use thiserror::Error;

use crate::node::TagKind;

/// Errors that abort a parse.
///
/// Every variant carries the byte offset of the tag that caused it, so an
/// editor can point at the opening `<` rather than at the offending character.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarkupError {
    /// The character after a tag name is neither `=` nor `>`, or a size
    /// value contains something other than digits.
    #[error("syntax error at position {location}")]
    Syntax { location: usize },

    /// End of line or end of input reached while scanning an attribute value.
    #[error("unterminated {tag} value in tag at position {location}")]
    UnterminatedAttribute { tag: TagKind, location: usize },

    /// End of input or a mismatched end tag reached before the closer.
    #[error("<{tag}> at position {location} not properly closed")]
    UnclosedTag { tag: TagKind, location: usize },

    /// Tags nested deeper than the configured limit.
    #[error("<{tag}> at position {location} exceeds the nesting limit of {limit}")]
    RecursionLimitExceeded {
        tag: TagKind,
        location: usize,
        limit: usize,
    },
}

/// Errors that can occur when parsing a color value.
///
/// The parser never surfaces these; an invalid color falls back to
/// [`Color::FALLBACK`](crate::Color::FALLBACK).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownName(String),

    /// Invalid hex color format.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

impl MarkupError {
    /// Byte offset into the source where the failing tag starts.
    pub fn location(&self) -> usize {
        match self {
            MarkupError::Syntax { location }
            | MarkupError::UnterminatedAttribute { location, .. }
            | MarkupError::UnclosedTag { location, .. }
            | MarkupError::RecursionLimitExceeded { location, .. } => *location,
        }
    }

    /// One-based `(line, column)` of [`location`](Self::location) in `source`.
    ///
    /// Columns count characters, not bytes. Offsets past the end of `source`
    /// are clamped to its end.
    pub fn line_col(&self, source: &str) -> (usize, usize) {
        let mut end = self.location().min(source.len());
        while !source.is_char_boundary(end) {
            end -= 1;
        }
        let before = &source[..end];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        let column = before[line_start..].chars().count() + 1;
        (line, column)
    }
}
