//! Attribute values for `<color=...>` and `<size=...>`.
//!
//! A missing `>` is fatal. A color value that does not name a color is not:
//! it falls back to [`Color::FALLBACK`].

use crate::color::Color;
use crate::error::MarkupError;
use crate::node::TagKind;

use super::Parser;

impl<'a> Parser<'a> {
    /// Parse the optional `=value>` after `<color`.
    pub(super) fn parse_color_attribute(&mut self, location: usize) -> Result<Option<Color>, MarkupError> {
        let Some(raw) = self.parse_attribute(TagKind::Color, location, |_| true)? else {
            return Ok(None);
        };
        Ok(Some(Color::parse_or_fallback(raw)))
    }

    /// Parse the optional `=digits>` after `<size`.
    pub(super) fn parse_size_attribute(&mut self, location: usize) -> Result<Option<u64>, MarkupError> {
        let Some(digits) = self.parse_attribute(TagKind::Size, location, |c| c.is_ascii_digit())? else {
            return Ok(None);
        };
        if digits.is_empty() {
            self.cursor.rewind(location);
            return Err(MarkupError::Syntax { location });
        }
        // Only overflow can fail here; sizes have no upper bound.
        Ok(Some(digits.parse().unwrap_or(u64::MAX)))
    }

    /// Consume `>` or `=value>` following a tag name.
    ///
    /// Returns `None` for a bare `>`. `accept` restricts the characters of the
    /// value; anything it rejects is a syntax error.
    fn parse_attribute(
        &mut self,
        tag: TagKind,
        location: usize,
        accept: impl Fn(char) -> bool,
    ) -> Result<Option<&'a str>, MarkupError> {
        match self.cursor.peek() {
            Some('>') => {
                self.cursor.advance();
                Ok(None)
            }
            Some('=') => {
                self.cursor.advance();
                self.scan_value(tag, location, accept).map(Some)
            }
            _ => {
                self.cursor.rewind(location);
                Err(MarkupError::Syntax { location })
            }
        }
    }

    /// Scan up to and past the closing `>`, returning the text before it.
    fn scan_value(
        &mut self,
        tag: TagKind,
        location: usize,
        accept: impl Fn(char) -> bool,
    ) -> Result<&'a str, MarkupError> {
        let start = self.cursor.pos();

        loop {
            match self.cursor.peek() {
                None | Some('\n') => {
                    self.cursor.rewind(location);
                    return Err(MarkupError::UnterminatedAttribute { tag, location });
                }
                Some('>') => break,
                Some(c) if !accept(c) => {
                    self.cursor.rewind(location);
                    return Err(MarkupError::Syntax { location });
                }
                Some(_) => {
                    self.cursor.advance();
                }
            }
        }

        let value = self.cursor.slice_from(start);
        self.cursor.advance(); // consume '>'
        Ok(value)
    }
}
