//! Scan position over the source text.

/// A byte position into the source.
///
/// Every delimiter the markup knows is ASCII, so advancing by a delimiter's
/// byte length always lands on a character boundary.
#[derive(Clone, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Current byte offset.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Get the remaining input.
    fn remaining(&self) -> &'a str {
        &self.source[self.pos..]
    }

    /// Peek at the next character without consuming it.
    pub(crate) fn peek(&self) -> Option<char> {
        self.remaining().chars().next()
    }

    /// Peek at the character after the next one.
    pub(crate) fn peek_second(&self) -> Option<char> {
        self.remaining().chars().nth(1)
    }

    /// Returns true if the remaining input starts with `prefix`, ignoring
    /// ASCII case.
    pub(crate) fn starts_with_ignore_case(&self, prefix: &str) -> bool {
        self.remaining()
            .as_bytes()
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
    }

    /// Advance by one character.
    pub(crate) fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip an ASCII delimiter that was just matched.
    pub(crate) fn skip(&mut self, delimiter: &str) {
        debug_assert!(self.starts_with_ignore_case(delimiter));
        self.pos += delimiter.len();
    }

    /// Move back to an earlier offset.
    pub(crate) fn rewind(&mut self, pos: usize) {
        debug_assert!(pos <= self.pos);
        self.pos = pos;
    }

    /// Source text between `start` and the current position.
    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.pos]
    }
}
