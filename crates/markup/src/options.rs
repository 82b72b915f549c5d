//! Parser configuration.

/// Default limit on how deeply tags may nest.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Options controlling a parse.
///
/// # Examples
///
/// ```
/// use markup::{parse_with, ParseOptions};
///
/// let options = ParseOptions::default().with_max_depth(1);
/// assert!(parse_with("<b>x</b>", &options).is_ok());
/// assert!(parse_with("<b><i>x</i></b>", &options).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of simultaneously open tags. Input nested deeper fails
    /// with [`MarkupError::RecursionLimitExceeded`](crate::MarkupError::RecursionLimitExceeded).
    pub max_depth: usize,
}

impl ParseOptions {
    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
