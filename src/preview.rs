//! Live preview state.
//!
//! The editor re-renders on every change. A failed render keeps the last good
//! HTML on screen and flags the preview as erroneous until the source parses
//! again.

use std::fmt;
use std::str::FromStr;

use markup::{MarkupError, ParseOptions};

use crate::error::PreviewError;

/// The message style the preview is shown in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PreviewKind {
    #[default]
    Notice,
    Mail,
    Alert,
    Announcement,
}

impl PreviewKind {
    pub const ALL: [PreviewKind; 4] = [
        PreviewKind::Notice,
        PreviewKind::Mail,
        PreviewKind::Alert,
        PreviewKind::Announcement,
    ];

    /// CSS class name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            PreviewKind::Notice => "notice",
            PreviewKind::Mail => "mail",
            PreviewKind::Alert => "alert",
            PreviewKind::Announcement => "announcement",
        }
    }
}

impl fmt::Display for PreviewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewKind {
    type Err = PreviewError;

    fn from_str(s: &str) -> crate::Result<Self> {
        PreviewKind::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PreviewError::UnknownKind(s.to_string()))
    }
}

/// Rendered preview plus its error flag.
#[derive(Clone, Debug, Default)]
pub struct Preview {
    html: String,
    error: Option<MarkupError>,
    kind: PreviewKind,
    options: ParseOptions,
}

impl Preview {
    /// Create an empty preview.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty preview that parses with `options`.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Re-render from `source`.
    ///
    /// On failure the previous HTML is kept and the error is recorded.
    pub fn update(&mut self, source: &str) -> Result<&str, &MarkupError> {
        match markup::render_with(source, &self.options) {
            Ok(html) => {
                self.html = html;
                self.error = None;
                Ok(&self.html)
            }
            Err(err) => {
                log::debug!("keeping previous preview: {err}");
                Err(&*self.error.insert(err))
            }
        }
    }

    /// The last successfully rendered HTML.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// The error from the most recent update, if it failed.
    pub fn error(&self) -> Option<&MarkupError> {
        self.error.as_ref()
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn kind(&self) -> PreviewKind {
        self.kind
    }

    /// Switch the message style. The error flag is left as it is.
    pub fn set_kind(&mut self, kind: PreviewKind) {
        self.kind = kind;
    }

    /// Class list for the preview element, e.g. `"alert error"`.
    pub fn class_name(&self) -> String {
        if self.is_error() {
            format!("{} error", self.kind)
        } else {
            self.kind.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use markup::TagKind;

    #[test]
    fn update_renders_html() {
        let mut preview = Preview::new();
        assert_eq!(preview.update("<b>hi</b>"), Ok("<b>hi</b>"));
        assert_eq!(preview.html(), "<b>hi</b>");
        assert!(!preview.is_error());
    }

    #[test]
    fn failed_update_keeps_previous_html() {
        let mut preview = Preview::new();
        preview.update("<i>ok</i>").unwrap();

        let err = preview.update("<i>ok").unwrap_err().clone();
        assert_eq!(
            err,
            MarkupError::UnclosedTag {
                tag: TagKind::Italic,
                location: 0
            }
        );
        assert_eq!(preview.html(), "<i>ok</i>");
        assert_eq!(preview.error(), Some(&err));
        assert_eq!(preview.class_name(), "notice error");
    }

    #[test]
    fn recovery_clears_error() {
        let mut preview = Preview::new();
        assert!(preview.update("<b>").is_err());
        assert!(preview.update("<b></b>").is_ok());
        assert!(preview.error().is_none());
        assert_eq!(preview.class_name(), "notice");
    }

    #[test]
    fn set_kind_keeps_error_flag() {
        let mut preview = Preview::new();
        assert!(preview.update("<size=").is_err());
        preview.set_kind(PreviewKind::Announcement);
        assert_eq!(preview.class_name(), "announcement error");
        assert_eq!(preview.kind(), PreviewKind::Announcement);
    }

    #[test]
    fn custom_depth_limit() {
        let mut preview = Preview::with_options(ParseOptions::default().with_max_depth(1));
        assert!(matches!(
            preview.update("<b><b>x</b></b>"),
            Err(MarkupError::RecursionLimitExceeded { limit: 1, .. })
        ));
    }

    #[test]
    fn kind_from_str() {
        assert_eq!("mail".parse::<PreviewKind>(), Ok(PreviewKind::Mail));
        assert_eq!("ALERT".parse::<PreviewKind>(), Ok(PreviewKind::Alert));
        assert_eq!(
            "memo".parse::<PreviewKind>(),
            Err(PreviewError::UnknownKind("memo".into()))
        );
    }
}
