//! Live preview for mail, notice, alert and announcement texts.
//!
//! The markup itself lives in the [`markup`] crate; this crate keeps the
//! state a preview pane needs around it.
//!
//! ```
//! use mail_preview::{Preview, PreviewKind};
//!
//! let mut preview = Preview::new();
//! preview.set_kind(PreviewKind::Alert);
//! preview.update("<color=red>Maintenance</color> tonight").unwrap();
//!
//! // A broken edit keeps the last good render on screen.
//! assert!(preview.update("<color=red>Maintenance").is_err());
//! assert_eq!(preview.html(), "<span style=\"color:red\">Maintenance</span> tonight");
//! assert_eq!(preview.class_name(), "alert error");
//! ```

pub mod error;
pub mod preview;

pub use error::{PreviewError, Result};
pub use preview::{Preview, PreviewKind};

// Re-export the markup crate so users only need one dependency.
pub use markup;
