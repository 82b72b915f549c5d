use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PreviewError {
    #[error("Unknown preview kind: {0}")]
    UnknownKind(String),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, PreviewError>;
