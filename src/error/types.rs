use thiserror::Error;

/// Unified result type for the escapes crate.
pub type Result<T> = std::result::Result<T, EscapesError>;

/// Errors surfaced at the fallible edges of the crate.
#[derive(Debug, Error)]
pub enum EscapesError {
    #[error("invalid colour `{0}`")]
    InvalidColor(String),
    #[error("theme parse error: {0}")]
    Theme(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
