//! Error types for tagtint

use thiserror::Error;

/// Result type alias for tagtint operations
pub type Result<T> = std::result::Result<T, HighlightError>;

/// Highlighting error types
#[derive(Error, Debug)]
pub enum HighlightError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid scan pattern: {0}")]
    Pattern(#[from] fancy_regex::Error),

    #[error("invalid scope pattern: {0}")]
    Scope(#[from] regex::Error),

    #[error("fallback palette exhausted for tag `{tag_name}`: index {index} out of {len} entries")]
    PaletteExhausted {
        tag_name: String,
        index: usize,
        len: usize,
    },
}
