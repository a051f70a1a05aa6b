//! Error types for marklet

use thiserror::Error;

/// Main error type for marklet operations.
///
/// Markdown conversion itself never fails; these errors come from the
/// edges around it (reading input, loading configuration, highlighting).
#[derive(Error, Debug)]
pub enum MarkletError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Syntax highlighting error
    #[error("Highlight error: {0}")]
    Highlight(String),
}

/// Result type alias for marklet operations
pub type Result<T> = std::result::Result<T, MarkletError>;
