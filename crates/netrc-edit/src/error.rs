//! Error types for netrc-edit

/// Result type for netrc-edit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while tokenizing or grouping a netrc file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 in fragment starting at byte {offset}")]
    InvalidUtf8 { offset: usize },

    #[error("`machine` keyword at byte {offset} is not followed by a machine name")]
    MissingMachineName { offset: usize },
}
