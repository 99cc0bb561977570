//! Error types for netrc-store

use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for netrc-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or saving a netrc file
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: netrc_edit::Error,
    },

    #[error("Failed to start {program}: {source}")]
    CipherSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Pipe to {program} failed: {source}")]
    CipherPipe {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} exited with {status}: {stderr}")]
    CipherFailed {
        program: String,
        status: ExitStatus,
        stderr: String,
    },

    #[error("Failed to parse store config at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Lock acquisition failed for {path}")]
    LockFailed { path: PathBuf },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub fn parse(path: impl Into<PathBuf>, source: netrc_edit::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
