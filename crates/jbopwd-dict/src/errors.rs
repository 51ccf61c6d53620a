use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a dictionary table.
#[derive(Debug, Error)]
pub enum DictError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line} too short (expected at least {expected} bytes): {content}")]
    LineTooShort {
        line: usize,
        expected: usize,
        content: String,
    },
}
