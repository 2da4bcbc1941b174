//! Error types for loading transcript files.
//!
//! Library operations return [`ViewerError`]. Application code (CLI commands, the
//! interactive session) wraps these in `anyhow` with additional context.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A JSONL line that failed to deserialize into the expected record shape.
#[derive(Error, Debug)]
#[error("line {line}: {source}")]
pub struct LineError {
    /// 1-based physical line number (blank lines are counted).
    pub line: usize,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug)]
pub enum ViewerError {
    /// The selected transcript does not exist.
    #[error("File not found: {}", .path.display())]
    FileNotFound { path: PathBuf },

    /// Neither record shape could interpret the file.
    #[error("Failed to parse {} as conversations or text records ({source})", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: LineError,
    },

    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("File too large: {} ({size} bytes, max {limit} bytes)", .path.display())]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
