//! Staging and decompression error types.

use std::path::{Path, PathBuf};

use asup_log_tools::LogError;
use thiserror::Error;

/// Errors from preparing a bundle's staging directory.
#[derive(Debug, Error)]
pub enum StagingError {
    #[error("primary archive not found: {}", .0.display())]
    MissingArchive(PathBuf),

    #[error("{op} {}: {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{program} timed out after {secs}s")]
    Timeout { program: String, secs: u64 },

    #[error("{program} failed: {detail}")]
    ToolFailed { program: String, detail: String },
}

impl StagingError {
    pub fn io(op: &'static str, path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<StagingError> for LogError {
    fn from(e: StagingError) -> Self {
        match e {
            StagingError::MissingArchive(_) => LogError::MalformedArchive(e.to_string()),
            _ => LogError::Io(e.to_string()),
        }
    }
}
