//! Mock decompressor for testing.
//!
//! Mock archives are JSON objects mapping file names to contents; extraction
//! writes each entry into the destination. `gunzip` renames `name.gz` to
//! `name` without touching the bytes. All calls are recorded for assertions.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::decompress::Decompressor;
use crate::error::StagingError;

/// One recorded decompressor call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecompressCall {
    Extract { archive: PathBuf, dest: PathBuf },
    Gunzip(PathBuf),
}

/// Build a mock archive body from `(file name, contents)` pairs.
pub fn mock_archive(files: &[(&str, &str)]) -> String {
    let map: BTreeMap<&str, &str> = files.iter().copied().collect();
    serde_json::to_string(&map).unwrap_or_default()
}

/// In-process decompressor with call recording.
#[derive(Default)]
pub struct MockDecompressor {
    calls: Mutex<Vec<DecompressCall>>,
}

impl MockDecompressor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get copies of all recorded calls.
    pub fn calls(&self) -> Vec<DecompressCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: DecompressCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

#[async_trait]
impl Decompressor for MockDecompressor {
    async fn extract_archive(&self, archive: &Path, dest: &Path) -> Result<(), StagingError> {
        self.record(DecompressCall::Extract {
            archive: archive.to_path_buf(),
            dest: dest.to_path_buf(),
        });

        let body = tokio::fs::read(archive)
            .await
            .map_err(|e| StagingError::io("read", archive, e))?;
        let files: BTreeMap<String, String> =
            serde_json::from_slice(&body).map_err(|e| StagingError::ToolFailed {
                program: "tar".into(),
                detail: format!("not a mock archive: {e}"),
            })?;

        for (name, contents) in files {
            let path = dest.join(&name);
            tokio::fs::write(&path, contents)
                .await
                .map_err(|e| StagingError::io("write", &path, e))?;
        }
        Ok(())
    }

    async fn gunzip(&self, file: &Path) -> Result<(), StagingError> {
        self.record(DecompressCall::Gunzip(file.to_path_buf()));

        if file.extension().is_none_or(|ext| ext != "gz") {
            return Err(StagingError::ToolFailed {
                program: "gunzip".into(),
                detail: format!("{}: unknown suffix", file.display()),
            });
        }
        let target = file.with_extension("");
        tokio::fs::rename(file, &target)
            .await
            .map_err(|e| StagingError::io("rename", file, e))
    }
}
