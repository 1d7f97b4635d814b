//! Archive extraction and gzip decompression.
//!
//! `Decompressor` trait with two impls:
//! - `ExternalDecompressor`: runs `tar` and `gunzip` via `tokio::process`
//! - `MockDecompressor`: in-process stand-in for tests (in `mock.rs`)
//!
//! External tools are invoked directly (no shell interpretation), each call
//! bounded by an optional timeout.

use std::ffi::OsString;
use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::StagingError;

/// Leading path components dropped when extracting the primary archive.
pub const STRIP_COMPONENTS: u32 = 5;

/// Maximum stderr kept in a tool failure message.
const MAX_STDERR_CHARS: usize = 1024;

/// Trait for archive/decompression backends.
#[async_trait]
pub trait Decompressor: Send + Sync {
    /// Extract the gzipped tarball `archive` into `dest`, dropping the
    /// first `STRIP_COMPONENTS` path components.
    async fn extract_archive(&self, archive: &Path, dest: &Path) -> Result<(), StagingError>;

    /// Decompress `file` in place, replacing `name.gz` with `name`.
    async fn gunzip(&self, file: &Path) -> Result<(), StagingError>;
}

/// Decompressor backed by the system `tar` and `gunzip` binaries.
#[derive(Debug, Clone, Default)]
pub struct ExternalDecompressor {
    timeout: Option<Duration>,
}

impl ExternalDecompressor {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl Decompressor for ExternalDecompressor {
    async fn extract_archive(&self, archive: &Path, dest: &Path) -> Result<(), StagingError> {
        let args: Vec<OsString> = vec![
            "-xzf".into(),
            archive.into(),
            "-C".into(),
            dest.into(),
            "--strip-components".into(),
            STRIP_COMPONENTS.to_string().into(),
        ];
        run_tool("tar", &args, self.timeout).await
    }

    async fn gunzip(&self, file: &Path) -> Result<(), StagingError> {
        run_tool("gunzip", &[OsString::from(file)], self.timeout).await
    }
}

/// Run `program` with `args`, failing on spawn error, timeout or a
/// non-zero exit status.
pub async fn run_tool(
    program: &str,
    args: &[OsString],
    timeout: Option<Duration>,
) -> Result<(), StagingError> {
    tracing::debug!(program, ?args, "running external tool");

    let mut command = Command::new(program);
    command.args(args).kill_on_drop(true);
    let run = command.output();

    let output = match timeout {
        Some(limit) => match tokio::time::timeout(limit, run).await {
            Ok(result) => result,
            Err(_) => {
                return Err(StagingError::Timeout {
                    program: program.to_string(),
                    secs: limit.as_secs(),
                });
            }
        },
        None => run.await,
    }
    .map_err(|e| StagingError::ToolFailed {
        program: program.to_string(),
        detail: format!("spawn: {e}"),
    })?;

    if output.status.success() {
        return Ok(());
    }

    let stderr: String = String::from_utf8_lossy(&output.stderr)
        .trim()
        .chars()
        .take(MAX_STDERR_CHARS)
        .collect();
    Err(StagingError::ToolFailed {
        program: program.to_string(),
        detail: format!("{}: {stderr}", output.status),
    })
}
