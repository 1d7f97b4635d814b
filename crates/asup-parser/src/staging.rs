//! Staging directory handling for one ASUP bundle.

use std::path::{Path, PathBuf};

use crate::error::StagingError;

/// Primary archive expected in every bundle directory.
pub const PRIMARY_ARCHIVE: &str = "array_log.tgz";
/// Host-info logs are `hi_info_collect.log`, `hi_info_collect.log.N`, and
/// gzipped rotations `hi_info_collect.log.N.gz`.
pub const HOST_LOG_PREFIX: &str = "hi_info_collect.log";
const GZ_SUFFIX: &str = ".gz";

/// A host-info log ready to be parsed.
pub fn is_host_log(name: &str) -> bool {
    name.starts_with(HOST_LOG_PREFIX) && !name.ends_with(GZ_SUFFIX)
}

/// A rotated host-info log that must be gunzipped first.
pub fn is_compressed_host_log(name: &str) -> bool {
    name.strip_prefix(HOST_LOG_PREFIX)
        .is_some_and(|rest| rest.starts_with('.') && rest.ends_with(GZ_SUFFIX))
}

/// Remove anything left in `root` and recreate it empty.
pub async fn prepare(root: &Path) -> Result<(), StagingError> {
    match tokio::fs::remove_dir_all(root).await {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(StagingError::io("clear", root, e)),
    }
    tokio::fs::create_dir_all(root)
        .await
        .map_err(|e| StagingError::io("create", root, e))
}

/// Path of the bundle's primary archive, if it exists as a regular file.
pub async fn locate_archive(bundle: &Path) -> Result<PathBuf, StagingError> {
    let archive = bundle.join(PRIMARY_ARCHIVE);
    let is_file = tokio::fs::metadata(&archive)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false);
    if !is_file {
        return Err(StagingError::MissingArchive(archive));
    }
    Ok(archive)
}

/// Copy `archive` into `root`, returning the staged path.
pub async fn stage_archive(archive: &Path, root: &Path) -> Result<PathBuf, StagingError> {
    let staged = root.join(PRIMARY_ARCHIVE);
    tokio::fs::copy(archive, &staged)
        .await
        .map_err(|e| StagingError::io("copy", archive, e))?;
    Ok(staged)
}

/// Regular files directly under `root` whose names satisfy `select`,
/// sorted by name.
pub async fn list_files(
    root: &Path,
    select: impl Fn(&str) -> bool,
) -> Result<Vec<PathBuf>, StagingError> {
    let mut entries = tokio::fs::read_dir(root)
        .await
        .map_err(|e| StagingError::io("list", root, e))?;
    let mut files = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| StagingError::io("list", root, e))?
    {
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        if entry.file_name().to_str().is_some_and(&select) {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
