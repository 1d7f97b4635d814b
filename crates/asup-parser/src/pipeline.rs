//! Run orchestration: bundle → staging → host-info logs → aggregate → CSV.
//!
//! Failures are contained at the narrowest unit that can absorb them:
//! a bad record is skipped inside `process_log`, a malformed or unreadable
//! log file is abandoned here, and a missing archive or staging failure
//! abandons the bundle. Only CSV writing, or a run where no bundle could be
//! processed, fails the run.

use std::path::Path;

use anyhow::bail;
use asup_log_tools::{Aggregator, ExtractOptions, FileReport, LogError, LogResult, process_log};

use crate::config::ParserConfig;
use crate::decompress::Decompressor;
use crate::emit;
use crate::staging;
use crate::summary::RunSummary;

/// Process every bundle, write both CSV tables and return the run summary.
pub async fn run(config: &ParserConfig, decompressor: &dyn Decompressor) -> anyhow::Result<RunSummary> {
    let (aggregator, summary) = collect(config, decompressor).await;

    if summary.bundles_processed == 0 {
        bail!(
            "no ASUP bundle could be processed ({} skipped)",
            summary.bundles_skipped
        );
    }

    emit::write_tables(&aggregator, &config.output_csv, &config.multipath_csv).await?;
    Ok(summary)
}

/// Process every configured bundle into one aggregate.
pub async fn collect(
    config: &ParserConfig,
    decompressor: &dyn Decompressor,
) -> (Aggregator, RunSummary) {
    let mut aggregator = Aggregator::new();
    let mut summary = RunSummary::new();
    let options = config.extract_options();

    tracing::info!(
        run_id = %summary.run_id,
        bundles = config.asup_folders.len(),
        staging = %config.temp_folder.display(),
        "starting host-info extraction"
    );

    for bundle in &config.asup_folders {
        let result = process_bundle(
            bundle,
            &config.temp_folder,
            decompressor,
            &options,
            &mut aggregator,
            &mut summary,
        )
        .await;
        match result {
            Ok(()) => summary.bundles_processed += 1,
            Err(e) => {
                tracing::error!(bundle = %bundle.display(), error = %e, "ASUP bundle skipped");
                summary.bundles_skipped += 1;
            }
        }
    }

    summary.finish(&aggregator);
    tracing::info!(
        run_id = %summary.run_id,
        summary = %summary.to_json(),
        "host-info extraction finished"
    );
    (aggregator, summary)
}

/// Stage one bundle and run each of its host-info logs through the pipeline.
///
/// Errors returned here abandon the whole bundle. Rows already added from
/// earlier bundles are kept.
pub async fn process_bundle(
    bundle: &Path,
    staging_root: &Path,
    decompressor: &dyn Decompressor,
    options: &ExtractOptions,
    aggregator: &mut Aggregator,
    summary: &mut RunSummary,
) -> LogResult<()> {
    tracing::info!(bundle = %bundle.display(), "processing ASUP bundle");

    let archive = staging::locate_archive(bundle).await?;
    staging::prepare(staging_root).await?;
    let staged = staging::stage_archive(&archive, staging_root).await?;
    decompressor.extract_archive(&staged, staging_root).await?;

    for gz in staging::list_files(staging_root, staging::is_compressed_host_log).await? {
        decompressor.gunzip(&gz).await?;
    }

    let logs = staging::list_files(staging_root, staging::is_host_log).await?;
    if logs.is_empty() {
        tracing::warn!(bundle = %bundle.display(), "bundle holds no host-info logs");
    }

    for log in &logs {
        match process_file(log, options, aggregator).await {
            Ok(report) => {
                tracing::info!(
                    file = %log.display(),
                    records = report.records,
                    decoded = report.decoded,
                    skipped = report.skipped,
                    "host-info log processed"
                );
                summary.record_file(&report);
            }
            Err(e) => {
                tracing::warn!(file = %log.display(), error = %e, "host-info log abandoned");
                summary.files_abandoned += 1;
            }
        }
    }
    Ok(())
}

/// Read one staged log and feed it to `aggregator`.
///
/// Any error leaves `aggregator` untouched.
pub async fn process_file(
    path: &Path,
    options: &ExtractOptions,
    aggregator: &mut Aggregator,
) -> LogResult<FileReport> {
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| LogError::Io(format!("read {}: {e}", path.display())))?;
    let raw = String::from_utf8_lossy(&bytes);
    process_log(&raw, aggregator, options)
}
