//! Per-stream extraction: split → decode → flatten → normalize → aggregate.

use asup_protocol::{DecodedHostInfo, HostRecord};

use crate::aggregate::Aggregator;
use crate::error::LogResult;
use crate::multipath;
use crate::normalize;
use crate::parsers;
use crate::types::{ExtractOptions, FileReport};

/// Run one raw host-info log stream through the pipeline into `aggregator`.
///
/// A malformed record fails the whole stream before any row is added.
/// Records whose payload cannot be decoded are logged and skipped.
pub fn process_log(
    raw: &str,
    aggregator: &mut Aggregator,
    options: &ExtractOptions,
) -> LogResult<FileReport> {
    let records = parsers::extract_records(raw)?;
    let mut report = FileReport {
        records: records.len(),
        ..Default::default()
    };

    for record in &records {
        match process_record(record, aggregator, options) {
            Ok(partial) => {
                report.decoded += 1;
                if partial {
                    report.partial += 1;
                }
            }
            Err(e) => {
                tracing::warn!(
                    timestamp = %record.timestamp,
                    error = %e,
                    "skipping host record"
                );
                report.skipped += 1;
            }
        }
    }

    tracing::debug!(
        records = report.records,
        decoded = report.decoded,
        skipped = report.skipped,
        "host-info stream processed"
    );
    Ok(report)
}

/// Decode one record and feed its rows to `aggregator`.
///
/// Returns whether the record was kept with undecodable fields.
pub fn process_record(
    record: &HostRecord,
    aggregator: &mut Aggregator,
    options: &ExtractOptions,
) -> LogResult<bool> {
    let decoded = parsers::decode_payload(&record.payload)?;
    let row = normalize::host_row(&decoded.info);
    tracing::trace!(
        key = %row.identity_key(),
        os = decoded.info.os_family(),
        collected_at = ?record.collected_at(),
        "host record decoded"
    );

    if let DecodedHostInfo::Linux(linux) = &decoded.info {
        let tree = multipath::flatten(&linux.multipath.conf, options.exceptions_overlay);
        for mp_row in normalize::multipath_rows(&row, &tree) {
            aggregator.insert_multipath(mp_row);
        }
    }
    aggregator.insert_host(row);

    for e in &decoded.field_errors {
        tracing::warn!(timestamp = %record.timestamp, error = %e, "host record kept with missing fields");
    }
    Ok(decoded.is_partial())
}

/// Rows of a single stream, in a fresh aggregate.
#[cfg(test)]
fn extract(raw: &str, options: &ExtractOptions) -> LogResult<Aggregator> {
    let mut aggregator = Aggregator::new();
    process_log(raw, &mut aggregator, options)?;
    Ok(aggregator)
}
