//! End-of-run counters, logged as one structured event.

use asup_log_tools::{Aggregator, FileReport};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub bundles_processed: usize,
    pub bundles_skipped: usize,
    pub files_processed: usize,
    pub files_abandoned: usize,
    pub records: usize,
    pub records_decoded: usize,
    pub records_skipped: usize,
    pub records_partial: usize,
    pub host_rows: usize,
    pub multipath_rows: usize,
    pub replaced_rows: usize,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::now_v7(),
            started_at: Utc::now(),
            finished_at: None,
            bundles_processed: 0,
            bundles_skipped: 0,
            files_processed: 0,
            files_abandoned: 0,
            records: 0,
            records_decoded: 0,
            records_skipped: 0,
            records_partial: 0,
            host_rows: 0,
            multipath_rows: 0,
            replaced_rows: 0,
        }
    }

    pub fn record_file(&mut self, report: &FileReport) {
        self.files_processed += 1;
        self.records += report.records;
        self.records_decoded += report.decoded;
        self.records_skipped += report.skipped;
        self.records_partial += report.partial;
    }

    /// Stamp the end time and take row counts from the final aggregate.
    pub fn finish(&mut self, aggregator: &Aggregator) {
        self.finished_at = Some(Utc::now());
        self.host_rows = aggregator.host_count();
        self.multipath_rows = aggregator.multipath_count();
        self.replaced_rows = aggregator.replaced_count();
    }

    /// Single-line JSON carried by the end-of-run log event.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_file_accumulates() {
        let mut summary = RunSummary::new();
        summary.record_file(&FileReport {
            records: 4,
            decoded: 3,
            skipped: 1,
            partial: 1,
        });
        summary.record_file(&FileReport {
            records: 2,
            decoded: 2,
            skipped: 0,
            partial: 0,
        });
        assert_eq!(summary.files_processed, 2);
        assert_eq!(summary.records, 6);
        assert_eq!(summary.records_decoded, 5);
        assert_eq!(summary.records_skipped, 1);
        assert_eq!(summary.records_partial, 1);
    }

    #[test]
    fn serializes_with_run_id_and_counts() {
        let mut summary = RunSummary::new();
        summary.finish(&Aggregator::new());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["run_id"].as_str().unwrap().len(), 36);
        assert_eq!(json["host_rows"], 0);
        assert!(json["finished_at"].is_string());
    }

    #[test]
    fn to_json_is_one_line_with_every_counter() {
        let mut summary = RunSummary::new();
        summary.bundles_skipped = 2;
        summary.finish(&Aggregator::new());
        let line = summary.to_json();
        assert!(!line.contains('\n'));
        let json: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(json["run_id"], summary.run_id.to_string());
        assert_eq!(json["bundles_skipped"], 2);
        assert_eq!(json["files_abandoned"], 0);
        assert_eq!(json["replaced_rows"], 0);
    }

    #[test]
    fn run_ids_are_unique() {
        assert_ne!(RunSummary::new().run_id, RunSummary::new().run_id);
    }
}
