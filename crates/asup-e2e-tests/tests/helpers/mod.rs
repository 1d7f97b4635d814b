//! Shared test harness for E2E integration tests.
//!
//! Lays out ASUP bundles in a temporary directory, each with a mock
//! `array_log.tgz`, and drives full parser runs through `MockDecompressor`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use asup_parser::config::ParserConfig;
use asup_parser::mock::{MockDecompressor, mock_archive};
use asup_parser::pipeline;
use asup_parser::staging::PRIMARY_ARCHIVE;
use asup_parser::summary::RunSummary;

/// End-to-end harness owning bundle, staging and output directories.
pub struct TestHarness {
    pub dir: TempDir,
    pub decompressor: MockDecompressor,
}

impl TestHarness {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
            decompressor: MockDecompressor::new(),
        }
    }

    /// Create bundle `name` whose archive holds `files`.
    pub fn add_bundle(&self, name: &str, files: &[(&str, &str)]) -> PathBuf {
        let bundle = self.dir.path().join("asup").join(name);
        std::fs::create_dir_all(&bundle).unwrap();
        std::fs::write(bundle.join(PRIMARY_ARCHIVE), mock_archive(files)).unwrap();
        bundle
    }

    /// Create bundle directory `name` with no archive in it.
    pub fn add_empty_bundle(&self, name: &str) -> PathBuf {
        let bundle = self.dir.path().join("asup").join(name);
        std::fs::create_dir_all(&bundle).unwrap();
        bundle
    }

    /// Run configuration writing under the harness directory.
    pub fn config(&self, bundles: Vec<PathBuf>) -> ParserConfig {
        ParserConfig {
            asup_folders: bundles,
            output_csv: self.dir.path().join("out/hi_phase1.csv"),
            multipath_csv: self.dir.path().join("out/hi_phase1_multipath.csv"),
            temp_folder: self.dir.path().join("staging"),
            ..Default::default()
        }
    }

    pub async fn run(&self, config: &ParserConfig) -> anyhow::Result<RunSummary> {
        pipeline::run(config, &self.decompressor).await
    }

    /// Run over `bundles` with the default configuration.
    pub async fn run_bundles(&self, bundles: Vec<PathBuf>) -> (ParserConfig, RunSummary) {
        let config = self.config(bundles);
        let summary = self.run(&config).await.unwrap();
        (config, summary)
    }
}

/// CSV file as records of fields, header first.
pub fn read_csv(path: &Path) -> Vec<Vec<String>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(path)
        .unwrap()
        .records()
        .map(|r| r.unwrap().iter().map(str::to_string).collect())
        .collect()
}

/// Index of `name` in the header row.
pub fn column(rows: &[Vec<String>], name: &str) -> usize {
    rows[0].iter().position(|c| c == name).unwrap()
}
