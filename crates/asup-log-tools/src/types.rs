//! Core extraction types: schema kinds, flattening options and per-file
//! counters.

use serde::{Deserialize, Serialize};

// ── Schema Kind ───────────────────────────────────────────────

/// Which decoder a payload is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaKind {
    /// Nested XML with a multipath configuration tree.
    Linux,
    /// XML envelope carrying four JSON documents.
    Windows,
}

impl SchemaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Windows => "windows",
        }
    }
}

impl std::fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Flattening Options ────────────────────────────────────────

/// Source overlaid onto the `blacklistExceptions` device properties.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExceptionsOverlay {
    /// The exceptions section's own entries (mirrors `blacklist`).
    #[default]
    Entries,
    /// The blacklist's device-level properties, as older parser
    /// releases emitted them.
    LegacyBlacklistDevice,
}

/// Options threaded through the extraction pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    #[serde(default)]
    pub exceptions_overlay: ExceptionsOverlay,
}

// ── File Report ───────────────────────────────────────────────

/// Counters for one processed host-info log file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileReport {
    /// Records split out of the stream.
    pub records: usize,
    /// Records that produced a host row.
    pub decoded: usize,
    /// Records skipped on decode errors.
    pub skipped: usize,
    /// Windows records kept with at least one undecodable field.
    pub partial: usize,
}

impl FileReport {
    pub fn merge(&mut self, other: &FileReport) {
        self.records += other.records;
        self.decoded += other.decoded;
        self.skipped += other.skipped;
        self.partial += other.partial;
    }
}
