//! Run-wide row maps with last-write-wins deduplication.

use std::collections::BTreeMap;

use asup_protocol::{HostInfoRow, MultipathRow};

/// Deduplicated host-info and multipath rows for one run.
///
/// Rows are keyed by identity key; a later row with the same key replaces
/// the earlier one. Maps are ordered so output is stable across runs.
#[derive(Debug, Default)]
pub struct Aggregator {
    hosts: BTreeMap<String, HostInfoRow>,
    multipath: BTreeMap<String, MultipathRow>,
    replaced: usize,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a host row, returning the row it replaced.
    pub fn insert_host(&mut self, row: HostInfoRow) -> Option<HostInfoRow> {
        let key = row.identity_key();
        let previous = self.hosts.insert(key.clone(), row);
        if let Some(prev) = &previous {
            let differs = prev != &self.hosts[&key];
            self.note_replacement(&key, differs);
        }
        previous
    }

    /// Insert a multipath row, returning the row it replaced.
    pub fn insert_multipath(&mut self, row: MultipathRow) -> Option<MultipathRow> {
        let key = row.identity_key();
        let previous = self.multipath.insert(key.clone(), row);
        if let Some(prev) = &previous {
            let differs = prev != &self.multipath[&key];
            self.note_replacement(&key, differs);
        }
        previous
    }

    fn note_replacement(&mut self, key: &str, differs: bool) {
        self.replaced += 1;
        if differs {
            tracing::debug!(key, "row replaced by a later record with different values");
        }
    }

    pub fn host_rows(&self) -> impl Iterator<Item = &HostInfoRow> {
        self.hosts.values()
    }

    pub fn multipath_rows(&self) -> impl Iterator<Item = &MultipathRow> {
        self.multipath.values()
    }

    pub fn host_count(&self) -> usize {
        self.hosts.len()
    }

    pub fn multipath_count(&self) -> usize {
        self.multipath.len()
    }

    /// Rows (of either table) overwritten by a later record.
    pub fn replaced_count(&self) -> usize {
        self.replaced
    }
}
