use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Exact length of a record header timestamp (e.g. `2020-01-01T00:00:00.000Z`).
pub const TIMESTAMP_LEN: usize = 24;

/// A header/payload pair split out of a raw host-info log stream,
/// before the header has been decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRecord {
    /// Header segment, up to and including `</itn_info>`.
    pub header: String,
    /// Host-information payload following the header.
    pub payload: String,
}

/// One host's telemetry record with a validated header timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostRecord {
    /// Array-side collection timestamp, always `TIMESTAMP_LEN` characters.
    pub timestamp: String,
    /// Raw header text the timestamp was decoded from.
    pub header: String,
    /// Host-information payload (Linux XML or Windows XML/JSON envelope).
    pub payload: String,
}

impl HostRecord {
    /// Parse the timestamp as RFC 3339 (None if the array wrote another format).
    pub fn collected_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.timestamp)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(timestamp: &str) -> HostRecord {
        HostRecord {
            timestamp: timestamp.into(),
            header: String::new(),
            payload: String::new(),
        }
    }

    #[test]
    fn collected_at_parses_rfc3339() {
        let ts = record("2020-01-01T00:00:00.000Z").collected_at().unwrap();
        assert_eq!(ts.to_rfc3339(), "2020-01-01T00:00:00+00:00");
    }

    #[test]
    fn collected_at_none_for_other_formats() {
        assert!(record("Wed Jan 01 00:00:00 2020 ").collected_at().is_none());
    }
}
