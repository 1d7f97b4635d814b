//! Shared types for the ASUP host-information parser.
//!
//! Holds the record, decoded host-info, multipath and output-row types that
//! flow between the extraction pipeline (`asup-log-tools`) and the bundle
//! runner (`asup-parser`).

pub mod linux;
pub mod multipath;
pub mod record;
pub mod rows;
pub mod windows;

pub use linux::*;
pub use multipath::*;
pub use record::*;
pub use rows::*;
pub use windows::*;

/// A decoded host-information payload, one variant per OS family.
#[derive(Debug, Clone, PartialEq)]
pub enum DecodedHostInfo {
    Linux(LinuxHostInfo),
    Windows(WindowsHostInfo),
}

impl DecodedHostInfo {
    pub fn os_family(&self) -> &'static str {
        match self {
            Self::Linux(_) => "linux",
            Self::Windows(_) => "windows",
        }
    }
}
