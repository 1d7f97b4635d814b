//! Host-information extraction for ASUP array logs.
//!
//! Splits `hi_info_collect.log` streams into header/payload records, routes
//! each payload to the Linux (XML) or Windows (XML envelope + JSON) decoder,
//! flattens Linux multipath configuration, and deduplicates the resulting
//! host-info and multipath rows across a run.

pub mod aggregate;
pub mod error;
pub mod extract;
pub mod mock;
pub mod multipath;
pub mod normalize;
pub mod parsers;
pub mod types;

// Re-export key types for convenience
pub use aggregate::Aggregator;
pub use error::{ErrorScope, LogError, LogResult};
pub use extract::{process_log, process_record};
pub use types::{ExceptionsOverlay, ExtractOptions, FileReport, SchemaKind};
