//! Host-information parsers: record splitting, header decoding, schema
//! routing and the Linux/Windows payload decoders.

pub mod header;
pub mod linux;
pub mod record;
pub mod windows;

use asup_protocol::{DecodedHostInfo, HostRecord};

use crate::error::{LogError, LogResult};
use crate::types::SchemaKind;

/// Literal that routes a payload to the Windows decoder.
const WINDOWS_MARKER: &str = "Windows";

/// Pick the decoder for a payload.
///
/// Content heuristic: any occurrence of `Windows` selects the Windows path,
/// including Linux payloads that merely mention the word.
pub fn route(payload: &str) -> SchemaKind {
    if payload.contains(WINDOWS_MARKER) {
        SchemaKind::Windows
    } else {
        SchemaKind::Linux
    }
}

/// Split a raw stream and decode every record header.
///
/// All-or-nothing: the first malformed record fails the whole stream.
pub fn extract_records(raw: &str) -> LogResult<Vec<HostRecord>> {
    record::RecordSplitter::new(raw)
        .map(|r| r.and_then(header::decode))
        .collect()
}

/// A decoded payload plus the Windows field errors tolerated along the way.
#[derive(Debug)]
pub struct Decoded {
    pub info: DecodedHostInfo,
    pub field_errors: Vec<LogError>,
}

impl Decoded {
    /// Kept even though some fields could not be decoded.
    pub fn is_partial(&self) -> bool {
        !self.field_errors.is_empty()
    }
}

/// Route and decode one payload.
///
/// A Windows payload is kept while at least one of its fields decoded.
pub fn decode_payload(payload: &str) -> LogResult<Decoded> {
    match route(payload) {
        SchemaKind::Linux => Ok(Decoded {
            info: DecodedHostInfo::Linux(linux::decode(payload)?),
            field_errors: Vec::new(),
        }),
        SchemaKind::Windows => {
            let decoded = windows::decode(payload)?;
            if decoded.decoded_fields() == 0 {
                return Err(LogError::Decode(
                    "no windows host info field could be decoded".into(),
                ));
            }
            Ok(Decoded {
                info: DecodedHostInfo::Windows(decoded.info),
                field_errors: decoded.field_errors,
            })
        }
    }
}
