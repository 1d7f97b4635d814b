//! `<itn_info>` record header decoder.

use asup_protocol::{HostRecord, RawRecord, TIMESTAMP_LEN};
use quick_xml::Reader;
use quick_xml::events::Event;

use crate::error::{LogError, LogResult};

const TIMESTAMP_TAG: &[u8] = b"TimeStamp";

/// Decode the header's `TimeStamp` and promote the pair to a `HostRecord`.
///
/// The header may be an unterminated fragment (`<root><itn_info>…</itn_info>`),
/// so it is scanned as events rather than deserialized as a document.
pub fn decode(raw: RawRecord) -> LogResult<HostRecord> {
    let timestamp = extract_timestamp(&raw.header)?;
    let len = timestamp.chars().count();
    if len != TIMESTAMP_LEN {
        return Err(LogError::MalformedRecord(format!(
            "timestamp {timestamp:?} has length {len}, expected {TIMESTAMP_LEN}"
        )));
    }
    Ok(HostRecord {
        timestamp,
        header: raw.header,
        payload: raw.payload,
    })
}

fn extract_timestamp(header: &str) -> LogResult<String> {
    let mut reader = Reader::from_str(header);
    let mut inside = false;
    let mut timestamp: Option<String> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) if e.name().as_ref() == TIMESTAMP_TAG => {
                inside = true;
                timestamp.get_or_insert_with(String::new);
            }
            Ok(Event::Empty(e)) if e.name().as_ref() == TIMESTAMP_TAG => {
                timestamp = Some(String::new());
                break;
            }
            Ok(Event::Text(t)) if inside => {
                let text = t
                    .unescape()
                    .map_err(|e| LogError::MalformedRecord(format!("header timestamp: {e}")))?;
                timestamp.get_or_insert_with(String::new).push_str(&text);
            }
            Ok(Event::End(e)) if e.name().as_ref() == TIMESTAMP_TAG => break,
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => {
                return Err(LogError::MalformedRecord(format!(
                    "header XML at byte {}: {e}",
                    reader.buffer_position()
                )));
            }
        }
    }

    timestamp.ok_or_else(|| LogError::MalformedRecord("header carries no TimeStamp".into()))
}
