//! Record splitter for raw `hi_info_collect.log` streams.
//!
//! A stream is a concatenation of records, each an `<itn_info>` header
//! followed by a host-information payload closed by `</root>`. Block-aligned
//! writes pad the tail of the file with NUL bytes.

use asup_protocol::RawRecord;

use crate::error::{LogError, LogResult};

const RECORD_END: &str = "</root>";
const HEADER_END: &str = "</itn_info>";
const ENVELOPE_START: &str = "<root>";

enum SplitState {
    /// Scanning for the next record's header.
    ExpectHeader,
    /// Header consumed; the rest of the chunk is the payload.
    ExpectPayload { header: String, rest: String },
    /// End of valid data, or a malformed record was reported.
    Done,
}

/// Forward-scanning splitter yielding one `RawRecord` per `</root>`-terminated
/// chunk.
///
/// Stops at the first chunk that is empty after stripping padding; later
/// chunks are never examined. A chunk with other than exactly one
/// `</itn_info>` yields a `MalformedRecord` error and ends the iteration.
pub struct RecordSplitter<'a> {
    text: &'a str,
    pos: usize,
    state: SplitState,
}

impl<'a> RecordSplitter<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            state: SplitState::ExpectHeader,
        }
    }

    /// Next chunk up to and including `</root>`, or the unterminated tail.
    fn next_chunk(&mut self) -> Option<&'a str> {
        if self.pos >= self.text.len() {
            return None;
        }
        let rest = &self.text[self.pos..];
        let end = rest
            .find(RECORD_END)
            .map(|i| i + RECORD_END.len())
            .unwrap_or(rest.len());
        self.pos += end;
        Some(&rest[..end])
    }
}

impl Iterator for RecordSplitter<'_> {
    type Item = LogResult<RawRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match std::mem::replace(&mut self.state, SplitState::Done) {
                SplitState::ExpectHeader => {
                    let chunk = strip_padding(self.next_chunk()?);
                    if chunk.is_empty() {
                        return None;
                    }
                    match split_header(chunk) {
                        Ok((header, rest)) => {
                            self.state = SplitState::ExpectPayload {
                                header: header.to_string(),
                                rest: rest.to_string(),
                            }
                        }
                        Err(e) => return Some(Err(e)),
                    }
                }
                SplitState::ExpectPayload { header, rest } => {
                    self.state = SplitState::ExpectHeader;
                    let payload = payload_text(&header, &rest).to_string();
                    return Some(Ok(RawRecord { header, payload }));
                }
                SplitState::Done => return None,
            }
        }
    }
}

/// NUL bytes first, then whitespace; NULs shielded by whitespace survive.
fn strip_padding(chunk: &str) -> &str {
    chunk.trim_matches('\0').trim()
}

/// Split a chunk after its single `</itn_info>`.
fn split_header(chunk: &str) -> LogResult<(&str, &str)> {
    let count = chunk.matches(HEADER_END).count();
    if count != 1 {
        return Err(LogError::MalformedRecord(format!(
            "expected 2 header/payload segments, found {}",
            count + 1
        )));
    }
    let split = chunk.find(HEADER_END).unwrap_or_default() + HEADER_END.len();
    Ok((chunk[..split].trim(), chunk[split..].trim()))
}

/// When the header opened a `<root>` envelope, the closing `</root>` is the
/// envelope's and not part of the payload.
fn payload_text<'s>(header: &str, rest: &'s str) -> &'s str {
    if header.starts_with(ENVELOPE_START) {
        rest.strip_suffix(RECORD_END).unwrap_or(rest).trim()
    } else {
        rest
    }
}

/// Split a stream into records, failing on the first malformed one.
#[cfg(test)]
fn split_records(text: &str) -> LogResult<Vec<RawRecord>> {
    RecordSplitter::new(text).collect()
}
