//! Host-information extraction error types.

use thiserror::Error;

/// How far an error reaches: the orchestrator abandons the matching unit
/// and carries on with the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorScope {
    Record,
    File,
    Bundle,
}

/// Errors that can occur while extracting host information.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("malformed archive: {0}")]
    MalformedArchive(String),

    #[error("malformed record: {0}")]
    MalformedRecord(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl LogError {
    pub fn scope(&self) -> ErrorScope {
        match self {
            Self::Decode(_) => ErrorScope::Record,
            Self::MalformedRecord(_) => ErrorScope::File,
            Self::MalformedArchive(_) | Self::Io(_) => ErrorScope::Bundle,
        }
    }
}

/// Convenience alias for extraction results.
pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scopes_follow_taxonomy() {
        assert_eq!(LogError::Decode("x".into()).scope(), ErrorScope::Record);
        assert_eq!(LogError::MalformedRecord("x".into()).scope(), ErrorScope::File);
        assert_eq!(LogError::MalformedArchive("x".into()).scope(), ErrorScope::Bundle);
        assert_eq!(LogError::Io("x".into()).scope(), ErrorScope::Bundle);
        assert!(ErrorScope::Record < ErrorScope::Bundle);
    }

    #[test]
    fn display_includes_context() {
        let err = LogError::MalformedRecord("timestamp length 19, expected 24".into());
        assert_eq!(
            err.to_string(),
            "malformed record: timestamp length 19, expected 24"
        );
    }
}
