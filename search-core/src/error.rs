//! Construction-time error reporting.

use thiserror::Error;

/// Coarse classification of a matcher-construction failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchErrorKind {
    /// Table/automaton allocation failed.
    OutOfMemory,
    /// The pattern (or pattern/algorithm combination) is not acceptable,
    /// e.g. an unparsable regex or a pattern longer than a BNDM word.
    InvalidArgument,
    /// An unclassified backend failure.
    Internal,
}

/// The only error this crate returns. `Matcher::find_next` never fails
/// (exhaustion is `None`, not an error) — this type exists solely for
/// `Matcher::create`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{kind:?}: {message}")]
pub struct SearchCreateError {
    pub kind: SearchErrorKind,
    pub message: String,
}

/// Message buffers longer than this are truncated by [`SearchCreateError::message_bytes`].
///
/// This is a compatibility constraint inherited from the ABI this crate's
/// semantics were distilled from, where `SearchCreateResult` carried a fixed
/// 128-byte message buffer. Nothing in this crate requires a fixed buffer,
/// but callers that once depended on the 128-byte cap can still get
/// byte-identical truncation behavior from this method.
pub const MESSAGE_BYTES_CAP: usize = 128;

impl SearchCreateError {
    pub fn new(kind: SearchErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns [`message`](Self::message) truncated to at most
    /// [`MESSAGE_BYTES_CAP`] bytes, cut on a UTF-8 character boundary (never
    /// in the middle of a multi-byte sequence).
    pub fn message_bytes(&self) -> &[u8] {
        let bytes = self.message.as_bytes();
        if bytes.len() <= MESSAGE_BYTES_CAP {
            return bytes;
        }
        let mut end = MESSAGE_BYTES_CAP;
        while !self.message.is_char_boundary(end) {
            end -= 1;
        }
        &bytes[..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_bytes_under_cap_is_unchanged() {
        let err = SearchCreateError::new(SearchErrorKind::InvalidArgument, "short message");
        assert_eq!(err.message_bytes(), b"short message");
    }

    #[test]
    fn message_bytes_truncates_on_char_boundary() {
        // 127 ASCII bytes followed by a 2-byte character straddling the cap.
        let mut message = "a".repeat(127);
        message.push('\u{e9}');
        let err = SearchCreateError::new(SearchErrorKind::Internal, message);
        let truncated = err.message_bytes();
        assert!(truncated.len() <= MESSAGE_BYTES_CAP);
        assert!(std::str::from_utf8(truncated).is_ok());
        assert_eq!(truncated.len(), 127);
    }
}
