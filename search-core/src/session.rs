//! The per-search iteration handle.

use std::ops::Range;

/// The span between the first `find_next` against a fresh session and
/// either exhaustion or an explicit [`cancel_search`](crate::Matcher::cancel_search).
///
/// This replaces the original `SearchParams` record and its caller-owned
/// scratch buffer: the text window and the current match are owned here
/// directly, and any engine-internal per-session state (a regex find
/// iterator, for substring engines nothing) is recomputed from
/// `match_start`/`match_len` on each call rather than kept alive across
/// calls, so there is nothing to place-construct or tear down explicitly.
pub struct SearchSession<'h> {
    pub(crate) text: &'h [u8],
    pub(crate) match_start: Option<usize>,
    pub(crate) match_len: usize,
}

impl<'h> SearchSession<'h> {
    /// Starts a fresh session over `text`. The first `find_next` call scans
    /// from the start of `text`.
    pub fn new(text: &'h [u8]) -> Self {
        Self {
            text,
            match_start: None,
            match_len: 0,
        }
    }

    /// The text window this session searches.
    pub fn text(&self) -> &'h [u8] {
        self.text
    }

    /// The start of the most recently reported match, or `None` before the
    /// first match and after exhaustion.
    pub fn match_start(&self) -> Option<usize> {
        self.match_start
    }

    /// The length of the most recently reported match. Unspecified
    /// (defined to be `0` here, though callers should not rely on reading
    /// it) when [`match_start`](Self::match_start) is `None`.
    pub fn match_len(&self) -> usize {
        self.match_len
    }

    /// The byte range of the most recently reported match, if any.
    pub fn match_range(&self) -> Option<Range<usize>> {
        self.match_start.map(|start| start..start + self.match_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_has_no_match() {
        let session = SearchSession::new(b"hello");
        assert_eq!(session.match_start(), None);
        assert_eq!(session.match_range(), None);
    }
}
