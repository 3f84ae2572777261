//! ECMAScript-syntax regex backend: lookaround and backreferences allowed,
//! at the cost of worst-case backtracking. Wraps [`fancy_regex::Regex`],
//! the standard ecosystem crate for this exact contract.

use crate::{
    error::{SearchCreateError, SearchErrorKind},
    matcher::next_scan_start,
    regex_engines::normalize_regex_error,
    session::SearchSession,
};

/// A representative stand-in for the per-session iterator state this engine
/// would place-construct into caller-owned scratch memory in the source
/// this crate's session model is distilled from. This crate recomputes the
/// next match from `session.match_start`/`match_len` on every call instead
/// of keeping a live `fancy_regex` iterator across calls (so there is no
/// self-referential state to store) — but [`search_buffer_size`] still
/// reports a non-zero size for this engine, preserving the tested
/// contract that the ECMAScript engine (unlike the substring engines)
/// requires session-scoped memory.
///
/// [`search_buffer_size`]: EcmaRegexEngine::search_buffer_size
struct SessionStateShape {
    _match_start: usize,
    _match_end: usize,
}

pub(crate) struct EcmaRegexEngine {
    regex: fancy_regex::Regex,
}

impl EcmaRegexEngine {
    /// `case_sensitive` mirrors `SearchOptions::MATCH_CASE`: when unset, the
    /// pattern is compiled with an inline `(?i)` flag, the `fancy_regex`
    /// equivalent of `std::regex::icase` in `search_regex.cpp`'s
    /// construction of the original engine.
    pub(crate) fn new(pattern: &str, case_sensitive: bool) -> Result<Self, SearchCreateError> {
        log::trace!("compiling ECMAScript regex: {pattern:?} case_sensitive={case_sensitive}");
        let pattern = if case_sensitive {
            pattern.to_owned()
        } else {
            format!("(?i){pattern}")
        };
        fancy_regex::Regex::new(&pattern)
            .map(|regex| Self { regex })
            .map_err(|err| {
                let message = normalize_regex_error(&err.to_string());
                log::debug!("ECMAScript regex compile failed: {message}");
                SearchCreateError::new(SearchErrorKind::InvalidArgument, message)
            })
    }

    pub(crate) fn search_buffer_size(&self) -> usize {
        std::mem::size_of::<SessionStateShape>()
    }

    /// `session.text` is only required to be UTF-8 up to the point of the
    /// search: matches found at or before the first invalid byte are still
    /// reported, so a binary-ish buffer doesn't go fully dark for this
    /// engine alone (see DESIGN.md's "ECMAScript engine and non-UTF-8 text"
    /// resolution). The search never looks past that first invalid byte,
    /// since `fancy_regex` has no byte-slice API to fall back to there.
    pub(crate) fn find_next<'h>(&self, session: &mut SearchSession<'h>) {
        let text = match std::str::from_utf8(session.text) {
            Ok(text) => text,
            Err(err) => std::str::from_utf8(&session.text[..err.valid_up_to()])
                .expect("valid_up_to() always lands on a UTF-8 char boundary"),
        };

        let start = next_scan_start(session.match_start, session.match_len);
        if start > text.len() {
            session.match_start = None;
            session.match_len = 0;
            return;
        }

        match self.regex.find_from_pos(text, start) {
            Ok(Some(m)) => {
                session.match_start = Some(m.start());
                session.match_len = m.end() - m.start();
            }
            _ => {
                session.match_start = None;
                session.match_len = 0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(pattern: &str, text: &[u8]) -> Vec<(usize, usize)> {
        run_with_case(pattern, text, true)
    }

    fn run_with_case(pattern: &str, text: &[u8], case_sensitive: bool) -> Vec<(usize, usize)> {
        let engine = EcmaRegexEngine::new(pattern, case_sensitive).unwrap();
        let mut session = SearchSession::new(text);
        let mut matches = Vec::new();
        loop {
            engine.find_next(&mut session);
            match session.match_start() {
                Some(start) => matches.push((start, session.match_len())),
                None => break,
            }
        }
        matches
    }

    #[test]
    fn scenario_4_zero_length_matches_bump_forward() {
        assert_eq!(run("a*", b"bbb"), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn lookahead_is_supported() {
        assert_eq!(run(r"foo(?=bar)", b"foobar foobaz"), vec![(0, 3)]);
    }

    #[test]
    fn backreference_is_supported() {
        assert_eq!(run(r"(\w+) \1", b"hello hello world"), vec![(0, 11)]);
    }

    #[test]
    fn invalid_pattern_is_reported_with_normalized_message() {
        let err = EcmaRegexEngine::new("(unclosed", true).unwrap_err();
        assert_eq!(err.kind, SearchErrorKind::InvalidArgument);
        assert!(err.message.starts_with("Invalid Regular expression: "));
    }

    #[test]
    fn match_case_unset_folds_both_pattern_and_text() {
        assert_eq!(
            run_with_case("cat", b"Cat CAT cAt", false),
            vec![(0, 3), (4, 3), (8, 3)]
        );
    }

    #[test]
    fn match_case_set_is_case_sensitive() {
        assert_eq!(run_with_case("cat", b"Cat CAT cAt", true), Vec::new());
    }

    #[test]
    fn non_utf8_text_is_dark_only_past_the_first_invalid_byte() {
        let engine = EcmaRegexEngine::new("a", true).unwrap();

        // Entirely invalid from byte 0: no valid prefix to search.
        let mut session = SearchSession::new(&[0xFF, 0xFE]);
        engine.find_next(&mut session);
        assert_eq!(session.match_start(), None);

        // A match before the first invalid byte is still found rather than
        // the whole buffer going dark.
        let mut session = SearchSession::new(b"ab\xFFcd");
        engine.find_next(&mut session);
        assert_eq!(session.match_range(), Some(0..1));
        engine.find_next(&mut session);
        assert_eq!(session.match_start(), None);
    }
}
