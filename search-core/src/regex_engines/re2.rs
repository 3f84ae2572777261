//! RE2-lineage regex backend: linear-time DFA/NFA matching, no
//! backreferences. Wraps [`regex::bytes::Regex`] — the `regex` crate
//! documents its own engine as RE2-inspired, matching this contract
//! directly.

use crate::{
    error::{SearchCreateError, SearchErrorKind},
    matcher::next_scan_start,
    regex_engines::normalize_regex_error,
    session::SearchSession,
};

pub(crate) struct Re2RegexEngine {
    regex: regex::bytes::Regex,
}

impl Re2RegexEngine {
    /// `case_sensitive` mirrors `SearchOptions::MATCH_CASE`: when unset, the
    /// `regex` crate's own `case_insensitive` builder option is set,
    /// matching `std::regex::icase` in the original engine's construction.
    pub(crate) fn new(pattern: &str, case_sensitive: bool) -> Result<Self, SearchCreateError> {
        log::trace!("compiling RE2-lineage regex: {pattern:?} case_sensitive={case_sensitive}");
        regex::bytes::RegexBuilder::new(pattern)
            .unicode(false)
            .case_insensitive(!case_sensitive)
            .build()
            .map(|regex| Self { regex })
            .map_err(|err| {
                let message = normalize_regex_error(&err.to_string());
                log::debug!("RE2-lineage regex compile failed: {message}");
                SearchCreateError::new(SearchErrorKind::InvalidArgument, message)
            })
    }

    /// This engine is stateless across calls beyond the compiled pattern
    /// (§4.4): every `find_next` asks for the next unanchored match
    /// directly, so no session-scoped scratch memory is needed.
    pub(crate) fn search_buffer_size(&self) -> usize {
        0
    }

    pub(crate) fn find_next<'h>(&self, session: &mut SearchSession<'h>) {
        let start = next_scan_start(session.match_start, session.match_len);
        if start > session.text.len() {
            session.match_start = None;
            session.match_len = 0;
            return;
        }

        match self.regex.find_at(session.text, start) {
            Some(m) => {
                session.match_start = Some(m.start());
                session.match_len = m.end() - m.start();
            }
            None => {
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
        let engine = Re2RegexEngine::new(pattern, case_sensitive).unwrap();
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
    fn zero_length_matches_bump_forward() {
        assert_eq!(run("a*", b"bbb"), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }

    #[test]
    fn alternation_and_repetition() {
        assert_eq!(run(r"(foo|ba+r)", b"foo baaar x"), vec![(0, 3), (4, 6)]);
    }

    #[test]
    fn backreferences_are_rejected_at_compile_time() {
        let err = Re2RegexEngine::new(r"(\w+) \1", true).unwrap_err();
        assert_eq!(err.kind, SearchErrorKind::InvalidArgument);
    }

    #[test]
    fn invalid_pattern_is_reported_with_normalized_message() {
        let err = Re2RegexEngine::new("(unclosed", true).unwrap_err();
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
    fn search_buffer_size_is_zero() {
        let engine = Re2RegexEngine::new("a", true).unwrap();
        assert_eq!(engine.search_buffer_size(), 0);
    }
}
