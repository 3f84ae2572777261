//! Boyer-Moore substring engine, ported from `search_boyer_moore.cpp`'s
//! `make_delta1`/`make_delta2`/`boyer_moore_algo`.

use std::marker::PhantomData;

use crate::{casefold::CaseFold, matcher::next_scan_start, session::SearchSession};

const ALPHABET_LEN: usize = 256;

/// Bad-character shift: `delta1[c]` is how far the pattern can slide so its
/// rightmost occurrence of `c` lines up with the mismatching text byte, or
/// `pattern.len()` if `c` does not occur in the pattern at all.
fn make_delta1(pattern: &[u8]) -> Box<[i32; ALPHABET_LEN]> {
    let not_found = pattern.len() as i32;
    let mut delta1 = Box::new([not_found; ALPHABET_LEN]);
    for i in 0..pattern.len().saturating_sub(1) {
        delta1[pattern[i] as usize] = (pattern.len() - 1 - i) as i32;
    }
    delta1
}

/// True if the suffix of `word` starting at `pos` is also a prefix of `word`.
fn is_prefix(word: &[u8], pos: usize) -> bool {
    let suffix_len = word.len() - pos;
    (0..suffix_len).all(|i| word[i] == word[pos + i])
}

/// The length of the longest suffix of `word` ending at `word[pos]` that
/// also matches the corresponding suffix of the whole pattern.
fn suffix_length(word: &[u8], pos: usize) -> usize {
    let mut i = 0;
    while i < pos && word[pos - i] == word[word.len() - 1 - i] {
        i += 1;
    }
    i
}

/// Good-suffix shift, built in two passes: the first handles the case where
/// the unmatched suffix doesn't recur elsewhere in the pattern (aligning on
/// the next prefix that could match); the second handles the case where it
/// does recur, using the minimum of all matching suffix placements.
fn make_delta2(pattern: &[u8]) -> Vec<i32> {
    let n = pattern.len();
    let mut delta2 = vec![0i32; n];
    let mut last_prefix_index = n - 1;

    for p in (0..n).rev() {
        if is_prefix(pattern, p + 1) {
            last_prefix_index = p + 1;
        }
        delta2[p] = (last_prefix_index + (n - 1 - p)) as i32;
    }

    for p in 0..n.saturating_sub(1) {
        let slen = suffix_length(pattern, p);
        if p >= slen && pattern[p - slen] != pattern[n - 1 - slen] {
            delta2[n - 1 - slen] = (n - 1 - p + slen) as i32;
        }
    }

    delta2
}

pub(crate) struct BoyerMooreEngine<F: CaseFold> {
    /// Pattern bytes, folded once at construction.
    pattern: Vec<u8>,
    delta1: Box<[i32; ALPHABET_LEN]>,
    delta2: Vec<i32>,
    _fold: PhantomData<F>,
}

impl<F: CaseFold> BoyerMooreEngine<F> {
    /// `pattern` must not be empty; the delta tables are undefined for a
    /// zero-length pattern, matching the original's assumption.
    pub(crate) fn new(pattern: &[u8]) -> Self {
        debug_assert!(!pattern.is_empty(), "Boyer-Moore requires a non-empty pattern");
        let folded: Vec<u8> = pattern.iter().map(|&b| F::fold(b)).collect();
        let delta1 = make_delta1(&folded);
        let delta2 = make_delta2(&folded);
        Self {
            pattern: folded,
            delta1,
            delta2,
            _fold: PhantomData,
        }
    }

    pub(crate) fn find_next<'h>(&self, session: &mut SearchSession<'h>) {
        let start = next_scan_start(session.match_start, self.pattern.len());
        match self.find_from(session.text, start) {
            Some(pos) => {
                session.match_start = Some(pos);
                session.match_len = self.pattern.len();
            }
            None => {
                session.match_start = None;
                session.match_len = 0;
            }
        }
    }

    fn find_from(&self, text: &[u8], start: usize) -> Option<usize> {
        let m = self.pattern.len();
        if start > text.len() || m > text.len() - start {
            return None;
        }

        let mut i: isize = (start + m - 1) as isize;
        let text_len = text.len() as isize;
        while i < text_len {
            let mut j: isize = m as isize - 1;
            while j >= 0 && F::fold(text[i as usize]) == self.pattern[j as usize] {
                i -= 1;
                j -= 1;
            }
            if j < 0 {
                return Some((i + 1) as usize);
            }

            let bad_char_shift = self.delta1[F::fold(text[i as usize]) as usize];
            let good_suffix_shift = self.delta2[j as usize];
            i += bad_char_shift.max(good_suffix_shift) as isize;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::casefold::Sensitive;

    fn run<F: CaseFold>(pattern: &[u8], text: &[u8]) -> Vec<(usize, usize)> {
        let engine = BoyerMooreEngine::<F>::new(pattern);
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
    fn scenario_3_empty_text_has_no_matches() {
        assert_eq!(run::<Sensitive>(b"needle", b""), Vec::new());
    }

    #[test]
    fn finds_single_occurrence() {
        assert_eq!(run::<Sensitive>(b"needle", b"a needle in a haystack"), vec![(2, 6)]);
    }

    #[test]
    fn repeated_letter_pattern_exercises_good_suffix_table() {
        // Matches the worked example in make_delta2's doc comment source.
        assert_eq!(run::<Sensitive>(b"aaa", b"aaaaaa"), vec![(0, 3), (3, 3)]);
    }

    #[test]
    fn good_suffix_recurrence_case() {
        assert_eq!(
            run::<Sensitive>(b"ABYXCDEYX", b".....ABYXCDEYX"),
            vec![(5, 9)]
        );
    }
}
