//! Matcher kind selection and the search-options bitset.

use bitflags::bitflags;

/// Selects a concrete matching engine. Mirrors the five-algorithm family
/// this crate's matcher abstraction dispatches over; BNDM is split into a
/// 32-bit and a 64-bit word variant by maximum pattern length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchAlgorithmKind {
    /// Straightforward byte scan. No pattern-length limit.
    Plain,
    /// Bit-parallel BNDM over a 32-bit word; patterns up to 32 bytes.
    Bndm32,
    /// Bit-parallel BNDM over a 64-bit word; patterns up to 64 bytes.
    Bndm64,
    /// Boyer-Moore with bad-character and good-suffix shift tables.
    BoyerMoore,
    /// ECMAScript-syntax regex: lookaround and backreferences allowed.
    EcmaRegex,
    /// RE2-lineage regex: linear-time DFA/NFA, no backreferences.
    Re2Regex,
}

bitflags! {
    /// Options shared by every matcher kind.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SearchOptions: u32 {
        /// When unset, both pattern and text are ASCII-folded
        /// (`[A-Z] -> [a-z]`) before comparison.
        const MATCH_CASE = 0x0001;
        /// Require matches to be flanked by non-word bytes (or a buffer
        /// edge) on both sides. See [`crate::matcher`]'s whole-word filter.
        const MATCH_WHOLE_WORD = 0x0002;
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions::empty()
    }
}
