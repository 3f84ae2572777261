//! The matcher abstraction (Component B): one non-generic entry point over
//! the six concrete engines, with the whole-word filter and zero-length
//! forward-progress bump applied uniformly regardless of which engine is
//! selected.

mod bndm;
mod boyer_moore;
mod plain;
mod whole_word;

use bndm::BndmEngine;
use boyer_moore::BoyerMooreEngine;
use plain::PlainEngine;

use crate::{
    casefold::{Insensitive, Sensitive},
    error::{SearchCreateError, SearchErrorKind},
    options::{SearchAlgorithmKind, SearchOptions},
    session::SearchSession,
};

/// Where the next scan should start, given the previous match (or `None`
/// for a fresh session). Matches resume at `start + max(len, 1)`, never
/// `start + 1`: substring engines pass their fixed pattern length as `len`
/// (so they resume past the whole match, not `+1`, per §4.3/§9's
/// restart-normalization note), while regex engines pass the reported
/// match length, bumped to 1 when zero-length so the scan always makes
/// forward progress (§4.5).
pub(crate) fn next_scan_start(match_start: Option<usize>, len: usize) -> usize {
    match match_start {
        Some(start) => start + len.max(1),
        None => 0,
    }
}

enum PlainVariant {
    Sensitive(PlainEngine<Sensitive>),
    Insensitive(PlainEngine<Insensitive>),
}

enum Bndm32Variant {
    Sensitive(BndmEngine<u32, Sensitive>),
    Insensitive(BndmEngine<u32, Insensitive>),
}

enum Bndm64Variant {
    Sensitive(BndmEngine<u64, Sensitive>),
    Insensitive(BndmEngine<u64, Insensitive>),
}

enum BoyerMooreVariant {
    Sensitive(BoyerMooreEngine<Sensitive>),
    Insensitive(BoyerMooreEngine<Insensitive>),
}

enum Engine {
    Plain(PlainVariant),
    Bndm32(Bndm32Variant),
    Bndm64(Bndm64Variant),
    BoyerMoore(BoyerMooreVariant),
    #[cfg(feature = "regex")]
    EcmaRegex(crate::regex_engines::ecma::EcmaRegexEngine),
    #[cfg(feature = "regex")]
    Re2Regex(crate::regex_engines::re2::Re2RegexEngine),
}

/// A stateful matcher over one `(pattern, options)` pair: the non-generic
/// tagged union named in the Design Notes as one way to model the five (six,
/// counting both BNDM widths) concrete engines without a vtable.
///
/// Created once via [`Matcher::create`], then driven by repeated
/// [`find_next`](Matcher::find_next) calls against a [`SearchSession`];
/// dropping the `Matcher` releases its pattern-derived tables (there is no
/// separate `Destroy` operation in Rust).
pub struct Matcher {
    engine: Engine,
    whole_word: bool,
}

fn pattern_too_long_for_word(max_len: usize) -> SearchCreateError {
    SearchCreateError::new(
        SearchErrorKind::InvalidArgument,
        format!("pattern is longer than {max_len} bytes"),
    )
}

#[cfg(not(feature = "regex"))]
fn regex_feature_disabled() -> SearchCreateError {
    SearchCreateError::new(
        SearchErrorKind::Internal,
        "the `regex` feature is not enabled",
    )
}

#[cfg(feature = "regex")]
fn pattern_as_str(pattern: &[u8]) -> Result<&str, SearchCreateError> {
    std::str::from_utf8(pattern)
        .map_err(|_| SearchCreateError::new(SearchErrorKind::InvalidArgument, "pattern is not valid UTF-8"))
}

impl Matcher {
    /// Constructs a matcher for `kind` over `pattern`, applying `options` at
    /// construction (not re-checked per byte in the hot loop — see
    /// [`CaseFold`]).
    pub fn create(
        kind: SearchAlgorithmKind,
        pattern: &[u8],
        options: SearchOptions,
    ) -> Result<Matcher, SearchCreateError> {
        log::trace!(
            "creating matcher: kind={kind:?} pattern_len={} options={options:?}",
            pattern.len()
        );

        let case_sensitive = options.contains(SearchOptions::MATCH_CASE);
        let whole_word = options.contains(SearchOptions::MATCH_WHOLE_WORD);

        let engine = match kind {
            SearchAlgorithmKind::Plain => Engine::Plain(if case_sensitive {
                PlainVariant::Sensitive(PlainEngine::new(pattern))
            } else {
                PlainVariant::Insensitive(PlainEngine::new(pattern))
            }),
            SearchAlgorithmKind::Bndm32 => Engine::Bndm32(if case_sensitive {
                Bndm32Variant::Sensitive(
                    BndmEngine::new(pattern).ok_or_else(|| pattern_too_long_for_word(32))?,
                )
            } else {
                Bndm32Variant::Insensitive(
                    BndmEngine::new(pattern).ok_or_else(|| pattern_too_long_for_word(32))?,
                )
            }),
            SearchAlgorithmKind::Bndm64 => Engine::Bndm64(if case_sensitive {
                Bndm64Variant::Sensitive(
                    BndmEngine::new(pattern).ok_or_else(|| pattern_too_long_for_word(64))?,
                )
            } else {
                Bndm64Variant::Insensitive(
                    BndmEngine::new(pattern).ok_or_else(|| pattern_too_long_for_word(64))?,
                )
            }),
            SearchAlgorithmKind::BoyerMoore => {
                if pattern.is_empty() {
                    return Err(SearchCreateError::new(
                        SearchErrorKind::InvalidArgument,
                        "Boyer-Moore requires a non-empty pattern",
                    ));
                }
                Engine::BoyerMoore(if case_sensitive {
                    BoyerMooreVariant::Sensitive(BoyerMooreEngine::new(pattern))
                } else {
                    BoyerMooreVariant::Insensitive(BoyerMooreEngine::new(pattern))
                })
            }
            #[cfg(feature = "regex")]
            SearchAlgorithmKind::EcmaRegex => {
                Engine::EcmaRegex(crate::regex_engines::ecma::EcmaRegexEngine::new(
                    pattern_as_str(pattern)?,
                    case_sensitive,
                )?)
            }
            #[cfg(not(feature = "regex"))]
            SearchAlgorithmKind::EcmaRegex => return Err(regex_feature_disabled()),
            #[cfg(feature = "regex")]
            SearchAlgorithmKind::Re2Regex => {
                Engine::Re2Regex(crate::regex_engines::re2::Re2RegexEngine::new(
                    pattern_as_str(pattern)?,
                    case_sensitive,
                )?)
            }
            #[cfg(not(feature = "regex"))]
            SearchAlgorithmKind::Re2Regex => return Err(regex_feature_disabled()),
        };

        Ok(Matcher { engine, whole_word })
    }

    /// The scratch memory this matcher's engine needs per concurrent
    /// session. Substring engines need none; the ECMAScript regex engine
    /// reports the size of one iterator state (see
    /// [`EcmaRegexEngine::search_buffer_size`](crate::regex_engines::ecma::EcmaRegexEngine::search_buffer_size)).
    pub fn search_buffer_size(&self) -> usize {
        match &self.engine {
            #[cfg(feature = "regex")]
            Engine::EcmaRegex(engine) => engine.search_buffer_size(),
            #[cfg(feature = "regex")]
            Engine::Re2Regex(engine) => engine.search_buffer_size(),
            _ => 0,
        }
    }

    /// Advances `session` to the next match, or sets its match to `None` on
    /// exhaustion. When `MatchWholeWord` was set at construction, this
    /// re-invokes the inner engine until a match is flanked by non-word
    /// bytes (or a buffer edge) on both sides, exactly as the original
    /// `AsciiSearchBase::FindNext` wraps `FindNextWorker`.
    pub fn find_next<'h>(&self, session: &mut SearchSession<'h>) {
        loop {
            self.find_next_raw(session);
            let Some(start) = session.match_start else {
                break;
            };
            if !self.whole_word {
                break;
            }
            if whole_word::is_whole_word_match(session.text, start, session.match_len) {
                break;
            }
        }
    }

    fn find_next_raw<'h>(&self, session: &mut SearchSession<'h>) {
        match &self.engine {
            Engine::Plain(v) => match v {
                PlainVariant::Sensitive(e) => e.find_next(session),
                PlainVariant::Insensitive(e) => e.find_next(session),
            },
            Engine::Bndm32(v) => match v {
                Bndm32Variant::Sensitive(e) => e.find_next(session),
                Bndm32Variant::Insensitive(e) => e.find_next(session),
            },
            Engine::Bndm64(v) => match v {
                Bndm64Variant::Sensitive(e) => e.find_next(session),
                Bndm64Variant::Insensitive(e) => e.find_next(session),
            },
            Engine::BoyerMoore(v) => match v {
                BoyerMooreVariant::Sensitive(e) => e.find_next(session),
                BoyerMooreVariant::Insensitive(e) => e.find_next(session),
            },
            #[cfg(feature = "regex")]
            Engine::EcmaRegex(e) => e.find_next(session),
            #[cfg(feature = "regex")]
            Engine::Re2Regex(e) => e.find_next(session),
        }
    }

    /// Releases any session-scoped state and resets the session to "no
    /// match yet". Always safe to call, including with no active session
    /// (idempotent — see §5's "Cancel idempotence").
    pub fn cancel_search<'h>(&self, session: &mut SearchSession<'h>) {
        session.match_start = None;
        session.match_len = 0;
    }
}
