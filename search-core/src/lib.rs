/*!
A fast, algorithm-selectable text-search core: plain byte-scan,
bit-parallel BNDM (32/64-bit), and Boyer-Moore substring engines, plus
ECMAScript-syntax and RE2-lineage regex engines, behind one non-generic
[`Matcher`] type.

## Features
- Six matching engines behind one entry point, selected per search via
  [`SearchAlgorithmKind`]
  - [`SearchAlgorithmKind::Plain`], [`SearchAlgorithmKind::Bndm32`],
    [`SearchAlgorithmKind::Bndm64`] and [`SearchAlgorithmKind::BoyerMoore`]
    for plain substrings, with an ASCII case-fold option that costs
    nothing in the hot loop (resolved at construction, not per byte)
  - [`SearchAlgorithmKind::EcmaRegex`] for lookaround and backreferences
  - [`SearchAlgorithmKind::Re2Regex`] for linear-time matching with no
    backtracking risk
- Whole-word filtering ([`SearchOptions::MATCH_WHOLE_WORD`]), applied
  uniformly regardless of which engine is selected
- A resumable [`SearchSession`] so repeated [`Matcher::find_next`] calls
  walk every non-overlapping match in a buffer

## Crate features
- `regex` (default): enables the `EcmaRegex` and `Re2Regex` engines,
  pulling in `fancy-regex` and `regex`.
- `perf-literal-substring` (default): accelerates the plain engine with a
  `memchr`-based first-byte prefilter.

## Usage
```
use search_core::{Matcher, SearchAlgorithmKind, SearchOptions, SearchSession};

let matcher = Matcher::create(
    SearchAlgorithmKind::Plain,
    b"needle",
    SearchOptions::MATCH_CASE,
)
.unwrap();

let mut session = SearchSession::new(b"a needle in a haystack");
matcher.find_next(&mut session);
assert_eq!(session.match_range(), Some(2..8));

matcher.find_next(&mut session);
assert_eq!(session.match_range(), None);
```
*/
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod casefold;
mod error;
pub mod matcher;
mod options;
#[cfg(feature = "regex")]
mod regex_engines;
mod session;

pub use casefold::{CaseFold, Insensitive, Sensitive};
pub use error::{SearchCreateError, SearchErrorKind, MESSAGE_BYTES_CAP};
pub use matcher::Matcher;
pub use options::{SearchAlgorithmKind, SearchOptions};
pub use session::SearchSession;

mod private {
    pub trait Sealed {}
}
pub(crate) use private::Sealed;
