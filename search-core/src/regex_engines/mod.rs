//! The two regex backends behind the matcher abstraction (Component D).
//!
//! Named `regex_engines` rather than `regex` to avoid shadowing the
//! `regex` crate this module's [`re2`] backend depends on.

#[cfg(feature = "regex")]
pub(crate) mod ecma;
#[cfg(feature = "regex")]
pub(crate) mod re2;

/// Normalizes a regex compiler's error message: strips any leading
/// diagnostic prefix up to and including the first `": "`, then re-prefixes
/// with the literal `"Invalid Regular expression: "`.
///
/// Ported from `search_regex.cpp::PreProcess`, which applied the same
/// transform to `std::regex`'s compile errors before surfacing them.
#[cfg(feature = "regex")]
pub(crate) fn normalize_regex_error(message: &str) -> String {
    let stripped = message.find(": ").map(|i| &message[i + 2..]).unwrap_or(message);
    format!("Invalid Regular expression: {stripped}")
}

#[cfg(all(test, feature = "regex"))]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_diagnostic_prefix() {
        assert_eq!(
            normalize_regex_error("regex parse error: unclosed group"),
            "Invalid Regular expression: unclosed group"
        );
    }

    #[test]
    fn leaves_message_unchanged_when_no_colon_space() {
        assert_eq!(
            normalize_regex_error("unclosed group"),
            "Invalid Regular expression: unclosed group"
        );
    }
}
