//! Line-extent computation for both 8-bit and 16-bit text.

use crate::Sealed;

/// A code unit a line can be built out of: `u8` (bytes, possibly UTF-8) or
/// `u16` (UTF-16). Sealed: the line terminator below only makes sense for
/// these two widths.
pub trait CodeUnit: Sealed + Copy + PartialEq + 'static {
    const LF: Self;
}

impl CodeUnit for u8 {
    const LF: Self = b'\n';
}

impl CodeUnit for u16 {
    const LF: Self = b'\n' as u16;
}

/// Returns the `(start, length)` of the line enclosing `position`, scanning
/// no further than `max_offset` code units in either direction.
///
/// `position` must be a valid index into `text` (or `text.len()`, to mean
/// "just past the end"); `max_offset` bounds the backward and forward scan
/// distance independently, so a caller with only a window of a much larger
/// document can cap the cost of an unterminated "line".
///
/// A line is delimited by `\n` only (this module does not treat `\r` as a
/// terminator, matching `GetLineExtentFromPosition`'s own `nl == '\n'`
/// check). The returned length includes the newline when one is found
/// within the forward window; it is not stripped.
pub fn line_extent<T: CodeUnit>(text: &[T], position: usize, max_offset: usize) -> (usize, usize) {
    let position = position.min(text.len());

    let back_limit = position.saturating_sub(max_offset);
    let mut start = position;
    while start > back_limit {
        if text[start - 1] == T::LF {
            break;
        }
        start -= 1;
    }

    let forward_limit = (position + max_offset).min(text.len());
    let mut end = position;
    while end < forward_limit {
        let at_newline = text[end] == T::LF;
        end += 1;
        if at_newline {
            break;
        }
    }

    (start, end - start)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_of_single_line() {
        let text = b"hello world";
        assert_eq!(line_extent(text, 6, 100), (0, 11));
    }

    #[test]
    fn second_of_three_lf_lines() {
        let text = b"one\ntwo\nthree";
        // position inside "two" (index 5 is 'w'); length includes the
        // trailing '\n'.
        assert_eq!(line_extent(text, 5, 100), (4, 4));
    }

    #[test]
    fn scenario_7_line_extent_round_trip() {
        let text = b"aa\nbbb\ncc";
        assert_eq!(line_extent(text, 4, 100), (3, 4));
    }

    #[test]
    fn carriage_return_is_not_a_terminator() {
        // '\r' is not special: a lone '\r' inside "one\r\ntwo" is just part
        // of the line, and only the '\n' ends it (included in the length).
        let text = b"one\r\ntwo";
        assert_eq!(line_extent(text, 1, 100), (0, 5));
        assert_eq!(line_extent(text, 6, 100), (5, 3));
    }

    #[test]
    fn lone_carriage_return_is_not_a_terminator() {
        // No '\n' anywhere, so the whole buffer is one line regardless of
        // where '\r' falls within it.
        let text = b"one\rtwo";
        assert_eq!(line_extent(text, 1, 100), (0, 7));
        assert_eq!(line_extent(text, 5, 100), (0, 7));
    }

    #[test]
    fn position_at_end_of_text() {
        let text = b"abc";
        assert_eq!(line_extent(text, 3, 100), (0, 3));
    }

    #[test]
    fn empty_text() {
        let text: &[u8] = b"";
        assert_eq!(line_extent(text, 0, 100), (0, 0));
    }

    #[test]
    fn max_offset_truncates_long_line() {
        let text = b"aaaaaaaaaaXbbbbbbbbbb";
        // position at the 'X' (index 10), only allowed to look 3 either way,
        // and no '\n' anywhere in range to extend the length.
        assert_eq!(line_extent(text, 10, 3), (7, 6));
    }

    #[test]
    fn utf16_code_units() {
        let text: Vec<u16> = "one\ntwo\nthree".encode_utf16().collect();
        assert_eq!(line_extent(&text, 5, 100), (4, 4));
    }
}
