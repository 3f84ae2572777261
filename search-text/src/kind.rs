//! Heuristic ASCII / UTF-8 / binary text classification.

use crate::ascii::find_non_ascii_byte;

/// The outcome of classifying a text window's content.
///
/// Combines the UTF-8 BOM test with the content-kind heuristic below into
/// the five tags a host cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKind {
    Ascii,
    AsciiWithUtf8Bom,
    Utf8,
    Utf8WithBom,
    ProbablyBinary,
}

/// `text.len() >= 3 && text[0..3] == [0xEF, 0xBB, 0xBF]`.
pub fn has_utf8_bom(text: &[u8]) -> bool {
    text.len() >= 3 && text[0] == 0xEF && text[1] == 0xBB && text[2] == 0xBF
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContentKind {
    Ascii,
    Utf8,
    Binary,
}

const MASK_SEQ2: u8 = 0xE0; // 111x-xxxx
const MASK_SEQ3: u8 = 0xF0; // 1111-xxxx
const MASK_SEQ4: u8 = 0xF8; // 1111-1xxx
const MASK_REST: u8 = 0xC0; // 11xx-xxxx

const VALUE_SEQ2: u8 = 0xC0; // 110x-xxxx
const VALUE_SEQ3: u8 = 0xE0; // 1110-xxxx
const VALUE_SEQ4: u8 = 0xF0; // 1111-0xxx
const VALUE_REST: u8 = 0x80; // 10xx-xxxx

fn is_rest(b: u8) -> bool {
    b & MASK_REST == VALUE_REST
}

/// If `text` starts with a well-formed 2/3/4-byte UTF-8 sequence, returns its
/// length. A truncated or malformed lead byte is not a rune: only the lead
/// byte itself is charged to the caller in that case.
fn utf8_rune_len(text: &[u8]) -> Option<usize> {
    let lead = *text.first()?;
    if lead & MASK_SEQ4 == VALUE_SEQ4 {
        if text.len() >= 4 && is_rest(text[1]) && is_rest(text[2]) && is_rest(text[3]) {
            return Some(4);
        }
    } else if lead & MASK_SEQ3 == VALUE_SEQ3 {
        if text.len() >= 3 && is_rest(text[1]) && is_rest(text[2]) {
            return Some(3);
        }
    } else if lead & MASK_SEQ2 == VALUE_SEQ2 {
        if text.len() >= 2 && is_rest(text[1]) {
            return Some(2);
        }
    }
    None
}

/// Printable ASCII `[0x20, 0x7E]` or one of `\t \r \n`. See
/// <http://www.asciitable.com/>.
fn is_printable_ascii(b: u8) -> bool {
    (0x20..=0x7E).contains(&b) || matches!(b, b'\t' | b'\r' | b'\n')
}

fn content_kind(mut text: &[u8]) -> ContentKind {
    let mut ascii_count: u64 = 0;
    let mut utf8_count: u64 = 0;
    let mut other_count: u64 = 0;

    while !text.is_empty() {
        // Skip a run of plain ASCII in one shot rather than one byte at a
        // time; non-printable ASCII (e.g. NUL) still has to fall through to
        // the per-byte classification below.
        if is_printable_ascii(text[0]) {
            let run_end = find_non_ascii_byte(text).unwrap_or(text.len());
            let run = &text[..run_end];
            let printable_run_end = run
                .iter()
                .position(|&b| !is_printable_ascii(b))
                .unwrap_or(run.len());
            ascii_count += printable_run_end as u64;
            text = &text[printable_run_end..];
            continue;
        }

        if let Some(len) = utf8_rune_len(text) {
            utf8_count += 1;
            text = &text[len..];
        } else {
            other_count += 1;
            text = &text[1..];
        }
    }

    if other_count == 0 {
        return if utf8_count == 0 {
            ContentKind::Ascii
        } else {
            ContentKind::Utf8
        };
    }

    let ascii_to_other_ratio = ascii_count as f64 / other_count as f64;
    if ascii_to_other_ratio >= 0.9 && ascii_count > other_count {
        ContentKind::Ascii
    } else {
        ContentKind::Binary
    }
}

/// Heuristically classifies a text window as ASCII, UTF-8 or probably
/// binary, with or without a leading UTF-8 BOM.
///
/// See the module-level scenarios in the crate's test suite for worked
/// examples (`"hello\n"` is `Ascii`, `"\x00\x01\x02\x03"` is
/// `ProbablyBinary`, ...).
pub fn text_kind(text: &[u8]) -> TextKind {
    if has_utf8_bom(text) {
        match content_kind(&text[3..]) {
            ContentKind::Ascii => TextKind::AsciiWithUtf8Bom,
            ContentKind::Utf8 => TextKind::Utf8WithBom,
            ContentKind::Binary => TextKind::ProbablyBinary,
        }
    } else {
        match content_kind(text) {
            ContentKind::Ascii => TextKind::Ascii,
            ContentKind::Utf8 => TextKind::Utf8,
            ContentKind::Binary => TextKind::ProbablyBinary,
        }
    }
}
