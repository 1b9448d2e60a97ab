//! String literal decoding.
//!
//! Works on bytes: escapes can produce any byte value (`\377`, `\xff`), so
//! the decoded payload is not necessarily UTF-8.
//!
//! Recognised escapes:
//!
//! | escape          | byte                      |
//! |-----------------|---------------------------|
//! | `\<newline>`    | nothing (continuation)    |
//! | `\a` `\b` `\f`  | 0x07 0x08 0x0C            |
//! | `\n` `\r` `\t`  | 0x0A 0x0D 0x09            |
//! | `\v`            | 0x0B                      |
//! | `\'` `\"` `\\`  | the character itself      |
//! | `\o` `\oo` `\ooo` | octal value, mod 256    |
//! | `\xhh`          | hex value                 |
//!
//! Any other character after a backslash is kept together with the
//! backslash (`\q` stays `\q`). A `\x` without two hex digits is an error
//! pushed into the accumulator; it contributes no bytes.

use std::ops::Range;

use apy_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use tracing::{trace, warn};

/// A malformed escape found while unescaping.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct EscapeError {
    /// Byte offset of the backslash within the unescaped content.
    pub offset: usize,
    pub kind: EscapeErrorKind,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum EscapeErrorKind {
    /// `\x` not followed by two hex digits.
    BadHexEscape,
}

impl EscapeErrorKind {
    pub fn message(self) -> &'static str {
        match self {
            EscapeErrorKind::BadHexEscape => "bad hexadecimal escape sequence",
        }
    }
}

#[inline]
fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn is_octal(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

/// Single-character escapes. `None` for everything handled elsewhere.
#[inline]
fn resolve_simple_escape(c: u8) -> Option<u8> {
    match c {
        b'a' => Some(0x07),
        b'b' => Some(0x08),
        b'f' => Some(0x0C),
        b'n' => Some(b'\n'),
        b'r' => Some(b'\r'),
        b't' => Some(b'\t'),
        b'v' => Some(0x0B),
        b'\'' | b'"' | b'\\' => Some(c),
        _ => None,
    }
}

/// Byte range of a literal's interior once its quotes are dropped.
///
/// Quotes are ASCII, so the bounds are always char boundaries.
fn quote_bounds(bytes: &[u8]) -> Range<usize> {
    let len = bytes.len();
    let quote = match bytes.first() {
        Some(&q @ (b'"' | b'\'')) => q,
        _ => return 0..len,
    };
    let triple = [quote; 3];
    if len >= 6 && bytes.starts_with(&triple) && bytes.ends_with(&triple) {
        3..len - 3
    } else if len >= 2 && bytes[len - 1] == quote {
        1..len - 1
    } else {
        0..len
    }
}

#[inline]
fn raw_marker_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'r' | b'R')))
}

/// Strip the quote delimiters from a string literal.
///
/// Handles single (`'...'`, `"..."`) and triple (`'''...'''`, `"""..."""`)
/// quoting. Text that does not start and end with the same quote is
/// returned unchanged.
pub fn strip_quotes(text: &str) -> &str {
    &text[quote_bounds(text.as_bytes())]
}

/// Interior of a raw string literal: drops the `r`/`R` marker, then the
/// quotes.
pub fn raw_interior(text: &str) -> &str {
    let unprefixed = &text[raw_marker_len(text.as_bytes())..];
    strip_quotes(unprefixed)
}

/// Resolve escape sequences in `content` (the text between the quotes).
///
/// Malformed escapes are pushed into `errors`; the scan always runs to the
/// end of `content`.
pub fn unescape_string(content: &str, errors: &mut Vec<EscapeError>) -> Vec<u8> {
    let bytes = content.as_bytes();
    if !bytes.contains(&b'\\') {
        return bytes.to_vec();
    }

    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        i += 1;
        if b != b'\\' {
            out.push(b);
            continue;
        }

        let start = i - 1;
        let Some(&esc) = bytes.get(i) else {
            // Trailing backslash
            out.push(b'\\');
            break;
        };
        i += 1;

        if esc == b'\n' {
            continue;
        }
        if let Some(resolved) = resolve_simple_escape(esc) {
            out.push(resolved);
            continue;
        }
        match esc {
            b'0'..=b'7' => {
                // Up to three digits, greedy; values past 0o377 wrap.
                let mut value = esc - b'0';
                for _ in 0..2 {
                    match bytes.get(i) {
                        Some(&d) if is_octal(d) => {
                            value = value.wrapping_mul(8).wrapping_add(d - b'0');
                            i += 1;
                        }
                        _ => break,
                    }
                }
                out.push(value);
            }
            b'x' => {
                let hi = bytes.get(i).copied().and_then(hex_digit);
                let lo = bytes.get(i + 1).copied().and_then(hex_digit);
                if let (Some(hi), Some(lo)) = (hi, lo) {
                    out.push((hi << 4) | lo);
                    i += 2;
                } else {
                    errors.push(EscapeError {
                        offset: start,
                        kind: EscapeErrorKind::BadHexEscape,
                    });
                }
            }
            _ => {
                out.push(b'\\');
                out.push(esc);
            }
        }
    }

    out
}

/// Decode a normal (non-raw) string literal, quotes included.
///
/// Each escape error is reported to `sink` against the whole literal text,
/// with its column counted from the opening quote.
pub fn cook_string(text: &str, line: u32, sink: &mut dyn DiagnosticSink) -> Vec<u8> {
    let bounds = quote_bounds(text.as_bytes());
    let mut errors = Vec::new();
    let payload = unescape_string(&text[bounds.start..bounds.end], &mut errors);
    trace!(text, len = payload.len(), "cooked string literal");

    for error in errors {
        let column = u32::try_from(bounds.start + error.offset + 1).unwrap_or(u32::MAX);
        warn!(text, line, column, "{}", error.kind.message());
        sink.report(
            text,
            Diagnostic::error(ErrorCode::E0002)
                .with_message(error.kind.message())
                .at_line(line)
                .at_column(column),
        );
    }
    payload
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
