//! Integer literal decoding.
//!
//! The scanner decides that a lexeme is an integer; this module turns its
//! text into a value. Base detection follows the usual auto-detect rules:
//! `0x`/`0X` is hex, `0o`/`0O` or a bare leading `0` is octal, anything
//! else is decimal. Digits are consumed until the first character that is
//! not valid in the base.

use apy_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use tracing::{trace, warn};

/// Largest integer literal the language accepts (2^30).
///
/// The bound is inclusive: `1073741824` is accepted so that `-1073741824`
/// can be written as a negated literal.
pub const MAX_INT_LITERAL: i64 = 1 << 30;

/// Result of [`parse_int_auto`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParsedInt {
    pub value: i64,
    /// The digits did not fit in an `i64`; `value` is clamped to
    /// `i64::MAX` or `i64::MIN`.
    pub saturated: bool,
}

/// Pick the radix from the literal's prefix.
///
/// Returns `(radix, prefix_len)`. A prefix with no digit after it is not a
/// prefix: `0x` parses as the octal literal `0` followed by junk.
fn detect_radix(bytes: &[u8]) -> (u32, usize) {
    match bytes {
        [b'0', b'x' | b'X', d, ..] if d.is_ascii_hexdigit() => (16, 2),
        [b'0', b'o' | b'O', d, ..] if (b'0'..=b'7').contains(d) => (8, 2),
        [b'0', ..] => (8, 0),
        _ => (10, 0),
    }
}

/// Parse `text` as a signed integer, auto-detecting the base.
///
/// Accepts leading whitespace and an optional sign. Never fails: text
/// without any digit parses as `0`, and overflow saturates.
pub fn parse_int_auto(text: &str) -> ParsedInt {
    let bytes = text.trim_start().as_bytes();
    let (negative, rest) = match bytes {
        [b'-', rest @ ..] => (true, rest),
        [b'+', rest @ ..] => (false, rest),
        _ => (false, bytes),
    };

    let (radix, prefix_len) = detect_radix(rest);
    let mut magnitude: u64 = 0;
    let mut saturated = false;
    for &b in &rest[prefix_len..] {
        let Some(digit) = char::from(b).to_digit(radix) else {
            break;
        };
        match magnitude
            .checked_mul(u64::from(radix))
            .and_then(|m| m.checked_add(u64::from(digit)))
        {
            Some(m) => magnitude = m,
            None => {
                saturated = true;
                magnitude = u64::MAX;
            }
        }
    }

    let signed = if negative {
        -i128::from(magnitude)
    } else {
        i128::from(magnitude)
    };
    match i64::try_from(signed) {
        Ok(value) => ParsedInt { value, saturated },
        Err(_) => ParsedInt {
            value: if negative { i64::MIN } else { i64::MAX },
            saturated: true,
        },
    }
}

/// Decode an integer literal and check it against [`MAX_INT_LITERAL`].
///
/// An out-of-range literal is reported once to `sink` and its computed
/// value is still returned, so later passes can keep going.
pub fn cook_int(text: &str, line: u32, sink: &mut dyn DiagnosticSink) -> i64 {
    let parsed = parse_int_auto(text);
    trace!(text, value = parsed.value, "cooked integer literal");

    if parsed.value > MAX_INT_LITERAL {
        warn!(text, line, "integer literal out of range");
        sink.report(text, out_of_range(line, parsed));
    }
    parsed.value
}

#[cold]
fn out_of_range(line: u32, parsed: ParsedInt) -> Diagnostic {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("integer literal out of range")
        .at_line(line)
        .with_note(format!(
            "integer literals may not exceed 2^30 ({MAX_INT_LITERAL})"
        ));
    if parsed.saturated {
        diag.with_note("the literal does not fit in 64 bits either")
    } else {
        diag
    }
}
