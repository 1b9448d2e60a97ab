//! S-expression rendering of tokens for tree dumps.
//!
//! The output format is compared byte-for-byte by snapshot tooling:
//!
//! ```text
//! (id 3 counter)
//! (type_var 3 $T)
//! (int_literal 3 42)
//! (string_literal 3 "a\012b")
//! (<Token>)
//! ```
//!
//! Integers print their decoded value in decimal. Normal strings print
//! their payload with control bytes, `\` and `"` as three-digit octal
//! escapes; the interior of a raw string prints untouched, though text
//! appended to it later is escaped.

use std::fmt;
use std::io::{self, Write};

use crate::{IntLiteral, Token, TokenKind};

#[inline]
fn needs_escape(b: u8) -> bool {
    b < 32 || b == b'\\' || b == b'"'
}

fn write_escaped(out: &mut dyn Write, bytes: &[u8]) -> io::Result<()> {
    let mut start = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if needs_escape(b) {
            out.write_all(&bytes[start..i])?;
            write!(out, "\\{b:03o}")?;
            start = i + 1;
        }
    }
    out.write_all(&bytes[start..])
}

impl Token {
    /// Write this token's S-expression to `out`.
    ///
    /// `indent` is the tree-dump nesting level; leaves fit on one line and
    /// ignore it.
    pub fn print(&self, out: &mut dyn Write, _indent: usize) -> io::Result<()> {
        let line = self.line_number();
        match self.kind() {
            TokenKind::Plain => out.write_all(b"(<Token>)"),
            TokenKind::Id => write!(out, "(id {line} {})", self.raw_text()),
            TokenKind::TypeVar => write!(out, "(type_var {line} {})", self.raw_text()),
            TokenKind::Int(IntLiteral { value }) => write!(out, "(int_literal {line} {value})"),
            TokenKind::Str(lit) => {
                write!(out, "(string_literal {line} \"")?;
                let (verbatim, cooked) = lit.split_verbatim();
                out.write_all(verbatim)?;
                write_escaped(out, cooked)?;
                out.write_all(b"\")")
            }
        }
    }

    /// The printed form as a `String`.
    ///
    /// Payload bytes that are not UTF-8 (`\xff`, say) are converted
    /// lossily; use [`print`](Self::print) for exact output.
    pub fn to_sexpr(&self) -> String {
        let mut buf: Vec<u8> = Vec::new();
        // Writing into a Vec cannot fail.
        let _ = self.print(&mut buf, 0);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_sexpr())
    }
}

/// Print `tokens` one per line.
pub fn dump_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a Token>,
    out: &mut dyn Write,
) -> io::Result<()> {
    for token in tokens {
        token.print(out, 0)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
