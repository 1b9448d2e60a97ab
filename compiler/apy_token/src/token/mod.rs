//! Tokens: position-annotated leaves of the syntax tree.

use apy_diagnostic::DiagnosticSink;

use crate::cook_escape::{cook_string, raw_interior};
use crate::cook_int::cook_int;
use crate::{Lexeme, TokenCategory};

/// Misuse of a token capability its variant does not have.
///
/// Malformed input never produces this; it means the calling layer asked a
/// token for something without checking its kind first.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TokenError {
    #[error("unsupported operation: {operation} on {category} token")]
    UnsupportedOperation {
        operation: &'static str,
        category: TokenCategory,
    },
}

/// Decoded value of an integer literal.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct IntLiteral {
    pub value: i64,
}

/// Decoded payload of a string literal.
///
/// For raw literals the payload is the text between the quotes, verbatim.
/// For normal literals it is that text with escapes resolved.
///
/// Only the literal's own raw interior is verbatim. Bytes appended later
/// are decoded content and print escaped.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StringLiteral {
    payload: Vec<u8>,
    raw: bool,
    /// Length of the leading payload bytes that print unescaped.
    verbatim_len: usize,
}

impl StringLiteral {
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn is_raw(&self) -> bool {
        self.raw
    }

    /// Split the payload into the verbatim raw interior and the rest.
    pub fn split_verbatim(&self) -> (&[u8], &[u8]) {
        self.payload.split_at(self.verbatim_len)
    }
}

/// Variant-specific state of a [`Token`].
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    /// No specialised behaviour; prints as `(<Token>)`.
    Plain,
    Id,
    TypeVar,
    Int(IntLiteral),
    Str(StringLiteral),
}

/// A leaf of the syntax tree.
///
/// Line and raw text are fixed at construction. The only mutation is
/// [`Token::append_text`] on string literals, used while the parser folds
/// adjacent literals together.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    line: u32,
    text: Box<str>,
    category: TokenCategory,
    kind: TokenKind,
}

impl Token {
    fn with_kind(lexeme: &Lexeme<'_>, kind: TokenKind) -> Self {
        Token {
            line: lexeme.line,
            text: lexeme.text.into(),
            category: lexeme.category,
            kind,
        }
    }

    /// Base token with no variant behaviour.
    pub fn plain(lexeme: &Lexeme<'_>, _sink: &mut dyn DiagnosticSink) -> Self {
        Self::with_kind(lexeme, TokenKind::Plain)
    }

    pub fn id(lexeme: &Lexeme<'_>, _sink: &mut dyn DiagnosticSink) -> Self {
        Self::with_kind(lexeme, TokenKind::Id)
    }

    pub fn type_var(lexeme: &Lexeme<'_>, _sink: &mut dyn DiagnosticSink) -> Self {
        Self::with_kind(lexeme, TokenKind::TypeVar)
    }

    /// Integer literal. Out-of-range values are reported to `sink` and kept.
    pub fn int(lexeme: &Lexeme<'_>, sink: &mut dyn DiagnosticSink) -> Self {
        let value = cook_int(lexeme.text, lexeme.line, sink);
        Self::with_kind(lexeme, TokenKind::Int(IntLiteral { value }))
    }

    /// String literal; raw when the lexeme's category is
    /// [`TokenCategory::RawString`].
    pub fn string(lexeme: &Lexeme<'_>, sink: &mut dyn DiagnosticSink) -> Self {
        let raw = lexeme.category == TokenCategory::RawString;
        let payload = if raw {
            raw_interior(lexeme.text).as_bytes().to_vec()
        } else {
            cook_string(lexeme.text, lexeme.line, sink)
        };
        let verbatim_len = if raw { payload.len() } else { 0 };
        Self::with_kind(
            lexeme,
            TokenKind::Str(StringLiteral {
                payload,
                raw,
                verbatim_len,
            }),
        )
    }

    /// 1-based source line.
    #[inline]
    pub fn line_number(&self) -> u32 {
        self.line
    }

    /// The lexeme text exactly as scanned.
    #[inline]
    pub fn raw_text(&self) -> &str {
        &self.text
    }

    #[inline]
    pub fn category(&self) -> TokenCategory {
        self.category
    }

    #[inline]
    pub fn kind(&self) -> &TokenKind {
        &self.kind
    }

    /// Whether [`string_value`](Self::string_value) and
    /// [`append_text`](Self::append_text) are supported.
    pub fn is_string(&self) -> bool {
        matches!(self.kind, TokenKind::Str(_))
    }

    pub fn int_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Int(IntLiteral { value }) => Some(value),
            _ => None,
        }
    }

    /// Decoded payload of a string literal.
    pub fn string_value(&self) -> Result<&[u8], TokenError> {
        match &self.kind {
            TokenKind::Str(lit) => Ok(&lit.payload),
            _ => Err(self.unsupported("string_value")),
        }
    }

    /// Append `extra` to a string literal's payload.
    pub fn append_text(&mut self, extra: &[u8]) -> Result<(), TokenError> {
        if let TokenKind::Str(lit) = &mut self.kind {
            lit.payload.extend_from_slice(extra);
            return Ok(());
        }
        Err(self.unsupported("append_text"))
    }

    #[cold]
    fn unsupported(&self, operation: &'static str) -> TokenError {
        TokenError::UnsupportedOperation {
            operation,
            category: self.category,
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
