//! Lexical categories reported by the scanner.

use std::fmt;
use std::str::FromStr;

/// The scanner's classification of a lexeme.
///
/// Every category is bound to exactly one constructor in a
/// [`TokenRegistry`](crate::TokenRegistry).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenCategory {
    /// Identifier.
    Id,
    /// Type variable (`$T`).
    TypeVar,
    /// Integer literal in decimal, octal or hex notation.
    IntLiteral,
    /// Quoted string literal with escape processing.
    String,
    /// `r"..."` string literal, taken verbatim.
    RawString,
    /// Operators, delimiters and keywords: no specialised variant.
    Symbol,
}

impl TokenCategory {
    /// Number of categories; sizes the registry's dispatch table.
    pub const COUNT: usize = 6;

    /// Every category, in table order.
    pub const ALL: [TokenCategory; Self::COUNT] = [
        TokenCategory::Id,
        TokenCategory::TypeVar,
        TokenCategory::IntLiteral,
        TokenCategory::String,
        TokenCategory::RawString,
        TokenCategory::Symbol,
    ];

    /// Position in the registry's dispatch table.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable lower-case name, as used in lexeme files.
    pub const fn name(self) -> &'static str {
        match self {
            TokenCategory::Id => "id",
            TokenCategory::TypeVar => "type_var",
            TokenCategory::IntLiteral => "int_literal",
            TokenCategory::String => "string",
            TokenCategory::RawString => "raw_string",
            TokenCategory::Symbol => "symbol",
        }
    }

    /// Whether tokens of this category carry a string payload.
    pub const fn is_string(self) -> bool {
        matches!(self, TokenCategory::String | TokenCategory::RawString)
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A category name that matches no [`TokenCategory`].
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown token category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for TokenCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|category| category.name() == s)
            .copied()
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_order() {
        for (i, category) in TokenCategory::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }

    #[test]
    fn name_round_trips() {
        for category in TokenCategory::ALL {
            assert_eq!(category.name().parse::<TokenCategory>(), Ok(category));
        }
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "float".parse::<TokenCategory>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token category `float`");
    }

    #[test]
    fn only_string_categories_are_strings() {
        let strings: Vec<_> = TokenCategory::ALL
            .into_iter()
            .filter(|c| c.is_string())
            .collect();
        assert_eq!(strings, [TokenCategory::String, TokenCategory::RawString]);
    }
}
