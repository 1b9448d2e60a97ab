//! Category-to-constructor dispatch.
//!
//! The registry is built once before scanning starts and passed by
//! reference to whatever turns lexemes into tokens. Building fails unless
//! every [`TokenCategory`] has exactly one constructor, so lookups at scan
//! time cannot miss.

use std::fmt;

use apy_diagnostic::DiagnosticSink;
use tracing::{debug, trace};

use crate::{Lexeme, Token, TokenCategory};

/// Builds the token for one lexeme, reporting malformed literals to the
/// sink.
pub type TokenConstructor = fn(&Lexeme<'_>, &mut dyn DiagnosticSink) -> Token;

/// Configuration errors raised while building a registry.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RegistryError {
    #[error("token category `{0}` registered more than once")]
    DuplicateRegistration(TokenCategory),
    #[error("no token constructor registered for category `{0}`")]
    Unregistered(TokenCategory),
}

/// Collects constructor bindings; see [`TokenRegistry::builder`].
#[derive(Clone, Default)]
pub struct RegistryBuilder {
    slots: [Option<TokenConstructor>; TokenCategory::COUNT],
    duplicate: Option<TokenCategory>,
}

impl RegistryBuilder {
    /// Bind `category` to `constructor`.
    ///
    /// Binding a category twice is remembered and reported by
    /// [`build`](Self::build).
    #[must_use]
    pub fn register(mut self, category: TokenCategory, constructor: TokenConstructor) -> Self {
        let slot = &mut self.slots[category.index()];
        if slot.is_some() && self.duplicate.is_none() {
            self.duplicate = Some(category);
        }
        *slot = Some(constructor);
        self
    }

    /// Finish the registry, checking that every category is bound once.
    pub fn build(self) -> Result<TokenRegistry, RegistryError> {
        if let Some(category) = self.duplicate {
            return Err(RegistryError::DuplicateRegistration(category));
        }

        let mut table: [TokenConstructor; TokenCategory::COUNT] =
            [Token::plain as TokenConstructor; TokenCategory::COUNT];
        for category in TokenCategory::ALL {
            match self.slots[category.index()] {
                Some(constructor) => table[category.index()] = constructor,
                None => return Err(RegistryError::Unregistered(category)),
            }
        }

        debug!(categories = TokenCategory::COUNT, "token registry built");
        Ok(TokenRegistry { table })
    }
}

/// Read-only map from lexical category to token constructor.
#[derive(Clone)]
pub struct TokenRegistry {
    table: [TokenConstructor; TokenCategory::COUNT],
}

impl TokenRegistry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    /// The built-in bindings: one variant per category, with raw and
    /// normal strings sharing the string constructor.
    pub fn standard() -> Self {
        // Indexed in `TokenCategory::ALL` order.
        TokenRegistry {
            table: [
                Token::id,
                Token::type_var,
                Token::int,
                Token::string,
                Token::string,
                Token::plain,
            ],
        }
    }

    /// Construct the token for `lexeme`.
    pub fn make(&self, lexeme: &Lexeme<'_>, sink: &mut dyn DiagnosticSink) -> Token {
        trace!(category = %lexeme.category, line = lexeme.line, "making token");
        (self.table[lexeme.category.index()])(lexeme, sink)
    }

    /// Construct tokens for a whole lexeme stream, in order.
    pub fn make_all<'src>(
        &self,
        lexemes: impl IntoIterator<Item = Lexeme<'src>>,
        sink: &mut dyn DiagnosticSink,
    ) -> Vec<Token> {
        lexemes
            .into_iter()
            .map(|lexeme| self.make(&lexeme, sink))
            .collect()
    }
}

impl fmt::Debug for RegistryBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<_> = TokenCategory::ALL
            .into_iter()
            .filter(|c| self.slots[c.index()].is_some())
            .collect();
        f.debug_struct("RegistryBuilder")
            .field("bound", &bound)
            .field("duplicate", &self.duplicate)
            .finish()
    }
}

impl fmt::Debug for TokenRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenRegistry")
            .field("categories", &TokenCategory::COUNT)
            .finish_non_exhaustive()
    }
}

impl Default for TokenRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
