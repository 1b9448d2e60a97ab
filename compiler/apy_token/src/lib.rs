//! Token model for the apy front end.
//!
//! The scanner hands over [`Lexeme`] records (category, raw text, line).
//! A [`TokenRegistry`] built once at startup maps each [`TokenCategory`] to
//! the constructor for its token variant; constructors run the literal
//! decoders, which report malformed input to a
//! [`DiagnosticSink`](apy_diagnostic::DiagnosticSink) and carry on.
//!
//! ```text
//! Lexeme -> TokenRegistry::make -> Token { kind: Int | Str | Id | ... }
//!                                      |
//!                                      +-> cook_int / cook_escape -> sink
//! ```
//!
//! Tokens print as one S-expression each, e.g. `(int_literal 3 42)`; see
//! [`Token::print`].

mod category;
mod concat;
pub mod cook_escape;
pub mod cook_int;
mod lexeme;
mod printer;
mod registry;
mod token;

pub use category::{TokenCategory, UnknownCategory};
pub use concat::concat_adjacent;
pub use lexeme::Lexeme;
pub use printer::dump_tokens;
pub use registry::{RegistryBuilder, RegistryError, TokenConstructor, TokenRegistry};
pub use token::{IntLiteral, StringLiteral, Token, TokenError, TokenKind};
