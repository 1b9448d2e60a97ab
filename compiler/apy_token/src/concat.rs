//! Folding of adjacent string literals (`"ab" 'cd'` is one string).

use tracing::trace;

use crate::{Token, TokenError};

/// Merge every run of consecutive string tokens into the first token of
/// the run.
///
/// The surviving token keeps its own line and raw text; the payloads of
/// the following literals are appended to it. Other tokens pass through in
/// order.
pub fn concat_adjacent(tokens: Vec<Token>) -> Result<Vec<Token>, TokenError> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        if let Some(prev) = out
            .last_mut()
            .filter(|prev| prev.is_string() && token.is_string())
        {
            trace!(
                line = token.line_number(),
                into = prev.line_number(),
                "folding adjacent string literal"
            );
            prev.append_text(token.string_value()?)?;
            continue;
        }
        out.push(token);
    }
    Ok(out)
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests {
    use super::*;
    use crate::{Lexeme, TokenCategory, TokenRegistry};
    use apy_diagnostic::Diagnostic;
    use pretty_assertions::assert_eq;

    fn tokens(lexemes: &[(TokenCategory, &str)]) -> Vec<Token> {
        let mut diags: Vec<Diagnostic> = Vec::new();
        TokenRegistry::standard().make_all(
            lexemes
                .iter()
                .map(|&(category, text)| Lexeme::new(category, text, 1)),
            &mut diags,
        )
    }

    #[test]
    fn folds_run_of_strings() {
        let merged = concat_adjacent(tokens(&[
            (TokenCategory::Id, "x"),
            (TokenCategory::String, "'ab'"),
            (TokenCategory::String, r#""c\n""#),
            (TokenCategory::String, "'d'"),
            (TokenCategory::Symbol, ","),
            (TokenCategory::String, "'e'"),
        ]))
        .unwrap();

        assert_eq!(merged.len(), 4);
        assert_eq!(merged[1].string_value().unwrap(), b"abc\nd");
        assert_eq!(merged[1].raw_text(), "'ab'");
        assert_eq!(merged[3].string_value().unwrap(), b"e");
    }

    #[test]
    fn raw_then_normal_prints_on_one_line() {
        let merged = concat_adjacent(tokens(&[
            (TokenCategory::RawString, r#"r"a\n""#),
            (TokenCategory::String, r#"'b\nc\"'"#),
        ]))
        .unwrap();

        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].string_value().unwrap(), b"a\\nb\nc\"");
        assert_eq!(
            merged[0].to_sexpr(),
            r#"(string_literal 1 "a\nb\012c\042")"#
        );
    }

    #[test]
    fn non_strings_untouched() {
        let input = tokens(&[
            (TokenCategory::IntLiteral, "1"),
            (TokenCategory::IntLiteral, "2"),
        ]);
        assert_eq!(concat_adjacent(input.clone()).unwrap(), input);
    }

    #[test]
    fn empty_input() {
        assert!(concat_adjacent(Vec::new()).unwrap().is_empty());
    }
}
