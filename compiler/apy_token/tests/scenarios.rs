//! End-to-end: lexemes through the standard registry into printed dumps.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use apy_diagnostic::{DiagnosticConfig, DiagnosticQueue, ErrorCode};
use apy_token::{concat_adjacent, dump_tokens, Lexeme, TokenCategory, TokenError, TokenRegistry};
use pretty_assertions::assert_eq;

fn dump(lexemes: &[Lexeme<'_>]) -> (String, Vec<ErrorCode>) {
    let registry = TokenRegistry::standard();
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    let tokens = registry.make_all(lexemes.iter().copied(), &mut queue);

    let mut out: Vec<u8> = Vec::new();
    dump_tokens(&tokens, &mut out).unwrap();
    let codes = queue.flush().into_iter().map(|d| d.code).collect();
    (String::from_utf8(out).unwrap(), codes)
}

#[test]
fn assignment_statement() {
    let (out, codes) = dump(&[
        Lexeme::new(TokenCategory::Id, "x", 1),
        Lexeme::new(TokenCategory::Symbol, "=", 1),
        Lexeme::new(TokenCategory::IntLiteral, "0x2A", 1),
    ]);
    assert_eq!(out, "(id 1 x)\n(<Token>)\n(int_literal 1 42)\n");
    assert!(codes.is_empty());
}

#[test]
fn malformed_literals_are_reported_not_fatal() {
    let (out, codes) = dump(&[
        Lexeme::new(TokenCategory::IntLiteral, "2000000000", 1),
        Lexeme::new(TokenCategory::String, r#""\x4""#, 2),
        Lexeme::new(TokenCategory::Id, "after", 3),
    ]);
    assert_eq!(
        out,
        "(int_literal 1 2000000000)\n(string_literal 2 \"4\")\n(id 3 after)\n"
    );
    assert_eq!(codes, vec![ErrorCode::E0001, ErrorCode::E0002]);
}

#[test]
fn strings_and_raw_strings() {
    let (out, _) = dump(&[
        Lexeme::new(TokenCategory::String, r#""a\nb""#, 4),
        Lexeme::new(TokenCategory::RawString, r#"r"a\nb""#, 5),
        Lexeme::new(TokenCategory::TypeVar, "$Key", 6),
    ]);
    assert_eq!(
        out,
        concat!(
            r#"(string_literal 4 "a\012b")"#,
            "\n",
            r#"(string_literal 5 "a\nb")"#,
            "\n",
            "(type_var 6 $Key)\n",
        )
    );
}

#[test]
fn line_continuation_inside_string() {
    let (out, _) = dump(&[Lexeme::new(TokenCategory::String, "\"one \\\ntwo\"", 7)]);
    assert_eq!(out, "(string_literal 7 \"one two\")\n");
}

#[test]
fn concatenated_literals_print_as_one() {
    let registry = TokenRegistry::standard();
    let mut queue = DiagnosticQueue::new();
    let tokens = registry.make_all(
        [
            Lexeme::new(TokenCategory::String, "'tab:'", 1),
            Lexeme::new(TokenCategory::String, r#""\t""#, 2),
        ],
        &mut queue,
    );
    let merged = concat_adjacent(tokens).unwrap();
    assert_eq!(merged.len(), 1);
    assert_eq!(merged[0].to_string(), r#"(string_literal 1 "tab:\011")"#);
}

#[test]
fn misuse_is_a_hard_error() {
    let registry = TokenRegistry::standard();
    let mut queue = DiagnosticQueue::new();
    let mut token = registry.make(&Lexeme::new(TokenCategory::Id, "name", 1), &mut queue);

    assert!(matches!(
        token.string_value(),
        Err(TokenError::UnsupportedOperation { .. })
    ));
    assert!(token.append_text(b"x").is_err());
    // Misuse is not a diagnostic.
    assert!(queue.has_errors().is_none());
}
