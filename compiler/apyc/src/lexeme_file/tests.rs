use super::*;
use pretty_assertions::assert_eq;

#[test]
fn parses_a_record() {
    let lexeme = parse_record("12\tint_literal\t0x2A").unwrap().unwrap();
    assert_eq!(lexeme, Lexeme::new(TokenCategory::IntLiteral, "0x2A", 12));
}

#[test]
fn text_keeps_spaces_and_later_tabs() {
    let lexeme = parse_record("3\tstring\t\"a b\tc\"").unwrap().unwrap();
    assert_eq!(lexeme.text, "\"a b\tc\"");
}

#[test]
fn empty_text_is_allowed() {
    let lexeme = parse_record("1\tsymbol\t").unwrap().unwrap();
    assert_eq!(lexeme.text, "");
}

#[test]
fn blank_and_comment_lines_are_skipped() {
    assert_eq!(parse_record(""), Ok(None));
    assert_eq!(parse_record("   "), Ok(None));
    assert_eq!(parse_record("# produced by the scanner"), Ok(None));
}

#[test]
fn missing_fields() {
    assert_eq!(
        parse_record("7"),
        Err(LexemeParseError::MissingField("category"))
    );
    assert_eq!(
        parse_record("7\tid"),
        Err(LexemeParseError::MissingField("text"))
    );
}

#[test]
fn bad_line_number() {
    let err = parse_record("seven\tid\tx").unwrap_err();
    assert_eq!(err, LexemeParseError::InvalidLine("seven".to_string()));
    assert_eq!(err.to_string(), "invalid line number `seven`");
}

#[test]
fn unknown_category() {
    let err = parse_record("1\tfloat\t1.5").unwrap_err();
    assert_eq!(err.to_string(), "unknown token category `float`");
}

#[test]
fn read_lexemes_skips_malformed_records() {
    let source = "# header\n1\tid\tx\n2\tbogus\ty\n\n3\tint_literal\t5\n";
    let mut diags: Vec<Diagnostic> = Vec::new();
    let lexemes = read_lexemes(source, &mut diags);

    assert_eq!(
        lexemes,
        vec![
            Lexeme::new(TokenCategory::Id, "x", 1),
            Lexeme::new(TokenCategory::IntLiteral, "5", 3),
        ]
    );
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].code, ErrorCode::E0003);
    assert!(!diags[0].is_error());
    assert_eq!(
        diags[0].message,
        "invalid lexeme record 3: unknown token category `bogus`"
    );
    assert_eq!(diags[0].source.as_deref(), Some("2\tbogus\ty"));
}
