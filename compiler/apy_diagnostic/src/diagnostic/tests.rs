use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_builder_sets_fields() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("integer literal out of range")
        .at_line(3)
        .with_source("2000000000")
        .with_note("literals are limited to 2^30");

    assert_eq!(diag.code, ErrorCode::E0001);
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.line, Some(3));
    assert_eq!(diag.source.as_deref(), Some("2000000000"));
    assert_eq!(diag.notes, vec!["literals are limited to 2^30".to_string()]);
    assert!(diag.is_error());
}

#[test]
fn test_warning_is_not_error() {
    let diag = Diagnostic::warning(ErrorCode::E0003).with_message("skipped");
    assert!(!diag.is_error());
    assert_eq!(diag.to_string(), "warning[E0003]: skipped");
}

#[test]
fn test_display() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("bad hexadecimal escape sequence")
        .at_line(7);
    assert_eq!(
        diag.to_string(),
        "error[E0002]: bad hexadecimal escape sequence (line 7)"
    );

    let with_column = Diagnostic::error(ErrorCode::E0002)
        .with_message("bad hexadecimal escape sequence")
        .at_line(7)
        .at_column(4);
    assert_eq!(
        with_column.to_string(),
        "error[E0002]: bad hexadecimal escape sequence (line 7:4)"
    );

    let no_line = Diagnostic::error(ErrorCode::E9001).with_message("boom");
    assert_eq!(no_line.to_string(), "error[E9001]: boom");
}
