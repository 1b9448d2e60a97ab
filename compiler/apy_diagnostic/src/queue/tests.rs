use super::*;
use pretty_assertions::assert_eq;

fn out_of_range(line: u32, text: &str) -> Diagnostic {
    Diagnostic::error(ErrorCode::E0001)
        .with_message("integer literal out of range")
        .at_line(line)
        .with_source(text)
}

#[test]
fn test_report_attaches_source() {
    let mut queue = DiagnosticQueue::new();
    queue.report(
        "\"\\x4\"",
        Diagnostic::error(ErrorCode::E0002)
            .with_message("bad hexadecimal escape sequence")
            .at_line(1),
    );

    let flushed = queue.flush();
    assert_eq!(flushed.len(), 1);
    assert_eq!(flushed[0].source.as_deref(), Some("\"\\x4\""));
}

#[test]
fn test_duplicates_suppressed() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(out_of_range(2, "2000000000")));
    assert!(!queue.add(out_of_range(2, "2000000000")));
    // Same line, different literal: kept.
    assert!(queue.add(out_of_range(2, "3000000000")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_duplicates_kept_when_dedup_disabled() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig::unlimited());
    assert!(queue.add(out_of_range(2, "2000000000")));
    assert!(queue.add(out_of_range(2, "2000000000")));
    assert_eq!(queue.error_count(), 2);
}

#[test]
fn test_error_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 2,
        deduplicate: true,
    });
    assert!(queue.add(out_of_range(1, "a")));
    assert!(queue.add(out_of_range(2, "b")));
    assert!(queue.limit_reached());
    assert!(!queue.add(out_of_range(3, "c")));
    assert_eq!(queue.error_count(), 2);
    assert_eq!(queue.dropped_count(), 1);
}

#[test]
fn test_warnings_ignore_limit() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    assert!(queue.add(out_of_range(1, "a")));
    assert!(queue.add(Diagnostic::warning(ErrorCode::E0003).with_message("skipped record")));
    assert_eq!(queue.error_count(), 1);
}

#[test]
fn test_flush_sorts_by_line_and_resets() {
    let mut queue = DiagnosticQueue::new();
    queue.add(out_of_range(9, "x"));
    queue.add(out_of_range(2, "y"));
    queue.add(out_of_range(5, "z"));

    let lines: Vec<_> = queue.flush().into_iter().map(|d| d.line).collect();
    assert_eq!(lines, vec![Some(2), Some(5), Some(9)]);
    assert_eq!(queue.error_count(), 0);
    assert!(queue.has_errors().is_none());
    assert_eq!(queue.peek().count(), 0);
}

#[test]
fn test_has_errors() {
    let mut queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
    queue.add(out_of_range(1, "2000000000"));
    assert!(queue.has_errors().is_some());
}

#[test]
fn test_too_many_errors_message() {
    let diag = too_many_errors(10);
    assert_eq!(diag.code, ErrorCode::E9002);
    assert_eq!(diag.message, "aborting due to 10 previous errors");
}

#[test]
fn test_same_literal_different_columns_kept() {
    let bad_hex = |column| {
        Diagnostic::error(ErrorCode::E0002)
            .with_message("bad hexadecimal escape sequence")
            .at_line(4)
            .at_column(column)
            .with_source("\"\\x\\x\"")
    };
    let mut queue = DiagnosticQueue::new();
    assert!(queue.add(bad_hex(2)));
    assert!(queue.add(bad_hex(4)));
    assert!(!queue.add(bad_hex(4)));
    assert_eq!(queue.error_count(), 2);
}
