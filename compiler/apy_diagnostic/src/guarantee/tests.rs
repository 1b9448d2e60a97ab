use super::*;
use crate::{Diagnostic, DiagnosticConfig, DiagnosticQueue, DiagnosticSink, ErrorCode};

fn bad_hex() -> Diagnostic {
    Diagnostic::error(ErrorCode::E0002)
        .with_message("bad hexadecimal escape sequence")
        .at_line(1)
}

#[test]
fn queue_without_reports_has_no_guarantee() {
    let queue = DiagnosticQueue::new();
    assert!(queue.has_errors().is_none());
}

#[test]
fn reported_error_yields_guarantee() {
    let mut queue = DiagnosticQueue::new();
    queue.report("\"\\x4\"", bad_hex());
    let proof = queue.has_errors().unwrap();
    assert_eq!(proof.to_string(), "error(s) emitted");
}

#[test]
fn warnings_alone_give_no_guarantee() {
    let mut queue = DiagnosticQueue::new();
    queue.report(
        "1\tfloat\t1.5",
        Diagnostic::warning(ErrorCode::E0003).with_message("invalid lexeme record 1"),
    );
    assert!(queue.has_errors().is_none());
}

#[test]
fn dropped_errors_still_count_kept_ones() {
    let mut queue = DiagnosticQueue::with_config(DiagnosticConfig {
        error_limit: 1,
        deduplicate: false,
    });
    queue.report("\"\\x4\"", bad_hex());
    queue.report("\"\\x4\"", bad_hex());
    assert_eq!(queue.dropped_count(), 1);
    assert_eq!(
        queue.has_errors(),
        ErrorGuaranteed::from_error_count(queue.error_count())
    );
}
