use super::*;
use crate::ErrorCode;
use pretty_assertions::assert_eq;

fn render(diags: &[Diagnostic], colors: ColorMode) -> String {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), colors, false);
    emitter.emit_all(diags);
    emitter.flush();
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn test_plain_output() {
    let diag = Diagnostic::error(ErrorCode::E0001)
        .with_message("integer literal out of range")
        .at_line(4)
        .with_source("2000000000")
        .with_note("the largest literal is 1073741824");

    assert_eq!(
        render(&[diag], ColorMode::Never),
        "error[E0001]: integer literal out of range\n\
         \x20 --> line 4\n\
         \x20  | 2000000000\n\
         \x20 = note: the largest literal is 1073741824\n\
         \n"
    );
}

#[test]
fn test_multiline_source_keeps_gutter() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("bad hexadecimal escape sequence")
        .with_source("\"ab\\\ncd\\x4\"");

    let out = render(&[diag], ColorMode::Never);
    assert!(out.contains("   | \"ab\\\n   | cd\\x4\"\n"));
}

#[test]
fn test_colors_enabled() {
    let diag = Diagnostic::error(ErrorCode::E0002).with_message("bad");
    let out = render(&[diag], ColorMode::Always);
    assert!(out.starts_with("\x1b[1;31merror\x1b[0m"));
}

#[test]
fn test_auto_respects_tty_flag() {
    assert!(ColorMode::Auto.should_use_colors(true));
    assert!(!ColorMode::Auto.should_use_colors(false));
    assert!(ColorMode::Always.should_use_colors(false));
    assert!(!ColorMode::Never.should_use_colors(true));
}

#[test]
fn test_color_mode_from_str() {
    assert_eq!("never".parse::<ColorMode>(), Ok(ColorMode::Never));
    assert!("sometimes".parse::<ColorMode>().is_err());
}

#[test]
fn test_summary() {
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false);
    emitter.emit_summary(2, 1);
    emitter.emit_summary(0, 0);
    emitter.emit_summary(0, 3);
    let out = String::from_utf8(emitter.into_inner()).unwrap();
    assert_eq!(
        out,
        "error: aborting due to 2 previous errors; 1 warning emitted\n\
         warning: 3 warnings emitted\n"
    );
}

#[test]
fn test_column_in_location() {
    let diag = Diagnostic::error(ErrorCode::E0002)
        .with_message("bad hexadecimal escape sequence")
        .at_line(3)
        .at_column(4)
        .with_source("\"\\x\\x\"");

    let out = render(&[diag], ColorMode::Never);
    assert!(out.contains("  --> line 3:4\n"));
}

#[test]
fn test_warning_header() {
    let diag = Diagnostic::warning(ErrorCode::E0003).with_message("invalid lexeme record 2");
    let out = render(&[diag], ColorMode::Never);
    assert_eq!(out, "warning[E0003]: invalid lexeme record 2\n\n");
}
