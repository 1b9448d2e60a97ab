//! Lexeme stream files.
//!
//! One record per line, `<line>\t<category>\t<text>`. Blank lines and lines
//! starting with `#` are skipped. The text field runs to the end of the
//! line and is taken verbatim, so it may not contain a newline.

use apy_diagnostic::{Diagnostic, DiagnosticSink, ErrorCode};
use apy_token::{Lexeme, TokenCategory, UnknownCategory};
use tracing::{debug, warn};

/// Why a record could not be read.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum LexemeParseError {
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid line number `{0}`")]
    InvalidLine(String),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
}

/// Parse one record.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_record(record: &str) -> Result<Option<Lexeme<'_>>, LexemeParseError> {
    if record.trim().is_empty() || record.starts_with('#') {
        return Ok(None);
    }

    let mut fields = record.splitn(3, '\t');
    let line = fields
        .next()
        .ok_or(LexemeParseError::MissingField("line"))?;
    let category = fields
        .next()
        .ok_or(LexemeParseError::MissingField("category"))?;
    let text = fields
        .next()
        .ok_or(LexemeParseError::MissingField("text"))?;

    let line = line
        .trim()
        .parse::<u32>()
        .map_err(|_| LexemeParseError::InvalidLine(line.to_string()))?;
    let category = category.trim().parse::<TokenCategory>()?;

    Ok(Some(Lexeme::new(category, text, line)))
}

/// Read every record of `source`.
///
/// A malformed record is reported as an `E0003` warning and skipped; the
/// remaining records are still read.
pub fn read_lexemes<'src>(source: &'src str, sink: &mut dyn DiagnosticSink) -> Vec<Lexeme<'src>> {
    let mut lexemes = Vec::new();
    for (index, record) in source.lines().enumerate() {
        match parse_record(record) {
            Ok(Some(lexeme)) => lexemes.push(lexeme),
            Ok(None) => {}
            Err(err) => {
                let record_number = index + 1;
                warn!(record = record_number, error = %err, "skipping lexeme record");
                sink.report(
                    record,
                    Diagnostic::warning(ErrorCode::E0003)
                        .with_message(format!("invalid lexeme record {record_number}: {err}"))
                        .with_note("records have the form `<line>\\t<category>\\t<text>`"),
                );
            }
        }
    }
    debug!(count = lexemes.len(), "lexemes read");
    lexemes
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
mod tests;
