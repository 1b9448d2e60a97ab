//! The `tokens` command: build tokens from a lexeme file and dump them.

use std::io::{self, BufWriter, IsTerminal, Write};

use apy_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use apy_diagnostic::queue::too_many_errors;
use apy_diagnostic::{Diagnostic, DiagnosticConfig, DiagnosticQueue, ErrorCode};
use apy_token::{concat_adjacent, dump_tokens, TokenRegistry};
use tracing::debug;

use super::read_file;
use crate::lexeme_file::read_lexemes;

/// Settings for one `tokens` run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokensOptions {
    /// Lexeme file to read.
    pub path: Option<String>,
    pub diagnostics: DiagnosticConfig,
    pub color: ColorMode,
    /// Merge runs of adjacent string literals before dumping.
    pub concat: bool,
}

/// Parse the arguments that follow `tokens`.
pub fn parse_tokens_options(args: &[String]) -> Result<TokensOptions, String> {
    let mut options = TokensOptions::default();

    for arg in args {
        if let Some(limit) = arg.strip_prefix("--error-limit=") {
            options.diagnostics.error_limit = limit
                .parse()
                .map_err(|_| format!("invalid error limit `{limit}`"))?;
        } else if arg == "--no-dedup" {
            options.diagnostics.deduplicate = false;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = mode.parse()?;
        } else if arg == "--concat" {
            options.concat = true;
        } else if arg.starts_with('-') {
            return Err(format!("unknown option `{arg}`"));
        } else if options.path.is_none() {
            options.path = Some(arg.clone());
        } else {
            return Err(format!("unexpected argument `{arg}`"));
        }
    }

    Ok(options)
}

/// Dump the tokens for the lexeme stream `source` to `out` and emit the
/// collected diagnostics.
///
/// Returns the number of errors reported.
pub fn run_tokens(
    source: &str,
    options: &TokensOptions,
    out: &mut dyn Write,
    emitter: &mut dyn DiagnosticEmitter,
) -> io::Result<usize> {
    let mut queue = DiagnosticQueue::with_config(options.diagnostics.clone());
    let registry = TokenRegistry::standard();

    let lexemes = read_lexemes(source, &mut queue);
    let mut tokens = registry.make_all(lexemes, &mut queue);
    if options.concat {
        tokens = match concat_adjacent(tokens) {
            Ok(merged) => merged,
            Err(err) => {
                queue.add(Diagnostic::error(ErrorCode::E9001).with_message(err.to_string()));
                Vec::new()
            }
        };
    }
    debug!(count = tokens.len(), "dumping tokens");
    dump_tokens(&tokens, out)?;

    let error_count = queue.error_count();
    let warning_count = queue.peek().filter(|d| !d.is_error()).count();
    let dropped = queue.dropped_count();

    emitter.emit_all(&queue.flush());
    if dropped > 0 {
        emitter.emit(&too_many_errors(options.diagnostics.error_limit));
    }
    emitter.emit_summary(error_count, warning_count);
    emitter.flush();

    Ok(error_count)
}

/// Run the `tokens` command against a file, exiting with status 1 when any
/// error was reported.
pub fn tokens_file(options: &TokensOptions) {
    let Some(path) = options.path.as_deref() else {
        eprintln!("error: missing lexeme file");
        eprintln!("Usage: apyc tokens <lexeme-file> [options]");
        std::process::exit(1);
    };
    let source = read_file(path);

    let is_tty = io::stderr().is_terminal();
    let mut emitter = TerminalEmitter::stderr(options.color, is_tty);
    let mut out = BufWriter::new(io::stdout().lock());

    let result = run_tokens(&source, options, &mut out, &mut emitter)
        .and_then(|errors| out.flush().map(|()| errors));
    match result {
        Ok(0) => {}
        Ok(_) => std::process::exit(1),
        Err(e) => {
            eprintln!("error writing token dump: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    reason = "tests use unwrap to panic on unexpected state"
)]
