//! Command handlers for the `apyc` CLI.
//!
//! Shared utilities like `read_file` live here in the module root.

mod explain;
mod tokens;

pub use explain::explain_error;
pub use tokens::{parse_tokens_options, run_tokens, tokens_file, TokensOptions};

/// Read a file, exiting with a readable message when that fails.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
