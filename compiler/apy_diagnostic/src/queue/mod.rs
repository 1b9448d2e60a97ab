//! Diagnostic queue for collecting, deduplicating, and sorting diagnostics.
//!
//! Features:
//! - Error limits to prevent overwhelming output
//! - Deduplication of identical reports about the same lexeme
//! - Stable ordering by source line on flush
//! - `ErrorGuaranteed` proof that errors were emitted

use std::hash::{Hash, Hasher};

use rustc_hash::{FxHashSet, FxHasher};
use tracing::debug;

use crate::{Diagnostic, DiagnosticSink, ErrorCode, ErrorGuaranteed};

/// Identity of a report for deduplication: line, column, code and a
/// source hash.
type DedupKey = (Option<u32>, Option<u32>, ErrorCode, u64);

#[inline]
fn source_hash(source: Option<&str>) -> u64 {
    let mut hasher = FxHasher::default();
    source.hash(&mut hasher);
    hasher.finish()
}

/// Configuration for diagnostic processing.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct DiagnosticConfig {
    /// Maximum number of errors kept (0 = unlimited).
    pub error_limit: usize,
    /// Drop a report identical in line, column, code and source to an
    /// earlier one.
    pub deduplicate: bool,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        DiagnosticConfig {
            error_limit: 10,
            deduplicate: true,
        }
    }
}

impl DiagnosticConfig {
    /// Create a config with no limits (for testing).
    pub fn unlimited() -> Self {
        DiagnosticConfig {
            error_limit: 0,
            deduplicate: false,
        }
    }
}

/// Queue for collecting, deduplicating, and sorting diagnostics.
///
/// # Example
///
/// ```text
/// let mut queue = DiagnosticQueue::new();
/// let token = registry.make(&lexeme, &mut queue);
/// let sorted = queue.flush();
/// ```
#[derive(Clone, Debug, Default)]
pub struct DiagnosticQueue {
    diagnostics: Vec<Diagnostic>,
    error_count: usize,
    /// Errors rejected because the limit was reached.
    dropped: usize,
    seen: FxHashSet<DedupKey>,
    config: DiagnosticConfig,
}

impl DiagnosticQueue {
    /// Create a new diagnostic queue with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a diagnostic queue with custom configuration.
    pub fn with_config(config: DiagnosticConfig) -> Self {
        DiagnosticQueue {
            config,
            ..Self::default()
        }
    }

    /// Add a diagnostic to the queue.
    ///
    /// Returns `true` if the diagnostic was added, `false` if it was filtered.
    pub fn add(&mut self, diag: Diagnostic) -> bool {
        let is_error = diag.is_error();

        if is_error && self.limit_reached() {
            self.dropped += 1;
            debug!(code = %diag.code, "error limit reached, dropping diagnostic");
            return false;
        }

        if self.config.deduplicate {
            let key = (
                diag.line,
                diag.column,
                diag.code,
                source_hash(diag.source.as_deref()),
            );
            if !self.seen.insert(key) {
                debug!(code = %diag.code, line = ?diag.line, "duplicate diagnostic suppressed");
                return false;
            }
        }

        if is_error {
            self.error_count += 1;
        }
        self.diagnostics.push(diag);
        true
    }

    /// Check if the error limit has been reached.
    pub fn limit_reached(&self) -> bool {
        self.config.error_limit > 0 && self.error_count >= self.config.error_limit
    }

    /// Get the number of errors collected.
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Number of errors rejected because of the error limit.
    pub fn dropped_count(&self) -> usize {
        self.dropped
    }

    /// Check if any errors were emitted and get proof if so.
    pub fn has_errors(&self) -> Option<ErrorGuaranteed> {
        ErrorGuaranteed::from_error_count(self.error_count)
    }

    /// Sort diagnostics by line and return them.
    ///
    /// Clears the queue after flushing. The sort is stable, so diagnostics on
    /// the same line keep their report order; line-less ones go first.
    pub fn flush(&mut self) -> Vec<Diagnostic> {
        let already_sorted = self.diagnostics.windows(2).all(|w| w[0].line <= w[1].line);
        if !already_sorted {
            self.diagnostics.sort_by_key(|d| d.line);
        }

        self.error_count = 0;
        self.dropped = 0;
        self.seen.clear();
        std::mem::take(&mut self.diagnostics)
    }

    /// Get diagnostics without clearing the queue.
    pub fn peek(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

impl DiagnosticSink for DiagnosticQueue {
    fn report(&mut self, source: &str, diagnostic: Diagnostic) {
        let diagnostic = if diagnostic.source.is_none() {
            diagnostic.with_source(source)
        } else {
            diagnostic
        };
        self.add(diagnostic);
    }
}

/// Create a "too many errors" diagnostic.
#[cold]
pub fn too_many_errors(limit: usize) -> Diagnostic {
    Diagnostic::error(ErrorCode::E9002)
        .with_message(format!("aborting due to {limit} previous errors"))
        .with_note("use --error-limit to increase the limit")
}

#[cfg(test)]
mod tests;
