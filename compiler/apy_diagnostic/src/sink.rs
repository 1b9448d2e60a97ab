//! The reporting contract between decoders and whoever collects diagnostics.

use crate::Diagnostic;

/// Receiver for diagnostics raised while building tokens.
///
/// Reporting is fire-and-forget: the caller continues after `report`
/// returns, whatever the sink decides to do with the diagnostic.
pub trait DiagnosticSink {
    /// Report `diagnostic` about the source text `source`.
    fn report(&mut self, source: &str, diagnostic: Diagnostic);
}

/// Collects everything verbatim. Handy in tests and one-shot tools.
impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, source: &str, diagnostic: Diagnostic) {
        let diagnostic = if diagnostic.source.is_none() {
            diagnostic.with_source(source)
        } else {
            diagnostic
        };
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, source: &str, diagnostic: Diagnostic) {
        (**self).report(source, diagnostic);
    }
}
