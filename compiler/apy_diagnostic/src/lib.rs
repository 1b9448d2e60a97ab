//! Diagnostic system for the apy front end.
//!
//! Front-end stages never abort on malformed input. They build a
//! [`Diagnostic`] and hand it to a [`DiagnosticSink`], then keep going so
//! that later stages can accumulate further problems.
//!
//! - Error codes for searchability
//! - Clear messages (what went wrong)
//! - Source line and text (where it went wrong)
//! - Notes (why it's wrong)
//!
//! # Error Guarantees
//!
//! The `ErrorGuaranteed` type provides type-level proof that at least one
//! error was emitted.
//!
//! ```text
//! let mut queue = DiagnosticQueue::new();
//! queue.report("0x7fffffffff", diagnostic);
//! if let Some(guarantee) = queue.has_errors() { ... }
//! ```

mod diagnostic;
pub mod emitter;
mod error_code;
mod guarantee;
pub mod queue;
mod sink;

pub use diagnostic::{Diagnostic, Severity};
pub use error_code::ErrorCode;
pub use guarantee::ErrorGuaranteed;
pub use queue::{DiagnosticConfig, DiagnosticQueue};
pub use sink::DiagnosticSink;
