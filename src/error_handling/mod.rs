//! Error handling.
//!
//! This module defines one error enum per pipeline concern:
//! - [`NormalizeError`] - per-input failures, collected and non-fatal
//! - [`ScrapeError`] - per-URL fetch/parse failures, collected and non-fatal
//! - [`BatchError`] - fatal batch pre-condition violations
//! - [`SinkError`] - fatal sink publication failures
//! - [`InitializationError`] - startup failures

mod types;

// Re-export public API
pub use types::{BatchError, InitializationError, NormalizeError, ScrapeError, SinkError};
