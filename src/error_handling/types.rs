//! Error type definitions.
//!
//! This module defines the error enums used throughout the application, one per
//! pipeline concern. Per-input and per-URL errors are non-fatal: the batch
//! collects them as human-readable strings and keeps going. Only batch
//! pre-conditions and sink failures abort a request.

use log::SetLoggerError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),

    /// Error building the target-site host set.
    #[error("Target site configuration error: {0}")]
    TargetSiteError(String),
}

/// Per-input normalization failure. Non-fatal: collected as an error string.
#[derive(Error, Debug)]
pub enum NormalizeError {
    /// The input could not be interpreted as a URL or path.
    #[error("not a recognizable URL or path: {0}")]
    Unparsable(String),

    /// The input parsed as a URL, but its host is not in the accepted set.
    #[error("URL is not on an accepted host: {0}")]
    ForeignHost(String),
}

/// Per-URL extraction failure. Non-fatal: yields an empty page result plus an
/// error string.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The request did not complete within the configured timeout.
    #[error("request timed out")]
    Timeout(#[source] reqwest::Error),

    /// The request failed before a terminal response was received.
    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The server answered with a terminal client or server error status.
    #[error("HTTP status {0}")]
    Status(StatusCode),

    /// The response body could not be decoded as text.
    #[error("unreadable response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Fatal batch pre-condition failures.
#[derive(Error, Debug)]
pub enum BatchError {
    /// The deduplicated input count is outside the accepted range.
    #[error("expected between {min} and {max} URLs/paths, got {got}")]
    BadBatchSize {
        /// Deduplicated input count that was rejected.
        got: usize,
        /// Lower bound of the accepted range.
        min: usize,
        /// Upper bound of the accepted range.
        max: usize,
    },

    /// Every input failed normalization.
    #[error("no inputs normalized to a URL on an accepted host")]
    NoValidInputs {
        /// One `"<input> -> <reason>"` entry per rejected input.
        errors: Vec<String>,
    },
}

/// Sink publication failures. Fatal: surfaced after all fetching completes.
#[derive(Error, Debug)]
pub enum SinkError {
    /// A required environment variable is missing or empty.
    #[error("missing configuration: {0}")]
    Configuration(String),

    /// The sink request could not be sent.
    #[error("sink request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The sink API rejected the write.
    #[error("sink API returned {0}")]
    Api(StatusCode),
}
