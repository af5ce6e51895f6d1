//! Configuration constants.
//!
//! This module defines the constants used throughout the application:
//! batch limits, timeouts, sink worksheet names, and environment variable names.

/// Default User-Agent header sent with every page fetch.
///
/// Identifies the tool so target-site operators can attribute the traffic.
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; link-audit/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

/// Default per-request timeout for page fetches, in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 20;

/// Default number of page fetches allowed in flight at once.
///
/// All fetches in a batch hit the same origin, so this is kept deliberately
/// small to avoid overwhelming the target server.
pub const DEFAULT_MAX_CONCURRENCY: usize = 8;

/// Minimum number of inputs accepted per batch (after raw dedup).
pub const MIN_BATCH_SIZE: usize = 1;

/// Maximum number of inputs accepted per batch (after raw dedup).
pub const MAX_BATCH_SIZE: usize = 150;

/// Worksheet tab that receives internal link blocks.
pub const INTERNAL_LINKS_TAB: &str = "INTERNAL_LINKS";

/// Worksheet tab that receives external link blocks.
pub const EXTERNAL_LINKS_TAB: &str = "EXTERNAL_LINKS";

/// Environment variable holding the target spreadsheet id.
pub const SPREADSHEET_ID_ENV: &str = "GSHEETS_SPREADSHEET_ID";

/// Environment variable holding the Sheets API bearer token.
pub const ACCESS_TOKEN_ENV: &str = "GSHEETS_ACCESS_TOKEN";
