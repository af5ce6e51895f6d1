//! link_audit library: target-site link extraction and classification
//!
//! This library fetches a batch of pages from one target site, extracts every
//! anchor, classifies each resolved link as internal or external to the
//! site's accepted host set, and hands the aggregate to a spreadsheet sink.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use link_audit::batch::run_batch;
//! use link_audit::fetch::scrape_page;
//! use link_audit::site::TargetSite;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let site = Arc::new(TargetSite::new("casinos.com", &[])?);
//! let client = reqwest::Client::new();
//!
//! let scraper_site = Arc::clone(&site);
//! let report = run_batch(
//!     vec!["us/slots".to_string(), "/us/poker".to_string()],
//!     site,
//!     8,
//!     move |url| {
//!         let client = client.clone();
//!         let site = Arc::clone(&scraper_site);
//!         async move { scrape_page(&client, &site, url, false).await }
//!     },
//! )
//! .await?;
//!
//! println!(
//!     "{} of {} inputs scraped, {} warnings",
//!     report.normalized_count,
//!     report.input_count,
//!     report.errors.len()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

pub mod batch;
pub mod config;
pub mod error_handling;
pub mod extract;
pub mod fetch;
pub mod initialization;
pub mod input;
pub mod models;
pub mod server;
pub mod sink;
pub mod site;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use models::{BatchReport, LinkMap, PageLinks};
pub use site::TargetSite;
