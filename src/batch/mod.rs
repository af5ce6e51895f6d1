//! Batch orchestration.
//!
//! Drives the extractor over every normalized input: raw dedup, size gate,
//! normalization, bounded-concurrency fetches, and deterministic reassembly.
//! Per-input and per-URL failures are collected as warning strings and never
//! abort the batch; only the size gate and an all-inputs-invalid batch are
//! fatal.

use std::future::Future;
use std::sync::Arc;

use futures::future::join_all;
use url::Url;

use crate::config::{MAX_BATCH_SIZE, MIN_BATCH_SIZE};
use crate::error_handling::{BatchError, ScrapeError};
use crate::initialization::init_semaphore;
use crate::input::dedup_first_occurrence;
use crate::models::{BatchReport, PageLinks};
use crate::site::TargetSite;

/// Runs one batch.
///
/// `scrape` is invoked once per normalized URL; it is a parameter (rather
/// than a direct call into [`crate::fetch`]) so orchestration can be tested
/// without a network. At most `max_in_flight` scrapes run concurrently, and
/// results are reassembled by awaiting the spawned tasks in input order, so
/// the report's page order never depends on completion order.
///
/// A failed scrape contributes an empty [`PageLinks`] plus a
/// `"Failed to scrape <url>: <reason>"` warning and the batch continues.
pub async fn run_batch<F, Fut>(
    raw_inputs: Vec<String>,
    site: Arc<TargetSite>,
    max_in_flight: usize,
    scrape: F,
) -> Result<BatchReport, BatchError>
where
    F: Fn(Url) -> Fut + Clone + Send + 'static,
    Fut: Future<Output = Result<PageLinks, ScrapeError>> + Send + 'static,
{
    let inputs = dedup_first_occurrence(raw_inputs);
    let input_count = inputs.len();
    if !(MIN_BATCH_SIZE..=MAX_BATCH_SIZE).contains(&input_count) {
        return Err(BatchError::BadBatchSize {
            got: input_count,
            min: MIN_BATCH_SIZE,
            max: MAX_BATCH_SIZE,
        });
    }

    let mut errors = Vec::new();
    let mut normalized = Vec::new();
    for input in &inputs {
        match site.normalize(input) {
            Ok(url) => normalized.push(url),
            Err(e) => errors.push(format!("{input} -> {e}")),
        }
    }
    if normalized.is_empty() {
        return Err(BatchError::NoValidInputs { errors });
    }

    log::info!(
        "Starting batch: {} inputs, {} normalized, {} max in flight",
        input_count,
        normalized.len(),
        max_in_flight
    );

    let semaphore = init_semaphore(max_in_flight.max(1));
    let mut handles = Vec::with_capacity(normalized.len());
    for url in normalized.iter().cloned() {
        let semaphore = Arc::clone(&semaphore);
        let scrape = scrape.clone();
        handles.push(tokio::spawn(async move {
            // Err only when the semaphore is closed, which never happens here.
            let _permit = semaphore.acquire_owned().await.ok();
            scrape(url).await
        }));
    }

    let mut pages = Vec::with_capacity(normalized.len());
    for (url, joined) in normalized.iter().zip(join_all(handles).await) {
        match joined {
            Ok(Ok(page)) => pages.push(page),
            Ok(Err(e)) => {
                log::warn!("Failed to scrape {url}: {e}");
                errors.push(format!("Failed to scrape {url}: {e}"));
                pages.push(PageLinks::empty(url.clone()));
            }
            Err(join_error) => {
                log::warn!("Scrape task for {url} panicked: {join_error}");
                errors.push(format!("Failed to scrape {url}: task panicked"));
                pages.push(PageLinks::empty(url.clone()));
            }
        }
    }

    Ok(BatchReport {
        input_count,
        normalized_count: normalized.len(),
        pages,
        errors,
    })
}
