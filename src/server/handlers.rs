//! Request handlers.

use axum::extract::State;
use axum::response::Html;
use axum::Json;

use crate::batch::run_batch;
use crate::fetch::scrape_page;
use crate::input::gather_inputs;
use crate::sink::{blocks_from_pages, LinkSink};

use super::types::{ApiError, ScrapeRequest, ScrapeResponse};
use super::AppState;

/// Serves the operator form page.
pub async fn home_handler() -> Html<&'static str> {
    Html(include_str!("form.html"))
}

/// Runs one scrape batch and publishes the results.
///
/// Per-input and per-URL failures come back as warnings in a 200 response;
/// only batch pre-condition violations and sink failures are non-success.
pub async fn scrape_handler<S: LinkSink>(
    State(state): State<AppState<S>>,
    Json(request): Json<ScrapeRequest>,
) -> Result<Json<ScrapeResponse>, ApiError> {
    let inputs = gather_inputs(request.raw_text.as_deref(), request.urls.as_deref());
    log::debug!("Scrape request: {} inputs", inputs.len());

    let site = state.site.clone();
    let client = state.client.clone();
    let ignore_page_chrome = request.ignore_header_footer;
    let report = run_batch(
        inputs,
        state.site.clone(),
        state.max_in_flight,
        move |url| {
            let client = client.clone();
            let site = site.clone();
            async move { scrape_page(&client, &site, url, ignore_page_chrome).await }
        },
    )
    .await?;

    let (internal, external) = blocks_from_pages(&report.pages);
    state.sink.publish(&internal, &external).await?;

    Ok(Json(ScrapeResponse {
        ok: true,
        input_count: report.input_count,
        normalized_count: report.normalized_count,
        errors: report.errors,
    }))
}
