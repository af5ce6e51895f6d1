//! HTTP surface.
//!
//! Two routes:
//! - `GET /` - the operator form page
//! - `POST /scrape` - run one batch and publish to the sink
//!
//! The router is generic over the sink implementation so the full
//! request/response contract can be exercised in tests without touching
//! Google Sheets.

mod handlers;
mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use reqwest::Client;

use crate::sink::LinkSink;
use crate::site::TargetSite;

use handlers::{home_handler, scrape_handler};
pub use types::{ApiError, ScrapeRequest, ScrapeResponse};

/// Shared state handed to every request handler.
pub struct AppState<S> {
    /// Accepted-host set and normalization base.
    pub site: Arc<TargetSite>,
    /// Client used for page fetches.
    pub client: Client,
    /// Sink the batch results are published to.
    pub sink: Arc<S>,
    /// Maximum concurrent page fetches per batch.
    pub max_in_flight: usize,
}

// Manual impl: `S` itself need not be Clone behind the Arc.
impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            site: Arc::clone(&self.site),
            client: self.client.clone(),
            sink: Arc::clone(&self.sink),
            max_in_flight: self.max_in_flight,
        }
    }
}

/// Builds the application router.
pub fn build_router<S>(state: AppState<S>) -> Router
where
    S: LinkSink + Send + Sync + 'static,
{
    Router::new()
        .route("/", get(home_handler))
        .route("/scrape", post(scrape_handler::<S>))
        .with_state(state)
}

/// Binds the listener and serves requests until shutdown.
pub async fn start_server<S>(bind: &str, port: u16, state: AppState<S>) -> Result<(), anyhow::Error>
where
    S: LinkSink + Send + Sync + 'static,
{
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(format!("{bind}:{port}"))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {bind}:{port}: {e}"))?;

    log::info!("Listening on http://{bind}:{port}/");
    log::info!("  - Form: http://{bind}:{port}/");
    log::info!("  - API:  POST http://{bind}:{port}/scrape");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {e}"))?;

    Ok(())
}
