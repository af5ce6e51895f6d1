//! Page fetching.
//!
//! The effectful half of the scraper: one GET per canonical URL, redirects
//! followed, bounded by the client's configured timeout. Extraction itself is
//! pure and lives in [`crate::extract`].

use reqwest::Client;
use url::Url;

use crate::error_handling::ScrapeError;
use crate::extract::extract_links;
use crate::models::PageLinks;
use crate::site::TargetSite;

/// Fetches one page body.
///
/// Timeouts, transport failures, and terminal 4xx/5xx statuses map to the
/// corresponding [`ScrapeError`] variants; a terminal 3xx (redirects are
/// otherwise followed by the client) is not a failure. A body that cannot be
/// decoded as text is reported as [`ScrapeError::Body`].
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String, ScrapeError> {
    let response = client.get(url.clone()).send().await.map_err(|e| {
        if e.is_timeout() {
            ScrapeError::Timeout(e)
        } else {
            ScrapeError::Request(e)
        }
    })?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(ScrapeError::Status(status));
    }

    response.text().await.map_err(ScrapeError::Body)
}

/// Fetches one page and extracts its classified links.
pub async fn scrape_page(
    client: &Client,
    site: &TargetSite,
    url: Url,
    ignore_page_chrome: bool,
) -> Result<PageLinks, ScrapeError> {
    let body = fetch_page(client, &url).await?;
    let (internal, external) = extract_links(&body, &url, site, ignore_page_chrome);
    log::debug!(
        "Scraped {url}: {} internal, {} external links",
        internal.len(),
        external.len()
    );
    Ok(PageLinks {
        source_url: url,
        internal,
        external,
    })
}
