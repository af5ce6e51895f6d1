//! Result publication.
//!
//! The pipeline hands the sink two ordered lists of
//! `(source URL, sorted link map)` blocks - one internal, one external - and
//! the sink fully replaces the previously published content for both
//! categories. Row rendering is pure and lives here; the Google Sheets
//! transport lives in [`sheets`].

mod sheets;

use std::collections::BTreeMap;
use std::future::Future;

use crate::error_handling::SinkError;
use crate::models::PageLinks;

pub use sheets::SheetsSink;

/// Ordered per-page link blocks: one `(source URL, url -> sorted anchor
/// texts)` entry per requested page, in batch order.
pub type LinkBlocks = Vec<(String, BTreeMap<String, Vec<String>>)>;

/// Destination for a batch's classified links.
///
/// Publishing must be an idempotent overwrite: prior content for both
/// categories is replaced, never appended to.
pub trait LinkSink {
    /// Replaces the published content with the given blocks.
    fn publish(
        &self,
        internal: &LinkBlocks,
        external: &LinkBlocks,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Splits per-page results into the internal and external block lists, in
/// page order.
pub fn blocks_from_pages(pages: &[PageLinks]) -> (LinkBlocks, LinkBlocks) {
    let mut internal = Vec::with_capacity(pages.len());
    let mut external = Vec::with_capacity(pages.len());
    for page in pages {
        let source = page.source_url.to_string();
        internal.push((source.clone(), page.internal.to_sorted()));
        external.push((source, page.external.to_sorted()));
    }
    (internal, external)
}

/// Renders one page block as spreadsheet rows.
///
/// Layout: a `SOURCE URL:` banner row, a two-column header row, one row per
/// link with its anchor texts joined by `" | "` (empty texts dropped from the
/// join), and a trailing blank row separating blocks. A page with no links
/// in this category gets a `(no links found)` placeholder.
pub fn block_rows(
    source_url: &str,
    header_left: &str,
    header_right: &str,
    links: &BTreeMap<String, Vec<String>>,
) -> Vec<Vec<String>> {
    let mut rows = vec![
        vec![format!("SOURCE URL: {source_url}"), String::new()],
        vec![header_left.to_string(), header_right.to_string()],
    ];

    if links.is_empty() {
        rows.push(vec!["(no links found)".to_string(), String::new()]);
        rows.push(vec![String::new(), String::new()]);
        return rows;
    }

    for (link, texts) in links {
        let joined = texts
            .iter()
            .filter(|t| !t.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(" | ");
        rows.push(vec![link.clone(), joined]);
    }

    rows.push(vec![String::new(), String::new()]);
    rows
}
