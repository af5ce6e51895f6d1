//! Anchor extraction and classification.
//!
//! This module is the pure half of the scraper: given a fetched HTML body and
//! its source URL, it produces the internal/external [`LinkMap`] pair. No I/O
//! happens here, which keeps the extraction rules testable against fixture
//! documents.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::models::LinkMap;
use crate::site::TargetSite;

const ANCHOR_SELECTOR_STR: &str = "a[href]";

/// Elements whose descendants count as page chrome rather than content.
const PAGE_CHROME_ELEMENTS: [&str; 3] = ["header", "footer", "nav"];

/// Href prefixes that never denote a fetchable page.
const SKIPPED_HREF_PREFIXES: [&str; 4] = ["#", "javascript:", "mailto:", "tel:"];

static ANCHOR_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(ANCHOR_SELECTOR_STR)
        .unwrap_or_else(|e| panic!("invalid anchor selector '{ANCHOR_SELECTOR_STR}': {e}"))
});

/// Extracts every classified link from an HTML document.
///
/// For each `<a href>` element:
/// - when `ignore_page_chrome` is set, anchors inside `<header>`, `<footer>`,
///   or `<nav>` are skipped;
/// - empty, same-page fragment, `javascript:`, `mailto:`, and `tel:` hrefs
///   are skipped;
/// - the href is resolved to an absolute URL against `source`;
/// - the anchor text is the collapsed visible text, falling back to
///   `aria-label` then `title`, and may end up empty;
/// - the resolved URL is classified internal iff its host is in the accepted
///   set, and the `(url, text)` observation is accumulated into the matching
///   map.
pub fn extract_links(
    html: &str,
    source: &Url,
    site: &TargetSite,
    ignore_page_chrome: bool,
) -> (LinkMap, LinkMap) {
    let document = Html::parse_document(html);
    let mut internal = LinkMap::new();
    let mut external = LinkMap::new();

    for anchor in document.select(&ANCHOR_SELECTOR) {
        if ignore_page_chrome && in_page_chrome(&anchor) {
            continue;
        }

        let href = anchor.value().attr("href").unwrap_or("").trim();
        if skip_href(href) {
            continue;
        }

        let resolved = match source.join(href) {
            Ok(url) => url,
            Err(e) => {
                log::debug!("Ignoring unresolvable href '{href}' on {source}: {e}");
                continue;
            }
        };

        let text = anchor_text(&anchor);
        if site.is_internal(&resolved) {
            internal.insert(resolved.as_str(), text);
        } else {
            external.insert(resolved.as_str(), text);
        }
    }

    (internal, external)
}

/// True when the anchor's ancestor chain contains a page-chrome element.
fn in_page_chrome(anchor: &ElementRef) -> bool {
    anchor
        .ancestors()
        .filter_map(ElementRef::wrap)
        .any(|ancestor| PAGE_CHROME_ELEMENTS.contains(&ancestor.value().name()))
}

/// True for hrefs that should never be recorded as links.
fn skip_href(href: &str) -> bool {
    if href.is_empty() {
        return true;
    }
    let lowered = href.to_ascii_lowercase();
    SKIPPED_HREF_PREFIXES
        .iter()
        .any(|prefix| lowered.starts_with(prefix))
}

/// Display text for an anchor.
///
/// Visible text content is trimmed and whitespace-collapsed. When empty, the
/// `aria-label` attribute is tried, then `title`. An anchor with none of
/// these yields the empty string - recorded, not discarded.
fn anchor_text(anchor: &ElementRef) -> String {
    let visible: Vec<&str> = anchor.text().flat_map(str::split_whitespace).collect();
    if !visible.is_empty() {
        return visible.join(" ");
    }

    for attr in ["aria-label", "title"] {
        if let Some(value) = anchor.value().attr(attr) {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }

    String::new()
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
