//! Core data model: link maps, per-page results, and batch reports.

use std::collections::{BTreeMap, BTreeSet};

use url::Url;

/// Ordered map from absolute link URL to the set of anchor texts observed for
/// that URL on one page.
///
/// Backed by a `BTreeMap` of `BTreeSet`s so both the URL ordering and the
/// anchor-text ordering are deterministic regardless of document order or
/// fetch interleaving. Output determinism is a correctness requirement here,
/// not an optimization: the published sheet must be reproducible for the same
/// pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkMap {
    entries: BTreeMap<String, BTreeSet<String>>,
}

impl LinkMap {
    /// Creates an empty link map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one observation of `anchor_text` for `url`.
    ///
    /// Duplicate texts for the same URL collapse into one entry. Empty texts
    /// are recorded too: a link with no label is still a link.
    pub fn insert(&mut self, url: &str, anchor_text: String) {
        self.entries
            .entry(url.to_string())
            .or_default()
            .insert(anchor_text);
    }

    /// Number of distinct link URLs in the map.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no links have been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Materializes the map as URL-ordered entries with alphabetically sorted
    /// anchor-text sequences.
    pub fn to_sorted(&self) -> BTreeMap<String, Vec<String>> {
        self.entries
            .iter()
            .map(|(url, texts)| (url.clone(), texts.iter().cloned().collect()))
            .collect()
    }
}

/// Classified links extracted from a single page.
///
/// One `PageLinks` is produced per fetch attempt. When the fetch or parse
/// fails, an instance with two empty maps is emitted alongside an error
/// string, so a requested URL is never dropped silently.
#[derive(Debug, Clone)]
pub struct PageLinks {
    /// The canonical URL the page was fetched from.
    pub source_url: Url,
    /// Links whose resolved host is in the accepted set.
    pub internal: LinkMap,
    /// All other links.
    pub external: LinkMap,
}

impl PageLinks {
    /// An empty result for a page that could not be scraped.
    pub fn empty(source_url: Url) -> Self {
        Self {
            source_url,
            internal: LinkMap::new(),
            external: LinkMap::new(),
        }
    }
}

/// Aggregate outcome of one batch run.
#[derive(Debug)]
pub struct BatchReport {
    /// Deduplicated raw input count accepted into the batch.
    pub input_count: usize,
    /// Number of inputs that normalized successfully.
    pub normalized_count: usize,
    /// Per-page results, ordered by normalized-input order (not completion
    /// order).
    pub pages: Vec<PageLinks>,
    /// Human-readable warnings: one per failed normalization or fetch, in
    /// occurrence order.
    pub errors: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_map_set_semantics() {
        let mut map = LinkMap::new();
        map.insert("https://www.casinos.com/about", "About".to_string());
        map.insert("https://www.casinos.com/about", "About us".to_string());
        map.insert("https://www.casinos.com/about", "About".to_string());

        assert_eq!(map.len(), 1);
        let sorted = map.to_sorted();
        assert_eq!(
            sorted["https://www.casinos.com/about"],
            vec!["About".to_string(), "About us".to_string()]
        );
    }

    #[test]
    fn test_link_map_empty_text_is_recorded() {
        let mut map = LinkMap::new();
        map.insert("https://www.casinos.com/promo", String::new());

        let sorted = map.to_sorted();
        assert_eq!(sorted["https://www.casinos.com/promo"], vec![String::new()]);
    }

    #[test]
    fn test_link_map_urls_are_ordered() {
        let mut map = LinkMap::new();
        map.insert("https://b.example.com/", "b".to_string());
        map.insert("https://a.example.com/", "a".to_string());

        let keys: Vec<String> = map.to_sorted().into_keys().collect();
        assert_eq!(
            keys,
            vec![
                "https://a.example.com/".to_string(),
                "https://b.example.com/".to_string()
            ]
        );
    }

    #[test]
    fn test_page_links_empty() {
        let url = Url::parse("https://www.casinos.com/us/slots").unwrap();
        let page = PageLinks::empty(url.clone());
        assert_eq!(page.source_url, url);
        assert!(page.internal.is_empty());
        assert!(page.external.is_empty());
    }
}
