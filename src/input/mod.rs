//! Raw input handling: splitting pasted text and selecting the input source.
//!
//! Operators paste URL lists copied from spreadsheets, documents, and chat, so
//! the splitter accepts commas, tabs, semicolons, newlines, and whitespace
//! runs interchangeably. Token order follows first occurrence; deduplication
//! happens later, at the batch boundary.

use std::collections::HashSet;

/// Splits freeform pasted text into raw input tokens.
///
/// Commas, tabs, and semicolons are treated as line breaks, then each line is
/// split on whitespace runs. Empty tokens are discarded. No deduplication is
/// performed here.
pub fn split_inputs(raw: &str) -> Vec<String> {
    raw.replace([',', '\t', ';'], "\n")
        .lines()
        .flat_map(str::split_whitespace)
        .map(str::to_string)
        .collect()
}

/// Selects the batch inputs from a request.
///
/// An explicit URL list takes precedence over pasted text whenever the list
/// itself is non-empty; its entries are trimmed and blank entries dropped.
/// Otherwise the pasted text is split into tokens.
pub fn gather_inputs(raw_text: Option<&str>, urls: Option<&[String]>) -> Vec<String> {
    if let Some(urls) = urls {
        if !urls.is_empty() {
            return urls
                .iter()
                .map(|u| u.trim())
                .filter(|u| !u.is_empty())
                .map(str::to_string)
                .collect();
        }
    }
    raw_text.map(split_inputs).unwrap_or_default()
}

/// Removes exact duplicate tokens, preserving first-occurrence order.
///
/// Dedup is by raw string equality, before normalization: `us/slots` and
/// `/us/slots` are distinct here even though they normalize identically.
pub fn dedup_first_occurrence(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|token| seen.insert(token.clone()))
        .collect()
}
