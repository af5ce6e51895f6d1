//! Target-site host set, input normalization, and link classification.
//!
//! A [`TargetSite`] owns the set of hostnames considered internal. The set is
//! injected configuration (apex + `www.` apex by default, extendable via
//! `--accept-host`), never a hardcoded pair.

use std::collections::BTreeSet;
use std::fmt::Write as _;

use url::Url;

use crate::error_handling::{InitializationError, NormalizeError};

/// The site all inputs must belong to and all links are classified against.
#[derive(Debug, Clone)]
pub struct TargetSite {
    hosts: BTreeSet<String>,
    base: Url,
}

impl TargetSite {
    /// Builds a target site from an apex domain plus optional extra hosts.
    ///
    /// The accepted set contains the apex and its `www.` form, lowercased.
    /// Bare paths and leading-slash inputs are resolved against
    /// `https://www.<apex>/`.
    pub fn new(apex: &str, extra_hosts: &[String]) -> Result<Self, InitializationError> {
        let apex = apex
            .trim()
            .trim_start_matches("www.")
            .to_ascii_lowercase();
        if apex.is_empty() || !apex.contains('.') {
            return Err(InitializationError::TargetSiteError(format!(
                "'{apex}' is not a usable apex domain"
            )));
        }

        let www_host = format!("www.{apex}");
        let base = Url::parse(&format!("https://{www_host}/")).map_err(|e| {
            InitializationError::TargetSiteError(format!("cannot build base URL for '{apex}': {e}"))
        })?;

        let mut hosts: BTreeSet<String> = [apex, www_host].into_iter().collect();
        hosts.extend(extra_hosts.iter().map(|h| h.trim().to_ascii_lowercase()));
        hosts.retain(|h| !h.is_empty());

        Ok(Self { hosts, base })
    }

    /// The accepted hostnames, lowercased.
    pub fn hosts(&self) -> &BTreeSet<String> {
        &self.hosts
    }

    /// The site root all relative inputs resolve against.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Normalizes one raw input into a canonical URL on an accepted host.
    ///
    /// Interpretation rules, in order:
    /// 1. Leading `/` - a path relative to the site root.
    /// 2. No scheme separator and a `www.` prefix - `https://` is prepended
    ///    and the token re-parsed as a full URL.
    /// 3. Still no scheme separator - the whole token is a path relative to
    ///    the site root.
    /// 4. A full URL - accepted when its host (case-insensitive) is in the
    ///    accepted set and it carries no explicit non-default port, rebuilt
    ///    as `https://<host><path>[?<query>]` with the fragment dropped. A
    ///    ported URL names a different origin and is rejected rather than
    ///    silently rewritten onto port 443.
    pub fn normalize(&self, input: &str) -> Result<Url, NormalizeError> {
        let token = input.trim();
        if token.is_empty() {
            return Err(NormalizeError::Unparsable(input.to_string()));
        }

        if let Some(path) = token.strip_prefix('/') {
            return self
                .base
                .join(path)
                .map_err(|_| NormalizeError::Unparsable(token.to_string()));
        }

        let mut token = token.to_string();
        if !token.contains("://") && token.starts_with("www.") {
            token = format!("https://{token}");
        }

        if !token.contains("://") {
            return self
                .base
                .join(&token)
                .map_err(|_| NormalizeError::Unparsable(token));
        }

        let parsed =
            Url::parse(&token).map_err(|_| NormalizeError::Unparsable(token.clone()))?;
        let host = parsed.host_str().unwrap_or("").to_ascii_lowercase();
        // port() is None for the scheme default, so only real alternate
        // origins are rejected here.
        if parsed.port().is_some() || !self.hosts.contains(&host) {
            return Err(NormalizeError::ForeignHost(token));
        }

        let mut rebuilt = format!("https://{host}{}", parsed.path());
        if let Some(query) = parsed.query() {
            let _ = write!(rebuilt, "?{query}");
        }
        Url::parse(&rebuilt).map_err(|_| NormalizeError::Unparsable(token))
    }

    /// True when the URL's host is one of the accepted hostnames and it
    /// carries no explicit non-default port. A ported URL is a different
    /// origin, so it classifies external even on an accepted host.
    ///
    /// Relative hrefs are resolved against an internal source page before
    /// classification, so they always land internal.
    pub fn is_internal(&self, url: &Url) -> bool {
        url.port().is_none()
            && url
                .host_str()
                .map(|host| self.hosts.contains(&host.to_ascii_lowercase()))
                .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    include!("tests.rs");
}
