//! Sitemap resolution
//!
//! Given a base origin, produce the deduplicated set of page URLs
//! reachable through sitemap discovery. Candidate locations are tried in
//! order and the first one that yields any URLs is authoritative; indexes
//! are expanded recursively with per-child failure isolation.

use std::collections::{BTreeSet, HashSet};

use futures::future::{BoxFuture, FutureExt};
use reqwest::Client;
use url::Url;

use crate::sitemap::parse::{parse_sitemap, SitemapKind};
use crate::sitemap::robots::fetch_sitemap_hints;
use crate::url::is_valid_url;
use crate::{SitemapError, SitemapResult};

/// Conventional sitemap locations, tried in order
pub const DEFAULT_SITEMAP_PATHS: &[&str] = &[
    "/sitemap.xml",
    "/sitemap_index.xml",
    "/sitemaps/sitemap.xml",
    "/wp-sitemap.xml",
];

/// Resolves the sitemap graph of one origin into page URLs
///
/// The candidate list is rebuilt for every [`discover`](Self::discover)
/// call; nothing is shared across calls or instances. Results come back as
/// a `BTreeSet`, so the final ordering is deterministic for a given site.
pub struct SitemapResolver<'a> {
    client: &'a Client,
    base_url: Url,
    user_agent: String,
    /// Locations seen during the current resolution; bounds cyclic indexes
    visited: HashSet<String>,
}

impl<'a> SitemapResolver<'a> {
    /// Creates a resolver for the given base origin
    pub fn new(client: &'a Client, base_url: &str, user_agent: &str) -> SitemapResult<Self> {
        let parsed = Url::parse(base_url.trim_end_matches('/'))
            .map_err(|_| SitemapError::BaseUrl(base_url.to_string()))?;
        if !parsed.has_host() {
            return Err(SitemapError::BaseUrl(base_url.to_string()));
        }

        Ok(Self {
            client,
            base_url: parsed,
            user_agent: user_agent.to_string(),
            visited: HashSet::new(),
        })
    }

    /// Tries each candidate sitemap location in order and returns the
    /// first non-empty URL set found
    ///
    /// Candidates are the conventional default paths with robots-advertised
    /// locations appended. Per-candidate failures (unreachable, non-2xx,
    /// malformed XML) are logged and resolution moves on; an empty result
    /// means no candidate yielded any URLs.
    pub async fn discover(&mut self) -> BTreeSet<String> {
        let candidates = self.candidate_locations().await;

        for candidate in candidates {
            let location = match self.base_url.join(&candidate) {
                Ok(url) => url.to_string(),
                Err(e) => {
                    tracing::warn!("Skipping unjoinable sitemap candidate {}: {}", candidate, e);
                    continue;
                }
            };

            self.visited.clear();
            match self.resolve_location(location.clone()).await {
                Ok(urls) if !urls.is_empty() => {
                    tracing::info!("Found working sitemap at {} ({} URLs)", location, urls.len());
                    return urls;
                }
                Ok(_) => {
                    tracing::debug!("Sitemap at {} yielded no URLs, trying next", location);
                }
                Err(e) => {
                    tracing::warn!("Failed to process sitemap at {}: {}", location, e);
                }
            }
        }

        tracing::info!("No sitemap URLs found for {}", self.base_url);
        BTreeSet::new()
    }

    /// Resolves one explicit sitemap location, recursively
    pub async fn resolve(&mut self, location: &str) -> SitemapResult<BTreeSet<String>> {
        self.visited.clear();
        self.resolve_location(location.to_string()).await
    }

    /// Builds the candidate list: defaults first, robots hints appended
    async fn candidate_locations(&self) -> Vec<String> {
        let mut candidates: Vec<String> = DEFAULT_SITEMAP_PATHS
            .iter()
            .map(|path| (*path).to_string())
            .collect();

        let robots_url = match self.base_url.join("/robots.txt") {
            Ok(url) => url.to_string(),
            Err(_) => return candidates,
        };

        match fetch_sitemap_hints(self.client, &robots_url, &self.user_agent).await {
            Ok(hints) => {
                for hint in hints {
                    let candidate = self.hint_to_candidate(&hint);
                    if !candidates.contains(&candidate) {
                        tracing::info!("Adding sitemap from robots.txt: {}", candidate);
                        candidates.push(candidate);
                    }
                }
            }
            Err(e) => {
                tracing::debug!("Could not process robots.txt at {}: {}", robots_url, e);
            }
        }

        candidates
    }

    /// Reduces an absolute same-origin hint to its path; keeps others as-is
    fn hint_to_candidate(&self, hint: &str) -> String {
        match Url::parse(hint) {
            Ok(url) if url.origin() == self.base_url.origin() => url.path().to_string(),
            _ => hint.to_string(),
        }
    }

    /// Resolves one sitemap location into page URLs
    ///
    /// Indexes recurse into every child location; a failing child is
    /// logged and skipped so its siblings still contribute. A location
    /// already seen during this resolution yields an empty set.
    fn resolve_location(
        &mut self,
        location: String,
    ) -> BoxFuture<'_, SitemapResult<BTreeSet<String>>> {
        async move {
            if !self.visited.insert(location.clone()) {
                tracing::warn!("Skipping already visited sitemap location: {}", location);
                return Ok(BTreeSet::new());
            }

            let xml = self.fetch_xml(&location).await?;
            let document = parse_sitemap(&xml).map_err(|message| SitemapError::Xml {
                url: location.clone(),
                message,
            })?;

            match document.kind {
                SitemapKind::Index => {
                    let mut urls = BTreeSet::new();
                    for child in document.locations {
                        match self.resolve_location(child.clone()).await {
                            Ok(sub) => urls.extend(sub),
                            Err(e) => {
                                tracing::warn!("Error processing sub-sitemap {}: {}", child, e);
                            }
                        }
                    }
                    Ok(urls)
                }
                SitemapKind::UrlSet => Ok(document
                    .locations
                    .into_iter()
                    .filter(|url| is_valid_url(url))
                    .collect()),
            }
        }
        .boxed()
    }

    /// Fetches a sitemap document, failing on non-2xx status
    async fn fetch_xml(&self, location: &str) -> SitemapResult<String> {
        let response = self
            .client
            .get(location)
            .send()
            .await
            .map_err(|source| SitemapError::Fetch {
                url: location.to_string(),
                source,
            })?;

        let response = response
            .error_for_status()
            .map_err(|source| SitemapError::Fetch {
                url: location.to_string(),
                source,
            })?;

        response.text().await.map_err(|source| SitemapError::Fetch {
            url: location.to_string(),
            source,
        })
    }
}
