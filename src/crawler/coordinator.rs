//! Crawl orchestration
//!
//! Sequences the whole pipeline: sitemap discovery, ordered one-at-a-time
//! page fetches with retry and a politeness delay, content extraction and
//! cleanup, and per-page persistence. Pages are processed strictly in
//! input order and each outcome is reported before the next URL is
//! touched, so callers observe partial progress and partial failure as
//! they happen.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::extract::{clean_text, extract};
use crate::output::{generate_filename, FileOutput, OutputSink};
use crate::sitemap::SitemapResolver;
use crate::Result;
use async_stream::stream;
use futures::{pin_mut, Stream, StreamExt};
use reqwest::Client;
use std::collections::BTreeSet;
use std::path::Path;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

/// Outcome of crawling one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOutcome {
    pub url: String,

    /// 1-based position in the crawl order
    pub index: usize,

    pub result: PageResult,
}

/// Success or failure of one page, after all retries
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// Fetched and extracted; text has been through blank-line cleanup
    Success {
        title: Option<String>,
        text: String,
    },

    /// Every fetch attempt failed at the transport level
    Failure { error: String, attempts: u32 },
}

/// Totals for one crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    pub discovered: usize,
    pub attempted: usize,
    pub saved: usize,
    pub failed: usize,
    pub cancelled: bool,
}

/// Discovers the URL set to crawl for the configured site
///
/// An explicit `sitemap-url` is resolved first (its failure is non-fatal);
/// standard discovery runs unless `use-custom-sitemap-only` is set. The
/// union is deduplicated and, when `url-filter` is configured, reduced to
/// URLs containing the filter substring. The returned ordering is the
/// sorted set order, so repeat runs crawl in the same sequence.
pub async fn discover_urls(client: &Client, config: &Config) -> Result<Vec<String>> {
    let mut resolver =
        SitemapResolver::new(client, &config.site.base_url, &config.crawler.user_agent)?;

    let mut urls: BTreeSet<String> = BTreeSet::new();

    if let Some(sitemap_url) = &config.site.sitemap_url {
        match resolver.resolve(sitemap_url).await {
            Ok(found) => {
                tracing::info!("Found {} URLs in custom sitemap {}", found.len(), sitemap_url);
                urls.extend(found);
            }
            Err(e) => {
                tracing::warn!("Failed to process custom sitemap {}: {}", sitemap_url, e);
            }
        }
    }

    if !config.site.use_custom_sitemap_only {
        urls.extend(resolver.discover().await);
    }

    if let Some(filter) = &config.site.url_filter {
        let before = urls.len();
        urls.retain(|url| url.contains(filter.as_str()));
        tracing::info!("URL filter '{}' kept {} of {} URLs", filter, urls.len(), before);
    }

    Ok(urls.into_iter().collect())
}

/// Crawls the given URLs one at a time, yielding an outcome per URL
///
/// The stream is lazy: nothing is fetched until the caller polls, and each
/// outcome is yielded before the next URL is touched. Outcomes arrive in
/// exactly the input order. The politeness delay runs between successive
/// URLs (and between retry attempts, inside the fetcher). Cancellation is
/// honored between URLs; outcomes already yielded stay valid.
pub fn crawl_pages(
    client: &Client,
    urls: Vec<String>,
    config: CrawlerConfig,
    cancel: CancellationToken,
) -> impl Stream<Item = PageOutcome> + '_ {
    let delay = Duration::from_secs_f64(config.delay_between_requests);
    let max_retries = config.max_retries;

    stream! {
        let total = urls.len();
        for (position, url) in urls.into_iter().enumerate() {
            if cancel.is_cancelled() {
                tracing::info!("Crawl cancelled, stopping before {}", url);
                break;
            }

            if position > 0 && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }

            let index = position + 1;
            tracing::info!("Processing {}/{}: {}", index, total, url);

            let result = match fetch_url(client, &url, max_retries, delay).await {
                FetchResult::Success { body, .. } => {
                    let document = extract(&body);
                    let text = clean_text(&document.text);
                    PageResult::Success {
                        title: document.title,
                        text,
                    }
                }
                FetchResult::Failed { error, attempts } => PageResult::Failure { error, attempts },
            };

            yield PageOutcome { url, index, result };
        }
    }
}

/// Consumes the crawl stream, persisting each successful page
///
/// Successful pages with non-empty cleaned text are written through the
/// sink under a `(prefix, index, timestamp, url)`-derived filename; empty
/// extractions count as failures ("no content retrieved"). `max-pages`
/// caps how many files are written without stopping the crawl. Sink
/// errors are environment problems and abort the run.
pub async fn crawl_and_save(
    client: &Client,
    urls: Vec<String>,
    config: &Config,
    sink: &mut dyn OutputSink,
    cancel: CancellationToken,
) -> Result<CrawlReport> {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();

    let mut report = CrawlReport {
        discovered: urls.len(),
        ..CrawlReport::default()
    };
    let max_pages = config.output.max_pages;

    let pages = crawl_pages(client, urls, config.crawler.clone(), cancel.clone());
    pin_mut!(pages);

    while let Some(outcome) = pages.next().await {
        report.attempted += 1;

        match outcome.result {
            PageResult::Success { text, .. } => {
                if text.is_empty() {
                    tracing::warn!("No content retrieved from {}", outcome.url);
                    report.failed += 1;
                    continue;
                }

                tracing::info!("Successfully crawled {} ({} chars)", outcome.url, text.len());

                if let Some(max) = max_pages {
                    if report.saved as u64 >= max {
                        tracing::debug!("Page cap reached, not saving {}", outcome.url);
                        continue;
                    }
                }

                let filename = generate_filename(
                    &outcome.url,
                    outcome.index,
                    &timestamp,
                    &config.output.file_prefix,
                );
                sink.write(&filename, &text)?;
                report.saved += 1;
                tracing::info!("Saved {}", filename);

                if max_pages == Some(report.saved as u64) {
                    tracing::info!("Reached maximum number of pages to save ({})", report.saved);
                }
            }
            PageResult::Failure { error, attempts } => {
                tracing::error!(
                    "Failed to crawl {} after {} attempts: {}",
                    outcome.url,
                    attempts,
                    error
                );
                report.failed += 1;
            }
        }
    }

    report.cancelled = cancel.is_cancelled();
    Ok(report)
}

/// Runs a complete crawl: discover, fetch, extract, save
///
/// This is the main library entry point. The HTTP client built here is
/// shared by sitemap resolution and page crawling and is dropped on every
/// exit path, releasing its connections.
pub async fn run_crawl(config: Config, cancel: CancellationToken) -> Result<CrawlReport> {
    let client = build_http_client(&config.crawler)?;

    let urls = discover_urls(&client, &config).await?;
    if urls.is_empty() {
        tracing::warn!("No URLs found to crawl");
        return Ok(CrawlReport::default());
    }
    tracing::info!("Total unique URLs to crawl: {}", urls.len());

    let mut sink = FileOutput::new(
        Path::new(&config.output.directory),
        &config.output.file_prefix,
    )?;

    crawl_and_save(&client, urls, &config, &mut sink, cancel).await
}
