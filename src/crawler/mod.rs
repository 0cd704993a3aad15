//! Crawler module for page fetching and orchestration
//!
//! This module contains the crawl pipeline:
//! - HTTP fetching with transport-error classification and retries
//! - Sequential, streaming orchestration of fetch → extract → cleanup
//! - Sitemap-driven URL discovery and per-page persistence

mod coordinator;
mod fetcher;

pub use coordinator::{
    crawl_and_save, crawl_pages, discover_urls, run_crawl, CrawlReport, PageOutcome, PageResult,
};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
