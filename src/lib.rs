//! Washi: a sitemap-driven page harvester
//!
//! This crate discovers the crawlable pages of a website through sitemap
//! resolution (robots.txt hints, conventional sitemap paths, recursive
//! sitemap indexes), fetches each page sequentially with retry and a
//! politeness delay, and reduces the HTML to clean text for downstream
//! summarization or indexing.

pub mod config;
pub mod crawler;
pub mod extract;
pub mod output;
pub mod sitemap;
pub mod summarize;
pub mod url;

use thiserror::Error;

/// Main error type for Washi operations
#[derive(Debug, Error)]
pub enum WashiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Sitemap error: {0}")]
    Sitemap(#[from] SitemapError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Sitemap resolution errors
///
/// These are raised per sitemap location; the resolver logs and isolates
/// them so a bad candidate or child sitemap never aborts the whole run.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("Invalid base URL '{0}'")]
    BaseUrl(String),

    #[error("Failed to fetch sitemap {url}: {source}")]
    Fetch { url: String, source: reqwest::Error },

    #[error("Sitemap XML error at {url}: {message}")]
    Xml { url: String, message: String },
}

/// Result type alias for Washi operations
pub type Result<T> = std::result::Result<T, WashiError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for sitemap resolution
pub type SitemapResult<T> = std::result::Result<T, SitemapError>;

// Re-export commonly used types
pub use config::Config;
pub use crawler::{run_crawl, CrawlReport, PageOutcome, PageResult};
pub use extract::{clean_text, extract, ExtractedDocument};
pub use url::is_valid_url;
