use serde::Deserialize;

/// Main configuration structure for Washi
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub site: SiteConfig,
    #[serde(default)]
    pub crawler: CrawlerConfig,
    pub output: OutputConfig,
}

/// Target site configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Base origin to discover pages for (e.g., "https://example.com")
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Explicit sitemap location to resolve in addition to discovery
    #[serde(rename = "sitemap-url", default)]
    pub sitemap_url: Option<String>,

    /// When true, skip standard discovery and use only `sitemap-url`
    #[serde(rename = "use-custom-sitemap-only", default)]
    pub use_custom_sitemap_only: bool,

    /// Keep only discovered URLs containing this substring
    #[serde(rename = "url-filter", default)]
    pub url_filter: Option<String>,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// User agent header sent with every request
    #[serde(rename = "user-agent", default = "default_user_agent")]
    pub user_agent: String,

    /// Total per-request timeout in seconds
    #[serde(rename = "request-timeout", default = "default_request_timeout")]
    pub request_timeout: u64,

    /// Whether to verify TLS certificates
    #[serde(rename = "verify-tls", default = "default_verify_tls")]
    pub verify_tls: bool,

    /// Extra fetch attempts after a transport failure
    #[serde(rename = "max-retries", default = "default_max_retries")]
    pub max_retries: u32,

    /// Politeness delay between requests, in seconds (fractional allowed)
    #[serde(rename = "delay-between-requests", default = "default_delay")]
    pub delay_between_requests: f64,

    /// Reserved: link following is out of scope and must stay disabled
    #[serde(rename = "follow-links", default)]
    pub follow_links: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            request_timeout: default_request_timeout(),
            verify_tls: default_verify_tls(),
            max_retries: default_max_retries(),
            delay_between_requests: default_delay(),
            follow_links: false,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Base output directory; files land in `<directory>/<file-prefix>/`
    #[serde(default = "default_output_directory")]
    pub directory: String,

    /// Prefix for generated filenames and the output subdirectory name
    #[serde(rename = "file-prefix")]
    pub file_prefix: String,

    /// Maximum number of pages to save (crawling continues past the cap)
    #[serde(rename = "max-pages", default)]
    pub max_pages: Option<u64>,
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

fn default_verify_tls() -> bool {
    true
}

fn default_max_retries() -> u32 {
    3
}

fn default_delay() -> f64 {
    1.0
}

fn default_output_directory() -> String {
    "output".to_string()
}
