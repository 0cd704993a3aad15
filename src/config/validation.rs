use crate::config::types::{Config, CrawlerConfig, OutputConfig, SiteConfig};
use crate::url::is_valid_url;
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
///
/// Runs before any network activity; a config that fails here never
/// produces a request.
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_crawler_config(&config.crawler)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates the target site configuration
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url '{}': {}", config.base_url, e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::Validation(format!(
            "base-url must use http or https, got '{}'",
            base.scheme()
        )));
    }

    if !base.has_host() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url '{}' has no host",
            config.base_url
        )));
    }

    if let Some(sitemap_url) = &config.sitemap_url {
        if !is_valid_url(sitemap_url) {
            return Err(ConfigError::InvalidUrl(format!(
                "Invalid sitemap-url: '{}'",
                sitemap_url
            )));
        }
    }

    if config.use_custom_sitemap_only && config.sitemap_url.is_none() {
        return Err(ConfigError::Validation(
            "use-custom-sitemap-only requires sitemap-url to be set".to_string(),
        ));
    }

    if let Some(filter) = &config.url_filter {
        if filter.is_empty() {
            return Err(ConfigError::Validation(
                "url-filter cannot be empty".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validates crawler configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user-agent cannot be empty".to_string(),
        ));
    }

    if config.request_timeout < 1 || config.request_timeout > 600 {
        return Err(ConfigError::Validation(format!(
            "request-timeout must be between 1 and 600 seconds, got {}",
            config.request_timeout
        )));
    }

    if config.max_retries > 10 {
        return Err(ConfigError::Validation(format!(
            "max-retries must be at most 10, got {}",
            config.max_retries
        )));
    }

    if !config.delay_between_requests.is_finite() || config.delay_between_requests < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay-between-requests must be a non-negative number, got {}",
            config.delay_between_requests
        )));
    }

    if config.follow_links {
        return Err(ConfigError::Validation(
            "follow-links is reserved and must be false".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.directory.is_empty() {
        return Err(ConfigError::Validation(
            "output directory cannot be empty".to_string(),
        ));
    }

    if config.file_prefix.is_empty() {
        return Err(ConfigError::Validation(
            "file-prefix cannot be empty".to_string(),
        ));
    }

    if !config
        .file_prefix
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
    {
        return Err(ConfigError::Validation(format!(
            "file-prefix must contain only alphanumeric characters, hyphens and underscores, got '{}'",
            config.file_prefix
        )));
    }

    if config.max_pages == Some(0) {
        return Err(ConfigError::Validation(
            "max-pages must be at least 1 when set".to_string(),
        ));
    }

    Ok(())
}
