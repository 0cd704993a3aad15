use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    // Read the configuration file
    let content = std::fs::read_to_string(path)?;

    // Parse TOML
    let config: Config = toml::from_str(&content)?;

    // Validate the configuration
    validate(&config)?;

    Ok(config)
}

/// Computes a SHA-256 hash of the configuration file content
///
/// Logged at startup so a saved crawl can be traced back to the exact
/// configuration that produced it.
pub fn compute_config_hash(path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    let result = hasher.finalize();
    Ok(hex::encode(result))
}

/// Loads a configuration and returns both the config and its hash
pub fn load_config_with_hash(path: &Path) -> Result<(Config, String), ConfigError> {
    let config = load_config(path)?;
    let hash = compute_config_hash(path)?;
    Ok((config, hash))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[site]
base-url = "https://example.com"
url-filter = "/docs/"

[crawler]
user-agent = "TestAgent/1.0"
request-timeout = 10
max-retries = 2
delay-between-requests = 0.5

[output]
directory = "out"
file-prefix = "example"
max-pages = 50
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.site.base_url, "https://example.com");
        assert_eq!(config.site.url_filter.as_deref(), Some("/docs/"));
        assert_eq!(config.crawler.user_agent, "TestAgent/1.0");
        assert_eq!(config.crawler.request_timeout, 10);
        assert_eq!(config.crawler.max_retries, 2);
        assert!((config.crawler.delay_between_requests - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.output.max_pages, Some(50));
    }

    #[test]
    fn test_defaults_apply_when_omitted() {
        let config_content = r#"
[site]
base-url = "https://example.com"

[output]
file-prefix = "example"
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert!(config.crawler.user_agent.starts_with("Mozilla/5.0"));
        assert_eq!(config.crawler.request_timeout, 30);
        assert!(config.crawler.verify_tls);
        assert_eq!(config.crawler.max_retries, 3);
        assert!((config.crawler.delay_between_requests - 1.0).abs() < f64::EPSILON);
        assert!(!config.crawler.follow_links);
        assert_eq!(config.output.directory, "output");
        assert_eq!(config.output.max_pages, None);
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        assert!(load_config(file.path()).is_err());
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let config_content = r#"
[site]
base-url = "https://example.com"

[crawler]
follow-links = true

[output]
file-prefix = "example"
"#;

        let file = create_temp_config(config_content);
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }

    #[test]
    fn test_compute_config_hash() {
        let file = create_temp_config("test content");

        let hash1 = compute_config_hash(file.path()).unwrap();
        let hash2 = compute_config_hash(file.path()).unwrap();

        // Same content should produce same hash
        assert_eq!(hash1, hash2);
        assert_eq!(hash1.len(), 64); // SHA-256 produces 64 hex characters
    }

    #[test]
    fn test_different_content_different_hash() {
        let file1 = create_temp_config("content 1");
        let file2 = create_temp_config("content 2");

        let hash1 = compute_config_hash(file1.path()).unwrap();
        let hash2 = compute_config_hash(file2.path()).unwrap();

        assert_ne!(hash1, hash2);
    }
}
