//! HTTP fetcher implementation
//!
//! Builds the shared HTTP client and performs page fetches with retry.
//! A non-2xx status is not a failure at this layer: the orchestrator
//! trusts whatever body the transport returns. Only transport-level
//! problems (connection errors, timeouts, body-read errors) are retried.

use crate::config::CrawlerConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a fetch attempt sequence for one URL
#[derive(Debug)]
pub enum FetchResult {
    /// The transport returned a body
    Success {
        /// Final URL after redirects
        final_url: String,
        /// HTTP status code
        status_code: u16,
        /// Response body as text
        body: String,
    },

    /// All attempts failed at the transport level
    Failed {
        /// Description of the last error
        error: String,
        /// Total attempts made (initial try plus retries)
        attempts: u32,
    },
}

/// Builds the HTTP client shared by sitemap resolution and page crawling
///
/// The client holds the connection pool for the whole run; dropping it on
/// any exit path releases the connections.
pub fn build_http_client(config: &CrawlerConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout))
        .connect_timeout(Duration::from_secs(config.request_timeout.min(10)))
        .danger_accept_invalid_certs(!config.verify_tls)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying transport failures
///
/// Makes up to `max_retries + 1` attempts, sleeping `retry_delay` before
/// each retry so the politeness delay holds across retries too.
pub async fn fetch_url(
    client: &Client,
    url: &str,
    max_retries: u32,
    retry_delay: Duration,
) -> FetchResult {
    let attempts = max_retries.saturating_add(1);
    let mut last_error = String::new();

    for attempt in 1..=attempts {
        if attempt > 1 && !retry_delay.is_zero() {
            tokio::time::sleep(retry_delay).await;
        }

        match client.get(url).send().await {
            Ok(response) => {
                let status_code = response.status().as_u16();
                let final_url = response.url().to_string();

                match response.text().await {
                    Ok(body) => {
                        return FetchResult::Success {
                            final_url,
                            status_code,
                            body,
                        }
                    }
                    Err(e) => {
                        last_error = format!("Failed to read response body: {}", e);
                    }
                }
            }
            Err(e) => {
                last_error = classify_transport_error(&e);
            }
        }

        tracing::warn!(
            "Attempt {}/{} failed for {}: {}",
            attempt,
            attempts,
            url,
            last_error
        );
    }

    FetchResult::Failed {
        error: last_error,
        attempts,
    }
}

/// Maps a reqwest error to a short, stable description
fn classify_transport_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "Request timeout".to_string()
    } else if error.is_connect() {
        format!("Connection error: {}", error)
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = CrawlerConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_without_tls_verification() {
        let config = CrawlerConfig {
            verify_tls: false,
            ..CrawlerConfig::default()
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_url_exhausts_attempts() {
        let config = CrawlerConfig {
            request_timeout: 2,
            ..CrawlerConfig::default()
        };
        let client = build_http_client(&config).unwrap();

        // Port 1 on loopback refuses connections immediately
        let result = fetch_url(&client, "http://127.0.0.1:1/", 2, Duration::ZERO).await;

        match result {
            FetchResult::Failed { attempts, error } => {
                assert_eq!(attempts, 3);
                assert!(!error.is_empty());
            }
            FetchResult::Success { .. } => panic!("expected a transport failure"),
        }
    }
}
