//! robots.txt sitemap hints
//!
//! The resolver only needs the `Sitemap:` directives; allow/disallow rules
//! do not apply to sitemap-listed crawling.

use reqwest::Client;
use texting_robots::Robot;

/// Fetches a robots.txt URL and returns its advertised sitemap locations
///
/// Any failure here (network, non-2xx status, unparseable content) is a
/// missed hint, not a hard error: callers log it and fall back to the
/// conventional candidate paths.
pub async fn fetch_sitemap_hints(
    client: &Client,
    robots_url: &str,
    user_agent: &str,
) -> anyhow::Result<Vec<String>> {
    let response = client.get(robots_url).send().await?;
    let response = response.error_for_status()?;
    let body = response.bytes().await?;

    let robot = Robot::new(user_agent, &body)?;
    Ok(robot.sitemaps)
}
