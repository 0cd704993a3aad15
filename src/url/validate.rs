use url::Url;

/// Checks whether a string is a well-formed absolute URL
///
/// A string is considered valid iff it parses into an absolute URL with
/// both a non-empty scheme and a non-empty host. The check is purely
/// syntactic: no network access, no errors; invalid input yields `false`.
///
/// # Examples
///
/// ```
/// use washi::url::is_valid_url;
///
/// assert!(is_valid_url("https://example.com/page"));
/// assert!(!is_valid_url("/relative/path"));
/// assert!(!is_valid_url("not a url"));
/// ```
pub fn is_valid_url(s: &str) -> bool {
    match Url::parse(s) {
        Ok(url) => !url.scheme().is_empty() && matches!(url.host_str(), Some(host) if !host.is_empty()),
        Err(_) => false,
    }
}
