//! Filesystem-backed output sink and filename generation

use crate::output::traits::{OutputError, OutputResult, OutputSink};
use std::path::{Path, PathBuf};
use url::Url;

/// Maximum length of the URL-derived slug portion of a filename
const MAX_SLUG_LEN: usize = 60;

/// Writes each page as a markdown file under `<base>/<prefix>/`
pub struct FileOutput {
    dir: PathBuf,
}

impl FileOutput {
    /// Creates the output directory (and prefix subdirectory) if needed
    ///
    /// Runs before any page is fetched; an unwritable output location
    /// aborts the crawl up front.
    pub fn new(base_dir: &Path, prefix: &str) -> OutputResult<Self> {
        let dir = base_dir.join(prefix);
        std::fs::create_dir_all(&dir).map_err(|source| OutputError::CreateDir {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self { dir })
    }

    /// The directory files are written into
    pub fn directory(&self) -> &Path {
        &self.dir
    }
}

impl OutputSink for FileOutput {
    fn write(&mut self, filename: &str, content: &str) -> OutputResult<()> {
        let path = self.dir.join(filename);
        std::fs::write(&path, content).map_err(|source| OutputError::Write {
            filename: path.display().to_string(),
            source,
        })?;
        Ok(())
    }
}

/// Generates a deterministic markdown filename for one crawled page
///
/// Format: `<prefix>_<index>_<timestamp>[_<slug>].md`, where the slug is a
/// sanitized form of the URL path. The index is the page's 1-based position
/// in the crawl order and the timestamp identifies the batch.
pub fn generate_filename(url: &str, index: usize, timestamp: &str, prefix: &str) -> String {
    let slug = slug_from_url(url);
    if slug.is_empty() {
        format!("{}_{}_{}.md", prefix, index, timestamp)
    } else {
        format!("{}_{}_{}_{}.md", prefix, index, timestamp, slug)
    }
}

/// Reduces a URL's path to a filesystem-safe lowercase slug
fn slug_from_url(url: &str) -> String {
    let path = match Url::parse(url) {
        Ok(parsed) => parsed.path().to_string(),
        Err(_) => return String::new(),
    };

    let mut slug = String::new();
    let mut last_dash = true;
    for c in path.chars() {
        if c.is_ascii_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
        if slug.len() >= MAX_SLUG_LEN {
            break;
        }
    }

    slug.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_generate_filename_with_slug() {
        let name = generate_filename(
            "https://example.com/visas/visa-listing",
            3,
            "20260101_120000",
            "immi",
        );
        assert_eq!(name, "immi_3_20260101_120000_visas-visa-listing.md");
    }

    #[test]
    fn test_generate_filename_root_path() {
        let name = generate_filename("https://example.com/", 1, "20260101_120000", "site");
        assert_eq!(name, "site_1_20260101_120000.md");
    }

    #[test]
    fn test_generate_filename_unparseable_url() {
        let name = generate_filename("::::", 2, "20260101_120000", "site");
        assert_eq!(name, "site_2_20260101_120000.md");
    }

    #[test]
    fn test_slug_is_lowercased_and_sanitized() {
        let slug = slug_from_url("https://example.com/News/Latest%20Items");
        assert_eq!(slug, "news-latest-20items");
    }

    #[test]
    fn test_slug_truncated() {
        let long_path = format!("https://example.com/{}", "a".repeat(200));
        assert!(slug_from_url(&long_path).len() <= MAX_SLUG_LEN);
    }

    #[test]
    fn test_file_output_writes_into_prefix_dir() {
        let tmp = tempdir().unwrap();
        let mut output = FileOutput::new(tmp.path(), "demo").unwrap();

        output.write("demo_1_x.md", "hello").unwrap();

        let written = std::fs::read_to_string(tmp.path().join("demo").join("demo_1_x.md")).unwrap();
        assert_eq!(written, "hello");
    }

    #[test]
    fn test_file_output_creates_nested_dirs() {
        let tmp = tempdir().unwrap();
        let nested = tmp.path().join("a").join("b");
        let output = FileOutput::new(&nested, "demo").unwrap();
        assert!(output.directory().is_dir());
    }
}
