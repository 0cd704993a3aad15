//! Summarization support for crawled output
//!
//! Drives page-level and site-level summarization over a folder of saved
//! markdown pages. The language-model call itself is injected through the
//! [`Summarizer`] trait; this module owns prompt assembly, file loading,
//! and the combine step.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors from summarization operations
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Summarization backend error: {0}")]
    Backend(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("No markdown files found in {0}")]
    NoPages(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for summarization operations
pub type SummarizeResult<T> = Result<T, SummarizeError>;

/// A text-in/text-out completion backend
///
/// Implementations wrap whatever model or service performs the actual
/// summarization; this crate only builds prompts and sequences calls.
#[async_trait]
pub trait Summarizer: Send + Sync {
    /// Completes a prompt and returns the model's text response
    async fn complete(&self, prompt: &str) -> SummarizeResult<String>;
}

/// Reads all markdown files from a folder of crawled pages
///
/// Returns a filename → content map in sorted filename order. Per-file
/// read failures are logged and skipped; an unreadable folder or a folder
/// with no `.md` files at all is an error.
pub fn read_markdown_files(dir: &Path) -> SummarizeResult<BTreeMap<String, String>> {
    if !dir.is_dir() {
        return Err(SummarizeError::NotADirectory(dir.display().to_string()));
    }

    let mut pages = BTreeMap::new();
    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("md") {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        match std::fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!("Loaded {}", name);
                pages.insert(name, content);
            }
            Err(e) => {
                tracing::warn!("Error reading {}: {}", name, e);
            }
        }
    }

    if pages.is_empty() {
        return Err(SummarizeError::NoPages(dir.display().to_string()));
    }

    Ok(pages)
}

/// Summarizes a single page's markdown content
pub async fn summarize_page(
    summarizer: &dyn Summarizer,
    content: &str,
) -> SummarizeResult<String> {
    summarizer.complete(&page_prompt(content)).await
}

/// Produces an overall website summary from individual page contents
///
/// Each page is summarized on its own first; the combined summaries are
/// then fed through the site-level prompt.
pub async fn summarize_website(
    summarizer: &dyn Summarizer,
    pages: &BTreeMap<String, String>,
) -> SummarizeResult<String> {
    let mut combined = String::new();
    for (name, content) in pages {
        let summary = summarize_page(summarizer, content).await?;
        combined.push_str(&format!("Summary for {}:\n{}\n\n", name, summary));
    }

    summarizer.complete(&website_prompt(&combined)).await
}

fn page_prompt(text: &str) -> String {
    format!(
        "You are an expert content summarizer. Summarize the following webpage content \
         in a few concise paragraphs, highlighting the main points and structure.\n\n{}\n",
        text
    )
}

fn website_prompt(combined_summaries: &str) -> String {
    format!(
        "You are an expert website analyst. Based on the following summaries of website pages, \
         produce a concise overall summary of the website. Highlight its key themes, purpose, \
         and structure.\n\n{}",
        combined_summaries
    )
}
