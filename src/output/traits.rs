//! Output sink trait and error types

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to create output directory {path}: {source}")]
    CreateDir {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to write {filename}: {source}")]
    Write {
        filename: String,
        source: std::io::Error,
    },
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for crawled page text
///
/// The crawl pipeline calls this once per successfully extracted page.
/// Implementations decide where the content actually lands; failures are
/// treated as environment problems and abort the run.
pub trait OutputSink {
    /// Writes one page's cleaned text under the given filename
    fn write(&mut self, filename: &str, content: &str) -> OutputResult<()>;
}
