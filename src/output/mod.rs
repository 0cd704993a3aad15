//! Output handling module
//!
//! Persistence for crawled pages: the crawl pipeline hands each cleaned
//! page to an [`OutputSink`]; the default implementation writes one
//! markdown file per page under `<directory>/<file-prefix>/`.

mod files;
mod traits;

pub use files::{generate_filename, FileOutput};
pub use traits::{OutputError, OutputResult, OutputSink};
