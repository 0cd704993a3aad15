//! Content extraction module
//!
//! Turns raw page HTML into clean text in two stages: [`extract`] parses
//! the document, drops script/style content and collapses whitespace into
//! non-empty fragments; [`clean_text`] is the independent blank-line
//! cleanup the crawl pipeline applies before persisting (callers may also
//! use it directly on any markdown-like text).

mod cleanup;
mod text;

pub use cleanup::clean_text;
pub use text::{extract, ExtractedDocument};
