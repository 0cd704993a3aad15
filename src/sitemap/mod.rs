//! Sitemap discovery module
//!
//! This module turns a site's base origin into the deduplicated set of
//! page URLs reachable through sitemap discovery:
//! - robots.txt `Sitemap:` directives are collected as extra candidates
//! - conventional sitemap paths are tried in a fixed order
//! - sitemap indexes are expanded recursively, with per-child failure
//!   isolation and a visited-set guard against cyclic references

mod parse;
mod resolver;
mod robots;

pub use parse::{parse_sitemap, SitemapDocument, SitemapKind, SITEMAP_NAMESPACE};
pub use resolver::{SitemapResolver, DEFAULT_SITEMAP_PATHS};
pub use robots::fetch_sitemap_hints;
