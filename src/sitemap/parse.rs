//! Sitemap XML parsing
//!
//! Handles both standard sitemaps (`<urlset>`) and sitemap indexes
//! (`<sitemapindex>`). Only `<loc>` elements bound to the sitemaps.org
//! namespace are collected.

use quick_xml::events::Event;
use quick_xml::name::{Namespace, ResolveResult};
use quick_xml::NsReader;

/// XML namespace that qualifies sitemap elements
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// What kind of document a sitemap location resolved to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    /// A sitemap index: locations point at further sitemaps
    Index,
    /// A URL set: locations are page URLs
    UrlSet,
}

/// The parsed form of one sitemap document
#[derive(Debug, Clone)]
pub struct SitemapDocument {
    pub kind: SitemapKind,

    /// Text of every namespace-qualified `<loc>` element, in document order
    pub locations: Vec<String>,
}

/// Parses sitemap XML into its kind and `<loc>` entries
///
/// The root element decides the kind: `sitemapindex` is an index, any
/// other root is treated as a URL set. Malformed XML and documents with no
/// root element are errors; callers treat them as per-candidate failures.
pub fn parse_sitemap(xml: &str) -> Result<SitemapDocument, String> {
    let mut reader = NsReader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut kind: Option<SitemapKind> = None;
    let mut locations = Vec::new();
    let mut in_loc = false;

    loop {
        match reader.read_resolved_event() {
            Ok((ns, Event::Start(start))) => {
                if kind.is_none() {
                    kind = Some(if start.local_name().as_ref() == b"sitemapindex" {
                        SitemapKind::Index
                    } else {
                        SitemapKind::UrlSet
                    });
                } else if start.local_name().as_ref() == b"loc" && is_sitemap_ns(&ns) {
                    in_loc = true;
                }
            }
            Ok((_, Event::Text(text))) if in_loc => {
                let value = text
                    .unescape()
                    .map_err(|e| format!("XML text error: {}", e))?;
                push_location(&mut locations, &value);
            }
            Ok((_, Event::CData(cdata))) if in_loc => {
                let value = String::from_utf8_lossy(&cdata.into_inner()).into_owned();
                push_location(&mut locations, &value);
            }
            Ok((_, Event::End(end))) => {
                if end.local_name().as_ref() == b"loc" {
                    in_loc = false;
                }
            }
            Ok((_, Event::Empty(start))) => {
                if kind.is_none() {
                    kind = Some(if start.local_name().as_ref() == b"sitemapindex" {
                        SitemapKind::Index
                    } else {
                        SitemapKind::UrlSet
                    });
                }
            }
            Ok((_, Event::Eof)) => break,
            Ok(_) => {}
            Err(e) => return Err(format!("XML parse error: {}", e)),
        }
    }

    match kind {
        Some(kind) => Ok(SitemapDocument { kind, locations }),
        None => Err("document has no root element".to_string()),
    }
}

fn push_location(locations: &mut Vec<String>, value: &str) {
    let value = value.trim();
    if !value.is_empty() {
        locations.push(value.to_string());
    }
}

fn is_sitemap_ns(resolve: &ResolveResult) -> bool {
    matches!(resolve, ResolveResult::Bound(Namespace(ns)) if *ns == SITEMAP_NAMESPACE.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>https://example.com/a</loc></url>
          <url><loc>https://example.com/b</loc></url>
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.kind, SitemapKind::UrlSet);
        assert_eq!(
            doc.locations,
            vec!["https://example.com/a", "https://example.com/b"]
        );
    }

    #[test]
    fn test_parse_sitemap_index() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <sitemap><loc>https://example.com/sitemap-1.xml</loc></sitemap>
          <sitemap><loc>https://example.com/sitemap-2.xml</loc></sitemap>
        </sitemapindex>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.kind, SitemapKind::Index);
        assert_eq!(doc.locations.len(), 2);
    }

    #[test]
    fn test_empty_urlset() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.kind, SitemapKind::UrlSet);
        assert!(doc.locations.is_empty());
    }

    #[test]
    fn test_loc_outside_namespace_ignored() {
        let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
        <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>https://example.com/in-ns</loc></url>
          <extra xmlns=""><loc>https://example.com/out-of-ns</loc></extra>
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.locations, vec!["https://example.com/in-ns"]);
    }

    #[test]
    fn test_whitespace_trimmed_from_loc() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>
            https://example.com/padded
          </loc></url>
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.locations, vec!["https://example.com/padded"]);
    }

    #[test]
    fn test_xml_entities_unescaped() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>https://example.com/page?a=1&amp;b=2</loc></url>
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.locations, vec!["https://example.com/page?a=1&b=2"]);
    }

    #[test]
    fn test_cdata_loc() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc><![CDATA[https://example.com/cdata]]></loc></url>
        </urlset>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.locations, vec!["https://example.com/cdata"]);
    }

    #[test]
    fn test_malformed_xml() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <url><loc>https://example.com/a
        </urlset>"#;

        assert!(parse_sitemap(xml).is_err());
    }

    #[test]
    fn test_empty_document() {
        assert!(parse_sitemap("").is_err());
    }

    #[test]
    fn test_self_closing_root_is_empty_urlset() {
        let xml = r#"<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9"/>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.kind, SitemapKind::UrlSet);
        assert!(doc.locations.is_empty());
    }

    #[test]
    fn test_unknown_root_treated_as_urlset() {
        let xml = r#"<feed xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
          <loc>https://example.com/a</loc>
        </feed>"#;

        let doc = parse_sitemap(xml).unwrap();
        assert_eq!(doc.kind, SitemapKind::UrlSet);
        assert_eq!(doc.locations, vec!["https://example.com/a"]);
    }
}
