//! HTML to text extraction
//!
//! This is deliberately lossy: the goal is the non-empty semantic
//! fragments of the page in document order, not its visual layout.

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

/// The extracted form of one fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// The page title (from the first <title> tag), if any
    pub title: Option<String>,

    /// Cleaned page text, one fragment per line
    pub text: String,
}

/// Extracts title and clean text from raw HTML
///
/// Rules:
/// - Title is the trimmed text of the first `<title>` element; absent when
///   there is no such element or its text trims to nothing.
/// - `<script>` and `<style>` subtrees contribute no text.
/// - Remaining text is collected in document order, then normalized: each
///   line is trimmed, runs of two-or-more spaces act as phrase delimiters,
///   empty chunks are dropped and the rest are joined with single newlines.
///
/// Never fails: the HTML parser is error-tolerant, so arbitrary input
/// degrades to an empty document rather than an error.
pub fn extract(html: &str) -> ExtractedDocument {
    let document = Html::parse_document(html);

    let title = extract_title(&document);

    let mut raw = String::new();
    collect_text(*document.root_element(), &mut raw);

    ExtractedDocument {
        title,
        text: normalize_whitespace(&raw),
    }
}

/// Extracts the page title from the HTML document
fn extract_title(document: &Html) -> Option<String> {
    let title_selector = Selector::parse("title").ok()?;

    document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Collects the text of a node's subtree, skipping script and style elements
fn collect_text(node: NodeRef<'_, Node>, out: &mut String) {
    for child in node.children() {
        match child.value() {
            Node::Element(element) => {
                let name = element.name();
                if name.eq_ignore_ascii_case("script") || name.eq_ignore_ascii_case("style") {
                    continue;
                }
                collect_text(child, out);
            }
            Node::Text(text) => out.push_str(&text.text),
            _ => {}
        }
    }
}

/// Collapses raw document text into non-empty fragments joined by newlines
///
/// Lines are trimmed; within a line, a run of two-or-more spaces splits it
/// into separate phrases. Empty chunks are dropped.
fn normalize_whitespace(raw: &str) -> String {
    let mut chunks: Vec<&str> = Vec::new();

    for line in raw.lines() {
        for phrase in line.trim().split("  ") {
            let chunk = phrase.trim();
            if !chunk.is_empty() {
                chunks.push(chunk);
            }
        }
    }

    chunks.join("\n")
}
