//! Blank-line cleanup for extracted or markdown-like text
//!
//! This stage is independent of [`super::extract`]: the crawl pipeline
//! applies it to every extracted page before saving, and callers may apply
//! it directly to any text. It is idempotent.

/// Cleans up text by normalizing blank lines
///
/// - Runs of blank (or whitespace-only) lines collapse to a single blank
///   line.
/// - Every line is trimmed of leading/trailing whitespace.
/// - Leading and trailing blank lines are removed entirely.
pub fn clean_text(text: &str) -> String {
    let mut lines: Vec<&str> = Vec::new();
    let mut blank_pending = false;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !lines.is_empty() {
                blank_pending = true;
            }
        } else {
            if blank_pending {
                lines.push("");
                blank_pending = false;
            }
            lines.push(trimmed);
        }
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_blank_runs() {
        let input = "a\n\n\n\nb";
        assert_eq!(clean_text(input), "a\n\nb");
    }

    #[test]
    fn test_whitespace_only_lines_count_as_blank() {
        let input = "a\n   \n\t\nb";
        assert_eq!(clean_text(input), "a\n\nb");
    }

    #[test]
    fn test_trim_each_line() {
        let input = "  a  \n\tb\t";
        assert_eq!(clean_text(input), "a\nb");
    }

    #[test]
    fn test_strip_leading_and_trailing_blanks() {
        let input = "\n\n  \na\nb\n\n\n";
        assert_eq!(clean_text(input), "a\nb");
    }

    #[test]
    fn test_single_blank_line_preserved() {
        let input = "para one\n\npara two";
        assert_eq!(clean_text(input), "para one\n\npara two");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(clean_text(""), "");
        assert_eq!(clean_text("\n\n\n"), "");
        assert_eq!(clean_text("   "), "");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "a\n\n\nb\n\nc\n",
            "\n  x  \n\n\n  y\n",
            "single",
            "",
            "# Title\n\n\nBody text\nmore\n\n\n\nEnd\n\n",
        ];
        for input in inputs {
            let once = clean_text(input);
            let twice = clean_text(&once);
            assert_eq!(once, twice, "not idempotent for {:?}", input);
        }
    }
}
