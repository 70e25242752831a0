//! Plain-text sanitization.
//!
//! Normalizes free-form user text before it is stored or rendered:
//! line endings, control characters, HTML-like tags, whitespace, and an
//! optional length cap.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    // Best-effort tag stripper. Matches <tag ...> and </tag ...> forms;
    // malformed or obfuscated markup is out of scope, so this must never
    // be relied on as an XSS barrier on its own.
    static ref TAG_PATTERN: Regex = Regex::new(r"(?i)</?[a-zA-Z][^>]*>").unwrap();

    // Three or more newlines leave at most one blank line
    static ref NEWLINE_RUN_PATTERN: Regex = Regex::new(r"\n{3,}").unwrap();
}

/// Options for [`sanitize_plain_text`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SanitizeOptions {
    /// Hard character-count cap applied after all other steps
    pub max_length: Option<usize>,
    /// Keep line structure instead of collapsing newlines into spaces
    pub preserve_line_breaks: bool,
}

impl SanitizeOptions {
    /// Cap the result at `max` characters.
    pub fn with_max_length(max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..Default::default()
        }
    }

    /// Cap the result at `max` characters, keeping line structure.
    pub fn multiline(max: usize) -> Self {
        Self {
            max_length: Some(max),
            preserve_line_breaks: true,
        }
    }
}

/// Sanitize free-form text down to plain, printable content.
///
/// - Line endings normalize to `\n`
/// - Control characters other than tab/newline are deleted
/// - HTML-like tags are stripped (best effort)
/// - Whitespace runs collapse to single spaces; with
///   `preserve_line_breaks`, lines are trimmed individually and runs of
///   blank lines collapse to one
/// - The result is trimmed, then hard-cut at `max_length` characters
///
/// Total function; sanitizing already-sanitized text is a no-op.
///
/// # Examples
/// ```
/// use paymap_sanitize::{sanitize_plain_text, SanitizeOptions};
/// assert_eq!(
///     sanitize_plain_text("<b>Hi</b>   there\n\n\n\nfriend", &SanitizeOptions::default()),
///     "Hi there friend"
/// );
/// ```
pub fn sanitize_plain_text(value: &str, options: &SanitizeOptions) -> String {
    let normalized = value.replace("\r\n", "\n").replace('\r', "\n");

    // Keep tab, newline, and printable characters; DEL and the remaining
    // control range are deleted outright
    let cleaned: String = normalized
        .chars()
        .filter(|&c| c == '\t' || c == '\n' || (c >= ' ' && c != '\u{7f}'))
        .collect();

    let stripped = TAG_PATTERN.replace_all(&cleaned, "");

    let collapsed = if options.preserve_line_breaks {
        collapse_preserving_line_breaks(&stripped)
    } else {
        collapse_whitespace(&stripped)
    };

    let trimmed = collapsed.trim();

    match options.max_length {
        Some(max) if max > 0 && trimmed.chars().count() > max => trimmed
            .chars()
            .take(max)
            .collect::<String>()
            .trim_end()
            .to_string(),
        _ => trimmed.to_string(),
    }
}

/// Collapse whitespace runs (newlines included) into single spaces.
fn collapse_whitespace(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_was_space = false;

    for c in s.chars() {
        if c.is_whitespace() {
            if !prev_was_space {
                result.push(' ');
                prev_was_space = true;
            }
        } else {
            result.push(c);
            prev_was_space = false;
        }
    }

    result
}

/// Collapse inline whitespace within each line, trim the lines, and cap
/// blank-line runs at one.
fn collapse_preserving_line_breaks(s: &str) -> String {
    let lines: Vec<String> = s
        .split('\n')
        .map(|line| collapse_whitespace(line).trim().to_string())
        .collect();

    NEWLINE_RUN_PATTERN
        .replace_all(&lines.join("\n"), "\n\n")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tags_and_collapses() {
        assert_eq!(
            sanitize_plain_text("<b>Hi</b>   there\n\n\n\nfriend", &SanitizeOptions::default()),
            "Hi there friend"
        );
    }

    #[test]
    fn preserve_mode_keeps_paragraph_breaks() {
        assert_eq!(
            sanitize_plain_text(
                "line1\n\n\n\nline2",
                &SanitizeOptions {
                    preserve_line_breaks: true,
                    ..Default::default()
                }
            ),
            "line1\n\nline2"
        );
    }

    #[test]
    fn preserve_mode_trims_each_line() {
        assert_eq!(
            sanitize_plain_text(
                "  first   line  \n   second\tline ",
                &SanitizeOptions {
                    preserve_line_breaks: true,
                    ..Default::default()
                }
            ),
            "first line\nsecond line"
        );
    }

    #[test]
    fn crlf_normalized() {
        assert_eq!(
            sanitize_plain_text(
                "a\r\nb\rc",
                &SanitizeOptions {
                    preserve_line_breaks: true,
                    ..Default::default()
                }
            ),
            "a\nb\nc"
        );
    }

    #[test]
    fn control_characters_deleted() {
        assert_eq!(
            sanitize_plain_text("a\u{0}b\u{1}c\u{7f}d", &SanitizeOptions::default()),
            "abcd"
        );
    }

    #[test]
    fn tab_collapses_to_space_in_default_mode() {
        assert_eq!(
            sanitize_plain_text("a\tb", &SanitizeOptions::default()),
            "a b"
        );
    }

    #[test]
    fn attribute_laden_tag_stripped() {
        assert_eq!(
            sanitize_plain_text(
                "<a href=\"http://evil.example\">click</a>",
                &SanitizeOptions::default()
            ),
            "click"
        );
    }

    #[test]
    fn stray_angle_brackets_survive() {
        // Not tag-shaped: no letter after `<`
        assert_eq!(
            sanitize_plain_text("1 < 2 > 0", &SanitizeOptions::default()),
            "1 < 2 > 0"
        );
    }

    #[test]
    fn hard_cut_at_max_length() {
        let result = sanitize_plain_text(&"x".repeat(10), &SanitizeOptions::with_max_length(5));
        assert_eq!(result, "xxxxx");
        assert_eq!(result.chars().count(), 5);
    }

    #[test]
    fn cut_counts_characters_not_bytes() {
        let result = sanitize_plain_text("咖啡店咖啡店", &SanitizeOptions::with_max_length(3));
        assert_eq!(result, "咖啡店");
    }

    #[test]
    fn cut_trims_trailing_whitespace() {
        let result = sanitize_plain_text("abcd efgh", &SanitizeOptions::with_max_length(5));
        assert_eq!(result, "abcd");
    }

    #[test]
    fn empty_and_whitespace_inputs() {
        assert_eq!(sanitize_plain_text("", &SanitizeOptions::default()), "");
        assert_eq!(sanitize_plain_text("   \n  ", &SanitizeOptions::default()), "");
    }

    #[test]
    fn idempotent_on_sanitized_output() {
        let options = SanitizeOptions::default();
        for input in [
            "<b>Hi</b>   there\n\nfriend",
            "  plain   text  ",
            "a\tb\r\nc",
            "café  ☕  <i>latte</i>",
        ] {
            let once = sanitize_plain_text(input, &options);
            assert_eq!(sanitize_plain_text(&once, &options), once);
        }
    }

    #[test]
    fn idempotent_in_preserve_mode() {
        let options = SanitizeOptions {
            preserve_line_breaks: true,
            ..Default::default()
        };
        let once = sanitize_plain_text("one\n\n\n\ntwo  three\n", &options);
        assert_eq!(sanitize_plain_text(&once, &options), once);
    }
}
