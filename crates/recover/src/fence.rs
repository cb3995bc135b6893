//! Markup fence stripping.
//!
//! Models like to wrap JSON in Markdown code fences, with or without a
//! language tag:
//!
//! ````text
//! ```json
//! {"title": "Login"}
//! ```
//! ````
//!
//! Whole fence lines are dropped first so a tag is never mistaken for content.
//! A fence glued to the start or end of the remaining text is dropped too.
//! Backticks anywhere else are string content and are left alone.
use std::sync::OnceLock;

use regex::Regex;

fn fence_line() -> &'static Regex {
    static FENCE_LINE: OnceLock<Regex> = OnceLock::new();
    FENCE_LINE.get_or_init(|| {
        Regex::new(r"(?m)^[ \t]*```[\w+.\-]*[ \t]*\r?$").expect("fence line pattern compiles")
    })
}

/// Removes code fences and surrounding whitespace.
pub fn strip_fences(raw: &str) -> String {
    let without_lines = fence_line().replace_all(raw, "");
    let mut text = without_lines.trim();
    if let Some(rest) = text.strip_prefix(FENCE) {
        text = skip_language_tag(rest);
    }
    if let Some(rest) = text.strip_suffix(FENCE) {
        text = rest;
    }
    text.trim().to_string()
}

const FENCE: &str = "```";

/// Drops a `json` style tag directly after an opening fence. A tag only
/// counts when whitespace follows it, so a glued payload is kept whole.
fn skip_language_tag(rest: &str) -> &str {
    let tag_len = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '.' | '-')))
        .unwrap_or(rest.len());
    match rest[tag_len..].chars().next() {
        Some(c) if tag_len > 0 && c.is_whitespace() => &rest[tag_len..],
        _ => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_tagged_fence() {
        let raw = "```json\n{\"a\":1}\n```";
        assert_eq!(strip_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn strips_bare_fence_and_blank_lines() {
        let raw = "\n\n```\n\n{\"a\":1}\n```\n\n";
        assert_eq!(strip_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn strips_inline_fence() {
        assert_eq!(strip_fences("```{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn crlf_fences() {
        let raw = "```json\r\n{\"a\":1}\r\n```\r\n";
        assert_eq!(strip_fences(raw), "{\"a\":1}");
    }

    #[test]
    fn leaves_plain_json_alone() {
        assert_eq!(strip_fences("  {\"a\":[1,2]}  "), "{\"a\":[1,2]}");
    }

    #[test]
    fn glued_fence_with_tag() {
        assert_eq!(strip_fences("```json {\"a\":1}```"), "{\"a\":1}");
        assert_eq!(strip_fences("```json\n{\"a\":1}```"), "{\"a\":1}");
    }

    #[test]
    fn backticks_inside_strings_survive() {
        let raw = r#"{"text":"Run ```npm i``` first"}"#;
        assert_eq!(strip_fences(raw), raw);
        let fenced = format!("```json\n{raw}\n```");
        assert_eq!(strip_fences(&fenced), raw);
    }

    #[test]
    fn prose_after_fence_is_not_eaten() {
        let raw = "```json\n{\"a\":1}\n```\nHope this helps";
        assert_eq!(strip_fences(raw), "{\"a\":1}\n\nHope this helps");
    }
}
