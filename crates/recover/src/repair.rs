//! Candidate extraction for text that does not parse as-is.
//!
//! Each helper proposes a substring (or a patched copy) of the cleaned text;
//! the caller decides whether it parses. None of them validate JSON grammar
//! beyond bracket and string tracking.
use std::sync::OnceLock;

use regex::Regex;

/// Prefix ending at the last `}`, or `None` when the text has no `}`.
pub(crate) fn truncate_to_last_brace(text: &str) -> Option<&str> {
    text.rfind('}').map(|idx| &text[..=idx])
}

/// Appends the closers for every bracket still open at the end of `prefix`.
///
/// Returns `None` when nothing is open, when the prefix ends inside a string,
/// or when the brackets are already mismatched.
pub(crate) fn close_open_brackets(prefix: &str) -> Option<String> {
    let mut open: Vec<char> = Vec::new();
    let mut in_string = false;
    let mut escaped = false;

    for ch in prefix.chars() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => open.push('}'),
            '[' => open.push(']'),
            '}' | ']' => {
                if open.pop() != Some(ch) {
                    return None;
                }
            }
            _ => {}
        }
    }

    if in_string || open.is_empty() {
        return None;
    }

    let mut patched = String::with_capacity(prefix.len() + open.len());
    patched.push_str(prefix);
    patched.extend(open.iter().rev());
    Some(patched)
}

fn outermost_pattern() -> &'static Regex {
    static OUTERMOST: OnceLock<Regex> = OnceLock::new();
    OUTERMOST.get_or_init(|| Regex::new(r"(?s)\{.*\}").expect("outermost object pattern compiles"))
}

/// Greedy match from the first `{` to the last `}`.
pub(crate) fn outermost_object(text: &str) -> Option<&str> {
    outermost_pattern().find(text).map(|m| m.as_str())
}

/// The first top-level object whose braces balance, ignoring braces inside
/// strings. Trailing text, including further objects, is ignored.
pub(crate) fn first_balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    let end = start + offset + ch.len_utf8();
                    return Some(&text[start..end]);
                }
            }
            _ => {}
        }
    }
    None
}
