//! Markdown frontmatter extraction.
//!
//! Component files carry a `---` fenced block of `key: value` pairs at the
//! very top. Extraction is total: a missing file, an unreadable file, or a
//! missing fence all yield an empty map.

use std::fs;
use std::path::Path;

use crate::value::Map;

/// Read `path` and parse its frontmatter, or an empty map on any failure.
pub fn extract(path: &Path) -> Map<String, String> {
    match fs::read_to_string(path) {
        Ok(content) => parse(&content),
        Err(_) => Map::new(),
    }
}

/// Parse the frontmatter fields out of `content`.
///
/// The content must open with a `---` line; every `key: value` line up to
/// the closing `---` line contributes a field. Values are trimmed and
/// stripped of surrounding quotes. Lines without a colon are skipped.
pub fn parse(content: &str) -> Map<String, String> {
    let mut fields = Map::new();
    let body = match fenced_body(content) {
        Some(body) => body,
        None => return fields,
    };
    for line in body.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            fields.insert(key.trim().to_owned(), value.to_owned());
        }
    }
    fields
}

/// The text between the opening `---` line and the closing `---` line.
///
/// Both fences must be whole, newline-terminated lines with nothing but
/// trailing whitespace after the dashes, and the opening fence must start
/// the content.
fn fenced_body(content: &str) -> Option<&str> {
    let nl = content.find('\n')?;
    if content[..nl].trim_end() != "---" {
        return None;
    }
    let body_start = nl + 1;
    let mut i = body_start;
    loop {
        let line_end = i + content[i..].find('\n')?;
        if content[i..line_end].trim_end() == "---" {
            return Some(&content[body_start..i]);
        }
        i = line_end + 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        let fields = parse("---\nname: reviewer\ndescription: Reviews code\n---\nBody text\n");
        assert_eq!(fields.get("name").map(String::as_str), Some("reviewer"));
        assert_eq!(
            fields.get("description").map(String::as_str),
            Some("Reviews code")
        );
        assert_eq!(fields.len(), 2);
    }

    #[test]
    fn parse_strips_quotes() {
        let fields = parse("---\na: \"quoted\"\nb: 'single'\n---\n");
        assert_eq!(fields.get("a").map(String::as_str), Some("quoted"));
        assert_eq!(fields.get("b").map(String::as_str), Some("single"));
    }

    #[test]
    fn parse_splits_on_first_colon() {
        let fields = parse("---\nurl: https://example.com\n---\n");
        assert_eq!(
            fields.get("url").map(String::as_str),
            Some("https://example.com")
        );
    }

    #[test]
    fn parse_skips_lines_without_colon() {
        let fields = parse("---\nname: x\njust text\n\n---\n");
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn parse_requires_opening_fence_at_start() {
        assert!(parse("text\n---\nname: x\n---\n").is_empty());
        assert!(parse(" ---\nname: x\n---\n").is_empty());
        assert!(parse("").is_empty());
    }

    #[test]
    fn parse_requires_closing_fence() {
        assert!(parse("---\nname: x\n").is_empty());
        // a closing fence cut off by end of file does not count
        assert!(parse("---\nname: x\n---").is_empty());
    }

    #[test]
    fn parse_fence_with_trailing_whitespace() {
        let fields = parse("---  \nname: x\n---  \nrest\n");
        assert_eq!(fields.get("name").map(String::as_str), Some("x"));
    }

    #[test]
    fn parse_empty_body() {
        assert!(parse("---\n---\n").is_empty());
    }

    #[test]
    fn extract_missing_file() {
        assert!(extract(Path::new("/nonexistent/agent.md")).is_empty());
    }
}
