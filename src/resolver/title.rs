//! `<title>` extraction.

use crate::catalog::types::UNTITLED;

use regex::Regex;
use std::sync::LazyLock;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title(?:\s[^>]*)?>(.*?)</title\s*>").expect("title regex is valid")
});

/// Regions whose contents are never document text: comments, scripts and stylesheets.
static NON_TEXT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<!--.*?(?:-->|\z)|<script(?:\s[^>]*)?>.*?(?:</script\s*>|\z)|<style(?:\s[^>]*)?>.*?(?:</style\s*>|\z)",
    )
    .expect("non-text regex is valid")
});

/// Returns the text of every `<title>` element in `html`, concatenated, with character
/// references decoded and surrounding whitespace trimmed. Falls back to `(untitled)`.
///
/// A `<title>` that only appears inside a comment, `<script>` or `<style>` is ignored.
pub fn extract_title(html: &str) -> String {
    let text = NON_TEXT_RE.replace_all(html, "");
    let raw: String = TITLE_RE
        .captures_iter(&text)
        .filter_map(|cap| cap.get(1))
        .map(|m| m.as_str())
        .collect();

    let title = html_escape::decode_html_entities(raw.trim());
    let title = title.trim();
    if title.is_empty() {
        UNTITLED.to_string()
    } else {
        title.to_string()
    }
}
