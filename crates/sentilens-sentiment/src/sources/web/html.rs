//! Visible-text extraction from HTML.

use std::sync::LazyLock;

use regex::Regex;

/// Elements whose content is never page copy.
const NON_CONTENT_TAGS: &[&str] = &["script", "style", "nav", "header", "footer"];

static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));
static NON_CONTENT_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    NON_CONTENT_TAGS
        .iter()
        .map(|tag| {
            Regex::new(&format!(r"(?is)<{tag}\b[^>]*>.*?</{tag}\s*>")).expect("valid regex")
        })
        .collect()
});
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

/// Strip non-content elements and markup, decode character references, collapse
/// whitespace runs to single spaces, and cut to `max_chars` characters.
pub(crate) fn visible_text(html: &str, max_chars: usize) -> String {
    let mut stripped = COMMENT_RE.replace_all(html, " ").into_owned();
    for re in NON_CONTENT_RES.iter() {
        stripped = re.replace_all(&stripped, " ").into_owned();
    }
    let no_tags = TAG_RE.replace_all(&stripped, " ");
    let decoded = html_escape::decode_html_entities(&no_tags);

    let collapsed = decoded.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(collapsed, max_chars)
}

fn truncate_chars(text: String, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].to_string(),
        None => text,
    }
}
