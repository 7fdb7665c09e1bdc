//! URL extraction and the admission predicate that decides whether an
//! extracted URL is added to the frontier.

use scraper::{Html, Selector};
use url::Url;

/// Extensions that mark a non-textual resource — not worth admitting to
/// the frontier, since the tokenizer has nothing to extract from them.
const NON_TEXTUAL_EXTENSIONS: &[&str] = &[
    "pdf", "jpg", "jpeg", "png", "gif", "svg", "webp", "ico", "css", "js", "zip", "gz", "tar",
    "mp3", "mp4", "avi", "mov", "doc", "docx", "xls", "xlsx", "ppt", "pptx", "woff", "woff2",
    "ttf", "eot",
];

/// Extract every `<a href>` target on the page, resolved against `base_url`.
/// Relative paths are rewritten against the current page URL; malformed
/// hrefs and non-http(s) schemes are silently dropped.
pub fn extract_links(html: &str, base_url: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("a[href]").expect("static selector is valid");
    let base = Url::parse(base_url).ok();

    let mut links = Vec::new();
    for element in document.select(&selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };

        let resolved = match &base {
            Some(base) => base.join(href).ok(),
            None => Url::parse(href).ok(),
        };

        if let Some(url) = resolved {
            if url.scheme() == "http" || url.scheme() == "https" {
                links.push(url.to_string());
            }
        }
    }
    links
}

/// True iff `url` should be admitted to the frontier: it begins with
/// `prefix` and does not point at a non-textual resource.
pub fn is_admissible(url: &str, prefix: &str, max_url_len: usize) -> bool {
    if url.len() > max_url_len {
        return false;
    }
    if !url.starts_with(prefix) {
        return false;
    }
    !points_to_non_textual_resource(url)
}

fn points_to_non_textual_resource(url: &str) -> bool {
    let path = Url::parse(url)
        .map(|u| u.path().to_string())
        .unwrap_or_else(|_| url.to_string());

    match path.rsplit('.').next() {
        Some(ext) => NON_TEXTUAL_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}
