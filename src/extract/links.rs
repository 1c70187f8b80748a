use crate::url::resolve_href;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Extracts outbound links from HTML content
///
/// Both `<a href>` and `<link href>` tags are scanned; every href goes
/// through `resolve_href` against the page's origin and its own URL.
/// Duplicates within one page collapse, first occurrence wins the order.
/// Malformed markup never fails the caller: the parser is lenient and
/// unresolvable hrefs are simply dropped.
pub fn extract_links(html: &str, page_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let base = page_origin(page_url);

    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for selector_str in ["a[href]", "link[href]"] {
        let selector = match Selector::parse(selector_str) {
            Ok(s) => s,
            Err(_) => continue,
        };

        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(resolved) = resolve_href(href, &base, page_url) {
                    if seen.insert(resolved.clone()) {
                        links.push(resolved);
                    }
                }
            }
        }
    }

    links
}

/// Reduces a page URL to its origin (`scheme://host[:port]/`)
fn page_origin(page_url: &Url) -> Url {
    let mut origin = page_url.clone();
    origin.set_path("/");
    origin.set_query(None);
    origin.set_fragment(None);
    origin
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_url() -> Url {
        Url::parse("https://example.com/dir/page").unwrap()
    }

    #[test]
    fn test_extract_absolute_link() {
        let html = r#"<html><body><a href="https://other.com/page">Link</a></body></html>"#;
        let links = extract_links(html, &page_url());
        assert_eq!(links, vec!["https://other.com/page"]);
    }

    #[test]
    fn test_extract_root_relative_link() {
        let html = r#"<html><body><a href="/other">Link</a></body></html>"#;
        let links = extract_links(html, &page_url());
        assert_eq!(links, vec!["https://example.com/other"]);
    }

    #[test]
    fn test_extract_relative_link() {
        let html = r#"<html><body><a href="sibling">Link</a></body></html>"#;
        let links = extract_links(html, &page_url());
        assert_eq!(links, vec!["https://example.com/dir/sibling"]);
    }

    #[test]
    fn test_extract_link_tag() {
        let html =
            r#"<html><head><link rel="canonical" href="https://example.com/canon"></head></html>"#;
        let links = extract_links(html, &page_url());
        assert_eq!(links, vec!["https://example.com/canon"]);
    }

    #[test]
    fn test_skip_pseudo_schemes() {
        let html = r##"
            <html><body>
                <a href="mailto:x@example.com">Mail</a>
                <a href="javascript:void(0)">JS</a>
                <a href="tel:+123">Call</a>
                <a href="#anchor">Jump</a>
            </body></html>
        "##;
        let links = extract_links(html, &page_url());
        assert!(links.is_empty());
    }

    #[test]
    fn test_duplicates_collapse() {
        let html = r#"
            <html><body>
                <a href="/page">One</a>
                <a href="/page">Two</a>
                <a href="/page#frag">Three</a>
            </body></html>
        "#;
        let links = extract_links(html, &page_url());
        assert_eq!(links, vec!["https://example.com/page"]);
    }

    #[test]
    fn test_malformed_html_yields_what_parses() {
        let html = r#"<a href="/ok"><div><<<<a href="/also-ok">"#;
        let links = extract_links(html, &page_url());
        assert!(links.contains(&"https://example.com/ok".to_string()));
    }

    #[test]
    fn test_preserves_port_in_origin() {
        let page = Url::parse("http://127.0.0.1:8080/index").unwrap();
        let html = r#"<a href="/next">n</a>"#;
        let links = extract_links(html, &page);
        assert_eq!(links, vec!["http://127.0.0.1:8080/next"]);
    }
}
