use url::Url;

/// Resolves a raw href from a page into an absolute crawlable URL
///
/// # Resolution Steps
///
/// 1. Strip everything after `#` and trim whitespace
/// 2. Return None for empty hrefs and fragment-only anchors
/// 3. Return None for pseudo-schemes (`mailto:`, `javascript:`, `tel:`, `data:`)
/// 4. Prefix scheme-relative hrefs (`//host/...`) with the base's scheme
/// 5. Join root-relative hrefs (`/path`) against the base origin
/// 6. Pass through hrefs that already carry an `http(s)://` scheme
/// 7. Resolve anything else relative to the current page URL
///
/// Hrefs that resolve to a non-HTTP(S) scheme, or fail to parse at all, are
/// dropped rather than reported as errors. Pure function, no network access.
///
/// # Arguments
///
/// * `href` - The raw href attribute value
/// * `base` - The page's base origin (`scheme://host`)
/// * `current` - The page's own URL, for relative resolution
///
/// # Examples
///
/// ```
/// use url::Url;
/// use mailsift::url::resolve_href;
///
/// let base = Url::parse("https://example.com").unwrap();
/// let current = Url::parse("https://example.com/a/page").unwrap();
///
/// assert_eq!(
///     resolve_href("/contact", &base, &current),
///     Some("https://example.com/contact".to_string())
/// );
/// assert_eq!(resolve_href("mailto:x@example.com", &base, &current), None);
/// ```
pub fn resolve_href(href: &str, base: &Url, current: &Url) -> Option<String> {
    // Fragments never change what is fetched
    let href = href.split('#').next().unwrap_or("").trim();

    if href.is_empty() {
        return None;
    }

    if href.starts_with("mailto:")
        || href.starts_with("javascript:")
        || href.starts_with("tel:")
        || href.starts_with("data:")
    {
        return None;
    }

    let resolved = if let Some(rest) = href.strip_prefix("//") {
        Url::parse(&format!("{}://{}", base.scheme(), rest)).ok()?
    } else if href.starts_with('/') {
        base.join(href).ok()?
    } else if href.starts_with("http://") || href.starts_with("https://") {
        Url::parse(href).ok()?
    } else {
        current.join(href).ok()?
    };

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return None;
    }

    Some(resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com").unwrap()
    }

    fn current() -> Url {
        Url::parse("https://example.com/dir/page.html").unwrap()
    }

    #[test]
    fn test_empty_href() {
        assert_eq!(resolve_href("", &base(), &current()), None);
        assert_eq!(resolve_href("   ", &base(), &current()), None);
    }

    #[test]
    fn test_fragment_only_anchor() {
        assert_eq!(resolve_href("#section", &base(), &current()), None);
    }

    #[test]
    fn test_fragment_stripped() {
        assert_eq!(
            resolve_href("/page#top", &base(), &current()),
            Some("https://example.com/page".to_string())
        );
    }

    #[test]
    fn test_mailto_rejected() {
        assert_eq!(resolve_href("mailto:a@b.co", &base(), &current()), None);
    }

    #[test]
    fn test_javascript_rejected() {
        assert_eq!(
            resolve_href("javascript:void(0)", &base(), &current()),
            None
        );
    }

    #[test]
    fn test_tel_rejected() {
        assert_eq!(resolve_href("tel:+123456789", &base(), &current()), None);
    }

    #[test]
    fn test_data_uri_rejected() {
        assert_eq!(
            resolve_href("data:text/html,<h1>x</h1>", &base(), &current()),
            None
        );
    }

    #[test]
    fn test_scheme_relative_gets_base_scheme() {
        assert_eq!(
            resolve_href("//other.com/page", &base(), &current()),
            Some("https://other.com/page".to_string())
        );

        let http_base = Url::parse("http://example.com").unwrap();
        assert_eq!(
            resolve_href("//other.com/page", &http_base, &current()),
            Some("http://other.com/page".to_string())
        );
    }

    #[test]
    fn test_root_relative_joins_origin() {
        assert_eq!(
            resolve_href("/contact", &base(), &current()),
            Some("https://example.com/contact".to_string())
        );
    }

    #[test]
    fn test_absolute_passes_through() {
        assert_eq!(
            resolve_href("https://other.com/x", &base(), &current()),
            Some("https://other.com/x".to_string())
        );
        assert_eq!(
            resolve_href("http://other.com/x", &base(), &current()),
            Some("http://other.com/x".to_string())
        );
    }

    #[test]
    fn test_relative_resolves_against_current_page() {
        assert_eq!(
            resolve_href("sibling.html", &base(), &current()),
            Some("https://example.com/dir/sibling.html".to_string())
        );
        assert_eq!(
            resolve_href("../up.html", &base(), &current()),
            Some("https://example.com/up.html".to_string())
        );
    }

    #[test]
    fn test_non_http_result_rejected() {
        assert_eq!(resolve_href("ftp://example.com/f", &base(), &current()), None);
    }
}
