use url::Url;

/// Extracts the lower-cased host from a URL string
///
/// Returns None when the string does not parse as a URL or has no host.
///
/// # Examples
///
/// ```
/// use mailsift::url::extract_host;
///
/// assert_eq!(extract_host("https://Example.COM/x"), Some("example.com".to_string()));
/// assert_eq!(extract_host("not a url"), None);
/// ```
pub fn extract_host(url: &str) -> Option<String> {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_lowercase()))
}

/// Checks whether two URLs share the same host, case-insensitively
///
/// URLs that fail to parse or carry no host never match anything.
pub fn is_same_domain(url: &str, reference: &str) -> bool {
    match (extract_host(url), extract_host(reference)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Builds the cache key identifying a site: lower-cased host plus the
/// explicit port when one is present. Two ports on one host are distinct
/// sites with distinct robots policies.
pub fn site_key(url: &Url) -> Option<String> {
    let host = url.host_str()?.to_lowercase();
    match url.port() {
        Some(port) => Some(format!("{}:{}", host, port)),
        None => Some(host),
    }
}
