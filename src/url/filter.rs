use url::Url;

/// Decides whether a URL's path points at a file type that is never fetched
///
/// Binary, media, archive, and document URLs cannot contain extractable
/// page text, so they are dropped before they ever reach the frontier.
#[derive(Debug, Clone)]
pub struct LinkFilter {
    skip_extensions: Vec<String>,
}

impl LinkFilter {
    /// Creates a filter from a configured skip-extension set
    ///
    /// Extensions are lower-cased once here so that `should_skip` is a plain
    /// suffix comparison.
    pub fn new(skip_extensions: &[String]) -> Self {
        Self {
            skip_extensions: skip_extensions.iter().map(|e| e.to_lowercase()).collect(),
        }
    }

    /// Returns true if the URL's path ends with a skipped extension,
    /// case-insensitively
    pub fn should_skip(&self, url: &str) -> bool {
        let path = match Url::parse(url) {
            Ok(parsed) => parsed.path().to_lowercase(),
            Err(_) => return false,
        };

        self.skip_extensions.iter().any(|ext| path.ends_with(ext))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FilterConfig;

    fn default_filter() -> LinkFilter {
        LinkFilter::new(&FilterConfig::default().skip_extensions)
    }

    #[test]
    fn test_skips_pdf_case_insensitive() {
        let filter = default_filter();
        assert!(filter.should_skip("http://x.com/file.PDF"));
        assert!(filter.should_skip("http://x.com/file.pdf"));
    }

    #[test]
    fn test_keeps_plain_page() {
        let filter = default_filter();
        assert!(!filter.should_skip("http://x.com/page"));
        assert!(!filter.should_skip("http://x.com/page.html"));
    }

    #[test]
    fn test_extension_only_matches_path() {
        // A skipped extension inside the query string is not a match
        let filter = default_filter();
        assert!(!filter.should_skip("http://x.com/download?file=report.pdf"));
    }

    #[test]
    fn test_skips_nested_media_paths() {
        let filter = default_filter();
        assert!(filter.should_skip("http://x.com/assets/img/logo.png"));
        assert!(filter.should_skip("http://x.com/media/video.MP4"));
    }

    #[test]
    fn test_custom_extension_set() {
        let filter = LinkFilter::new(&[".xml".to_string()]);
        assert!(filter.should_skip("http://x.com/sitemap.xml"));
        assert!(!filter.should_skip("http://x.com/file.pdf"));
    }

    #[test]
    fn test_unparseable_url_not_skipped() {
        let filter = default_filter();
        assert!(!filter.should_skip("not a url"));
    }
}
