use std::collections::HashMap;

/// Accumulates discovered emails and the pages they were found on
///
/// Keys are normalized (lower-cased) addresses; each value is the ordered
/// list of source URLs that contained the address, appended once per
/// successful extraction event. A key's list is never empty once created.
#[derive(Debug, Clone, Default)]
pub struct EmailIndex {
    sources: HashMap<String, Vec<String>>,
}

impl EmailIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that an email was found on a page
    pub fn record(&mut self, email: &str, source_url: &str) {
        self.sources
            .entry(email.to_lowercase())
            .or_default()
            .push(source_url.to_string());
    }

    /// Number of distinct emails seen so far
    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source URLs recorded for an email, in discovery order
    pub fn sources_of(&self, email: &str) -> Option<&[String]> {
        self.sources.get(email).map(|v| v.as_slice())
    }

    /// All distinct emails, sorted for stable output
    pub fn emails(&self) -> Vec<String> {
        let mut emails: Vec<String> = self.sources.keys().cloned().collect();
        emails.sort();
        emails
    }

    /// Consumes the index into its email -> sources mapping
    pub fn into_sources(self) -> HashMap<String, Vec<String>> {
        self.sources
    }
}
