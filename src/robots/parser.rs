//! Robots.txt policy wrapper
//!
//! Thin wrapper around the robotstxt crate providing allow/deny lookups and
//! an explicit allow-all fallback for unreachable or unparseable files.

use robotstxt::DefaultMatcher;

/// Parsed robots policy for one site
///
/// An empty or absent robots.txt allows everything; anything else is
/// evaluated on demand against the raw content.
#[derive(Debug, Clone)]
pub struct SitePolicy {
    /// Raw robots.txt content (empty string means allow all)
    content: String,
    /// Whether to allow all (true = allow all, false = evaluate content)
    allow_all: bool,
}

impl SitePolicy {
    /// Creates a policy from raw robots.txt content
    pub fn from_content(content: &str) -> Self {
        Self {
            content: content.to_string(),
            allow_all: false,
        }
    }

    /// Creates a permissive policy that allows everything
    ///
    /// This is the fail-open default when robots.txt cannot be fetched.
    pub fn allow_all() -> Self {
        Self {
            content: String::new(),
            allow_all: true,
        }
    }

    /// Checks if a URL is allowed for the given user agent
    pub fn is_allowed(&self, url: &str, user_agent: &str) -> bool {
        if self.allow_all || self.content.is_empty() {
            return true;
        }

        let mut matcher = DefaultMatcher::default();
        matcher.one_agent_allowed_by_robots(&self.content, user_agent, url)
    }
}
