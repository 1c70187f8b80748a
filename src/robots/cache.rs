//! Lazy per-site robots policy cache
//!
//! Each site's robots.txt is fetched at most once for the life of a crawl.
//! Fetch or parse failures of any kind fall back to an allow-all policy:
//! the crawl must not stall because a robots endpoint is unreachable.

use crate::robots::parser::SitePolicy;
use crate::url::site_key;
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use url::Url;

/// Shared robots policy cache keyed by site
///
/// The lock is held across the robots fetch itself, which serializes policy
/// fetches and guarantees a site is fetched exactly once even when many
/// workers hit it simultaneously.
pub struct RobotsCache {
    policies: Mutex<HashMap<String, Arc<SitePolicy>>>,
    client: Client,
}

impl RobotsCache {
    /// Creates an empty cache that fetches through the given client
    pub fn new(client: Client) -> Self {
        Self {
            policies: Mutex::new(HashMap::new()),
            client,
        }
    }

    /// Checks whether the URL may be fetched according to its site's
    /// robots.txt, evaluated for the given user agent
    ///
    /// URLs without a recognizable site are allowed: there is no policy to
    /// consult for them.
    pub async fn can_fetch(&self, url: &Url, user_agent: &str) -> bool {
        let key = match site_key(url) {
            Some(key) => key,
            None => return true,
        };

        let mut policies = self.policies.lock().await;

        if !policies.contains_key(&key) {
            let policy = fetch_policy(&self.client, url).await;
            policies.insert(key.clone(), Arc::new(policy));
        }

        policies[&key].is_allowed(url.as_str(), user_agent)
    }
}

/// Fetches and parses the robots.txt policy for a URL's site
///
/// Tries `https://site/robots.txt` first, then the URL's own scheme when it
/// is not https. Every failure path ends in allow-all.
async fn fetch_policy(client: &Client, url: &Url) -> SitePolicy {
    for robots_url in robots_candidates(url) {
        match client.get(robots_url.clone()).send().await {
            Ok(response) if response.status().is_success() => match response.text().await {
                Ok(body) => {
                    tracing::debug!("Fetched robots.txt from {}", robots_url);
                    return SitePolicy::from_content(&body);
                }
                Err(e) => {
                    tracing::debug!("Failed to read robots.txt body from {}: {}", robots_url, e);
                }
            },
            Ok(response) => {
                tracing::debug!(
                    "robots.txt at {} returned HTTP {}",
                    robots_url,
                    response.status()
                );
            }
            Err(e) => {
                tracing::debug!("Failed to fetch robots.txt from {}: {}", robots_url, e);
            }
        }
    }

    SitePolicy::allow_all()
}

/// Builds the candidate robots.txt URLs for a site, https first
fn robots_candidates(url: &Url) -> Vec<Url> {
    let mut robots_url = url.clone();
    robots_url.set_path("/robots.txt");
    robots_url.set_query(None);
    robots_url.set_fragment(None);

    let mut candidates = Vec::new();

    if robots_url.scheme() == "https" {
        candidates.push(robots_url);
    } else {
        let mut https_url = robots_url.clone();
        if https_url.set_scheme("https").is_ok() {
            candidates.push(https_url);
        }
        candidates.push(robots_url);
    }

    candidates
}
