use serde::Deserialize;

/// Main configuration structure for Mailsift
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub crawler: CrawlerConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
    #[serde(default)]
    pub filter: FilterConfig,
}

impl Config {
    /// Builds a configuration for a single target URL with every other
    /// setting at its default. Entry point for the CLI path, where flags
    /// override individual fields afterwards.
    pub fn for_target(target_url: &str) -> Self {
        Self {
            crawler: CrawlerConfig {
                target_url: target_url.to_string(),
                ..CrawlerConfig::default()
            },
            fetcher: FetcherConfig::default(),
            filter: FilterConfig::default(),
        }
    }
}

/// Crawl behavior configuration
#[derive(Debug, Clone, Deserialize)]
pub struct CrawlerConfig {
    /// Seed URL the crawl starts from
    #[serde(rename = "target-url")]
    pub target_url: String,

    /// Maximum link-hop depth from the seed URL
    #[serde(rename = "max-depth", default = "default_max_depth")]
    pub max_depth: u32,

    /// Number of concurrent fetch workers
    #[serde(rename = "concurrency", default = "default_concurrency")]
    pub concurrency: u32,

    /// Lower bound of the per-request delay (seconds)
    #[serde(rename = "delay-min-secs", default = "default_delay_min")]
    pub delay_min_secs: f64,

    /// Upper bound of the per-request delay (seconds)
    #[serde(rename = "delay-max-secs", default = "default_delay_max")]
    pub delay_max_secs: f64,

    /// Restrict the crawl to the seed URL's host
    #[serde(rename = "same-domain-only", default = "default_true")]
    pub same_domain_only: bool,

    /// Honor robots.txt allow/disallow rules
    #[serde(rename = "respect-robots", default = "default_true")]
    pub respect_robots: bool,

    /// Use the stealth transport instead of the plain one
    #[serde(rename = "use-stealth-transport", default)]
    pub use_stealth_transport: bool,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            target_url: String::new(),
            max_depth: default_max_depth(),
            concurrency: default_concurrency(),
            delay_min_secs: default_delay_min(),
            delay_max_secs: default_delay_max(),
            same_domain_only: true,
            respect_robots: true,
            use_stealth_transport: false,
        }
    }
}

/// HTTP fetcher configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FetcherConfig {
    /// Request timeout in seconds
    #[serde(rename = "timeout-secs", default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-agent strings rotated across requests
    #[serde(rename = "user-agents", default = "default_user_agents")]
    pub user_agents: Vec<String>,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agents: default_user_agents(),
        }
    }
}

/// Link filter configuration
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    /// Path extensions that are never fetched
    #[serde(rename = "skip-extensions", default = "default_skip_extensions")]
    pub skip_extensions: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            skip_extensions: default_skip_extensions(),
        }
    }
}

fn default_max_depth() -> u32 {
    3
}

fn default_concurrency() -> u32 {
    5
}

fn default_delay_min() -> f64 {
    1.0
}

fn default_delay_max() -> f64 {
    3.0
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    10
}

fn default_user_agents() -> Vec<String> {
    [
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:89.0) Gecko/20100101 Firefox/89.0",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10.15; rv:89.0) Gecko/20100101 Firefox/89.0",
        "Mozilla/5.0 (X11; Linux x86_64; rv:89.0) Gecko/20100101 Firefox/89.0",
        "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Edge/91.0.864.59",
        "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/14.1.1 Safari/605.1.15",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_skip_extensions() -> Vec<String> {
    [
        ".pdf", ".zip", ".rar", ".7z", ".tar", ".gz", ".bz2", ".png", ".jpg", ".jpeg", ".gif",
        ".bmp", ".svg", ".webp", ".mp4", ".avi", ".mov", ".wmv", ".flv", ".mkv", ".mp3", ".wav",
        ".flac", ".aac", ".ogg", ".doc", ".docx", ".xls", ".xlsx", ".ppt", ".pptx", ".exe",
        ".msi", ".dmg", ".deb", ".rpm",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
