use crate::config::types::{Config, CrawlerConfig, FetcherConfig, FilterConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_fetcher_config(&config.fetcher)?;
    validate_filter_config(&config.filter)?;
    Ok(())
}

/// Validates crawl behavior settings
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let url = Url::parse(&config.target_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid target-url: {}", e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "target-url must use http or https, got '{}'",
            url.scheme()
        )));
    }

    if url.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(
            "target-url has no host".to_string(),
        ));
    }

    if config.max_depth < 1 {
        return Err(ConfigError::Validation(format!(
            "max_depth must be >= 1, got {}",
            config.max_depth
        )));
    }

    if config.concurrency < 1 || config.concurrency > 100 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be between 1 and 100, got {}",
            config.concurrency
        )));
    }

    if config.delay_min_secs < 0.0 || config.delay_max_secs < 0.0 {
        return Err(ConfigError::Validation(format!(
            "delay bounds must be non-negative, got {}..{}",
            config.delay_min_secs, config.delay_max_secs
        )));
    }

    if config.delay_min_secs > config.delay_max_secs {
        return Err(ConfigError::Validation(format!(
            "delay_min_secs ({}) must be <= delay_max_secs ({})",
            config.delay_min_secs, config.delay_max_secs
        )));
    }

    Ok(())
}

/// Validates fetcher settings
fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.timeout_secs < 1 {
        return Err(ConfigError::Validation(format!(
            "timeout_secs must be >= 1, got {}",
            config.timeout_secs
        )));
    }

    if config.user_agents.is_empty() {
        return Err(ConfigError::Validation(
            "user_agents must contain at least one entry".to_string(),
        ));
    }

    if config.user_agents.iter().any(|ua| ua.trim().is_empty()) {
        return Err(ConfigError::Validation(
            "user_agents entries cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates link filter settings
fn validate_filter_config(config: &FilterConfig) -> Result<(), ConfigError> {
    for ext in &config.skip_extensions {
        if !ext.starts_with('.') || ext.len() < 2 {
            return Err(ConfigError::Validation(format!(
                "skip extension '{}' must start with '.' and name a suffix",
                ext
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Config;

    fn valid_config() -> Config {
        Config::for_target("https://example.com/")
    }

    #[test]
    fn test_valid_config_passes() {
        assert!(validate(&valid_config()).is_ok());
    }

    #[test]
    fn test_rejects_malformed_target_url() {
        let mut config = valid_config();
        config.crawler.target_url = "not a url".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = valid_config();
        config.crawler.target_url = "ftp://example.com/".to_string();
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::InvalidUrl(_)
        ));
    }

    #[test]
    fn test_rejects_zero_depth() {
        let mut config = valid_config();
        config.crawler.max_depth = 0;
        assert!(matches!(
            validate(&config).unwrap_err(),
            ConfigError::Validation(_)
        ));
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let mut config = valid_config();
        config.crawler.concurrency = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_excessive_concurrency() {
        let mut config = valid_config();
        config.crawler.concurrency = 101;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_inverted_delay_range() {
        let mut config = valid_config();
        config.crawler.delay_min_secs = 5.0;
        config.crawler.delay_max_secs = 1.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_negative_delay() {
        let mut config = valid_config();
        config.crawler.delay_min_secs = -1.0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_allows_zero_delay_range() {
        let mut config = valid_config();
        config.crawler.delay_min_secs = 0.0;
        config.crawler.delay_max_secs = 0.0;
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_rejects_empty_user_agent_pool() {
        let mut config = valid_config();
        config.fetcher.user_agents.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_rejects_bad_skip_extension() {
        let mut config = valid_config();
        config.filter.skip_extensions.push("pdf".to_string());
        assert!(validate(&config).is_err());
    }
}
