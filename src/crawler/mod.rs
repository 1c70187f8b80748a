//! Crawler module: fetching, the frontier, and crawl coordination
//!
//! This is the core of the crate: the frontier work queue, the concurrent
//! worker pipeline, and the coordinator that drives both.

mod coordinator;
mod fetcher;
mod frontier;

pub use coordinator::{Coordinator, CrawlResult};
pub use fetcher::{FetchError, FetchedPage, Fetcher, PlainTransport, StealthTransport, Transport};
pub use frontier::{CrawlTask, Frontier};

use crate::config::Config;
use crate::Result;

/// Runs a complete crawl operation
///
/// Convenience entry point: builds a coordinator from the configuration and
/// runs it to completion. Use [`Coordinator`] directly when a shutdown
/// handle is needed.
///
/// # Example
///
/// ```no_run
/// use mailsift::config::Config;
/// use mailsift::crawler::crawl;
///
/// # async fn example() -> mailsift::Result<()> {
/// let config = Config::for_target("https://example.com/");
/// let result = crawl(config).await?;
/// println!("{} emails found", result.emails.len());
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: Config) -> Result<CrawlResult> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.scrape().await)
}
