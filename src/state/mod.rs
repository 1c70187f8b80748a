//! Shared crawl state: the email index and run statistics
//!
//! Both structures are owned by the coordinator and mutated by workers only
//! through a mutual-exclusion boundary; once the crawl returns they are
//! frozen into the result snapshot.

mod index;
mod stats;

pub use index::EmailIndex;
pub use stats::{CrawlStats, StatsSnapshot};
