use chrono::{DateTime, Utc};
use serde::Serialize;

/// Live crawl counters, mutated by workers under the shared-state lock
#[derive(Debug, Default)]
pub struct CrawlStats {
    /// Pages fetched and processed successfully
    pub pages_visited: u64,

    /// Pages whose fetch ended in a transport error
    pub pages_failed: u64,

    /// When the crawl started
    pub started_at: Option<DateTime<Utc>>,

    /// When the crawl finished or was interrupted
    pub finished_at: Option<DateTime<Utc>>,
}

impl CrawlStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_started(&mut self) {
        self.started_at = Some(Utc::now());
    }

    pub fn mark_finished(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// Wall-clock duration of the crawl in seconds
    ///
    /// Zero until the crawl has both started and finished.
    pub fn duration_seconds(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => {
                let millis = (end - start).num_milliseconds();
                millis.max(0) as f64 / 1000.0
            }
            _ => 0.0,
        }
    }

    /// Freezes the counters into an immutable snapshot
    pub fn snapshot(&self, emails_found: usize) -> StatsSnapshot {
        StatsSnapshot {
            pages_visited: self.pages_visited,
            pages_failed: self.pages_failed,
            emails_found: emails_found as u64,
            duration_seconds: self.duration_seconds(),
        }
    }
}

/// Immutable statistics snapshot handed out with the crawl result
#[derive(Debug, Clone, Serialize)]
pub struct StatsSnapshot {
    pub pages_visited: u64,
    pub pages_failed: u64,
    pub emails_found: u64,
    pub duration_seconds: f64,
}
