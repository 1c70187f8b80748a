//! Frontier and dedup store
//!
//! Tracks every URL the crawl has ever seen and which stage it is in:
//! `unseen -> queued -> in-progress -> {visited-success | visited-failed}`.
//! A URL is in at most one of {queued, in-progress, visited} at any time,
//! `failed` is a subset of `visited`, and no URL is ever dequeued twice.
//! Rediscovery at any stage is a no-op, which bounds the crawl by the number
//! of distinct reachable URLs.

use std::collections::{HashMap, HashSet, VecDeque};

/// A unit of crawl work: one URL and the depth it was first discovered at
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlTask {
    pub url: String,
    pub depth: u32,
}

/// The crawl's work queue plus visited/failed bookkeeping
#[derive(Debug, Default)]
pub struct Frontier {
    queue: VecDeque<CrawlTask>,
    queued: HashSet<String>,
    in_flight: HashSet<String>,
    visited: HashSet<String>,
    failed: HashSet<String>,
    depths: HashMap<String, u32>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a URL at the given depth if it has never been seen
    ///
    /// Idempotent: URLs already queued, in flight, or visited are refused,
    /// so the depth recorded for a URL is always the one of its first
    /// discovery. Returns whether the URL was actually added.
    pub fn enqueue(&mut self, url: &str, depth: u32) -> bool {
        if self.queued.contains(url) || self.in_flight.contains(url) || self.visited.contains(url)
        {
            return false;
        }

        self.queued.insert(url.to_string());
        self.depths.insert(url.to_string(), depth);
        self.queue.push_back(CrawlTask {
            url: url.to_string(),
            depth,
        });

        true
    }

    /// Moves up to `max` queued tasks into the in-progress stage
    pub fn take_batch(&mut self, max: usize) -> Vec<CrawlTask> {
        let mut batch = Vec::new();

        while batch.len() < max {
            match self.queue.pop_front() {
                Some(task) => {
                    self.queued.remove(&task.url);
                    self.in_flight.insert(task.url.clone());
                    batch.push(task);
                }
                None => break,
            }
        }

        batch
    }

    /// Completes an in-progress URL, marking it visited and, on failure,
    /// failed as well
    pub fn complete(&mut self, url: &str, success: bool) {
        self.in_flight.remove(url);
        self.visited.insert(url.to_string());
        if !success {
            self.failed.insert(url.to_string());
        }
    }

    /// Number of tasks waiting in the queue
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    pub fn has_queued(&self) -> bool {
        !self.queue.is_empty()
    }

    pub fn visited_len(&self) -> usize {
        self.visited.len()
    }

    pub fn failed_len(&self) -> usize {
        self.failed.len()
    }

    pub fn is_visited(&self, url: &str) -> bool {
        self.visited.contains(url)
    }

    pub fn is_failed(&self, url: &str) -> bool {
        self.failed.contains(url)
    }

    /// The depth a URL was first discovered at
    pub fn first_seen_depth(&self, url: &str) -> Option<u32> {
        self.depths.get(url).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_new_url() {
        let mut frontier = Frontier::new();
        assert!(frontier.enqueue("https://a.com/", 0));
        assert_eq!(frontier.queued_len(), 1);
    }

    #[test]
    fn test_enqueue_is_idempotent_while_queued() {
        let mut frontier = Frontier::new();
        assert!(frontier.enqueue("https://a.com/", 0));
        assert!(!frontier.enqueue("https://a.com/", 1));
        assert_eq!(frontier.queued_len(), 1);
    }

    #[test]
    fn test_enqueue_refused_while_in_flight() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        let batch = frontier.take_batch(10);
        assert_eq!(batch.len(), 1);

        assert!(!frontier.enqueue("https://a.com/", 2));
        assert_eq!(frontier.queued_len(), 0);
    }

    #[test]
    fn test_enqueue_refused_after_visit() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        frontier.take_batch(1);
        frontier.complete("https://a.com/", true);

        assert!(!frontier.enqueue("https://a.com/", 1));
        assert_eq!(frontier.queued_len(), 0);
    }

    #[test]
    fn test_enqueue_refused_after_failure() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        frontier.take_batch(1);
        frontier.complete("https://a.com/", false);

        assert!(!frontier.enqueue("https://a.com/", 0));
    }

    #[test]
    fn test_no_url_dequeued_twice() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        frontier.enqueue("https://b.com/", 0);

        let first = frontier.take_batch(10);
        let second = frontier.take_batch(10);

        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
    }

    #[test]
    fn test_take_batch_respects_cap() {
        let mut frontier = Frontier::new();
        for i in 0..5 {
            frontier.enqueue(&format!("https://a.com/{}", i), 0);
        }

        let batch = frontier.take_batch(3);
        assert_eq!(batch.len(), 3);
        assert_eq!(frontier.queued_len(), 2);
    }

    #[test]
    fn test_batch_preserves_discovery_order() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/1", 0);
        frontier.enqueue("https://a.com/2", 1);

        let batch = frontier.take_batch(2);
        assert_eq!(batch[0].url, "https://a.com/1");
        assert_eq!(batch[1].url, "https://a.com/2");
    }

    #[test]
    fn test_failed_is_subset_of_visited() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        frontier.take_batch(1);
        frontier.complete("https://a.com/", false);

        assert!(frontier.is_visited("https://a.com/"));
        assert!(frontier.is_failed("https://a.com/"));
        assert_eq!(frontier.visited_len(), 1);
        assert_eq!(frontier.failed_len(), 1);
    }

    #[test]
    fn test_success_not_in_failed() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 0);
        frontier.take_batch(1);
        frontier.complete("https://a.com/", true);

        assert!(frontier.is_visited("https://a.com/"));
        assert!(!frontier.is_failed("https://a.com/"));
    }

    #[test]
    fn test_first_discovery_wins_depth() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 3);
        // A shorter path discovered later does not update the depth
        frontier.enqueue("https://a.com/", 1);

        assert_eq!(frontier.first_seen_depth("https://a.com/"), Some(3));
    }

    #[test]
    fn test_depth_travels_with_task() {
        let mut frontier = Frontier::new();
        frontier.enqueue("https://a.com/", 2);

        let batch = frontier.take_batch(1);
        assert_eq!(batch[0].depth, 2);
    }
}
