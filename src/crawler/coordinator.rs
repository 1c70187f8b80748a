//! Crawl coordinator - main crawl orchestration logic
//!
//! The coordinator seeds the frontier with the target URL, then alternates
//! between a dispatch phase (spawn a bounded batch of worker tasks) and a
//! collection phase (await the batch, record outcomes, merge discovered
//! links back into the frontier). Workers share the frontier, email index,
//! and statistics through one mutex per structure; the robots cache guards
//! itself. The crawl ends when the frontier is empty or the shutdown flag
//! is raised, in which case in-flight tasks finish and the partial result
//! set is returned.

use crate::config::Config;
use crate::crawler::fetcher::{Fetcher, PlainTransport, StealthTransport, Transport};
use crate::crawler::frontier::{CrawlTask, Frontier};
use crate::extract::{extract_emails, extract_links};
use crate::robots::RobotsCache;
use crate::state::{CrawlStats, EmailIndex, StatsSnapshot};
use crate::url::{is_same_domain, LinkFilter};
use crate::MailsiftError;
use rand::Rng;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use url::Url;

/// User agent the robots policy is evaluated for
const ROBOTS_USER_AGENT: &str = "*";

/// Aggregated crawl outcome, consumed by external exporters
#[derive(Debug, Clone, Serialize)]
pub struct CrawlResult {
    /// Distinct emails discovered, sorted
    pub emails: Vec<String>,

    /// Email -> ordered source URLs it was found on
    pub email_sources: HashMap<String, Vec<String>>,

    /// Run statistics
    pub stats: StatsSnapshot,
}

/// Main crawler coordinator structure
pub struct Coordinator {
    config: Arc<Config>,
    fetcher: Arc<Fetcher>,
    robots: Arc<RobotsCache>,
    filter: Arc<LinkFilter>,
    frontier: Arc<Mutex<Frontier>>,
    index: Arc<Mutex<EmailIndex>>,
    stats: Arc<Mutex<CrawlStats>>,
    limiter: Arc<Semaphore>,
    shutdown: Arc<AtomicBool>,
}

impl Coordinator {
    /// Creates a new coordinator from a validated configuration
    ///
    /// The fetch transport is chosen here, once, from the configuration;
    /// everything downstream is agnostic to which one is active.
    pub fn new(config: Config) -> Result<Self, MailsiftError> {
        crate::config::validate(&config)?;

        let transport: Box<dyn Transport> = if config.crawler.use_stealth_transport {
            Box::new(StealthTransport)
        } else {
            Box::new(PlainTransport)
        };

        let fetcher = Fetcher::new(&config.fetcher, transport)?;
        let robots = RobotsCache::new(fetcher.client());
        let filter = LinkFilter::new(&config.filter.skip_extensions);
        let limiter = Arc::new(Semaphore::new(config.crawler.concurrency as usize));

        Ok(Self {
            config: Arc::new(config),
            fetcher: Arc::new(fetcher),
            robots: Arc::new(robots),
            filter: Arc::new(filter),
            frontier: Arc::new(Mutex::new(Frontier::new())),
            index: Arc::new(Mutex::new(EmailIndex::new())),
            stats: Arc::new(Mutex::new(CrawlStats::new())),
            limiter,
            shutdown: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Handle for requesting a graceful stop from outside the crawl
    ///
    /// Raising the flag stops the dispatch of new batches; in-flight tasks
    /// finish and their results are kept.
    pub fn shutdown_handle(&self) -> Arc<AtomicBool> {
        self.shutdown.clone()
    }

    /// Runs the crawl to completion and returns the aggregated result
    ///
    /// The crawl terminates when the frontier is empty or a shutdown was
    /// requested; either way the result holds everything accumulated so far.
    pub async fn scrape(&self) -> CrawlResult {
        let target = &self.config.crawler.target_url;
        tracing::info!(
            "Starting crawl of {} (max depth {}, {} workers)",
            target,
            self.config.crawler.max_depth,
            self.config.crawler.concurrency
        );

        {
            let mut frontier = self.frontier.lock().unwrap();
            frontier.enqueue(target, 0);
        }
        self.stats.lock().unwrap().mark_started();

        let batch_cap = (self.config.crawler.concurrency as usize) * 2;

        loop {
            if self.shutdown.load(Ordering::SeqCst) {
                tracing::info!("Shutdown requested, returning partial results");
                break;
            }

            let batch = self.frontier.lock().unwrap().take_batch(batch_cap);
            if batch.is_empty() {
                tracing::info!("Frontier is empty, crawl complete");
                break;
            }

            let mut workers = JoinSet::new();
            for task in batch {
                let context = self.task_context();
                workers.spawn(async move { context.process(task).await });
            }

            let mut discovered = Vec::new();
            while let Some(joined) = workers.join_next().await {
                match joined {
                    Ok(outcome) => {
                        self.frontier
                            .lock()
                            .unwrap()
                            .complete(&outcome.url, outcome.success);
                        discovered.extend(outcome.links);
                    }
                    Err(e) => {
                        tracing::error!("Worker task failed: {}", e);
                    }
                }
            }

            {
                let mut frontier = self.frontier.lock().unwrap();
                for (link, depth) in discovered {
                    frontier.enqueue(&link, depth);
                }

                tracing::info!(
                    "Progress: {} visited, {} queued, {} emails, {} failed",
                    frontier.visited_len(),
                    frontier.queued_len(),
                    self.index.lock().unwrap().len(),
                    frontier.failed_len()
                );
            }
        }

        self.stats.lock().unwrap().mark_finished();

        let index = self.index.lock().unwrap().clone();
        let emails = index.emails();
        let stats = self.stats.lock().unwrap().snapshot(emails.len());

        tracing::info!(
            "Crawl finished: {} emails across {} pages in {:.2}s",
            stats.emails_found,
            stats.pages_visited,
            stats.duration_seconds
        );

        CrawlResult {
            emails,
            email_sources: index.into_sources(),
            stats,
        }
    }

    fn task_context(&self) -> TaskContext {
        TaskContext {
            config: self.config.clone(),
            fetcher: self.fetcher.clone(),
            robots: self.robots.clone(),
            filter: self.filter.clone(),
            index: self.index.clone(),
            stats: self.stats.clone(),
            limiter: self.limiter.clone(),
        }
    }
}

/// What one worker hands back to the coordinator
struct TaskOutcome {
    url: String,
    success: bool,
    links: Vec<(String, u32)>,
}

impl TaskOutcome {
    fn failed(url: String) -> Self {
        Self {
            url,
            success: false,
            links: Vec::new(),
        }
    }
}

/// Everything a worker needs to run the per-task pipeline
#[derive(Clone)]
struct TaskContext {
    config: Arc<Config>,
    fetcher: Arc<Fetcher>,
    robots: Arc<RobotsCache>,
    filter: Arc<LinkFilter>,
    index: Arc<Mutex<EmailIndex>>,
    stats: Arc<Mutex<CrawlStats>>,
    limiter: Arc<Semaphore>,
}

impl TaskContext {
    /// Per-task pipeline: depth guard, robots check, jittered delay, fetch,
    /// email extraction, link discovery
    async fn process(self, task: CrawlTask) -> TaskOutcome {
        let _permit = match self.limiter.clone().acquire_owned().await {
            Ok(permit) => permit,
            Err(_) => return TaskOutcome::failed(task.url),
        };

        let crawler = &self.config.crawler;

        // Links are gated at enqueue time, so this only fires for a
        // misconfigured seed
        if task.depth > crawler.max_depth {
            return TaskOutcome::failed(task.url);
        }

        let page_url = match Url::parse(&task.url) {
            Ok(url) => url,
            Err(e) => {
                tracing::debug!("Unparseable task URL {}: {}", task.url, e);
                return TaskOutcome::failed(task.url);
            }
        };

        if crawler.respect_robots && !self.robots.can_fetch(&page_url, ROBOTS_USER_AGENT).await {
            tracing::info!("Skipping {} (disallowed by robots.txt)", task.url);
            return TaskOutcome::failed(task.url);
        }

        // Each worker paces its own requests independently
        let delay = random_delay(crawler.delay_min_secs, crawler.delay_max_secs);
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        let page = match self.fetcher.fetch(&task.url).await {
            Ok(page) => page,
            Err(e) => {
                tracing::warn!("Fetch failed for {}: {}", task.url, e);
                self.stats.lock().unwrap().pages_failed += 1;
                return TaskOutcome::failed(task.url);
            }
        };

        self.stats.lock().unwrap().pages_visited += 1;
        tracing::debug!("Fetched {} (HTTP {})", task.url, page.status);

        let emails = extract_emails(&page.body);
        if !emails.is_empty() {
            let mut index = self.index.lock().unwrap();
            for email in &emails {
                index.record(email, &task.url);
            }
            tracing::info!("Found {} emails on {}", emails.len(), task.url);
        }

        let mut links = Vec::new();
        if task.depth < crawler.max_depth {
            for link in extract_links(&page.body, &page_url) {
                if self.filter.should_skip(&link) {
                    continue;
                }
                if crawler.same_domain_only && !is_same_domain(&link, &crawler.target_url) {
                    continue;
                }
                links.push((link, task.depth + 1));
            }
        }

        TaskOutcome {
            url: task.url,
            success: true,
            links,
        }
    }
}

/// Draws a uniformly random delay from the configured range
fn random_delay(min_secs: f64, max_secs: f64) -> Duration {
    let secs = if max_secs > min_secs {
        rand::thread_rng().gen_range(min_secs..=max_secs)
    } else {
        min_secs
    };

    Duration::from_secs_f64(secs.max(0.0))
}
