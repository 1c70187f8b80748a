//! Mailsift main entry point
//!
//! Command-line interface for the Mailsift email-harvesting crawler.

use anyhow::Result;
use clap::Parser;
use mailsift::config::{load_config, Config};
use mailsift::crawler::{Coordinator, CrawlResult};
use std::path::PathBuf;
use std::sync::atomic::Ordering;
use tracing_subscriber::EnvFilter;

/// Mailsift: a concurrent email-harvesting crawler
///
/// Crawls a website from a seed URL up to a bounded depth, extracts email
/// addresses from every fetched page, and reports which pages each address
/// was found on.
#[derive(Parser, Debug)]
#[command(name = "mailsift")]
#[command(version = "1.0.0")]
#[command(about = "Concurrent email-harvesting crawler", long_about = None)]
struct Cli {
    /// Target URL to crawl
    #[arg(short, long, required_unless_present = "config", conflicts_with = "config")]
    url: Option<String>,

    /// Path to a TOML configuration file instead of flags
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maximum crawling depth
    #[arg(short, long)]
    depth: Option<u32>,

    /// Number of concurrent fetch workers
    #[arg(short, long)]
    threads: Option<u32>,

    /// Minimum delay between requests in seconds
    #[arg(long)]
    delay_min: Option<f64>,

    /// Maximum delay between requests in seconds
    #[arg(long)]
    delay_max: Option<f64>,

    /// Use the stealth transport (anti-bot-bypass stand-in)
    #[arg(long)]
    stealth: bool,

    /// Ignore robots.txt restrictions
    #[arg(long)]
    no_robots: bool,

    /// Allow crawling external domains
    #[arg(long)]
    allow_external: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    let coordinator = Coordinator::new(config)?;

    // Ctrl-C stops new dispatches; in-flight requests finish and the
    // partial results are reported
    let shutdown = coordinator.shutdown_handle();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, finishing in-flight requests");
            shutdown.store(true, Ordering::SeqCst);
        }
    });

    let result = coordinator.scrape().await;

    print_summary(&result);

    Ok(())
}

/// Assembles the configuration from a TOML file or from CLI flags
fn build_config(cli: &Cli) -> Result<Config> {
    if let Some(path) = &cli.config {
        tracing::info!("Loading configuration from: {}", path.display());
        return Ok(load_config(path)?);
    }

    // clap guarantees url is present when no config file was given
    let mut url = cli.url.clone().unwrap_or_default();
    if !url.starts_with("http://") && !url.starts_with("https://") {
        url = format!("https://{}", url);
    }

    let mut config = Config::for_target(&url);

    if let Some(depth) = cli.depth {
        config.crawler.max_depth = depth;
    }
    if let Some(threads) = cli.threads {
        config.crawler.concurrency = threads;
    }
    if let Some(delay_min) = cli.delay_min {
        config.crawler.delay_min_secs = delay_min;
    }
    if let Some(delay_max) = cli.delay_max {
        config.crawler.delay_max_secs = delay_max;
    }
    config.crawler.use_stealth_transport = cli.stealth;
    config.crawler.respect_robots = !cli.no_robots;
    config.crawler.same_domain_only = !cli.allow_external;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("mailsift=info,warn"),
            1 => EnvFilter::new("mailsift=debug,info"),
            2 => EnvFilter::new("mailsift=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Prints the crawl summary and the harvested emails
fn print_summary(result: &CrawlResult) {
    println!("\n=== Crawl Summary ===\n");
    println!("Emails found:  {}", result.stats.emails_found);
    println!("Pages visited: {}", result.stats.pages_visited);
    println!("Pages failed:  {}", result.stats.pages_failed);
    println!("Duration:      {:.2} seconds", result.stats.duration_seconds);

    if result.emails.is_empty() {
        println!("\nNo emails found.");
        return;
    }

    println!("\nEmails:");
    for email in &result.emails {
        let sources = result
            .email_sources
            .get(email)
            .map(|s| s.len())
            .unwrap_or(0);
        println!("  {} ({} source pages)", email, sources);
    }
}
