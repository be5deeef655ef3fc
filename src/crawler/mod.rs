//! Crawler module for page fetching and link following
//!
//! This module contains the core traversal logic, including:
//! - HTTP fetching
//! - First-link selection
//! - The hop loop and its termination rules

mod engine;
mod fetcher;
mod selector;

pub use engine::{CrawlReport, Engine};
pub use fetcher::{build_http_client, fetch_url, FetchResult};
pub use selector::{find_first_link, SelectorOptions};

use crate::config::Config;
use crate::Result;

/// Runs a complete traversal
///
/// This is the main entry point for a run. It builds the HTTP client from
/// the configuration and follows first links from `start` until the goal, a
/// dead end, a loop, or the hop budget ends the run.
///
/// # Arguments
///
/// * `config` - The traversal configuration
/// * `start` - The URL to start at
///
/// # Returns
///
/// * `Ok(CrawlReport)` - The run completed (in a success or failure state)
/// * `Err(WikihopError)` - The run could not be set up
pub async fn crawl(config: Config, start: &str) -> Result<CrawlReport> {
    let engine = Engine::new(config)?;
    engine.run(start).await
}
