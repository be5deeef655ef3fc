//! Traversal engine - the hop-by-hop crawl loop
//!
//! This module drives the whole run:
//! - Fetches the current page through the HTTP fetcher
//! - Asks the first-link selector for the next URL
//! - Tracks visited URLs and the path taken
//! - Decides termination: goal reached, dead end, loop, or hop budget spent
//!
//! One trace line per visited URL goes to stdout as the run progresses; the
//! structured diagnostics go through `tracing`.

use crate::config::Config;
use crate::crawler::fetcher::{build_http_client, fetch_url, FetchResult};
use crate::crawler::selector::{find_first_link, SelectorOptions};
use crate::state::RunState;
use crate::Result;
use reqwest::Client;
use std::collections::HashSet;
use url::Url;

/// Outcome of a completed traversal run
#[derive(Debug)]
pub struct CrawlReport {
    /// Terminal state the run ended in
    pub outcome: RunState,

    /// URLs visited from start to goal, in order; empty on any failure
    pub path: Vec<String>,

    /// Number of hops taken before the run ended
    pub hops: u32,
}

impl CrawlReport {
    fn failed(outcome: RunState, hops: u32) -> Self {
        Self {
            outcome,
            path: Vec::new(),
            hops,
        }
    }
}

/// Traversal engine driving the crawl
///
/// The engine owns the HTTP client and the per-run configuration; the
/// visited set and path live only for the duration of one `run` call.
pub struct Engine {
    config: Config,
    client: Client,
    base: Url,
}

impl Engine {
    /// Creates a new engine from a validated configuration
    ///
    /// # Arguments
    ///
    /// * `config` - The traversal configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Engine)` - Ready to run
    /// * `Err(WikihopError)` - The HTTP client or base URL could not be built
    pub fn new(config: Config) -> Result<Self> {
        let client = build_http_client(&config.http)?;
        let base = Url::parse(&config.crawl.base_url)?;

        Ok(Self {
            config,
            client,
            base,
        })
    }

    /// Runs the traversal from the given start URL
    ///
    /// The loop keeps going while the hop budget has room and the goal has
    /// not been reached. Each iteration fetches the current page, selects
    /// the first qualifying link, and advances. Every failure mode ends the
    /// run with an empty path; only reaching the goal returns the path,
    /// inclusive of both start and goal.
    pub async fn run(&self, start: &str) -> Result<CrawlReport> {
        let goal = &self.config.crawl.goal;
        let max_hops = self.config.crawl.max_hops;
        let ignore_loops = self.config.crawl.ignore_loops;

        let mut visited: HashSet<String> = HashSet::new();
        visited.insert(start.to_string());
        let mut path = vec![start.to_string()];
        let mut current = start.to_string();
        let mut hops: u32 = 0;
        let started_at = std::time::Instant::now();

        tracing::debug!("Starting traversal from {} (goal: {})", start, goal);
        println!("{}", current);

        while hops < max_hops && current != *goal {
            let markup = match fetch_url(&self.client, &current).await {
                FetchResult::Success { body, .. } => body,
                FetchResult::HttpError { status_code } => {
                    tracing::warn!("Fetch of {} failed with HTTP {}", current, status_code);
                    println!("{} could not be reached", current);
                    println!("NO VALID LINKS!");
                    return Ok(CrawlReport::failed(RunState::NoLink, hops));
                }
                FetchResult::NetworkError { error } => {
                    tracing::warn!("Fetch of {} failed: {}", current, error);
                    println!("{} could not be reached", current);
                    println!("NO VALID LINKS!");
                    return Ok(CrawlReport::failed(RunState::NoLink, hops));
                }
            };

            let options = SelectorOptions {
                ignore_loops,
                visited: &visited,
            };
            let next = match find_first_link(&markup, &current, &self.base, &options) {
                Some(next) => next,
                None => {
                    println!("NO VALID LINKS!");
                    return Ok(CrawlReport::failed(RunState::NoLink, hops));
                }
            };

            // With ignore_loops set the selector already excluded visited
            // candidates, so this check can only fire in the default mode.
            if visited.contains(&next) {
                println!("LOOP FROM {}", next);
                return Ok(CrawlReport::failed(RunState::LoopDetected, hops));
            }

            println!("{}", next);
            tracing::debug!("Hop {}: {} -> {}", hops + 1, current, next);
            path.push(next.clone());
            visited.insert(next.clone());
            current = next;
            hops += 1;
        }

        // The budget check comes first: a run whose final permitted hop
        // landed on the goal still counts as exhausted.
        if hops >= max_hops {
            println!("MAX HOPS EXCEEDED");
            return Ok(CrawlReport::failed(RunState::HopsExceeded, hops));
        }

        tracing::info!(
            "Reached {} in {} hops ({:?})",
            goal,
            hops,
            started_at.elapsed()
        );

        Ok(CrawlReport {
            outcome: RunState::Success,
            path,
            hops,
        })
    }
}
