//! Wikihop main entry point
//!
//! This is the command-line interface for the wikihop traversal.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wikihop::config::{load_config, validate, Config};
use wikihop::crawler::crawl;

/// Follow Wikipedia first links to find the Philosophy page
///
/// Starting from the given article, wikihop repeatedly follows the first
/// qualifying link in the main body text until it reaches the goal page,
/// finds a loop, hits a dead end, or runs out of hops.
#[derive(Parser, Debug)]
#[command(name = "wikihop")]
#[command(version)]
#[command(about = "Follow Wikipedia first links to find the Philosophy page", long_about = None)]
struct Cli {
    /// URL to begin searching from
    #[arg(value_name = "URL")]
    url: String,

    /// Number of links to follow before quitting (default: 100)
    #[arg(short = 'm', long = "max_hops", value_name = "N")]
    max_hops: Option<u32>,

    /// Choose the next link if a loop is found
    #[arg(short = 'l', long = "ignore_loops")]
    ignore_loops: bool,

    /// URL to stop at (default: the Philosophy article)
    #[arg(long, value_name = "URL")]
    goal: Option<String>,

    /// Path to TOML configuration file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;

    tracing::info!(
        "Following first links from {} (max hops: {}, ignore loops: {})",
        cli.url,
        config.crawl.max_hops,
        config.crawl.ignore_loops
    );

    let report = crawl(config, &cli.url).await?;
    tracing::debug!("Run ended in state: {}", report.outcome);

    // The path is empty on every failure outcome; the hop count is the path
    // length minus the start page.
    if report.path.is_empty() {
        println!("Path not found");
        Ok(1)
    } else {
        println!("{} hops", report.path.len() - 1);
        Ok(0)
    }
}

/// Builds the run configuration from the optional file and CLI overrides
fn build_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path)?
        }
        None => Config::default(),
    };

    if let Some(max_hops) = cli.max_hops {
        config.crawl.max_hops = max_hops;
    }
    if cli.ignore_loops {
        config.crawl.ignore_loops = true;
    }
    if let Some(goal) = &cli.goal {
        config.crawl.goal = goal.clone();
    }

    // Command-line overrides may have introduced a bad goal URL
    validate(&config)?;

    Ok(config)
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Diagnostics go to stderr; stdout carries only the traversal trace and
/// the terminal report line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("wikihop=info,warn"),
            1 => EnvFilter::new("wikihop=debug,info"),
            2 => EnvFilter::new("wikihop=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
