//! Configuration module for wikihop
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every field has a default, so a run without a config file works
//! out of the box; command-line flags override file values per run.
//!
//! # Example
//!
//! ```no_run
//! use wikihop::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wikihop.toml")).unwrap();
//! println!("Hop budget: {}", config.crawl.max_hops);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlConfig, HttpConfig};

// Re-export parser functions
pub use parser::load_config;

// Re-export validation
pub use validation::validate;
