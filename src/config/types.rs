use serde::Deserialize;

/// Main configuration structure for wikihop
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub http: HttpConfig,
}

/// Traversal behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CrawlConfig {
    /// URL of the page the traversal succeeds at
    pub goal: String,

    /// Number of links to follow before abandoning the search
    pub max_hops: u32,

    /// Skip already-visited candidates instead of terminating on first repeat
    pub ignore_loops: bool,

    /// Base URL that relative article hrefs are resolved against
    pub base_url: String,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            goal: "https://en.wikipedia.org/wiki/Philosophy".to_string(),
            max_hops: 100,
            ignore_loops: false,
            base_url: "https://en.wikipedia.org/".to_string(),
        }
    }
}

/// HTTP client configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct HttpConfig {
    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Whole-request timeout in seconds
    pub request_timeout: u64,

    /// Connection timeout in seconds
    pub connect_timeout: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("wikihop/", env!("CARGO_PKG_VERSION")).to_string(),
            request_timeout: 30,
            connect_timeout: 10,
        }
    }
}
