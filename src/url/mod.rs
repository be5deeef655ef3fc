//! URL handling module for wikihop
//!
//! This module decides which hrefs count as article links and resolves them
//! to absolute URLs against the configured wiki base.

mod article;

// Re-export main functions
pub use article::{is_article_href, resolve_href};
