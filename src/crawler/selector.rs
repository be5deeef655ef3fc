//! First-link selector
//!
//! This module scans one page's markup for the first hyperlink worth
//! following:
//! - Only the main article body is considered, with tables and italicized
//!   elements removed up front
//! - Only direct-child paragraphs of the body are scanned, in document order
//! - A link must target the article namespace, sit outside any parenthetical
//!   aside, and not point back at the page itself
//!
//! The selector is read-only with respect to the caller: it parses the
//! supplied markup into its own tree and returns at most one absolute URL.

use crate::url::{is_article_href, resolve_href};
use ego_tree::NodeId;
use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Predicate configuration for one selector invocation
#[derive(Debug)]
pub struct SelectorOptions<'a> {
    /// Skip candidates that were already visited instead of returning them
    pub ignore_loops: bool,

    /// URLs already traversed in the current run
    pub visited: &'a HashSet<String>,
}

/// Finds the first qualifying link on a page
///
/// Candidates are evaluated in document order (paragraph order, then link
/// order within each paragraph); the first one passing every active rule
/// wins. A page without a recognizable article body yields `None`, the same
/// as a page whose links all fail the rules.
///
/// # Arguments
///
/// * `html` - Raw markup of the page being scanned
/// * `current_url` - The page's own URL, used to exclude self-links
/// * `base` - Base URL that relative hrefs are resolved against
/// * `opts` - Loop handling configuration for this invocation
///
/// # Returns
///
/// The resolved absolute URL of the selected link, or `None` if no
/// paragraph/link combination qualifies
pub fn find_first_link(
    html: &str,
    current_url: &str,
    base: &Url,
    opts: &SelectorOptions<'_>,
) -> Option<String> {
    let mut document = Html::parse_document(html);

    let body_id = article_body_id(&document)?;
    prune_non_prose(&mut document, body_id);

    let body = document.tree.get(body_id).and_then(ElementRef::wrap)?;
    let link_selector = Selector::parse("a").ok()?;

    for paragraph in direct_paragraphs(body) {
        let text: String = paragraph.text().collect();

        for link in paragraph.select(&link_selector) {
            let Some(href) = link.value().attr("href") else {
                continue;
            };
            if !is_article_href(href) {
                continue;
            }

            let link_text: String = link.text().collect();
            if inside_parenthetical(&text, &link_text) {
                continue;
            }

            let Some(next) = resolve_href(base, href) else {
                continue;
            };
            if opts.ignore_loops && opts.visited.contains(&next) {
                continue;
            }
            if next == current_url {
                continue;
            }

            return Some(next);
        }
    }

    None
}

/// Locates the article body element
///
/// The body is the first descendant with the `mw-parser-output` class under
/// the element with id `mw-content-text`.
fn article_body_id(document: &Html) -> Option<NodeId> {
    let container_selector = Selector::parse("#mw-content-text").ok()?;
    let body_selector = Selector::parse(".mw-parser-output").ok()?;

    let container = document.select(&container_selector).next()?;
    let body = container.select(&body_selector).next()?;
    Some(body.id())
}

/// Detaches `<table>` and `<i>` elements under the body from the tree
///
/// Disambiguation hints, captions, and citations are typically tabular or
/// italicized rather than main prose, so neither their text nor their links
/// take part in the scan.
fn prune_non_prose(document: &mut Html, body_id: NodeId) {
    let Ok(selector) = Selector::parse("table, i") else {
        return;
    };

    let doomed: Vec<NodeId> = document
        .tree
        .get(body_id)
        .and_then(ElementRef::wrap)
        .map(|body| body.select(&selector).map(|el| el.id()).collect())
        .unwrap_or_default();

    for id in doomed {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
}

/// Iterates the direct-child paragraphs of the body, in document order
fn direct_paragraphs(body: ElementRef<'_>) -> impl Iterator<Item = ElementRef<'_>> {
    body.children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
}

/// Applies the parenthesis heuristic
///
/// The link counts as part of a parenthetical aside when the flattened
/// paragraph text before the first occurrence of the link's text contains
/// more `(` than `)`. This is a literal count comparison over flattened
/// text, not a structural parse; nesting and unbalanced parentheses resolve
/// by the raw counts. A link whose text never surfaces in the flattened
/// paragraph is judged against the whole paragraph.
fn inside_parenthetical(paragraph_text: &str, link_text: &str) -> bool {
    let text_before = match paragraph_text.find(link_text) {
        Some(index) => &paragraph_text[..index],
        None => paragraph_text,
    };

    let opens = text_before.chars().filter(|&c| c == '(').count();
    let closes = text_before.chars().filter(|&c| c == ')').count();
    opens > closes
}

#[cfg(test)]
mod tests {
    use super::*;

    const CURRENT: &str = "https://en.wikipedia.org/wiki/Current";

    fn base() -> Url {
        Url::parse("https://en.wikipedia.org/").unwrap()
    }

    /// Wraps paragraph markup in the article skeleton the selector expects
    fn page(body: &str) -> String {
        format!(
            r#"<html><body><div id="mw-content-text"><div class="mw-parser-output">{}</div></div></body></html>"#,
            body
        )
    }

    fn select(html: &str) -> Option<String> {
        let visited = HashSet::new();
        let opts = SelectorOptions {
            ignore_loops: false,
            visited: &visited,
        };
        find_first_link(html, CURRENT, &base(), &opts)
    }

    #[test]
    fn test_first_link_in_document_order() {
        let html = page(
            r#"<p><a href="/wiki/First">First</a> and <a href="/wiki/Second">Second</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/First")
        );
    }

    #[test]
    fn test_link_in_later_paragraph() {
        let html = page(
            r#"<p>No links here.</p><p>But <a href="/wiki/Target">Target</a> here.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Target")
        );
    }

    #[test]
    fn test_parenthesized_link_skipped() {
        let html = page(
            r#"<p>Alpha (<a href="/wiki/Beta">Beta</a>) then <a href="/wiki/Gamma">Gamma</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Gamma")
        );
    }

    #[test]
    fn test_link_after_closed_parenthetical() {
        let html = page(
            r#"<p>See (Example) and <a href="/wiki/Foo">Foo</a> for more.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Foo")
        );
    }

    #[test]
    fn test_only_parenthesized_links_is_dead_end() {
        let html = page(
            r#"<p>(see <a href="/wiki/Foo">Foo</a> and <a href="/wiki/Bar">Bar</a>)</p>"#,
        );
        assert_eq!(select(&html), None);
    }

    #[test]
    fn test_namespace_link_skipped() {
        let html = page(
            r#"<p><a href="/wiki/File:Photo.jpg">Photo</a> of <a href="/wiki/Subject">Subject</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Subject")
        );
    }

    #[test]
    fn test_non_wiki_link_skipped() {
        let html = page(
            r#"<p><a href="/w/index.php?title=Edit">edit</a> then <a href="/wiki/Real">Real</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Real")
        );
    }

    #[test]
    fn test_self_link_skipped() {
        let html = page(
            r#"<p><a href="/wiki/Current">Current</a> then <a href="/wiki/Other">Other</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Other")
        );
    }

    #[test]
    fn test_italicized_link_removed() {
        let html = page(
            r#"<p><i><a href="/wiki/Italic">Italic</a></i> then <a href="/wiki/Plain">Plain</a>.</p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Plain")
        );
    }

    #[test]
    fn test_table_link_removed() {
        let html = page(
            r#"<table><tr><td><a href="/wiki/Tabular">Tabular</a></td></tr></table>
               <p><a href="/wiki/Prose">Prose</a></p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Prose")
        );
    }

    #[test]
    fn test_nested_paragraph_not_scanned() {
        // Only direct children of the body count as paragraphs.
        let html = page(
            r#"<div><p><a href="/wiki/Nested">Nested</a></p></div>
               <p><a href="/wiki/Direct">Direct</a></p>"#,
        );
        assert_eq!(
            select(&html).as_deref(),
            Some("https://en.wikipedia.org/wiki/Direct")
        );
    }

    #[test]
    fn test_missing_article_body() {
        let html = r#"<html><body><p><a href="/wiki/Foo">Foo</a></p></body></html>"#;
        assert_eq!(select(html), None);
    }

    #[test]
    fn test_no_links_at_all() {
        let html = page(r#"<p>Just prose, nothing to follow.</p>"#);
        assert_eq!(select(&html), None);
    }

    #[test]
    fn test_ignore_loops_skips_visited() {
        let html = page(
            r#"<p><a href="/wiki/Seen">Seen</a> then <a href="/wiki/Fresh">Fresh</a>.</p>"#,
        );
        let mut visited = HashSet::new();
        visited.insert("https://en.wikipedia.org/wiki/Seen".to_string());

        let opts = SelectorOptions {
            ignore_loops: true,
            visited: &visited,
        };
        assert_eq!(
            find_first_link(&html, CURRENT, &base(), &opts).as_deref(),
            Some("https://en.wikipedia.org/wiki/Fresh")
        );
    }

    #[test]
    fn test_visited_returned_without_ignore_loops() {
        // In the default mode the selector still returns a visited URL; loop
        // detection is the engine's job.
        let html = page(r#"<p><a href="/wiki/Seen">Seen</a>.</p>"#);
        let mut visited = HashSet::new();
        visited.insert("https://en.wikipedia.org/wiki/Seen".to_string());

        let opts = SelectorOptions {
            ignore_loops: false,
            visited: &visited,
        };
        assert_eq!(
            find_first_link(&html, CURRENT, &base(), &opts).as_deref(),
            Some("https://en.wikipedia.org/wiki/Seen")
        );
    }

    #[test]
    fn test_ignore_loops_exhausting_all_candidates() {
        let html = page(r#"<p><a href="/wiki/Seen">Seen</a>.</p>"#);
        let mut visited = HashSet::new();
        visited.insert("https://en.wikipedia.org/wiki/Seen".to_string());

        let opts = SelectorOptions {
            ignore_loops: true,
            visited: &visited,
        };
        assert_eq!(find_first_link(&html, CURRENT, &base(), &opts), None);
    }

    #[test]
    fn test_inside_parenthetical_counts() {
        assert!(inside_parenthetical("before (aside Link", "Link"));
        assert!(!inside_parenthetical("before (aside) Link", "Link"));
        assert!(!inside_parenthetical("plain text Link", "Link"));
        // Unbalanced closes keep the count non-positive.
        assert!(!inside_parenthetical(") stray ( ) Link", "Link"));
    }
}
