use url::Url;

/// Returns true if a raw href points at an article page
///
/// An article href contains the `/wiki` path marker and no colon. Colons
/// denote non-article namespaces (`File:`, `Category:`, `Help:`, and so on),
/// which the traversal never follows. Both checks are substring checks on
/// the raw attribute value, not on a parsed path.
///
/// # Examples
///
/// ```
/// use wikihop::url::is_article_href;
///
/// assert!(is_article_href("/wiki/Philosophy"));
/// assert!(!is_article_href("/wiki/Category:Epistemology"));
/// assert!(!is_article_href("#cite_note-3"));
/// ```
pub fn is_article_href(href: &str) -> bool {
    href.contains("/wiki") && !href.contains(':')
}

/// Resolves an href to an absolute URL against the wiki base
///
/// Relative hrefs (`/wiki/Foo`) become absolute against the base; absolute
/// hrefs pass through unchanged by the join. Returns `None` when the base
/// cannot absorb the href.
pub fn resolve_href(base: &Url, href: &str) -> Option<String> {
    base.join(href).ok().map(|url| url.to_string())
}
