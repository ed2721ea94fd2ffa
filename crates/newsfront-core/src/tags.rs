// ── Tag list splitting ──

use serde::Serialize;

/// Glyph placed between consecutive tag links.
pub const SEPARATOR: &str = "_";

/// Split a space-delimited tag string.
///
/// Splits on every single ASCII space with no trimming or filtering, so
/// `""` yields `[""]` and doubled spaces yield empty tokens.
pub fn split(tags: &str) -> Vec<&str> {
    tags.split(' ').collect()
}

/// One navigable tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagLink {
    pub tag: String,
    pub href: String,
    pub title: String,
    /// `Some(SEPARATOR)` on every link except the last by position.
    pub separator: Option<&'static str>,
}

/// Turn a tag string into filter links (`/news?search.tags=<tag>`).
pub fn links(tags: &str) -> Vec<TagLink> {
    let tokens = split(tags);
    let last = tokens.len().saturating_sub(1);
    tokens
        .into_iter()
        .enumerate()
        .map(|(i, tag)| TagLink {
            tag: tag.to_owned(),
            href: format!("/news?search.tags={tag}"),
            title: format!("search for articles with same Tag {tag}"),
            separator: (i != last).then_some(SEPARATOR),
        })
        .collect()
}
