//! Mapping of parsed RSS / Atom documents onto [`NewsEntry`] values.

use chrono::{DateTime, Utc};
use feed_rs::model::{Entry, Link};
use feed_rs::parser::{self, ParseErrorKind, ParseFeedError};
use hourfeed_core::NewsEntry;

use crate::error::FeedError;

/// Parse a feed document into entries, in document order.
///
/// Items lacking a title, a link, or a publish date are skipped with a
/// warning. A missing summary becomes the empty string.
///
/// # Errors
///
/// Returns [`FeedError::NotAFeed`] when the document has no RSS or Atom
/// root element and [`FeedError::Parse`] for any other parse failure.
pub fn parse_feed(body: &[u8]) -> Result<Vec<NewsEntry>, FeedError> {
    let feed = parser::parse(body).map_err(|e| match e {
        ParseFeedError::ParseError(ParseErrorKind::NoFeedRoot) => FeedError::NotAFeed,
        other => FeedError::Parse(other),
    })?;

    Ok(feed.entries.into_iter().filter_map(into_entry).collect())
}

fn into_entry(entry: Entry) -> Option<NewsEntry> {
    let Some(title) = entry.title.map(|t| t.content).filter(|t| !t.is_empty()) else {
        tracing::warn!(id = %entry.id, "skipping feed item without a title");
        return None;
    };

    let Some(link) = primary_link(&entry.links) else {
        tracing::warn!(%title, "skipping feed item without a link");
        return None;
    };

    let Some(published) = entry.published.or(entry.updated) else {
        tracing::warn!(%title, "skipping feed item without a usable publish date");
        return None;
    };

    let summary = entry
        .summary
        .map(|t| t.content)
        .or(entry.content.and_then(|c| c.body))
        .unwrap_or_default();

    Some(NewsEntry {
        title,
        summary,
        link,
        publish_date: render_pub_date(published),
    })
}

/// The first link that points at the item itself, else the first link.
fn primary_link(links: &[Link]) -> Option<String> {
    links
        .iter()
        .find(|l| l.rel.as_deref().is_none_or(|r| r == "alternate"))
        .or_else(|| links.first())
        .map(|l| l.href.clone())
        .filter(|href| !href.is_empty())
}

/// Render a timestamp RFC-1123 style (`Mon, 01 Jan 2024 08:00:00 GMT`).
#[must_use]
pub fn render_pub_date(at: DateTime<Utc>) -> String {
    at.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
}
