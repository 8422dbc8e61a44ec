//! File naming and the fixed text layout of an hourly file.
//!
//! The writer emits these fragments verbatim and the daily index reads them
//! back line by line, so both sides share the markers defined here. Values
//! are never escaped.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use hourfeed_core::NewsEntry;

/// Channel title written in every header. Also used by the index to tell the
/// header's title line apart from item titles.
pub const HEADER_TITLE: &str = "BBC News - Home";
pub const HEADER_LINK: &str =
    "http://www.bbc.co.uk/news/#sa-ns_mchannel=rss&amp;ns_source=PublicRSS20-sa";
pub const HEADER_DESCRIPTION: &str =
    "The latest stories from the Home section of the BBC News web site.";

pub(crate) const TITLE_MARKER: &str = "\"title\": \"";
pub(crate) const PUB_DATE_MARKER: &str = "\"pubDate\": \"";

/// Where the hourly files of one feed live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedLayout {
    feed_dir: PathBuf,
}

impl FeedLayout {
    pub fn new(feed_dir: impl Into<PathBuf>) -> Self {
        Self {
            feed_dir: feed_dir.into(),
        }
    }

    #[must_use]
    pub fn feed_dir(&self) -> &Path {
        &self.feed_dir
    }

    /// Path of the file for `hour` on `date`.
    #[must_use]
    pub fn hourly_path(&self, date: NaiveDate, hour: u32) -> PathBuf {
        self.feed_dir.join(hourly_file_name(date, hour))
    }
}

/// `yyyy-MM-dd-HH.json`, hour zero-padded to two digits.
#[must_use]
pub fn hourly_file_name(date: NaiveDate, hour: u32) -> String {
    format!("{}-{hour:02}.json", date.format("%Y-%m-%d"))
}

/// Opening brace and the three channel fields. No newline after the
/// description so the first item can continue the object with a comma.
pub(crate) fn header() -> String {
    format!(
        "{{\n\"title\": \"{HEADER_TITLE}\",\n\"link\": \"{HEADER_LINK}\",\n\"description\": \"{HEADER_DESCRIPTION}\""
    )
}

/// Text written before an item: the first one also opens the `items` array.
pub(crate) fn item_separator(first: bool) -> &'static str {
    if first {
        ",\n\"items\":[\n"
    } else {
        ",\n"
    }
}

/// One item object, ending at its closing brace with no newline.
pub(crate) fn item(entry: &NewsEntry) -> String {
    format!(
        "\t{{\n\t\t\"title\": \"{}\",\n\t\t\"description\": \"{}\",\n\t\t\"link\": \"{}\",\n\t\t\"pubDate\": \"{}\"\n\t}}",
        entry.title, entry.summary, entry.link, entry.publish_date
    )
}

/// Closes the `items` array (when one was opened) and the outer object.
pub(crate) fn trailer(has_items: bool) -> &'static str {
    if has_items {
        "\n]\n}\n"
    } else {
        "\n}\n"
    }
}

/// A line the daily index cares about.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum MarkedLine<'a> {
    Title(&'a str),
    PubDate(&'a str),
}

/// Recognise a title or pubDate line as written by [`item`] or [`header`].
///
/// Leading indentation is ignored; the trailing `",` (title) or `"` (pubDate)
/// is stripped from the value.
pub(crate) fn classify_line(line: &str) -> Option<MarkedLine<'_>> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix(TITLE_MARKER) {
        return Some(MarkedLine::Title(rest.strip_suffix("\",").unwrap_or(rest)));
    }
    if let Some(rest) = trimmed.strip_prefix(PUB_DATE_MARKER) {
        return Some(MarkedLine::PubDate(rest.strip_suffix('"').unwrap_or(rest)));
    }
    None
}
