//! Keys of the entries already written earlier the same day.

use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use chrono::NaiveDate;
use hourfeed_core::NewsEntryKey;

use crate::layout::{classify_line, FeedLayout, MarkedLine, HEADER_TITLE};
use crate::StoreError;

/// Set of `(title, pubDate)` keys recorded in the day's hourly files.
#[derive(Debug, Clone, Default)]
pub struct DailyIndex {
    keys: HashSet<NewsEntryKey>,
}

impl DailyIndex {
    /// Scan the files for hours `0..hour` of `date`.
    ///
    /// Hours without a file (a skipped or failed run) contribute nothing.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if a file that exists cannot be read. A
    /// partial index could let duplicates through, so nothing is skipped.
    pub fn build(layout: &FeedLayout, date: NaiveDate, hour: u32) -> Result<Self, StoreError> {
        let mut index = Self::default();

        for prior in 0..hour {
            let path = layout.hourly_path(date, prior);
            let file = match File::open(&path) {
                Ok(file) => file,
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(source) => return Err(StoreError::io(&path, source)),
            };

            let keys =
                scan_keys(BufReader::new(file)).map_err(|source| StoreError::io(&path, source))?;
            tracing::debug!(path = %path.display(), keys = keys.len(), "indexed prior hourly file");
            index.keys.extend(keys);
        }

        Ok(index)
    }

    #[must_use]
    pub fn contains(&self, key: &NewsEntryKey) -> bool {
        self.keys.contains(key)
    }

    /// Record a key. Returns `false` if it was already present.
    pub fn insert(&mut self, key: NewsEntryKey) -> bool {
        self.keys.insert(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NewsEntryKey> {
        self.keys.iter()
    }
}

impl FromIterator<NewsEntryKey> for DailyIndex {
    fn from_iter<I: IntoIterator<Item = NewsEntryKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

/// Extract the item keys from one hourly file, in file order.
///
/// A title line becomes pending (unless it is the channel header's title);
/// the next pubDate line pairs with it to form a key. A pubDate line with no
/// pending title is ignored.
///
/// # Errors
///
/// Propagates any read error from `reader`.
pub fn scan_keys<R: BufRead>(reader: R) -> io::Result<Vec<NewsEntryKey>> {
    let mut keys = Vec::new();
    let mut pending_title: Option<String> = None;

    for line in reader.lines() {
        let line = line?;
        match classify_line(&line) {
            Some(MarkedLine::Title(title)) if title != HEADER_TITLE => {
                pending_title = Some(title.to_string());
            }
            Some(MarkedLine::PubDate(publish_date)) => {
                if let Some(title) = pending_title.take() {
                    keys.push(NewsEntryKey::new(title, publish_date));
                }
            }
            _ => {}
        }
    }

    Ok(keys)
}
