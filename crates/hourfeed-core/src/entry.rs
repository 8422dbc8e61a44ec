//! Feed entries and the key used to detect duplicates.

/// Identity of an entry for duplicate detection.
///
/// Two keys are equal only when both strings match exactly; titles and dates
/// are never normalized or parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewsEntryKey {
    pub title: String,
    pub publish_date: String,
}

impl NewsEntryKey {
    #[must_use]
    pub fn new(title: impl Into<String>, publish_date: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            publish_date: publish_date.into(),
        }
    }
}

/// One item as delivered by the feed source.
///
/// `publish_date` is already rendered in RFC-1123 form
/// (`Mon, 01 Jan 2024 08:00:00 GMT`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsEntry {
    pub title: String,
    pub summary: String,
    pub link: String,
    pub publish_date: String,
}

impl NewsEntry {
    #[must_use]
    pub fn key(&self) -> NewsEntryKey {
        NewsEntryKey::new(self.title.clone(), self.publish_date.clone())
    }
}
