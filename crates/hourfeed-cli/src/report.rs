//! `index` command: show what today's earlier hourly files already hold.

use chrono::{NaiveDateTime, Timelike};
use hourfeed_core::{AppConfig, NewsEntryKey};
use hourfeed_store::{DailyIndex, FeedLayout, StoreError};

/// Keys recorded today before the hour of `now`, ordered by pubDate then title.
pub(crate) fn index_keys(
    layout: &FeedLayout,
    now: NaiveDateTime,
) -> Result<Vec<NewsEntryKey>, StoreError> {
    let index = DailyIndex::build(layout, now.date(), now.hour())?;
    let mut keys: Vec<NewsEntryKey> = index.iter().cloned().collect();
    keys.sort_by(|a, b| {
        a.publish_date
            .cmp(&b.publish_date)
            .then_with(|| a.title.cmp(&b.title))
    });
    Ok(keys)
}

pub(crate) fn print_index(
    config: &AppConfig,
    now: NaiveDateTime,
    json: bool,
) -> anyhow::Result<()> {
    let layout = FeedLayout::new(config.feed_dir());
    let keys = index_keys(&layout, now)?;

    for key in &keys {
        if json {
            let line = serde_json::json!({ "title": key.title, "pubDate": key.publish_date });
            println!("{line}");
        } else {
            println!("{} | {}", key.publish_date, key.title);
        }
    }
    if !json {
        println!(
            "{} entries recorded on {} before {:02}:00",
            keys.len(),
            now.date(),
            now.hour()
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use hourfeed_core::NewsEntry;
    use hourfeed_store::{HourlyFile, RunLog};

    use super::*;

    struct NoopLog;

    impl RunLog for NoopLog {
        fn log(&self, _message: &str) {}
    }

    fn at(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn entry(title: &str, publish_date: &str) -> NewsEntry {
        NewsEntry {
            title: title.to_string(),
            summary: String::new(),
            link: "https://example.com".to_string(),
            publish_date: publish_date.to_string(),
        }
    }

    #[test]
    fn index_keys_are_sorted_and_limited_to_earlier_hours() {
        let dir = tempfile::tempdir().unwrap();
        let layout = FeedLayout::new(dir.path());

        for (hour, entries) in [
            (1, vec![entry("b", "Mon, 01 Jan 2024 01:00:00 GMT")]),
            (
                2,
                vec![
                    entry("a", "Mon, 01 Jan 2024 01:00:00 GMT"),
                    entry("c", "Mon, 01 Jan 2024 00:30:00 GMT"),
                ],
            ),
            (3, vec![entry("later", "Mon, 01 Jan 2024 03:00:00 GMT")]),
        ] {
            let mut file = HourlyFile::create(&layout, at(hour), &NoopLog).unwrap();
            for e in &entries {
                file.append(e).unwrap();
            }
            file.close().unwrap();
        }

        let titles: Vec<String> = index_keys(&layout, at(3))
            .unwrap()
            .into_iter()
            .map(|k| k.title)
            .collect();
        assert_eq!(titles, vec!["c", "a", "b"]);
    }

    #[test]
    fn index_keys_empty_without_files() {
        let dir = tempfile::tempdir().unwrap();
        let layout = FeedLayout::new(dir.path().join("feed"));
        assert!(index_keys(&layout, at(12)).unwrap().is_empty());
    }
}
