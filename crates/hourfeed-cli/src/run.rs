//! One scheduled run: fetch the feed, then write this hour's file.
//!
//! Every failure that ends the run is written to the run log before it is
//! returned; `main` turns the error into exit code 1.

use std::path::PathBuf;

use chrono::{NaiveDateTime, Timelike};
use hourfeed_core::{AppConfig, NewsEntry};
use hourfeed_feed::FeedClient;
use hourfeed_store::{CloseSummary, DailyIndex, FeedLayout, HourlyFile, RunLog, StoreError};

/// What a real run would do, computed without writing anything.
#[derive(Debug)]
pub(crate) struct DryRunPlan {
    pub path: PathBuf,
    pub file_exists: bool,
    pub fetched: usize,
    pub new_entries: Vec<NewsEntry>,
}

/// Fetch the configured feed and persist its unseen entries.
///
/// `clock` is read once the fetch has finished, so the file is named for the
/// hour it is written in even when the request straddles an hour boundary.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched (no file is touched), the
/// hourly file already exists, or any file I/O fails.
pub(crate) async fn run_once(
    config: &AppConfig,
    clock: impl FnOnce() -> NaiveDateTime,
    log: &dyn RunLog,
) -> anyhow::Result<CloseSummary> {
    let entries = match fetch(config).await {
        Ok(entries) => entries,
        Err(e) => {
            tracing::error!(url = %config.feed_url, error = %e, "failed to read feed");
            log.log(&format!(
                "*** ERROR *** Failed to read feed at {}, {e:#}",
                config.feed_url
            ));
            return Err(e);
        }
    };

    let layout = FeedLayout::new(config.feed_dir());
    persist_entries(&layout, clock(), &entries, &config.feed_url, log)
}

/// Write `entries` into the hourly file for `now` and log the outcome.
///
/// # Errors
///
/// Returns the [`StoreError`] that stopped the run. `AlreadyExists` is
/// logged by the writer itself; everything else is logged here.
pub(crate) fn persist_entries(
    layout: &FeedLayout,
    now: NaiveDateTime,
    entries: &[NewsEntry],
    feed_url: &str,
    log: &dyn RunLog,
) -> anyhow::Result<CloseSummary> {
    match write_hour(layout, now, entries, log) {
        Ok(summary) => {
            log.log(&format!("Feed at {feed_url} processed"));
            Ok(summary)
        }
        Err(e @ StoreError::AlreadyExists { .. }) => Err(e.into()),
        Err(e) => {
            tracing::error!(url = %feed_url, error = %e, "failed to write hourly file");
            log.log(&format!(
                "*** ERROR *** Failed to create JSON file for feed at {feed_url}, {e}"
            ));
            Err(e.into())
        }
    }
}

/// Fetch the feed and work out which entries a real run would write.
///
/// # Errors
///
/// Returns an error if the feed cannot be fetched or the day's earlier
/// files cannot be read.
pub(crate) async fn dry_run(
    config: &AppConfig,
    clock: impl FnOnce() -> NaiveDateTime,
) -> anyhow::Result<DryRunPlan> {
    let entries = fetch(config).await?;
    let layout = FeedLayout::new(config.feed_dir());
    Ok(plan_entries(&layout, clock(), entries)?)
}

pub(crate) fn plan_entries(
    layout: &FeedLayout,
    now: NaiveDateTime,
    entries: Vec<NewsEntry>,
) -> Result<DryRunPlan, StoreError> {
    let path = layout.hourly_path(now.date(), now.hour());
    let file_exists = path.exists();
    let mut index = DailyIndex::build(layout, now.date(), now.hour())?;

    let fetched = entries.len();
    let new_entries: Vec<NewsEntry> = entries
        .into_iter()
        .filter(|entry| index.insert(entry.key()))
        .collect();
    tracing::debug!(fetched, new = new_entries.len(), file_exists, "planned dry run");

    Ok(DryRunPlan {
        path,
        file_exists,
        fetched,
        new_entries,
    })
}

async fn fetch(config: &AppConfig) -> anyhow::Result<Vec<NewsEntry>> {
    let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
    let entries = client.fetch_entries(&config.feed_url).await?;
    Ok(entries)
}

fn write_hour(
    layout: &FeedLayout,
    now: NaiveDateTime,
    entries: &[NewsEntry],
    log: &dyn RunLog,
) -> Result<CloseSummary, StoreError> {
    std::fs::create_dir_all(layout.feed_dir()).map_err(|source| StoreError::Io {
        path: layout.feed_dir().to_path_buf(),
        source,
    })?;

    let mut file = HourlyFile::create(layout, now, log)?;
    for entry in entries {
        file.append(entry)?;
    }
    file.close()
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;
