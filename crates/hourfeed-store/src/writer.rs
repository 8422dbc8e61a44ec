//! Writer for the current hour's file.
//!
//! Every operation opens the file, appends its text and closes the handle
//! again; nothing is held open between calls. The file only becomes valid
//! JSON once [`HourlyFile::close`] has written the trailer.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{NaiveDateTime, Timelike};
use hourfeed_core::NewsEntry;

use crate::index::DailyIndex;
use crate::layout::{self, FeedLayout};
use crate::run_log::RunLog;
use crate::StoreError;

/// Counts reported once the trailer has been written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloseSummary {
    pub path: PathBuf,
    pub items_written: usize,
    pub duplicates_skipped: usize,
}

/// An hourly file with its header written and zero or more items appended.
#[derive(Debug)]
pub struct HourlyFile {
    path: PathBuf,
    index: DailyIndex,
    items_written: usize,
    duplicates_skipped: usize,
}

impl HourlyFile {
    /// Create the file for the hour containing `now` and write its header.
    ///
    /// Builds the [`DailyIndex`] from the earlier hours of the same day first.
    ///
    /// # Errors
    ///
    /// - [`StoreError::AlreadyExists`] if the hour already has a file. The
    ///   condition is also written to `log`, and nothing is written to disk.
    /// - [`StoreError::Io`] if indexing or writing the header fails.
    pub fn create(
        layout: &FeedLayout,
        now: NaiveDateTime,
        log: &dyn RunLog,
    ) -> Result<Self, StoreError> {
        let date = now.date();
        let hour = now.hour();
        let path = layout.hourly_path(date, hour);

        if path.try_exists().map_err(|e| StoreError::io(&path, e))? {
            return Err(already_exists(path, log));
        }

        let index = DailyIndex::build(layout, date, hour)?;
        Self::start(path, index, log)
    }

    /// Write the header with create-new semantics. A file that appeared after
    /// the existence check in [`HourlyFile::create`] is still `AlreadyExists`.
    fn start(path: PathBuf, index: DailyIndex, log: &dyn RunLog) -> Result<Self, StoreError> {
        match write_header(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                return Err(already_exists(path, log));
            }
            Err(e) => return Err(StoreError::io(&path, e)),
        }

        tracing::info!(
            path = %path.display(),
            known_keys = index.len(),
            "created hourly file"
        );

        Ok(Self {
            path,
            index,
            items_written: 0,
            duplicates_skipped: 0,
        })
    }

    /// Append `entry` unless its key was recorded earlier today or earlier in
    /// this run. Returns whether an item was written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be opened or written.
    pub fn append(&mut self, entry: &NewsEntry) -> Result<bool, StoreError> {
        let key = entry.key();
        if self.index.contains(&key) {
            self.duplicates_skipped += 1;
            tracing::debug!(
                title = %entry.title,
                pub_date = %entry.publish_date,
                "skipping duplicate entry"
            );
            return Ok(false);
        }

        let mut text = String::from(layout::item_separator(self.items_written == 0));
        text.push_str(&layout::item(entry));
        append_text(&self.path, &text)?;

        self.index.insert(key);
        self.items_written += 1;
        Ok(true)
    }

    /// Write the trailer. Consuming `self` keeps the trailer from being
    /// written twice.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Io`] if the file cannot be opened or written.
    pub fn close(self) -> Result<CloseSummary, StoreError> {
        append_text(&self.path, layout::trailer(self.items_written > 0))?;

        tracing::info!(
            path = %self.path.display(),
            items_written = self.items_written,
            duplicates_skipped = self.duplicates_skipped,
            "closed hourly file"
        );

        Ok(CloseSummary {
            path: self.path,
            items_written: self.items_written,
            duplicates_skipped: self.duplicates_skipped,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Keys known so far: earlier hours plus this run's appends.
    #[must_use]
    pub fn index(&self) -> &DailyIndex {
        &self.index
    }

    #[must_use]
    pub fn items_written(&self) -> usize {
        self.items_written
    }
}

fn already_exists(path: PathBuf, log: &dyn RunLog) -> StoreError {
    log.log(&format!(
        "*** ERROR *** File {} cannot be created, already exists",
        path.display()
    ));
    tracing::warn!(path = %path.display(), "hourly file already exists");
    StoreError::AlreadyExists { path }
}

fn write_header(path: &Path) -> io::Result<()> {
    let mut file = OpenOptions::new().write(true).create_new(true).open(path)?;
    file.write_all(layout::header().as_bytes())
}

fn append_text(path: &Path, text: &str) -> Result<(), StoreError> {
    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    file.write_all(text.as_bytes())
        .map_err(|e| StoreError::io(path, e))
}
