//! Operator-facing run log (`log.txt`).

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDateTime};

/// Sink for the one-line messages an operator reads after a scheduled run.
///
/// Logging never fails the caller; implementations swallow their own errors.
pub trait RunLog {
    fn log(&self, message: &str);
}

/// Appends `<timestamp> : <message>` lines to a file, creating it on first use.
///
/// The file is opened and closed on every call.
#[derive(Debug, Clone)]
pub struct FileRunLog {
    path: PathBuf,
}

impl FileRunLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RunLog for FileRunLog {
    fn log(&self, message: &str) {
        let line = format_line(Local::now().naive_local(), message);
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .and_then(|mut file| file.write_all(line.as_bytes()));

        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "failed to write run log");
        }
    }
}

/// Render one log line, newline included.
#[must_use]
pub fn format_line(at: NaiveDateTime, message: &str) -> String {
    format!("{} : {message}\n", at.format("%Y-%m-%d %H:%M:%S"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn format_line_prefixes_timestamp() {
        let at = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 5, 9)
            .unwrap();
        assert_eq!(
            format_line(at, "Feed at http://x processed"),
            "2024-01-01 10:05:09 : Feed at http://x processed\n"
        );
    }

    #[test]
    fn file_run_log_appends_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log = FileRunLog::new(dir.path().join("log.txt"));

        log.log("first");
        log.log("second");

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with(" : first"));
        assert!(lines[1].ends_with(" : second"));
    }

    #[test]
    fn file_run_log_swallows_write_errors() {
        let dir = tempfile::tempdir().unwrap();
        // Parent directory does not exist, so the open fails.
        let log = FileRunLog::new(dir.path().join("missing").join("log.txt"));
        log.log("dropped");
        assert!(!log.path().exists());
    }
}
