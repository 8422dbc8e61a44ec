use std::path::PathBuf;

/// Name of the directory under `app_dir` holding the hourly JSON files.
pub const FEED_DIR_NAME: &str = "feed";

/// Name of the operator log file under `app_dir`.
pub const LOG_FILE_NAME: &str = "log.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub app_dir: PathBuf,
    pub feed_url: String,
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl AppConfig {
    /// Directory the hourly files are written to (`<app_dir>/feed`).
    #[must_use]
    pub fn feed_dir(&self) -> PathBuf {
        self.app_dir.join(FEED_DIR_NAME)
    }

    /// Path of the append-only run log (`<app_dir>/log.txt`).
    #[must_use]
    pub fn log_path(&self) -> PathBuf {
        self.app_dir.join(LOG_FILE_NAME)
    }
}
