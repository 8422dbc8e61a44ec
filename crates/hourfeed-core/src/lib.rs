//! Shared configuration and entry types for hourfeed.

pub mod app_config;
pub mod config;
pub mod entry;
pub mod error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use entry::{NewsEntry, NewsEntryKey};
pub use error::ConfigError;
