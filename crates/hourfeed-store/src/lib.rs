//! Hourly JSON feed archive.
//!
//! Owns the fixed on-disk layout of the hourly files, refuses to create a
//! file for an hour that already has one, and drops entries already recorded
//! earlier the same day by scanning that day's prior hourly files.

pub mod error;
pub mod index;
pub mod layout;
pub mod run_log;
pub mod writer;

pub use error::StoreError;
pub use index::{scan_keys, DailyIndex};
pub use layout::FeedLayout;
pub use run_log::{FileRunLog, RunLog};
pub use writer::{CloseSummary, HourlyFile};
