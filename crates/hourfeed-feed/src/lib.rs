//! Feed retrieval: fetches an RSS or Atom document and turns its items
//! into [`hourfeed_core::NewsEntry`] values.

pub mod client;
pub mod error;
pub mod parse;

pub use client::FeedClient;
pub use error::FeedError;
pub use parse::{parse_feed, render_pub_date};
