use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("feed parse error: {0}")]
    Parse(feed_rs::parser::ParseFeedError),

    /// The document parsed but had no RSS, RDF or Atom root element.
    #[error("document is not an RSS or Atom feed")]
    NotAFeed,
}
