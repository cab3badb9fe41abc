//! Error taxonomy for the crawler.
//!
//! Two failure families exist: the search gateway failing or returning
//! malformed data, and an article's author field resisting interpretation
//! as a sequence of names. Both propagate to the caller; nothing is
//! retried or swallowed. A gateway failure aborts the whole traversal.

use thiserror::Error;

/// Failure of the search-service boundary.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connection, timeout, body read).
    #[error("search request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status.
    #[error("search service returned status {0}")]
    Status(u16),

    /// The response body could not be interpreted as a result feed.
    #[error("malformed search feed: {0}")]
    MalformedFeed(String),
}

/// An author field could not be interpreted as a sequence of names.
#[derive(Debug, Error)]
#[error("malformed author list: {0}")]
pub struct MalformedAuthorList(pub String);
