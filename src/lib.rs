//! Co-authorship network crawler for the arXiv search API.
//!
//! The crate discovers a co-author network rooted at a single author by
//! breadth-first traversal over the arXiv search service, accumulates the
//! co-authored articles it visits, and builds a weighted undirected graph
//! where vertices are authors and edge weights count shared articles.
//!
//! Module map:
//! - [`gateway`]: the search-service boundary (the only I/O dependency)
//! - [`traversal`]: the generic BFS engine and the co-author expansion policy
//! - [`record`]: article records, author identity, and the article accumulator
//! - [`graph`]: weighted co-author graph construction and DOT rendering

pub mod config;
pub mod error;
pub mod gateway;
pub mod graph;
pub mod logger;
pub mod record;
pub mod traversal;

#[cfg(test)]
pub mod test_utilities;
