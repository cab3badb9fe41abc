//! Breadth-first discovery traversal.
//!
//! [`bfs`] holds the domain-agnostic engine: it knows nothing about
//! authors or articles, only about expanding vertices level by level.
//! [`coauthors`] supplies the domain policy that expands an author into
//! their co-authors by querying the search gateway, and the
//! [`coauthors::crawl_coauthor_network`] entry point that wires the two
//! together.

pub mod bfs;
pub mod coauthors;

#[cfg(test)]
pub mod tests;

pub use bfs::{traverse, Expander, TraversalSummary};
pub use coauthors::{crawl_coauthor_network, CoauthorExpander, CrawlOutcome};
