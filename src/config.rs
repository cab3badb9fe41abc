//! Crawler configuration, loaded from `config.json`.
//!
//! Every field has a default so the binary runs without a config file;
//! CLI flags override the loaded values.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::graph::builder::DuplicatePolicy;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawl: CrawlConfig,
    pub arxiv: ArxivSourceConfig,
}

/// Traversal parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlConfig {
    /// Maximum BFS depth; levels past this are discovered but not expanded.
    pub max_depth: usize,
    /// Result cap per search query.
    pub max_results: usize,
    /// How repeat appearances of the same article id are treated when
    /// building the graph.
    pub duplicate_policy: DuplicatePolicy,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            max_depth: 2,
            max_results: 10,
            duplicate_policy: DuplicatePolicy::Preserve,
        }
    }
}

/// ArXiv endpoint parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ArxivSourceConfig {
    /// Query endpoint of the Atom API.
    pub base_url: String,
    /// Politeness delay awaited after each request, in milliseconds.
    pub delay_ms: u64,
}

impl Default for ArxivSourceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://export.arxiv.org/api/query".to_string(),
            delay_ms: 300,
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(Into::into)
}
