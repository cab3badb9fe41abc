//! Shared helpers for the crate's tests: canned gateways and record
//! factories.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::gateway::SearchGateway;
use crate::record::ArticleRecord;

/// Build a minimal article record for tests.
pub fn article(id: &str, authors: &[&str]) -> ArticleRecord {
    ArticleRecord {
        id: id.to_string(),
        title: format!("Article {id}"),
        authors: authors.iter().map(|a| a.to_string()).collect(),
        published: None,
        venue: None,
        summary: None,
        source: "arxiv".to_string(),
    }
}

/// Gateway returning fixed records per query, recording every call.
///
/// Queries without a canned response return an empty result list, which
/// is what the real service does for an unknown author.
#[derive(Default)]
pub struct StubGateway {
    responses: HashMap<String, Vec<ArticleRecord>>,
    pub calls: Mutex<Vec<(String, usize)>>,
}

impl StubGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, query: &str, records: Vec<ArticleRecord>) -> Self {
        self.responses.insert(query.to_lowercase(), records);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SearchGateway for StubGateway {
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ArticleRecord>, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        Ok(self
            .responses
            .get(&query.to_lowercase())
            .cloned()
            .unwrap_or_default())
    }
}

/// Gateway that always fails, for fail-fast tests.
pub struct FailingGateway;

#[async_trait]
impl SearchGateway for FailingGateway {
    async fn search(
        &self,
        _query: &str,
        _max_results: usize,
    ) -> Result<Vec<ArticleRecord>, GatewayError> {
        Err(GatewayError::Status(503))
    }
}
