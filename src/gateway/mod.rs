//! The search-service boundary.
//!
//! [`SearchGateway`] is the only network dependency of the crawl. The core
//! treats it as an injectable collaborator: production code uses
//! [`arxiv::ArxivGateway`], tests substitute a stub returning fixed
//! records. Any gateway failure propagates uncaught and aborts the
//! traversal in progress; there is no retry and no partial-result salvage.

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::record::ArticleRecord;

pub mod arxiv;


/// Normalized search access to a bibliographic service.
#[async_trait]
pub trait SearchGateway: Send + Sync {
    /// Search for articles matching `query`, returning at most
    /// `max_results` records in service order.
    async fn search(
        &self,
        query: &str,
        max_results: usize,
    ) -> Result<Vec<ArticleRecord>, GatewayError>;
}
