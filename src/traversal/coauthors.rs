//! Co-author expansion policy and the crawl entry point.
//!
//! Expanding an author means asking the search gateway for their articles,
//! keeping the ones they actually co-authored, banking those records, and
//! handing the union of author names back to the engine as candidate
//! neighbors.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::GatewayError;
use crate::gateway::SearchGateway;
use crate::logger;
use crate::record::{ArticleSet, AuthorName};
use crate::traversal::bfs::{traverse, Expander, TraversalSummary};

/// Expands an author into their co-authors via the search gateway.
///
/// The expander owns the crawl's [`ArticleSet`] outright and appends every
/// kept record to it; callers reclaim the set with [`into_articles`] once
/// the traversal finishes. Appends are never deduplicated — an article
/// rediscovered through a second co-author lands again.
///
/// [`into_articles`]: CoauthorExpander::into_articles
pub struct CoauthorExpander<'a, G: SearchGateway + ?Sized> {
    gateway: &'a G,
    max_results: usize,
    articles: ArticleSet,
}

impl<'a, G: SearchGateway + ?Sized> CoauthorExpander<'a, G> {
    pub fn new(gateway: &'a G, max_results: usize) -> Self {
        Self {
            gateway,
            max_results,
            articles: ArticleSet::new(),
        }
    }

    /// Hand back everything accumulated so far.
    pub fn into_articles(self) -> ArticleSet {
        self.articles
    }
}

#[async_trait]
impl<'a, G: SearchGateway + ?Sized> Expander for CoauthorExpander<'a, G> {
    type Vertex = AuthorName;
    type Error = GatewayError;

    async fn expand(&mut self, author: &AuthorName) -> Result<HashSet<AuthorName>, GatewayError> {
        logger::debug(&format!("expanding author: {}", author));

        let results = self.gateway.search(author.as_str(), self.max_results).await?;

        // Keep only articles the queried author actually appears on; a
        // name search also surfaces title and abstract matches.
        let coauthored: Vec<_> = results
            .into_iter()
            .filter(|record| record.has_author(author))
            .collect();

        let mut neighbors: HashSet<AuthorName> = HashSet::new();
        for record in &coauthored {
            neighbors.extend(record.author_names());
        }
        // The queried author is part of the union; the engine's discovered
        // set keeps them from being re-expanded.

        logger::debug(&format!(
            "author {}: {} co-authored articles, {} names",
            author,
            coauthored.len(),
            neighbors.len()
        ));

        self.articles.append(coauthored);
        Ok(neighbors)
    }
}

/// Result of a finished crawl.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Every co-authored article appended during the crawl, duplicates
    /// included.
    pub articles: ArticleSet,
    /// Every author name discovered (expanded or not).
    pub discovered: HashSet<AuthorName>,
    /// Number of authors whose articles were fetched.
    pub authors_expanded: usize,
}

/// Crawl the co-author network rooted at `root`.
///
/// One gateway call per expanded author, strictly sequential. The first
/// gateway failure aborts the crawl and surfaces as the error; no partial
/// outcome is returned.
pub async fn crawl_coauthor_network<G>(
    gateway: &G,
    root: &AuthorName,
    max_depth: usize,
    max_results: usize,
) -> Result<CrawlOutcome, GatewayError>
where
    G: SearchGateway + ?Sized,
{
    logger::info(&format!(
        "crawling co-author network of {} (max_depth={}, max_results={})",
        root, max_depth, max_results
    ));

    let mut expander = CoauthorExpander::new(gateway, max_results);
    let TraversalSummary {
        discovered,
        expanded,
        ..
    } = traverse(&mut expander, root.clone(), max_depth).await?;

    Ok(CrawlOutcome {
        articles: expander.into_articles(),
        discovered,
        authors_expanded: expanded,
    })
}
