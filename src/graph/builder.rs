//! Build a weighted co-author graph from a finished article set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::graph::CoauthorGraph;
use crate::record::{ArticleSet, AuthorName};

/// How repeat appearances of the same article id are treated.
///
/// A crawl appends an article once per expanded co-author it was
/// discovered through, so a paper between two expanded authors typically
/// appears twice. `Preserve` keeps that multiplicity (each appearance
/// contributes to the pair weights, overweighting well-connected
/// articles); `DedupeById` keeps only the first record per article id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    #[default]
    Preserve,
    DedupeById,
}

/// Build the co-author graph: for every record, every unordered pair of
/// distinct normalized authors gains one shared article.
///
/// Author names are normalized and deduplicated per record before
/// pairing, so case variants of one name collapse into a single vertex,
/// never form a self-pair, and count at most once toward each of the
/// record's pair weights. Records with fewer than two distinct authors
/// contribute nothing — not even a vertex. Building twice from the same
/// set yields identical graphs.
pub fn build_author_graph(articles: &ArticleSet, policy: DuplicatePolicy) -> CoauthorGraph {
    let mut graph = CoauthorGraph::new();
    let mut seen_ids: HashSet<&str> = HashSet::new();

    for record in articles.iter() {
        if policy == DuplicatePolicy::DedupeById && !seen_ids.insert(record.id.as_str()) {
            continue;
        }

        // Distinct normalized names, first occurrence order; a repeated
        // spelling of one author must not double-count the record.
        let mut names: Vec<AuthorName> = Vec::new();
        for author in &record.authors {
            let name = AuthorName::new(author);
            if !names.contains(&name) {
                names.push(name);
            }
        }
        for i in 0..names.len() {
            for j in (i + 1)..names.len() {
                graph.increment_edge(&names[i], &names[j]);
            }
        }
    }

    graph
}
