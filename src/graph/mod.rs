//! The weighted co-author graph and its construction.
//!
//! [`CoauthorGraph`] wraps a petgraph undirected graph and keeps the
//! author-name-to-node mapping alongside it. [`builder`] turns a finished
//! article set into a graph; [`dot`] renders one for external tooling.

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

use crate::record::AuthorName;

pub mod builder;
pub mod dot;


pub use builder::{build_author_graph, DuplicatePolicy};
pub use dot::{DotRenderer, GraphRenderer};

/// Simple weighted undirected co-authorship graph.
///
/// Vertices are normalized author names; an edge's weight counts the
/// articles its two endpoints co-appear in. Vertices only ever enter the
/// graph as edge endpoints, so an author who appears exclusively on
/// solo-authored articles has no vertex at all.
#[derive(Debug, Clone)]
pub struct CoauthorGraph {
    graph: UnGraph<String, u32>,
    index: HashMap<AuthorName, NodeIndex>,
}

impl Default for CoauthorGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CoauthorGraph {
    pub fn new() -> Self {
        Self {
            graph: UnGraph::new_undirected(),
            index: HashMap::new(),
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, author: &AuthorName) -> bool {
        self.index.contains_key(author)
    }

    /// Shared-article count between two authors, if they are connected.
    pub fn weight(&self, a: &AuthorName, b: &AuthorName) -> Option<u32> {
        let na = *self.index.get(a)?;
        let nb = *self.index.get(b)?;
        let edge = self.graph.find_edge(na, nb)?;
        self.graph.edge_weight(edge).copied()
    }

    /// Number of distinct co-authors an author is connected to.
    pub fn degree(&self, author: &AuthorName) -> usize {
        match self.index.get(author) {
            Some(&ix) => self.graph.neighbors(ix).count(),
            None => 0,
        }
    }

    /// All vertex names, in insertion order.
    pub fn authors(&self) -> impl Iterator<Item = &str> {
        self.graph.node_weights().map(String::as_str)
    }

    /// The underlying petgraph structure, for rendering and analysis.
    pub fn inner(&self) -> &UnGraph<String, u32> {
        &self.graph
    }

    /// Bump the edge between two distinct authors by one shared article,
    /// creating vertices and the edge as needed. Self-pairs are ignored —
    /// the graph never holds self-loops.
    pub fn increment_edge(&mut self, a: &AuthorName, b: &AuthorName) {
        if a == b {
            return;
        }
        let na = self.node(a);
        let nb = self.node(b);
        match self.graph.find_edge(na, nb) {
            Some(edge) => {
                if let Some(weight) = self.graph.edge_weight_mut(edge) {
                    *weight += 1;
                }
            }
            None => {
                self.graph.add_edge(na, nb, 1);
            }
        }
    }

    fn node(&mut self, author: &AuthorName) -> NodeIndex {
        if let Some(&ix) = self.index.get(author) {
            return ix;
        }
        let ix = self.graph.add_node(author.as_str().to_string());
        self.index.insert(author.clone(), ix);
        ix
    }
}
