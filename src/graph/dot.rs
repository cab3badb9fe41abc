//! Rendering boundary: turn a co-author graph into a visual artifact.
//!
//! The core commits to nothing beyond [`GraphRenderer`]; the bundled
//! implementation emits Graphviz DOT, which any dot-compatible tool can
//! lay out. Output is deterministic (sorted vertices and edges) so
//! renderings diff cleanly between runs.

use petgraph::visit::EdgeRef;

use crate::graph::CoauthorGraph;
use crate::record::AuthorName;

/// Consumer-side interface for graph rendering.
///
/// `highlight` marks one author (typically the crawl root) for visual
/// emphasis; implementations ignore it when the author is not in the
/// graph.
pub trait GraphRenderer {
    fn render(&self, graph: &CoauthorGraph, highlight: Option<&AuthorName>) -> String;
}

/// Graphviz DOT renderer.
///
/// Vertices are filled ellipses, the highlighted vertex in a distinct
/// color; edge labels and pen widths carry the shared-article weight.
#[derive(Debug, Default, Clone, Copy)]
pub struct DotRenderer;

impl GraphRenderer for DotRenderer {
    fn render(&self, graph: &CoauthorGraph, highlight: Option<&AuthorName>) -> String {
        let inner = graph.inner();

        let mut names: Vec<&str> = inner.node_weights().map(String::as_str).collect();
        names.sort_unstable();

        let mut edges: Vec<(&str, &str, u32)> = inner
            .edge_references()
            .map(|edge| {
                let a = inner[edge.source()].as_str();
                let b = inner[edge.target()].as_str();
                // Canonical endpoint order; the graph is undirected.
                if a <= b {
                    (a, b, *edge.weight())
                } else {
                    (b, a, *edge.weight())
                }
            })
            .collect();
        edges.sort_unstable();

        let mut out = String::from("graph coauthors {\n");
        out.push_str("    node [shape=ellipse, style=filled, fillcolor=palegreen];\n");

        for name in names {
            let attrs = match highlight {
                Some(h) if h.as_str() == name => " [fillcolor=salmon]",
                _ => "",
            };
            out.push_str(&format!("    \"{}\"{};\n", escape(name), attrs));
        }

        for (a, b, weight) in edges {
            out.push_str(&format!(
                "    \"{}\" -- \"{}\" [label=\"{}\", penwidth={}];\n",
                escape(a),
                escape(b),
                weight,
                weight
            ));
        }

        out.push_str("}\n");
        out
    }
}

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}
