//! Level-synchronized breadth-first discovery over a lazily revealed graph.
//!
//! Vertices exist only once an expansion reveals them, so the engine
//! cannot know the graph up front; it discovers it one level at a time.
//! Depth is tracked with two explicit frontier buffers — the level being
//! expanded and the level being built — swapped when the current level
//! drains. Expansion is strictly serialized: one vertex at a time, awaited
//! to completion, which is what makes the level bookkeeping exact.

use std::collections::HashSet;
use std::hash::Hash;

use async_trait::async_trait;

/// Neighbor-expansion policy for one vertex type.
///
/// `expand` returns the candidate neighbors of a vertex; the engine drops
/// candidates it has already discovered. Implementations are expected to
/// accumulate their own domain results (the engine carries none) and may
/// perform I/O. An error aborts the whole traversal immediately.
#[async_trait]
pub trait Expander {
    type Vertex: Eq + Hash + Clone + Send + Sync;
    type Error: Send;

    async fn expand(
        &mut self,
        vertex: &Self::Vertex,
    ) -> Result<HashSet<Self::Vertex>, Self::Error>;
}

/// What a finished traversal observed.
#[derive(Debug, Clone)]
pub struct TraversalSummary<V> {
    /// Every vertex ever seen: expanded vertices plus the unexpanded rim.
    pub discovered: HashSet<V>,
    /// Number of vertices that were expanded.
    pub expanded: usize,
    /// Number of levels that were expanded.
    pub levels: usize,
}

/// Breadth-first traversal from `root` with depth-limited expansion: the
/// level at depth `d` is expanded iff `d == 0 || d < max_depth`.
///
/// Consequences of that rule:
/// - the root is always expanded, even at `max_depth` 0;
/// - vertices at the depth limit are discovered but never expanded, so
///   with `max_depth` 1 the root's neighbors enter the summary while
///   their own neighbors never surface;
/// - `max_depth` 0 and 1 behave identically.
///
/// Within a level vertices are expanded in the order they were
/// discovered. Candidates already in the discovered set are silently
/// dropped; re-expansion cannot happen. The first expansion error aborts
/// the traversal and discards nothing the expander already accumulated —
/// that is the expander's concern.
pub async fn traverse<X>(
    expander: &mut X,
    root: X::Vertex,
    max_depth: usize,
) -> Result<TraversalSummary<X::Vertex>, X::Error>
where
    X: Expander + Send,
{
    let mut discovered: HashSet<X::Vertex> = HashSet::new();
    discovered.insert(root.clone());

    let mut current = vec![root];
    let mut depth = 0usize;
    let mut expanded = 0usize;

    while !current.is_empty() && (depth == 0 || depth < max_depth) {
        let mut next = Vec::new();
        for vertex in current.drain(..) {
            let candidates = expander.expand(&vertex).await?;
            expanded += 1;
            for candidate in candidates {
                if !discovered.contains(&candidate) {
                    discovered.insert(candidate.clone());
                    next.push(candidate);
                }
            }
        }
        current = next;
        depth += 1;
    }

    Ok(TraversalSummary {
        discovered,
        expanded,
        levels: depth,
    })
}
