#[cfg(test)]
mod tests {
    use std::collections::{HashMap, HashSet};
    use std::convert::Infallible;

    use async_trait::async_trait;

    use crate::traversal::bfs::{traverse, Expander};

    /// Expander over a fixed adjacency map, recording expansion order.
    struct MapExpander {
        adjacency: HashMap<&'static str, Vec<&'static str>>,
        expanded: Vec<String>,
    }

    impl MapExpander {
        fn new(edges: &[(&'static str, &[&'static str])]) -> Self {
            let adjacency = edges.iter().map(|(v, ns)| (*v, ns.to_vec())).collect();
            Self {
                adjacency,
                expanded: Vec::new(),
            }
        }
    }

    #[async_trait]
    impl Expander for MapExpander {
        type Vertex = String;
        type Error = Infallible;

        async fn expand(&mut self, vertex: &String) -> Result<HashSet<String>, Infallible> {
            self.expanded.push(vertex.clone());
            Ok(self
                .adjacency
                .get(vertex.as_str())
                .map(|ns| ns.iter().map(|n| n.to_string()).collect())
                .unwrap_or_default())
        }
    }

    fn set(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    /// max_depth 0: the root is expanded, its neighbors are discovered but
    /// never expanded themselves.
    #[tokio::test]
    async fn test_depth_zero_expands_only_root() {
        let mut expander = MapExpander::new(&[("x", &["y", "z"]), ("y", &["q"])]);
        let summary = traverse(&mut expander, "x".to_string(), 0).await.unwrap();

        assert_eq!(expander.expanded, vec!["x"]);
        assert_eq!(summary.discovered, set(&["x", "y", "z"]));
        assert_eq!(summary.expanded, 1);
    }

    /// Chain x—y, y—z at max_depth 1: y is discovered but never expanded,
    /// so z never appears anywhere.
    #[tokio::test]
    async fn test_chain_depth_one_never_reaches_grandchildren() {
        let mut expander = MapExpander::new(&[("x", &["x", "y"]), ("y", &["y", "z"])]);
        let summary = traverse(&mut expander, "x".to_string(), 1).await.unwrap();

        assert_eq!(expander.expanded, vec!["x"]);
        assert_eq!(summary.discovered, set(&["x", "y"]));
        assert!(!summary.discovered.contains("z"));
    }

    /// Depth 2 expands the second level and discovers (but does not
    /// expand) the third.
    #[tokio::test]
    async fn test_depth_two_expands_two_levels() {
        let mut expander =
            MapExpander::new(&[("x", &["y"]), ("y", &["z"]), ("z", &["w"])]);
        let summary = traverse(&mut expander, "x".to_string(), 2).await.unwrap();

        assert_eq!(expander.expanded, vec!["x", "y"]);
        assert_eq!(summary.discovered, set(&["x", "y", "z"]));
        assert_eq!(summary.levels, 2);
    }

    /// Already-discovered candidates are silently dropped: in a diamond
    /// (x→a, x→b, a→c, b→c) the shared child is expanded once.
    #[tokio::test]
    async fn test_diamond_expands_shared_vertex_once() {
        let mut expander = MapExpander::new(&[
            ("x", &["a", "b"]),
            ("a", &["c"]),
            ("b", &["c", "x"]),
            ("c", &[]),
        ]);
        let summary = traverse(&mut expander, "x".to_string(), 5).await.unwrap();

        let c_expansions = expander.expanded.iter().filter(|v| *v == "c").count();
        assert_eq!(c_expansions, 1);
        assert_eq!(summary.discovered, set(&["x", "a", "b", "c"]));
    }

    /// Expansion yielding nothing terminates immediately regardless of the
    /// depth budget.
    #[tokio::test]
    async fn test_empty_expansion_terminates_immediately() {
        let mut expander = MapExpander::new(&[]);
        let summary = traverse(&mut expander, "x".to_string(), 5).await.unwrap();

        assert_eq!(summary.discovered, set(&["x"]));
        assert_eq!(summary.expanded, 1);
        assert_eq!(summary.levels, 1);
    }

    /// Vertices within a level are expanded in discovery (FIFO) order.
    #[tokio::test]
    async fn test_fifo_order_within_level() {
        let mut expander = MapExpander::new(&[("x", &["a", "b", "c"])]);
        // HashSet iteration order is arbitrary, so seed the level directly
        // through a chain that discovers one vertex per expansion.
        let mut chain = MapExpander::new(&[("x", &["a"]), ("a", &["b"]), ("b", &["c"])]);
        traverse(&mut chain, "x".to_string(), 3).await.unwrap();
        assert_eq!(chain.expanded, vec!["x", "a", "b"]);

        // And the sibling case still expands everything exactly once.
        let summary = traverse(&mut expander, "x".to_string(), 5).await.unwrap();
        assert_eq!(summary.expanded, 4);
    }

    struct FailOnVertex {
        fail_on: &'static str,
        expanded: usize,
    }

    #[async_trait]
    impl Expander for FailOnVertex {
        type Vertex = String;
        type Error = String;

        async fn expand(&mut self, vertex: &String) -> Result<HashSet<String>, String> {
            if vertex == self.fail_on {
                return Err(format!("boom at {vertex}"));
            }
            self.expanded += 1;
            Ok([format!("{vertex}+")].into_iter().collect())
        }
    }

    /// The first expansion error aborts the whole traversal.
    #[tokio::test]
    async fn test_expansion_error_aborts_traversal() {
        let mut expander = FailOnVertex {
            fail_on: "x+",
            expanded: 0,
        };
        let result = traverse(&mut expander, "x".to_string(), 10).await;

        assert_eq!(result.unwrap_err(), "boom at x+");
        assert_eq!(expander.expanded, 1);
    }
}
