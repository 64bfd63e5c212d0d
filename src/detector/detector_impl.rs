use std::collections::BTreeSet;

use tracing::debug;

use crate::constants::analysis::DEFAULT_MAX_DEPTH;
use crate::core::{CycleChain, DependencyGraph};

/// Find every circular chain that leads back to `target` within `max_depth`
pub fn find_cycles(graph: &DependencyGraph, target: &str, max_depth: usize) -> Vec<CycleChain> {
    CycleDetector::new(max_depth).find_cycles(graph, target)
}

/// Depth-bounded search for dependency chains that return to a target node
///
/// The detector holds no graph state, so a single value can be shared across
/// independent graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleDetector {
    max_depth: usize,
}

impl Default for CycleDetector {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl CycleDetector {
    /// Create a detector that descends at most `max_depth` levels
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Find the chains through `target`, in discovery order
    ///
    /// Dependencies are visited in lexicographic order. A node that is absent
    /// from the graph, or has no dependencies, can never close a chain and is
    /// skipped. The same cycle reached through different intermediate paths
    /// is reported once per path.
    pub fn find_cycles(&self, graph: &DependencyGraph, target: &str) -> Vec<CycleChain> {
        if self.max_depth == 0 {
            return Vec::new();
        }

        let Some(dependencies) = graph.dependencies_of(target) else {
            return Vec::new();
        };

        let mut search = ChainSearch {
            graph,
            target,
            max_depth: self.max_depth,
            found: Vec::new(),
        };
        search.descend(dependencies, &mut Vec::new(), 1);

        debug!(
            target,
            chains = search.found.len(),
            max_depth = self.max_depth,
            "cycle search finished"
        );

        search.found
    }
}

struct ChainSearch<'g> {
    graph: &'g DependencyGraph,
    target: &'g str,
    max_depth: usize,
    found: Vec<CycleChain>,
}

impl<'g> ChainSearch<'g> {
    /// `chain` holds the names on the current path, each at most once, and
    /// never the dependency being examined
    fn descend(
        &mut self,
        dependencies: &'g BTreeSet<String>,
        chain: &mut Vec<&'g str>,
        depth: usize,
    ) {
        for dep in dependencies {
            let Some(next) = self
                .graph
                .dependencies_of(dep)
                .filter(|deps| !deps.is_empty())
            else {
                continue;
            };

            if next.contains(self.target) && !chain.contains(&self.target) {
                self.found
                    .push(CycleChain::closing(self.target, chain, dep));
            }

            if depth < self.max_depth {
                let appended = !chain.contains(&dep.as_str());
                if appended {
                    chain.push(dep);
                }
                self.descend(next, chain, depth + 1);
                if appended {
                    chain.pop();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn graph(edges: &[(&str, &[&str])]) -> DependencyGraph {
        edges
            .iter()
            .map(|(name, deps)| (*name, deps.iter().copied()))
            .collect()
    }

    fn chains(found: &[CycleChain]) -> Vec<Vec<&str>> {
        found
            .iter()
            .map(|c| c.nodes().iter().map(String::as_str).collect())
            .collect()
    }

    #[test]
    fn test_no_cycles_in_linear_graph() {
        let graph = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &[])]);
        let detector = CycleDetector::default();

        for node in ["a", "b", "c"] {
            assert!(detector.find_cycles(&graph, node).is_empty());
        }
    }

    #[test]
    fn test_mutual_dependency() {
        let graph = graph(&[("a", &["b"]), ("b", &["a"])]);

        assert_eq!(chains(&find_cycles(&graph, "a", 20)), vec![vec!["a", "b", "a"]]);
        assert_eq!(chains(&find_cycles(&graph, "b", 20)), vec![vec!["b", "a", "b"]]);
    }

    #[test]
    fn test_mutual_dependency_at_depth_one() {
        let graph = graph(&[("a", &["b"]), ("b", &["a"])]);

        assert_eq!(chains(&find_cycles(&graph, "a", 1)), vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn test_self_reference() {
        let graph = graph(&[("a", &["a"])]);

        assert_eq!(chains(&find_cycles(&graph, "a", 20)), vec![vec!["a", "a", "a"]]);
    }

    #[test]
    fn test_three_node_cycle() {
        let graph = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"]), ("d", &[])]);

        assert_eq!(
            chains(&find_cycles(&graph, "a", 20)),
            vec![vec!["a", "b", "c", "a"]]
        );
        assert_eq!(
            chains(&find_cycles(&graph, "c", 20)),
            vec![vec!["c", "a", "b", "c"]]
        );
        assert!(find_cycles(&graph, "d", 20).is_empty());
    }

    #[test]
    fn test_depth_limits_chain_length() {
        let graph = graph(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);

        // Closing a->b->c->a needs one descent past the root level
        assert!(find_cycles(&graph, "a", 1).is_empty());
        assert_eq!(find_cycles(&graph, "a", 2).len(), 1);
    }

    #[test]
    fn test_zero_depth_finds_nothing() {
        let graph = graph(&[("a", &["a"])]);

        assert!(find_cycles(&graph, "a", 0).is_empty());
    }

    #[test]
    fn test_missing_target_has_no_cycles() {
        let graph = graph(&[("a", &["b"]), ("b", &["a"])]);

        assert!(find_cycles(&graph, "nope", 20).is_empty());
    }

    #[test]
    fn test_dangling_dependency_is_pruned() {
        let graph = graph(&[("a", &["ghost", "b"]), ("b", &["a"])]);

        assert_eq!(chains(&find_cycles(&graph, "a", 20)), vec![vec!["a", "b", "a"]]);
    }

    #[test]
    fn test_same_cycle_via_two_paths_is_reported_twice() {
        // a -> b -> d -> a and a -> c -> d -> a share the closing edge
        let graph = graph(&[("a", &["b", "c"]), ("b", &["d"]), ("c", &["d"]), ("d", &["a"])]);

        assert_eq!(
            chains(&find_cycles(&graph, "a", 20)),
            vec![vec!["a", "b", "d", "a"], vec!["a", "c", "d", "a"]]
        );
    }

    #[test]
    fn test_target_on_chain_suppresses_repeat() {
        // Once the search has walked back through a, reaching b again must
        // not report a -> b -> a -> b -> a.
        let graph = graph(&[("a", &["b"]), ("b", &["a"])]);

        for max_depth in [2, 5, 20] {
            assert_eq!(find_cycles(&graph, "a", max_depth).len(), 1);
        }
    }

    #[test]
    fn test_revisited_nodes_repeat_chains_at_deeper_levels() {
        // The chain is a set, so walking b -> c -> b does not grow it and the
        // same closing step is found again two levels further down.
        let graph = graph(&[("a", &["b"]), ("b", &["a", "c"]), ("c", &["b"])]);

        assert_eq!(
            chains(&find_cycles(&graph, "a", 3)),
            vec![vec!["a", "b", "a"], vec!["a", "b", "c", "b", "a"]]
        );
        assert_eq!(
            chains(&find_cycles(&graph, "a", 5)),
            vec![
                vec!["a", "b", "a"],
                vec!["a", "b", "c", "b", "a"],
                vec!["a", "b", "c", "b", "a"],
            ]
        );
    }

    #[test]
    fn test_chain_length_is_bounded_by_depth() {
        let graph = graph(&[
            ("a", &["b", "c"]),
            ("b", &["a", "c", "d"]),
            ("c", &["a", "b", "d"]),
            ("d", &["a", "b", "c"]),
        ]);

        for max_depth in 1..=6 {
            for node in ["a", "b", "c", "d"] {
                for chain in find_cycles(&graph, node, max_depth) {
                    assert!(chain.len() <= 2 * max_depth + 2);
                    assert_eq!(chain.nodes().first(), chain.nodes().last());
                    assert_eq!(chain.target(), node);
                }
            }
        }
    }

    #[test]
    fn test_search_is_deterministic() {
        let graph = graph(&[
            ("x", &["y", "z"]),
            ("y", &["z", "x"]),
            ("z", &["x", "y"]),
        ]);

        let first = find_cycles(&graph, "x", 8);
        let second = find_cycles(&graph, "x", 8);
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }
}
