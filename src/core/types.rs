//! Core type definitions
//!
//! This module contains the value objects that flow through an analysis run:
//! the input dependency graph, the chains found by the detector and the ranked
//! report produced by the ranker.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Mapping from node name to the names it directly depends on
///
/// Dependency names do not have to be keys themselves. A name that only shows
/// up on the right-hand side is a leaf with no further dependencies.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DependencyGraph {
    nodes: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `name` is a key, with no dependencies if it was not one already
    pub fn add_node(&mut self, name: impl Into<String>) {
        self.nodes.entry(name.into()).or_default();
    }

    /// Record that `from` directly depends on `to`
    pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.nodes.entry(from.into()).or_default().insert(to.into());
    }

    /// Record every name in `deps` as a dependency of `from`
    pub fn extend_dependencies<I, S>(&mut self, from: impl Into<String>, deps: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes
            .entry(from.into())
            .or_default()
            .extend(deps.into_iter().map(Into::into));
    }

    /// Direct dependencies of `name`, or `None` when it is not a key
    pub fn dependencies_of(&self, name: &str) -> Option<&BTreeSet<String>> {
        self.nodes.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Iterate nodes in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.nodes.iter()
    }

    pub fn node_names(&self) -> impl Iterator<Item = &String> {
        self.nodes.keys()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(BTreeSet::len).sum()
    }
}

impl<K, V, S> FromIterator<(K, V)> for DependencyGraph
where
    K: Into<String>,
    V: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut graph = Self::new();
        for (name, deps) in iter {
            graph.extend_dependencies(name, deps);
        }
        graph
    }
}

impl From<BTreeMap<String, BTreeSet<String>>> for DependencyGraph {
    fn from(nodes: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { nodes }
    }
}

/// One circular path, starting and ending with the same target node
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CycleChain(Vec<String>);

impl CycleChain {
    /// Build `[target, ...chain, dep, target]`
    pub(crate) fn closing(target: &str, chain: &[&str], dep: &str) -> Self {
        let mut nodes = Vec::with_capacity(chain.len() + 3);
        nodes.push(target.to_string());
        nodes.extend(chain.iter().map(|name| name.to_string()));
        nodes.push(dep.to_string());
        nodes.push(target.to_string());
        Self(nodes)
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// The node this chain leaves from and returns to
    pub fn target(&self) -> &str {
        self.0.first().map(String::as_str).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl fmt::Display for CycleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" -> "))
    }
}

/// Per-node result of an analysis run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDependencyInfo {
    name: String,
    dependency_count: usize,
    dependency_names: Vec<String>,
    circular_dependency_count: usize,
    circular_dependency_descriptions: Vec<String>,
    chains: Vec<CycleChain>,
}

impl NodeDependencyInfo {
    /// Summarize the chains found for `name`
    ///
    /// The circular dependency count is the number of flattened chain
    /// elements, not the number of chains.
    pub fn new(
        name: impl Into<String>,
        dependencies: &BTreeSet<String>,
        chains: Vec<CycleChain>,
    ) -> Self {
        let circular_dependency_descriptions: Vec<String> = chains
            .iter()
            .flat_map(|chain| chain.nodes().iter().cloned())
            .collect();

        Self {
            name: name.into(),
            dependency_count: dependencies.len(),
            dependency_names: dependencies.iter().cloned().collect(),
            circular_dependency_count: circular_dependency_descriptions.len(),
            circular_dependency_descriptions,
            chains,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dependency_count(&self) -> usize {
        self.dependency_count
    }

    pub fn dependency_names(&self) -> &[String] {
        &self.dependency_names
    }

    pub fn circular_dependency_count(&self) -> usize {
        self.circular_dependency_count
    }

    /// All chains for this node concatenated in discovery order
    pub fn circular_dependency_descriptions(&self) -> &[String] {
        &self.circular_dependency_descriptions
    }

    pub fn chains(&self) -> &[CycleChain] {
        &self.chains
    }

    pub fn chain_count(&self) -> usize {
        self.chains.len()
    }

    pub fn has_cycles(&self) -> bool {
        self.circular_dependency_count > 0
    }

    /// Join the flattened chain elements, e.g. `A->B->A`
    pub fn circle_description(&self, separator: &str) -> String {
        self.circular_dependency_descriptions.join(separator)
    }
}

/// Ranked result of analyzing a whole graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    max_depth: usize,
    total_circular_dependency_count: usize,
    nodes: Vec<NodeDependencyInfo>,
}

impl AnalysisReport {
    /// `nodes` must already be in ranked order
    pub(crate) fn new(max_depth: usize, nodes: Vec<NodeDependencyInfo>) -> Self {
        let total_circular_dependency_count =
            nodes.iter().map(|n| n.circular_dependency_count).sum();
        Self {
            max_depth,
            total_circular_dependency_count,
            nodes,
        }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Sum of every node's circular dependency count
    pub fn total_circular_dependency_count(&self) -> usize {
        self.total_circular_dependency_count
    }

    /// Nodes ordered by descending count, then ascending name
    pub fn nodes(&self) -> &[NodeDependencyInfo] {
        &self.nodes
    }

    pub fn get(&self, name: &str) -> Option<&NodeDependencyInfo> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn cyclic_nodes(&self) -> impl Iterator<Item = &NodeDependencyInfo> {
        self.nodes.iter().filter(|n| n.has_cycles())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn cyclic_node_count(&self) -> usize {
        self.cyclic_nodes().count()
    }

    pub fn has_cycles(&self) -> bool {
        self.total_circular_dependency_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_graph_from_iter_merges_duplicates() {
        let graph: DependencyGraph = [("a", vec!["b"]), ("a", vec!["c"]), ("b", vec![])]
            .into_iter()
            .collect();

        assert_eq!(graph.len(), 2);
        let deps: Vec<_> = graph.dependencies_of("a").unwrap().iter().collect();
        assert_eq!(deps, vec!["b", "c"]);
        assert!(graph.dependencies_of("b").unwrap().is_empty());
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_dangling_dependency_is_not_a_node() {
        let mut graph = DependencyGraph::new();
        graph.add_dependency("a", "missing");

        assert!(graph.contains_node("a"));
        assert!(!graph.contains_node("missing"));
        assert!(graph.dependencies_of("missing").is_none());
    }

    #[test]
    fn test_cycle_chain_closing() {
        let chain = CycleChain::closing("a", &["b", "c"], "d");

        assert_eq!(chain.nodes(), ["a", "b", "c", "d", "a"]);
        assert_eq!(chain.target(), "a");
        assert_eq!(chain.to_string(), "a -> b -> c -> d -> a");
    }

    #[test]
    fn test_node_info_counts_flattened_elements() {
        let deps: BTreeSet<String> = ["b".to_string(), "c".to_string()].into();
        let chains = vec![
            CycleChain::closing("a", &[], "b"),
            CycleChain::closing("a", &["c"], "b"),
        ];

        let info = NodeDependencyInfo::new("a", &deps, chains);

        assert_eq!(info.dependency_count(), 2);
        assert_eq!(info.dependency_names(), ["b", "c"]);
        assert_eq!(info.chain_count(), 2);
        assert_eq!(info.circular_dependency_count(), 7);
        assert_eq!(info.circle_description("->"), "a->b->a->a->c->b->a");
    }

    #[test]
    fn test_report_total_and_lookup() {
        let empty = BTreeSet::new();
        let report = AnalysisReport::new(
            20,
            vec![
                NodeDependencyInfo::new("a", &empty, vec![CycleChain::closing("a", &[], "a")]),
                NodeDependencyInfo::new("b", &empty, Vec::new()),
            ],
        );

        assert_eq!(report.total_circular_dependency_count(), 3);
        assert_eq!(report.cyclic_node_count(), 1);
        assert!(report.get("b").is_some_and(|n| !n.has_cycles()));
        assert!(report.get("zzz").is_none());
    }
}
