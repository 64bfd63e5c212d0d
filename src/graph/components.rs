//! Strongly connected component helpers

use std::collections::{BTreeSet, HashMap};

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::core::DependencyGraph;

/// Build a petgraph view of the dependency map, dangling names included
pub fn to_digraph(graph: &DependencyGraph) -> DiGraph<&str, ()> {
    let mut digraph = DiGraph::new();
    let mut indices: HashMap<&str, NodeIndex> = HashMap::new();

    for (name, deps) in graph.iter() {
        let from = *indices
            .entry(name.as_str())
            .or_insert_with(|| digraph.add_node(name.as_str()));

        for dep in deps {
            let to = *indices
                .entry(dep.as_str())
                .or_insert_with(|| digraph.add_node(dep.as_str()));
            digraph.add_edge(from, to, ());
        }
    }

    digraph
}

/// Names of the nodes that lie on at least one cycle
///
/// A node is cyclic when its strongly connected component has more than one
/// member or when it depends on itself. Every other node is unable to reach
/// itself again, whatever the search depth.
pub fn cyclic_nodes(graph: &DependencyGraph) -> BTreeSet<String> {
    let digraph = to_digraph(graph);

    tarjan_scc(&digraph)
        .into_iter()
        .filter(|scc| scc.len() > 1 || digraph.contains_edge(scc[0], scc[0]))
        .flatten()
        .map(|idx| digraph[idx].to_string())
        .collect()
}
