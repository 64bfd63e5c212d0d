//! # Statistics Ranking Module
//!
//! Runs the cycle detector for every node of a graph and orders the results
//! so that the most entangled nodes come first.
//!
//! A node's circular dependency count is the total number of names across all
//! of its chains (`[A, B, A]` counts 3), and the report total is the sum over
//! all nodes, so a cycle shared by several nodes is counted once per node.
//! Ties are broken by node name, which makes the ranking fully deterministic.
//!
//! ## Example
//!
//! ```
//! use depcircle::core::DependencyGraph;
//! use depcircle::ranker::build_report;
//!
//! let graph: DependencyGraph = [
//!     ("A", vec!["B"]),
//!     ("B", vec!["C"]),
//!     ("C", vec!["A"]),
//!     ("D", vec![]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let report = build_report(&graph, 20);
//!
//! assert_eq!(report.total_circular_dependency_count(), 12);
//! let ranked: Vec<_> = report.nodes().iter().map(|n| n.name()).collect();
//! assert_eq!(ranked, ["A", "B", "C", "D"]);
//! ```

mod ranker_impl;

pub use ranker_impl::*;
