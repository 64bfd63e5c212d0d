//! # Cycle Detection Module
//!
//! This module finds the circular dependency chains that lead back to a given
//! node.
//!
//! ## Algorithm
//!
//! The detector runs a depth-first search from the target's direct
//! dependencies. It keeps the chain of names on the current path and records
//! `[target, ...chain, dep, target]` whenever `dep` depends on the target and
//! the target is not already on the chain. The visited set is scoped to the
//! current path rather than the whole search, so a node can be revisited
//! along different branches and the same cycle may be reported more than
//! once. Descent stops after `max_depth` levels, which bounds both the work
//! and the recursion depth on densely connected graphs.
//!
//! ## Example
//!
//! ```
//! use depcircle::core::DependencyGraph;
//! use depcircle::detector::CycleDetector;
//!
//! let graph: DependencyGraph = [
//!     ("orders", vec!["payments"]),
//!     ("payments", vec!["ledger"]),
//!     ("ledger", vec!["orders"]),
//! ]
//! .into_iter()
//! .collect();
//!
//! let detector = CycleDetector::new(20);
//! let chains = detector.find_cycles(&graph, "orders");
//!
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].to_string(), "orders -> payments -> ledger -> orders");
//! ```

mod detector_impl;

pub use detector_impl::*;
