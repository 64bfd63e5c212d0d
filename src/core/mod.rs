//! Core data types and structures
//!
//! This module contains the value objects produced and consumed by an
//! analysis run, separated from the search and ranking logic.

pub mod types;

pub use types::*;
