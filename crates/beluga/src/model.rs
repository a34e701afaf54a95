//! Result types for the path computations.
//!
//! These are intentionally lightweight and `Clone`-friendly plain-field
//! structs so callers can take the maps apart without ceremony.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::hash::Hash;

/// Minimum-cost paths from a start vertex, restricted to what it can reach.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPaths<V: Eq + Hash> {
    /// Cost of a minimum-cost path to each reachable vertex; the start maps
    /// to zero.
    pub cost: FxHashMap<V, f64>,
    /// Search tree over the same vertices: each entry names the vertex
    /// immediately before it on a minimum-cost path, and the start names
    /// itself.
    pub predecessor: FxHashMap<V, V>,
}
