//! Weighted directed-graph container APIs used by `beluga`.
//!
//! The container is deliberately small: a simple digraph whose vertices are
//! opaque hashable ids and whose edges carry a single `f64` cost. Node and
//! edge entries keep insertion order, so algorithms that walk the edge list
//! are deterministic for a given construction sequence.

pub mod graph;

pub use graph::{EdgeKey, Graph};
