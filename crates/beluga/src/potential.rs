//! Feasible vertex potentials.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::relax;
use crate::util::{self, DistanceMap};

/// Computes a potential function for the graph: values such that every edge
/// `(v, w)` with cost `c` satisfies `potential[w] - potential[v] <= c`.
///
/// This solves shortest paths from an implicit virtual source wired to every
/// vertex with a zero-cost edge and negates the distances, so every vertex
/// gets a value and an isolated vertex gets zero.
///
/// If the graph contains a negative-cost cycle the relaxation has not
/// converged when the passes run out, and the returned values violate the
/// inequality somewhere. That case is not detected or signaled; the
/// no-negative-cycle precondition is the caller's to guarantee.
pub fn find_potential<V>(g: &Graph<V>) -> FxHashMap<V, f64>
where
    V: Eq + Hash + Clone,
{
    let mut dist: DistanceMap<V> = g.nodes().map(|v| (v.clone(), Some(0.0))).collect();

    relax::relax_rounds(g, &mut dist, None);

    util::compact_distances(dist, true)
}

/// Like [`find_potential`], but rejects a graph with no vertices.
pub fn try_find_potential<V>(g: &Graph<V>) -> Result<FxHashMap<V, f64>>
where
    V: Eq + Hash + Clone,
{
    if g.node_count() == 0 {
        return Err(Error::InvalidInput {
            message: "graph has no vertices".to_string(),
        });
    }
    Ok(find_potential(g))
}
