//! Single-source shortest paths.

use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{Error, Result};
use crate::graphlib::Graph;
use crate::model::ShortestPaths;
use crate::relax;
use crate::util::{self, DistanceMap};

/// Computes minimum-cost paths from `start` to every vertex it can reach.
///
/// The returned maps contain exactly the reachable vertices: `cost[start]`
/// is zero, and the search tree is rooted at the start
/// (`predecessor[start] == start`). Unreachable vertices appear in neither
/// map.
///
/// Preconditions are the caller's: `start` must be a vertex of `g`, and no
/// negative-cost cycle may be reachable from it. Violations yield
/// unspecified (non-minimal, non-signaled) output rather than an error; use
/// [`try_shortest_paths`] to have the input shape checked up front.
pub fn shortest_paths<V>(g: &Graph<V>, start: &V) -> ShortestPaths<V>
where
    V: Eq + Hash + Clone,
{
    let mut dist: DistanceMap<V> = g.nodes().map(|v| (v.clone(), None)).collect();
    dist.insert(start.clone(), Some(0.0));

    let mut predecessor: FxHashMap<V, V> = FxHashMap::default();
    predecessor.insert(start.clone(), start.clone());

    relax::relax_rounds(g, &mut dist, Some(&mut predecessor));

    ShortestPaths {
        cost: util::compact_distances(dist, false),
        predecessor,
    }
}

/// Like [`shortest_paths`], but fails on malformed input instead of
/// producing unspecified output.
///
/// A negative-cost cycle is still not detected here; it remains a documented
/// caller-owned precondition, not an input-shape problem.
pub fn try_shortest_paths<V>(g: &Graph<V>, start: &V) -> Result<ShortestPaths<V>>
where
    V: Eq + Hash + Clone,
{
    if g.node_count() == 0 {
        return Err(Error::InvalidInput {
            message: "graph has no vertices".to_string(),
        });
    }
    if !g.has_node(start) {
        return Err(Error::InvalidInput {
            message: "start vertex is not in the graph".to_string(),
        });
    }
    Ok(shortest_paths(g, start))
}
