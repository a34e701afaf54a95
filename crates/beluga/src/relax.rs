//! The bounded relaxation engine shared by both public operations.

use rustc_hash::FxHashMap;
use std::hash::Hash;

use crate::graphlib::Graph;
use crate::util::DistanceMap;

/// Runs `|V| - 1` relaxation passes over the edge list.
///
/// Each pass walks the edges in insertion order; an edge `(u, w, c)` whose
/// tail has a finite distance `du` lowers `dist[w]` to `du + c` when that is
/// a strict improvement, recording `predecessor[w] = u` when a tree is being
/// tracked. Updates land in place, so later edges within a pass observe
/// values updated earlier in that same pass. Edges out of unreached vertices
/// contribute nothing.
///
/// The pass count is fixed: there is no convergence check or early exit, and
/// negative cycles are not detected. Absent a negative-cost cycle the table
/// has converged when the last pass finishes; with one, the caller inherits
/// whatever the final pass left behind.
pub(crate) fn relax_rounds<V>(
    g: &Graph<V>,
    dist: &mut DistanceMap<V>,
    mut predecessor: Option<&mut FxHashMap<V, V>>,
) where
    V: Eq + Hash + Clone,
{
    let rounds = g.node_count().saturating_sub(1);
    for round in 0..rounds {
        let mut updates: usize = 0;
        for (u, w, cost) in g.edges() {
            let Some(du) = dist.get(u).copied().flatten() else {
                continue;
            };
            let candidate = du + cost;
            let improves = match dist.get(w).copied().flatten() {
                Some(dw) => candidate < dw,
                None => true,
            };
            if !improves {
                continue;
            }
            dist.insert(w.clone(), Some(candidate));
            if let Some(tree) = predecessor.as_deref_mut() {
                tree.insert(w.clone(), u.clone());
            }
            updates += 1;
        }
        tracing::trace!(round, updates, "relaxation pass");
    }
}
