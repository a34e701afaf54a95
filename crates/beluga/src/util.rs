//! Helpers shared by the path solver and the potential finder.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Working distance table for a relaxation run. `None` marks a vertex that
/// has not been reached; arithmetic only ever happens on `Some` entries, so
/// no infinity sentinel exists to mishandle.
pub type DistanceMap<V> = FxHashMap<V, Option<f64>>;

/// Drops the vertices a relaxation run never reached and unwraps the rest.
///
/// `negate` flips the sign of every retained value; the potential finder
/// uses this because a potential is the negated virtual-source distance.
pub fn compact_distances<V>(dist: DistanceMap<V>, negate: bool) -> FxHashMap<V, f64>
where
    V: Eq + Hash,
{
    dist.into_iter()
        .filter_map(|(v, d)| d.map(|d| (v, if negate { -d } else { d })))
        .collect()
}
