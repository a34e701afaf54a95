//! The core `Graph` container.
//!
//! Representation: entry vectors in insertion order plus Fx-hashed index maps
//! for O(1) lookup. Removals rebuild the affected index, which keeps the hot
//! insert/query paths allocation-free at the price of O(E) removal.

use rustc_hash::FxBuildHasher;
use std::hash::Hash;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Identifies a directed edge by its endpoints: tail `v`, head `w`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey<V> {
    pub v: V,
    pub w: V,
}

#[derive(Clone, Copy, Hash)]
struct EdgeKeyView<'a, V> {
    v: &'a V,
    w: &'a V,
}

impl<V: Eq + Hash> hashbrown::Equivalent<EdgeKey<V>> for EdgeKeyView<'_, V> {
    fn equivalent(&self, key: &EdgeKey<V>) -> bool {
        key.v == *self.v && key.w == *self.w
    }
}

#[derive(Debug, Clone)]
struct EdgeEntry<V> {
    key: EdgeKey<V>,
    cost: f64,
}

/// A simple weighted digraph over opaque vertex ids.
///
/// At most one edge exists per ordered `(v, w)` pair; setting it again
/// overwrites the cost. Setting an edge whose endpoints are not yet nodes
/// creates them, so edge endpoints are always part of the vertex set.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    nodes: Vec<V>,
    node_index: HashMap<V, usize>,

    edges: Vec<EdgeEntry<V>>,
    edge_index: HashMap<EdgeKey<V>, usize>,
}

impl<V> Default for Graph<V>
where
    V: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Graph<V>
where
    V: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            node_index: HashMap::default(),
            edges: Vec::new(),
            edge_index: HashMap::default(),
        }
    }

    /// Builds a graph from a vertex set and a `(v, w) -> cost` mapping.
    pub fn from_parts<I, C>(vertices: I, costs: C) -> Self
    where
        I: IntoIterator<Item = V>,
        C: IntoIterator<Item = ((V, V), f64)>,
    {
        let mut g = Self::new();
        for v in vertices {
            g.set_node(v);
        }
        for ((v, w), cost) in costs {
            g.set_edge(v, w, cost);
        }
        g
    }

    pub fn has_node(&self, id: &V) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn set_node(&mut self, id: V) -> &mut Self {
        if self.node_index.contains_key(&id) {
            return self;
        }
        let idx = self.nodes.len();
        self.nodes.push(id.clone());
        self.node_index.insert(id, idx);
        self
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Vertices in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &V> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> Vec<V> {
        self.nodes.clone()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges in insertion order as `(tail, head, cost)`.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, f64)> {
        self.edges.iter().map(|e| (&e.key.v, &e.key.w, e.cost))
    }

    pub fn set_edge(&mut self, v: V, w: V, cost: f64) -> &mut Self {
        self.set_node(v.clone());
        self.set_node(w.clone());

        let key = EdgeKey { v, w };
        if let Some(&idx) = self.edge_index.get(&key) {
            self.edges[idx].cost = cost;
            return self;
        }

        let idx = self.edges.len();
        self.edges.push(EdgeEntry {
            key: key.clone(),
            cost,
        });
        self.edge_index.insert(key, idx);
        self
    }

    pub fn has_edge(&self, v: &V, w: &V) -> bool {
        self.edge_index.contains_key(&EdgeKeyView { v, w })
    }

    pub fn edge(&self, v: &V, w: &V) -> Option<f64> {
        self.edge_index
            .get(&EdgeKeyView { v, w })
            .map(|&idx| self.edges[idx].cost)
    }

    pub fn remove_edge(&mut self, v: &V, w: &V) -> bool {
        let Some(idx) = self.edge_index.remove(&EdgeKeyView { v, w }) else {
            return false;
        };
        self.edges.remove(idx);
        self.edge_index.clear();
        for (i, e) in self.edges.iter().enumerate() {
            self.edge_index.insert(e.key.clone(), i);
        }
        true
    }

    pub fn remove_node(&mut self, id: &V) -> bool {
        let Some(idx) = self.node_index.remove(id) else {
            return false;
        };

        self.nodes.remove(idx);
        self.node_index.clear();
        for (i, n) in self.nodes.iter().enumerate() {
            self.node_index.insert(n.clone(), i);
        }

        // Remove incident edges.
        let removed_keys: Vec<EdgeKey<V>> = self
            .edges
            .iter()
            .filter(|e| e.key.v == *id || e.key.w == *id)
            .map(|e| e.key.clone())
            .collect();
        for k in removed_keys {
            let _ = self.remove_edge(&k.v, &k.w);
        }

        true
    }

    pub fn successors(&self, v: &V) -> Vec<&V> {
        self.edges
            .iter()
            .filter(|e| e.key.v == *v)
            .map(|e| &e.key.w)
            .collect()
    }

    pub fn predecessors(&self, v: &V) -> Vec<&V> {
        self.edges
            .iter()
            .filter(|e| e.key.w == *v)
            .map(|e| &e.key.v)
            .collect()
    }
}
