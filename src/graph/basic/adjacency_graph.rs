//! A dynamic adjacency-list undirected graph with arbitrary vertex labels.
//!
//! This representation prioritizes **dynamic updates** (edge/vertex insertion and
//! deletion). Each undirected edge `{u, v}` is stored twice, `v` in `u`'s list and
//! `u` in `v`'s list, and every mutation keeps the two halves in sync.
//!
//! Vertices iterate in insertion order, which fixes the output order of
//! [`Graph::vertices`], [`Graph::edges`] and component discovery.

use std::hash::Hash;

use indexmap::IndexMap;

use crate::error::{GraphError, Result};
use crate::graph::access::HashMarks;
use crate::graph::basic::algorithms;
use crate::graph::{Graph, Undirected};
use crate::trace::{log_trace, rejected};

/// An undirected, unweighted graph whose vertices are labels of type `V`.
///
/// Invalid mutations (self-loops, duplicate or missing edges, unknown vertices)
/// are silent no-ops; the `try_*` variants report the reason instead.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(1)\) amortized | \(O(\deg)\) per neighbor when resetting an existing label |
/// | `remove_vertex` | \(O(\sum \deg)\) | Touches each former neighbor's list |
/// | `add_edge` | \(O(\text{degree})\) | Checks for existence first |
/// | `remove_edge` | \(O(\text{degree})\) | Linear scan of both lists |
/// | `neighbors` | \(O(d \log d)\) | Sorted copy of the list |
/// | `edges` | \(O(n + m)\) | Each edge reported once |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndirectedGraph<V: Hash + Eq> {
    adjacency: IndexMap<V, Vec<V>>,
}

impl<V: Clone + Eq + Hash + Ord> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Clone + Eq + Hash + Ord> UndirectedGraph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: IndexMap::new(),
        }
    }

    /// Builds a graph by applying [`UndirectedGraph::add_edge`] to each pair.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds `vertex` with no incident edges.
    ///
    /// If `vertex` already exists it keeps its position in the vertex order, but
    /// every edge touching it is removed (from both endpoints).
    pub fn add_vertex(&mut self, vertex: V) {
        let Some(list) = self.adjacency.get_mut(&vertex) else {
            self.adjacency.insert(vertex, Vec::new());
            return;
        };

        let former = std::mem::take(list);
        if !former.is_empty() {
            log_trace!(dropped = former.len(), "add_vertex reset an existing vertex");
        }
        for neighbor in &former {
            self.detach(neighbor, &vertex);
        }
    }

    /// Adds the edge `{u, v}`, creating missing endpoints.
    ///
    /// Does nothing for a self-loop or an edge that already exists.
    pub fn add_edge(&mut self, u: V, v: V) {
        if let Err(err) = self.try_add_edge(u, v) {
            rejected("add_edge", err);
        }
    }

    /// Checked form of [`UndirectedGraph::add_edge`].
    ///
    /// Missing endpoints are created even when the edge turns out to be a
    /// duplicate; a self-loop creates nothing.
    ///
    /// # Errors
    /// [`GraphError::SelfLoop`] or [`GraphError::DuplicateEdge`].
    pub fn try_add_edge(&mut self, u: V, v: V) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop);
        }

        let u_list = self.adjacency.entry(u.clone()).or_default();
        if u_list.contains(&v) {
            return Err(GraphError::DuplicateEdge);
        }
        u_list.push(v.clone());
        self.adjacency.entry(v).or_default().push(u);
        Ok(())
    }

    /// Removes the edge `{u, v}` if present.
    pub fn remove_edge(&mut self, u: &V, v: &V) {
        if let Err(err) = self.try_remove_edge(u, v) {
            rejected("remove_edge", err);
        }
    }

    /// Checked form of [`UndirectedGraph::remove_edge`].
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] or [`GraphError::MissingEdge`].
    pub fn try_remove_edge(&mut self, u: &V, v: &V) -> Result<()> {
        if !self.adjacency.contains_key(u) || !self.adjacency.contains_key(v) {
            return Err(GraphError::UnknownVertex);
        }
        if !self.detach(u, v) {
            return Err(GraphError::MissingEdge);
        }
        self.detach(v, u);
        Ok(())
    }

    /// Removes `vertex` and all edges incident to it.
    pub fn remove_vertex(&mut self, vertex: &V) {
        if let Err(err) = self.try_remove_vertex(vertex) {
            rejected("remove_vertex", err);
        }
    }

    /// Checked form of [`UndirectedGraph::remove_vertex`].
    ///
    /// Remaining vertices keep their relative order.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`].
    pub fn try_remove_vertex(&mut self, vertex: &V) -> Result<()> {
        let neighbors = self
            .adjacency
            .shift_remove(vertex)
            .ok_or(GraphError::UnknownVertex)?;
        for neighbor in &neighbors {
            self.detach(neighbor, vertex);
        }
        Ok(())
    }

    /// Returns the neighbors of `vertex` in insertion order.
    pub fn neighbors_of(&self, vertex: &V) -> Vec<V> {
        self.adjacency.get(vertex).cloned().unwrap_or_default()
    }

    /// Returns the degree of `vertex`, or `None` if it does not exist.
    pub fn degree(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get(vertex).map(Vec::len)
    }

    /// Returns the vertex sets of the connected components.
    ///
    /// Components appear in the order of their first vertex; each lists its
    /// vertices in DFS order from that vertex.
    pub fn connected_components(&self) -> Vec<Vec<V>> {
        algorithms::connected_components(self)
    }

    /// Returns the number of connected components.
    ///
    /// Every isolated vertex is a component of its own.
    pub fn count_connected_components(&self) -> usize {
        let count = self.connected_components().len();
        log_trace!(count, "connected components counted");
        count
    }

    /// Removes `target` from `owner`'s list. Returns `true` if it was there.
    fn detach(&mut self, owner: &V, target: &V) -> bool {
        let Some(list) = self.adjacency.get_mut(owner) else {
            return false;
        };
        match list.iter().position(|n| n == target) {
            Some(pos) => {
                list.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl<V: Clone + Eq + Hash + Ord> Graph for UndirectedGraph<V> {
    type Vertex = V;
    type Weight = ();
    type Edge = (V, V);
    type Ty = Undirected;
    type Map<T: Copy + Default> = HashMarks<V, T>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    #[inline]
    fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<()> {
        self.adjacency.get(from)?.contains(to).then_some(())
    }

    fn neighbors(&self, vertex: &V) -> Vec<V> {
        let mut neighbors = self.neighbors_of(vertex);
        neighbors.sort_unstable();
        neighbors
    }

    fn vertices(&self) -> Vec<V> {
        self.adjacency.keys().cloned().collect()
    }

    /// Each edge is reported once, oriented from the endpoint that comes first in
    /// vertex order.
    fn edges(&self) -> Vec<(V, V)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (index, (u, list)) in self.adjacency.iter().enumerate() {
            for v in list {
                // The earlier endpoint already reported this edge.
                if self.adjacency.get_index_of(v).is_some_and(|other| other > index) {
                    edges.push((u.clone(), v.clone()));
                }
            }
        }
        edges
    }

    fn vertex_map<T: Copy + Default>(&self) -> HashMarks<V, T> {
        HashMarks::with_capacity(self.adjacency.len())
    }
}
