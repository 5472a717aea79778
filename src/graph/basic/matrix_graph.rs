//! A dense adjacency-matrix directed graph with integer edge weights.
//!
//! Vertices are the ids `0..vertex_count()`. Cell `(i, j)` holds the weight of
//! the edge `i -> j`; a zero cell means "no edge". A weight of zero is therefore
//! indistinguishable from an absent edge: `add_edge(i, j, 0)` leaves the cell
//! empty.

use num_traits::PrimInt;

use crate::error::{GraphError, Result};
use crate::graph::access::DenseMap;
use crate::graph::basic::shortest_path::{self, Distance};
use crate::graph::{Directed, Graph};
use crate::trace::rejected;

/// A directed, weighted graph stored as an adjacency matrix.
///
/// Invalid mutations (self-loops, negative weights, unknown vertices, missing
/// edges) are silent no-ops; the `try_*` variants report the reason instead.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `add_vertex` | \(O(n)\) | Grows every row by one cell |
/// | `add_edge` | \(O(1)\) | Inserts or overwrites the weight |
/// | `remove_edge` | \(O(1)\) | Zeroes the cell |
/// | `edge_weight` | \(O(1)\) | Direct cell read |
/// | `neighbors` | \(O(n)\) | Row scan, ascending by construction |
/// | `edges` | \(O(n^2)\) | Row-major scan |
/// | `dijkstra` | \(O(n^2 + m \log m)\) | Lazy-deletion heap |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectedGraph<W = i64> {
    matrix: Vec<Vec<W>>,
}

impl<W: PrimInt> Default for DirectedGraph<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: PrimInt> DirectedGraph<W> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self { matrix: Vec::new() }
    }

    /// Creates a graph with `vertex_count` vertices and zero edges.
    pub fn with_vertices(vertex_count: usize) -> Self {
        Self {
            matrix: vec![vec![W::zero(); vertex_count]; vertex_count],
        }
    }

    /// Builds a graph from `(src, dst, weight)` triples.
    ///
    /// The graph gets `max(src, dst) + 1` vertices over all triples; each triple
    /// is then applied with [`DirectedGraph::add_edge`], so invalid ones are skipped.
    /// A triple naming `usize::MAX` cannot be sized for and is skipped as well.
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        let edges: Vec<_> = edges.into_iter().collect();
        let vertex_count = edges
            .iter()
            .filter_map(|&(src, dst, _)| src.max(dst).checked_add(1))
            .max()
            .unwrap_or(0);

        let mut graph = Self::with_vertices(vertex_count);
        for (src, dst, weight) in edges {
            graph.add_edge(src, dst, weight);
        }
        graph
    }

    /// Appends a new vertex and returns the vertex count after the addition.
    ///
    /// The new vertex's id is the previous count.
    pub fn add_vertex(&mut self) -> usize {
        for row in &mut self.matrix {
            row.push(W::zero());
        }
        let count = self.matrix.len() + 1;
        self.matrix.push(vec![W::zero(); count]);
        count
    }

    /// Inserts the edge `src -> dst` or overwrites its weight.
    ///
    /// Does nothing for a self-loop, a negative weight, or an unknown vertex.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: W) {
        if let Err(err) = self.try_add_edge(src, dst, weight) {
            rejected("add_edge", err);
        }
    }

    /// Inserts `src -> dst` with weight one.
    pub fn add_unit_edge(&mut self, src: usize, dst: usize) {
        self.add_edge(src, dst, W::one());
    }

    /// Checked form of [`DirectedGraph::add_edge`].
    ///
    /// # Errors
    /// [`GraphError::SelfLoop`], [`GraphError::NegativeWeight`] or
    /// [`GraphError::VertexOutOfRange`]; the graph is unchanged in every case.
    pub fn try_add_edge(&mut self, src: usize, dst: usize, weight: W) -> Result<()> {
        if src == dst {
            return Err(GraphError::SelfLoop);
        }
        if weight < W::zero() {
            return Err(GraphError::NegativeWeight);
        }
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        self.matrix[src][dst] = weight;
        Ok(())
    }

    /// Removes the edge `src -> dst` if present.
    pub fn remove_edge(&mut self, src: usize, dst: usize) {
        if let Err(err) = self.try_remove_edge(src, dst) {
            rejected("remove_edge", err);
        }
    }

    /// Checked form of [`DirectedGraph::remove_edge`].
    ///
    /// # Errors
    /// [`GraphError::VertexOutOfRange`] or [`GraphError::MissingEdge`].
    pub fn try_remove_edge(&mut self, src: usize, dst: usize) -> Result<()> {
        self.check_vertex(src)?;
        self.check_vertex(dst)?;

        let cell = &mut self.matrix[src][dst];
        if cell.is_zero() {
            return Err(GraphError::MissingEdge);
        }
        *cell = W::zero();
        Ok(())
    }

    /// Returns the out-degree of `vertex`, or `None` if it does not exist.
    pub fn out_degree(&self, vertex: usize) -> Option<usize> {
        let row = self.matrix.get(vertex)?;
        Some(row.iter().filter(|w| !w.is_zero()).count())
    }

    /// Returns the in-degree of `vertex`, or `None` if it does not exist.
    pub fn in_degree(&self, vertex: usize) -> Option<usize> {
        if vertex >= self.matrix.len() {
            return None;
        }
        Some(self.matrix.iter().filter(|row| !row[vertex].is_zero()).count())
    }

    /// Shortest distances from `src` to every vertex.
    ///
    /// Entry `i` is the length of the shortest path `src ~> i`, or
    /// [`Distance::Infinite`] if `i` is unreachable.
    pub fn dijkstra(&self, src: usize) -> Vec<Distance<W>> {
        shortest_path::dijkstra(self, src)
    }

    /// Shortest distances between every ordered pair of vertices.
    ///
    /// Row `s` equals `self.dijkstra(s)`. With the `parallel` feature the rows
    /// are computed on the rayon pool.
    pub fn distance_matrix(&self) -> Vec<Vec<Distance<W>>>
    where
        W: Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            (0..self.matrix.len())
                .into_par_iter()
                .map(|src| self.dijkstra(src))
                .collect()
        }
        #[cfg(not(feature = "parallel"))]
        {
            (0..self.matrix.len()).map(|src| self.dijkstra(src)).collect()
        }
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        let count = self.matrix.len();
        if vertex < count {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange { vertex, count })
        }
    }
}

impl<W: PrimInt> Graph for DirectedGraph<W> {
    type Vertex = usize;
    type Weight = W;
    type Edge = (usize, usize, W);
    type Ty = Directed;
    type Map<T: Copy + Default> = DenseMap<T>;

    #[inline]
    fn vertex_count(&self) -> usize {
        self.matrix.len()
    }

    fn edge_count(&self) -> usize {
        self.matrix
            .iter()
            .map(|row| row.iter().filter(|w| !w.is_zero()).count())
            .sum()
    }

    #[inline]
    fn contains_vertex(&self, vertex: &usize) -> bool {
        *vertex < self.matrix.len()
    }

    #[inline]
    fn edge_weight(&self, from: &usize, to: &usize) -> Option<W> {
        let weight = *self.matrix.get(*from)?.get(*to)?;
        (!weight.is_zero()).then_some(weight)
    }

    fn neighbors(&self, vertex: &usize) -> Vec<usize> {
        self.matrix.get(*vertex).map_or_else(Vec::new, |row| {
            row.iter()
                .enumerate()
                .filter(|(_, w)| !w.is_zero())
                .map(|(dst, _)| dst)
                .collect()
        })
    }

    fn vertices(&self) -> Vec<usize> {
        (0..self.matrix.len()).collect()
    }

    fn edges(&self) -> Vec<(usize, usize, W)> {
        let mut edges = Vec::new();
        for (src, row) in self.matrix.iter().enumerate() {
            for (dst, &weight) in row.iter().enumerate() {
                if !weight.is_zero() {
                    edges.push((src, dst, weight));
                }
            }
        }
        edges
    }

    fn vertex_map<T: Copy + Default>(&self) -> DenseMap<T> {
        DenseMap::new(self.matrix.len())
    }
}
