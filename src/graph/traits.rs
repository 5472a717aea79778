//! The capability set shared by every graph in this crate.
//!
//! Both representations (dense weighted matrix, sparse labelled lists) expose
//! the same inspect / traverse / detect-cycle surface through [`Graph`]. Only the
//! storage primitives are implemented per type; traversal and cycle detection
//! are written once against this trait.

use crate::graph::access::VisitMap;
use crate::graph::basic::algorithms::{self, Bfs, Dfs};
use crate::graph::basic::cycles;

/// Marker trait for graph edge directionality.
pub trait EdgeType {
    /// Returns true if the graph is directed.
    fn is_directed() -> bool;
}

/// Marker for directed graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directed;

/// Marker for undirected graphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Undirected;

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

/// A finite simple graph: no self-loops, at most one edge per vertex pair.
///
/// Query methods return freshly built vectors; nothing hands out references into
/// the graph's storage.
pub trait Graph {
    /// Vertex identifier.
    type Vertex: Clone + Eq + Ord;

    /// Edge payload: a weight type for weighted graphs, `()` for unweighted ones.
    type Weight: Copy;

    /// Edge as reported by [`Graph::edges`].
    type Edge;

    /// Directionality marker, [`Directed`] or [`Undirected`].
    type Ty: EdgeType;

    /// Per-call vertex bookkeeping storage.
    type Map<T: Copy + Default>: VisitMap<Self::Vertex, T>;

    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of edges. An undirected edge counts once.
    fn edge_count(&self) -> usize;

    /// Returns `true` if `vertex` is currently in the graph.
    fn contains_vertex(&self, vertex: &Self::Vertex) -> bool;

    /// Returns the payload of the edge `from -> to`, or `None` if there is no such
    /// edge (including when either vertex is absent).
    fn edge_weight(&self, from: &Self::Vertex, to: &Self::Vertex) -> Option<Self::Weight>;

    /// Returns the neighbors of `vertex` in ascending order.
    ///
    /// Absent vertices have no neighbors.
    fn neighbors(&self, vertex: &Self::Vertex) -> Vec<Self::Vertex>;

    /// Returns all vertices in the graph's iteration order.
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Returns every edge exactly once.
    fn edges(&self) -> Vec<Self::Edge>;

    /// Allocates empty bookkeeping sized for this graph.
    fn vertex_map<T: Copy + Default>(&self) -> Self::Map<T>;

    /// Returns `true` if the edge `from -> to` exists.
    #[inline]
    fn has_edge(&self, from: &Self::Vertex, to: &Self::Vertex) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Returns `true` if `path` can be walked edge by edge.
    ///
    /// The empty path is always valid; a single vertex is valid iff it exists.
    fn is_valid_path(&self, path: &[Self::Vertex]) -> bool {
        algorithms::is_valid_path(self, path)
    }

    /// Lazy depth-first walk from `start`, smallest neighbor first.
    fn dfs_iter(&self, start: Self::Vertex) -> Dfs<'_, Self>
    where
        Self: Sized,
    {
        Dfs::new(self, start)
    }

    /// Lazy breadth-first walk from `start`, neighbors in ascending order.
    fn bfs_iter(&self, start: Self::Vertex) -> Bfs<'_, Self>
    where
        Self: Sized,
    {
        Bfs::new(self, start)
    }

    /// Depth-first visitation order from `start`, stopping once `end` is visited.
    ///
    /// Returns an empty vector if `start` is not in the graph.
    fn dfs(&self, start: Self::Vertex, end: Option<Self::Vertex>) -> Vec<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::visit_until(self.dfs_iter(start), end.as_ref())
    }

    /// Breadth-first visitation order from `start`, stopping once `end` is visited.
    ///
    /// Returns an empty vector if `start` is not in the graph.
    fn bfs(&self, start: Self::Vertex, end: Option<Self::Vertex>) -> Vec<Self::Vertex>
    where
        Self: Sized,
    {
        algorithms::visit_until(self.bfs_iter(start), end.as_ref())
    }

    /// Returns `true` if the graph contains at least one cycle.
    ///
    /// Directed graphs look for a back edge to a vertex still on the DFS path;
    /// undirected graphs ignore the edge leading back to an already processed
    /// vertex, since every undirected edge is seen from both ends.
    fn has_cycle(&self) -> bool
    where
        Self: Sized,
    {
        if Self::Ty::is_directed() {
            cycles::has_directed_cycle(self)
        } else {
            cycles::has_undirected_cycle(self)
        }
    }
}
