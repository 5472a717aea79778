//! Traversal iterators and reachability helpers for any [`Graph`].
//!
//! The walkers are deterministic: [`Dfs`] always descends into the smallest
//! unvisited neighbor first and [`Bfs`] enqueues neighbors in ascending order.
//! Each vertex is yielded exactly once, at the moment it is first visited.

use std::collections::VecDeque;

use crate::graph::access::{visit, VisitMap};
use crate::graph::Graph;

/// An iterator for Depth-First Search (DFS).
///
/// This iterator yields vertices in DFS preorder. It uses an internal stack and a
/// per-walk visited map; a vertex counts as visited when it is popped, so a vertex
/// pushed twice is still reported at its earliest DFS position.
pub struct Dfs<'g, G: Graph> {
    graph: &'g G,
    visited: G::Map<bool>,
    stack: Vec<G::Vertex>,
}

impl<'g, G: Graph> Dfs<'g, G> {
    /// Creates a new DFS iterator starting from `start`.
    ///
    /// The iterator is empty if `start` is not in the graph.
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        Self::with_visited(graph, start, graph.vertex_map())
    }

    /// Creates a DFS iterator that skips every vertex already marked in `visited`.
    pub fn with_visited(graph: &'g G, start: G::Vertex, visited: G::Map<bool>) -> Self {
        let mut stack = Vec::new();
        if graph.contains_vertex(&start) {
            stack.push(start);
        }
        Self {
            graph,
            visited,
            stack,
        }
    }

    /// Consumes the iterator and returns its visited map.
    pub fn into_visited(self) -> G::Map<bool> {
        self.visited
    }
}

impl<G: Graph> Iterator for Dfs<'_, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if !visit(&mut self.visited, &vertex) {
                continue;
            }

            // Push in descending order so the smallest neighbor is popped next.
            for next in self.graph.neighbors(&vertex).into_iter().rev() {
                if !self.visited.get(&next) {
                    self.stack.push(next);
                }
            }

            return Some(vertex);
        }
    }
}

/// An iterator for Breadth-First Search (BFS).
///
/// This iterator yields vertices in BFS order. Vertices are marked when
/// enqueued, so the queue never holds duplicates.
pub struct Bfs<'g, G: Graph> {
    graph: &'g G,
    visited: G::Map<bool>,
    queue: VecDeque<G::Vertex>,
}

impl<'g, G: Graph> Bfs<'g, G> {
    /// Creates a new BFS iterator starting from `start`.
    ///
    /// The iterator is empty if `start` is not in the graph.
    pub fn new(graph: &'g G, start: G::Vertex) -> Self {
        let mut visited = graph.vertex_map();
        let mut queue = VecDeque::new();

        if graph.contains_vertex(&start) {
            visit(&mut visited, &start);
            queue.push_back(start);
        }

        Self {
            graph,
            visited,
            queue,
        }
    }
}

impl<G: Graph> Iterator for Bfs<'_, G> {
    type Item = G::Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;

        for next in self.graph.neighbors(&vertex) {
            if visit(&mut self.visited, &next) {
                self.queue.push_back(next);
            }
        }

        Some(vertex)
    }
}

/// Drains `walk` into a vector, stopping right after `end` is yielded.
pub(crate) fn visit_until<V, I>(walk: I, end: Option<&V>) -> Vec<V>
where
    V: PartialEq,
    I: Iterator<Item = V>,
{
    let mut order = Vec::new();
    for vertex in walk {
        let reached = end == Some(&vertex);
        order.push(vertex);
        if reached {
            break;
        }
    }
    order
}

/// Returns `true` if every consecutive pair in `path` is joined by an edge.
pub fn is_valid_path<G: Graph + ?Sized>(graph: &G, path: &[G::Vertex]) -> bool {
    match path {
        [] => true,
        [only] => graph.contains_vertex(only),
        _ => path.windows(2).all(|step| graph.has_edge(&step[0], &step[1])),
    }
}

/// Partitions the vertices into the sets reachable by repeated DFS runs.
///
/// Runs start from the first not-yet-visited vertex in [`Graph::vertices`] order,
/// and each component lists its vertices in DFS order. On an undirected graph
/// these are exactly the connected components.
pub fn connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::Vertex>> {
    let mut visited = graph.vertex_map::<bool>();
    let mut components = Vec::new();

    for root in graph.vertices() {
        if visited.get(&root) {
            continue;
        }
        let mut walk = Dfs::with_visited(graph, root, visited);
        let component: Vec<_> = walk.by_ref().collect();
        visited = walk.into_visited();
        components.push(component);
    }

    components
}
