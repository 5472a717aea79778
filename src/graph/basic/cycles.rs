//! Cycle detection.
//!
//! Both checks use a three-state [`Mark`] per vertex, held in a map allocated for
//! the call, and scan every vertex as a potential root so disconnected parts of
//! the graph are covered.
//!
//! The two checks interpret the marks differently:
//! - directed: `Frontier` means "on the current DFS path"; reaching such a vertex
//!   again is a back edge.
//! - undirected: `Frontier` means "pushed but not yet popped". A vertex becomes
//!   `Finalized` as soon as it is popped, before its neighbors are pushed, so the
//!   edge back to the vertex that discovered it always lands on a finalized
//!   vertex and is not mistaken for a cycle.

use crate::graph::access::VisitMap;
use crate::graph::Graph;
use crate::trace::log_trace;

/// Exploration state of a vertex during cycle detection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mark {
    /// Not reached yet.
    #[default]
    Unvisited,
    /// Reached but not fully explored.
    Frontier,
    /// Fully explored.
    Finalized,
}

/// Returns `true` if the directed graph has a cycle.
///
/// Iterative DFS keeping, per stack frame, the neighbors still to expand. A vertex
/// is `Frontier` while its frame is on the stack and `Finalized` once popped.
pub fn has_directed_cycle<G: Graph>(graph: &G) -> bool {
    let mut marks = graph.vertex_map::<Mark>();

    for root in graph.vertices() {
        if marks.get(&root) != Mark::Unvisited {
            continue;
        }

        marks.set(&root, Mark::Frontier);
        let pending = graph.neighbors(&root).into_iter();
        let mut stack = vec![(root, pending)];

        while let Some((vertex, pending)) = stack.last_mut() {
            match pending.next() {
                Some(next) => match marks.get(&next) {
                    Mark::Frontier => {
                        log_trace!("directed back edge found");
                        return true;
                    }
                    Mark::Unvisited => {
                        marks.set(&next, Mark::Frontier);
                        let pending = graph.neighbors(&next).into_iter();
                        stack.push((next, pending));
                    }
                    Mark::Finalized => {}
                },
                None => {
                    marks.set(vertex, Mark::Finalized);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Returns `true` if the undirected graph has a cycle.
pub fn has_undirected_cycle<G: Graph>(graph: &G) -> bool {
    let mut marks = graph.vertex_map::<Mark>();
    let mut stack = Vec::new();

    for root in graph.vertices() {
        if marks.get(&root) != Mark::Unvisited {
            continue;
        }

        marks.set(&root, Mark::Frontier);
        stack.push(root);

        while let Some(vertex) = stack.pop() {
            marks.set(&vertex, Mark::Finalized);

            for next in graph.neighbors(&vertex).into_iter().rev() {
                match marks.get(&next) {
                    // Two finalized vertices both reach `next`.
                    Mark::Frontier => {
                        log_trace!("undirected cycle found");
                        return true;
                    }
                    Mark::Unvisited => {
                        marks.set(&next, Mark::Frontier);
                        stack.push(next);
                    }
                    Mark::Finalized => {}
                }
            }
        }
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, UndirectedGraph};

    #[test]
    fn diamond_is_not_a_directed_cycle() {
        let graph = DirectedGraph::<i64>::from_edges([(0, 1, 1), (0, 2, 1), (1, 2, 1)]);
        assert!(!has_directed_cycle(&graph));
    }

    #[test]
    fn two_vertex_loop_is_a_directed_cycle() {
        let graph = DirectedGraph::<i64>::from_edges([(0, 1, 1), (1, 0, 1)]);
        assert!(has_directed_cycle(&graph));
    }

    #[test]
    fn directed_cycle_reachable_only_from_later_root() {
        // 0 -> 1 is acyclic, the cycle 2 -> 3 -> 2 is unreachable from 0.
        let graph = DirectedGraph::<i64>::from_edges([(0, 1, 1), (2, 3, 1), (3, 2, 1)]);
        assert!(has_directed_cycle(&graph));
    }

    #[test]
    fn undirected_path_is_acyclic() {
        let graph = UndirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "d")]);
        assert!(!has_undirected_cycle(&graph));
    }

    #[test]
    fn undirected_triangle_and_square_are_cycles() {
        let triangle = UndirectedGraph::from_edges([("a", "b"), ("b", "c"), ("c", "a")]);
        assert!(has_undirected_cycle(&triangle));

        let square = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4), (4, 1)]);
        assert!(has_undirected_cycle(&square));
    }

    #[test]
    fn undirected_cycle_in_second_component() {
        let graph = UndirectedGraph::from_edges([(1, 2), (5, 6), (6, 7), (7, 5)]);
        assert!(has_undirected_cycle(&graph));
    }

    #[test]
    fn empty_graphs_have_no_cycle() {
        assert!(!has_directed_cycle(&DirectedGraph::<i64>::new()));
        assert!(!has_undirected_cycle(&UndirectedGraph::<u8>::new()));
    }
}
