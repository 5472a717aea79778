//! # `dugraph` - Directed and Undirected Graph Engine
//!
//! Two small graph representations sharing one analysis surface:
//!
//! - [`DirectedGraph`]: dense adjacency matrix, integer vertex ids `0..n`,
//!   non-negative integer edge weights, single-source shortest paths.
//! - [`UndirectedGraph`]: sparse adjacency lists, arbitrary hashable labels,
//!   unweighted edges, vertex removal and connected components.
//!
//! Both implement [`Graph`], which provides path validation, deterministic DFS
//! and BFS, and cycle detection.
//!
//! ## Guarantees
//!
//! - **No self-loops, no parallel edges.** Requests that would create one are
//!   ignored.
//! - **Symmetry.** In an [`UndirectedGraph`], `v` is a neighbor of `u` exactly
//!   when `u` is a neighbor of `v`, after any sequence of mutations.
//! - **Silent mutation.** `add_*`/`remove_*` never panic and never fail; an
//!   inapplicable request is a no-op. The `try_*` twins return a [`GraphError`]
//!   naming the reason.
//! - **Deterministic traversal.** DFS explores the smallest neighbor first and BFS
//!   enqueues neighbors in ascending order, so output sequences are reproducible.
//! - **No shared state.** Query methods return new vectors; per-call bookkeeping
//!   lives in the call.
//!
//! ## Features
//!
//! - `tracing`: emit `tracing` events for ignored mutations and algorithm results.
//! - `parallel`: compute [`DirectedGraph::distance_matrix`] rows on the rayon pool.
//!
//! ## Example
//!
//! ```rust
//! use dugraph::{DirectedGraph, Distance, Graph, UndirectedGraph};
//!
//! let mut g = DirectedGraph::<i64>::from_edges([
//!     (0, 1, 10), (4, 0, 12), (1, 4, 15), (4, 3, 3),
//!     (3, 1, 5), (2, 1, 23), (3, 2, 7),
//! ]);
//! assert_eq!(g.dfs(0, None), vec![0, 1, 4, 3, 2]);
//! assert!(g.has_cycle());
//! assert_eq!(g.dijkstra(0)[3], Distance::Finite(28));
//!
//! g.remove_edge(3, 1);
//! g.remove_edge(4, 0);
//! g.remove_edge(3, 2);
//! assert!(!g.has_cycle());
//!
//! let u = UndirectedGraph::from_edges([("A", "B"), ("B", "C"), ("D", "E")]);
//! assert_eq!(u.bfs("A", None), vec!["A", "B", "C"]);
//! assert_eq!(u.count_connected_components(), 2);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod graph;
mod trace;

pub use error::GraphError;
pub use graph::{DirectedGraph, Distance, Graph, UndirectedGraph};
