//! Basic graph implementations.
//!
//! This module contains the two concrete representations and the traversal,
//! cycle-detection and shortest-path algorithms built on top of them.

pub mod adjacency_graph;
pub mod algorithms;
pub mod cycles;
pub mod matrix_graph;
pub mod shortest_path;

pub use adjacency_graph::UndirectedGraph;
pub use algorithms::{Bfs, Dfs};
pub use cycles::Mark;
pub use matrix_graph::DirectedGraph;
pub use shortest_path::Distance;
