//! Graph representations and the algorithms shared between them.
//!
//! Graph implementations are organized into categories:
//! - `basic`: the two concrete graphs and the algorithms written against [`Graph`]
//! - `access`: per-call vertex bookkeeping used by those algorithms

pub mod access;
pub mod basic;
mod snapshot;
mod traits;

pub use basic::{Bfs, DirectedGraph, Dfs, Distance, Mark, UndirectedGraph};
pub use snapshot::MAX_SNAPSHOT_VERTICES;
pub use traits::{Directed, EdgeType, Graph, Undirected};
