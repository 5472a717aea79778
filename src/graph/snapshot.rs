//! Serde support.
//!
//! Graphs serialize as `{ "vertices": ..., "edges": [...] }`. Deserializing
//! replays the snapshot through the ordinary mutation methods, so a snapshot
//! containing self-loops, negative weights or dangling ids loads with those
//! entries dropped, exactly as if they had been passed to `add_edge`.
//!
//! A directed snapshot may declare at most [`MAX_SNAPSHOT_VERTICES`] vertices;
//! larger counts are rejected as a deserialization error instead of allocating
//! the matrix.

use std::hash::Hash;

use num_traits::PrimInt;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::graph::{DirectedGraph, Graph, UndirectedGraph};

/// Largest vertex count a directed snapshot may declare.
pub const MAX_SNAPSHOT_VERTICES: usize = 1 << 12;

#[derive(Serialize, Deserialize)]
struct DirectedSnapshot<W> {
    vertices: usize,
    edges: Vec<(usize, usize, W)>,
}

#[derive(Serialize, Deserialize)]
struct UndirectedSnapshot<V> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<W: PrimInt + Serialize> Serialize for DirectedGraph<W> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        DirectedSnapshot {
            vertices: self.vertex_count(),
            edges: self.edges(),
        }
        .serialize(serializer)
    }
}

impl<'de, W: PrimInt + Deserialize<'de>> Deserialize<'de> for DirectedGraph<W> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = DirectedSnapshot::<W>::deserialize(deserializer)?;
        if snapshot.vertices > MAX_SNAPSHOT_VERTICES {
            return Err(D::Error::custom(format_args!(
                "snapshot declares {} vertices, at most {MAX_SNAPSHOT_VERTICES} are supported",
                snapshot.vertices
            )));
        }
        let mut graph = DirectedGraph::with_vertices(snapshot.vertices);
        for (src, dst, weight) in snapshot.edges {
            graph.add_edge(src, dst, weight);
        }
        Ok(graph)
    }
}

impl<V> Serialize for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + Serialize,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        UndirectedSnapshot {
            vertices: self.vertices(),
            edges: self.edges(),
        }
        .serialize(serializer)
    }
}

impl<'de, V> Deserialize<'de> for UndirectedGraph<V>
where
    V: Clone + Eq + Hash + Ord + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let snapshot = UndirectedSnapshot::<V>::deserialize(deserializer)?;
        let mut graph = UndirectedGraph::new();
        for vertex in snapshot.vertices {
            graph.add_vertex(vertex);
        }
        for (u, v) in snapshot.edges {
            graph.add_edge(u, v);
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directed_snapshot_keeps_isolated_vertices() {
        let mut graph = DirectedGraph::<i64>::from_edges([(0, 1, 7)]);
        graph.add_vertex();
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(json, r#"{"vertices":3,"edges":[[0,1,7]]}"#);
        let back: DirectedGraph<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, graph);
    }

    #[test]
    fn invalid_snapshot_entries_are_dropped() {
        let json = r#"{"vertices":2,"edges":[[0,0,1],[0,1,-3],[1,5,2],[1,0,4]]}"#;
        let graph: DirectedGraph<i64> = serde_json::from_str(json).unwrap();
        assert_eq!(graph.edges(), vec![(1, 0, 4)]);
    }

    #[test]
    fn oversized_vertex_count_is_rejected() {
        let json = r#"{"vertices":18446744073709551615,"edges":[]}"#;
        let err = serde_json::from_str::<DirectedGraph<i64>>(json).unwrap_err();
        assert!(err.to_string().contains("at most 4096"));

        let json = format!(r#"{{"vertices":{},"edges":[]}}"#, MAX_SNAPSHOT_VERTICES + 1);
        assert!(serde_json::from_str::<DirectedGraph<i64>>(&json).is_err());

        let json = format!(r#"{{"vertices":{MAX_SNAPSHOT_VERTICES},"edges":[[0,1,1]]}}"#);
        let graph: DirectedGraph<i64> = serde_json::from_str(&json).unwrap();
        assert_eq!(graph.vertex_count(), MAX_SNAPSHOT_VERTICES);
    }

    #[test]
    fn undirected_snapshot_preserves_vertex_order() {
        let mut graph = UndirectedGraph::from_edges([("q", "g"), ("f", "g")]);
        graph.add_vertex("lonely");
        let json = serde_json::to_string(&graph).unwrap();
        assert_eq!(
            json,
            r#"{"vertices":["q","g","f","lonely"],"edges":[["q","g"],["g","f"]]}"#
        );
        let back: UndirectedGraph<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.vertices(), vec!["q", "g", "f", "lonely"]);
        assert_eq!(back.edge_count(), 2);
    }
}
