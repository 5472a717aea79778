//! Single-source shortest paths over non-negative integer weights.

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt;

use num_traits::{CheckedAdd, PrimInt};
use serde::{Deserialize, Serialize};

use crate::graph::access::visit;
use crate::graph::Graph;
use crate::trace::log_trace;

/// Length of a shortest path, or `Infinite` when the target is unreachable.
///
/// `Finite` values order below `Infinite`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Distance<W> {
    /// Reachable at this total weight.
    Finite(W),
    /// Not reachable from the source.
    Infinite,
}

impl<W: Copy> Distance<W> {
    /// Returns the finite distance, if any.
    #[inline]
    pub fn finite(self) -> Option<W> {
        match self {
            Distance::Finite(w) => Some(w),
            Distance::Infinite => None,
        }
    }

    /// Returns `true` for a reachable target.
    #[inline]
    pub fn is_finite(&self) -> bool {
        matches!(self, Distance::Finite(_))
    }

    /// Returns `true` for an unreachable target.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        matches!(self, Distance::Infinite)
    }
}

impl<W> From<Option<W>> for Distance<W> {
    fn from(value: Option<W>) -> Self {
        value.map_or(Distance::Infinite, Distance::Finite)
    }
}

impl<W: fmt::Display> fmt::Display for Distance<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Distance::Finite(w) => w.fmt(f),
            Distance::Infinite => f.write_str("inf"),
        }
    }
}

/// Dijkstra's algorithm with lazy deletion.
///
/// Returns one entry per vertex id `0..graph.vertex_count()`. A vertex is settled
/// the first time it is popped from the min-heap; later, stale entries for it are
/// skipped. Every outgoing edge of a settled vertex is pushed without comparing
/// against the best known candidate. Sums that overflow `W` are not pushed.
///
/// An out-of-range `source` yields all `Infinite`.
///
/// ### Performance Characteristics
/// \(O((n + m) \log m)\) heap operations, plus the cost of [`Graph::neighbors`]
/// per settled vertex.
pub fn dijkstra<G>(graph: &G, source: usize) -> Vec<Distance<G::Weight>>
where
    G: Graph<Vertex = usize>,
    G::Weight: PrimInt,
{
    let n = graph.vertex_count();
    let mut dist = vec![Distance::Infinite; n];
    if !graph.contains_vertex(&source) {
        return dist;
    }

    let mut settled = graph.vertex_map::<bool>();
    let mut heap = BinaryHeap::new();
    heap.push(Reverse((num_traits::zero(), source)));

    while let Some(Reverse((d, u))) = heap.pop() {
        if !visit(&mut settled, &u) {
            continue;
        }
        dist[u] = Distance::Finite(d);

        for v in graph.neighbors(&u) {
            let Some(w) = graph.edge_weight(&u, &v) else {
                continue;
            };
            if let Some(candidate) = d.checked_add(&w) {
                heap.push(Reverse((candidate, v)));
            }
        }
    }

    log_trace!(
        source,
        settled = dist.iter().filter(|d| d.is_finite()).count(),
        "dijkstra finished"
    );
    dist
}
