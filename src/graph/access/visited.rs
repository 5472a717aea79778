//! Per-call vertex bookkeeping for traversals.
//!
//! Every traversal and cycle check allocates a fresh map, so graphs never hold
//! visited state between calls. Two storage choices are provided:
//! - `DenseMap`: a `Vec<T>` indexed by integer vertex id
//! - `HashMarks`: a hash map keyed by arbitrary vertex labels
//!
//! Unset vertices read as `T::default()`.

use std::collections::HashMap;
use std::hash::Hash;

/// Vertex-indexed scratch state.
pub trait VisitMap<V, T: Copy> {
    /// Returns the value stored for `vertex`, or `T::default()` if none.
    fn get(&self, vertex: &V) -> T;

    /// Stores `value` for `vertex`.
    fn set(&mut self, vertex: &V, value: T);

    /// Stores `value` and returns the previous value.
    #[inline]
    fn replace(&mut self, vertex: &V, value: T) -> T {
        let old = self.get(vertex);
        self.set(vertex, value);
        old
    }
}

/// Marks `vertex` as visited. Returns `true` iff it was not visited before.
#[inline]
pub fn visit<V, M: VisitMap<V, bool>>(map: &mut M, vertex: &V) -> bool {
    !map.replace(vertex, true)
}

/// Dense per-vertex slots for graphs whose vertices are `0..n`.
#[derive(Debug, Clone)]
pub struct DenseMap<T> {
    slots: Vec<T>,
}

impl<T: Copy + Default> DenseMap<T> {
    /// Creates a map with `len` slots, all `T::default()`.
    pub fn new(len: usize) -> Self {
        Self {
            slots: vec![T::default(); len],
        }
    }

    /// Number of slots.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the map has no slots.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<T: Copy + Default> VisitMap<usize, T> for DenseMap<T> {
    #[inline(always)]
    fn get(&self, vertex: &usize) -> T {
        self.slots.get(*vertex).copied().unwrap_or_default()
    }

    #[inline(always)]
    fn set(&mut self, vertex: &usize, value: T) {
        if *vertex >= self.slots.len() {
            self.slots.resize(*vertex + 1, T::default());
        }
        self.slots[*vertex] = value;
    }
}

/// Sparse per-vertex state for labelled graphs.
#[derive(Debug, Clone)]
pub struct HashMarks<V, T> {
    marks: HashMap<V, T>,
}

impl<V: Eq + Hash, T> HashMarks<V, T> {
    /// Creates an empty map sized for `capacity` vertices.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            marks: HashMap::with_capacity(capacity),
        }
    }
}

impl<V: Clone + Eq + Hash, T: Copy + Default> VisitMap<V, T> for HashMarks<V, T> {
    #[inline]
    fn get(&self, vertex: &V) -> T {
        self.marks.get(vertex).copied().unwrap_or_default()
    }

    #[inline]
    fn set(&mut self, vertex: &V, value: T) {
        match self.marks.get_mut(vertex) {
            Some(slot) => *slot = value,
            None => {
                self.marks.insert(vertex.clone(), value);
            }
        }
    }
}
