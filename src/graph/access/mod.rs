//! Graph accessors and low-level building blocks.
//!
//! Graph implementations share their per-call bookkeeping (visited sets,
//! three-state marks) through the `VisitMap` abstraction defined here.

pub mod visited;

pub use visited::{visit, DenseMap, HashMarks, VisitMap};
