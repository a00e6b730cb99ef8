//! Top-level module for graph topology abstractions.
//!
//! This module provides the core types and traits for representing directed
//! incidence graphs:
//! - Vertex and edge handles with per-graph identity
//! - Label values for transient algorithm state
//! - The `Graph` trait and the arena-backed `SparseGraph` implementation
//!
//! Most users will interact with the `Graph` trait and the `SparseGraph`
//! implementation for building and traversing graphs.

pub mod graph;
pub mod handle;
pub mod label;

pub use graph::*;
pub use handle::{Edge, GraphId, Vertex};
pub use label::Label;
