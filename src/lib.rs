//! # incidence-graph
//!
//! incidence-graph is a directed graph library built around incidence lists and
//! checked handles, together with a breadth-first shortest-path solver that
//! uses nothing but the graph's own public contract.
//!
//! ## Features
//! - `SparseGraph<V, E>`: vertices and edges carry arbitrary payloads; every
//!   vertex keeps its outgoing and incoming edges
//! - Handles that are only valid for the graph that issued them, and never
//!   after removal
//! - Rejection of self-loops and duplicate `(from, to)` edges
//! - A per-element label slot for transient algorithm state
//! - BFS path solving driven purely by distance labels
//! - A movie database reader, a GraphViz DOT writer, and the `kevin` binary
//!
//! ## Errors
//!
//! Graph operations report every contract violation as
//! [`GraphError::InvalidArgument`]. Validation happens before any mutation,
//! so a failed call leaves the graph unchanged.
//!
//! ## Usage
//!
//! ```rust
//! use incidence_graph::prelude::*;
//!
//! let mut g = SparseGraph::<&str, &str>::new();
//! let movie = g.insert_vertex("Movie1");
//! let actor = g.insert_vertex("ActorX");
//! g.insert_edge(movie, actor, "features").unwrap();
//! assert!(g.insert_edge(movie, actor, "again").is_err());
//! assert_eq!(g.outgoing(movie).unwrap().len(), 1);
//! ```

pub mod algs;
pub mod debug_invariants;
pub mod graph_error;
pub mod io;
pub mod topology;

pub use debug_invariants::DebugInvariants;
pub use graph_error::GraphError;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::algs::traversal::{PathSolver, ShortestPath, shortest_path};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::graph_error::GraphError;
    pub use crate::io::movies::{KEVIN_BACON, LoadOptions, MovieDatabase};
    pub use crate::topology::graph::{Graph, SparseGraph};
    pub use crate::topology::handle::{Edge, Vertex};
    pub use crate::topology::label::Label;
}
