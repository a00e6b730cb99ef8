//! Text I/O for graphs.
//!
//! This module provides the movie database reader that builds a bipartite
//! movie/actor graph, and a DOT writer for inspecting any graph in GraphViz.

pub mod dot;
pub mod movies;

pub use dot::{to_dot, write_dot};
pub use movies::{KEVIN_BACON, LoadOptions, MovieDatabase, MovieGraph};
