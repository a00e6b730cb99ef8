//! Re-export public algorithms.

pub mod traversal;

pub use traversal::{PathSolver, ShortestPath, shortest_path};
