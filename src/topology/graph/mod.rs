pub mod graph_trait;
pub mod sparse;

// Re-export the core trait and arena impl at top level
pub use graph_trait::Graph;
pub use sparse::SparseGraph;
