//! Core trait for directed incidence graphs.
//!
//! This module defines the [`Graph`] trait: the complete contract that graph
//! algorithms are allowed to rely on. Algorithms in [`crate::algs`] are written
//! against this trait only, never against a concrete representation.

use crate::graph_error::GraphError;
use crate::topology::handle::{Edge, Vertex};
use crate::topology::label::Label;

/// Directed graph with payload-carrying vertices and edges, per-element
/// labels, and checked handles.
///
/// # Associated Types
/// - `VertexData`: payload stored on each vertex.
/// - `EdgeData`: payload stored on each edge.
///
/// # Handle validity
/// Every method that takes a [`Vertex`] or [`Edge`] rejects, with
/// [`GraphError::InvalidArgument`], a null handle, a handle issued by a
/// different graph, and a handle whose element has been removed. Checks run
/// before any state changes, so a failed call leaves the graph untouched.
///
/// # Edges
/// Edges are directed, never self-loops, and unique per ordered
/// `(from, to)` pair. Payloads play no part in duplicate detection.
pub trait Graph {
    type VertexData;
    type EdgeData;

    /// Insert a new isolated vertex carrying `data`.
    fn insert_vertex(&mut self, data: Self::VertexData) -> Vertex;

    /// Insert the directed edge `from → to` carrying `data`.
    ///
    /// Fails on a self-loop, an invalid endpoint, or an existing edge with the
    /// same ordered endpoints.
    fn insert_edge(
        &mut self,
        from: Vertex,
        to: Vertex,
        data: Self::EdgeData,
    ) -> Result<Edge, GraphError>;

    /// Remove an isolated vertex, returning its payload.
    ///
    /// Fails while the vertex still has incoming or outgoing edges.
    fn remove_vertex(&mut self, v: Vertex) -> Result<Self::VertexData, GraphError>;

    /// Remove an edge, detaching it from both endpoints, and return its payload.
    fn remove_edge(&mut self, e: Edge) -> Result<Self::EdgeData, GraphError>;

    /// Snapshot of the live vertices.
    fn vertices(&self) -> Vec<Vertex>;
    /// Snapshot of the live edges.
    fn edges(&self) -> Vec<Edge>;

    /// Edges leaving `v`.
    fn outgoing(&self, v: Vertex) -> Result<&[Edge], GraphError>;
    /// Edges entering `v`.
    fn incoming(&self, v: Vertex) -> Result<&[Edge], GraphError>;

    /// Source vertex of `e`.
    fn from(&self, e: Edge) -> Result<Vertex, GraphError>;
    /// Destination vertex of `e`.
    fn to(&self, e: Edge) -> Result<Vertex, GraphError>;

    /// Payload of `v`.
    fn vertex(&self, v: Vertex) -> Result<&Self::VertexData, GraphError>;
    /// Mutable payload of `v`.
    fn vertex_mut(&mut self, v: Vertex) -> Result<&mut Self::VertexData, GraphError>;
    /// Payload of `e`.
    fn edge(&self, e: Edge) -> Result<&Self::EdgeData, GraphError>;
    /// Mutable payload of `e`.
    fn edge_mut(&mut self, e: Edge) -> Result<&mut Self::EdgeData, GraphError>;

    /// Set the label of `v`. Passing `None` is rejected; labels are only
    /// ever cleared in bulk by [`Graph::clear_labels`].
    fn set_vertex_label(
        &mut self,
        v: Vertex,
        label: impl Into<Option<Label>>,
    ) -> Result<(), GraphError>;

    /// Set the label of `e`. Passing `None` is rejected.
    fn set_edge_label(&mut self, e: Edge, label: impl Into<Option<Label>>)
    -> Result<(), GraphError>;

    /// Current label of `v`, `None` if never set since the last clear.
    fn vertex_label(&self, v: Vertex) -> Result<Option<&Label>, GraphError>;
    /// Current label of `e`.
    fn edge_label(&self, e: Edge) -> Result<Option<&Label>, GraphError>;

    /// Reset every vertex and edge label to absent.
    fn clear_labels(&mut self);

    // --- provided helpers ---

    /// Number of live vertices.
    fn vertex_count(&self) -> usize {
        self.vertices().len()
    }

    /// Number of live edges.
    fn edge_count(&self) -> usize {
        self.edges().len()
    }

    /// True if `v` is a live vertex of this graph.
    fn contains_vertex(&self, v: Vertex) -> bool {
        self.vertex(v).is_ok()
    }

    /// True if `e` is a live edge of this graph.
    fn contains_edge(&self, e: Edge) -> bool {
        self.edge(e).is_ok()
    }

    /// The edge `from → to`, if one exists.
    fn find_edge(&self, from: Vertex, to: Vertex) -> Result<Option<Edge>, GraphError> {
        // validate `to` even when `from` has no outgoing edges
        self.incoming(to)?;
        for &e in self.outgoing(from)? {
            if self.to(e)? == to {
                return Ok(Some(e));
            }
        }
        Ok(None)
    }
}
