//! Arena-backed implementation of the [`Graph`] trait.
//!
//! [`SparseGraph`] stores vertex and edge records in two arenas and gives out
//! `(graph id, slot)` handles. Each vertex record carries its own outgoing and
//! incoming incidence lists, so adjacency queries cost `O(degree)` and never
//! touch unrelated vertices. Removed slots stay empty forever; a handle to a
//! removed element can never be confused with a newer one.

use std::collections::HashSet;

use super::graph_trait::Graph;
use crate::debug_invariants::DebugInvariants;
use crate::graph_error::GraphError;
use crate::topology::handle::{Edge, GraphId, Vertex, slot_index};
use crate::topology::label::Label;

const NULL_VERTEX: &str = "null vertex handle";
const FOREIGN_VERTEX: &str = "vertex belongs to a different graph";
const REMOVED_VERTEX: &str = "vertex has been removed";
const NULL_EDGE: &str = "null edge handle";
const FOREIGN_EDGE: &str = "edge belongs to a different graph";
const REMOVED_EDGE: &str = "edge has been removed";
const SELF_LOOP: &str = "self-loops are not allowed";
const DUPLICATE_EDGE: &str = "an edge with the same endpoints already exists";
const VERTEX_CONNECTED: &str = "vertex still has incident edges";
const ABSENT_LABEL: &str = "label value must not be absent";

#[derive(Debug)]
struct VertexRecord<V> {
    data: V,
    label: Option<Label>,
    outgoing: Vec<Edge>,
    incoming: Vec<Edge>,
}

#[derive(Debug)]
struct EdgeRecord<E> {
    data: E,
    label: Option<Label>,
    from: Vertex,
    to: Vertex,
}

/// A directed graph optimised for sparse incidence.
///
/// # Type Parameters
/// - `V`: payload stored on vertices.
/// - `E`: payload stored on edges.
///
/// `SparseGraph` is deliberately not `Clone`: a copy would share the graph
/// id, and handles issued by one would validate against the other.
#[derive(Debug)]
pub struct SparseGraph<V, E> {
    id: GraphId,
    vertices: Vec<Option<VertexRecord<V>>>,
    edges: Vec<Option<EdgeRecord<E>>>,
    live_vertices: usize,
    live_edges: usize,
}

impl<V, E> Default for SparseGraph<V, E> {
    fn default() -> Self {
        Self {
            id: GraphId::fresh(),
            vertices: Vec::new(),
            edges: Vec::new(),
            live_vertices: 0,
            live_edges: 0,
        }
    }
}

impl<V, E> SparseGraph<V, E> {
    /// Creates a new, empty graph with a fresh identity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertices` and `edges` records.
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            ..Self::default()
        }
    }

    /// Identity stamped into every handle this graph issues.
    #[inline]
    pub fn id(&self) -> GraphId {
        self.id
    }

    fn vertex_record(&self, v: Vertex) -> Result<&VertexRecord<V>, GraphError> {
        self.check_vertex_owner(v)?;
        self.vertices
            .get(v.index())
            .and_then(Option::as_ref)
            .ok_or(GraphError::InvalidArgument(REMOVED_VERTEX))
    }

    fn vertex_record_mut(&mut self, v: Vertex) -> Result<&mut VertexRecord<V>, GraphError> {
        self.check_vertex_owner(v)?;
        self.vertices
            .get_mut(v.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::InvalidArgument(REMOVED_VERTEX))
    }

    fn edge_record(&self, e: Edge) -> Result<&EdgeRecord<E>, GraphError> {
        self.check_edge_owner(e)?;
        self.edges
            .get(e.index())
            .and_then(Option::as_ref)
            .ok_or(GraphError::InvalidArgument(REMOVED_EDGE))
    }

    fn edge_record_mut(&mut self, e: Edge) -> Result<&mut EdgeRecord<E>, GraphError> {
        self.check_edge_owner(e)?;
        self.edges
            .get_mut(e.index())
            .and_then(Option::as_mut)
            .ok_or(GraphError::InvalidArgument(REMOVED_EDGE))
    }

    #[inline]
    fn check_vertex_owner(&self, v: Vertex) -> Result<(), GraphError> {
        if v.is_null() {
            Err(GraphError::InvalidArgument(NULL_VERTEX))
        } else if v.graph() != self.id {
            Err(GraphError::InvalidArgument(FOREIGN_VERTEX))
        } else {
            Ok(())
        }
    }

    #[inline]
    fn check_edge_owner(&self, e: Edge) -> Result<(), GraphError> {
        if e.is_null() {
            Err(GraphError::InvalidArgument(NULL_EDGE))
        } else if e.graph() != self.id {
            Err(GraphError::InvalidArgument(FOREIGN_EDGE))
        } else {
            Ok(())
        }
    }

    /// Whether `from → to` already exists, scanning the shorter of
    /// `from.outgoing` and `to.incoming`.
    fn has_edge_between(&self, from: &VertexRecord<V>, to: &VertexRecord<V>, pair: (Vertex, Vertex)) -> bool {
        let endpoints = |e: &Edge| {
            self.edges
                .get(e.index())
                .and_then(Option::as_ref)
                .map(|rec| (rec.from, rec.to))
        };
        if from.outgoing.len() <= to.incoming.len() {
            from.outgoing.iter().any(|e| endpoints(e).is_some_and(|(_, t)| t == pair.1))
        } else {
            to.incoming.iter().any(|e| endpoints(e).is_some_and(|(f, _)| f == pair.0))
        }
    }
}

impl<V, E> Graph for SparseGraph<V, E> {
    type VertexData = V;
    type EdgeData = E;

    fn insert_vertex(&mut self, data: V) -> Vertex {
        let v = Vertex::new(self.id, slot_index(self.vertices.len()));
        self.vertices.push(Some(VertexRecord {
            data,
            label: None,
            outgoing: Vec::new(),
            incoming: Vec::new(),
        }));
        self.live_vertices += 1;
        log::trace!("inserted {v:?}");
        v
    }

    fn insert_edge(&mut self, from: Vertex, to: Vertex, data: E) -> Result<Edge, GraphError> {
        let from_rec = self.vertex_record(from)?;
        let to_rec = self.vertex_record(to)?;
        if from == to {
            return Err(GraphError::InvalidArgument(SELF_LOOP));
        }
        if self.has_edge_between(from_rec, to_rec, (from, to)) {
            return Err(GraphError::InvalidArgument(DUPLICATE_EDGE));
        }

        let e = Edge::new(self.id, slot_index(self.edges.len()));
        self.edges.push(Some(EdgeRecord {
            data,
            label: None,
            from,
            to,
        }));
        self.live_edges += 1;
        self.vertex_record_mut(from)?.outgoing.push(e);
        self.vertex_record_mut(to)?.incoming.push(e);
        log::trace!("inserted {e:?}: {from:?} -> {to:?}");
        Ok(e)
    }

    fn remove_vertex(&mut self, v: Vertex) -> Result<V, GraphError> {
        let rec = self.vertex_record(v)?;
        if !rec.outgoing.is_empty() || !rec.incoming.is_empty() {
            return Err(GraphError::InvalidArgument(VERTEX_CONNECTED));
        }
        let rec = self
            .vertices
            .get_mut(v.index())
            .and_then(Option::take)
            .ok_or(GraphError::InvalidArgument(REMOVED_VERTEX))?;
        self.live_vertices -= 1;
        log::trace!("removed {v:?}");
        Ok(rec.data)
    }

    fn remove_edge(&mut self, e: Edge) -> Result<E, GraphError> {
        self.edge_record(e)?;
        let rec = self
            .edges
            .get_mut(e.index())
            .and_then(Option::take)
            .ok_or(GraphError::InvalidArgument(REMOVED_EDGE))?;
        self.live_edges -= 1;
        if let Ok(from) = self.vertex_record_mut(rec.from) {
            from.outgoing.retain(|&x| x != e);
        }
        if let Ok(to) = self.vertex_record_mut(rec.to) {
            to.incoming.retain(|&x| x != e);
        }
        log::trace!("removed {e:?}: {:?} -> {:?}", rec.from, rec.to);
        Ok(rec.data)
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.vertices
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| Vertex::new(self.id, slot_index(i)))
            .collect()
    }

    fn edges(&self) -> Vec<Edge> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_some())
            .map(|(i, _)| Edge::new(self.id, slot_index(i)))
            .collect()
    }

    fn outgoing(&self, v: Vertex) -> Result<&[Edge], GraphError> {
        Ok(&self.vertex_record(v)?.outgoing)
    }

    fn incoming(&self, v: Vertex) -> Result<&[Edge], GraphError> {
        Ok(&self.vertex_record(v)?.incoming)
    }

    fn from(&self, e: Edge) -> Result<Vertex, GraphError> {
        Ok(self.edge_record(e)?.from)
    }

    fn to(&self, e: Edge) -> Result<Vertex, GraphError> {
        Ok(self.edge_record(e)?.to)
    }

    fn vertex(&self, v: Vertex) -> Result<&V, GraphError> {
        Ok(&self.vertex_record(v)?.data)
    }

    fn vertex_mut(&mut self, v: Vertex) -> Result<&mut V, GraphError> {
        Ok(&mut self.vertex_record_mut(v)?.data)
    }

    fn edge(&self, e: Edge) -> Result<&E, GraphError> {
        Ok(&self.edge_record(e)?.data)
    }

    fn edge_mut(&mut self, e: Edge) -> Result<&mut E, GraphError> {
        Ok(&mut self.edge_record_mut(e)?.data)
    }

    fn set_vertex_label(
        &mut self,
        v: Vertex,
        label: impl Into<Option<Label>>,
    ) -> Result<(), GraphError> {
        let rec = self.vertex_record_mut(v)?;
        let label = label.into().ok_or(GraphError::InvalidArgument(ABSENT_LABEL))?;
        rec.label = Some(label);
        Ok(())
    }

    fn set_edge_label(
        &mut self,
        e: Edge,
        label: impl Into<Option<Label>>,
    ) -> Result<(), GraphError> {
        let rec = self.edge_record_mut(e)?;
        let label = label.into().ok_or(GraphError::InvalidArgument(ABSENT_LABEL))?;
        rec.label = Some(label);
        Ok(())
    }

    fn vertex_label(&self, v: Vertex) -> Result<Option<&Label>, GraphError> {
        Ok(self.vertex_record(v)?.label.as_ref())
    }

    fn edge_label(&self, e: Edge) -> Result<Option<&Label>, GraphError> {
        Ok(self.edge_record(e)?.label.as_ref())
    }

    fn clear_labels(&mut self) {
        for rec in self.vertices.iter_mut().flatten() {
            rec.label = None;
        }
        for rec in self.edges.iter_mut().flatten() {
            rec.label = None;
        }
    }

    fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    fn edge_count(&self) -> usize {
        self.live_edges
    }
}

impl<V, E> DebugInvariants for SparseGraph<V, E> {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "SparseGraph");
    }

    fn validate_invariants(&self) -> Result<(), GraphError> {
        let mut pairs = HashSet::new();
        let mut live_edges = 0usize;
        for (i, slot) in self.edges.iter().enumerate() {
            let Some(rec) = slot else { continue };
            live_edges += 1;
            let e = Edge::new(self.id, slot_index(i));
            if rec.from == rec.to {
                return Err(GraphError::InvalidArgument("stored edge is a self-loop"));
            }
            if !pairs.insert((rec.from, rec.to)) {
                return Err(GraphError::InvalidArgument("two stored edges share endpoints"));
            }
            let from = self
                .vertex_record(rec.from)
                .map_err(|_| GraphError::InvalidArgument("edge source is not a live vertex"))?;
            if !from.outgoing.contains(&e) {
                return Err(GraphError::InvalidArgument("edge missing from source outgoing list"));
            }
            let to = self
                .vertex_record(rec.to)
                .map_err(|_| GraphError::InvalidArgument("edge target is not a live vertex"))?;
            if !to.incoming.contains(&e) {
                return Err(GraphError::InvalidArgument("edge missing from target incoming list"));
            }
        }
        if live_edges != self.live_edges {
            return Err(GraphError::InvalidArgument("live edge counter out of sync"));
        }

        let (mut live_vertices, mut outs, mut ins) = (0usize, 0usize, 0usize);
        for (i, slot) in self.vertices.iter().enumerate() {
            let Some(rec) = slot else { continue };
            live_vertices += 1;
            let v = Vertex::new(self.id, slot_index(i));
            for &e in &rec.outgoing {
                let edge = self
                    .edge_record(e)
                    .map_err(|_| GraphError::InvalidArgument("outgoing list holds a dead edge"))?;
                if edge.from != v {
                    return Err(GraphError::InvalidArgument("outgoing edge does not start here"));
                }
            }
            for &e in &rec.incoming {
                let edge = self
                    .edge_record(e)
                    .map_err(|_| GraphError::InvalidArgument("incoming list holds a dead edge"))?;
                if edge.to != v {
                    return Err(GraphError::InvalidArgument("incoming edge does not end here"));
                }
            }
            outs += rec.outgoing.len();
            ins += rec.incoming.len();
        }
        if live_vertices != self.live_vertices {
            return Err(GraphError::InvalidArgument("live vertex counter out of sync"));
        }
        // each live edge appears exactly once per direction
        if outs != live_edges || ins != live_edges {
            return Err(GraphError::InvalidArgument("incidence lists hold repeated edges"));
        }
        Ok(())
    }
}
