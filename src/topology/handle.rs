//! `Vertex` and `Edge`: strong, zero-cost handles for graph elements
//!
//! A handle is a `(graph id, arena slot)` pair. The graph keeps the canonical
//! records; a handle only names one of them. Validation is therefore a pair
//! of cheap checks: does the graph id match the graph being asked, and is the
//! slot still occupied.
//!
//! This module provides:
//! - [`GraphId`], a process-unique identity for each graph instance. The raw
//!   value `0` is reserved as the null/sentinel id and is never issued.
//! - [`Vertex`] and [`Edge`] handles, including the [`Vertex::NULL`] and
//!   [`Edge::NULL`] sentinels that every graph operation rejects.
//! - Formatting traits so handles print compactly in logs and assertions.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_GRAPH_ID: AtomicU32 = AtomicU32::new(1);

/// Takes the next id from `counter`. The counter never wraps: once it
/// reaches `u32::MAX` every later call returns `None`.
fn issue_id(counter: &AtomicU32) -> Option<u32> {
    counter
        .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |n| n.checked_add(1))
        .ok()
}

/// Identity of one graph instance.
///
/// Ids are drawn from a process-wide counter, so two live graphs never share
/// one and a handle from one graph is always recognised as foreign by the
/// other.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct GraphId(u32);

impl GraphId {
    /// The reserved id carried by null handles.
    pub const NULL: GraphId = GraphId(0);

    /// Issues a fresh, never-before-seen graph id.
    ///
    /// # Panics
    ///
    /// Panics if the process has created more than `u32::MAX - 1` graphs.
    pub(crate) fn fresh() -> Self {
        match issue_id(&NEXT_GRAPH_ID) {
            Some(raw) => GraphId(raw),
            None => panic!("graph id space exhausted"),
        }
    }

    /// Returns the raw id value.
    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// True for the reserved null id.
    #[inline]
    pub const fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GraphId").field(&self.0).finish()
    }
}

/// Handle to a vertex owned by a graph.
///
/// `Vertex` is `Copy` and holds no borrow: it stays a well-formed value after
/// the vertex is removed, but every graph operation will reject it from then
/// on.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex {
    graph: GraphId,
    index: u32,
}

/// Handle to a directed edge owned by a graph.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    graph: GraphId,
    index: u32,
}

macro_rules! handle_impl {
    ($name:ident, $tag:literal) => {
        impl $name {
            /// The null handle; rejected by every graph operation.
            pub const NULL: $name = $name {
                graph: GraphId::NULL,
                index: 0,
            };

            #[inline]
            pub(crate) fn new(graph: GraphId, index: u32) -> Self {
                $name { graph, index }
            }

            /// Id of the graph that issued this handle.
            #[inline]
            pub const fn graph(self) -> GraphId {
                self.graph
            }

            /// Arena slot of the element inside its graph.
            #[inline]
            pub const fn index(self) -> usize {
                self.index as usize
            }

            /// True for the null handle.
            #[inline]
            pub const fn is_null(self) -> bool {
                self.graph.is_null()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                $name::NULL
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_null() {
                    write!(f, concat!($tag, "(null)"))
                } else {
                    write!(f, concat!($tag, "({}:{})"), self.graph.0, self.index)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(self, f)
            }
        }
    };
}

handle_impl!(Vertex, "Vertex");
handle_impl!(Edge, "Edge");

/// Converts an arena length into the next slot index.
///
/// # Panics
///
/// Panics once a graph has issued `u32::MAX` handles of one kind.
#[inline]
pub(crate) fn slot_index(len: usize) -> u32 {
    match u32::try_from(len) {
        Ok(i) => i,
        Err(_) => panic!("graph arena exceeded u32::MAX slots"),
    }
}
