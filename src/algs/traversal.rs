//! Label-driven BFS shortest paths over any [`Graph`].
//!
//! The traversal keeps no visited set of its own. A vertex counts as reached
//! exactly when it carries an integer label, and that label is its BFS
//! distance from the source. Path reconstruction walks those labels back
//! from the target through incoming edges.
//!
//! Because labels live in the graph, a solve starts by clearing every label.

use std::collections::VecDeque;

use crate::graph_error::GraphError;
use crate::topology::graph::Graph;
use crate::topology::handle::Vertex;
use crate::topology::label::Label;

/// One shortest path found by [`PathSolver`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPath {
    /// Vertices from the target back to the source, both inclusive.
    pub vertices: Vec<Vertex>,
    /// Number of edges on the path.
    pub distance: u64,
}

impl ShortestPath {
    /// Hop count in a bipartite graph, where every real-world step crosses
    /// two edges (actor → movie → actor).
    #[inline]
    pub fn hops(&self) -> u64 {
        self.distance / 2
    }

    /// The vertex the search reached, i.e. the first path entry.
    pub fn target(&self) -> Option<Vertex> {
        self.vertices.first().copied()
    }

    /// The vertex the search started from, i.e. the last path entry.
    pub fn source(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }
}

/// Builder for a single source-to-target BFS.
///
/// ```rust
/// use incidence_graph::algs::traversal::PathSolver;
/// use incidence_graph::topology::graph::{Graph, SparseGraph};
/// let mut g = SparseGraph::<&str, &str>::new();
/// let a = g.insert_vertex("a");
/// let b = g.insert_vertex("b");
/// g.insert_edge(a, b, "ab").unwrap();
/// let path = PathSolver::new(&mut g).source(a).target(b).solve().unwrap().unwrap();
/// assert_eq!(path.vertices, vec![b, a]);
/// ```
pub struct PathSolver<'a, G: Graph> {
    graph: &'a mut G,
    source: Vertex,
    target: Vertex,
}

impl<'a, G: Graph> PathSolver<'a, G> {
    pub fn new(graph: &'a mut G) -> Self {
        Self {
            graph,
            source: Vertex::NULL,
            target: Vertex::NULL,
        }
    }
    pub fn source(mut self, v: Vertex) -> Self {
        self.source = v;
        self
    }
    pub fn target(mut self, v: Vertex) -> Self {
        self.target = v;
        self
    }

    /// Run the search.
    ///
    /// Returns `Ok(None)` when the target is unreachable, and
    /// [`GraphError::NotFound`] without touching any label when either
    /// endpoint is not a live vertex of the graph.
    pub fn solve(self) -> Result<Option<ShortestPath>, GraphError> {
        let PathSolver {
            graph,
            source,
            target,
        } = self;
        let Some(distance) = label_distances(graph, source, target)? else {
            log::debug!("{target:?} unreachable from {source:?}");
            return Ok(None);
        };
        let vertices = reconstruct_path(graph, target)?;
        log::debug!(
            "{source:?} -> {target:?}: distance {distance}, {} vertices",
            vertices.len()
        );
        Ok(Some(ShortestPath {
            vertices,
            distance,
        }))
    }
}

/// Convenience wrapper for [`PathSolver`].
pub fn shortest_path<G: Graph>(
    graph: &mut G,
    source: Vertex,
    target: Vertex,
) -> Result<Option<ShortestPath>, GraphError> {
    PathSolver::new(graph).source(source).target(target).solve()
}

/// BFS distance carried by `v`, if it has been reached.
pub fn distance<G: Graph>(graph: &G, v: Vertex) -> Result<Option<u64>, GraphError> {
    Ok(graph
        .vertex_label(v)?
        .and_then(Label::as_int)
        .and_then(|d| u64::try_from(d).ok()))
}

/// Label every vertex reached from `source` with its BFS distance, stopping
/// as soon as `target` leaves the queue.
///
/// Returns the target's distance, or `None` if the queue ran dry first.
pub fn label_distances<G: Graph>(
    graph: &mut G,
    source: Vertex,
    target: Vertex,
) -> Result<Option<u64>, GraphError> {
    if !graph.contains_vertex(source) {
        return Err(GraphError::NotFound(format!("source {source:?}")));
    }
    if !graph.contains_vertex(target) {
        return Err(GraphError::NotFound(format!("target {target:?}")));
    }

    graph.clear_labels();
    graph.set_vertex_label(source, Label::Int(0))?;
    let mut queue = VecDeque::from([source]);

    while let Some(u) = queue.pop_front() {
        let d = distance(graph, u)?.ok_or(GraphError::InvalidArgument(
            "queued vertex carries no distance label",
        ))?;
        if u == target {
            return Ok(Some(d));
        }
        let next = graph
            .outgoing(u)?
            .iter()
            .map(|&e| graph.to(e))
            .collect::<Result<Vec<_>, _>>()?;
        for w in next {
            if graph.vertex_label(w)?.is_none() {
                graph.set_vertex_label(w, Label::Int(dist_label(d + 1)?))?;
                queue.push_back(w);
            }
        }
        log::trace!("expanded {u:?} at distance {d}, queue length {}", queue.len());
    }
    Ok(None)
}

/// Walk distance labels back from `target` to the distance-0 vertex.
///
/// At each step the first incoming edge whose source is one closer to the
/// start is taken, so the result is *a* shortest path, not a canonical one.
pub fn reconstruct_path<G: Graph>(graph: &G, target: Vertex) -> Result<Vec<Vertex>, GraphError> {
    let total = distance(graph, target)?.ok_or(GraphError::InvalidArgument(
        "target carries no distance label",
    ))?;
    // a caller-set label can be arbitrarily large; a real path never exceeds V
    let cap = usize::try_from(total).map_or(usize::MAX, |t| t.saturating_add(1));
    let mut path = Vec::with_capacity(cap.min(graph.vertex_count()));
    let mut current = target;
    for i in (0..=total).rev() {
        path.push(current);
        if i == 0 {
            break;
        }
        let mut predecessor = None;
        for &e in graph.incoming(current)? {
            let v = graph.from(e)?;
            if distance(graph, v)? == Some(i - 1) {
                predecessor = Some(v);
                break;
            }
        }
        current = predecessor.ok_or(GraphError::InvalidArgument(
            "distance labels do not form a path",
        ))?;
    }
    Ok(path)
}

fn dist_label(d: u64) -> Result<i64, GraphError> {
    i64::try_from(d).map_err(|_| GraphError::InvalidArgument("distance overflows label"))
}
