#![allow(dead_code)]
use incidence_graph::{
    algs::traversal::ShortestPath,
    topology::graph::{Graph, SparseGraph},
    topology::handle::Vertex,
};

/// Build a graph whose vertices are the given names, in order.
pub fn graph_with(names: &[&'static str]) -> (SparseGraph<&'static str, &'static str>, Vec<Vertex>) {
    let mut g = SparseGraph::new();
    let vs = names.iter().map(|&n| g.insert_vertex(n)).collect();
    (g, vs)
}

/// Link `a` and `b` in both directions, movie-database style.
pub fn link<G>(g: &mut G, movie: Vertex, actor: Vertex)
where
    G: Graph<EdgeData = &'static str>,
{
    g.insert_edge(movie, actor, "features").unwrap();
    g.insert_edge(actor, movie, "acts in").unwrap();
}

/// Payloads along a solved path, target first.
pub fn names(g: &SparseGraph<&'static str, &'static str>, path: &ShortestPath) -> Vec<&'static str> {
    path.vertices.iter().map(|&v| *g.vertex(v).unwrap()).collect()
}

/// Assert every consecutive pair on `path` is joined by an edge pointing
/// from the later entry to the earlier one.
pub fn assert_edges_along<G: Graph>(g: &G, path: &ShortestPath) {
    for w in path.vertices.windows(2) {
        assert!(
            g.find_edge(w[1], w[0]).unwrap().is_some(),
            "no edge {:?} -> {:?}",
            w[1],
            w[0]
        );
    }
}
