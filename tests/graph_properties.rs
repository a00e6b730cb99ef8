use std::collections::{BTreeSet, HashMap, VecDeque};

use incidence_graph::DebugInvariants;
use incidence_graph::algs::traversal::shortest_path;
use incidence_graph::topology::graph::{Graph, SparseGraph};
use incidence_graph::topology::handle::Vertex;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    AddEdge(usize, usize),
    RemoveEdge(usize, usize),
    RemoveVertex(usize),
}

fn op(n: usize) -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0..n, 0..n).prop_map(|(a, b)| Op::AddEdge(a, b)),
        2 => (0..n, 0..n).prop_map(|(a, b)| Op::RemoveEdge(a, b)),
        1 => (0..n).prop_map(Op::RemoveVertex),
    ]
}

/// Plain-set model of the graph: live vertex ids and ordered edge pairs.
#[derive(Default)]
struct Model {
    alive: BTreeSet<usize>,
    edges: BTreeSet<(usize, usize)>,
}

impl Model {
    fn degree(&self, v: usize) -> usize {
        self.edges.iter().filter(|&&(a, b)| a == v || b == v).count()
    }
}

fn bfs_distance(model: &Model, s: usize, t: usize) -> Option<u64> {
    let mut dist = HashMap::from([(s, 0u64)]);
    let mut q = VecDeque::from([s]);
    while let Some(u) = q.pop_front() {
        if u == t {
            return dist.get(&u).copied();
        }
        let d = dist[&u];
        for &(_, w) in model.edges.iter().filter(|&&(a, _)| a == u) {
            if !dist.contains_key(&w) {
                dist.insert(w, d + 1);
                q.push_back(w);
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn graph_matches_set_model(ops in prop::collection::vec(op(8), 0..80)) {
        let mut g = SparseGraph::<usize, (usize, usize)>::new();
        let handles: Vec<Vertex> = (0..8).map(|i| g.insert_vertex(i)).collect();
        let mut model = Model { alive: (0..8).collect(), ..Default::default() };

        for op in ops {
            match op {
                Op::AddEdge(a, b) => {
                    let expect_ok = a != b
                        && model.alive.contains(&a)
                        && model.alive.contains(&b)
                        && !model.edges.contains(&(a, b));
                    let got = g.insert_edge(handles[a], handles[b], (a, b));
                    prop_assert_eq!(got.is_ok(), expect_ok);
                    if let Err(e) = got {
                        prop_assert!(e.is_invalid_argument());
                    } else {
                        model.edges.insert((a, b));
                    }
                }
                Op::RemoveEdge(a, b) => {
                    if let Ok(Some(e)) = g.find_edge(handles[a], handles[b]) {
                        prop_assert_eq!(g.remove_edge(e).unwrap(), (a, b));
                        prop_assert!(g.remove_edge(e).unwrap_err().is_invalid_argument());
                        model.edges.remove(&(a, b));
                    } else {
                        prop_assert!(!model.edges.contains(&(a, b)));
                    }
                }
                Op::RemoveVertex(v) => {
                    let expect_ok = model.alive.contains(&v) && model.degree(v) == 0;
                    let got = g.remove_vertex(handles[v]);
                    prop_assert_eq!(got.is_ok(), expect_ok);
                    if expect_ok {
                        model.alive.remove(&v);
                    }
                }
            }
            prop_assert!(g.validate_invariants().is_ok());
        }

        let live: BTreeSet<usize> = g.vertices().iter().map(|&v| *g.vertex(v).unwrap()).collect();
        prop_assert_eq!(live, model.alive.clone());
        let pairs: BTreeSet<(usize, usize)> = g.edges().iter().map(|&e| *g.edge(e).unwrap()).collect();
        prop_assert_eq!(pairs, model.edges.clone());
        for &v in &model.alive {
            let outs = g.outgoing(handles[v]).unwrap().len();
            let ins = g.incoming(handles[v]).unwrap().len();
            prop_assert_eq!(outs, model.edges.iter().filter(|&&(a, _)| a == v).count());
            prop_assert_eq!(ins, model.edges.iter().filter(|&&(_, b)| b == v).count());
        }
    }

    #[test]
    fn bfs_distance_matches_reference(
        pairs in prop::collection::btree_set((0usize..10, 0usize..10), 0..40),
        s in 0usize..10,
        t in 0usize..10,
    ) {
        let mut g = SparseGraph::<usize, ()>::new();
        let handles: Vec<Vertex> = (0..10).map(|i| g.insert_vertex(i)).collect();
        let mut model = Model { alive: (0..10).collect(), ..Default::default() };
        for &(a, b) in pairs.iter().filter(|(a, b)| a != b) {
            g.insert_edge(handles[a], handles[b], ()).unwrap();
            model.edges.insert((a, b));
        }

        let expected = bfs_distance(&model, s, t);
        let got = shortest_path(&mut g, handles[s], handles[t]).unwrap();
        prop_assert_eq!(got.as_ref().map(|p| p.distance), expected);
        if let Some(path) = got {
            prop_assert_eq!(path.vertices.len() as u64, path.distance + 1);
            prop_assert_eq!(path.target(), Some(handles[t]));
            prop_assert_eq!(path.source(), Some(handles[s]));
            for w in path.vertices.windows(2) {
                prop_assert!(g.find_edge(w[1], w[0]).unwrap().is_some());
            }
        }
    }
}
