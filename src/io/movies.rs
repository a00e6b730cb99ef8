//! Movie database reader.
//!
//! # Supported format
//! - One movie per line, fields separated by `/`.
//! - Field 0 is the movie title, fields 1.. are the actors appearing in it.
//!
//! Movies and actors both become vertices, named by their exact text; the
//! first line mentioning a name creates its vertex and later lines reuse it.
//! Each actor is linked to its movie in both directions, giving a bipartite
//! graph in which two edges make one "degree" of separation.
//!
//! # Limitations
//! - Names are not trimmed or case-folded.
//! - Bytes that are not valid UTF-8 (Latin-1 cast lists, say) are decoded
//!   lossily as U+FFFD instead of failing the load.
//! - Only names listed in an actor field can be search endpoints.
//! - An actor listed twice for one movie, or an actor named exactly like the
//!   movie, is skipped with a warning.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::{HashMap, HashSet};

use crate::algs::traversal::{PathSolver, ShortestPath};
use crate::graph_error::GraphError;
use crate::topology::graph::{Graph, SparseGraph};
use crate::topology::handle::Vertex;

/// The reference actor every path is measured from.
pub const KEVIN_BACON: &str = "Bacon, Kevin";

/// Graph type produced by the reader: names on vertices, relation names on
/// edges.
pub type MovieGraph = SparseGraph<String, String>;

/// Parsing options for [`MovieDatabase::read_with`].
#[derive(Clone, Debug)]
pub struct LoadOptions {
    /// Field separator.
    pub separator: char,
    /// Payload of each movie → actor edge.
    pub movie_to_actor: String,
    /// Payload of each actor → movie edge.
    pub actor_to_movie: String,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            separator: '/',
            movie_to_actor: "features".to_string(),
            actor_to_movie: "acts in".to_string(),
        }
    }
}

/// A movie/actor graph plus the name index used to build it.
#[derive(Debug, Default)]
pub struct MovieDatabase {
    graph: MovieGraph,
    names: HashMap<String, Vertex>,
    actors: HashSet<Vertex>,
}

impl MovieDatabase {
    /// Reads the database file at `path` with default options.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GraphError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        log::info!("loading movie database from {}", path.display());
        Self::read(BufReader::new(file))
    }

    /// Reads a database from `reader` with default options.
    pub fn read<R: BufRead>(reader: R) -> Result<Self, GraphError> {
        Self::read_with(reader, &LoadOptions::default())
    }

    /// Reads a database from `reader`.
    pub fn read_with<R: BufRead>(mut reader: R, opts: &LoadOptions) -> Result<Self, GraphError> {
        let mut db = MovieDatabase::default();
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;
            let decoded = String::from_utf8_lossy(&buf);
            let line = decoded.trim_end_matches(['\n', '\r']);
            if line.trim().is_empty() {
                continue;
            }
            db.add_record(line_no, line, opts)?;
        }
        crate::debug_invariants!(
            crate::DebugInvariants::validate_invariants(&db.graph),
            "movie database load"
        );
        log::info!(
            "loaded {} vertices and {} edges",
            db.graph.vertex_count(),
            db.graph.edge_count()
        );
        Ok(db)
    }

    fn add_record(&mut self, line_no: usize, line: &str, opts: &LoadOptions) -> Result<(), GraphError> {
        let mut fields = line.split(opts.separator);
        let title = fields.next().unwrap_or_default();
        if title.is_empty() {
            return Err(GraphError::Parse {
                line: line_no,
                message: "record has an empty movie title".into(),
            });
        }
        let movie = self.ensure_vertex(title);

        for name in fields.filter(|f| !f.is_empty()) {
            let actor = self.ensure_vertex(name);
            self.actors.insert(actor);
            let linked = self
                .graph
                .insert_edge(movie, actor, opts.movie_to_actor.clone())
                .and_then(|_| {
                    self.graph
                        .insert_edge(actor, movie, opts.actor_to_movie.clone())
                });
            if let Err(e) = linked {
                log::warn!("line {line_no}: skipping {name:?} in {title:?}: {e}");
            }
        }
        Ok(())
    }

    fn ensure_vertex(&mut self, name: &str) -> Vertex {
        if let Some(&v) = self.names.get(name) {
            return v;
        }
        let v = self.graph.insert_vertex(name.to_string());
        self.names.insert(name.to_string(), v);
        v
    }

    /// Vertex named `name`.
    pub fn find(&self, name: &str) -> Result<Vertex, GraphError> {
        self.names
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    /// Vertex named `name`, provided the name appeared in an actor field.
    ///
    /// Movie titles are [`GraphError::NotFound`] here: a path ending at a
    /// movie has an odd length and no meaningful hop count.
    pub fn find_actor(&self, name: &str) -> Result<Vertex, GraphError> {
        self.find(name)
            .ok()
            .filter(|v| self.actors.contains(v))
            .ok_or_else(|| GraphError::NotFound(name.to_string()))
    }

    /// Name stored on `v`.
    pub fn name(&self, v: Vertex) -> Result<&str, GraphError> {
        self.graph.vertex(v).map(String::as_str)
    }

    pub fn graph(&self) -> &MovieGraph {
        &self.graph
    }

    pub fn graph_mut(&mut self) -> &mut MovieGraph {
        &mut self.graph
    }

    pub fn into_graph(self) -> MovieGraph {
        self.graph
    }

    /// Shortest path from `source` to `target`, both given by actor name.
    ///
    /// Fails with [`GraphError::NotFound`] naming whichever of `target` or
    /// `source` is not a known actor (target checked first) before any
    /// search runs.
    pub fn shortest_path(
        &mut self,
        source: &str,
        target: &str,
    ) -> Result<Option<ShortestPath>, GraphError> {
        let t = self.find_actor(target)?;
        let s = self.find_actor(source)?;
        PathSolver::new(&mut self.graph).source(s).target(t).solve()
    }

    /// Names along `path`, target first.
    pub fn path_names(&self, path: &ShortestPath) -> Result<Vec<&str>, GraphError> {
        path.vertices.iter().map(|&v| self.name(v)).collect()
    }
}
