//! GraphViz DOT writer.
//!
//! Renders any [`Graph`] whose payloads implement `Display` as a `digraph`
//! block: one quoted statement per vertex, one `"from" -> "to"` statement per
//! edge with the edge payload as its label. The output is meant for
//! visualisation tools and is not read back.

use std::fmt::{self, Display, Write};

use crate::topology::graph::{Graph, SparseGraph};

/// Write `graph` in DOT syntax to `out`.
pub fn write_dot<G, W>(graph: &G, out: &mut W) -> fmt::Result
where
    G: Graph,
    G::VertexData: Display,
    G::EdgeData: Display,
    W: Write,
{
    out.write_str("digraph {\n")?;
    for v in graph.vertices() {
        let data = graph.vertex(v).map_err(|_| fmt::Error)?;
        writeln!(out, "    \"{}\";", Escaped(data))?;
    }
    for e in graph.edges() {
        let from = graph.from(e).and_then(|v| graph.vertex(v)).map_err(|_| fmt::Error)?;
        let to = graph.to(e).and_then(|v| graph.vertex(v)).map_err(|_| fmt::Error)?;
        let data = graph.edge(e).map_err(|_| fmt::Error)?;
        writeln!(
            out,
            "    \"{}\" -> \"{}\" [label=\"{}\"];",
            Escaped(from),
            Escaped(to),
            Escaped(data)
        )?;
    }
    out.write_str("}\n")
}

/// Render `graph` as a DOT string.
///
/// Writing into a `String` only fails if a payload's `Display` impl fails;
/// no partial output is returned in that case.
pub fn to_dot<G>(graph: &G) -> Result<String, fmt::Error>
where
    G: Graph,
    G::VertexData: Display,
    G::EdgeData: Display,
{
    let mut s = String::new();
    write_dot(graph, &mut s)?;
    Ok(s)
}

impl<V: Display, E: Display> Display for SparseGraph<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dot(self, f)
    }
}

/// Escapes `"` and `\` inside a quoted DOT identifier.
struct Escaped<'a, T: Display>(&'a T);

impl<T: Display> Display for Escaped<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let raw = self.0.to_string();
        for c in raw.chars() {
            match c {
                '"' => f.write_str("\\\"")?,
                '\\' => f.write_str("\\\\")?,
                '\n' => f.write_str("\\n")?,
                c => f.write_char(c)?,
            }
        }
        Ok(())
    }
}
