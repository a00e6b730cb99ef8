//! GraphError: unified error type for incidence-graph public APIs
//!
//! Every fallible graph operation reports contract violations as
//! [`GraphError::InvalidArgument`]; callers cannot usefully tell a foreign
//! handle from a removed one, so both share the same variant.

use thiserror::Error;

/// Unified error type for graph, solver and loader operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A handle or argument violated the graph contract (null, foreign or
    /// removed handle, self-loop, duplicate edge, vertex still connected,
    /// absent label).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A named entity or a solver endpoint could not be located.
    #[error("not found: {0}")]
    NotFound(String),
    /// A database record could not be parsed.
    #[error("parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl GraphError {
    /// True for the contract-violation kind raised by graph operations.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, GraphError::InvalidArgument(_))
    }

    /// True when a lookup failed.
    pub fn is_not_found(&self) -> bool {
        matches!(self, GraphError::NotFound(_))
    }
}

impl From<std::io::Error> for GraphError {
    fn from(err: std::io::Error) -> Self {
        GraphError::Io(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_kind() {
        let e = GraphError::InvalidArgument("self-loops are not allowed");
        assert_eq!(e.to_string(), "invalid argument: self-loops are not allowed");
        assert!(e.is_invalid_argument());
        assert!(!e.is_not_found());

        let e = GraphError::NotFound("Bacon, Kevin".into());
        assert_eq!(e.to_string(), "not found: Bacon, Kevin");
        assert!(e.is_not_found());
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let e: GraphError = io.into();
        assert_eq!(e, GraphError::Io("no such file".into()));
    }
}
