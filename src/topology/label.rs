//! Per-element label values.
//!
//! A label is transient, algorithm-owned state attached to a vertex or edge
//! and kept apart from the element's payload. Different algorithms store
//! different shapes in the same slot (a BFS distance, a visited flag, a
//! colour name), so the slot holds a small sum type rather than a fixed
//! scalar.

use std::fmt;

/// Value stored in a vertex or edge label slot.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Label {
    /// Integer tag, e.g. a BFS distance.
    Int(i64),
    /// Boolean marker, e.g. "visited".
    Flag(bool),
    /// Free-form text.
    Text(String),
}

impl Label {
    /// Returns the integer value, if this is an [`Label::Int`].
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Label::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the flag value, if this is a [`Label::Flag`].
    #[inline]
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Label::Flag(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the text, if this is a [`Label::Text`].
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Label::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for Label {
    fn from(v: i64) -> Self {
        Label::Int(v)
    }
}

impl From<i32> for Label {
    fn from(v: i32) -> Self {
        Label::Int(i64::from(v))
    }
}

impl From<bool> for Label {
    fn from(v: bool) -> Self {
        Label::Flag(v)
    }
}

impl From<&str> for Label {
    fn from(v: &str) -> Self {
        Label::Text(v.to_string())
    }
}

impl From<String> for Label {
    fn from(v: String) -> Self {
        Label::Text(v)
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Int(i) => write!(f, "{i}"),
            Label::Flag(b) => write!(f, "{b}"),
            Label::Text(s) => f.write_str(s),
        }
    }
}
