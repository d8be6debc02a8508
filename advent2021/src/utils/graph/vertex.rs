//! Named vertices and the edges between them.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors raised while building a graph
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// An edge token that is not two non-empty names joined by `-`
    #[error("malformed edge {0:?}, expected `from-to`")]
    MalformedEdge(String),
}

/// A vertex, identified by its name alone.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    name: String,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Small vertices have no upper-case letters in their name.
    pub fn is_small(&self) -> bool {
        !self.name.chars().any(char::is_uppercase)
    }
}

impl From<&str> for Vertex {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A connection between two vertices.
///
/// Inside a [`Graph`](super::Graph) edges are undirected and kept in
/// canonical order; an edge on a [`Path`](super::Path) keeps the direction
/// it was walked in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}

impl Edge {
    pub fn new(from: impl Into<Vertex>, to: impl Into<Vertex>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// The same edge with its endpoints ordered by name.
    pub fn undirected(self) -> Self {
        if self.from <= self.to {
            self
        } else {
            Self {
                from: self.to,
                to: self.from,
            }
        }
    }

    /// The endpoint across from `vertex`, if `vertex` is on this edge.
    pub fn other(&self, vertex: &Vertex) -> Option<&Vertex> {
        if &self.from == vertex {
            Some(&self.to)
        } else if &self.to == vertex {
            Some(&self.from)
        } else {
            None
        }
    }
}

impl FromStr for Edge {
    type Err = GraphError;

    /// Parse `from-to`, trimming surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GraphError::MalformedEdge(s.to_string());
        let (from, to) = s.trim().split_once('-').ok_or_else(malformed)?;
        if from.is_empty() || to.is_empty() || to.contains('-') {
            return Err(malformed());
        }
        Ok(Self::new(from, to))
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}
