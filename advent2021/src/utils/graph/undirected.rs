//! Undirected graph built from edge insertions.

use std::collections::{BTreeMap, BTreeSet};

use super::{Edge, Vertex};

/// An undirected graph stored as a set of canonical edges plus the
/// adjacency derived from them.
///
/// Adding `(A, B)` and `(B, A)` records one edge. Self-loops are kept as
/// edges but never make a vertex reachable from itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    edges: BTreeSet<Edge>,
    adjacency: BTreeMap<Vertex, BTreeSet<Vertex>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the edge `from`-`to`; both endpoints join the vertex set.
    /// Returns `false` if the edge was already present in either direction.
    pub fn add_edge(&mut self, from: impl Into<Vertex>, to: impl Into<Vertex>) -> bool {
        self.insert(Edge::new(from, to))
    }

    fn insert(&mut self, edge: Edge) -> bool {
        let edge = edge.undirected();
        if self.edges.contains(&edge) {
            return false;
        }

        let Edge { from, to } = &edge;
        let from_links = self.adjacency.entry(from.clone()).or_default();
        if from != to {
            from_links.insert(to.clone());
            self.adjacency
                .entry(to.clone())
                .or_default()
                .insert(from.clone());
        }
        self.edges.insert(edge)
    }

    /// Union `other`'s edges into this graph.
    pub fn merge(&mut self, other: Graph) {
        self.extend(other.edges);
    }

    /// Distinct vertices one edge away from `vertex`, never `vertex` itself.
    /// Empty for a vertex the graph does not know.
    pub fn reachable_vertices<'a>(
        &'a self,
        vertex: &Vertex,
    ) -> impl Iterator<Item = &'a Vertex> + use<'a> {
        self.adjacency.get(vertex).into_iter().flatten()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.adjacency.keys()
    }

    pub fn contains_vertex(&self, vertex: &Vertex) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Canonical edges, ordered by name.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }
}

impl Extend<Edge> for Graph {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for edge in edges {
            self.insert(edge);
        }
    }
}

impl FromIterator<Edge> for Graph {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut graph = Self::new();
        graph.extend(edges);
        graph
    }
}
