//! Backtracking path enumeration under a visit policy.

use std::collections::HashMap;
use std::fmt;

use itertools::Itertools;

use super::{Edge, Graph, Vertex};

/// How many times each vertex appears on the path walked so far.
///
/// Never updated in place: [`VisitCounts::extended`] returns a new copy, so
/// each level of the search owns the counts for its own prefix and sibling
/// branches cannot see each other's visits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitCounts {
    counts: HashMap<Vertex, usize>,
}

impl VisitCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy with `vertex` counted once more.
    pub fn extended(&self, vertex: &Vertex) -> Self {
        let mut counts = self.counts.clone();
        *counts.entry(vertex.clone()).or_default() += 1;
        Self { counts }
    }

    pub fn count(&self, vertex: &Vertex) -> usize {
        self.counts.get(vertex).copied().unwrap_or(0)
    }

    pub fn any_small_visited_twice(&self) -> bool {
        self.counts
            .iter()
            .any(|(vertex, &count)| vertex.is_small() && count >= 2)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Vertex, usize)> {
        self.counts.iter().map(|(vertex, &count)| (vertex, count))
    }
}

/// Decides whether the search may step onto a vertex.
///
/// `visits` counts the path up to and including the vertex the search is
/// leaving. The destination is never submitted to the policy; reaching it
/// always completes a path.
///
/// Any `Fn(&Graph, &Vertex, &VisitCounts) -> bool` is a policy.
pub trait VisitPolicy {
    fn accept_visit(&self, graph: &Graph, vertex: &Vertex, visits: &VisitCounts) -> bool;
}

impl<F> VisitPolicy for F
where
    F: Fn(&Graph, &Vertex, &VisitCounts) -> bool,
{
    fn accept_visit(&self, graph: &Graph, vertex: &Vertex, visits: &VisitCounts) -> bool {
        self(graph, vertex, visits)
    }
}

/// Small vertices at most once per path; large ones without limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallCavesOnce;

impl VisitPolicy for SmallCavesOnce {
    fn accept_visit(&self, _graph: &Graph, vertex: &Vertex, visits: &VisitCounts) -> bool {
        !vertex.is_small() || visits.count(vertex) == 0
    }
}

/// Like [`SmallCavesOnce`], except that a single small vertex per path may
/// be visited twice. The start vertex is never re-entered.
#[derive(Debug, Clone)]
pub struct OneSmallCaveTwice {
    start: Vertex,
}

impl OneSmallCaveTwice {
    pub fn new(start: impl Into<Vertex>) -> Self {
        Self {
            start: start.into(),
        }
    }
}

impl VisitPolicy for OneSmallCaveTwice {
    fn accept_visit(&self, _graph: &Graph, vertex: &Vertex, visits: &VisitCounts) -> bool {
        if *vertex == self.start {
            return false;
        }
        if !vertex.is_small() {
            return true;
        }
        match visits.count(vertex) {
            0 => true,
            1 => !visits.any_small_visited_twice(),
            _ => false,
        }
    }
}

/// A walk through the graph, edges in the direction they were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    edges: Vec<Edge>,
}

impl Path {
    /// Number of edges
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    /// Every vertex along the path, start to end.
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.edges
            .first()
            .map(|edge| &edge.from)
            .into_iter()
            .chain(self.edges.iter().map(|edge| &edge.to))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices().format(","))
    }
}

/// Enumerates every path between two vertices that a [`VisitPolicy`]
/// allows.
///
/// # Warning: Cycle Behavior
///
/// There is no cycle detection besides the policy. A policy that lets the
/// search loop forever (for example [`SmallCavesOnce`] on a graph where two
/// large vertices are adjacent) overflows the stack.
///
/// # Example
///
/// ```rust
/// use advent2021::utils::graph::{Edge, Graph, PathEnumerator, SmallCavesOnce, Vertex};
///
/// let graph: Graph = ["start-A", "A-end", "start-b", "b-A"]
///     .iter()
///     .map(|line| line.parse::<Edge>().unwrap())
///     .collect();
///
/// let enumerator = PathEnumerator::new(&graph, SmallCavesOnce);
/// let (start, end) = (Vertex::from("start"), Vertex::from("end"));
/// let routes: Vec<String> = enumerator
///     .paths(&start, &end)
///     .iter()
///     .map(|path| path.to_string())
///     .collect();
///
/// assert_eq!(routes, ["start,A,b,A,end", "start,A,end", "start,b,A,end"]);
/// ```
pub struct PathEnumerator<'g, P> {
    graph: &'g Graph,
    policy: P,
}

impl<'g, P: VisitPolicy> PathEnumerator<'g, P> {
    pub fn new(graph: &'g Graph, policy: P) -> Self {
        Self { graph, policy }
    }

    /// All paths from `from` to `to`.
    ///
    /// A path ends the first time it reaches `to`. At each branch the
    /// neighbors are tried in name order, which fixes the order of the
    /// result.
    pub fn paths(&self, from: &Vertex, to: &Vertex) -> Vec<Path> {
        self.walk(from, to, &VisitCounts::new())
            .into_iter()
            .map(|mut edges| {
                edges.reverse();
                Path { edges }
            })
            .collect()
    }

    /// Number of paths [`paths`](Self::paths) would return, without
    /// building them.
    pub fn count_paths(&self, from: &Vertex, to: &Vertex) -> usize {
        self.count(from, to, &VisitCounts::new())
    }

    /// Edges of each path found below `from`, collected back to front.
    fn walk(&self, from: &Vertex, to: &Vertex, visits: &VisitCounts) -> Vec<Vec<Edge>> {
        let visits = visits.extended(from);
        let mut found = Vec::new();

        for next in self.graph.reachable_vertices(from) {
            let edge = Edge::new(from.clone(), next.clone());
            if next == to {
                found.push(vec![edge]);
            } else if self.policy.accept_visit(self.graph, next, &visits) {
                for mut tail in self.walk(next, to, &visits) {
                    tail.push(edge.clone());
                    found.push(tail);
                }
            }
        }
        found
    }

    fn count(&self, from: &Vertex, to: &Vertex, visits: &VisitCounts) -> usize {
        let visits = visits.extended(from);
        self.graph
            .reachable_vertices(from)
            .map(|next| {
                if next == to {
                    1
                } else if self.policy.accept_visit(self.graph, next, &visits) {
                    self.count(next, to, &visits)
                } else {
                    0
                }
            })
            .sum()
    }
}
