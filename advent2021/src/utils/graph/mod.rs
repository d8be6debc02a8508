//! Undirected graphs of named vertices and path enumeration over them
//!
//! - [`Graph`]: canonical edge set with "reachable from" queries
//! - [`Vertex`], [`Edge`]: name-identified vertices; `A-B` edge tokens
//! - [`PathEnumerator`]: every start-to-end path a [`VisitPolicy`] allows
//!
//! # Policies
//!
//! - [`SmallCavesOnce`]: lower-case vertices at most once per path
//! - [`OneSmallCaveTwice`]: one lower-case vertex may be visited twice, the
//!   start never again
//! - any `Fn(&Graph, &Vertex, &VisitCounts) -> bool`
//!
//! # Example
//!
//! ```rust
//! use advent2021::utils::graph::{Graph, OneSmallCaveTwice, PathEnumerator, Vertex, VisitCounts};
//!
//! let mut graph = Graph::new();
//! graph.add_edge("start", "A");
//! graph.add_edge("A", "end");
//! graph.add_edge("A", "b");
//!
//! let (start, end) = (Vertex::from("start"), Vertex::from("end"));
//! let relaxed = PathEnumerator::new(&graph, OneSmallCaveTwice::new("start"));
//! assert_eq!(relaxed.count_paths(&start, &end), 3);
//!
//! // Large vertices only
//! let custom = |_: &Graph, v: &Vertex, _: &VisitCounts| !v.is_small();
//! assert_eq!(PathEnumerator::new(&graph, custom).count_paths(&start, &end), 1);
//! ```

mod paths;
mod undirected;
mod vertex;

pub use paths::{OneSmallCaveTwice, Path, PathEnumerator, SmallCavesOnce, VisitCounts, VisitPolicy};
pub use undirected::Graph;
pub use vertex::{Edge, GraphError, Vertex};

#[cfg(test)]
mod tests;
