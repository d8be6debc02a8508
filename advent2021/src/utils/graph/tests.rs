//! Tests for graphs and path enumeration.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::*;

fn graph(lines: &str) -> Graph {
    lines
        .lines()
        .map(|line| line.parse::<Edge>().unwrap())
        .collect()
}

fn v(name: &str) -> Vertex {
    Vertex::from(name)
}

fn names<'a>(vertices: impl Iterator<Item = &'a Vertex>) -> Vec<&'a str> {
    vertices.map(Vertex::name).collect()
}

const SMALL_CAVES: &str = "start-A\nstart-b\nA-c\nA-b\nb-d\nA-end\nb-end";

const LARGER_CAVES: &str = "\
dc-end
HN-start
start-kj
dc-start
dc-HN
LN-dc
HN-end
kj-sj
kj-HN
kj-dc";

const LARGEST_CAVES: &str = "\
fs-end
he-DX
fs-he
start-DX
pj-DX
end-zg
zg-sl
zg-pj
pj-he
RW-he
fs-DX
pj-RW
zg-RW
start-pj
he-WI
zg-he
pj-fs
start-RW";

// ---------------------------------------------------------------------------
// Vertex / Edge
// ---------------------------------------------------------------------------

#[test]
fn test_small_is_derived_from_name() {
    assert!(v("start").is_small());
    assert!(v("dc").is_small());
    assert!(!v("HN").is_small());
    assert!(!v("Ab").is_small());
}

#[test]
fn test_vertex_identity_is_name() {
    assert_eq!(v("kj"), Vertex::new(String::from("kj")));
    assert_ne!(v("kj"), v("KJ"));
}

#[test]
fn test_parse_edge() {
    let edge: Edge = " start-A ".parse().unwrap();
    assert_eq!(edge, Edge::new("start", "A"));
    assert_eq!(edge.to_string(), "start-A");
}

#[test]
fn test_parse_malformed_edges() {
    for token in ["startA", "-A", "start-", "a-b-c", ""] {
        assert_eq!(
            token.parse::<Edge>(),
            Err(GraphError::MalformedEdge(token.to_string())),
            "token {token:?}"
        );
    }
}

#[test]
fn test_undirected_orders_endpoints() {
    let forward = Edge::new("b", "A").undirected();
    let backward = Edge::new("A", "b").undirected();
    assert_eq!(forward, backward);
    assert_eq!(forward.from, v("A"));
    assert_eq!(forward.other(&v("A")), Some(&v("b")));
    assert_eq!(forward.other(&v("c")), None);
}

// ---------------------------------------------------------------------------
// Graph
// ---------------------------------------------------------------------------

#[test]
fn test_reverse_edge_is_same_edge() {
    let mut g = Graph::new();
    assert!(g.add_edge("A", "b"));
    assert!(!g.add_edge("b", "A"));
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.vertex_count(), 2);
}

#[test]
fn test_reachable_vertices() {
    let g = graph(SMALL_CAVES);
    assert_eq!(names(g.reachable_vertices(&v("A"))), ["b", "c", "end", "start"]);
    assert_eq!(names(g.reachable_vertices(&v("d"))), ["b"]);
    assert_eq!(g.reachable_vertices(&v("nowhere")).count(), 0);
}

#[test]
fn test_self_loop_is_not_reachable() {
    let mut g = Graph::new();
    g.add_edge("a", "a");
    g.add_edge("a", "B");

    assert_eq!(g.edge_count(), 2);
    assert_eq!(names(g.reachable_vertices(&v("a"))), ["B"]);
    assert!(g.contains_vertex(&v("a")));
}

#[test]
fn test_merge_unions_edges() {
    let mut left = graph("start-A\nA-end");
    let right = graph("end-A\nA-b");
    left.merge(right);

    assert_eq!(left.edge_count(), 3);
    assert_eq!(names(left.vertices()), ["A", "b", "end", "start"]);
}

#[test]
fn test_collect_matches_merge_of_singletons() {
    let collected = graph(LARGER_CAVES);
    let merged = LARGER_CAVES
        .lines()
        .map(|line| Graph::from_iter([line.parse::<Edge>().unwrap()]))
        .fold(Graph::new(), |mut acc, g| {
            acc.merge(g);
            acc
        });
    assert_eq!(collected, merged);
}

proptest! {
    #[test]
    fn prop_reachability_is_symmetric(
        pairs in prop::collection::vec((0usize..6, 0usize..6), 0..20)
    ) {
        const NAMES: [&str; 6] = ["a", "b", "C", "D", "e", "F"];
        let g: Graph = pairs
            .iter()
            .map(|&(x, y)| Edge::new(NAMES[x], NAMES[y]))
            .collect();

        for vertex in g.vertices() {
            for other in g.reachable_vertices(vertex) {
                prop_assert_ne!(other, vertex);
                prop_assert!(g.reachable_vertices(other).any(|back| back == vertex));
            }
        }

        let distinct: BTreeSet<_> = pairs.iter().map(|&(x, y)| (x.min(y), x.max(y))).collect();
        prop_assert_eq!(g.edge_count(), distinct.len());
    }
}

// ---------------------------------------------------------------------------
// VisitCounts / policies
// ---------------------------------------------------------------------------

#[test]
fn test_extended_leaves_base_untouched() {
    let base = VisitCounts::new().extended(&v("a"));
    let twice = base.extended(&v("a"));

    assert_eq!(base.count(&v("a")), 1);
    assert_eq!(twice.count(&v("a")), 2);
    assert_eq!(twice.count(&v("b")), 0);
    assert!(!base.any_small_visited_twice());
    assert!(twice.any_small_visited_twice());
    assert!(!VisitCounts::new().extended(&v("A")).extended(&v("A")).any_small_visited_twice());
}

#[test]
fn test_relaxed_policy_rules() {
    let g = Graph::new();
    let policy = OneSmallCaveTwice::new("start");
    let visits = VisitCounts::new().extended(&v("start")).extended(&v("a"));

    assert!(!policy.accept_visit(&g, &v("start"), &visits));
    assert!(policy.accept_visit(&g, &v("a"), &visits));
    assert!(policy.accept_visit(&g, &v("B"), &visits));

    let doubled = visits.extended(&v("a"));
    assert!(!policy.accept_visit(&g, &v("a"), &doubled));
    assert!(policy.accept_visit(&g, &v("c"), &doubled));
    assert!(!policy.accept_visit(&g, &v("c"), &doubled.extended(&v("c"))));
}

// ---------------------------------------------------------------------------
// PathEnumerator
// ---------------------------------------------------------------------------

#[test]
fn test_single_edge_is_one_path_under_any_policy() {
    let g = graph("start-end");
    let (start, end) = (v("start"), v("end"));

    let simple = PathEnumerator::new(&g, SmallCavesOnce).paths(&start, &end);
    assert_eq!(simple.len(), 1);
    assert_eq!(simple[0].len(), 1);
    assert_eq!(simple[0].edges(), [Edge::new("start", "end")]);

    let relaxed = PathEnumerator::new(&g, OneSmallCaveTwice::new("start"));
    assert_eq!(relaxed.count_paths(&start, &end), 1);

    let refuse_all = |_: &Graph, _: &Vertex, _: &VisitCounts| false;
    assert_eq!(PathEnumerator::new(&g, refuse_all).count_paths(&start, &end), 1);
}

#[test]
fn test_simple_policy_visits_b_at_most_once() {
    let g = graph("start-A\nA-end\nstart-b\nb-A");
    let paths = PathEnumerator::new(&g, SmallCavesOnce).paths(&v("start"), &v("end"));

    assert_eq!(paths.len(), 3);
    for path in &paths {
        let b_visits = path.vertices().filter(|&vertex| *vertex == v("b")).count();
        assert!(b_visits <= 1, "{path}");
        assert_eq!(path.vertices().next(), Some(&v("start")));
        assert_eq!(path.vertices().last(), Some(&v("end")));
    }
}

#[test]
fn test_path_edges_follow_traversal_direction() {
    let g = graph("end-A\nA-start");
    let paths = PathEnumerator::new(&g, SmallCavesOnce).paths(&v("start"), &v("end"));

    assert_eq!(paths.len(), 1);
    assert_eq!(
        paths[0].edges(),
        [Edge::new("start", "A"), Edge::new("A", "end")]
    );
    assert_eq!(paths[0].to_string(), "start,A,end");
}

#[test]
fn test_small_cave_paths_listed() {
    let g = graph(SMALL_CAVES);
    let routes: BTreeSet<String> = PathEnumerator::new(&g, SmallCavesOnce)
        .paths(&v("start"), &v("end"))
        .iter()
        .map(Path::to_string)
        .collect();

    let expected: BTreeSet<String> = [
        "start,A,b,A,c,A,end",
        "start,A,b,A,end",
        "start,A,b,end",
        "start,A,c,A,b,A,end",
        "start,A,c,A,b,end",
        "start,A,c,A,end",
        "start,A,end",
        "start,b,A,c,A,end",
        "start,b,A,end",
        "start,b,end",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(routes, expected);
}

#[test]
fn test_path_counts_on_samples() {
    let (start, end) = (v("start"), v("end"));
    for (input, simple, relaxed) in [
        (SMALL_CAVES, 10, 36),
        (LARGER_CAVES, 19, 103),
        (LARGEST_CAVES, 226, 3509),
    ] {
        let g = graph(input);
        assert_eq!(PathEnumerator::new(&g, SmallCavesOnce).count_paths(&start, &end), simple);
        assert_eq!(
            PathEnumerator::new(&g, OneSmallCaveTwice::new("start")).count_paths(&start, &end),
            relaxed
        );
    }
}

#[test]
fn test_count_matches_enumeration() {
    let g = graph(LARGER_CAVES);
    let (start, end) = (v("start"), v("end"));
    let relaxed = PathEnumerator::new(&g, OneSmallCaveTwice::new("start"));

    let paths = relaxed.paths(&start, &end);
    assert_eq!(paths.len(), relaxed.count_paths(&start, &end));

    let distinct: BTreeSet<String> = paths.iter().map(Path::to_string).collect();
    assert_eq!(distinct.len(), paths.len());
}

#[test]
fn test_closure_policy_sees_visit_counts() {
    // Large caves at most twice, small ones once.
    let g = graph(SMALL_CAVES);
    let policy = |_: &Graph, vertex: &Vertex, visits: &VisitCounts| {
        let limit = if vertex.is_small() { 1 } else { 2 };
        visits.count(vertex) < limit
    };
    let paths = PathEnumerator::new(&g, policy).paths(&v("start"), &v("end"));

    assert!(!paths.is_empty());
    for path in &paths {
        let a_visits = path.vertices().filter(|&vertex| *vertex == v("A")).count();
        assert!(a_visits <= 2, "{path}");
    }
}

#[test]
fn test_unreachable_destination_has_no_paths() {
    let g = graph("start-a\nb-end");
    let enumerator = PathEnumerator::new(&g, SmallCavesOnce);
    assert!(enumerator.paths(&v("start"), &v("end")).is_empty());
    assert_eq!(enumerator.count_paths(&v("start"), &v("end")), 0);
}
