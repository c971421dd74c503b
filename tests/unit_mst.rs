// tests/unit_mst.rs
//! End-to-end tests for the partial tree MST algorithm.

use arbor_core::config::AlgorithmConfig;
use arbor_core::graph::parser;
use arbor_core::graph::{Graph, VertexId};
use arbor_core::mst::{self, Arc, MstReport};
use arbor_core::verify::union_find::UnionFind;

fn graph(names: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    let mut g = Graph::new();
    for name in names {
        g.add_vertex(name).unwrap();
    }
    for &(a, b, w) in edges {
        let a = g.lookup(a).unwrap();
        let b = g.lookup(b).unwrap();
        g.add_edge(a, b, w).unwrap();
    }
    g
}

fn run(g: &Graph) -> Vec<Arc> {
    mst::execute(mst::initialize(g)).unwrap()
}

fn total(arcs: &[Arc]) -> u64 {
    arcs.iter().map(|a| u64::from(a.weight)).sum()
}

fn is_spanning_tree(n: usize, arcs: &[Arc]) -> bool {
    let mut uf = UnionFind::new(n);
    arcs.len() == n.saturating_sub(1)
        && arcs.iter().all(|a| uf.union(a.v1.index(), a.v2.index()))
}

/// Minimum spanning tree weight by trying every (n-1)-subset of edges.
fn brute_force_weight(g: &Graph) -> Option<u64> {
    let edges: Vec<_> = g.edges().collect();
    let n = g.vertex_count();
    let k = n.saturating_sub(1);
    let mut best: Option<u64> = None;

    for mask in 0u32..(1 << edges.len()) {
        if mask.count_ones() as usize != k {
            continue;
        }
        let mut uf = UnionFind::new(n);
        let mut weight = 0;
        let mut acyclic = true;
        for (i, &(a, b, w)) in edges.iter().enumerate() {
            if mask & (1 << i) != 0 {
                acyclic &= uf.union(a.index(), b.index());
                weight += u64::from(w);
            }
        }
        if acyclic {
            best = Some(best.map_or(weight, |b| b.min(weight)));
        }
    }
    best
}

/// Deterministic pseudo-random connected graph: a random spanning path
/// plus extra edges.
fn pseudo_random_graph(seed: u64, n: usize, extra: usize) -> Graph {
    let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
    let mut next = |bound: u64| {
        state = state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        (state >> 33) % bound
    };

    let mut g = Graph::new();
    for i in 0..n {
        g.add_vertex(&format!("v{i}")).unwrap();
    }
    for i in 1..n {
        let j = next(i as u64) as usize;
        let w = next(10) as u32 + 1;
        g.add_edge(VertexId(i), VertexId(j), w).unwrap();
    }
    for _ in 0..extra {
        let a = next(n as u64) as usize;
        let b = next(n as u64) as usize;
        if a != b {
            let w = next(10) as u32 + 1;
            g.add_edge(VertexId(a), VertexId(b), w).unwrap();
        }
    }
    g
}

#[test]
fn test_four_vertex_scenario() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("B", "C", 2), ("C", "D", 3), ("A", "D", 4), ("A", "C", 5)],
    );
    let arcs = run(&g);
    assert_eq!(arcs.len(), 3);
    assert_eq!(total(&arcs), 6);

    let mut weights: Vec<u32> = arcs.iter().map(|a| a.weight).collect();
    weights.sort_unstable();
    assert_eq!(weights, vec![1, 2, 3]);

    let expected = [("A", "B", 1), ("B", "C", 2), ("C", "D", 3)];
    for (a, b, w) in expected {
        let edge = Arc::new(g.lookup(a).unwrap(), g.lookup(b).unwrap(), w);
        assert!(arcs.iter().any(|x| x.same_edge(&edge)), "missing {a}-{b}");
    }
}

#[test]
fn test_single_vertex_yields_nothing() {
    let g = graph(&["A"], &[]);
    let list = mst::initialize(&g);
    assert_eq!(list.size(), 1);
    assert!(mst::execute(list).unwrap().is_empty());
}

#[test]
fn test_empty_graph_yields_nothing() {
    let g = Graph::new();
    assert!(run(&g).is_empty());
}

#[test]
fn test_duplicate_minimum_weights() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("C", "D", 1), ("B", "C", 4), ("A", "D", 4)],
    );
    let arcs = run(&g);
    assert_eq!(total(&arcs), 6);
    assert!(is_spanning_tree(4, &arcs));
}

#[test]
fn test_initialize_seeds_both_endpoints() {
    let g = graph(&["A", "B", "C"], &[("A", "B", 3), ("B", "C", 4)]);
    let list = mst::initialize(&g);
    let counts: Vec<usize> = list.iter().map(|t| t.arcs().len()).collect();
    assert_eq!(counts, vec![1, 2, 1]);
    for (i, tree) in list.iter().enumerate() {
        assert_eq!(tree.root(), VertexId(i));
        assert!(list.forest().is_root(tree.root()).unwrap());
    }
}

#[test]
fn test_larger_graph_spans() {
    let g = pseudo_random_graph(7, 12, 20);
    let arcs = run(&g);
    assert!(is_spanning_tree(12, &arcs));
    assert_eq!(total(&arcs), arbor_core::verify::reference_weight(&g));
}

#[test]
fn test_matches_brute_force_on_small_graphs() {
    for seed in 0..25 {
        let g = pseudo_random_graph(seed, 6, 6);
        let arcs = run(&g);
        assert!(is_spanning_tree(6, &arcs), "seed {seed}");
        assert_eq!(Some(total(&arcs)), brute_force_weight(&g), "seed {seed}");
    }
}

#[test]
fn test_repeat_runs_agree_on_weight() {
    let g = pseudo_random_graph(99, 30, 60);
    let first = total(&run(&g));
    for _ in 0..3 {
        assert_eq!(total(&run(&g)), first);
    }
}

#[test]
fn test_path_compression_gives_same_tree() {
    let g = pseudo_random_graph(3, 40, 80);
    let plain = run(&g);
    let config = AlgorithmConfig {
        path_compression: true,
        ..AlgorithmConfig::default()
    };
    let compressed = mst::execute(mst::initialize_with(&g, &config)).unwrap();
    assert_eq!(plain, compressed);
}

#[test]
fn test_disconnected_graph_terminates_short() {
    let g = graph(
        &["A", "B", "C", "D"],
        &[("A", "B", 1), ("C", "D", 2)],
    );
    let report = MstReport::new(run(&g));
    assert_eq!(report.arcs.len(), 2);
    assert_eq!(report.total_weight(), 3);
    assert!(!report.spans(4));
}

#[test]
fn test_parsed_file_end_to_end() {
    let text = "\
5
a
b
c
d
e
a b 4
a c 1
b c 2
b d 5
c d 8
c e 10
d e 2
";
    let g = parser::parse(text).unwrap();
    let report = MstReport::new(run(&g));
    assert!(report.spans(5));
    assert_eq!(report.total_weight(), 10);
}
