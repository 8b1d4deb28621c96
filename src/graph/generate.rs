//! 随机图生成，用于基准测试和性质测试。
use rand::Rng;

use crate::graph::core::Graph;
use crate::graph::ids::VertexId;
use crate::graph::structure::Weight;

/// Random connected graph on `vertices` vertices named `n0, n1, ...`.
///
/// A random tree guarantees connectivity; `extra_edges` further edges are
/// drawn uniformly (self-loops and parallel edges included). Weights are
/// uniform in `0..=max_weight`.
pub fn random_connected<R: Rng>(
    rng: &mut R,
    vertices: usize,
    extra_edges: usize,
    max_weight: Weight,
) -> Graph {
    let mut graph = Graph::empty();
    let ids = intern_vertices(&mut graph, vertices);
    for child in 1..vertices {
        let parent = rng.random_range(0..child);
        graph.add_edge(ids[parent], ids[child], rng.random_range(0..=max_weight));
    }
    add_random_edges(rng, &mut graph, &ids, extra_edges, max_weight);
    graph.build_adjacency();
    graph
}

/// Random graph with exactly `edges` uniformly drawn edges; it may be
/// disconnected.
pub fn random_graph<R: Rng>(
    rng: &mut R,
    vertices: usize,
    edges: usize,
    max_weight: Weight,
) -> Graph {
    let mut graph = Graph::empty();
    let ids = intern_vertices(&mut graph, vertices);
    add_random_edges(rng, &mut graph, &ids, edges, max_weight);
    graph.build_adjacency();
    graph
}

fn intern_vertices(graph: &mut Graph, vertices: usize) -> Vec<VertexId> {
    (0..vertices)
        .map(|i| graph.get_or_create_index(&format!("n{i}")))
        .collect()
}

fn add_random_edges<R: Rng>(
    rng: &mut R,
    graph: &mut Graph,
    ids: &[VertexId],
    count: usize,
    max_weight: Weight,
) {
    if ids.is_empty() {
        return;
    }
    for _ in 0..count {
        let u = ids[rng.random_range(0..ids.len())];
        let v = ids[rng.random_range(0..ids.len())];
        graph.add_edge(u, v, rng.random_range(0..=max_weight));
    }
}
