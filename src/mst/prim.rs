//! Prim 算法：从起点出发，以二叉堆维护边界，逐步扩张单棵树。
use std::cmp::Reverse;
use std::collections::BinaryHeap;

use log::debug;

use crate::graph::core::Graph;
use crate::graph::ids::VertexId;
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Edge, Weight};
use crate::mst::{Algorithm, MstOutcome, SpanningForest};

/// Grows a spanning tree from `start`.
///
/// The frontier holds `(key, vertex)` pairs and is never decreased in place:
/// an improved vertex is pushed again and the stale entry is skipped once the
/// vertex is visited. Equal keys pop in ascending vertex order, so the result
/// is deterministic.
///
/// Edges are reported as `(parent, child, key)` in the order the children
/// are reached. When not every vertex is reached the outcome is
/// [`MstOutcome::Disconnected`] with `reached` the visited count and
/// `required` the vertex count.
///
/// # Panics
///
/// Panics if the graph is non-empty and `start` is not one of its vertices,
/// or if its adjacency lists have not been built.
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
pub fn prim(graph: &Graph, start: VertexId) -> SpanningForest {
    let n = graph.vertex_count();
    if n == 0 {
        debug!("Prim's: graph is empty");
        return SpanningForest::empty(Algorithm::Prim);
    }
    assert!(start.index() < n, "start vertex {start:?} out of bounds");
    assert!(graph.is_adjacency_built(), "adjacency not built, call `build_adjacency` first");

    let mut visited = IndexVec::<VertexId, bool>::from_elem(false, n);
    let mut key = IndexVec::<VertexId, Option<Weight>>::from_elem(None, n);
    let mut parent = IndexVec::<VertexId, Option<VertexId>>::from_elem(None, n);
    let mut frontier = BinaryHeap::new();

    key[start] = Some(0);
    frontier.push(Reverse((0, start)));

    let mut edges = Vec::with_capacity(n - 1);
    let mut total_weight: Weight = 0;
    let mut visited_count = 0;

    while let Some(Reverse((weight, u))) = frontier.pop() {
        if visited[u] {
            continue;
        }
        visited[u] = true;
        visited_count += 1;

        if let Some(p) = parent[u] {
            debug!("Prim's: accept {:?} - {:?} : {}", p, u, weight);
            edges.push(Edge::new(p, u, weight));
            total_weight += weight;
        }

        for neighbor in graph.neighbors(u) {
            let v = neighbor.vertex;
            if !visited[v] && key[v].is_none_or(|current| neighbor.weight < current) {
                key[v] = Some(neighbor.weight);
                parent[v] = Some(u);
                frontier.push(Reverse((neighbor.weight, v)));
            }
        }
    }

    let outcome = if visited_count == n {
        MstOutcome::Spanning { total_weight }
    } else {
        MstOutcome::Disconnected {
            reached: visited_count,
            required: n,
        }
    };
    SpanningForest {
        algorithm: Algorithm::Prim,
        edges,
        outcome,
    }
}
