//! Kruskal 算法：按权重稳定排序全部边，借助并查集贪心选边。
use log::debug;

use crate::graph::core::Graph;
use crate::graph::ids::EdgeId;
use crate::graph::structure::Weight;
use crate::mst::union_find::DisjointSet;
use crate::mst::{Algorithm, MstOutcome, SpanningForest};

/// Minimum spanning forest by ascending edge weight.
///
/// The sort is stable, so among equal weights the edge read first wins.
/// Every edge is examined even after `|V| - 1` have been accepted, which
/// keeps the partial forest of a disconnected graph complete. In that case
/// the outcome is [`MstOutcome::Disconnected`] with `reached` the number of
/// accepted edges and `required` `|V| - 1`.
///
/// # Time complexity
///
/// - *O*(*E* log *E*)
pub fn kruskal(graph: &Graph) -> SpanningForest {
    let n = graph.vertex_count();
    if n == 0 {
        debug!("Kruskal's: graph is empty");
        return SpanningForest::empty(Algorithm::Kruskal);
    }

    let mut order: Vec<EdgeId> = graph.edges().indices().collect();
    order.sort_by_key(|&id| graph.edge(id).weight);

    let mut sets = DisjointSet::new(n);
    let mut edges = Vec::with_capacity(n - 1);
    let mut total_weight: Weight = 0;

    for id in order {
        let edge = graph.edge(id);
        if sets.union(edge.u, edge.v) {
            debug!("Kruskal's: accept {:?}", edge);
            total_weight += edge.weight;
            edges.push(edge);
        } else {
            debug!("Kruskal's: reject {:?}, closes a cycle", edge);
        }
    }

    let edges_used = edges.len();
    let outcome = if edges_used == n - 1 {
        MstOutcome::Spanning { total_weight }
    } else {
        MstOutcome::Disconnected {
            reached: edges_used,
            required: n - 1,
        }
    };
    SpanningForest {
        algorithm: Algorithm::Kruskal,
        edges,
        outcome,
    }
}
