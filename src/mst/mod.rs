//! # 最小生成树引擎
//!
//! 两个引擎都只读取 [`Graph`]，各自构造辅助结构（Prim 的二叉堆边界、
//! Kruskal 的并查集），互不共享可变状态。
//!
//! * 连通图：两者给出相同的总权重，选中的边数为 `|V| - 1`；
//! * 非连通图：不是错误，结果带 [`MstOutcome::Disconnected`]，不给出总权重；
//! * 空图：[`MstOutcome::EmptyGraph`]，不执行任何步骤。
//!
//! ```rust
//! use mstree::graph::Graph;
//! use mstree::mst::{Algorithm, MstOutcome};
//!
//! let graph = Graph::from_edges([("A", "B", 1), ("B", "C", 2), ("A", "C", 3)]);
//! let start = graph.index_of("A").unwrap();
//! for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
//!     let forest = algorithm.run(&graph, start);
//!     assert_eq!(forest.outcome, MstOutcome::Spanning { total_weight: 3 });
//! }
//! ```

pub mod kruskal;
pub mod prim;
pub mod union_find;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::core::Graph;
use crate::graph::ids::VertexId;
use crate::graph::structure::{Edge, Weight};

pub use kruskal::kruskal;
pub use prim::prim;
pub use union_find::DisjointSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Prim,
    Kruskal,
}

impl Algorithm {
    /// Name used in report headers.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Prim => "Prim's",
            Algorithm::Kruskal => "Kruskal's",
        }
    }

    /// `start` is only used by Prim's.
    pub fn run(self, graph: &Graph, start: VertexId) -> SpanningForest {
        match self {
            Algorithm::Prim => prim(graph, start),
            Algorithm::Kruskal => kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown algorithm `{0}`, expected one of: prim, kruskal, all")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "prim" => Ok(Algorithm::Prim),
            "kruskal" => Ok(Algorithm::Kruskal),
            _ => Err(ParseAlgorithmError(s.to_owned())),
        }
    }
}

/// Which engines a run uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmSelection {
    Prim,
    Kruskal,
    #[default]
    All,
}

impl AlgorithmSelection {
    pub fn algorithms(self) -> &'static [Algorithm] {
        match self {
            AlgorithmSelection::Prim => &[Algorithm::Prim],
            AlgorithmSelection::Kruskal => &[Algorithm::Kruskal],
            AlgorithmSelection::All => &[Algorithm::Prim, Algorithm::Kruskal],
        }
    }
}

impl FromStr for AlgorithmSelection {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(AlgorithmSelection::All);
        }
        Ok(match s.parse::<Algorithm>()? {
            Algorithm::Prim => AlgorithmSelection::Prim,
            Algorithm::Kruskal => AlgorithmSelection::Kruskal,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MstOutcome {
    /// Every vertex is covered.
    Spanning { total_weight: Weight },
    /// Prim's: `reached` visited vertices out of `required` = |V|.
    /// Kruskal's: `reached` accepted edges out of `required` = |V| - 1.
    Disconnected { reached: usize, required: usize },
    EmptyGraph,
}

/// Index-based result of one engine run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpanningForest {
    pub algorithm: Algorithm,
    /// Selected edges in selection order.
    pub edges: Vec<Edge>,
    pub outcome: MstOutcome,
}

impl SpanningForest {
    pub fn empty(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            outcome: MstOutcome::EmptyGraph,
        }
    }

    /// Total weight, only when the result spans the graph.
    pub fn total_weight(&self) -> Option<Weight> {
        match self.outcome {
            MstOutcome::Spanning { total_weight } => Some(total_weight),
            _ => None,
        }
    }

    /// Sum over the selected edges, also for a partial forest.
    pub fn forest_weight(&self) -> Weight {
        self.edges.iter().map(|edge| edge.weight).sum()
    }

    pub fn is_spanning(&self) -> bool {
        matches!(self.outcome, MstOutcome::Spanning { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::generate::{random_connected, random_graph};
    use petgraph::algo::min_spanning_tree;
    use petgraph::data::Element;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn petgraph_forest_weight(graph: &Graph) -> Weight {
        min_spanning_tree(&graph.to_petgraph())
            .filter_map(|element| match element {
                Element::Edge { weight, .. } => Some(weight),
                _ => None,
            })
            .sum()
    }

    #[test]
    fn selection_parsing() {
        assert_eq!("all".parse::<AlgorithmSelection>(), Ok(AlgorithmSelection::All));
        assert_eq!("Prim".parse::<AlgorithmSelection>(), Ok(AlgorithmSelection::Prim));
        assert_eq!(
            "kruskal".parse::<AlgorithmSelection>(),
            Ok(AlgorithmSelection::Kruskal)
        );
        assert!("boruvka".parse::<AlgorithmSelection>().is_err());
        assert_eq!(
            AlgorithmSelection::All.algorithms(),
            &[Algorithm::Prim, Algorithm::Kruskal]
        );
    }

    #[test]
    fn engines_agree_on_connected_graphs() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for round in 0..50 {
            let vertices = 1 + round % 17;
            let graph = random_connected(&mut rng, vertices, round, 20);
            let start = VertexId::new(0);
            let by_prim = prim(&graph, start);
            let by_kruskal = kruskal(&graph);

            assert!(by_prim.is_spanning(), "round {round}");
            assert!(by_kruskal.is_spanning(), "round {round}");
            assert_eq!(by_prim.total_weight(), by_kruskal.total_weight(), "round {round}");
            assert_eq!(by_prim.edges.len(), vertices - 1);
            assert_eq!(by_kruskal.edges.len(), vertices - 1);
            assert_eq!(by_kruskal.forest_weight(), petgraph_forest_weight(&graph));
        }
    }

    #[test]
    fn any_start_vertex_gives_the_same_weight() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_connected(&mut rng, 12, 25, 9);
        let expected = kruskal(&graph).total_weight();
        for start in graph.vertices() {
            assert_eq!(prim(&graph, start).total_weight(), expected);
        }
    }

    #[test]
    fn kruskal_forest_matches_petgraph_on_disconnected_graphs() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let graph = random_graph(&mut rng, 10, 6, 50);
            let forest = kruskal(&graph);
            assert_eq!(forest.forest_weight(), petgraph_forest_weight(&graph));
            let components = graph.diagnose().components;
            assert_eq!(forest.edges.len(), graph.vertex_count() - components);
            assert_eq!(forest.is_spanning(), components == 1);
            assert_eq!(prim(&graph, VertexId::new(0)).is_spanning(), components == 1);
        }
    }

    #[test]
    fn runs_are_idempotent() {
        let mut rng = StdRng::seed_from_u64(11);
        let graph = random_connected(&mut rng, 20, 40, 3);
        for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
            let first = algorithm.run(&graph, VertexId::new(0));
            let second = algorithm.run(&graph, VertexId::new(0));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn two_components_are_disconnected_for_both() {
        let graph = Graph::from_edges([("A", "B", 1), ("C", "D", 2)]);
        for algorithm in [Algorithm::Prim, Algorithm::Kruskal] {
            let forest = algorithm.run(&graph, VertexId::new(0));
            assert!(matches!(forest.outcome, MstOutcome::Disconnected { .. }));
            assert_eq!(forest.total_weight(), None);
        }
    }
}
