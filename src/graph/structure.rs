//! 图的静态结构元素：权重、边与邻接项。
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::ids::VertexId;

/// Edge weights are non-negative integers; negative input is rejected during
/// ingestion, so the engines never see one.
pub type Weight = u64;

/// An undirected edge. `u` and `v` keep the order they were read in, which is
/// also the order used when the edge is reported.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Edge {
    pub u: VertexId,
    pub v: VertexId,
    pub weight: Weight,
}

impl Edge {
    pub fn new(u: VertexId, v: VertexId, weight: Weight) -> Self {
        Self { u, v, weight }
    }

    pub fn is_self_loop(&self) -> bool {
        self.u == self.v
    }

    /// Endpoints ordered so that `u-v` and `v-u` compare equal.
    pub fn unordered_endpoints(&self) -> (VertexId, VertexId) {
        if self.u <= self.v {
            (self.u, self.v)
        } else {
            (self.v, self.u)
        }
    }
}

impl fmt::Debug for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}-{:?}:{}", self.u, self.v, self.weight)
    }
}

/// One hop in an adjacency list.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Neighbor {
    pub vertex: VertexId,
    pub weight: Weight,
}

impl Neighbor {
    pub fn new(vertex: VertexId, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}
