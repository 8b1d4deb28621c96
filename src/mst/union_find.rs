//! 并查集：路径减半 + 按秩合并。
use std::fmt;

use crate::graph::ids::VertexId;
use crate::graph::index_vec::{Idx, IndexVec};

/// Disjoint sets over the vertices `0..n`.
///
/// A fresh instance is created for every Kruskal run and dropped afterwards.
#[derive(Clone)]
pub struct DisjointSet {
    parent: IndexVec<VertexId, VertexId>,
    rank: IndexVec<VertexId, u32>,
    sets: usize,
}

impl DisjointSet {
    /// `n` singleton sets: every vertex is its own root with rank 0.
    pub fn new(n: usize) -> Self {
        Self {
            parent: IndexVec::from_fn(n, |vertex| vertex),
            rank: IndexVec::from_elem(0, n),
            sets: n,
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets.
    pub fn count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    ///
    /// Every node visited on the way up is re-pointed at its grandparent.
    pub fn find(&mut self, mut x: VertexId) -> VertexId {
        while self.parent[x] != x {
            let grandparent = self.parent[self.parent[x]];
            self.parent[x] = grandparent;
            x = grandparent;
        }
        x
    }

    /// Merges the sets of `x` and `y`. Returns `false` when they were already
    /// in the same set, i.e. an edge `x-y` would close a cycle.
    ///
    /// The lower-rank root goes under the higher-rank one. On equal rank the
    /// root of `y` goes under the root of `x`, whose rank grows by one.
    pub fn union(&mut self, x: VertexId, y: VertexId) -> bool {
        let mut rx = self.find(x);
        let mut ry = self.find(y);
        if rx == ry {
            return false;
        }
        if self.rank[rx] < self.rank[ry] {
            std::mem::swap(&mut rx, &mut ry);
        }
        self.parent[ry] = rx;
        if self.rank[rx] == self.rank[ry] {
            self.rank[rx] += 1;
        }
        self.sets -= 1;
        true
    }

    pub fn same(&mut self, x: VertexId, y: VertexId) -> bool {
        self.find(x) == self.find(y)
    }

    #[cfg(test)]
    fn rank(&self, x: VertexId) -> u32 {
        self.rank[x]
    }
}

impl fmt::Debug for DisjointSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sets: IndexVec<VertexId, Vec<usize>> = IndexVec::from_elem(Vec::new(), self.len());
        for vertex in self.parent.indices() {
            let mut root = vertex;
            while self.parent[root] != root {
                root = self.parent[root];
            }
            sets[root].push(vertex.index());
        }
        f.debug_set()
            .entries(sets.iter().filter(|members| !members.is_empty()))
            .finish()
    }
}
