//! # 无向带权图模型
//!
//! 顶点按首次出现的顺序获得稠密索引 `VertexId ∈ [0, |V|)`，图独占
//! 名称 ↔ 索引的双向映射。边 `(u, v, w)` 以插入顺序保存于边表，
//! `w ∈ ℕ`。邻接表由边表对称地导出：边 `u–v` 同时出现在 `u` 与 `v`
//! 的邻居列表中。
//!
//! 图构建完成（`build_adjacency`）之后只读，Prim 与 Kruskal 两个
//! 引擎共享同一份只读图。
//!
//! ## 示例
//!
//! ```rust
//! use mstree::graph::*;
//!
//! let mut graph = Graph::empty();
//! let a = graph.get_or_create_index("A");
//! let b = graph.get_or_create_index("B");
//! graph.add_edge(a, b, 4);
//! graph.build_adjacency();
//!
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.neighbors(a), &[Neighbor::new(b, 4)]);
//! assert_eq!(graph.name(b), "B");
//! ```

pub mod core;
pub mod generate;
pub mod ids;
pub mod index_vec;
pub mod structure;

pub use self::core::{AdjacencyList, DiagnosticReport, Graph};
pub use ids::{EdgeId, VertexId};
pub use index_vec::{Idx, IndexVec};
pub use structure::{Edge, Neighbor, Weight};
