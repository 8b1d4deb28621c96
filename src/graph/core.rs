//! 图模型：名称到索引的映射、边表与邻接表，以及只读的诊断和导出。
use std::collections::HashMap;
use std::fmt::{self, Write as FmtWrite};
use std::fs;
use std::path::Path;

use indexmap::IndexSet;
use petgraph::graph::{NodeIndex, UnGraph};
use smallvec::SmallVec;

use crate::graph::ids::{EdgeId, VertexId};
use crate::graph::index_vec::{Idx, IndexVec};
use crate::graph::structure::{Edge, Neighbor, Weight};
use crate::mst::union_find::DisjointSet;

pub type AdjacencyList = SmallVec<[Neighbor; 4]>;

/// Undirected weighted graph.
///
/// Built in three steps: names are interned with
/// [`get_or_create_index`](Graph::get_or_create_index), edges appended with
/// [`add_edge`](Graph::add_edge), then [`build_adjacency`](Graph::build_adjacency)
/// derives the neighbour lists. After that the graph is only read.
#[derive(Clone, Default)]
pub struct Graph {
    names: IndexSet<String>,
    edges: IndexVec<EdgeId, Edge>,
    adjacency: IndexVec<VertexId, AdjacencyList>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.names)
            .field("edges", &self.edges)
            .field("adjacency_built", &self.is_adjacency_built())
            .finish()
    }
}

impl Graph {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a graph from `(source, destination, weight)` triples, interning
    /// names in first-seen order, and builds the adjacency lists.
    pub fn from_edges<'a>(triples: impl IntoIterator<Item = (&'a str, &'a str, Weight)>) -> Self {
        let mut graph = Self::empty();
        for (source, destination, weight) in triples {
            let u = graph.get_or_create_index(source);
            let v = graph.get_or_create_index(destination);
            graph.add_edge(u, v, weight);
        }
        graph.build_adjacency();
        graph
    }

    pub fn get_or_create_index(&mut self, name: &str) -> VertexId {
        if let Some(idx) = self.names.get_index_of(name) {
            return VertexId::from_usize(idx);
        }
        let (idx, _) = self.names.insert_full(name.to_owned());
        VertexId::from_usize(idx)
    }

    /// Appends an edge. Any adjacency built so far is dropped and must be
    /// rebuilt before the graph is handed to an engine.
    pub fn add_edge(&mut self, u: VertexId, v: VertexId, weight: Weight) -> EdgeId {
        debug_assert!(u.index() < self.names.len() && v.index() < self.names.len());
        self.adjacency.clear();
        self.edges.push(Edge::new(u, v, weight))
    }

    pub fn build_adjacency(&mut self) {
        let mut adjacency: IndexVec<VertexId, AdjacencyList> =
            IndexVec::from_elem(AdjacencyList::new(), self.names.len());
        for edge in &self.edges {
            adjacency[edge.u].push(Neighbor::new(edge.v, edge.weight));
            adjacency[edge.v].push(Neighbor::new(edge.u, edge.weight));
        }
        self.adjacency = adjacency;
    }

    pub fn is_adjacency_built(&self) -> bool {
        self.adjacency.len() == self.names.len()
    }

    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + use<> {
        (0..self.names.len()).map(VertexId::from_usize)
    }

    pub fn edges(&self) -> &IndexVec<EdgeId, Edge> {
        &self.edges
    }

    pub fn edge(&self, id: EdgeId) -> Edge {
        self.edges[id]
    }

    /// Neighbours of `vertex`, empty until the adjacency has been built.
    pub fn neighbors(&self, vertex: VertexId) -> &[Neighbor] {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or_default()
    }

    /// # Panics
    ///
    /// Panics if `vertex` was not created by this graph.
    pub fn name(&self, vertex: VertexId) -> &str {
        &self.names[vertex.index()]
    }

    pub fn index_of(&self, name: &str) -> Option<VertexId> {
        self.names.get_index_of(name).map(VertexId::from_usize)
    }

    pub fn to_petgraph(&self) -> UnGraph<String, Weight> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        for name in &self.names {
            graph.add_node(name.clone());
        }
        for edge in &self.edges {
            graph.add_edge(
                NodeIndex::new(edge.u.index()),
                NodeIndex::new(edge.v.index()),
                edge.weight,
            );
        }
        graph
    }

    /// Graphviz rendering. Each edge in `highlight` marks one matching graph
    /// edge, so of two parallel edges only the selected one is drawn bold.
    pub fn to_dot(&self, highlight: &[Edge]) -> String {
        let mut pending: HashMap<(VertexId, VertexId, Weight), usize> = HashMap::new();
        for edge in highlight {
            let (a, b) = edge.unordered_endpoints();
            *pending.entry((a, b, edge.weight)).or_default() += 1;
        }

        let mut dot = String::new();
        let _ = writeln!(&mut dot, "graph MST {{");
        let _ = writeln!(&mut dot, "    node [fontname=\"Helvetica\", shape=circle];");
        for vertex in self.vertices() {
            let _ = writeln!(
                &mut dot,
                "    v{} [label=\"{}\"];",
                vertex.index(),
                escape_label(self.name(vertex))
            );
        }
        for edge in &self.edges {
            let (a, b) = edge.unordered_endpoints();
            let selected = match pending.get_mut(&(a, b, edge.weight)) {
                Some(count) if *count > 0 => {
                    *count -= 1;
                    true
                }
                _ => false,
            };
            let style = if selected {
                ", color=red, penwidth=2.0"
            } else {
                ""
            };
            let _ = writeln!(
                &mut dot,
                "    v{} -- v{} [label=\"{}\"{}];",
                edge.u.index(),
                edge.v.index(),
                edge.weight,
                style
            );
        }
        let _ = writeln!(&mut dot, "}}");
        dot
    }

    pub fn write_dot<P: AsRef<Path>>(&self, path: P, highlight: &[Edge]) -> std::io::Result<()> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, self.to_dot(highlight))
    }

    pub fn diagnose(&self) -> DiagnosticReport {
        let mut components = DisjointSet::new(self.vertex_count());
        let mut seen_pairs: HashMap<(VertexId, VertexId), usize> = HashMap::new();
        let mut self_loops = Vec::new();
        for edge in &self.edges {
            components.union(edge.u, edge.v);
            if edge.is_self_loop() {
                self_loops.push(self.name(edge.u).to_owned());
            } else {
                *seen_pairs.entry(edge.unordered_endpoints()).or_default() += 1;
            }
        }

        let mut parallel_edges = seen_pairs
            .into_iter()
            .filter(|&(_, count)| count > 1)
            .collect::<Vec<_>>();
        parallel_edges.sort_unstable();

        DiagnosticReport {
            total_vertices: self.vertex_count(),
            total_edges: self.edge_count(),
            components: components.count(),
            self_loops,
            parallel_edges: parallel_edges
                .into_iter()
                .map(|((a, b), count)| (self.name(a).to_owned(), self.name(b).to_owned(), count))
                .collect(),
        }
    }

    pub fn log_diagnostics(&self) {
        let report = self.diagnose();
        if report.has_issues() {
            log::warn!(
                "graph has {} vertices, {} edges, {} component(s)",
                report.total_vertices,
                report.total_edges,
                report.components
            );
            if report.components > 1 {
                log::warn!("graph is split into {} components", report.components);
            }
            for name in &report.self_loops {
                log::warn!("  self-loop on {}", name);
            }
            for (a, b, count) in &report.parallel_edges {
                log::warn!("  {} parallel edges between {} and {}", count, a, b);
            }
        } else {
            log::info!(
                "graph check passed: {} vertices, {} edges, connected",
                report.total_vertices,
                report.total_edges
            );
        }
    }
}

/// Structural summary of a [`Graph`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub total_vertices: usize,
    pub total_edges: usize,
    /// Connected components; 0 for the empty graph.
    pub components: usize,
    pub self_loops: Vec<String>,
    /// `(a, b, count)` for every unordered pair joined by more than one edge.
    pub parallel_edges: Vec<(String, String, usize)>,
}

impl DiagnosticReport {
    pub fn has_issues(&self) -> bool {
        self.components > 1 || !self.self_loops.is_empty() || !self.parallel_edges.is_empty()
    }
}

fn escape_label(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_first_seen_order() {
        let mut graph = Graph::empty();
        let b = graph.get_or_create_index("B");
        let a = graph.get_or_create_index("A");
        assert_eq!(graph.get_or_create_index("B"), b);
        assert_eq!(b, VertexId::new(0));
        assert_eq!(a, VertexId::new(1));
        assert_eq!(graph.name(a), "A");
        assert_eq!(graph.index_of("A"), Some(a));
        assert_eq!(graph.index_of("Z"), None);
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = Graph::from_edges([("A", "B", 1), ("B", "C", 2)]);
        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        let c = graph.index_of("C").unwrap();

        assert!(graph.is_adjacency_built());
        assert_eq!(graph.neighbors(a), &[Neighbor::new(b, 1)]);
        assert_eq!(graph.neighbors(b), &[Neighbor::new(a, 1), Neighbor::new(c, 2)]);
        assert_eq!(graph.neighbors(c), &[Neighbor::new(b, 2)]);
    }

    #[test]
    fn adding_an_edge_invalidates_adjacency() {
        let mut graph = Graph::from_edges([("A", "B", 1)]);
        let c = graph.get_or_create_index("C");
        let a = graph.index_of("A").unwrap();
        graph.add_edge(a, c, 4);
        assert!(!graph.is_adjacency_built());
        assert!(graph.neighbors(a).is_empty());

        graph.build_adjacency();
        assert_eq!(graph.neighbors(a).len(), 2);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn diagnose_reports_components_loops_and_parallel_edges() {
        let graph = Graph::from_edges([
            ("A", "B", 5),
            ("B", "A", 5),
            ("C", "D", 1),
            ("D", "D", 2),
        ]);
        let report = graph.diagnose();
        assert_eq!(report.total_vertices, 4);
        assert_eq!(report.total_edges, 4);
        assert_eq!(report.components, 2);
        assert_eq!(report.self_loops, vec!["D".to_string()]);
        assert_eq!(
            report.parallel_edges,
            vec![("A".to_string(), "B".to_string(), 2)]
        );
        assert!(report.has_issues());

        assert!(!Graph::from_edges([("A", "B", 1)]).diagnose().has_issues());
    }

    #[test]
    fn dot_highlights_only_selected_edges() {
        let graph = Graph::from_edges([("A", "B", 5), ("A", "B", 5), ("B", "C", 1)]);
        let a = graph.index_of("A").unwrap();
        let b = graph.index_of("B").unwrap();
        let dot = graph.to_dot(&[Edge::new(b, a, 5)]);

        assert!(dot.starts_with("graph MST {"));
        assert_eq!(dot.matches("color=red").count(), 1);
        assert!(dot.contains("v0 [label=\"A\"]"));
        assert!(dot.contains("v1 -- v2 [label=\"1\"];"));
    }

    #[test]
    fn petgraph_conversion_keeps_indices() {
        let graph = Graph::from_edges([("A", "B", 3), ("B", "C", 4)]);
        let pg = graph.to_petgraph();
        assert_eq!(pg.node_count(), 3);
        assert_eq!(pg.edge_count(), 2);
        assert_eq!(pg[NodeIndex::new(2)], "C");
    }
}
