pub mod io;

use std::fmt;
use std::str::FromStr;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::core::Graph;
use crate::graph::structure::Weight;
use crate::mst::{Algorithm, MstOutcome, SpanningForest};

pub use io::IoError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedEdge {
    pub from: String,
    pub to: String,
    pub weight: Weight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Connected,
    Disconnected,
    Empty,
}

/// Engine result with vertex names resolved, ready for display or
/// serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MstReport {
    pub algorithm: Algorithm,
    pub status: ReportStatus,
    pub edges: Vec<NamedEdge>,
    /// Only present when the tree spans the graph.
    pub total_weight: Option<Weight>,
}

impl MstReport {
    pub fn from_forest(graph: &Graph, forest: &SpanningForest) -> Self {
        let edges = forest
            .edges
            .iter()
            .map(|edge| NamedEdge {
                from: graph.name(edge.u).to_owned(),
                to: graph.name(edge.v).to_owned(),
                weight: edge.weight,
            })
            .collect();
        let status = match forest.outcome {
            MstOutcome::Spanning { .. } => ReportStatus::Connected,
            MstOutcome::Disconnected { .. } => ReportStatus::Disconnected,
            MstOutcome::EmptyGraph => ReportStatus::Empty,
        };
        Self {
            algorithm: forest.algorithm,
            status,
            edges,
            total_weight: forest.total_weight(),
        }
    }

    /// One-line form for logs, e.g. `Prim's: A-B(1), B-C(2); total 3`.
    pub fn summary(&self) -> String {
        let edges = self
            .edges
            .iter()
            .map(|edge| format!("{}-{}({})", edge.from, edge.to, edge.weight))
            .join(", ");
        match (self.status, self.total_weight) {
            (ReportStatus::Connected, Some(total)) => {
                format!("{}: {}; total {}", self.algorithm, edges, total)
            }
            (ReportStatus::Empty, _) => format!("{}: empty graph", self.algorithm),
            _ => format!("{}: {}; not connected", self.algorithm, edges),
        }
    }

    fn disconnected_warning(&self) -> &'static str {
        match self.algorithm {
            Algorithm::Prim => {
                "Warning: Graph is not connected! MST does not cover all vertices."
            }
            Algorithm::Kruskal => "Warning: Graph is not connected!",
        }
    }
}

impl fmt::Display for MstReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.status == ReportStatus::Empty {
            return writeln!(f, "Graph is empty.");
        }
        writeln!(f, "\n {} MST:", self.algorithm)?;
        for edge in &self.edges {
            writeln!(f, "{} - {} : {}", edge.from, edge.to, edge.weight)?;
        }
        match self.total_weight {
            Some(total) if self.status == ReportStatus::Connected => {
                writeln!(f, "Total Weight: {}", total)
            }
            _ => writeln!(f, "{}", self.disconnected_warning()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Ron,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown output format `{0}`, expected one of: text, json, ron")]
pub struct ParseFormatError(String);

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "ron" => Ok(OutputFormat::Ron),
            _ => Err(ParseFormatError(s.to_owned())),
        }
    }
}

/// Renders all reports of one run in `format`.
pub fn render(reports: &[MstReport], format: OutputFormat) -> Result<String, IoError> {
    match format {
        OutputFormat::Text => Ok(reports.iter().map(ToString::to_string).collect()),
        OutputFormat::Json => io::to_json_string(&reports),
        OutputFormat::Ron => io::to_ron_string(&reports),
    }
}
