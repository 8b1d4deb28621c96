//! 执行流程：读取边表 → 构建只读图 → 依次运行所选引擎 → 输出报告。
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result, anyhow};
use log::{debug, info, warn};

use crate::config::MstConfig;
use crate::graph::core::Graph;
use crate::graph::ids::VertexId;
use crate::ingest;
use crate::mst::SpanningForest;
use crate::report::{self, MstReport, OutputFormat};

/// Results of every selected engine on one graph, in run order.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub forests: Vec<SpanningForest>,
    pub reports: Vec<MstReport>,
}

pub struct Driver {
    config: MstConfig,
}

impl Driver {
    pub fn new(config: MstConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MstConfig {
        &self.config
    }

    pub fn load_graph(&self) -> Result<Graph> {
        let input = &self.config.input;
        let graph = if input == Path::new("-") {
            debug!("Reading edge list from stdin");
            ingest::read_graph_from(io::stdin().lock()).context("Failed to read graph from stdin")?
        } else {
            debug!("Reading edge list from {:?}", input);
            ingest::read_graph(input)?
        };
        graph.log_diagnostics();
        Ok(graph)
    }

    /// Prim's start vertex: the configured name, or the first vertex read.
    pub fn start_vertex(&self, graph: &Graph) -> Result<VertexId> {
        match &self.config.start {
            Some(name) => graph
                .index_of(name)
                .ok_or_else(|| anyhow!("unknown start vertex `{}`", name)),
            None => Ok(VertexId::new(0)),
        }
    }

    pub fn analyze(&self, graph: &Graph) -> Result<Analysis> {
        let start = self.start_vertex(graph)?;
        let mut forests = Vec::new();
        let mut reports = Vec::new();
        for &algorithm in self.config.algorithm.algorithms() {
            let start_time = Instant::now();
            let forest = algorithm.run(graph, start);
            debug!("{} finished in {:?}", algorithm, start_time.elapsed());

            let report = MstReport::from_forest(graph, &forest);
            if forest.is_spanning() {
                info!("{}", report.summary());
            } else {
                warn!("{}", report.summary());
            }
            forests.push(forest);
            reports.push(report);
        }
        Ok(Analysis { forests, reports })
    }

    /// Writes the reports to the configured output file, or to `out`, and
    /// the DOT file when one is configured.
    pub fn emit<W: Write>(&self, graph: &Graph, analysis: &Analysis, out: &mut W) -> Result<()> {
        let rendered = report::render(&analysis.reports, self.config.format)?;
        match &self.config.output {
            Some(path) => {
                report::io::write_string(path, &rendered)
                    .with_context(|| format!("Failed to write report: {:?}", path))?;
                info!("Report written to {:?}", path);
            }
            None => {
                out.write_all(rendered.as_bytes())?;
                if self.config.format != OutputFormat::Text {
                    writeln!(out)?;
                }
            }
        }

        if let Some(path) = &self.config.dot {
            let highlight = analysis
                .forests
                .iter()
                .find(|forest| forest.is_spanning())
                .or_else(|| analysis.forests.first())
                .map(|forest| forest.edges.as_slice())
                .unwrap_or_default();
            graph
                .write_dot(path, highlight)
                .with_context(|| format!("Failed to write DOT file: {:?}", path))?;
            info!("DOT graph written to {:?}", path);
        }
        Ok(())
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<Analysis> {
        let graph = self.load_graph()?;
        let analysis = self.analyze(&graph)?;
        self.emit(&graph, &analysis, out)?;
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mst::{AlgorithmSelection, MstOutcome};
    use crate::report::ReportStatus;

    fn driver_with(config: MstConfig) -> Driver {
        Driver::new(config)
    }

    fn diamond() -> Graph {
        Graph::from_edges([("A", "B", 4), ("B", "C", 1), ("C", "D", 2), ("D", "A", 3)])
    }

    #[test]
    fn default_start_is_first_vertex() {
        let driver = driver_with(MstConfig::default());
        assert_eq!(driver.start_vertex(&diamond()).unwrap(), VertexId::new(0));
    }

    #[test]
    fn named_start_is_resolved() {
        let driver = driver_with(MstConfig {
            start: Some("C".into()),
            ..MstConfig::default()
        });
        let graph = diamond();
        assert_eq!(driver.start_vertex(&graph).unwrap(), VertexId::new(2));

        let analysis = driver.analyze(&graph).unwrap();
        assert_eq!(analysis.reports[0].edges[0].from, "C");
    }

    #[test]
    fn unknown_start_is_an_error() {
        let driver = driver_with(MstConfig {
            start: Some("Z".into()),
            ..MstConfig::default()
        });
        let err = driver.analyze(&diamond()).unwrap_err();
        assert_eq!(err.to_string(), "unknown start vertex `Z`");
    }

    #[test]
    fn selection_controls_engines() {
        let driver = driver_with(MstConfig {
            algorithm: AlgorithmSelection::Kruskal,
            ..MstConfig::default()
        });
        let analysis = driver.analyze(&diamond()).unwrap();
        assert_eq!(analysis.reports.len(), 1);
        assert_eq!(
            analysis.forests[0].outcome,
            MstOutcome::Spanning { total_weight: 6 }
        );
    }

    #[test]
    fn emit_writes_text_to_out() {
        let driver = driver_with(MstConfig::default());
        let graph = Graph::from_edges([("A", "B", 1), ("C", "D", 2)]);
        let analysis = driver.analyze(&graph).unwrap();
        assert!(analysis
            .reports
            .iter()
            .all(|report| report.status == ReportStatus::Disconnected));

        let mut out = Vec::new();
        driver.emit(&graph, &analysis, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains(" Prim's MST:"));
        assert!(text.contains("Warning: Graph is not connected!\n"));
        assert!(!text.contains("Total Weight"));
    }
}
