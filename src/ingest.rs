//! 边表文件读取：每行 `source destination weight`，以空白分隔。
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use log::{debug, info, trace};
use nom::bytes::complete::take_till1;
use nom::character::complete::{digit1, one_of, space0, space1};
use nom::combinator::{opt, recognize};
use nom::sequence::{delimited, preceded};
use nom::{IResult, Parser};
use thiserror::Error;

use crate::graph::core::Graph;
use crate::graph::structure::Weight;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("could not open file {path:?}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not read input: {0}")]
    Read(#[from] std::io::Error),
    #[error("line {line}: expected `source destination weight`, found {content:?}")]
    Malformed { line: usize, content: String },
    #[error("line {line}: negative weight {weight} between {from} and {to}")]
    NegativeWeight {
        line: usize,
        from: String,
        to: String,
        weight: i64,
    },
    /// Weight above `u32::MAX`. Bounding single weights keeps every tree
    /// total within [`Weight`].
    #[error("line {line}: weight {weight} is out of range")]
    WeightOverflow { line: usize, weight: String },
    #[error("no edges found in the input")]
    Empty,
}

#[derive(Debug, PartialEq, Eq)]
struct RawEdge<'a> {
    source: &'a str,
    destination: &'a str,
    weight: &'a str,
}

fn parse_name(input: &str) -> IResult<&str, &str> {
    take_till1(|c: char| c.is_whitespace()).parse(input)
}

fn parse_weight(input: &str) -> IResult<&str, &str> {
    recognize((opt(one_of("+-")), digit1)).parse(input)
}

fn parse_edge(input: &str) -> IResult<&str, RawEdge<'_>> {
    (
        preceded(space0, parse_name),
        preceded(space1, parse_name),
        delimited(space1, parse_weight, space0),
    )
        .parse(input)
        .map(|(next_input, (source, destination, weight))| {
            let edge = RawEdge {
                source,
                destination,
                weight,
            };
            (next_input, edge)
        })
}

/// The whole line must be consumed for a parse to count.
fn map_result<T>(result: IResult<&str, T>) -> Option<T> {
    match result {
        IResult::Ok((remaining, val)) if remaining.is_empty() => Some(val),
        _ => None,
    }
}

/// Parses an edge list into a graph with its adjacency built.
///
/// Blank lines and lines starting with `#` are skipped. Vertex indices are
/// handed out in the order names first appear.
///
/// Each non-blank line is exactly one record, so a triple cannot span lines
/// and the first bad line fails the whole parse instead of ending the input
/// early. A vertex whose name starts with `#` cannot open a line, since the
/// line reads as a comment.
pub fn parse_graph(content: &str) -> Result<Graph, IngestError> {
    let mut graph = Graph::empty();
    for (idx, raw_line) in content.lines().enumerate() {
        let line = idx + 1;
        let trimmed = raw_line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let edge = map_result(parse_edge(trimmed)).ok_or_else(|| IngestError::Malformed {
            line,
            content: trimmed.to_owned(),
        })?;
        let weight = edge
            .weight
            .parse::<i64>()
            .map_err(|_| IngestError::WeightOverflow {
                line,
                weight: edge.weight.to_owned(),
            })?;
        if weight < 0 {
            return Err(IngestError::NegativeWeight {
                line,
                from: edge.source.to_owned(),
                to: edge.destination.to_owned(),
                weight,
            });
        }

        let weight = u32::try_from(weight).map_err(|_| IngestError::WeightOverflow {
            line,
            weight: edge.weight.to_owned(),
        })?;

        let u = graph.get_or_create_index(edge.source);
        let v = graph.get_or_create_index(edge.destination);
        let id = graph.add_edge(u, v, Weight::from(weight));
        trace!("line {}: {:?} = {:?}", line, id, graph.edge(id));
    }

    if graph.edge_count() == 0 {
        return Err(IngestError::Empty);
    }
    graph.build_adjacency();
    debug!("{:?}", graph);
    Ok(graph)
}

pub fn read_graph_from<R: Read>(mut reader: R) -> Result<Graph, IngestError> {
    let mut content = String::new();
    reader.read_to_string(&mut content)?;
    parse_graph(&content)
}

pub fn read_graph<P: AsRef<Path>>(path: P) -> Result<Graph, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let graph = read_graph_from(file)?;
    info!(
        "read {} vertices and {} edges from {}",
        graph.vertex_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(graph)
}
