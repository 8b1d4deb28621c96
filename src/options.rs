//! Parsing Options.
//! `mst [FILE] -a {prim|kruskal|all} -s {vertex} -f {text|json|ron}`
//! `    -o {file} --dot {file} -c {config}`

use std::path::PathBuf;

use anyhow::Result;
use clap::{Arg, Command, value_parser};

use crate::config::DEFAULT_CONFIG_FILE;
use crate::mst::AlgorithmSelection;
use crate::report::OutputFormat;

fn make_options_parser() -> clap::Command {
    Command::new("mst")
        .no_binary_name(true)
        .about("Minimum spanning tree of an undirected weighted edge list (Prim's and Kruskal's)")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input")
                .value_name("FILE")
                .help(concat!(
                    "Edge list, one `source destination weight` per line; ",
                    "`-` reads stdin [default: graph.txt]"
                ))
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("algorithm")
                .short('a')
                .long("algorithm")
                .help("Engines to run [default: all]")
                .value_parser(["prim", "kruskal", "all"]),
        )
        .arg(
            Arg::new("start")
                .short('s')
                .long("start")
                .value_name("VERTEX")
                .help("Start vertex for Prim's [default: first vertex in the file]"),
        )
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Report format [default: text]")
                .value_parser(["text", "json", "ron"]),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Path to file where the report will be stored")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("dot")
                .long("dot")
                .value_name("FILE")
                .help("Write the graph as Graphviz DOT with the selected edges highlighted")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .default_value(DEFAULT_CONFIG_FILE)
                .value_parser(value_parser!(PathBuf)),
        )
}

/// Flags as given on the command line; `None` leaves the config file value
/// in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub input: Option<PathBuf>,
    pub algorithm: Option<AlgorithmSelection>,
    pub start: Option<String>,
    pub format: Option<OutputFormat>,
    pub output: Option<PathBuf>,
    pub dot: Option<PathBuf>,
    pub config: PathBuf,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            input: None,
            algorithm: None,
            start: None,
            format: None,
            output: None,
            dot: None,
            config: PathBuf::from(DEFAULT_CONFIG_FILE),
        }
    }
}

impl Options {
    pub fn parse_from_str(s: &str) -> Result<Self> {
        let flags = shellwords::split(s)?;
        Self::parse_from_args(&flags)
    }

    pub fn parse_from_args(flags: &[String]) -> Result<Self> {
        let app = make_options_parser();
        let matches = app.try_get_matches_from(flags.iter())?;

        let algorithm = matches
            .get_one::<String>("algorithm")
            .map(|s| s.parse::<AlgorithmSelection>())
            .transpose()?;
        let format = matches
            .get_one::<String>("format")
            .map(|s| s.parse::<OutputFormat>())
            .transpose()?;
        let config = matches
            .get_one::<PathBuf>("config")
            .cloned()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        Ok(Options {
            input: matches.get_one::<PathBuf>("input").cloned(),
            algorithm,
            start: matches.get_one::<String>("start").cloned(),
            format,
            output: matches.get_one::<PathBuf>("output").cloned(),
            dot: matches.get_one::<PathBuf>("dot").cloned(),
            config,
        })
    }
}
