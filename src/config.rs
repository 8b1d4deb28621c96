use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::mst::AlgorithmSelection;
use crate::options::Options;
use crate::report::OutputFormat;

pub const DEFAULT_CONFIG_FILE: &str = "mst.toml";

/// Settings for one run. Read from a TOML file; command-line flags win over
/// values found there.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MstConfig {
    #[serde(default = "default_input")]
    pub input: PathBuf,
    #[serde(default)]
    pub algorithm: AlgorithmSelection,
    /// Name of Prim's start vertex; the first vertex read when absent.
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub format: OutputFormat,
    /// Report destination; stdout when absent.
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub dot: Option<PathBuf>,
}

impl Default for MstConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            algorithm: AlgorithmSelection::default(),
            start: None,
            format: OutputFormat::default(),
            output: None,
            dot: None,
        }
    }
}

impl MstConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn merge_options(mut self, options: &Options) -> Self {
        if let Some(input) = &options.input {
            self.input = input.clone();
        }
        if let Some(algorithm) = options.algorithm {
            self.algorithm = algorithm;
        }
        if let Some(start) = &options.start {
            self.start = Some(start.clone());
        }
        if let Some(format) = options.format {
            self.format = format;
        }
        if let Some(output) = &options.output {
            self.output = Some(output.clone());
        }
        if let Some(dot) = &options.dot {
            self.dot = Some(dot.clone());
        }
        self
    }
}

// Edge list read when neither flags nor config name one.
fn default_input() -> PathBuf {
    PathBuf::from("graph.txt")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = MstConfig::from_toml_str("").unwrap();
        assert_eq!(config, MstConfig::default());
        assert_eq!(config.input, PathBuf::from("graph.txt"));
        assert_eq!(config.algorithm, AlgorithmSelection::All);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn parses_all_fields() {
        let config = MstConfig::from_toml_str(
            r#"
            input = "roads.txt"
            algorithm = "kruskal"
            start = "Paris"
            format = "json"
            output = "out/report.json"
            dot = "out/mst.dot"
            "#,
        )
        .unwrap();
        assert_eq!(config.input, PathBuf::from("roads.txt"));
        assert_eq!(config.algorithm, AlgorithmSelection::Kruskal);
        assert_eq!(config.start.as_deref(), Some("Paris"));
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.output, Some(PathBuf::from("out/report.json")));
        assert_eq!(config.dot, Some(PathBuf::from("out/mst.dot")));
    }

    #[test]
    fn unknown_keys_and_values_are_errors() {
        assert!(MstConfig::from_toml_str("algorithm = \"boruvka\"").is_err());
        assert!(MstConfig::from_toml_str("threads = 4").is_err());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = MstConfig::load_from_file("/definitely/not/here/mst.toml").unwrap();
        assert_eq!(config, MstConfig::default());
    }

    #[test]
    fn command_line_overrides_file() {
        let file =
            MstConfig::from_toml_str("algorithm = \"prim\"\nstart = \"B\"\nformat = \"ron\"")
                .unwrap();
        let options = Options::parse_from_str("roads.txt -a kruskal -o report.txt").unwrap();
        let merged = file.merge_options(&options);
        assert_eq!(merged.input, PathBuf::from("roads.txt"));
        assert_eq!(merged.algorithm, AlgorithmSelection::Kruskal);
        assert_eq!(merged.start.as_deref(), Some("B"));
        assert_eq!(merged.format, OutputFormat::Ron);
        assert_eq!(merged.output, Some(PathBuf::from("report.txt")));
        assert_eq!(merged.dot, None);
    }
}
