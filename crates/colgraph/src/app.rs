//! Application context for CLI command execution.
//!
//! [`App`] opens the configured input file, parses it once into a
//! [`Graph`], and keeps the parse report around so callers can show the
//! warnings.
//!
//! # Example
//!
//! ```no_run
//! use colgraph::app::App;
//! use colgraph::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let app = App::load(Config::default())?;
//!     println!("{} nodes", app.graph().n_nodes());
//!     Ok(())
//! }
//! ```

use crate::config::Config;
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::parser::{ParseReport, parse_graph};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// A loaded graph together with the settings used to load it.
#[derive(Debug)]
pub struct App {
    graph: Graph,
    report: ParseReport,
    config: Config,
}

impl App {
    /// Open `config.input` and parse it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be opened or read.
    pub fn load(config: Config) -> Result<Self> {
        let file = File::open(&config.input)?;
        Self::from_reader(BufReader::new(file), config)
    }

    /// Parse a graph from an already-open reader.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails.
    pub fn from_reader<R: BufRead>(reader: R, config: Config) -> Result<Self> {
        let mut graph = Graph::new();
        let report = parse_graph(reader, &mut graph, &config.parse_options())?;

        tracing::info!(
            input = %config.input.display(),
            n_nodes = graph.n_nodes(),
            edges = graph.edge_count(),
            warnings = report.warnings.len(),
            "Loaded graph"
        );

        Ok(Self {
            graph,
            report,
            config,
        })
    }

    /// The loaded graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The report produced while parsing.
    #[must_use]
    pub fn report(&self) -> &ParseReport {
        &self.report
    }

    /// The configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check that `node` exists in the loaded graph.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for ids outside `1..=n`.
    pub fn require_node(&self, node: NodeId) -> Result<()> {
        if self.graph.contains(node) {
            Ok(())
        } else {
            Err(Error::InvalidInput(format!(
                "node {node} does not exist (graph has {} nodes)",
                self.graph.n_nodes()
            )))
        }
    }
}
