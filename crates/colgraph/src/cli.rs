//! CLI argument parsing and command dispatch.
//!
//! # Commands
//!
//! - `session` (default): load the graph, then answer `p` / `s FROM TO` / `q`
//!   commands from stdin
//! - `dump`: print every edge and exit
//! - `search FROM TO`: run one path search and exit
//!
//! # Global Flags
//!
//! - `-f, --file`: graph file (default `sample.col`, or `input` from config)
//! - `--config`: YAML configuration file
//! - `--json`: JSON output for dumps and search results
//! - `-q, --quiet`: do not print parse warnings
//! - `-v`: more logging (repeatable)
//!
//! # Example
//!
//! ```bash
//! colgraph -f queen5_5.col dump
//! colgraph -f queen5_5.col search 1 25
//! colgraph --json search 3 1
//! ```

use crate::app::App;
use crate::config::Config;
use crate::graph::NodeId;
use crate::output::{self, OutputConfig, OutputMode};
use crate::search::find_path;
use crate::session::Session;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;

/// Colgraph - load a DIMACS .col graph and query paths between nodes
///
/// Edges are directed. Paths are printed destination first.
#[derive(Parser, Debug)]
#[command(name = "colgraph")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Graph file in DIMACS .col format
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Configuration file (defaults to ./colgraph.yaml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format for programmatic use
    #[arg(long, global = true)]
    pub json: bool,

    /// Do not print parse warnings
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose output (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Answer commands interactively (the default)
    ///
    /// `p` prints the graph, `s FROM TO` searches for a path, `q` quits.
    Session,

    /// Print every edge and exit
    Dump,

    /// Search for a path between two nodes and exit
    Search(SearchArgs),
}

/// Arguments for the `search` command
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
pub struct SearchArgs {
    /// Origin node (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub from: NodeId,

    /// Destination node (1-based)
    #[arg(value_parser = clap::value_parser!(u32).range(1..))]
    pub to: NodeId,
}

impl Cli {
    /// Parse CLI arguments from command line
    #[must_use]
    pub fn parse_args() -> Self {
        <Self as Parser>::parse()
    }

    /// Parse CLI arguments from an iterator (for testing)
    ///
    /// # Errors
    ///
    /// Returns the clap error for invalid arguments.
    pub fn try_parse_from<I, T>(iter: I) -> std::result::Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Default log filter for the requested verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "colgraph=error",
            1 => "colgraph=info",
            _ => "colgraph=debug",
        }
    }

    fn output_mode(&self) -> OutputMode {
        if self.json {
            OutputMode::Json
        } else {
            OutputMode::Text
        }
    }

    /// Resolve configuration: flags over config file over defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration file cannot be loaded.
    pub fn resolve_config(&self) -> Result<Config> {
        let working_dir = std::env::current_dir()?;
        let mut config = Config::discover(self.config.as_deref(), &working_dir)
            .context("failed to load configuration")?;
        if let Some(file) = &self.file {
            config.input.clone_from(file);
        }
        Ok(config)
    }

    /// Execute the CLI command
    ///
    /// # Errors
    ///
    /// Returns an error if configuration or input cannot be loaded, a search
    /// names a node that does not exist, or writing output fails.
    pub fn execute(&self) -> Result<()> {
        let config = self.resolve_config()?;
        let input = config.input.clone();
        let app = App::load(config)
            .with_context(|| format!("failed to load graph from {}", input.display()))?;

        if !self.quiet && app.report().has_warnings() {
            output::write_warnings(
                &mut io::stderr().lock(),
                &app.report().warnings,
                OutputConfig::from_env(),
            )?;
        }

        let mode = self.output_mode();
        let mut stdout = io::stdout().lock();

        match self.command.as_ref().unwrap_or(&Commands::Session) {
            Commands::Session => {
                let executed = Session::new(app.graph(), app.config().prompt.as_str())
                    .with_mode(mode)
                    .run(io::stdin().lock(), &mut stdout)?;
                tracing::debug!(executed, "Session finished");
            }
            Commands::Dump => output::write_dump(&mut stdout, app.graph(), mode)?,
            Commands::Search(args) => {
                app.require_node(args.from)?;
                app.require_node(args.to)?;
                let path = find_path(app.graph(), args.from, args.to);
                output::write_search(&mut stdout, args.from, args.to, path.as_deref(), mode)?;
            }
        }

        stdout.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_session() {
        let cli = Cli::try_parse_from(["colgraph"]).unwrap();
        assert_eq!(cli.command, None);
        assert!(!cli.json);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["colgraph", "dump", "--json", "-f", "g.col"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Dump));
        assert!(cli.json);
        assert_eq!(cli.file, Some(PathBuf::from("g.col")));
    }

    #[test]
    fn search_takes_two_node_ids() {
        let cli = Cli::try_parse_from(["colgraph", "search", "1", "3"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Search(SearchArgs { from: 1, to: 3 }))
        );
    }

    #[test]
    fn search_rejects_zero_and_garbage() {
        assert!(Cli::try_parse_from(["colgraph", "search", "0", "3"]).is_err());
        assert!(Cli::try_parse_from(["colgraph", "search", "x", "3"]).is_err());
        assert!(Cli::try_parse_from(["colgraph", "search", "1"]).is_err());
    }

    #[test]
    fn verbosity_raises_log_filter() {
        let quiet = Cli::try_parse_from(["colgraph"]).unwrap();
        let chatty = Cli::try_parse_from(["colgraph", "-vv"]).unwrap();
        assert_eq!(quiet.log_filter(), "colgraph=error");
        assert_eq!(chatty.log_filter(), "colgraph=debug");
    }
}
