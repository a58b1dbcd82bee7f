//! Output formatting for dumps, search results and warnings.
//!
//! Data goes to the writer passed in (stdout in the binary) in either text
//! or JSON form. Warnings and notices are meant for stderr and are coloured
//! unless colours are disabled.

use crate::graph::{Graph, NodeId};
use crate::warning::Warning;
use colored::Colorize;
use serde::Serialize;
use std::env;
use std::io::{self, Write};

/// Output format for data written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable text.
    #[default]
    Text,
    /// Single-line JSON documents for programmatic use.
    Json,
}

/// Styling settings for notices written to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputConfig {
    /// Whether to use colours.
    pub use_colors: bool,
}

impl OutputConfig {
    /// Create an `OutputConfig` by reading environment variables.
    ///
    /// Colours are disabled when `NO_COLOR` is set (any value) or when
    /// `COLGRAPH_COLOR` is `0` or `false`.
    #[must_use]
    pub fn from_env() -> Self {
        // Respect NO_COLOR standard (https://no-color.org/)
        let use_colors = env::var("NO_COLOR").is_err()
            && env::var("COLGRAPH_COLOR")
                .map(|v| v != "0" && !v.eq_ignore_ascii_case("false"))
                .unwrap_or(true);
        Self { use_colors }
    }

    /// Configuration with colours turned off.
    #[must_use]
    pub fn plain() -> Self {
        Self { use_colors: false }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { use_colors: true }
    }
}

/// Apply the "warning" colour (yellow).
#[must_use]
pub fn warning(text: &str, config: OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

#[derive(Serialize)]
struct EdgeJson {
    from: NodeId,
    to: NodeId,
}

#[derive(Serialize)]
struct DumpJson {
    n_nodes: u32,
    edges: Vec<EdgeJson>,
}

#[derive(Serialize)]
struct SearchJson<'a> {
    from: NodeId,
    to: NodeId,
    path: Option<&'a [NodeId]>,
}

/// Writes the full graph listing.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_dump<W: Write>(out: &mut W, graph: &Graph, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::Text => {
            writeln!(out, "Number of nodes: {}", graph.n_nodes())?;
            for (from, to) in graph.dump() {
                writeln!(out, "Edge from {from} to {to}")?;
            }
            Ok(())
        }
        OutputMode::Json => {
            let doc = DumpJson {
                n_nodes: graph.n_nodes(),
                edges: graph.dump().map(|(from, to)| EdgeJson { from, to }).collect(),
            };
            write_json(out, &doc)
        }
    }
}

/// Writes the outcome of a search from `from` to `to`.
///
/// `path` is ordered destination first, as returned by
/// [`find_path`](crate::search::find_path).
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_search<W: Write>(
    out: &mut W,
    from: NodeId,
    to: NodeId,
    path: Option<&[NodeId]>,
    mode: OutputMode,
) -> io::Result<()> {
    match (mode, path) {
        (OutputMode::Text, Some(path)) => writeln!(out, "Path: {}", format_path(path)),
        (OutputMode::Text, None) => writeln!(out, "No path from {from} to {to}"),
        (OutputMode::Json, path) => write_json(out, &SearchJson { from, to, path }),
    }
}

/// Writes one line per warning.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_warnings<W: Write>(
    out: &mut W,
    warnings: &[Warning],
    config: OutputConfig,
) -> io::Result<()> {
    for w in warnings {
        writeln!(out, "{} {}", warning("warning:", config), w)?;
    }
    Ok(())
}

/// Renders a destination-first path as `3 <- 2 <- 1`.
#[must_use]
pub fn format_path(path: &[NodeId]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" <- ")
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> io::Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)
}
