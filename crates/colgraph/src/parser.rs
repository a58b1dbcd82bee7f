//! Line-oriented parser for DIMACS-style `.col` graph descriptions.
//!
//! Each line is classified by its first character:
//!
//! - `p edge <n_nodes> <n_edges>` declares the node count. The edge count is
//!   optional and only informational.
//! - `e <from> <to>` adds a directed edge.
//! - Anything else (comments, blank lines, unknown records) is ignored.
//!
//! Bad lines never stop the parse. Structural problems and graph rejections
//! are collected as [`Warning`]s in the returned [`ParseReport`]; only an I/O
//! error from the reader ends parsing early. There is no rollback, so every
//! mutation applied before a later failure stays in the graph.
//!
//! # Ordering
//!
//! Edges are checked against the node count in effect when their line is
//! read. An edge that appears before the `p` line is rejected as out of
//! range because the graph still has zero nodes at that point.
//!
//! # Line length
//!
//! At most [`ParseOptions::max_line_length`] bytes of each line are stored.
//! The rest of a longer line is skipped without being buffered, the kept
//! prefix is parsed on its own, and a [`Warning::TruncatedLine`] records the
//! full length.
//!
//! # Example
//!
//! ```
//! use colgraph::graph::Graph;
//! use colgraph::parser::{parse_graph, ParseOptions};
//!
//! let input = "c tiny graph\np edge 3 2\ne 1 2\ne 2 3\n";
//! let mut graph = Graph::new();
//! let report = parse_graph(input.as_bytes(), &mut graph, &ParseOptions::default()).unwrap();
//!
//! assert_eq!(report.edges_added, 2);
//! assert!(report.warnings.is_empty());
//! assert_eq!(graph.dump().collect::<Vec<_>>(), vec![(1, 2), (2, 3)]);
//! ```

use crate::error::AlreadyDeclared;
use crate::graph::{Graph, NodeId};
use crate::warning::{LineKind, Warning};
use std::io::{self, BufRead};

/// Default number of content bytes kept per line.
///
/// Matches a 64-byte line buffer that also holds the string terminator.
pub const DEFAULT_MAX_LINE_LENGTH: usize = 63;

/// First character of a property line.
const PROPERTY_TAG: u8 = b'p';

/// First character of an edge line.
const EDGE_TAG: u8 = b'e';

/// Options controlling how input lines are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    /// Maximum number of bytes of line content that are parsed.
    pub max_line_length: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_line_length: DEFAULT_MAX_LINE_LENGTH,
        }
    }
}

/// Summary of a completed parse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseReport {
    /// Number of lines read from the input.
    pub lines_read: usize,
    /// Number of edges accepted by the graph.
    pub edges_added: usize,
    /// Whether a node-count declaration was accepted.
    pub size_declared: bool,
    /// Non-fatal problems, in input order.
    pub warnings: Vec<Warning>,
}

impl ParseReport {
    /// Returns `true` if any warning was recorded.
    #[must_use]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    fn record(&mut self, warning: Warning) {
        tracing::warn!(
            line_number = warning.line_number(),
            kind = warning.kind(),
            "{}",
            warning.description()
        );
        self.warnings.push(warning);
    }
}

/// A parsed `p edge` line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Property {
    n_nodes: u32,
    n_edges_hint: Option<u32>,
}

/// Reads `reader` to the end, applying every recognised line to `graph`.
///
/// # Errors
///
/// Returns an error only if reading from `reader` fails. Malformed or
/// rejected lines are reported through [`ParseReport::warnings`].
pub fn parse_graph<R: BufRead>(
    mut reader: R,
    graph: &mut Graph,
    options: &ParseOptions,
) -> io::Result<ParseReport> {
    let mut report = ParseReport::default();
    let mut buf = Vec::new();

    while let Some(length) = read_bounded_line(&mut reader, &mut buf, options.max_line_length)? {
        report.lines_read += 1;
        let line_number = report.lines_read;

        if length > options.max_line_length {
            report.record(Warning::TruncatedLine {
                line_number,
                length,
                kept: options.max_line_length,
            });
        }

        let line = String::from_utf8_lossy(&buf);
        parse_line(&line, line_number, graph, &mut report);
    }

    tracing::debug!(
        lines = report.lines_read,
        edges = report.edges_added,
        warnings = report.warnings.len(),
        "Finished parsing graph"
    );
    Ok(report)
}

/// Classifies a single line and applies it to the graph.
fn parse_line(line: &str, line_number: usize, graph: &mut Graph, report: &mut ParseReport) {
    match line.as_bytes().first() {
        Some(&PROPERTY_TAG) => match parse_property(line) {
            Ok(property) => {
                tracing::debug!(
                    line_number,
                    n_nodes = property.n_nodes,
                    n_edges_hint = ?property.n_edges_hint,
                    "Property line"
                );
                apply_property(property, line_number, graph, report);
            }
            Err(reason) => report.record(Warning::MalformedLine {
                line_number,
                kind: LineKind::Property,
                reason,
            }),
        },
        Some(&EDGE_TAG) => match parse_edge(line) {
            Ok((from, to)) => match graph.add_edge(from, to) {
                Ok(()) => report.edges_added += 1,
                Err(error) => report.record(Warning::EdgeRejected { line_number, error }),
            },
            Err(reason) => report.record(Warning::MalformedLine {
                line_number,
                kind: LineKind::Edge,
                reason,
            }),
        },
        _ => {}
    }
}

fn apply_property(
    property: Property,
    line_number: usize,
    graph: &mut Graph,
    report: &mut ParseReport,
) {
    match graph.declare_size(property.n_nodes) {
        Ok(()) => report.size_declared = true,
        Err(AlreadyDeclared { declared }) => report.record(Warning::SizeRejected {
            line_number,
            requested: property.n_nodes,
            declared,
        }),
    }
}

/// Parses `p edge <n_nodes> [<n_edges>]`.
fn parse_property(line: &str) -> Result<Property, String> {
    let mut scanner = Scanner::new(line);
    scanner.literal("p")?;
    scanner.skip_whitespace();
    scanner.literal("edge")?;
    let n_nodes = scanner.unsigned("node count")?;
    let n_edges_hint = scanner.unsigned("edge count").ok();
    Ok(Property {
        n_nodes,
        n_edges_hint,
    })
}

/// Parses `e <from> <to>`.
fn parse_edge(line: &str) -> Result<(NodeId, NodeId), String> {
    let mut scanner = Scanner::new(line);
    scanner.literal("e")?;
    let from = scanner.unsigned("source node")?;
    let to = scanner.unsigned("target node")?;
    Ok((from, to))
}

/// Reads the next line into `buf`, keeping at most `limit` bytes of it.
///
/// The rest of an over-long line is consumed without being stored, so memory
/// use does not depend on the input. `buf` never holds the `\n` or `\r\n`
/// ending. Returns `None` at end of input, otherwise the full length of the
/// line content.
fn read_bounded_line<R: BufRead>(
    reader: &mut R,
    buf: &mut Vec<u8>,
    limit: usize,
) -> io::Result<Option<usize>> {
    buf.clear();
    let mut length = 0;
    let mut read_any = false;
    let mut ends_with_cr = false;

    loop {
        let available = match reader.fill_buf() {
            Ok(available) => available,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        if available.is_empty() {
            break;
        }
        read_any = true;

        let newline = available.iter().position(|&b| b == b'\n');
        let chunk = &available[..newline.unwrap_or(available.len())];
        if let Some(&last) = chunk.last() {
            ends_with_cr = last == b'\r';
        }
        let room = limit.saturating_sub(buf.len());
        buf.extend_from_slice(&chunk[..chunk.len().min(room)]);
        length += chunk.len();

        let consumed = chunk.len() + usize::from(newline.is_some());
        reader.consume(consumed);
        if newline.is_some() {
            break;
        }
    }

    if !read_any {
        return Ok(None);
    }
    if ends_with_cr {
        // Only present in `buf` when the line was kept whole.
        length -= 1;
        buf.truncate(length);
    }
    Ok(Some(length))
}

/// Cursor over a line with `scanf`-like matching rules.
///
/// Literals must match exactly, numbers skip leading whitespace and need at
/// least one digit, and whatever follows the last field is ignored.
pub(crate) struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.rest = self.rest.trim_start_matches(|c: char| c.is_ascii_whitespace());
    }

    pub(crate) fn literal(&mut self, expected: &str) -> Result<(), String> {
        match self.rest.strip_prefix(expected) {
            Some(rest) => {
                self.rest = rest;
                Ok(())
            }
            None => Err(format!("expected `{expected}`")),
        }
    }

    pub(crate) fn unsigned(&mut self, what: &str) -> Result<u32, String> {
        self.skip_whitespace();
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return Err(format!("missing {what}"));
        }

        let (digits, rest) = self.rest.split_at(end);
        self.rest = rest;
        digits
            .parse()
            .map_err(|_| format!("{what} {digits} is too large"))
    }
}
