//! Warning types for non-fatal problems found while loading a graph.
//!
//! Loading a `.col` file never stops on a bad line. Structural problems and
//! graph rejections are recorded as [`Warning`]s, tagged with the 1-based
//! line number, and the parser moves on to the next line.
//!
//! # Examples
//!
//! ```
//! use colgraph::warning::{LineKind, Warning};
//!
//! let warning = Warning::MalformedLine {
//!     line_number: 5,
//!     kind: LineKind::Edge,
//!     reason: "missing target node".to_string(),
//! };
//!
//! assert_eq!(warning.line_number(), 5);
//! assert_eq!(warning.kind(), "malformed_line");
//! assert!(warning.to_string().contains("line 5"));
//! ```

use crate::error::EdgeError;
use std::fmt;

/// The class of an input line, decided by its first character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// `p edge <n_nodes> <n_edges>`
    Property,
    /// `e <from> <to>`
    Edge,
}

impl fmt::Display for LineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Property => write!(f, "property"),
            Self::Edge => write!(f, "edge"),
        }
    }
}

/// A non-fatal problem recorded while parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A `p` or `e` line did not have the expected shape and was skipped.
    MalformedLine {
        /// The 1-based line number.
        line_number: usize,
        /// Which kind of line was being parsed.
        kind: LineKind,
        /// What was wrong with it.
        reason: String,
    },

    /// A second node-count declaration was ignored.
    SizeRejected {
        /// The 1-based line number.
        line_number: usize,
        /// The node count on the rejected line.
        requested: u32,
        /// The node count already in effect.
        declared: u32,
    },

    /// The graph refused an edge.
    EdgeRejected {
        /// The 1-based line number.
        line_number: usize,
        /// Why the edge was refused.
        error: EdgeError,
    },

    /// The line was longer than the line buffer; only a prefix was parsed.
    TruncatedLine {
        /// The 1-based line number.
        line_number: usize,
        /// Full length of the line content in bytes.
        length: usize,
        /// Number of bytes that were kept and parsed.
        kept: usize,
    },
}

impl Warning {
    /// Returns the line number associated with this warning.
    #[must_use]
    pub fn line_number(&self) -> usize {
        match self {
            Self::MalformedLine { line_number, .. }
            | Self::SizeRejected { line_number, .. }
            | Self::EdgeRejected { line_number, .. }
            | Self::TruncatedLine { line_number, .. } => *line_number,
        }
    }

    /// Returns a static string identifying the warning kind.
    ///
    /// Useful for filtering and grouping without matching on variants.
    ///
    /// ```
    /// use colgraph::error::EdgeError;
    /// use colgraph::warning::Warning;
    ///
    /// let warning = Warning::EdgeRejected {
    ///     line_number: 3,
    ///     error: EdgeError::Duplicate { from: 1, to: 2 },
    /// };
    /// assert_eq!(warning.kind(), "edge_rejected");
    /// ```
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedLine { .. } => "malformed_line",
            Self::SizeRejected { .. } => "size_rejected",
            Self::EdgeRejected { .. } => "edge_rejected",
            Self::TruncatedLine { .. } => "truncated_line",
        }
    }

    /// Returns a human-readable description of the warning.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::MalformedLine {
                line_number,
                kind,
                reason,
            } => format!("line {line_number}: malformed {kind} line: {reason}"),
            Self::SizeRejected {
                line_number,
                requested,
                declared,
            } => format!(
                "line {line_number}: ignoring node count {requested}, already declared as {declared}"
            ),
            Self::EdgeRejected { line_number, error } => {
                format!("line {line_number}: {error}")
            }
            Self::TruncatedLine {
                line_number,
                length,
                kept,
            } => format!("line {line_number}: {length} bytes long, only the first {kept} were read"),
        }
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl std::error::Error for Warning {}
