//! Error types for colgraph operations.
//!
//! Errors fall into two groups:
//!
//! - **Graph errors** ([`AlreadyDeclared`], [`EdgeError`]): domain rejections
//!   returned by the graph store. They are never fatal; the parser turns them
//!   into warnings and keeps going.
//! - **[`Error`]**: boundary failures (I/O, configuration, bad user input)
//!   that stop the current operation.

use crate::graph::NodeId;
use std::io;
use thiserror::Error;

/// A second node-count declaration was attempted.
///
/// The store keeps its existing size and edges when this is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("node count already declared as {declared}")]
pub struct AlreadyDeclared {
    /// The node count that is already in effect.
    pub declared: u32,
}

/// Rejection of an `add_edge` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EdgeError {
    /// One of the endpoints lies outside `1..=n_nodes`.
    #[error("edge {from} -> {to} is out of range (graph has {n_nodes} nodes)")]
    OutOfRange {
        /// Source node of the rejected edge.
        from: NodeId,
        /// Target node of the rejected edge.
        to: NodeId,
        /// Node count at the time of the call.
        n_nodes: u32,
    },

    /// The edge already exists.
    #[error("edge {from} -> {to} already exists")]
    Duplicate {
        /// Source node of the rejected edge.
        from: NodeId,
        /// Target node of the rejected edge.
        to: NodeId,
    },
}

/// The error type for colgraph boundary operations.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred while reading input or configuration.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file could not be parsed or holds invalid values.
    #[error("Configuration error: {0}")]
    Config(String),

    /// User-supplied input was rejected before reaching the graph.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A specialized Result type for colgraph operations.
pub type Result<T> = std::result::Result<T, Error>;
