//! The graph store.
//!
//! A [`Graph`] holds a declared node count and, for every node `1..=n`, the
//! ordered list of its outgoing edge targets. Node ids are 1-based
//! everywhere in the public API.
//!
//! # Lifecycle
//!
//! 1. [`Graph::new`] creates an empty store (`n = 0`, no slots).
//! 2. [`Graph::declare_size`] allocates one empty edge list per node.
//! 3. [`Graph::add_edge`] appends edges, rejecting out-of-range endpoints
//!    and duplicates.
//!
//! There is no removal operation.
//!
//! # Example
//!
//! ```
//! use colgraph::graph::Graph;
//!
//! let mut graph = Graph::new();
//! graph.declare_size(3).unwrap();
//! graph.add_edge(1, 2).unwrap();
//! graph.add_edge(2, 3).unwrap();
//!
//! let edges: Vec<_> = graph.dump().collect();
//! assert_eq!(edges, vec![(1, 2), (2, 3)]);
//! ```

use crate::error::{AlreadyDeclared, EdgeError};

/// A 1-based node identifier.
pub type NodeId = u32;

/// Directed graph with per-node adjacency lists in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    /// Declared node count; 0 until a size is declared.
    n_nodes: u32,
    /// Outgoing targets of node `i + 1` live at `adjacency[i]`.
    adjacency: Vec<Vec<NodeId>>,
}

impl Graph {
    /// Creates an empty graph with no declared size.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares the node count and allocates an empty edge list per node.
    ///
    /// # Errors
    ///
    /// Returns [`AlreadyDeclared`] when a nonzero size is already in effect.
    /// The store is left untouched in that case.
    ///
    /// # Aborts
    ///
    /// If the slot vector cannot be allocated the process is aborted after
    /// logging the failure. There is no way to make progress without it.
    pub fn declare_size(&mut self, n: u32) -> Result<(), AlreadyDeclared> {
        if self.n_nodes != 0 {
            return Err(AlreadyDeclared {
                declared: self.n_nodes,
            });
        }

        let len = n as usize;
        let mut adjacency = Vec::new();
        if let Err(err) = adjacency.try_reserve_exact(len) {
            tracing::error!(n_nodes = n, error = %err, "Cannot allocate node slots, aborting");
            std::process::abort();
        }
        adjacency.resize_with(len, Vec::new);

        self.n_nodes = n;
        self.adjacency = adjacency;
        tracing::debug!(n_nodes = n, "Declared graph size");
        Ok(())
    }

    /// Adds the directed edge `from -> to`.
    ///
    /// The target is appended to the end of `from`'s list, so edges keep
    /// their insertion order.
    ///
    /// # Errors
    ///
    /// - [`EdgeError::OutOfRange`] if either endpoint is outside `1..=n`.
    /// - [`EdgeError::Duplicate`] if the edge is already present.
    ///
    /// Neither error mutates the store.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId) -> Result<(), EdgeError> {
        if !self.contains(from) || !self.contains(to) {
            return Err(EdgeError::OutOfRange {
                from,
                to,
                n_nodes: self.n_nodes,
            });
        }

        let targets = &mut self.adjacency[slot(from)];
        if targets.contains(&to) {
            return Err(EdgeError::Duplicate { from, to });
        }

        targets.push(to);
        Ok(())
    }

    /// Enumerates every edge as `(from, to)`.
    ///
    /// Sources come in ascending id order, and each source's targets in
    /// insertion order. Each call starts a fresh iteration.
    pub fn dump(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        (1..=self.n_nodes)
            .zip(&self.adjacency)
            .flat_map(|(from, targets)| targets.iter().map(move |&to| (from, to)))
    }

    /// Returns the declared node count (0 if none was declared).
    #[must_use]
    pub fn n_nodes(&self) -> u32 {
        self.n_nodes
    }

    /// Returns the total number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    /// Returns `true` if `node` is a valid id for this graph.
    #[must_use]
    pub fn contains(&self, node: NodeId) -> bool {
        (1..=self.n_nodes).contains(&node)
    }

    /// Returns the outgoing targets of `node` in insertion order.
    ///
    /// Unknown nodes have no successors.
    #[must_use]
    pub fn successors(&self, node: NodeId) -> &[NodeId] {
        if self.contains(node) {
            &self.adjacency[slot(node)]
        } else {
            &[]
        }
    }
}

/// Position of a valid 1-based node id in the adjacency vector.
fn slot(node: NodeId) -> usize {
    (node - 1) as usize
}
