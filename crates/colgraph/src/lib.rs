//! Colgraph - load DIMACS-style `.col` graphs and query reachability.
//!
//! The crate has three core pieces:
//!
//! - [`graph`]: the graph store, with 1-based node ids and per-node edge
//!   lists that reject duplicates and out-of-range endpoints.
//! - [`parser`]: a line-oriented reader that fills a [`graph::Graph`] from
//!   `p edge` and `e` lines, collecting [`warning::Warning`]s instead of
//!   failing.
//! - [`search`]: explicit-stack depth-first search with path
//!   reconstruction.
//!
//! The remaining modules make up the command-line tool around them.
//!
//! ```
//! use colgraph::graph::Graph;
//! use colgraph::parser::{parse_graph, ParseOptions};
//! use colgraph::search::find_path;
//!
//! let mut graph = Graph::new();
//! parse_graph("p edge 3 2\ne 1 2\ne 2 3\n".as_bytes(), &mut graph, &ParseOptions::default())?;
//!
//! assert_eq!(find_path(&graph, 1, 3), Some(vec![3, 2, 1]));
//! # Ok::<(), std::io::Error>(())
//! ```

#![forbid(unsafe_code)]

// Public modules for library usage
pub mod error;
pub mod graph;
pub mod parser;
pub mod search;
pub mod warning;

// CLI surface (needed by binary)
pub mod app;
pub mod cli;
pub mod config;
pub mod output;
pub mod session;
