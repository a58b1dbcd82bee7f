//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use colgraph::graph::Graph;
use colgraph::parser::{ParseOptions, ParseReport, parse_graph};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// The three-node chain used throughout the scenarios.
pub const CHAIN: &str = "c chain 1 -> 2 -> 3\np edge 3 2\ne 1 2\ne 2 3\n";

/// Parse `input` into a fresh graph with default options.
pub fn load(input: &str) -> (Graph, ParseReport) {
    let mut graph = Graph::new();
    let report = parse_graph(input.as_bytes(), &mut graph, &ParseOptions::default())
        .expect("reading from a byte slice cannot fail");
    (graph, report)
}

/// Write `contents` to `name` inside `dir` and return the path.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).expect("Failed to write test file");
    path
}

/// Run the colgraph binary in `dir`, feeding `stdin` to it.
pub fn run_colgraph_in_dir(dir: &Path, args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_colgraph"))
        .args(args)
        .current_dir(dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute colgraph binary");

    // Commands that never read stdin may exit before the write lands.
    let mut pipe = child.stdin.take().expect("stdin is piped");
    let _ = pipe.write_all(stdin.as_bytes());
    drop(pipe);

    child.wait_with_output().expect("Failed to wait for colgraph")
}

/// Stdout of a finished process as text.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr of a finished process as text.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
