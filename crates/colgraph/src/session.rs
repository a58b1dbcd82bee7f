//! Interactive query session.
//!
//! Reads one command per line and dispatches on its first character:
//!
//! | Command       | Effect                         |
//! |---------------|--------------------------------|
//! | `p`           | print the full graph listing   |
//! | `s FROM TO`   | search for a path FROM -> TO   |
//! | `q`           | end the session                |
//!
//! Any other line is ignored, as is an `s` line whose node ids cannot be
//! read. End of input ends the session like `q`.

use crate::graph::{Graph, NodeId};
use crate::output::{self, OutputMode};
use crate::parser::Scanner;
use crate::search::find_path;
use std::io::{self, BufRead, Write};

/// A parsed session command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Print every edge.
    Dump,
    /// Search for a path between two nodes.
    Search {
        /// Origin node.
        from: NodeId,
        /// Destination node.
        to: NodeId,
    },
    /// End the session.
    Quit,
}

impl Command {
    /// Parses a command line.
    ///
    /// Returns `None` for lines that are not commands, including `s` lines
    /// without two readable node ids.
    ///
    /// ```
    /// use colgraph::session::Command;
    ///
    /// assert_eq!(Command::parse("s 1 3"), Some(Command::Search { from: 1, to: 3 }));
    /// assert_eq!(Command::parse("p"), Some(Command::Dump));
    /// assert_eq!(Command::parse("s one three"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        match *line.as_bytes().first()? {
            b'p' => Some(Self::Dump),
            b'q' => Some(Self::Quit),
            b's' => {
                let mut scanner = Scanner::new(line);
                scanner.literal("s").ok()?;
                let from = scanner.unsigned("origin").ok()?;
                let to = scanner.unsigned("destination").ok()?;
                Some(Self::Search { from, to })
            }
            _ => None,
        }
    }
}

/// Runs commands against a loaded graph.
#[derive(Debug)]
pub struct Session<'g> {
    graph: &'g Graph,
    prompt: String,
    mode: OutputMode,
}

impl<'g> Session<'g> {
    /// Creates a session over `graph` using `prompt` before each command.
    #[must_use]
    pub fn new(graph: &'g Graph, prompt: impl Into<String>) -> Self {
        Self {
            graph,
            prompt: prompt.into(),
            mode: OutputMode::Text,
        }
    }

    /// Sets the output format for dumps and search results.
    #[must_use]
    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    /// Reads commands from `input` until `q` or end of input.
    ///
    /// Lines are decoded lossily, so invalid UTF-8 is just another
    /// unrecognised line.
    ///
    /// Returns the number of commands executed, not counting ignored lines.
    ///
    /// # Errors
    ///
    /// Returns an error if reading `input` or writing `output` fails.
    pub fn run<R: BufRead, W: Write>(&self, mut input: R, mut output: W) -> io::Result<usize> {
        let mut executed = 0;
        let mut buf = Vec::new();

        loop {
            write!(output, "{}", self.prompt)?;
            output.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                tracing::debug!("End of input, leaving session");
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let Some(command) = Command::parse(&line) else {
                tracing::trace!(line = line.trim_end(), "Ignoring line");
                continue;
            };
            if command == Command::Quit {
                break;
            }

            self.execute(command, &mut output)?;
            executed += 1;
        }

        Ok(executed)
    }

    /// Executes a single command.
    ///
    /// [`Command::Quit`] does nothing here; ending the loop is up to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns an error if writing `output` fails.
    pub fn execute<W: Write>(&self, command: Command, output: &mut W) -> io::Result<()> {
        match command {
            Command::Dump => output::write_dump(output, self.graph, self.mode),
            Command::Search { from, to } => {
                for node in [from, to] {
                    if !self.graph.contains(node) {
                        return writeln!(
                            output,
                            "No such node: {node} (graph has {} nodes)",
                            self.graph.n_nodes()
                        );
                    }
                }
                let path = find_path(self.graph, from, to);
                output::write_search(output, from, to, path.as_deref(), self.mode)
            }
            Command::Quit => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn chain() -> Graph {
        let mut graph = Graph::new();
        graph.declare_size(3).unwrap();
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(2, 3).unwrap();
        graph
    }

    fn run(graph: &Graph, input: &str) -> (usize, String) {
        let mut out = Vec::new();
        let executed = Session::new(graph, "")
            .run(input.as_bytes(), &mut out)
            .unwrap();
        (executed, String::from_utf8(out).unwrap())
    }

    #[rstest]
    #[case("p", Some(Command::Dump))]
    #[case("print everything", Some(Command::Dump))]
    #[case("q", Some(Command::Quit))]
    #[case("quit\n", Some(Command::Quit))]
    #[case("s 1 2", Some(Command::Search { from: 1, to: 2 }))]
    #[case("s1 2\n", Some(Command::Search { from: 1, to: 2 }))]
    #[case("s 1", None)]
    #[case("s x y", None)]
    #[case(" p", None)]
    #[case("", None)]
    #[case("h", None)]
    fn command_parsing(#[case] line: &str, #[case] expected: Option<Command>) {
        assert_eq!(Command::parse(line), expected);
    }

    #[test]
    fn search_prints_destination_first() {
        let graph = chain();
        let (executed, out) = run(&graph, "s 1 3\nq\n");
        assert_eq!(executed, 1);
        assert_eq!(out, "Path: 3 <- 2 <- 1\n");
    }

    #[test]
    fn unreachable_destination_is_reported() {
        let graph = chain();
        let (_, out) = run(&graph, "s 3 1\n");
        assert_eq!(out, "No path from 3 to 1\n");
    }

    #[test]
    fn quit_stops_before_later_commands() {
        let graph = chain();
        let (executed, out) = run(&graph, "q\np\n");
        assert_eq!(executed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn malformed_and_unknown_lines_are_ignored() {
        let graph = chain();
        let (executed, out) = run(&graph, "s 1\nhelp\n\ns a b\np\n");
        assert_eq!(executed, 1);
        assert_eq!(
            out,
            "Number of nodes: 3\nEdge from 1 to 2\nEdge from 2 to 3\n"
        );
    }

    #[test]
    fn out_of_range_node_is_reported_without_searching() {
        let graph = chain();
        let (executed, out) = run(&graph, "s 1 9\n");
        assert_eq!(executed, 1);
        assert_eq!(out, "No such node: 9 (graph has 3 nodes)\n");
    }

    #[test]
    fn prompt_precedes_every_read() {
        let graph = chain();
        let mut out = Vec::new();
        Session::new(&graph, "> ")
            .run("x\nq\n".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "> > ");
    }

    #[test]
    fn invalid_utf8_line_is_ignored() {
        let graph = chain();
        let mut out = Vec::new();
        let executed = Session::new(&graph, "")
            .run(&b"\xff junk\ns 1 2\nq\n"[..], &mut out)
            .unwrap();
        assert_eq!(executed, 1);
        assert_eq!(String::from_utf8(out).unwrap(), "Path: 2 <- 1\n");
    }

    #[test]
    fn json_mode_applies_to_results() {
        let graph = chain();
        let mut out = Vec::new();
        Session::new(&graph, "")
            .with_mode(OutputMode::Json)
            .run("s 2 3\n".as_bytes(), &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"from\":2,\"to\":3,\"path\":[3,2]}\n"
        );
    }
}
