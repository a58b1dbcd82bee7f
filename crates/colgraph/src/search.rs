//! Depth-first path search.
//!
//! The search uses an explicit stack rather than recursion, so memory use is
//! bounded by the node count and not by call-stack depth.
//!
//! # Traversal order
//!
//! Successors are pushed in insertion order and popped LIFO, and a node is
//! marked visited when it is pushed. The path found is therefore the one
//! through the most recently inserted successor first. It is *a* path, not
//! necessarily the shortest one.
//!
//! # Path order
//!
//! Paths are returned destination first, ending at the origin, as built by
//! walking parent links back from the destination.

use crate::graph::{Graph, NodeId};

/// Searches for a directed path from `origin` to `destination`.
///
/// Returns the path ordered from `destination` back to `origin`, or `None`
/// when the destination is unreachable. When `origin == destination` the
/// result is the single-node path `[origin]`.
///
/// Ids outside `1..=n` never match a node, so they yield `None`.
///
/// # Example
///
/// ```
/// use colgraph::graph::Graph;
/// use colgraph::search::find_path;
///
/// let mut graph = Graph::new();
/// graph.declare_size(3).unwrap();
/// graph.add_edge(1, 2).unwrap();
/// graph.add_edge(2, 3).unwrap();
///
/// assert_eq!(find_path(&graph, 1, 3), Some(vec![3, 2, 1]));
/// assert_eq!(find_path(&graph, 3, 1), None);
/// ```
#[must_use]
pub fn find_path(graph: &Graph, origin: NodeId, destination: NodeId) -> Option<Vec<NodeId>> {
    if !graph.contains(origin) || !graph.contains(destination) {
        tracing::debug!(
            origin,
            destination,
            n_nodes = graph.n_nodes(),
            "Search endpoint out of range"
        );
        return None;
    }

    let n = graph.n_nodes() as usize;
    let mut visited = vec![false; n];
    let mut parent: Vec<Option<NodeId>> = vec![None; n];
    let mut stack = vec![origin];
    visited[index(origin)] = true;

    while let Some(current) = stack.pop() {
        if current == destination {
            let path = reconstruct(&parent, destination);
            tracing::debug!(origin, destination, length = path.len(), "Path found");
            return Some(path);
        }

        for &next in graph.successors(current) {
            let i = index(next);
            if !visited[i] {
                visited[i] = true;
                parent[i] = Some(current);
                stack.push(next);
            }
        }
    }

    tracing::debug!(origin, destination, "No path");
    None
}

/// Returns `true` if `destination` is reachable from `origin`.
#[must_use]
pub fn is_reachable(graph: &Graph, origin: NodeId, destination: NodeId) -> bool {
    find_path(graph, origin, destination).is_some()
}

/// Walks parent links from `destination` until reaching the origin, which
/// is the only visited node without a parent.
fn reconstruct(parent: &[Option<NodeId>], destination: NodeId) -> Vec<NodeId> {
    let mut path = vec![destination];
    let mut current = destination;
    while let Some(previous) = parent[index(current)] {
        path.push(previous);
        current = previous;
    }
    path
}

fn index(node: NodeId) -> usize {
    (node - 1) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_with(n: u32, edges: &[(NodeId, NodeId)]) -> Graph {
        let mut graph = Graph::new();
        graph.declare_size(n).unwrap();
        for &(from, to) in edges {
            graph.add_edge(from, to).unwrap();
        }
        graph
    }

    #[test]
    fn trivial_path_to_self() {
        let graph = graph_with(3, &[]);
        assert_eq!(find_path(&graph, 2, 2), Some(vec![2]));
    }

    #[test]
    fn chain_is_returned_destination_first() {
        let graph = graph_with(3, &[(1, 2), (2, 3)]);
        assert_eq!(find_path(&graph, 1, 3), Some(vec![3, 2, 1]));
    }

    #[test]
    fn edges_are_directed() {
        let graph = graph_with(3, &[(1, 2), (2, 3)]);
        assert_eq!(find_path(&graph, 3, 1), None);
    }

    #[test]
    fn isolated_node_is_unreachable() {
        let graph = graph_with(4, &[(1, 2), (2, 3)]);
        assert_eq!(find_path(&graph, 1, 4), None);
        assert!(!is_reachable(&graph, 4, 1));
    }

    #[test]
    fn last_inserted_successor_is_explored_first() {
        // 1 -> 2 -> 4 and 1 -> 3 -> 4; 3 is inserted last so it wins.
        let graph = graph_with(4, &[(1, 2), (1, 3), (2, 4), (3, 4)]);
        assert_eq!(find_path(&graph, 1, 4), Some(vec![4, 3, 1]));
    }

    #[test]
    fn path_is_not_necessarily_shortest() {
        // 1 -> 2 -> 5 is shorter, but 3 is pushed last and popped first.
        let graph = graph_with(5, &[(1, 2), (1, 3), (3, 4), (4, 5), (2, 5)]);
        assert_eq!(find_path(&graph, 1, 5), Some(vec![5, 4, 3, 1]));
    }

    #[test]
    fn nodes_are_claimed_when_pushed() {
        // 3 is claimed by 1 before 2 is expanded, so its parent stays 1.
        let graph = graph_with(3, &[(1, 3), (1, 2), (2, 3)]);
        assert_eq!(find_path(&graph, 1, 3), Some(vec![3, 1]));
    }

    #[test]
    fn cycles_terminate() {
        let graph = graph_with(3, &[(1, 2), (2, 1), (2, 2)]);
        assert_eq!(find_path(&graph, 1, 3), None);
        assert_eq!(find_path(&graph, 2, 1), Some(vec![1, 2]));
    }

    #[test]
    fn out_of_range_endpoints_yield_none() {
        let graph = graph_with(2, &[(1, 2)]);
        assert_eq!(find_path(&graph, 0, 1), None);
        assert_eq!(find_path(&graph, 1, 3), None);
        assert_eq!(find_path(&Graph::new(), 1, 1), None);
    }
}
