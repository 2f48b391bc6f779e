//! Graph algorithm family
//!
//! All modules work on the shared [`Graph`] shape. Each builds its adjacency
//! once at the start of generation, keeps its auxiliary arrays (distances,
//! predecessors, visited flags, union-find forest, ...) inside its state so
//! they are captured by every step, and tracks the current best routes with
//! [`PathEdges`] so the rendered path holds at most one edge into any node.
//!
//! Minimum selection always compares with a strict `<`, so on ties the
//! first node encountered wins.

pub mod astar;
pub mod bellman_ford;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod floyd_warshall;
pub mod ford_fulkerson;
pub mod johnson;
pub mod kruskal;
pub mod prim;
pub mod topological;

pub use astar::AStar;
pub use bellman_ford::BellmanFord;
pub use bfs::BreadthFirstSearch;
pub use dfs::DepthFirstSearch;
pub use dijkstra::Dijkstra;
pub use floyd_warshall::FloydWarshall;
pub use ford_fulkerson::FordFulkerson;
pub use johnson::Johnson;
pub use kruskal::Kruskal;
pub use prim::Prim;
pub use topological::TopologicalSort;

use crate::model::graph::{Graph, PathEdges};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

/// State shared by breadth-first and depth-first traversal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraversalState {
    pub graph: Graph,
    pub start: usize,
    /// Nodes in the order they were visited
    pub visited: Vec<usize>,
    pub current: Option<usize>,
    /// Queue (BFS, front first) or recursion stack (DFS, bottom first)
    pub frontier: Vec<usize>,
    /// Discovery edges of the traversal tree
    pub tree_edges: PathEdges,
}

impl TraversalState {
    pub fn new(graph: Graph, start: usize) -> Self {
        TraversalState {
            graph,
            start,
            visited: Vec::new(),
            current: None,
            frontier: Vec::new(),
            tree_edges: PathEdges::new(),
        }
    }
}

impl Visualize for TraversalState {
    fn view(&self) -> Vec<Row> {
        let graph = &self.graph;
        vec![
            node_row(graph, "Nodes:", |n| {
                if self.current == Some(n) {
                    Mark::Active
                } else if self.frontier.contains(&n) {
                    Mark::Compare
                } else if self.visited.contains(&n) {
                    Mark::Done
                } else {
                    Mark::Plain
                }
            }),
            Row::labeled("Visited:").cell(labels(graph, &self.visited), Mark::Done),
            Row::labeled("Frontier:").cell(labels(graph, &self.frontier), Mark::Compare),
            edge_row(graph, "Tree edges:", &self.tree_edges),
        ]
    }
}

/// One cell per node, marked by `mark(node)`
pub(crate) fn node_row(graph: &Graph, label: &str, mark: impl Fn(usize) -> Mark) -> Row {
    let mut row = Row::labeled(label);
    for (i, node) in graph.nodes.iter().enumerate() {
        row.push(node.label.clone(), mark(i));
    }
    row
}

/// Labeled list of path edges such as `A→C, C→F`
pub(crate) fn edge_row(graph: &Graph, label: &str, edges: &PathEdges) -> Row {
    let text = edges
        .as_slice()
        .iter()
        .map(|&(a, b)| format!("{}→{}", graph.label(a), graph.label(b)))
        .collect::<Vec<_>>()
        .join(", ");
    Row::labeled(label).cell(text, Mark::Done)
}

/// Labeled row of per-node distances
pub(crate) fn distance_row(
    graph: &Graph,
    label: &str,
    distances: &[Option<i64>],
    mark: impl Fn(usize) -> Mark,
) -> Row {
    let mut row = Row::labeled(label);
    for (i, d) in distances.iter().enumerate() {
        row.push(format!("{}={}", graph.label(i), format::distance(*d)), mark(i));
    }
    row
}

pub(crate) fn labels(graph: &Graph, nodes: &[usize]) -> String {
    nodes
        .iter()
        .map(|&n| graph.label(n).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// `A=0, B=3, C=∞` summary used in terminal descriptions
pub(crate) fn distance_summary(graph: &Graph, distances: &[Option<i64>]) -> String {
    distances
        .iter()
        .enumerate()
        .map(|(i, d)| format!("{}={}", graph.label(i), format::distance(*d)))
        .collect::<Vec<_>>()
        .join(", ")
}
