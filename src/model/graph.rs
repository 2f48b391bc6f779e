//! Generic graph shape shared by the graph algorithms
//!
//! A [`Graph`] is a node list plus an edge list. Edges default to weight 1
//! and to undirected; [`Graph::arcs`] and [`Graph::adjacency`] expand
//! undirected edges into both directions once, so the algorithms only ever
//! walk directed arcs.

use serde::{Deserialize, Serialize};

/// Largest accepted edge weight magnitude. Keeps every path sum, potential
/// and flow total well inside `i64`.
pub const MAX_WEIGHT: i64 = 1_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<(i32, i32)>,
}

impl Node {
    pub fn new(label: impl Into<String>) -> Self {
        Node {
            label: label.into(),
            position: None,
        }
    }

    pub fn at(label: impl Into<String>, x: i32, y: i32) -> Self {
        Node {
            label: label.into(),
            position: Some((x, y)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directed: Option<bool>,
}

impl Edge {
    /// Unweighted, undirected edge
    pub fn between(source: usize, target: usize) -> Self {
        Edge {
            source,
            target,
            weight: None,
            directed: None,
        }
    }

    /// Weighted, undirected edge
    pub fn weighted(source: usize, target: usize, weight: i64) -> Self {
        Edge {
            source,
            target,
            weight: Some(weight),
            directed: None,
        }
    }

    /// Weighted, directed edge
    pub fn arc(source: usize, target: usize, weight: i64) -> Self {
        Edge {
            source,
            target,
            weight: Some(weight),
            directed: Some(true),
        }
    }

    pub fn weight(&self) -> i64 {
        self.weight.unwrap_or(1)
    }

    pub fn is_directed(&self) -> bool {
        self.directed.unwrap_or(false)
    }
}

/// A directed traversal of an edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Arc {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
    /// Index of the originating edge in [`Graph::edges`]
    pub edge: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Graph { nodes, edges }
    }

    /// Graph whose nodes are named by the given labels
    pub fn from_labels(labels: &[&str], edges: Vec<Edge>) -> Self {
        Graph {
            nodes: labels.iter().map(|l| Node::new(*l)).collect(),
            edges,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn labels(&self) -> Vec<String> {
        self.nodes.iter().map(|n| n.label.clone()).collect()
    }

    pub fn label(&self, index: usize) -> &str {
        self.nodes
            .get(index)
            .map(|n| n.label.as_str())
            .unwrap_or("?")
    }

    /// Check the structural shape: at least one node, every edge endpoint in
    /// range and every weight within [`MAX_WEIGHT`].
    pub fn validate(&self) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("graph has no nodes".to_string());
        }
        for (i, edge) in self.edges.iter().enumerate() {
            if edge.source >= self.nodes.len() || edge.target >= self.nodes.len() {
                return Err(format!(
                    "edge {} ({} -> {}) references a node outside 0..{}",
                    i,
                    edge.source,
                    edge.target,
                    self.nodes.len()
                ));
            }
            if !(-MAX_WEIGHT..=MAX_WEIGHT).contains(&edge.weight()) {
                return Err(format!(
                    "edge {} weight {} is outside -{}..={}",
                    i,
                    edge.weight(),
                    MAX_WEIGHT,
                    MAX_WEIGHT
                ));
            }
        }
        Ok(())
    }

    /// [`validate`](Self::validate) plus a range check on a designated node
    pub fn validate_node(&self, node: usize, role: &str) -> Result<(), String> {
        self.validate()?;
        if node >= self.nodes.len() {
            return Err(format!(
                "{} node {} is outside 0..{}",
                role,
                node,
                self.nodes.len()
            ));
        }
        Ok(())
    }

    /// Every edge as directed arcs, undirected edges contributing both
    /// directions, in edge-list order.
    pub fn arcs(&self) -> Vec<Arc> {
        let mut arcs = Vec::with_capacity(self.edges.len() * 2);
        for (i, edge) in self.edges.iter().enumerate() {
            arcs.push(Arc {
                from: edge.source,
                to: edge.target,
                weight: edge.weight(),
                edge: i,
            });
            if !edge.is_directed() {
                arcs.push(Arc {
                    from: edge.target,
                    to: edge.source,
                    weight: edge.weight(),
                    edge: i,
                });
            }
        }
        arcs
    }

    /// Every edge as a single arc `source -> target`, ignoring the flag
    pub fn directed_arcs(&self) -> Vec<Arc> {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, edge)| Arc {
                from: edge.source,
                to: edge.target,
                weight: edge.weight(),
                edge: i,
            })
            .collect()
    }

    /// Outgoing arcs per node, respecting each edge's `directed` flag
    pub fn adjacency(&self) -> Vec<Vec<Arc>> {
        Self::group(self.len(), self.arcs())
    }

    /// Outgoing arcs per node with every edge treated as directed
    pub fn directed_adjacency(&self) -> Vec<Vec<Arc>> {
        Self::group(self.len(), self.directed_arcs())
    }

    fn group(len: usize, arcs: Vec<Arc>) -> Vec<Vec<Arc>> {
        let mut adjacency = vec![Vec::new(); len];
        for arc in arcs {
            adjacency[arc.from].push(arc);
        }
        adjacency
    }

    pub fn has_negative_weight(&self) -> bool {
        self.edges.iter().any(|e| e.weight() < 0)
    }

    /// Manhattan distance between two positioned nodes
    pub fn manhattan(&self, a: usize, b: usize) -> Option<i64> {
        let (ax, ay) = self.nodes.get(a)?.position?;
        let (bx, by) = self.nodes.get(b)?.position?;
        Some(((ax - bx).abs() + (ay - by).abs()) as i64)
    }
}

/// The edges forming the current best routes.
///
/// Holds at most one incoming edge per node: [`set_best`](Self::set_best)
/// drops any stale edge into the same target before adding the new one, so
/// the rendered path never mixes obsolete and current routes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PathEdges(Vec<(usize, usize)>);

impl PathEdges {
    pub fn new() -> Self {
        PathEdges(Vec::new())
    }

    pub fn set_best(&mut self, from: usize, to: usize) {
        self.0.retain(|&(_, target)| target != to);
        self.0.push((from, to));
    }

    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.0.contains(&(from, to))
    }

    pub fn touches(&self, node: usize) -> bool {
        self.0.iter().any(|&(a, b)| a == node || b == node)
    }

    pub fn as_slice(&self) -> &[(usize, usize)] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

/// Walk a predecessor array back from `target`; `None` if it is unreachable
/// from `source`.
pub fn reconstruct_path(
    previous: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut node = target;
    while node != source {
        node = previous.get(node).copied().flatten()?;
        path.push(node);
        if path.len() > previous.len() {
            return None;
        }
    }
    path.reverse();
    Some(path)
}

/// Human-readable route such as `A → C → B`
pub fn route_string(graph: &Graph, path: &[usize]) -> String {
    path.iter()
        .map(|&n| graph.label(n).to_string())
        .collect::<Vec<_>>()
        .join(" → ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_beyond_the_bound_are_rejected() {
        let graph = |w| Graph::from_labels(&["A", "B"], vec![Edge::arc(0, 1, w)]);
        assert!(graph(MAX_WEIGHT).validate().is_ok());
        assert!(graph(-MAX_WEIGHT).validate().is_ok());
        assert!(graph(MAX_WEIGHT + 1).validate().is_err());
        assert!(graph(i64::MIN).validate().is_err());
    }

    #[test]
    fn undirected_edges_expand_both_ways() {
        let graph = Graph::from_labels(
            &["A", "B", "C"],
            vec![Edge::weighted(0, 1, 4), Edge::arc(1, 2, 2)],
        );
        let adj = graph.adjacency();
        assert_eq!(adj[0].len(), 1);
        assert_eq!(adj[1].len(), 2);
        assert_eq!(adj[2].len(), 0);
        assert_eq!(adj[1][0].to, 0);
        assert_eq!(adj[1][1].to, 2);
    }

    #[test]
    fn directed_adjacency_ignores_flag() {
        let graph = Graph::from_labels(&["A", "B"], vec![Edge::between(0, 1)]);
        let adj = graph.directed_adjacency();
        assert_eq!(adj[0].len(), 1);
        assert!(adj[1].is_empty());
    }

    #[test]
    fn validation_catches_dangling_edges() {
        let graph = Graph::from_labels(&["A"], vec![Edge::between(0, 3)]);
        assert!(graph.validate().is_err());
        assert!(Graph::default().validate().is_err());
        let ok = Graph::from_labels(&["A", "B"], vec![Edge::between(0, 1)]);
        assert!(ok.validate_node(1, "start").is_ok());
        assert!(ok.validate_node(2, "start").is_err());
    }

    #[test]
    fn set_best_replaces_stale_edge() {
        let mut path = PathEdges::new();
        path.set_best(0, 2);
        path.set_best(0, 1);
        path.set_best(1, 2);
        assert_eq!(path.as_slice(), &[(0, 1), (1, 2)]);
    }

    #[test]
    fn reconstructs_predecessor_chain() {
        let previous = vec![None, Some(2), Some(0), None];
        assert_eq!(reconstruct_path(&previous, 0, 1), Some(vec![0, 2, 1]));
        assert_eq!(reconstruct_path(&previous, 0, 3), None);
        assert_eq!(reconstruct_path(&previous, 0, 0), Some(vec![0]));
    }

    #[test]
    fn manhattan_needs_positions() {
        let graph = Graph::new(
            vec![Node::at("A", 0, 0), Node::at("B", 2, 3), Node::new("C")],
            vec![],
        );
        assert_eq!(graph.manhattan(0, 1), Some(5));
        assert_eq!(graph.manhattan(0, 2), None);
    }
}
