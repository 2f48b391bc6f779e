// Built-in sample instances used as default initial states

use super::graph::{Edge, Graph, Node};

/// 8-node tree-like graph for BFS/DFS
///
/// ```text
///        0
///      /   \
///     1     2
///    / \   / \
///   3   4 5   6
///    \ /
///     7
/// ```
pub fn traversal_graph() -> Graph {
    Graph::from_labels(
        &["0", "1", "2", "3", "4", "5", "6", "7"],
        vec![
            Edge::between(0, 1),
            Edge::between(0, 2),
            Edge::between(1, 3),
            Edge::between(1, 4),
            Edge::between(2, 5),
            Edge::between(2, 6),
            Edge::between(3, 7),
            Edge::between(4, 7),
        ],
    )
}

/// Undirected weighted graph for Dijkstra (A to E costs 20 via C and F)
pub fn dijkstra_graph() -> Graph {
    Graph::from_labels(
        &["A", "B", "C", "D", "E", "F"],
        vec![
            Edge::weighted(0, 1, 7),
            Edge::weighted(0, 2, 9),
            Edge::weighted(0, 5, 14),
            Edge::weighted(1, 2, 10),
            Edge::weighted(1, 3, 15),
            Edge::weighted(2, 3, 11),
            Edge::weighted(2, 5, 2),
            Edge::weighted(3, 4, 6),
            Edge::weighted(4, 5, 9),
        ],
    )
}

/// 3x3 positioned grid for A*; every weight is at least the Manhattan
/// distance between its endpoints so the heuristic stays admissible.
pub fn grid_graph() -> Graph {
    let nodes = vec![
        Node::at("A", 0, 0),
        Node::at("B", 1, 0),
        Node::at("C", 2, 0),
        Node::at("D", 0, 1),
        Node::at("E", 1, 1),
        Node::at("F", 2, 1),
        Node::at("G", 0, 2),
        Node::at("H", 1, 2),
        Node::at("I", 2, 2),
    ];
    Graph::new(
        nodes,
        vec![
            Edge::weighted(0, 1, 1),
            Edge::weighted(1, 2, 1),
            Edge::weighted(0, 3, 1),
            Edge::weighted(1, 4, 3),
            Edge::weighted(2, 5, 1),
            Edge::weighted(3, 4, 1),
            Edge::weighted(4, 5, 1),
            Edge::weighted(3, 6, 2),
            Edge::weighted(4, 7, 1),
            Edge::weighted(5, 8, 4),
            Edge::weighted(6, 7, 1),
            Edge::weighted(7, 8, 1),
        ],
    )
}

/// Directed graph with negative edges but no negative cycle
/// (distances from A: A=0, B=3, C=2, D=-1, E=2)
pub fn negative_weight_graph() -> Graph {
    Graph::from_labels(
        &["A", "B", "C", "D", "E"],
        vec![
            Edge::arc(0, 1, 4),
            Edge::arc(0, 2, 2),
            Edge::arc(1, 2, 3),
            Edge::arc(1, 3, 2),
            Edge::arc(1, 4, -1),
            Edge::arc(2, 1, 1),
            Edge::arc(2, 3, 4),
            Edge::arc(2, 4, 5),
            Edge::arc(4, 3, -3),
        ],
    )
}

/// Directed 4-node graph for all-pairs shortest paths
pub fn all_pairs_graph() -> Graph {
    Graph::from_labels(
        &["1", "2", "3", "4"],
        vec![
            Edge::arc(0, 1, 3),
            Edge::arc(0, 3, 7),
            Edge::arc(1, 0, 8),
            Edge::arc(1, 2, 2),
            Edge::arc(2, 0, 5),
            Edge::arc(2, 3, 1),
            Edge::arc(3, 0, 2),
        ],
    )
}

/// 7-node undirected graph for spanning trees (MST weight 39)
pub fn spanning_tree_graph() -> Graph {
    Graph::from_labels(
        &["A", "B", "C", "D", "E", "F", "G"],
        vec![
            Edge::weighted(0, 1, 7),
            Edge::weighted(0, 3, 5),
            Edge::weighted(1, 2, 8),
            Edge::weighted(1, 3, 9),
            Edge::weighted(1, 4, 7),
            Edge::weighted(2, 4, 5),
            Edge::weighted(3, 4, 15),
            Edge::weighted(3, 5, 6),
            Edge::weighted(4, 5, 8),
            Edge::weighted(4, 6, 9),
            Edge::weighted(5, 6, 11),
        ],
    )
}

/// Directed acyclic graph for topological sorting
pub fn dag() -> Graph {
    Graph::from_labels(
        &["0", "1", "2", "3", "4", "5"],
        vec![
            Edge::arc(5, 2, 1),
            Edge::arc(5, 0, 1),
            Edge::arc(4, 0, 1),
            Edge::arc(4, 1, 1),
            Edge::arc(2, 3, 1),
            Edge::arc(3, 1, 1),
        ],
    )
}

/// Flow network with capacities as weights (max flow 23 from s to t)
pub fn flow_network() -> Graph {
    Graph::from_labels(
        &["s", "v1", "v2", "v3", "v4", "t"],
        vec![
            Edge::arc(0, 1, 16),
            Edge::arc(0, 2, 13),
            Edge::arc(1, 3, 12),
            Edge::arc(2, 1, 4),
            Edge::arc(2, 4, 14),
            Edge::arc(3, 2, 9),
            Edge::arc(3, 5, 20),
            Edge::arc(4, 3, 7),
            Edge::arc(4, 5, 4),
        ],
    )
}

/// 5-node graph with the Hamiltonian cycle 0-1-2-4-3-0
pub fn hamiltonian_graph() -> Graph {
    Graph::from_labels(
        &["0", "1", "2", "3", "4"],
        vec![
            Edge::between(0, 1),
            Edge::between(0, 3),
            Edge::between(1, 2),
            Edge::between(1, 3),
            Edge::between(1, 4),
            Edge::between(2, 4),
            Edge::between(3, 4),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_are_well_formed() {
        for graph in [
            traversal_graph(),
            dijkstra_graph(),
            grid_graph(),
            negative_weight_graph(),
            all_pairs_graph(),
            spanning_tree_graph(),
            dag(),
            flow_network(),
            hamiltonian_graph(),
        ] {
            assert!(graph.validate().is_ok());
        }
    }

    #[test]
    fn grid_weights_dominate_heuristic() {
        let graph = grid_graph();
        for edge in &graph.edges {
            let h = graph.manhattan(edge.source, edge.target).unwrap();
            assert!(edge.weight() >= h);
        }
    }
}
