// Kruskal's minimum spanning tree with union-find

use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KruskalState {
    pub graph: Graph,
    /// Edge indices in processing order; empty until sorted
    pub sorted_edges: Vec<usize>,
    pub current: Option<usize>,
    pub mst_edges: Vec<usize>,
    pub rejected: Vec<usize>,
    /// Union-find forest
    pub parent: Vec<usize>,
    pub rank: Vec<usize>,
    pub total_weight: i64,
}

impl KruskalState {
    pub fn new(graph: Graph) -> Self {
        let n = graph.len();
        KruskalState {
            graph,
            sorted_edges: Vec::new(),
            current: None,
            mst_edges: Vec::new(),
            rejected: Vec::new(),
            parent: (0..n).collect(),
            rank: vec![0; n],
            total_weight: 0,
        }
    }
}

impl Visualize for KruskalState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let order: Vec<usize> = if self.sorted_edges.is_empty() {
            (0..g.edges.len()).collect()
        } else {
            self.sorted_edges.clone()
        };
        let mut edges = Row::labeled("Edges:");
        for e in order {
            let edge = &g.edges[e];
            let mark = if self.current == Some(e) {
                Mark::Active
            } else if self.mst_edges.contains(&e) {
                Mark::Done
            } else if self.rejected.contains(&e) {
                Mark::Muted
            } else {
                Mark::Plain
            };
            edges.push(
                format!("{}-{}({})", g.label(edge.source), g.label(edge.target), edge.weight()),
                mark,
            );
        }
        let parents: Vec<String> = self.parent.iter().map(|&p| g.label(p).to_string()).collect();
        vec![
            edges,
            format::marked_row("Parent:", &parents, |_| Mark::Plain),
            Row::labeled("Total weight:").cell(self.total_weight.to_string(), Mark::Done),
        ]
    }
}

/// Root of `x` with path compression
fn find(parent: &mut [usize], x: usize) -> usize {
    let mut root = x;
    while parent[root] != root {
        root = parent[root];
    }
    let mut node = x;
    while parent[node] != root {
        let next = parent[node];
        parent[node] = root;
        node = next;
    }
    root
}

#[derive(Debug, Clone)]
pub struct Kruskal {
    pub graph: Graph,
}

impl Default for Kruskal {
    fn default() -> Self {
        Kruskal {
            graph: samples::spanning_tree_graph(),
        }
    }
}

impl Algorithm for Kruskal {
    type State = KruskalState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "kruskal",
            name: "Kruskal's Algorithm",
            family: Family::Graph,
            complexity: "O(E log E)",
        }
    }

    fn initial_state(&self) -> KruskalState {
        KruskalState::new(self.graph.clone())
    }

    fn generate_trace(&self, initial: &KruskalState, config: &TraceConfig) -> Trace<KruskalState> {
        let graph = &initial.graph;
        if let Err(reason) = graph.validate() {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let mut state = KruskalState::new(graph.clone());
        let mut recorder = TraceRecorder::new(
            initial,
            "Build a minimum spanning tree by adding the cheapest safe edge each time",
            config.max_steps,
        );

        let mut order: Vec<usize> = (0..graph.edges.len()).collect();
        order.sort_by_key(|&e| graph.edges[e].weight());
        state.sorted_edges = order.clone();
        recorder.record(&state, "Sort all edges by weight, ascending");

        for e in order {
            if state.mst_edges.len() + 1 >= n {
                break;
            }
            let edge = &graph.edges[e];
            let (a, b) = (graph.label(edge.source), graph.label(edge.target));
            state.current = Some(e);
            recorder.record(
                &state,
                format!("Consider edge {}-{} with weight {}", a, b, edge.weight()),
            );

            let ra = find(&mut state.parent, edge.source);
            let rb = find(&mut state.parent, edge.target);
            if ra == rb {
                state.rejected.push(e);
                recorder.record(
                    &state,
                    format!(
                        "Reject {}-{}: both ends are already connected, it would form a cycle",
                        a, b
                    ),
                );
                continue;
            }

            match state.rank[ra].cmp(&state.rank[rb]) {
                std::cmp::Ordering::Less => state.parent[ra] = rb,
                std::cmp::Ordering::Greater => state.parent[rb] = ra,
                std::cmp::Ordering::Equal => {
                    state.parent[rb] = ra;
                    state.rank[ra] += 1;
                }
            }
            state.mst_edges.push(e);
            state.total_weight += edge.weight();
            recorder.record(
                &state,
                format!(
                    "Add {}-{} to the tree and merge their components (total weight {})",
                    a, b, state.total_weight
                ),
            );
        }

        state.current = None;
        if state.mst_edges.len() + 1 == n {
            recorder.finish(
                &state,
                format!(
                    "Minimum spanning tree complete: {} edges, total weight {}",
                    state.mst_edges.len(),
                    state.total_weight
                ),
                Outcome::Success,
            )
        } else {
            recorder.finish(
                &state,
                format!(
                    "Graph is disconnected: only a spanning forest of {} edges exists",
                    state.mst_edges.len()
                ),
                Outcome::Failure("graph is disconnected".to_string()),
            )
        }
    }
}
