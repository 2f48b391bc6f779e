// Prim's minimum spanning tree (array-based key selection)

use super::{distance_row, node_row};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimState {
    pub graph: Graph,
    pub start: usize,
    pub in_tree: Vec<bool>,
    /// Cheapest known edge weight connecting each node to the tree
    pub key: Vec<Option<i64>>,
    pub parent: Vec<Option<usize>>,
    pub current: Option<usize>,
    pub examining: Option<(usize, usize)>,
    /// Tree edges as `(parent, child, weight)`
    pub mst_edges: Vec<(usize, usize, i64)>,
    pub total_weight: i64,
}

impl PrimState {
    pub fn new(graph: Graph, start: usize) -> Self {
        let n = graph.len();
        PrimState {
            graph,
            start,
            in_tree: vec![false; n],
            key: vec![None; n],
            parent: vec![None; n],
            current: None,
            examining: None,
            mst_edges: Vec::new(),
            total_weight: 0,
        }
    }
}

impl Visualize for PrimState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let tree = self
            .mst_edges
            .iter()
            .map(|&(a, b, w)| format!("{}-{}({})", g.label(a), g.label(b), w))
            .collect::<Vec<_>>();
        vec![
            node_row(g, "Nodes:", |n| {
                if self.current == Some(n) {
                    Mark::Active
                } else if self.examining.is_some_and(|(_, v)| v == n) {
                    Mark::Compare
                } else if self.in_tree.get(n).copied().unwrap_or(false) {
                    Mark::Done
                } else {
                    Mark::Plain
                }
            }),
            distance_row(g, "Key:", &self.key, |_| Mark::Plain),
            Row::labeled("Tree:").cell(format::list(&tree), Mark::Done),
            Row::labeled("Total weight:").cell(self.total_weight.to_string(), Mark::Done),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Prim {
    pub graph: Graph,
    pub start: usize,
}

impl Default for Prim {
    fn default() -> Self {
        Prim {
            graph: samples::spanning_tree_graph(),
            start: 0,
        }
    }
}

impl Algorithm for Prim {
    type State = PrimState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "prim",
            name: "Prim's Algorithm",
            family: Family::Graph,
            complexity: "O(V^2)",
        }
    }

    fn initial_state(&self) -> PrimState {
        PrimState::new(self.graph.clone(), self.start)
    }

    fn generate_trace(&self, initial: &PrimState, config: &TraceConfig) -> Trace<PrimState> {
        let graph = &initial.graph;
        let start = initial.start;
        if let Err(reason) = graph.validate_node(start, "start") {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let adjacency = graph.adjacency();
        let mut state = PrimState::new(graph.clone(), start);
        let mut recorder = TraceRecorder::new(
            initial,
            format!("Grow a minimum spanning tree from {}", graph.label(start)),
            config.max_steps,
        );

        state.key[start] = Some(0);
        recorder.record(
            &state,
            format!("Set key of {} to 0, all other keys to ∞", graph.label(start)),
        );

        loop {
            let mut best: Option<(usize, i64)> = None;
            for v in 0..n {
                if state.in_tree[v] {
                    continue;
                }
                if let Some(k) = state.key[v] {
                    if best.map_or(true, |(_, bk)| k < bk) {
                        best = Some((v, k));
                    }
                }
            }
            let Some((u, ku)) = best else {
                break;
            };

            state.in_tree[u] = true;
            state.current = Some(u);
            state.examining = None;
            let description = match state.parent[u] {
                Some(p) => {
                    state.mst_edges.push((p, u, ku));
                    state.total_weight += ku;
                    format!(
                        "Add {} to the tree via edge {}-{} (weight {})",
                        graph.label(u),
                        graph.label(p),
                        graph.label(u),
                        ku
                    )
                }
                None => format!("Add {} to the tree as its root", graph.label(u)),
            };
            recorder.record(&state, description);

            for arc in &adjacency[u] {
                let v = arc.to;
                if state.in_tree[v] {
                    continue;
                }
                state.examining = Some((u, v));
                if state.key[v].map_or(true, |k| arc.weight < k) {
                    let old = state.key[v];
                    state.key[v] = Some(arc.weight);
                    state.parent[v] = Some(u);
                    recorder.record(
                        &state,
                        format!(
                            "Edge {}-{} (weight {}) is cheaper than key {}, update key",
                            graph.label(u),
                            graph.label(v),
                            arc.weight,
                            format::distance(old)
                        ),
                    );
                } else {
                    recorder.record(
                        &state,
                        format!(
                            "Edge {}-{} (weight {}) does not beat key {}",
                            graph.label(u),
                            graph.label(v),
                            arc.weight,
                            format::distance(state.key[v])
                        ),
                    );
                }
            }
        }

        state.current = None;
        state.examining = None;
        if state.in_tree.iter().all(|&t| t) {
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
                "Some nodes cannot be reached: the graph is disconnected",
                Outcome::Failure("graph is disconnected".to_string()),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::Kruskal;
    use crate::model::graph::Edge;

    #[test]
    fn matches_kruskal_weight() {
        let config = TraceConfig::default();
        let prim = Prim::default().trace(&config);
        let kruskal = Kruskal::default().trace(&config);
        assert_eq!(prim.last().state.total_weight, kruskal.last().state.total_weight);
        assert_eq!(prim.last().state.mst_edges.len(), 6);
    }

    #[test]
    fn disconnected_graph_fails() {
        let prim = Prim {
            graph: Graph::from_labels(&["A", "B", "C"], vec![Edge::weighted(0, 1, 3)]),
            start: 0,
        };
        assert!(matches!(
            prim.trace(&TraceConfig::default()).outcome(),
            Outcome::Failure(_)
        ));
    }
}
