// Topological sort (Kahn's algorithm)

use super::{labels, node_row};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopologicalState {
    pub graph: Graph,
    /// Remaining in-degree per node; empty until computed
    pub in_degree: Vec<usize>,
    pub queue: Vec<usize>,
    pub order: Vec<usize>,
    pub current: Option<usize>,
    /// Edges already removed from the graph
    pub removed_edges: Vec<usize>,
}

impl TopologicalState {
    pub fn new(graph: Graph) -> Self {
        TopologicalState {
            graph,
            in_degree: Vec::new(),
            queue: Vec::new(),
            order: Vec::new(),
            current: None,
            removed_edges: Vec::new(),
        }
    }
}

impl Visualize for TopologicalState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let mut degrees = Row::labeled("In-degree:");
        for (i, d) in self.in_degree.iter().enumerate() {
            degrees.push(
                format!("{}:{}", g.label(i), d),
                if *d == 0 { Mark::Done } else { Mark::Plain },
            );
        }
        vec![
            node_row(g, "Nodes:", |n| {
                if self.current == Some(n) {
                    Mark::Active
                } else if self.order.contains(&n) {
                    Mark::Done
                } else if self.queue.contains(&n) {
                    Mark::Compare
                } else {
                    Mark::Plain
                }
            }),
            degrees,
            Row::labeled("Queue:").cell(labels(g, &self.queue), Mark::Compare),
            Row::labeled("Order:").cell(labels(g, &self.order), Mark::Done),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TopologicalSort {
    pub graph: Graph,
}

impl Default for TopologicalSort {
    fn default() -> Self {
        TopologicalSort {
            graph: samples::dag(),
        }
    }
}

impl Algorithm for TopologicalSort {
    type State = TopologicalState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "topological-sort",
            name: "Topological Sort (Kahn)",
            family: Family::Graph,
            complexity: "O(V + E)",
        }
    }

    fn initial_state(&self) -> TopologicalState {
        TopologicalState::new(self.graph.clone())
    }

    fn generate_trace(
        &self,
        initial: &TopologicalState,
        config: &TraceConfig,
    ) -> Trace<TopologicalState> {
        let graph = &initial.graph;
        if let Err(reason) = graph.validate() {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let adjacency = graph.directed_adjacency();
        let mut state = TopologicalState::new(graph.clone());
        let mut recorder = TraceRecorder::new(
            initial,
            "Order the nodes so every edge points forward",
            config.max_steps,
        );

        state.in_degree = vec![0; n];
        for edge in &graph.edges {
            state.in_degree[edge.target] += 1;
        }
        recorder.record(&state, "Count incoming edges for every node");

        let mut queue: VecDeque<usize> = (0..n).filter(|&v| state.in_degree[v] == 0).collect();
        state.queue = queue.iter().copied().collect();
        recorder.record(
            &state,
            format!("Enqueue nodes with in-degree 0: {}", labels(graph, &state.queue)),
        );

        while let Some(u) = queue.pop_front() {
            state.current = Some(u);
            state.order.push(u);
            state.queue = queue.iter().copied().collect();
            recorder.record(
                &state,
                format!("Dequeue {} and append it to the order", graph.label(u)),
            );

            for arc in &adjacency[u] {
                let v = arc.to;
                state.in_degree[v] -= 1;
                state.removed_edges.push(arc.edge);
                let description = if state.in_degree[v] == 0 {
                    queue.push_back(v);
                    state.queue = queue.iter().copied().collect();
                    format!(
                        "Remove edge {} → {}; {} has no incoming edges left, enqueue it",
                        graph.label(u),
                        graph.label(v),
                        graph.label(v)
                    )
                } else {
                    format!(
                        "Remove edge {} → {}; in-degree of {} drops to {}",
                        graph.label(u),
                        graph.label(v),
                        graph.label(v),
                        state.in_degree[v]
                    )
                };
                recorder.record(&state, description);
            }
        }

        state.current = None;
        if state.order.len() == n {
            recorder.finish(
                &state,
                format!("Topological order: {}", labels(graph, &state.order)),
                Outcome::Success,
            )
        } else {
            let stuck = n - state.order.len();
            recorder.finish(
                &state,
                format!(
                    "{} node(s) still have incoming edges: the graph contains a cycle",
                    stuck
                ),
                Outcome::Failure("graph contains a cycle".to_string()),
            )
        }
    }
}
