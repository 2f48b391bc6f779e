// Ford-Fulkerson maximum flow with BFS augmenting paths (Edmonds-Karp)

use super::node_row;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowState {
    pub graph: Graph,
    pub source: usize,
    pub sink: usize,
    /// `capacity[u][v]`; empty until the residual network is built
    pub capacity: Vec<Vec<i64>>,
    pub flow: Vec<Vec<i64>>,
    /// Augmenting path found in the current round, source first
    pub path: Vec<usize>,
    pub bottleneck: Option<i64>,
    pub max_flow: i64,
    pub round: usize,
}

impl FlowState {
    pub fn new(graph: Graph, source: usize, sink: usize) -> Self {
        FlowState {
            graph,
            source,
            sink,
            capacity: Vec::new(),
            flow: Vec::new(),
            path: Vec::new(),
            bottleneck: None,
            max_flow: 0,
            round: 0,
        }
    }

    fn residual(&self, u: usize, v: usize) -> i64 {
        self.capacity[u][v] - self.flow[u][v]
    }
}

impl Visualize for FlowState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let mut rows = vec![node_row(g, "Nodes:", |n| {
            if n == self.source || n == self.sink {
                Mark::Label
            } else if self.path.contains(&n) {
                Mark::Active
            } else {
                Mark::Plain
            }
        })];
        if !self.capacity.is_empty() {
            let mut edges = Row::labeled("Flow:");
            for edge in &g.edges {
                let (u, v) = (edge.source, edge.target);
                let on_path = self
                    .path
                    .windows(2)
                    .any(|w| (w[0], w[1]) == (u, v) || (w[0], w[1]) == (v, u));
                let saturated = self.flow[u][v] == self.capacity[u][v];
                edges.push(
                    format!(
                        "{}→{} {}/{}",
                        g.label(u),
                        g.label(v),
                        self.flow[u][v],
                        self.capacity[u][v]
                    ),
                    if on_path {
                        Mark::Active
                    } else if saturated {
                        Mark::Alert
                    } else {
                        Mark::Plain
                    },
                );
            }
            rows.push(edges);
        }
        rows.push(Row::labeled("Bottleneck:").cell(
            crate::view::format::optional(self.bottleneck),
            Mark::Compare,
        ));
        rows.push(Row::labeled("Max flow:").cell(self.max_flow.to_string(), Mark::Done));
        rows
    }
}

#[derive(Debug, Clone)]
pub struct FordFulkerson {
    pub graph: Graph,
    pub source: usize,
    pub sink: usize,
}

impl Default for FordFulkerson {
    fn default() -> Self {
        let graph = samples::flow_network();
        let sink = graph.len() - 1;
        FordFulkerson {
            graph,
            source: 0,
            sink,
        }
    }
}

/// Shortest augmenting path in the residual network, source first
fn augmenting_path(state: &FlowState) -> Option<Vec<usize>> {
    let n = state.capacity.len();
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut seen = vec![false; n];
    let mut queue = VecDeque::from([state.source]);
    seen[state.source] = true;
    while let Some(u) = queue.pop_front() {
        for v in 0..n {
            if !seen[v] && state.residual(u, v) > 0 {
                seen[v] = true;
                parent[v] = Some(u);
                if v == state.sink {
                    let mut path = vec![v];
                    let mut node = v;
                    while let Some(p) = parent[node] {
                        path.push(p);
                        node = p;
                    }
                    path.reverse();
                    return Some(path);
                }
                queue.push_back(v);
            }
        }
    }
    None
}

impl Algorithm for FordFulkerson {
    type State = FlowState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "ford-fulkerson",
            name: "Ford-Fulkerson (Edmonds-Karp)",
            family: Family::Graph,
            complexity: "O(V E^2)",
        }
    }

    fn initial_state(&self) -> FlowState {
        FlowState::new(self.graph.clone(), self.source, self.sink)
    }

    fn generate_trace(&self, initial: &FlowState, config: &TraceConfig) -> Trace<FlowState> {
        let graph = &initial.graph;
        let (source, sink) = (initial.source, initial.sink);
        if let Err(reason) = graph
            .validate_node(source, "source")
            .and_then(|_| graph.validate_node(sink, "sink"))
        {
            return Trace::invalid(initial.clone(), reason);
        }
        if source == sink {
            return Trace::invalid(initial.clone(), "source and sink must differ");
        }
        if graph.has_negative_weight() {
            return Trace::invalid(initial.clone(), "capacities must be non-negative");
        }

        let n = graph.len();
        let mut state = FlowState::new(graph.clone(), source, sink);
        let mut recorder = TraceRecorder::new(
            initial,
            format!(
                "Find the maximum flow from {} to {}",
                graph.label(source),
                graph.label(sink)
            ),
            config.max_steps,
        );

        state.capacity = vec![vec![0; n]; n];
        state.flow = vec![vec![0; n]; n];
        for arc in graph.directed_arcs() {
            state.capacity[arc.from][arc.to] += arc.weight;
        }
        recorder.record(&state, "Build the residual network: every edge starts with flow 0");

        while let Some(path) = augmenting_path(&state) {
            state.round += 1;
            let bottleneck = path
                .windows(2)
                .map(|w| state.residual(w[0], w[1]))
                .min()
                .unwrap_or(0);
            let route = path
                .iter()
                .map(|&v| graph.label(v).to_string())
                .collect::<Vec<_>>()
                .join(" → ");
            state.path = path.clone();
            state.bottleneck = None;
            recorder.record(
                &state,
                format!("Round {}: BFS finds augmenting path {}", state.round, route),
            );

            state.bottleneck = Some(bottleneck);
            recorder.record(
                &state,
                format!("Bottleneck capacity along the path is {}", bottleneck),
            );

            for w in path.windows(2) {
                let (u, v) = (w[0], w[1]);
                state.flow[u][v] += bottleneck;
                state.flow[v][u] -= bottleneck;
                recorder.record(
                    &state,
                    format!(
                        "Push {} along {} → {}; residual capacity now {}",
                        bottleneck,
                        graph.label(u),
                        graph.label(v),
                        state.residual(u, v)
                    ),
                );
            }

            state.max_flow += bottleneck;
            recorder.record(&state, format!("Total flow is now {}", state.max_flow));
        }

        state.path.clear();
        state.bottleneck = None;
        recorder.finish(
            &state,
            format!(
                "No augmenting path remains: maximum flow is {}",
                state.max_flow
            ),
            Outcome::Success,
        )
    }
}
