// Depth-first traversal, recursive

use super::{labels, TraversalState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{Arc, Graph};
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};

#[derive(Debug, Clone)]
pub struct DepthFirstSearch {
    pub graph: Graph,
    pub start: usize,
}

impl Default for DepthFirstSearch {
    fn default() -> Self {
        DepthFirstSearch {
            graph: samples::traversal_graph(),
            start: 0,
        }
    }
}

/// Recursive walker; the recorder is the only output channel
struct Walker<'a> {
    adjacency: &'a [Vec<Arc>],
    seen: Vec<bool>,
    state: TraversalState,
    recorder: TraceRecorder<TraversalState>,
}

impl Walker<'_> {
    fn visit(&mut self, u: usize) {
        self.seen[u] = true;
        self.state.current = Some(u);
        self.state.visited.push(u);
        self.state.frontier.push(u);
        let label = self.state.graph.label(u).to_string();
        self.recorder
            .record(&self.state, format!("Visit node {}", label));

        let adjacency = self.adjacency;
        for arc in &adjacency[u] {
            let v = arc.to;
            if self.seen[v] {
                continue;
            }
            self.state.tree_edges.set_best(u, v);
            let description = format!(
                "Explore edge {} → {} to unvisited node",
                label,
                self.state.graph.label(v)
            );
            self.recorder.record(&self.state, description);

            self.visit(v);

            self.state.current = Some(u);
            self.recorder
                .record(&self.state, format!("Backtrack to node {}", label));
        }

        self.state.frontier.pop();
    }
}

impl Algorithm for DepthFirstSearch {
    type State = TraversalState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "dfs",
            name: "Depth-First Search",
            family: Family::Graph,
            complexity: "O(V + E)",
        }
    }

    fn initial_state(&self) -> TraversalState {
        TraversalState::new(self.graph.clone(), self.start)
    }

    fn generate_trace(
        &self,
        initial: &TraversalState,
        config: &TraceConfig,
    ) -> Trace<TraversalState> {
        let graph = &initial.graph;
        let start = initial.start;
        if let Err(reason) = graph.validate_node(start, "start") {
            return Trace::invalid(initial.clone(), reason);
        }

        let adjacency = graph.adjacency();
        let mut walker = Walker {
            adjacency: &adjacency,
            seen: vec![false; graph.len()],
            state: TraversalState::new(graph.clone(), start),
            recorder: TraceRecorder::new(
                initial,
                format!("Start depth-first search from node {}", graph.label(start)),
                config.max_steps,
            ),
        };
        walker.visit(start);

        let Walker {
            mut state,
            recorder,
            ..
        } = walker;
        state.current = None;
        let unreachable = graph.len() - state.visited.len();
        let description = if unreachable == 0 {
            format!(
                "Depth-first search complete. Visit order: {}",
                labels(graph, &state.visited)
            )
        } else {
            format!(
                "Depth-first search complete. {} node(s) unreachable from {}",
                unreachable,
                graph.label(start)
            )
        };
        recorder.finish(&state, description, Outcome::Success)
    }
}
