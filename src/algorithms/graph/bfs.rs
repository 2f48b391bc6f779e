// Breadth-first traversal

use super::{labels, TraversalState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct BreadthFirstSearch {
    pub graph: Graph,
    pub start: usize,
}

impl Default for BreadthFirstSearch {
    fn default() -> Self {
        BreadthFirstSearch {
            graph: samples::traversal_graph(),
            start: 0,
        }
    }
}

impl Algorithm for BreadthFirstSearch {
    type State = TraversalState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "bfs",
            name: "Breadth-First Search",
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
        let mut state = TraversalState::new(graph.clone(), start);
        let mut recorder = TraceRecorder::new(
            initial,
            format!("Start breadth-first search from node {}", graph.label(start)),
            config.max_steps,
        );

        let mut discovered = vec![false; graph.len()];
        let mut queue = VecDeque::new();
        discovered[start] = true;
        queue.push_back(start);
        state.frontier = vec![start];
        recorder.record(&state, format!("Enqueue start node {}", graph.label(start)));

        while let Some(u) = queue.pop_front() {
            state.current = Some(u);
            state.visited.push(u);
            state.frontier = queue.iter().copied().collect();
            recorder.record(&state, format!("Dequeue and visit node {}", graph.label(u)));

            for arc in &adjacency[u] {
                let v = arc.to;
                if discovered[v] {
                    continue;
                }
                discovered[v] = true;
                queue.push_back(v);
                state.tree_edges.set_best(u, v);
                state.frontier = queue.iter().copied().collect();
                recorder.record(
                    &state,
                    format!(
                        "Discover node {} from {} and enqueue it",
                        graph.label(v),
                        graph.label(u)
                    ),
                );
            }
        }

        state.current = None;
        state.frontier.clear();
        let unreachable = graph.len() - state.visited.len();
        let description = if unreachable == 0 {
            format!(
                "Breadth-first search complete. Visit order: {}",
                labels(graph, &state.visited)
            )
        } else {
            format!(
                "Breadth-first search complete. {} node(s) unreachable from {}",
                unreachable,
                graph.label(start)
            )
        };
        recorder.finish(&state, description, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;

    #[test]
    fn visits_level_by_level() {
        let trace = BreadthFirstSearch::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.visited, vec![0, 1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(last.tree_edges.len(), 7);
        assert!(trace.outcome().is_success());
    }

    #[test]
    fn reports_unreachable_nodes() {
        let bfs = BreadthFirstSearch {
            graph: Graph::from_labels(&["A", "B", "C"], vec![Edge::between(0, 1)]),
            start: 0,
        };
        let trace = bfs.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.visited, vec![0, 1]);
        assert!(trace.last().description.contains("1 node(s) unreachable"));
    }

    #[test]
    fn bad_start_is_invalid() {
        let bfs = BreadthFirstSearch {
            start: 42,
            ..BreadthFirstSearch::default()
        };
        let trace = bfs.trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }
}
