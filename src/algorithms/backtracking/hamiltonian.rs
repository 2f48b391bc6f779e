// Hamiltonian cycle by extending a path one vertex at a time

use super::{truncated_description, Search};
use crate::algorithms::graph::node_row;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{route_string, Graph};
use crate::model::grid::CellState;
use crate::model::samples;
use crate::snapshot::{Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleState {
    pub graph: Graph,
    pub start: usize,
    pub path: Vec<usize>,
    pub vertices: Vec<CellState>,
    /// Vertex being considered as the next path entry
    pub candidate: Option<usize>,
    pub closed: bool,
}

impl CycleState {
    pub fn new(graph: Graph, start: usize) -> Self {
        let vertices = vec![CellState::Unvisited; graph.len()];
        CycleState {
            graph,
            start,
            path: Vec::new(),
            vertices,
            candidate: None,
            closed: false,
        }
    }
}

impl Visualize for CycleState {
    fn view(&self) -> Vec<Row> {
        let mut route = self.path.clone();
        if self.closed {
            route.push(self.start);
        }
        vec![
            node_row(&self.graph, "Vertices:", |v| {
                if self.candidate == Some(v) {
                    Mark::Compare
                } else {
                    self.vertices[v].mark()
                }
            }),
            Row::labeled("Path:").cell(
                route_string(&self.graph, &route),
                if self.closed { Mark::Done } else { Mark::Active },
            ),
        ]
    }
}

struct Walker {
    state: CycleState,
    adjacent: Vec<Vec<bool>>,
    recorder: TraceRecorder<CycleState>,
}

impl Walker {
    fn label(&self, v: usize) -> String {
        self.state.graph.label(v).to_string()
    }

    fn extend(&mut self) -> Search {
        let n = self.state.graph.len();
        let Some(&last) = self.state.path.last() else {
            return Search::Exhausted;
        };
        if self.state.path.len() == n {
            if self.recorder.is_full() {
                return Search::Aborted;
            }
            let start = self.state.start;
            if self.adjacent[last][start] {
                self.state.closed = true;
                return Search::Found;
            }
            let description = format!(
                "All vertices used but {} has no edge back to {}",
                self.label(last),
                self.label(start)
            );
            self.recorder.record(&self.state, description);
            return Search::Exhausted;
        }

        for next in 0..n {
            if !self.adjacent[last][next] {
                continue;
            }
            if self.recorder.is_full() {
                return Search::Aborted;
            }
            let (from, to) = (self.label(last), self.label(next));
            self.state.candidate = Some(next);
            if self.state.path.contains(&next) {
                self.recorder
                    .record(&self.state, format!("{} is already on the path: skip it", to));
                continue;
            }

            self.state.candidate = None;
            self.state.path.push(next);
            self.state.vertices[next] = CellState::Exploring;
            self.recorder.record(
                &self.state,
                format!("Extend the path {} → {}", from, to),
            );

            match self.extend() {
                Search::Exhausted => {}
                done => return done,
            }

            self.state.path.pop();
            self.state.vertices[next] = CellState::Backtracked;
            self.recorder.record(
                &self.state,
                format!("No cycle through {} here: backtrack to {}", to, from),
            );
        }
        self.state.candidate = None;
        Search::Exhausted
    }
}

#[derive(Debug, Clone)]
pub struct HamiltonianCycle {
    pub graph: Graph,
    pub start: usize,
}

impl Default for HamiltonianCycle {
    fn default() -> Self {
        HamiltonianCycle {
            graph: samples::hamiltonian_graph(),
            start: 0,
        }
    }
}

impl Algorithm for HamiltonianCycle {
    type State = CycleState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "hamiltonian-cycle",
            name: "Hamiltonian Cycle",
            family: Family::Backtracking,
            complexity: "O(n!)",
        }
    }

    fn initial_state(&self) -> CycleState {
        CycleState::new(self.graph.clone(), self.start)
    }

    fn generate_trace(&self, initial: &CycleState, config: &TraceConfig) -> Trace<CycleState> {
        let graph = &initial.graph;
        if let Err(reason) = graph
            .validate()
            .and_then(|_| graph.validate_node(initial.start, "start"))
        {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let mut adjacent = vec![vec![false; n]; n];
        for arc in graph.arcs() {
            adjacent[arc.from][arc.to] = true;
        }

        let start = initial.start;
        let limit = config.search_limit();
        let mut walker = Walker {
            state: CycleState::new(graph.clone(), start),
            adjacent,
            recorder: TraceRecorder::new(
                initial,
                format!(
                    "Find a cycle through every vertex, starting at {}",
                    graph.label(start)
                ),
                limit,
            ),
        };
        walker.state.path.push(start);
        walker.state.vertices[start] = CellState::Exploring;
        walker
            .recorder
            .record(&walker.state, format!("Start the path at {}", graph.label(start)));

        let result = walker.extend();
        let Walker {
            mut state,
            recorder,
            ..
        } = walker;
        state.candidate = None;
        let description = match result {
            Search::Found => {
                state.vertices = vec![CellState::Placed; n];
                let mut cycle = state.path.clone();
                cycle.push(start);
                format!("Hamiltonian cycle found: {}", route_string(graph, &cycle))
            }
            Search::Exhausted => {
                "Every extension was tried: no Hamiltonian cycle exists".to_string()
            }
            Search::Aborted => truncated_description(limit),
        };
        recorder.finish(&state, description, result.outcome("no Hamiltonian cycle exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;
    use crate::snapshot::Outcome;

    #[test]
    fn sample_cycle() {
        let trace = HamiltonianCycle::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        let last = &trace.last().state;
        assert!(last.closed);
        assert_eq!(last.path, vec![0, 1, 2, 4, 3]);
    }

    #[test]
    fn star_graph_has_no_cycle() {
        let graph = Graph::from_labels(
            &["c", "a", "b", "d"],
            vec![Edge::between(0, 1), Edge::between(0, 2), Edge::between(0, 3)],
        );
        let trace = HamiltonianCycle { graph, start: 0 }.trace(&TraceConfig::default());
        assert_eq!(
            trace.outcome(),
            &Outcome::Failure("no Hamiltonian cycle exists".to_string())
        );
        assert!(trace.iter().any(|s| s.description.contains("backtrack")));
    }

    #[test]
    fn bad_start_is_invalid() {
        let ham = HamiltonianCycle {
            start: 9,
            ..HamiltonianCycle::default()
        };
        assert!(matches!(
            ham.trace(&TraceConfig::default()).outcome(),
            Outcome::Invalid(_)
        ));
    }
}
