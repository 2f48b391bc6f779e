// Bellman-Ford shortest paths with negative-cycle detection

use super::{distance_row, distance_summary, edge_row};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{Graph, PathEdges};
use crate::model::samples;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BellmanFordState {
    pub graph: Graph,
    pub source: usize,
    pub distances: Vec<Option<i64>>,
    pub previous: Vec<Option<usize>>,
    /// Relaxation pass, 1-based; 0 before the first pass
    pub iteration: usize,
    /// Index into `graph.edges` of the edge being relaxed
    pub current_edge: Option<usize>,
    pub path: PathEdges,
    pub has_negative_cycle: bool,
}

impl BellmanFordState {
    pub fn new(graph: Graph, source: usize) -> Self {
        let n = graph.len();
        BellmanFordState {
            graph,
            source,
            distances: vec![None; n],
            previous: vec![None; n],
            iteration: 0,
            current_edge: None,
            path: PathEdges::new(),
            has_negative_cycle: false,
        }
    }
}

impl Visualize for BellmanFordState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let current = self.current_edge.and_then(|e| g.edges.get(e));
        let mut edges = Row::labeled("Edges:");
        for (i, e) in g.edges.iter().enumerate() {
            let mark = if self.current_edge == Some(i) {
                if self.has_negative_cycle {
                    Mark::Alert
                } else {
                    Mark::Active
                }
            } else if self.path.contains(e.source, e.target) {
                Mark::Done
            } else {
                Mark::Plain
            };
            edges.push(
                format!("{}→{}({})", g.label(e.source), g.label(e.target), e.weight()),
                mark,
            );
        }
        vec![
            Row::labeled("Pass:").cell(self.iteration.to_string(), Mark::Plain),
            edges,
            distance_row(g, "Distance:", &self.distances, |n| match current {
                Some(e) if e.target == n => Mark::Compare,
                _ => Mark::Plain,
            }),
            edge_row(g, "Path:", &self.path),
            Row::labeled("Negative cycle:").cell(
                if self.has_negative_cycle { "yes" } else { "no" },
                if self.has_negative_cycle { Mark::Alert } else { Mark::Plain },
            ),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct BellmanFord {
    pub graph: Graph,
    pub source: usize,
}

impl Default for BellmanFord {
    fn default() -> Self {
        BellmanFord {
            graph: samples::negative_weight_graph(),
            source: 0,
        }
    }
}

impl Algorithm for BellmanFord {
    type State = BellmanFordState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "bellman-ford",
            name: "Bellman-Ford Algorithm",
            family: Family::Graph,
            complexity: "O(V * E)",
        }
    }

    fn initial_state(&self) -> BellmanFordState {
        BellmanFordState::new(self.graph.clone(), self.source)
    }

    fn generate_trace(
        &self,
        initial: &BellmanFordState,
        config: &TraceConfig,
    ) -> Trace<BellmanFordState> {
        let graph = &initial.graph;
        let source = initial.source;
        if let Err(reason) = graph.validate_node(source, "source") {
            return Trace::invalid(initial.clone(), reason);
        }

        let arcs = graph.arcs();
        let n = graph.len();
        let mut state = BellmanFordState::new(graph.clone(), source);
        let mut recorder = TraceRecorder::new(
            initial,
            format!("Find shortest paths from {} with Bellman-Ford", graph.label(source)),
            config.max_steps,
        );

        state.distances[source] = Some(0);
        recorder.record(
            &state,
            format!("Set distance of {} to 0, all others to ∞", graph.label(source)),
        );

        for iteration in 1..n {
            state.iteration = iteration;
            state.current_edge = None;
            recorder.record_with(
                &state,
                format!("Start relaxation pass {} of {}", iteration, n - 1),
                Annotation::titled(format!("Pass {}", iteration)),
            );

            let mut changed = false;
            for arc in &arcs {
                let Some(du) = state.distances[arc.from] else {
                    continue;
                };
                state.current_edge = Some(arc.edge);
                let candidate = du + arc.weight;
                let old = state.distances[arc.to];
                if old.map_or(true, |d| candidate < d) {
                    state.distances[arc.to] = Some(candidate);
                    state.previous[arc.to] = Some(arc.from);
                    state.path.set_best(arc.from, arc.to);
                    changed = true;
                    recorder.record(
                        &state,
                        format!(
                            "Relax {} → {}: {} + ({}) = {} < {}, update",
                            graph.label(arc.from),
                            graph.label(arc.to),
                            du,
                            arc.weight,
                            candidate,
                            format::distance(old)
                        ),
                    );
                } else {
                    recorder.record(
                        &state,
                        format!(
                            "Check {} → {}: {} + ({}) = {} does not improve {}",
                            graph.label(arc.from),
                            graph.label(arc.to),
                            du,
                            arc.weight,
                            candidate,
                            format::distance(old)
                        ),
                    );
                }
            }

            if !changed {
                state.current_edge = None;
                recorder.record(
                    &state,
                    format!("No distance changed in pass {}: distances have converged", iteration),
                );
                break;
            }
        }

        state.current_edge = None;
        state.iteration = n;
        recorder.record_with(
            &state,
            "Run one more pass over every edge to detect negative cycles",
            Annotation::titled("Negative cycle check"),
        );
        for arc in &arcs {
            let Some(du) = state.distances[arc.from] else {
                continue;
            };
            let improves = state.distances[arc.to].map_or(true, |d| du + arc.weight < d);
            if improves {
                state.current_edge = Some(arc.edge);
                state.has_negative_cycle = true;
                return recorder.finish(
                    &state,
                    format!(
                        "Edge {} → {} can still be relaxed: \
                         the graph has a negative cycle, distances are undefined",
                        graph.label(arc.from),
                        graph.label(arc.to)
                    ),
                    Outcome::Failure("negative cycle detected".to_string()),
                );
            }
        }

        recorder.finish(
            &state,
            format!(
                "No negative cycle. Final distances: {}",
                distance_summary(graph, &state.distances)
            ),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;

    #[test]
    fn sample_distances() {
        let trace = BellmanFord::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(
            last.distances,
            vec![Some(0), Some(3), Some(2), Some(-1), Some(2)]
        );
        assert!(!last.has_negative_cycle);
        assert!(trace.outcome().is_success());
    }

    #[test]
    fn detects_negative_cycle() {
        let bf = BellmanFord {
            graph: Graph::from_labels(
                &["A", "B", "C"],
                vec![Edge::arc(0, 1, 1), Edge::arc(1, 2, -2), Edge::arc(2, 1, 1)],
            ),
            source: 0,
        };
        let trace = bf.trace(&TraceConfig::default());
        assert!(trace.last().state.has_negative_cycle);
        assert_eq!(
            trace.outcome(),
            &Outcome::Failure("negative cycle detected".to_string())
        );
        assert!(trace
            .iter()
            .take(trace.len() - 1)
            .all(|s| !s.state.has_negative_cycle));
    }

    #[test]
    fn unreachable_nodes_stay_infinite() {
        let bf = BellmanFord {
            graph: Graph::from_labels(&["A", "B", "C"], vec![Edge::arc(0, 1, 5)]),
            source: 0,
        };
        let trace = bf.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.distances, vec![Some(0), Some(5), None]);
    }
}
