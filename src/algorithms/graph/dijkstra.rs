// Dijkstra's single-source shortest paths (array-based selection)

use super::{distance_row, distance_summary, edge_row, node_row};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{reconstruct_path, route_string, Graph, PathEdges};
use crate::model::samples;
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DijkstraState {
    pub graph: Graph,
    pub source: usize,
    pub goal: Option<usize>,
    pub distances: Vec<Option<i64>>,
    pub previous: Vec<Option<usize>>,
    pub visited: Vec<bool>,
    pub current: Option<usize>,
    /// Edge under examination
    pub examining: Option<(usize, usize)>,
    pub path: PathEdges,
}

impl DijkstraState {
    pub fn new(graph: Graph, source: usize, goal: Option<usize>) -> Self {
        let n = graph.len();
        DijkstraState {
            graph,
            source,
            goal,
            distances: vec![None; n],
            previous: vec![None; n],
            visited: vec![false; n],
            current: None,
            examining: None,
            path: PathEdges::new(),
        }
    }
}

impl Visualize for DijkstraState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        vec![
            node_row(g, "Nodes:", |n| {
                if self.current == Some(n) {
                    Mark::Active
                } else if self.examining.is_some_and(|(_, v)| v == n) {
                    Mark::Compare
                } else if self.visited.get(n).copied().unwrap_or(false) {
                    Mark::Done
                } else {
                    Mark::Plain
                }
            }),
            distance_row(g, "Distance:", &self.distances, |n| {
                if self.examining.is_some_and(|(_, v)| v == n) {
                    Mark::Compare
                } else {
                    Mark::Plain
                }
            }),
            Row::labeled("Previous:").cell(
                self.previous
                    .iter()
                    .enumerate()
                    .map(|(i, p)| {
                        format!(
                            "{}←{}",
                            g.label(i),
                            format::optional(p.map(|p| g.label(p).to_string()))
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
                Mark::Plain,
            ),
            edge_row(g, "Path:", &self.path),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct Dijkstra {
    pub graph: Graph,
    pub source: usize,
    pub goal: Option<usize>,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Dijkstra {
            graph: samples::dijkstra_graph(),
            source: 0,
            goal: Some(4),
        }
    }
}

impl Algorithm for Dijkstra {
    type State = DijkstraState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "dijkstra",
            name: "Dijkstra's Algorithm",
            family: Family::Graph,
            complexity: "O(V^2)",
        }
    }

    fn initial_state(&self) -> DijkstraState {
        DijkstraState::new(self.graph.clone(), self.source, self.goal)
    }

    fn generate_trace(
        &self,
        initial: &DijkstraState,
        config: &TraceConfig,
    ) -> Trace<DijkstraState> {
        let graph = &initial.graph;
        let source = initial.source;
        let goal = initial.goal;
        if let Err(reason) = graph.validate_node(source, "source") {
            return Trace::invalid(initial.clone(), reason);
        }
        if let Some(goal) = goal {
            if let Err(reason) = graph.validate_node(goal, "goal") {
                return Trace::invalid(initial.clone(), reason);
            }
        }
        if graph.has_negative_weight() {
            return Trace::invalid(
                initial.clone(),
                "Dijkstra's algorithm requires non-negative edge weights",
            );
        }

        let adjacency = graph.adjacency();
        let n = graph.len();
        let mut state = DijkstraState::new(graph.clone(), source, goal);
        let mut recorder = TraceRecorder::new(
            initial,
            format!(
                "Find shortest paths from {} using Dijkstra's algorithm",
                graph.label(source)
            ),
            config.max_steps,
        );

        state.distances[source] = Some(0);
        recorder.record(
            &state,
            format!(
                "Set distance of {} to 0; every other node starts at ∞",
                graph.label(source)
            ),
        );

        loop {
            let mut best: Option<(usize, i64)> = None;
            for v in 0..n {
                if state.visited[v] {
                    continue;
                }
                if let Some(d) = state.distances[v] {
                    if best.map_or(true, |(_, bd)| d < bd) {
                        best = Some((v, d));
                    }
                }
            }
            let Some((u, du)) = best else {
                break;
            };

            state.visited[u] = true;
            state.current = Some(u);
            state.examining = None;
            recorder.record(
                &state,
                format!(
                    "Select unvisited node {} with the smallest distance {}",
                    graph.label(u),
                    du
                ),
            );

            if goal == Some(u) {
                let route = reconstruct_path(&state.previous, source, u).unwrap_or_default();
                state.path.clear();
                for pair in route.windows(2) {
                    state.path.set_best(pair[0], pair[1]);
                }
                state.current = None;
                return recorder.finish(
                    &state,
                    format!(
                        "Reached goal {}: shortest path {} with cost {}",
                        graph.label(u),
                        route_string(graph, &route),
                        du
                    ),
                    Outcome::Success,
                );
            }

            for arc in &adjacency[u] {
                let v = arc.to;
                if state.visited[v] {
                    continue;
                }
                state.examining = Some((u, v));
                let candidate = du + arc.weight;
                let old = state.distances[v];
                if old.map_or(true, |d| candidate < d) {
                    state.distances[v] = Some(candidate);
                    state.previous[v] = Some(u);
                    state.path.set_best(u, v);
                    recorder.record(
                        &state,
                        format!(
                            "Relax edge {} → {}: {} + {} = {} < {}, update distance",
                            graph.label(u),
                            graph.label(v),
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
                            "Check edge {} → {}: {} + {} = {} is not better than {}",
                            graph.label(u),
                            graph.label(v),
                            du,
                            arc.weight,
                            candidate,
                            format::distance(old)
                        ),
                    );
                }
            }
        }

        state.current = None;
        state.examining = None;
        match goal {
            Some(goal) => recorder.finish(
                &state,
                format!(
                    "No path exists from {} to {}",
                    graph.label(source),
                    graph.label(goal)
                ),
                Outcome::Failure(format!("{} is unreachable", graph.label(goal))),
            ),
            None => recorder.finish(
                &state,
                format!(
                    "All reachable nodes settled. Distances: {}",
                    distance_summary(graph, &state.distances)
                ),
                Outcome::Success,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;

    #[test]
    fn finds_sample_shortest_path() {
        let trace = Dijkstra::default().trace(&TraceConfig::default());
        let last = trace.last();
        assert!(trace.outcome().is_success());
        assert_eq!(last.state.distances[4], Some(20));
        assert!(last.description.contains("A → C → F → E"));
        assert_eq!(last.state.path.as_slice(), &[(0, 2), (2, 5), (5, 4)]);
    }

    #[test]
    fn all_pairs_without_goal() {
        let dijkstra = Dijkstra {
            goal: None,
            ..Dijkstra::default()
        };
        let trace = dijkstra.trace(&TraceConfig::default());
        assert_eq!(
            trace.last().state.distances,
            vec![Some(0), Some(7), Some(9), Some(20), Some(20), Some(11)]
        );
    }

    #[test]
    fn unreachable_goal_is_failure() {
        let dijkstra = Dijkstra {
            graph: Graph::from_labels(&["A", "B", "C"], vec![Edge::weighted(0, 1, 2)]),
            source: 0,
            goal: Some(2),
        };
        let trace = dijkstra.trace(&TraceConfig::default());
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    }

    #[test]
    fn negative_weights_are_rejected() {
        let dijkstra = Dijkstra {
            graph: samples::negative_weight_graph(),
            source: 0,
            goal: None,
        };
        let trace = dijkstra.trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }

    #[test]
    fn path_never_has_two_edges_into_a_node() {
        let trace = Dijkstra::default().trace(&TraceConfig::default());
        for step in &trace {
            let mut targets: Vec<usize> = step.state.path.as_slice().iter().map(|e| e.1).collect();
            let before = targets.len();
            targets.sort_unstable();
            targets.dedup();
            assert_eq!(before, targets.len());
        }
    }
}
