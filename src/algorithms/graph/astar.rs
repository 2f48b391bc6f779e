// A* search with a Manhattan-distance heuristic

use super::{edge_row, labels, node_row};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{reconstruct_path, route_string, Graph, PathEdges};
use crate::model::samples;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AStarState {
    pub graph: Graph,
    pub start: usize,
    pub goal: usize,
    pub g_score: Vec<Option<i64>>,
    pub f_score: Vec<Option<i64>>,
    /// Heuristic estimate per node; empty until computed
    pub heuristic: Vec<i64>,
    pub open_set: Vec<usize>,
    pub closed_set: Vec<usize>,
    pub came_from: Vec<Option<usize>>,
    pub current: Option<usize>,
    pub path: PathEdges,
}

impl AStarState {
    pub fn new(graph: Graph, start: usize, goal: usize) -> Self {
        let n = graph.len();
        AStarState {
            graph,
            start,
            goal,
            g_score: vec![None; n],
            f_score: vec![None; n],
            heuristic: Vec::new(),
            open_set: Vec::new(),
            closed_set: Vec::new(),
            came_from: vec![None; n],
            current: None,
            path: PathEdges::new(),
        }
    }
}

impl Visualize for AStarState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let mut rows = vec![node_row(g, "Nodes:", |n| {
            if self.current == Some(n) {
                Mark::Active
            } else if n == self.goal {
                Mark::Label
            } else if self.closed_set.contains(&n) {
                Mark::Done
            } else if self.open_set.contains(&n) {
                Mark::Compare
            } else {
                Mark::Plain
            }
        })];
        let mut scores = Row::labeled("g/h/f:");
        for i in 0..g.len() {
            let h = self.heuristic.get(i).map(|h| h.to_string()).unwrap_or_else(|| "-".into());
            scores.push(
                format!(
                    "{}:{}/{}/{}",
                    g.label(i),
                    format::distance(self.g_score[i]),
                    h,
                    format::distance(self.f_score[i])
                ),
                if self.current == Some(i) { Mark::Active } else { Mark::Plain },
            );
        }
        rows.push(scores);
        rows.push(Row::labeled("Open:").cell(labels(g, &self.open_set), Mark::Compare));
        rows.push(Row::labeled("Closed:").cell(labels(g, &self.closed_set), Mark::Done));
        rows.push(edge_row(g, "Path:", &self.path));
        rows
    }
}

#[derive(Debug, Clone)]
pub struct AStar {
    pub graph: Graph,
    pub start: usize,
    pub goal: usize,
}

impl Default for AStar {
    fn default() -> Self {
        AStar {
            graph: samples::grid_graph(),
            start: 0,
            goal: 8,
        }
    }
}

impl Algorithm for AStar {
    type State = AStarState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "a-star",
            name: "A* Search",
            family: Family::Graph,
            complexity: "O(E log V) with a good heuristic",
        }
    }

    fn initial_state(&self) -> AStarState {
        AStarState::new(self.graph.clone(), self.start, self.goal)
    }

    fn generate_trace(&self, initial: &AStarState, config: &TraceConfig) -> Trace<AStarState> {
        let graph = &initial.graph;
        let (start, goal) = (initial.start, initial.goal);
        if let Err(reason) = graph
            .validate_node(start, "start")
            .and_then(|_| graph.validate_node(goal, "goal"))
        {
            return Trace::invalid(initial.clone(), reason);
        }
        if graph.nodes.iter().any(|n| n.position.is_none()) {
            return Trace::invalid(initial.clone(), "A* needs a position for every node");
        }
        if graph.has_negative_weight() {
            return Trace::invalid(initial.clone(), "A* requires non-negative edge weights");
        }

        let adjacency = graph.adjacency();
        let mut state = AStarState::new(graph.clone(), start, goal);
        let mut recorder = TraceRecorder::new(
            initial,
            format!(
                "Search for a path from {} to {} with A*",
                graph.label(start),
                graph.label(goal)
            ),
            config.max_steps,
        );

        state.heuristic = (0..graph.len())
            .map(|n| graph.manhattan(n, goal).unwrap_or(0))
            .collect();
        recorder.record_with(
            &state,
            format!("Compute Manhattan distance to {} as h(n) for every node", graph.label(goal)),
            Annotation::titled("Heuristic"),
        );

        state.g_score[start] = Some(0);
        state.f_score[start] = Some(state.heuristic[start]);
        state.open_set.push(start);
        recorder.record(
            &state,
            format!(
                "Open {} with g = 0 and f = h = {}",
                graph.label(start),
                state.heuristic[start]
            ),
        );

        loop {
            let mut best: Option<(usize, i64)> = None;
            for (pos, &node) in state.open_set.iter().enumerate() {
                let f = state.f_score[node].unwrap_or(i64::MAX);
                if best.map_or(true, |(_, bf)| f < bf) {
                    best = Some((pos, f));
                }
            }
            let Some((pos, f)) = best else {
                break;
            };
            let u = state.open_set.remove(pos);
            state.current = Some(u);
            let gu = state.g_score[u].unwrap_or(0);

            if u == goal {
                let route = reconstruct_path(&state.came_from, start, goal).unwrap_or_default();
                state.path.clear();
                for pair in route.windows(2) {
                    state.path.set_best(pair[0], pair[1]);
                }
                state.closed_set.push(u);
                return recorder.finish(
                    &state,
                    format!(
                        "Goal {} reached: path {} with cost {}",
                        graph.label(goal),
                        route_string(graph, &route),
                        gu
                    ),
                    Outcome::Success,
                );
            }

            state.closed_set.push(u);
            recorder.record(
                &state,
                format!(
                    "Expand {} with the lowest f = g + h = {} + {} = {}",
                    graph.label(u),
                    gu,
                    state.heuristic[u],
                    f
                ),
            );

            for arc in &adjacency[u] {
                let v = arc.to;
                if state.closed_set.contains(&v) {
                    continue;
                }
                let tentative = gu + arc.weight;
                if state.g_score[v].map_or(true, |g| tentative < g) {
                    state.g_score[v] = Some(tentative);
                    state.f_score[v] = Some(tentative + state.heuristic[v]);
                    state.came_from[v] = Some(u);
                    state.path.set_best(u, v);
                    let opened = if state.open_set.contains(&v) {
                        ""
                    } else {
                        state.open_set.push(v);
                        " and add it to the open set"
                    };
                    recorder.record(
                        &state,
                        format!(
                            "Improve {} via {}: g = {}, f = {}{}",
                            graph.label(v),
                            graph.label(u),
                            tentative,
                            tentative + state.heuristic[v],
                            opened
                        ),
                    );
                } else {
                    recorder.record(
                        &state,
                        format!(
                            "Edge {} → {} gives g = {}, not better than {}",
                            graph.label(u),
                            graph.label(v),
                            tentative,
                            format::distance(state.g_score[v])
                        ),
                    );
                }
            }
        }

        state.current = None;
        recorder.finish(
            &state,
            format!(
                "Open set is empty: no path from {} to {}",
                graph.label(start),
                graph.label(goal)
            ),
            Outcome::Failure(format!("{} is unreachable", graph.label(goal))),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::{Edge, Node};

    #[test]
    fn finds_cheapest_grid_route() {
        let trace = AStar::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        let last = &trace.last().state;
        assert_eq!(last.g_score[8], Some(4));
        assert!(trace.last().description.contains("A → D → E → H → I"));
    }

    #[test]
    fn heuristic_recorded_after_step_zero() {
        let trace = AStar::default().trace(&TraceConfig::default());
        assert!(trace[0].state.heuristic.is_empty());
        for step in trace.iter().skip(1) {
            assert_eq!(step.state.heuristic.len(), 9);
        }
    }

    #[test]
    fn missing_positions_are_invalid() {
        let astar = AStar {
            graph: Graph::from_labels(&["A", "B"], vec![Edge::between(0, 1)]),
            start: 0,
            goal: 1,
        };
        assert!(matches!(
            astar.trace(&TraceConfig::default()).outcome(),
            Outcome::Invalid(_)
        ));
    }

    #[test]
    fn disconnected_goal_fails() {
        let astar = AStar {
            graph: Graph::new(vec![Node::at("A", 0, 0), Node::at("B", 3, 0)], vec![]),
            start: 0,
            goal: 1,
        };
        let trace = astar.trace(&TraceConfig::default());
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    }
}
