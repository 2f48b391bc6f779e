// Floyd-Warshall all-pairs shortest paths

use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::Graph;
use crate::model::samples;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FloydWarshallState {
    pub graph: Graph,
    /// `dist[i][j]`, `None` meaning no known path
    pub dist: Vec<Vec<Option<i64>>>,
    /// Intermediate node currently allowed
    pub k: Option<usize>,
    /// Cell being updated
    pub cell: Option<(usize, usize)>,
    pub has_negative_cycle: bool,
}

impl FloydWarshallState {
    pub fn new(graph: Graph) -> Self {
        FloydWarshallState {
            graph,
            dist: Vec::new(),
            k: None,
            cell: None,
            has_negative_cycle: false,
        }
    }
}

impl Visualize for FloydWarshallState {
    fn view(&self) -> Vec<Row> {
        let labels = self.graph.labels();
        let mut rows = vec![Row::labeled("k:").cell(
            format::optional(self.k.map(|k| self.graph.label(k).to_string())),
            Mark::Active,
        )];
        if self.dist.is_empty() {
            rows.push(Row::text("(matrix not initialized)"));
            return rows;
        }
        rows.extend(format::matrix_rows(&labels, &labels, &self.dist, |i, j| {
            if self.cell == Some((i, j)) {
                Mark::Active
            } else if self.k == Some(i) || self.k == Some(j) {
                Mark::Compare
            } else if i == j && self.dist[i][j].is_some_and(|d| d < 0) {
                Mark::Alert
            } else {
                Mark::Plain
            }
        }));
        rows
    }
}

#[derive(Debug, Clone)]
pub struct FloydWarshall {
    pub graph: Graph,
}

impl Default for FloydWarshall {
    fn default() -> Self {
        FloydWarshall {
            graph: samples::all_pairs_graph(),
        }
    }
}

fn through(dist: &[Vec<Option<i64>>], i: usize, k: usize, j: usize) -> Option<i64> {
    match (dist[i][k], dist[k][j]) {
        (Some(a), Some(b)) => a.checked_add(b),
        _ => None,
    }
}

impl Algorithm for FloydWarshall {
    type State = FloydWarshallState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "floyd-warshall",
            name: "Floyd-Warshall Algorithm",
            family: Family::Graph,
            complexity: "O(V^3)",
        }
    }

    fn initial_state(&self) -> FloydWarshallState {
        FloydWarshallState::new(self.graph.clone())
    }

    fn generate_trace(
        &self,
        initial: &FloydWarshallState,
        config: &TraceConfig,
    ) -> Trace<FloydWarshallState> {
        let graph = &initial.graph;
        if let Err(reason) = graph.validate() {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let mut state = FloydWarshallState::new(graph.clone());
        let mut recorder = TraceRecorder::new(
            initial,
            "Compute shortest paths between every pair of nodes",
            config.max_steps,
        );

        let mut dist = vec![vec![None; n]; n];
        for (i, row) in dist.iter_mut().enumerate() {
            row[i] = Some(0);
        }
        for arc in graph.arcs() {
            let entry = &mut dist[arc.from][arc.to];
            if entry.map_or(true, |d| arc.weight < d) {
                *entry = Some(arc.weight);
            }
        }
        state.dist = dist;
        recorder.record_with(
            &state,
            "Initialize the matrix: 0 on the diagonal, \
             edge weights for direct edges, ∞ elsewhere",
            Annotation::titled("Initialization"),
        );

        for k in 0..n {
            state.k = Some(k);
            state.cell = None;
            recorder.record_with(
                &state,
                format!("Allow node {} as an intermediate stop", graph.label(k)),
                Annotation::titled(format!("k = {}", graph.label(k))),
            );
            for i in 0..n {
                for j in 0..n {
                    let Some(candidate) = through(&state.dist, i, k, j) else {
                        continue;
                    };
                    if state.dist[i][j].map_or(true, |d| candidate < d) {
                        let old = state.dist[i][j];
                        state.dist[i][j] = Some(candidate);
                        state.cell = Some((i, j));
                        recorder.record(
                            &state,
                            format!(
                                "dist[{}][{}] = dist[{}][{}] + dist[{}][{}] = {} < {}",
                                graph.label(i),
                                graph.label(j),
                                graph.label(i),
                                graph.label(k),
                                graph.label(k),
                                graph.label(j),
                                candidate,
                                format::distance(old)
                            ),
                        );
                    }
                }
            }
        }

        state.k = None;
        state.cell = None;
        recorder.record_with(
            &state,
            "Run one more pass to check whether any distance can still shrink",
            Annotation::titled("Negative cycle check"),
        );
        for k in 0..n {
            for i in 0..n {
                for j in 0..n {
                    if let Some(candidate) = through(&state.dist, i, k, j) {
                        if state.dist[i][j].map_or(true, |d| candidate < d) {
                            state.has_negative_cycle = true;
                            state.cell = Some((i, j));
                            return recorder.finish(
                                &state,
                                format!(
                                    "dist[{}][{}] still improves via {}: negative cycle detected",
                                    graph.label(i),
                                    graph.label(j),
                                    graph.label(k)
                                ),
                                Outcome::Failure("negative cycle detected".to_string()),
                            );
                        }
                    }
                }
            }
        }

        recorder.finish(
            &state,
            "All-pairs shortest paths complete; no negative cycle",
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::graph::Edge;

    #[test]
    fn sample_matrix() {
        let trace = FloydWarshall::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        let dist = &trace.last().state.dist;
        let expected = [
            [0, 3, 5, 6],
            [5, 0, 2, 3],
            [3, 6, 0, 1],
            [2, 5, 7, 0],
        ];
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(dist[i][j], Some(expected[i][j]), "dist[{}][{}]", i, j);
            }
        }
    }

    #[test]
    fn negative_cycle_is_flagged() {
        let fw = FloydWarshall {
            graph: Graph::from_labels(
                &["A", "B"],
                vec![Edge::arc(0, 1, 1), Edge::arc(1, 0, -3)],
            ),
        };
        let trace = fw.trace(&TraceConfig::default());
        assert!(trace.last().state.has_negative_cycle);
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    }
}
