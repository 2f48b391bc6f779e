// Johnson's all-pairs shortest paths: potentials, reweighting, Dijkstra per source

use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::graph::{Arc, Graph};
use crate::model::samples;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JohnsonPhase {
    Setup,
    Potentials,
    Reweight,
    ShortestPaths,
    Done,
}

impl JohnsonPhase {
    fn title(self) -> &'static str {
        match self {
            JohnsonPhase::Setup => "Setup",
            JohnsonPhase::Potentials => "Potentials (Bellman-Ford)",
            JohnsonPhase::Reweight => "Reweighting",
            JohnsonPhase::ShortestPaths => "Dijkstra from every source",
            JohnsonPhase::Done => "Done",
        }
    }
}

/// A reweighted arc `from -> to` with its non-negative weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Reweighted {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JohnsonState {
    pub graph: Graph,
    pub phase: JohnsonPhase,
    /// h(v) from the virtual source; empty before the potentials phase
    pub potentials: Vec<Option<i64>>,
    pub reweighted: Vec<Reweighted>,
    /// Source of the Dijkstra run in progress
    pub source: Option<usize>,
    /// Reweighted distances of the Dijkstra run in progress
    pub row: Vec<Option<i64>>,
    pub settled: Vec<bool>,
    /// Restored distances, one row per finished source
    pub dist: Vec<Vec<Option<i64>>>,
    pub has_negative_cycle: bool,
}

impl JohnsonState {
    pub fn new(graph: Graph) -> Self {
        JohnsonState {
            graph,
            phase: JohnsonPhase::Setup,
            potentials: Vec::new(),
            reweighted: Vec::new(),
            source: None,
            row: Vec::new(),
            settled: Vec::new(),
            dist: Vec::new(),
            has_negative_cycle: false,
        }
    }
}

impl Visualize for JohnsonState {
    fn view(&self) -> Vec<Row> {
        let g = &self.graph;
        let mut rows = vec![Row::labeled("Phase:").cell(self.phase.title(), Mark::Active)];
        if !self.potentials.is_empty() {
            rows.push(super::distance_row(g, "h:", &self.potentials, |_| Mark::Plain));
        }
        if !self.reweighted.is_empty() {
            let mut row = Row::labeled("w':");
            for r in &self.reweighted {
                row.push(
                    format!("{}→{}({})", g.label(r.from), g.label(r.to), r.weight),
                    Mark::Plain,
                );
            }
            rows.push(row);
        }
        if let Some(source) = self.source {
            rows.push(super::distance_row(
                g,
                &format!("d' from {}:", g.label(source)),
                &self.row,
                |n| {
                    if self.settled.get(n).copied().unwrap_or(false) {
                        Mark::Done
                    } else {
                        Mark::Plain
                    }
                },
            ));
        }
        if !self.dist.is_empty() {
            let labels = g.labels();
            let row_labels: Vec<String> = labels.iter().take(self.dist.len()).cloned().collect();
            rows.extend(format::matrix_rows(&labels, &row_labels, &self.dist, |_, _| {
                Mark::Plain
            }));
        }
        rows
    }
}

#[derive(Debug, Clone)]
pub struct Johnson {
    pub graph: Graph,
}

impl Default for Johnson {
    fn default() -> Self {
        Johnson {
            graph: samples::negative_weight_graph(),
        }
    }
}

impl Algorithm for Johnson {
    type State = JohnsonState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "johnson",
            name: "Johnson's Algorithm",
            family: Family::Graph,
            complexity: "O(V^2 log V + V E)",
        }
    }

    fn initial_state(&self) -> JohnsonState {
        JohnsonState::new(self.graph.clone())
    }

    fn generate_trace(&self, initial: &JohnsonState, config: &TraceConfig) -> Trace<JohnsonState> {
        let graph = &initial.graph;
        if let Err(reason) = graph.validate() {
            return Trace::invalid(initial.clone(), reason);
        }
        let n = graph.len();
        let arcs = graph.arcs();
        let mut state = JohnsonState::new(graph.clone());
        let mut recorder = TraceRecorder::new(
            initial,
            "Compute all-pairs shortest paths with Johnson's algorithm",
            config.max_steps,
        );

        // Phase 1: potentials from a virtual source joined to every node by 0-weight edges
        state.phase = JohnsonPhase::Potentials;
        state.potentials = vec![Some(0); n];
        recorder.record_with(
            &state,
            "Add a virtual node q with a 0-weight edge to every node; h(v) starts at 0",
            Annotation::titled(state.phase.title()),
        );
        for pass in 1..=n {
            let mut changed = false;
            for arc in &arcs {
                let (Some(hu), Some(hv)) = (state.potentials[arc.from], state.potentials[arc.to])
                else {
                    continue;
                };
                if hu + arc.weight < hv {
                    state.potentials[arc.to] = Some(hu + arc.weight);
                    changed = true;
                    recorder.record_with(
                        &state,
                        format!(
                            "Pass {}: h({}) = h({}) + ({}) = {}",
                            pass,
                            graph.label(arc.to),
                            graph.label(arc.from),
                            arc.weight,
                            hu + arc.weight
                        ),
                        Annotation::titled(state.phase.title()),
                    );
                }
            }
            if !changed {
                break;
            }
        }
        let cycle_edge = arcs.iter().find(|arc| {
            matches!(
                (state.potentials[arc.from], state.potentials[arc.to]),
                (Some(hu), Some(hv)) if hu + arc.weight < hv
            )
        });
        if let Some(arc) = cycle_edge {
            state.has_negative_cycle = true;
            return recorder.finish(
                &state,
                format!(
                    "Edge {} → {} still relaxes after {} passes: \
                     negative cycle, Johnson's algorithm stops",
                    graph.label(arc.from),
                    graph.label(arc.to),
                    n
                ),
                Outcome::Failure("negative cycle detected".to_string()),
            );
        }
        let h: Vec<i64> = state.potentials.iter().map(|p| p.unwrap_or(0)).collect();

        // Phase 2: reweight so every edge is non-negative
        state.phase = JohnsonPhase::Reweight;
        for arc in &arcs {
            let weight = arc.weight + h[arc.from] - h[arc.to];
            state.reweighted.push(Reweighted {
                from: arc.from,
                to: arc.to,
                weight,
            });
            recorder.record_with(
                &state,
                format!(
                    "w'({}, {}) = {} + h({}) - h({}) = {} + {} - {} = {}",
                    graph.label(arc.from),
                    graph.label(arc.to),
                    arc.weight,
                    graph.label(arc.from),
                    graph.label(arc.to),
                    arc.weight,
                    h[arc.from],
                    h[arc.to],
                    weight
                ),
                Annotation::titled(state.phase.title()),
            );
        }
        let mut adjacency: Vec<Vec<Arc>> = vec![Vec::new(); n];
        for (i, r) in state.reweighted.iter().enumerate() {
            adjacency[r.from].push(Arc {
                from: r.from,
                to: r.to,
                weight: r.weight,
                edge: i,
            });
        }

        // Phase 3: Dijkstra from each source, then undo the reweighting
        state.phase = JohnsonPhase::ShortestPaths;
        for s in 0..n {
            state.source = Some(s);
            state.row = vec![None; n];
            state.settled = vec![false; n];
            state.row[s] = Some(0);
            recorder.record_with(
                &state,
                format!("Run Dijkstra from {} on the reweighted graph", graph.label(s)),
                Annotation::titled(state.phase.title()),
            );
            loop {
                let mut best: Option<(usize, i64)> = None;
                for v in 0..n {
                    if state.settled[v] {
                        continue;
                    }
                    if let Some(d) = state.row[v] {
                        if best.map_or(true, |(_, bd)| d < bd) {
                            best = Some((v, d));
                        }
                    }
                }
                let Some((u, du)) = best else {
                    break;
                };
                state.settled[u] = true;
                for arc in &adjacency[u] {
                    let candidate = du + arc.weight;
                    if !state.settled[arc.to] && state.row[arc.to].map_or(true, |d| candidate < d) {
                        state.row[arc.to] = Some(candidate);
                    }
                }
                recorder.record_with(
                    &state,
                    format!(
                        "Settle {} at d' = {} and relax its outgoing edges",
                        graph.label(u),
                        du
                    ),
                    Annotation::titled(state.phase.title()),
                );
            }
            let restored: Vec<Option<i64>> = state
                .row
                .iter()
                .enumerate()
                .map(|(v, d)| d.map(|d| d - h[s] + h[v]))
                .collect();
            state.dist.push(restored);
            recorder.record_with(
                &state,
                format!(
                    "Restore row {}: d({}, v) = d'({}, v) - h({}) + h(v)",
                    graph.label(s),
                    graph.label(s),
                    graph.label(s),
                    graph.label(s)
                ),
                Annotation::titled(state.phase.title()),
            );
        }

        state.phase = JohnsonPhase::Done;
        state.source = None;
        state.row.clear();
        state.settled.clear();
        recorder.finish_with(
            &state,
            "All-pairs shortest paths complete",
            Annotation::titled(state.phase.title()),
            Outcome::Success,
        )
    }
}
