//! Dynamic programming family
//!
//! Every problem fills a [`TableState`] in three phases: base cases are
//! seeded as explicit initialization steps, then each cell write is its own
//! step naming the recurrence inputs, and finally (where the problem has
//! one) a reconstruction pass walks the finished table.

pub mod coin_change;
pub mod edit_distance;
pub mod fibonacci;
pub mod knapsack;
pub mod lcs;
pub mod lis;
pub mod matrix_chain;
pub mod scs;

pub use coin_change::CoinChange;
pub use edit_distance::EditDistance;
pub use fibonacci::Fibonacci;
pub use knapsack::Knapsack;
pub use lcs::LongestCommonSubsequence;
pub use lis::LongestIncreasingSubsequence;
pub use matrix_chain::MatrixChain;
pub use scs::ShortestCommonSupersequence;

use crate::engine::TraceConfig;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DpPhase {
    #[default]
    Setup,
    Initialize,
    Fill,
    Reconstruct,
    Done,
}

impl DpPhase {
    pub fn title(self) -> &'static str {
        match self {
            DpPhase::Setup => "Setup",
            DpPhase::Initialize => "Initialization",
            DpPhase::Fill => "Fill",
            DpPhase::Reconstruct => "Reconstruction",
            DpPhase::Done => "Done",
        }
    }
}

pub type Cell = (usize, usize);

/// A named numeric input shown above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedInput {
    pub name: String,
    pub values: Vec<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableState {
    pub phase: DpPhase,
    /// Problem inputs (dimensions, weights, coins, ...)
    pub inputs: Vec<NamedInput>,
    pub row_labels: Vec<String>,
    pub col_labels: Vec<String>,
    /// `None` marks a cell not yet written (or unreachable)
    pub table: Vec<Vec<Option<i64>>>,
    pub current: Option<Cell>,
    /// Cells read by the recurrence for `current`
    pub dependencies: Vec<Cell>,
    /// Auxiliary table (split points, predecessors, last coin)
    pub secondary: Vec<Vec<Option<i64>>>,
    pub secondary_name: String,
    /// Cells visited during reconstruction
    pub path: Vec<Cell>,
    pub result: Option<i64>,
    /// Reconstructed answer, one entry per element
    pub solution: Vec<String>,
}

impl TableState {
    pub fn new(row_labels: Vec<String>, col_labels: Vec<String>) -> Self {
        let table = vec![vec![None; col_labels.len()]; row_labels.len()];
        TableState {
            row_labels,
            col_labels,
            table,
            ..TableState::default()
        }
    }

    pub fn with_input(mut self, name: impl Into<String>, values: Vec<i64>) -> Self {
        self.inputs.push(NamedInput {
            name: name.into(),
            values,
        });
        self
    }

    pub fn input(&self, name: &str) -> Option<&[i64]> {
        self.inputs
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.values.as_slice())
    }

    pub fn value(&self, (r, c): Cell) -> Option<i64> {
        self.table[r][c]
    }

    fn mark(&self, cell: Cell) -> Mark {
        if self.current == Some(cell) {
            Mark::Active
        } else if self.dependencies.contains(&cell) {
            Mark::Compare
        } else if self.path.contains(&cell) {
            Mark::Done
        } else if self.table[cell.0][cell.1].is_none() {
            Mark::Muted
        } else {
            Mark::Plain
        }
    }
}

fn grid_rows(
    col_labels: &[String],
    row_labels: &[String],
    cells: &[Vec<Option<i64>>],
    mut mark: impl FnMut(Cell) -> Mark,
) -> Vec<Row> {
    let mut rows = Vec::with_capacity(cells.len() + 1);
    let mut header = Row::labeled("");
    for label in col_labels {
        header.push(label.clone(), Mark::Label);
    }
    rows.push(header);
    for (r, line) in cells.iter().enumerate() {
        let mut row = Row::labeled(format::label_of(row_labels, r));
        for (c, value) in line.iter().enumerate() {
            row.push(format::optional(*value), mark((r, c)));
        }
        rows.push(row);
    }
    rows
}

impl Visualize for TableState {
    fn view(&self) -> Vec<Row> {
        let mut rows = vec![Row::labeled("Phase:").cell(self.phase.title(), Mark::Active)];
        for input in &self.inputs {
            rows.push(format::marked_row(&format!("{}:", input.name), &input.values, |_| {
                Mark::Plain
            }));
        }
        rows.extend(grid_rows(
            &self.col_labels,
            &self.row_labels,
            &self.table,
            |cell| self.mark(cell),
        ));
        if !self.secondary.is_empty() {
            rows.push(Row::text(self.secondary_name.clone()));
            rows.extend(grid_rows(
                &self.col_labels,
                &self.row_labels,
                &self.secondary,
                |_| Mark::Plain,
            ));
        }
        if let Some(result) = self.result {
            rows.push(Row::labeled("Result:").cell(result.to_string(), Mark::Done));
        }
        if !self.solution.is_empty() {
            rows.push(format::marked_row("Solution:", &self.solution, |_| Mark::Done));
        }
        rows
    }
}

/// Working table plus recorder for one DP run
pub(crate) struct Filler {
    pub state: TableState,
    recorder: TraceRecorder<TableState>,
}

impl Filler {
    pub fn start(
        initial: &TableState,
        description: impl Into<String>,
        config: &TraceConfig,
    ) -> Self {
        Filler {
            state: initial.clone(),
            recorder: TraceRecorder::new(initial, description, config.max_steps),
        }
    }

    pub fn get(&self, cell: Cell) -> Option<i64> {
        self.state.value(cell)
    }

    /// Write without recording; used while seeding a whole base row
    pub fn set(&mut self, (r, c): Cell, value: Option<i64>) {
        self.state.table[r][c] = value;
    }

    pub fn record(&mut self, description: impl Into<String>) {
        let annotation = Annotation::titled(self.state.phase.title());
        self.recorder.record_with(&self.state, description, annotation);
    }

    /// Record the seeded base cases as one initialization step
    pub fn initialized(&mut self, description: impl Into<String>) {
        self.state.phase = DpPhase::Initialize;
        self.state.current = None;
        self.state.dependencies.clear();
        self.record(description);
    }

    /// One recurrence evaluation written into `cell`
    pub fn write(
        &mut self,
        cell: Cell,
        value: Option<i64>,
        dependencies: Vec<Cell>,
        description: impl Into<String>,
    ) {
        self.state.phase = DpPhase::Fill;
        self.state.current = Some(cell);
        self.state.dependencies = dependencies;
        self.set(cell, value);
        self.record(description);
    }

    /// Examine a candidate for `cell` without writing it
    pub fn consider(
        &mut self,
        cell: Cell,
        dependencies: Vec<Cell>,
        description: impl Into<String>,
    ) {
        self.state.phase = DpPhase::Fill;
        self.state.current = Some(cell);
        self.state.dependencies = dependencies;
        self.record(description);
    }

    /// One move of the reconstruction walk
    pub fn visit(&mut self, cell: Cell, description: impl Into<String>) {
        self.state.phase = DpPhase::Reconstruct;
        self.state.current = Some(cell);
        self.state.dependencies.clear();
        if !self.state.path.contains(&cell) {
            self.state.path.push(cell);
        }
        self.record(description);
    }

    pub fn finish(mut self, description: impl Into<String>, outcome: Outcome) -> Trace<TableState> {
        self.state.phase = DpPhase::Done;
        self.state.current = None;
        self.state.dependencies.clear();
        let annotation = Annotation::titled(self.state.phase.title());
        self.recorder
            .finish_with(&self.state, description, annotation, outcome)
    }
}

/// One label per character, prefixed by the empty-prefix column
pub(crate) fn prefix_labels(text: &str) -> Vec<String> {
    std::iter::once("ε".to_string())
        .chain(text.chars().map(|c| c.to_string()))
        .collect()
}

pub(crate) fn index_labels(len: usize) -> Vec<String> {
    (0..len).map(|i| i.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_blank() {
        let state = TableState::new(prefix_labels("AB"), prefix_labels("C"));
        assert_eq!(state.table.len(), 3);
        assert_eq!(state.table[0].len(), 2);
        assert!(state.table.iter().flatten().all(Option::is_none));
        assert_eq!(state.row_labels[0], "ε");
    }

    #[test]
    fn named_inputs_are_looked_up() {
        let state =
            TableState::new(index_labels(1), index_labels(1)).with_input("coins", vec![1, 2]);
        assert_eq!(state.input("coins"), Some(&[1, 2][..]));
        assert_eq!(state.input("amount"), None);
    }

    #[test]
    fn filler_phases_are_annotated() {
        let initial = TableState::new(index_labels(1), index_labels(2));
        let mut filler = Filler::start(&initial, "start", &TraceConfig::default());
        filler.set((0, 0), Some(0));
        filler.initialized("seed");
        filler.write((0, 1), Some(1), vec![(0, 0)], "fill");
        filler.visit((0, 1), "walk back");
        let trace = filler.finish("done", Outcome::Success);
        let titles: Vec<_> = trace
            .iter()
            .skip(1)
            .map(|s| s.annotation.title.clone().unwrap_or_default())
            .collect();
        assert_eq!(titles, vec!["Initialization", "Fill", "Reconstruction", "Done"]);
        assert_eq!(trace[0].state.table[0][0], None);
        assert_eq!(trace[2].state.dependencies, vec![(0, 0)]);
    }
}
