// N-Queens by row-wise backtracking

use super::{truncated_description, Search};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::grid::{blank_grid, board_rows, CellState};
use crate::snapshot::{Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;

/// Largest board accepted
pub const MAX_N: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueensState {
    pub n: usize,
    pub cells: Vec<Vec<CellState>>,
    /// Column of the queen in each row, if placed
    pub queens: Vec<Option<usize>>,
    pub current: Option<(usize, usize)>,
    /// Queen attacking `current`, if any
    pub conflict: Option<(usize, usize)>,
}

impl QueensState {
    pub fn new(n: usize) -> Self {
        QueensState {
            n,
            cells: blank_grid(n, n),
            queens: vec![None; n],
            current: None,
            conflict: None,
        }
    }

    /// First placed queen attacking `(row, col)`
    fn attacker(&self, row: usize, col: usize) -> Option<(usize, usize)> {
        (0..row).find_map(|r| {
            let c = self.queens[r]?;
            let same_diagonal = row - r == col.abs_diff(c);
            (c == col || same_diagonal).then_some((r, c))
        })
    }
}

impl Visualize for QueensState {
    fn view(&self) -> Vec<Row> {
        let mut rows = board_rows(&self.cells, |r, c| {
            if self.queens[r] == Some(c) {
                "Q".to_string()
            } else {
                ".".to_string()
            }
        });
        if let Some((r, c)) = self.conflict {
            rows.push(Row::labeled("Attacked by:").cell(format!("({}, {})", r, c), Mark::Alert));
        }
        rows
    }
}

struct Walker {
    state: QueensState,
    recorder: TraceRecorder<QueensState>,
}

impl Walker {
    fn place(&mut self, row: usize) -> Search {
        let n = self.state.n;
        if row == n {
            return Search::Found;
        }
        for c in 0..n {
            self.state.cells[row][c] = CellState::Unvisited;
        }
        for col in 0..n {
            if self.recorder.is_full() {
                return Search::Aborted;
            }
            self.state.current = Some((row, col));
            self.state.conflict = None;
            self.state.cells[row][col] = CellState::Exploring;
            self.recorder
                .record(&self.state, format!("Try a queen at row {}, column {}", row, col));

            if let Some(attacker) = self.state.attacker(row, col) {
                self.state.conflict = Some(attacker);
                self.state.cells[row][col] = CellState::Backtracked;
                self.recorder.record(
                    &self.state,
                    format!(
                        "({}, {}) is attacked by the queen at ({}, {})",
                        row, col, attacker.0, attacker.1
                    ),
                );
                continue;
            }

            self.state.queens[row] = Some(col);
            self.state.cells[row][col] = CellState::Placed;
            self.recorder
                .record(&self.state, format!("Place a queen at ({}, {})", row, col));

            match self.place(row + 1) {
                Search::Exhausted => {}
                done => return done,
            }

            self.state.queens[row] = None;
            self.state.current = Some((row, col));
            self.state.conflict = None;
            self.state.cells[row][col] = CellState::Backtracked;
            self.recorder.record(
                &self.state,
                format!(
                    "No safe square in row {}: remove the queen from ({}, {})",
                    row + 1,
                    row,
                    col
                ),
            );
        }
        Search::Exhausted
    }
}

#[derive(Debug, Clone)]
pub struct NQueens {
    pub n: usize,
}

impl Default for NQueens {
    fn default() -> Self {
        NQueens { n: 4 }
    }
}

impl Algorithm for NQueens {
    type State = QueensState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "n-queens",
            name: "N-Queens",
            family: Family::Backtracking,
            complexity: "O(n!)",
        }
    }

    fn initial_state(&self) -> QueensState {
        QueensState::new(self.n)
    }

    fn generate_trace(&self, initial: &QueensState, config: &TraceConfig) -> Trace<QueensState> {
        let n = initial.n;
        if n == 0 || n > MAX_N || initial.cells.len() != n || initial.queens.len() != n {
            return Trace::invalid(
                initial.clone(),
                format!("board size must be between 1 and {}", MAX_N),
            );
        }
        let limit = config.search_limit();
        let mut walker = Walker {
            state: QueensState::new(n),
            recorder: TraceRecorder::new(
                initial,
                format!("Place {} queens so that none attack each other", n),
                limit,
            ),
        };

        let result = walker.place(0);
        let Walker {
            mut state,
            recorder,
        } = walker;
        state.current = None;
        state.conflict = None;
        let description = match result {
            Search::Found => format!("All {} queens placed safely", n),
            Search::Exhausted => format!("No solution exists for {} queens", n),
            Search::Aborted => truncated_description(limit),
        };
        recorder.finish(&state, description, result.outcome("no solution exists"))
    }
}
