// Sudoku by cell-by-cell backtracking

use super::{truncated_description, Search};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::grid::{blank_grid, board_rows, CellState};
use crate::snapshot::{Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;

pub const MAX_SIZE: usize = 9;

const SAMPLE: [[u8; 4]; 4] = [[1, 0, 0, 4], [0, 4, 1, 0], [2, 0, 0, 3], [0, 3, 2, 0]];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SudokuState {
    pub size: usize,
    /// `0` marks an empty square
    pub grid: Vec<Vec<u8>>,
    pub givens: Vec<Vec<bool>>,
    pub cells: Vec<Vec<CellState>>,
    pub current: Option<(usize, usize)>,
    pub trying: Option<u8>,
    /// Square already holding the digit being tried
    pub conflict: Option<(usize, usize)>,
}

impl SudokuState {
    pub fn new(grid: Vec<Vec<u8>>) -> Self {
        let size = grid.len();
        let givens = grid
            .iter()
            .map(|row| row.iter().map(|&v| v != 0).collect())
            .collect();
        SudokuState {
            size,
            cells: blank_grid(size, size),
            givens,
            grid,
            current: None,
            trying: None,
            conflict: None,
        }
    }

    /// Digit at `(row, col)`, `None` outside a ragged or undersized grid
    pub fn value(&self, row: usize, col: usize) -> Option<u8> {
        self.grid.get(row).and_then(|r| r.get(col)).copied()
    }

    fn is_given(&self, row: usize, col: usize) -> bool {
        self.givens
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Side of one box, if the grid size is a perfect square
    pub fn box_size(&self) -> Option<usize> {
        (1..=self.size)
            .find(|b| b * b >= self.size)
            .filter(|b| b * b == self.size)
    }

    /// A square other than `(row, col)` sharing a row, column or box with
    /// `(row, col)` and already holding `digit`
    fn clash(&self, row: usize, col: usize, digit: u8) -> Option<(usize, usize)> {
        let b = self.box_size()?;
        let (br, bc) = (row / b * b, col / b * b);
        let row_peers = (0..self.size).map(|c| (row, c));
        let col_peers = (0..self.size).map(|r| (r, col));
        let box_peers = (br..br + b).flat_map(|r| (bc..bc + b).map(move |c| (r, c)));
        row_peers
            .chain(col_peers)
            .chain(box_peers)
            .find(|&(r, c)| (r, c) != (row, col) && self.grid[r][c] == digit)
    }

    fn next_empty(&self) -> Option<(usize, usize)> {
        (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .find(|&(r, c)| self.grid[r][c] == 0)
    }

    fn validate(&self) -> Result<(), String> {
        if self.size == 0 || self.size > MAX_SIZE || self.box_size().is_none() {
            return Err(format!(
                "grid size must be a perfect square between 1 and {}",
                MAX_SIZE
            ));
        }
        if let Some((r, row)) = self
            .grid
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.size)
        {
            return Err(format!(
                "row {} has {} squares, expected {}",
                r,
                row.len(),
                self.size
            ));
        }
        for (r, row) in self.grid.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                if usize::from(v) > self.size {
                    return Err(format!("({}, {}) holds {}, above {}", r, c, v, self.size));
                }
                if v != 0 {
                    if let Some((cr, cc)) = self.clash(r, c, v) {
                        return Err(format!(
                            "givens at ({}, {}) and ({}, {}) both hold {}",
                            r, c, cr, cc, v
                        ));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Visualize for SudokuState {
    fn view(&self) -> Vec<Row> {
        let mut rows = board_rows(&self.cells, |r, c| match self.value(r, c) {
            Some(0) if self.current == Some((r, c)) => {
                self.trying.map_or("?".to_string(), |d| d.to_string())
            }
            Some(0) => ".".to_string(),
            Some(v) => v.to_string(),
            None => " ".to_string(),
        });
        for (r, row) in rows.iter_mut().enumerate() {
            for (c, cell) in row.cells.iter_mut().enumerate() {
                if self.is_given(r, c) {
                    cell.mark = Mark::Label;
                } else if self.conflict == Some((r, c)) {
                    cell.mark = Mark::Alert;
                }
            }
        }
        if let (Some((r, c)), Some(d)) = (self.current, self.trying) {
            rows.push(
                Row::labeled("Trying:").cell(format!("{} at ({}, {})", d, r, c), Mark::Active),
            );
        }
        rows
    }
}

struct Walker {
    state: SudokuState,
    recorder: TraceRecorder<SudokuState>,
}

impl Walker {
    fn solve(&mut self) -> Search {
        let Some((r, c)) = self.state.next_empty() else {
            return Search::Found;
        };
        let size = self.state.size as u8;
        for digit in 1..=size {
            if self.recorder.is_full() {
                return Search::Aborted;
            }
            self.state.current = Some((r, c));
            self.state.trying = Some(digit);
            if let Some((cr, cc)) = self.state.clash(r, c, digit) {
                self.state.conflict = Some((cr, cc));
                self.state.cells[r][c] = CellState::Exploring;
                self.recorder.record(
                    &self.state,
                    format!(
                        "{} cannot go at ({}, {}): ({}, {}) already holds it",
                        digit, r, c, cr, cc
                    ),
                );
                continue;
            }

            self.state.conflict = None;
            self.state.grid[r][c] = digit;
            self.state.cells[r][c] = CellState::Placed;
            self.recorder
                .record(&self.state, format!("Place {} at ({}, {})", digit, r, c));

            match self.solve() {
                Search::Exhausted => {}
                done => return done,
            }

            self.state.grid[r][c] = 0;
            self.state.current = Some((r, c));
            self.state.trying = Some(digit);
            self.state.conflict = None;
            self.state.cells[r][c] = CellState::Backtracked;
            self.recorder.record(
                &self.state,
                format!("{} at ({}, {}) leads to a dead end: erase it", digit, r, c),
            );
        }
        self.state.cells[r][c] = CellState::Backtracked;
        Search::Exhausted
    }
}

#[derive(Debug, Clone)]
pub struct Sudoku {
    pub grid: Vec<Vec<u8>>,
}

impl Default for Sudoku {
    fn default() -> Self {
        Sudoku {
            grid: SAMPLE.iter().map(|row| row.to_vec()).collect(),
        }
    }
}

impl Algorithm for Sudoku {
    type State = SudokuState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "sudoku",
            name: "Sudoku Solver",
            family: Family::Backtracking,
            complexity: "O(n^(n^2))",
        }
    }

    fn initial_state(&self) -> SudokuState {
        SudokuState::new(self.grid.clone())
    }

    fn generate_trace(
        &self,
        initial: &SudokuState,
        config: &TraceConfig,
    ) -> Trace<SudokuState> {
        if let Err(reason) = initial.validate() {
            return Trace::invalid(initial.clone(), reason);
        }
        let limit = config.search_limit();
        let empty = initial.grid.iter().flatten().filter(|&&v| v == 0).count();
        let mut walker = Walker {
            state: initial.clone(),
            recorder: TraceRecorder::new(
                initial,
                format!(
                    "Fill the {} empty square(s) of the {}x{} grid",
                    empty, initial.size, initial.size
                ),
                limit,
            ),
        };

        let result = walker.solve();
        let Walker {
            mut state,
            recorder,
        } = walker;
        state.trying = None;
        state.conflict = None;
        state.current = None;
        let description = match result {
            Search::Found => "Every square is filled: puzzle solved".to_string(),
            Search::Exhausted => {
                "No digit fits the first empty square: puzzle has no solution".to_string()
            }
            Search::Aborted => truncated_description(limit),
        };
        recorder.finish(&state, description, result.outcome("puzzle has no solution"))
    }
}
