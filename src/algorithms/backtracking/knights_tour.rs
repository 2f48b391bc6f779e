// Knight's tour with Warnsdorff move ordering and backtracking

use super::{truncated_description, Search};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::grid::{blank_grid, board_rows, CellState};
use crate::snapshot::{Trace, TraceRecorder};
use crate::view::{Mark, Row, Visualize};
use serde::Serialize;

pub const MAX_SIZE: usize = 8;

const JUMPS: [(isize, isize); 8] = [
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourState {
    pub size: usize,
    pub start: (usize, usize),
    pub cells: Vec<Vec<CellState>>,
    /// Move number at which each square was visited
    pub board: Vec<Vec<Option<usize>>>,
    pub current: Option<(usize, usize)>,
    pub moves: usize,
}

impl TourState {
    pub fn new(size: usize, start: (usize, usize)) -> Self {
        TourState {
            size,
            start,
            cells: blank_grid(size, size),
            board: vec![vec![None; size]; size],
            current: None,
            moves: 0,
        }
    }

    fn free_jumps(&self, (r, c): (usize, usize)) -> Vec<(usize, usize)> {
        JUMPS
            .iter()
            .filter_map(|&(dr, dc)| {
                let nr = r.checked_add_signed(dr)?;
                let nc = c.checked_add_signed(dc)?;
                (nr < self.size && nc < self.size && self.board[nr][nc].is_none())
                    .then_some((nr, nc))
            })
            .collect()
    }

    /// Free jumps ordered by how few onward moves each leaves
    fn ranked_jumps(&self, from: (usize, usize)) -> Vec<(usize, usize)> {
        let mut jumps = self.free_jumps(from);
        jumps.sort_by_key(|&square| self.free_jumps(square).len());
        jumps
    }
}

impl Visualize for TourState {
    fn view(&self) -> Vec<Row> {
        let mut rows = board_rows(&self.cells, |r, c| {
            if self.current == Some((r, c)) {
                "N".to_string()
            } else {
                match self.board[r][c] {
                    Some(k) => k.to_string(),
                    None => ".".to_string(),
                }
            }
        });
        rows.push(
            Row::labeled("Moves:")
                .cell(format!("{}/{}", self.moves, self.size * self.size), Mark::Plain),
        );
        rows
    }
}

struct Walker {
    state: TourState,
    recorder: TraceRecorder<TourState>,
}

impl Walker {
    fn visit(&mut self, square: (usize, usize), number: usize) {
        let (r, c) = square;
        self.state.board[r][c] = Some(number);
        if let Some((pr, pc)) = self.state.current {
            self.state.cells[pr][pc] = CellState::Placed;
        }
        self.state.cells[r][c] = CellState::Exploring;
        self.state.current = Some(square);
        self.state.moves = number + 1;
    }

    fn tour(&mut self, from: (usize, usize), number: usize) -> Search {
        let total = self.state.size * self.state.size;
        if number == total {
            return Search::Found;
        }
        let ranked = self.state.ranked_jumps(from);
        for (r, c) in ranked {
            if self.recorder.is_full() {
                return Search::Aborted;
            }
            self.visit((r, c), number);
            let onward = self.state.free_jumps((r, c)).len();
            self.recorder.record(
                &self.state,
                format!(
                    "Move {}: jump to ({}, {}), leaving {} onward move(s)",
                    number, r, c, onward
                ),
            );

            match self.tour((r, c), number + 1) {
                Search::Exhausted => {}
                done => return done,
            }

            self.state.board[r][c] = None;
            self.state.cells[r][c] = CellState::Backtracked;
            self.state.current = Some(from);
            self.state.cells[from.0][from.1] = CellState::Exploring;
            self.state.moves = number;
            self.recorder.record(
                &self.state,
                format!("({}, {}) leads to a dead end: back to ({}, {})", r, c, from.0, from.1),
            );
        }
        Search::Exhausted
    }
}

#[derive(Debug, Clone)]
pub struct KnightsTour {
    pub size: usize,
    pub start: (usize, usize),
}

impl Default for KnightsTour {
    fn default() -> Self {
        KnightsTour {
            size: 5,
            start: (0, 0),
        }
    }
}

impl Algorithm for KnightsTour {
    type State = TourState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "knights-tour",
            name: "Knight's Tour",
            family: Family::Backtracking,
            complexity: "O(8^(n^2))",
        }
    }

    fn initial_state(&self) -> TourState {
        TourState::new(self.size, self.start)
    }

    fn generate_trace(&self, initial: &TourState, config: &TraceConfig) -> Trace<TourState> {
        let size = initial.size;
        if size == 0 || size > MAX_SIZE {
            return Trace::invalid(
                initial.clone(),
                format!("board size must be between 1 and {}", MAX_SIZE),
            );
        }
        let start = initial.start;
        if start.0 >= size || start.1 >= size {
            return Trace::invalid(initial.clone(), "start square is off the board");
        }

        let limit = config.search_limit();
        let mut walker = Walker {
            state: TourState::new(size, start),
            recorder: TraceRecorder::new(
                initial,
                format!(
                    "Visit every square of the {}x{} board exactly once with a knight",
                    size, size
                ),
                limit,
            ),
        };
        walker.visit(start, 0);
        walker.recorder.record(
            &walker.state,
            format!("Start the knight at ({}, {})", start.0, start.1),
        );

        let result = walker.tour(start, 1);
        let Walker {
            mut state,
            recorder,
        } = walker;
        let description = match result {
            Search::Found => {
                if let Some((r, c)) = state.current {
                    state.cells[r][c] = CellState::Placed;
                }
                format!("Tour complete: all {} squares visited", size * size)
            }
            Search::Exhausted => {
                state.current = None;
                format!("No knight's tour exists from ({}, {})", start.0, start.1)
            }
            Search::Aborted => truncated_description(limit),
        };
        recorder.finish(&state, description, result.outcome("no tour exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Outcome;

    fn assert_valid_tour(state: &TourState) {
        let n = state.size;
        let mut squares = vec![(0, 0); n * n];
        for r in 0..n {
            for c in 0..n {
                let k = state.board[r][c].expect("square left unvisited");
                squares[k] = (r, c);
            }
        }
        assert_eq!(squares[0], state.start);
        for w in squares.windows(2) {
            let (dr, dc) = (w[0].0.abs_diff(w[1].0), w[0].1.abs_diff(w[1].1));
            assert!((dr, dc) == (1, 2) || (dr, dc) == (2, 1), "{:?}", w);
        }
    }

    #[test]
    fn five_by_five_tour() {
        let trace = KnightsTour::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_valid_tour(&trace.last().state);
    }

    #[test]
    fn warnsdorff_keeps_larger_boards_short() {
        let config = TraceConfig::default().with_search_max_steps(200);
        let trace = KnightsTour {
            size: 8,
            start: (0, 0),
        }
        .trace(&config);
        assert!(trace.outcome().is_success());
        assert_valid_tour(&trace.last().state);
    }

    #[test]
    fn small_board_has_no_tour() {
        let trace = KnightsTour {
            size: 3,
            start: (0, 0),
        }
        .trace(&TraceConfig::default());
        assert_eq!(trace.outcome(), &Outcome::Failure("no tour exists".to_string()));
    }

    #[test]
    fn off_board_start_is_invalid() {
        let trace = KnightsTour {
            size: 5,
            start: (5, 0),
        }
        .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }
}
