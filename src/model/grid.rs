// Per-cell search state for board and vertex backtracking

use crate::view::{Mark, Row};
use serde::Serialize;

/// Lifecycle of a cell (or vertex) during backtracking:
/// `Unvisited -> Exploring -> {Placed | Backtracked}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    #[default]
    Unvisited,
    Exploring,
    Placed,
    Backtracked,
}

impl CellState {
    pub fn mark(self) -> Mark {
        match self {
            CellState::Unvisited => Mark::Plain,
            CellState::Exploring => Mark::Active,
            CellState::Placed => Mark::Done,
            CellState::Backtracked => Mark::Alert,
        }
    }
}

pub fn blank_grid(rows: usize, cols: usize) -> Vec<Vec<CellState>> {
    vec![vec![CellState::Unvisited; cols]; rows]
}

/// Render a board, with `text(r, c)` producing each cell's content
pub fn board_rows(
    cells: &[Vec<CellState>],
    mut text: impl FnMut(usize, usize) -> String,
) -> Vec<Row> {
    cells
        .iter()
        .enumerate()
        .map(|(r, line)| {
            let mut row = Row::new();
            for (c, state) in line.iter().enumerate() {
                row.push(text(r, c), state.mark());
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_rows_follow_cell_marks() {
        let mut cells = blank_grid(2, 2);
        cells[0][1] = CellState::Placed;
        cells[1][0] = CellState::Backtracked;
        let rows = board_rows(&cells, |_, _| "x".to_string());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].to_string(), "x x*");
        assert_eq!(rows[1].to_string(), "!x! x");
    }
}
