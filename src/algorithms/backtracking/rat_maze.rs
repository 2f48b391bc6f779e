// Rat in a maze: depth-first path search on a seeded random maze

use super::{truncated_description, Search};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::grid::{blank_grid, board_rows, CellState};
use crate::model::seeded_rng;
use crate::snapshot::{Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use rand::Rng;
use serde::Serialize;

pub const DEFAULT_SIZE: usize = 5;
/// Chance that a cell off the carved path is a wall
const WALL_DENSITY: f64 = 0.35;

/// Moves in the order they are tried: down, right, up, left
const MOVES: [(isize, isize, &str); 4] = [
    (1, 0, "down"),
    (0, 1, "right"),
    (-1, 0, "up"),
    (0, -1, "left"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MazeState {
    /// `true` for open cells
    pub maze: Vec<Vec<bool>>,
    pub cells: Vec<Vec<CellState>>,
    pub path: Vec<(usize, usize)>,
    pub current: Option<(usize, usize)>,
}

impl MazeState {
    pub fn new(maze: Vec<Vec<bool>>) -> Self {
        let rows = maze.len();
        let cols = maze.first().map_or(0, Vec::len);
        MazeState {
            cells: blank_grid(rows, cols),
            maze,
            path: Vec::new(),
            current: None,
        }
    }

    fn rows(&self) -> usize {
        self.maze.len()
    }

    fn cols(&self) -> usize {
        self.maze.first().map_or(0, Vec::len)
    }

    fn is_open(&self, r: usize, c: usize) -> bool {
        self.maze
            .get(r)
            .and_then(|row| row.get(c))
            .copied()
            .unwrap_or(false)
    }
}

impl Visualize for MazeState {
    fn view(&self) -> Vec<Row> {
        let mut rows = board_rows(&self.cells, |r, c| {
            if !self.is_open(r, c) {
                "#".to_string()
            } else if self.current == Some((r, c)) {
                "R".to_string()
            } else {
                ".".to_string()
            }
        });
        let path: Vec<String> = self
            .path
            .iter()
            .map(|(r, c)| format!("({},{})", r, c))
            .collect();
        rows.push(Row::labeled("Path:").cell(format::list(&path), Mark::Done));
        rows
    }
}

/// Random maze with a guaranteed open path from the top-left to the
/// bottom-right corner. The path is carved as a random monotone walk, so
/// every generated maze is solvable.
pub fn generate_maze(size: usize, seed: u64) -> Vec<Vec<bool>> {
    let size = size.max(2);
    let mut rng = seeded_rng(seed);
    let mut maze: Vec<Vec<bool>> = (0..size)
        .map(|_| (0..size).map(|_| !rng.gen_bool(WALL_DENSITY)).collect())
        .collect();
    let (mut r, mut c) = (0, 0);
    maze[0][0] = true;
    while (r, c) != (size - 1, size - 1) {
        let go_down = if r == size - 1 {
            false
        } else if c == size - 1 {
            true
        } else {
            rng.gen_bool(0.5)
        };
        if go_down {
            r += 1;
        } else {
            c += 1;
        }
        maze[r][c] = true;
    }
    maze
}

struct Walker {
    state: MazeState,
    recorder: TraceRecorder<MazeState>,
}

impl Walker {
    fn solve(&mut self, r: usize, c: usize) -> Search {
        if self.recorder.is_full() {
            return Search::Aborted;
        }
        self.state.current = Some((r, c));
        self.state.cells[r][c] = CellState::Exploring;
        self.state.path.push((r, c));
        self.recorder
            .record(&self.state, format!("Move the rat to ({}, {})", r, c));

        if (r, c) == (self.state.rows() - 1, self.state.cols() - 1) {
            self.state.cells[r][c] = CellState::Placed;
            return Search::Found;
        }

        for (dr, dc, name) in MOVES {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc))
            else {
                continue;
            };
            if !self.state.is_open(nr, nc) || self.state.cells[nr][nc] != CellState::Unvisited
            {
                continue;
            }
            self.state.current = Some((r, c));
            self.recorder.record(
                &self.state,
                format!("From ({}, {}) try moving {} to ({}, {})", r, c, name, nr, nc),
            );
            match self.solve(nr, nc) {
                Search::Exhausted => {}
                done => {
                    if done == Search::Found {
                        self.state.cells[r][c] = CellState::Placed;
                    }
                    return done;
                }
            }
        }

        self.state.path.pop();
        self.state.cells[r][c] = CellState::Backtracked;
        self.state.current = self.state.path.last().copied();
        self.recorder.record(
            &self.state,
            format!("({}, {}) is a dead end: backtrack", r, c),
        );
        Search::Exhausted
    }
}

#[derive(Debug, Clone)]
pub struct RatInMaze {
    pub maze: Vec<Vec<bool>>,
}

impl RatInMaze {
    pub fn seeded(seed: u64) -> Self {
        RatInMaze {
            maze: generate_maze(DEFAULT_SIZE, seed),
        }
    }

    /// Use a fixed maze, `1` marking open cells
    pub fn with_maze(rows: &[&[u8]]) -> Self {
        RatInMaze {
            maze: rows
                .iter()
                .map(|row| row.iter().map(|&v| v != 0).collect())
                .collect(),
        }
    }
}

impl Default for RatInMaze {
    fn default() -> Self {
        RatInMaze::seeded(DEFAULT_SEED)
    }
}

impl Algorithm for RatInMaze {
    type State = MazeState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "rat-in-maze",
            name: "Rat in a Maze",
            family: Family::Backtracking,
            complexity: "O(4^(n^2))",
        }
    }

    fn initial_state(&self) -> MazeState {
        MazeState::new(self.maze.clone())
    }

    fn generate_trace(&self, initial: &MazeState, config: &TraceConfig) -> Trace<MazeState> {
        let cols = initial.cols();
        if cols == 0 || initial.maze.iter().any(|row| row.len() != cols) {
            return Trace::invalid(initial.clone(), "maze must be a non-empty rectangle");
        }
        let limit = config.search_limit();
        let mut walker = Walker {
            state: MazeState::new(initial.maze.clone()),
            recorder: TraceRecorder::new(
                initial,
                "Find a path from the top-left to the bottom-right corner",
                limit,
            ),
        };

        let (rows, cols) = (initial.rows(), cols);
        let result = if initial.is_open(0, 0) && initial.is_open(rows - 1, cols - 1) {
            walker.solve(0, 0)
        } else {
            Search::Exhausted
        };
        let Walker {
            mut state,
            recorder,
        } = walker;
        let description = match result {
            Search::Found => {
                state.current = Some((rows - 1, cols - 1));
                format!("Reached the exit in {} moves", state.path.len() - 1)
            }
            Search::Exhausted => {
                state.current = None;
                "No solution exists: every route is blocked".to_string()
            }
            Search::Aborted => truncated_description(limit),
        };
        recorder.finish(&state, description, result.outcome("No solution exists"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Outcome;

    fn assert_valid_path(state: &MazeState) {
        let path = &state.path;
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(state.rows() - 1, state.cols() - 1)));
        for w in path.windows(2) {
            let (a, b) = (w[0], w[1]);
            assert_eq!(a.0.abs_diff(b.0) + a.1.abs_diff(b.1), 1);
            assert!(state.is_open(b.0, b.1));
        }
    }

    #[test]
    fn generated_mazes_are_solvable() {
        let config = TraceConfig::default().with_search_max_steps(10_000);
        for seed in 0..20 {
            let trace = RatInMaze::seeded(seed).trace(&config);
            assert!(trace.outcome().is_success(), "seed {}", seed);
            assert_valid_path(&trace.last().state);
        }
    }

    #[test]
    fn same_seed_same_maze() {
        assert_eq!(generate_maze(6, 3), generate_maze(6, 3));
    }

    #[test]
    fn fully_blocked_maze_has_no_solution() {
        let rat = RatInMaze::with_maze(&[
            &[1, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
            &[0, 0, 0, 1],
        ]);
        let trace = rat.trace(&TraceConfig::default());
        assert_eq!(
            trace.outcome(),
            &Outcome::Failure("No solution exists".to_string())
        );
        assert!(trace.last().description.contains("No solution exists"));
        assert!(trace.len() < 10);
    }

    #[test]
    fn fixed_maze_follows_corridor() {
        let rat = RatInMaze::with_maze(&[
            &[1, 0, 0, 0],
            &[1, 1, 0, 1],
            &[0, 1, 0, 0],
            &[1, 1, 1, 1],
        ]);
        let trace = rat.trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(
            trace.last().state.path,
            vec![(0, 0), (1, 0), (1, 1), (2, 1), (3, 1), (3, 2), (3, 3)]
        );
    }

    #[test]
    fn ragged_maze_is_invalid() {
        let rat = RatInMaze::with_maze(&[&[1, 1], &[1]]);
        assert!(matches!(
            rat.trace(&TraceConfig::default()).outcome(),
            Outcome::Invalid(_)
        ));
    }

    #[test]
    fn ragged_maze_still_renders() {
        let state = MazeState::new(vec![vec![true, true], vec![true]]);
        let rows = state.view();
        assert_eq!(rows[0].to_string(), ". .");
        assert_eq!(rows[1].to_string(), ". #");
    }
}
