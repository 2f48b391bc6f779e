// Backtracking family: solutions are checked independently of the solver

use algotrace::algorithms::backtracking::{
    HamiltonianCycle, KnightsTour, NQueens, RatInMaze, Sudoku,
};
use algotrace::engine::{Algorithm, DynAlgorithm, TraceConfig};
use algotrace::model::graph::{Edge, Graph};
use algotrace::snapshot::Outcome;

fn roomy() -> TraceConfig {
    TraceConfig::default()
        .with_max_steps(20_000)
        .with_search_max_steps(20_000)
}

#[test]
fn queens_never_attack_each_other() {
    for n in 4..=6 {
        let trace = NQueens { n }.trace(&roomy());
        assert!(trace.outcome().is_success(), "n = {}", n);
        let queens: Vec<usize> = trace
            .last()
            .state
            .queens
            .iter()
            .map(|q| q.unwrap())
            .collect();
        for a in 0..n {
            for b in a + 1..n {
                assert_ne!(queens[a], queens[b]);
                assert_ne!(queens[a].abs_diff(queens[b]), b - a);
            }
        }
    }
}

#[test]
fn knights_tour_moves_are_legal() {
    let trace = KnightsTour { size: 6, start: (0, 0) }.trace(&roomy());
    assert!(trace.outcome().is_success());
    let board = &trace.last().state.board;
    let mut squares = vec![(0, 0); 36];
    for (r, row) in board.iter().enumerate() {
        for (c, step) in row.iter().enumerate() {
            squares[step.unwrap()] = (r, c);
        }
    }
    assert_eq!(squares[0], (0, 0));
    for pair in squares.windows(2) {
        let dr = pair[0].0.abs_diff(pair[1].0);
        let dc = pair[0].1.abs_diff(pair[1].1);
        assert!((dr, dc) == (1, 2) || (dr, dc) == (2, 1), "{:?}", pair);
    }
}

#[test]
fn sudoku_solution_keeps_givens_and_rules() {
    let sudoku = Sudoku::default();
    let trace = sudoku.trace(&roomy());
    assert!(trace.outcome().is_success());
    let grid = &trace.last().state.grid;
    let size = grid.len();
    let box_size = (size as f64).sqrt() as usize;
    let full: Vec<u8> = (1..=size as u8).collect();
    let sorted = |mut v: Vec<u8>| {
        v.sort_unstable();
        v
    };
    for i in 0..size {
        assert_eq!(sorted(grid[i].clone()), full);
        assert_eq!(sorted((0..size).map(|r| grid[r][i]).collect()), full);
        let (br, bc) = (i / box_size * box_size, i % box_size * box_size);
        let block = (0..size)
            .map(|k| grid[br + k / box_size][bc + k % box_size])
            .collect();
        assert_eq!(sorted(block), full);
    }
    for (r, row) in sudoku.grid.iter().enumerate() {
        for (c, &given) in row.iter().enumerate() {
            if given != 0 {
                assert_eq!(grid[r][c], given);
            }
        }
    }
}

#[test]
fn hamiltonian_cycle_uses_real_edges() {
    let trace = HamiltonianCycle::default().trace(&TraceConfig::default());
    let state = &trace.last().state;
    assert!(state.closed);
    assert_eq!(state.path.len(), state.graph.len());
    let adjacent = |a: usize, b: usize| {
        state
            .graph
            .edges
            .iter()
            .any(|e| (e.source, e.target) == (a, b) || (e.source, e.target) == (b, a))
    };
    for pair in state.path.windows(2) {
        assert!(adjacent(pair[0], pair[1]));
    }
    assert!(adjacent(state.path[state.path.len() - 1], state.path[0]));
}

#[test]
fn random_mazes_are_solved_with_contiguous_paths() {
    for seed in 0..10 {
        let trace = RatInMaze::seeded(seed).trace(&roomy());
        assert!(trace.outcome().is_success(), "seed {}", seed);
        let state = &trace.last().state;
        let last = state.maze.len() - 1;
        assert_eq!(state.path.first(), Some(&(0, 0)));
        assert_eq!(state.path.last(), Some(&(last, last)));
        for pair in state.path.windows(2) {
            let steps = pair[0].0.abs_diff(pair[1].0) + pair[0].1.abs_diff(pair[1].1);
            assert_eq!(steps, 1);
            assert!(state.maze[pair[1].0][pair[1].1]);
        }
    }
}

#[test]
fn off_board_start_is_invalid() {
    let trace = KnightsTour { size: 5, start: (7, 0) }.trace(&TraceConfig::default());
    assert_eq!(trace.len(), 1);
    assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
}

#[test]
fn invalid_boards_render_their_error_step() {
    let cases: Vec<Box<dyn DynAlgorithm>> = vec![
        Box::new(RatInMaze {
            maze: vec![vec![true, true], vec![true]],
        }),
        Box::new(Sudoku {
            grid: vec![vec![0; 4], vec![0; 2], vec![0; 4], vec![0; 4]],
        }),
        Box::new(Sudoku {
            grid: vec![vec![1, 0, 0, 0], vec![0; 4], vec![0; 4], vec![0; 2]],
        }),
        Box::new(KnightsTour {
            size: 5,
            start: (7, 0),
        }),
        Box::new(NQueens { n: 0 }),
        Box::new(HamiltonianCycle {
            graph: Graph::from_labels(&["A", "B"], vec![Edge::between(0, 5)]),
            start: 0,
        }),
    ];
    for algorithm in cases {
        let id = algorithm.metadata().id;
        let rendered = algorithm
            .render(&TraceConfig::default())
            .unwrap_or_else(|e| panic!("{}: {}", id, e));
        assert_eq!(rendered.len(), 1, "{}", id);
        assert!(
            matches!(rendered.outcome(), Some(Outcome::Invalid(_))),
            "{}",
            id
        );
    }
}
