//! Backtracking algorithm family
//!
//! Solvers are recursive walkers that own their working state and a
//! recorder. Every descent ("explore") and every undo ("backtrack") is a
//! step. Searches run under [`TraceConfig::search_limit`]; once the recorder
//! is full the walker unwinds with [`Search::Aborted`] and the trace ends
//! with [`Outcome::Truncated`].
//!
//! [`TraceConfig::search_limit`]: crate::engine::TraceConfig::search_limit
//! [`Outcome::Truncated`]: crate::snapshot::Outcome::Truncated

pub mod hamiltonian;
pub mod knights_tour;
pub mod n_queens;
pub mod rat_maze;
pub mod sudoku;

pub use hamiltonian::HamiltonianCycle;
pub use knights_tour::KnightsTour;
pub use n_queens::NQueens;
pub use rat_maze::RatInMaze;
pub use sudoku::Sudoku;

use crate::snapshot::Outcome;

/// Result of one branch of a backtracking search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Search {
    Found,
    Exhausted,
    /// The step limit was hit; unwind without undoing further
    Aborted,
}

impl Search {
    /// Terminal outcome for a search that ran to this result
    pub fn outcome(self, failure: &str) -> Outcome {
        match self {
            Search::Found => Outcome::Success,
            Search::Exhausted => Outcome::Failure(failure.to_string()),
            Search::Aborted => Outcome::Truncated,
        }
    }
}

/// Text of the terminal step for an aborted search
pub(crate) fn truncated_description(limit: usize) -> String {
    format!(
        "Step limit of {} reached: search stopped before finishing",
        limit
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_results_map_to_outcomes() {
        assert_eq!(Search::Found.outcome("x"), Outcome::Success);
        assert_eq!(
            Search::Exhausted.outcome("no solution"),
            Outcome::Failure("no solution".to_string())
        );
        assert_eq!(Search::Aborted.outcome("x"), Outcome::Truncated);
    }
}
