//! Data shapes shared across algorithm modules
//!
//! - [`graph`]: `{nodes, edges}` graph with adjacency construction and
//!   path-consistency helpers, used by the graph family and Hamiltonian cycle
//! - [`samples`]: the built-in sample graphs
//! - [`sequence`]: array inputs, fixed or seeded-random
//! - [`grid`]: per-cell search states for board-based backtracking

pub mod graph;
pub mod grid;
pub mod samples;
pub mod sequence;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG for instance generation
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
