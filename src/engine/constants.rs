// Default limits and seeds for trace generation

/// Upper bound on steps for any single trace
pub const DEFAULT_MAX_STEPS: usize = 2000;

/// Upper bound on steps for exhaustive backtracking searches
pub const DEFAULT_SEARCH_MAX_STEPS: usize = 100;

/// Seed used for randomly generated instances when none is given
pub const DEFAULT_SEED: u64 = 42;
