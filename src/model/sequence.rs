// Array inputs for the sorting and searching families

use super::seeded_rng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Where a sorting/searching module gets its values from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArrayInput {
    Fixed(Vec<i64>),
    Random { len: usize, max: i64, seed: u64 },
}

impl ArrayInput {
    /// Resolve into concrete values. Random inputs are reproducible per seed.
    pub fn values(&self) -> Vec<i64> {
        match self {
            ArrayInput::Fixed(values) => values.clone(),
            ArrayInput::Random { len, max, seed } => {
                let mut rng = seeded_rng(*seed);
                let upper = (*max).max(1);
                (0..*len).map(|_| rng.gen_range(1..=upper)).collect()
            }
        }
    }

    /// Resolve and sort ascending, for searches that need ordered input
    pub fn sorted_values(&self) -> Vec<i64> {
        let mut values = self.values();
        values.sort_unstable();
        values
    }
}

pub fn is_sorted(values: &[i64]) -> bool {
    values.windows(2).all(|w| w[0] <= w[1])
}
