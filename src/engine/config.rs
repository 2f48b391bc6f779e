// Trace generation configuration

use super::constants::{DEFAULT_MAX_STEPS, DEFAULT_SEARCH_MAX_STEPS, DEFAULT_SEED};
use super::errors::TraceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Limits and seeds shared by every generator.
///
/// Missing fields in a JSON config fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceConfig {
    /// Maximum number of steps in any trace, terminal step included
    pub max_steps: usize,

    /// Maximum number of steps for exhaustive backtracking searches
    pub search_max_steps: usize,

    /// Seed for randomly generated instances (arrays, mazes)
    pub seed: u64,
}

impl Default for TraceConfig {
    fn default() -> Self {
        TraceConfig {
            max_steps: DEFAULT_MAX_STEPS,
            search_max_steps: DEFAULT_SEARCH_MAX_STEPS,
            seed: DEFAULT_SEED,
        }
    }
}

impl TraceConfig {
    pub fn from_json_str(json: &str) -> Result<Self, TraceError> {
        serde_json::from_str(json).map_err(|source| TraceError::ConfigParse { source })
    }

    pub fn from_json_file(path: &Path) -> Result<Self, TraceError> {
        let text = fs::read_to_string(path).map_err(|source| TraceError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    pub fn with_search_max_steps(mut self, search_max_steps: usize) -> Self {
        self.search_max_steps = search_max_steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Step budget for backtracking searches, never above `max_steps`
    pub fn search_limit(&self) -> usize {
        self.search_max_steps.min(self.max_steps)
    }
}
