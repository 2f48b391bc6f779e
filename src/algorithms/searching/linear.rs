// Linear search

use super::{relation, sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::Trace;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct LinearSearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl LinearSearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        LinearSearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        LinearSearch::new(input, target)
    }
}

impl Default for LinearSearch {
    fn default() -> Self {
        LinearSearch::seeded(DEFAULT_SEED)
    }
}

impl Algorithm for LinearSearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "linear-search",
            name: "Linear Search",
            family: Family::Searching,
            complexity: "O(n)",
        }
    }

    fn initial_state(&self) -> SearchState {
        SearchState::new(self.input.values(), self.target)
    }

    fn generate_trace(&self, initial: &SearchState, config: &TraceConfig) -> Trace<SearchState> {
        let mut s = match Searcher::start(
            initial,
            format!("Scan every element for {}", initial.target),
            config,
            false,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        for i in 0..s.len() {
            let ordering = s.check(i);
            if ordering == Ordering::Equal {
                return s.found(i);
            }
            s.record(format!(
                "array[{}] = {} {} {}: move on",
                i,
                s.value(i),
                relation(ordering),
                s.target()
            ));
        }
        s.not_found("Reached the end of the array")
    }
}
