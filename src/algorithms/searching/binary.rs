// Binary search on a sorted array

use super::{sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::Trace;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct BinarySearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl BinarySearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        BinarySearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        BinarySearch::new(input, target)
    }
}

impl Default for BinarySearch {
    fn default() -> Self {
        BinarySearch::seeded(DEFAULT_SEED)
    }
}

/// Binary search over the inclusive window `lo..=hi`, recording each halving.
/// Shared with exponential search. Returns the matching index, if any.
pub(crate) fn search_window(s: &mut Searcher, mut lo: usize, mut hi: usize) -> Option<usize> {
    loop {
        if lo > hi {
            return None;
        }
        s.set_window(lo, hi);
        let mid = lo + (hi - lo) / 2;
        match s.check(mid) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => {
                lo = mid + 1;
                s.record(format!(
                    "array[{}] = {} < {}: discard the left half, low = {}",
                    mid,
                    s.value(mid),
                    s.target(),
                    lo
                ));
            }
            Ordering::Greater => {
                if mid == 0 {
                    s.record(format!(
                        "array[0] = {} > {}: nothing remains on the left",
                        s.value(0),
                        s.target()
                    ));
                    return None;
                }
                hi = mid - 1;
                s.record(format!(
                    "array[{}] = {} > {}: discard the right half, high = {}",
                    mid,
                    s.value(mid),
                    s.target(),
                    hi
                ));
            }
        }
    }
}

impl Algorithm for BinarySearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "binary-search",
            name: "Binary Search",
            family: Family::Searching,
            complexity: "O(log n)",
        }
    }

    fn initial_state(&self) -> SearchState {
        SearchState::new(self.input.values(), self.target)
    }

    fn generate_trace(&self, initial: &SearchState, config: &TraceConfig) -> Trace<SearchState> {
        let mut s = match Searcher::start(
            initial,
            format!("Halve the sorted window until {} is found", initial.target),
            config,
            true,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        let hi = s.len() - 1;
        match search_window(&mut s, 0, hi) {
            Some(i) => s.found(i),
            None => s.not_found("The window is empty"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Outcome;

    #[test]
    fn one_step_per_comparison() {
        let trace = BinarySearch::new(ArrayInput::Fixed(vec![1, 3, 5, 7, 9, 11]), 7)
            .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 4);
        let last = &trace.last().state;
        assert!(last.found);
        assert_eq!(last.mid, Some(3));
        assert_eq!(last.comparisons, 3);
    }

    #[test]
    fn below_every_value_is_not_found() {
        let trace = BinarySearch::new(ArrayInput::Fixed(vec![2, 4, 6]), 1)
            .trace(&TraceConfig::default());
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    }

    #[test]
    fn unsorted_input_is_invalid() {
        let trace = BinarySearch::new(ArrayInput::Fixed(vec![5, 1]), 1)
            .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }
}
