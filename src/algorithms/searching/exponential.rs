// Exponential search: double a bound, then binary search inside it

use super::binary::search_window;
use super::{sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct ExponentialSearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl ExponentialSearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        ExponentialSearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        ExponentialSearch::new(input, target)
    }
}

impl Default for ExponentialSearch {
    fn default() -> Self {
        ExponentialSearch::seeded(DEFAULT_SEED)
    }
}

impl Algorithm for ExponentialSearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "exponential-search",
            name: "Exponential Search",
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
            format!(
                "Find a range containing {} by doubling, then binary search it",
                initial.target
            ),
            config,
            true,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        let n = s.len();

        match s.check(0) {
            Ordering::Equal => return s.found(0),
            Ordering::Greater => {
                let first = s.value(0);
                return s.not_found(format!("array[0] = {} is already larger", first));
            }
            Ordering::Less => s.record_with(
                format!("array[0] = {} < {}: start doubling", s.value(0), s.target()),
                Annotation::titled("Doubling"),
            ),
        }

        let mut bound = 1;
        while bound < n {
            s.state.bound = Some(bound);
            match s.check(bound) {
                Ordering::Equal => return s.found(bound),
                Ordering::Greater => {
                    s.record_with(
                        format!(
                            "array[{}] = {} > {}: the target is below this bound",
                            bound,
                            s.value(bound),
                            s.target()
                        ),
                        Annotation::titled("Doubling"),
                    );
                    break;
                }
                Ordering::Less => {
                    s.record_with(
                        format!(
                            "array[{}] = {} < {}: double the bound to {}",
                            bound,
                            s.value(bound),
                            s.target(),
                            bound * 2
                        ),
                        Annotation::titled("Doubling"),
                    );
                    bound *= 2;
                }
            }
        }

        let lo = bound / 2 + 1;
        let hi = bound.min(n) - 1;
        s.state.bound = Some(bound.min(n - 1));
        s.set_window(lo.min(hi), hi);
        s.record_with(
            format!("Binary search the window {}..={}", lo, hi),
            Annotation::titled("Binary search"),
        );
        if lo > hi {
            return s.not_found("The window is empty");
        }
        match search_window(&mut s, lo, hi) {
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
    fn finds_every_element() {
        let values = vec![2, 3, 4, 10, 40, 41, 57, 60, 73];
        for (index, &target) in values.iter().enumerate() {
            let trace = ExponentialSearch::new(ArrayInput::Fixed(values.clone()), target)
                .trace(&TraceConfig::default());
            assert!(trace.outcome().is_success(), "target {}", target);
            assert_eq!(trace.last().state.mid, Some(index));
        }
    }

    #[test]
    fn absent_values_fail() {
        for target in [1, 5, 100] {
            let trace = ExponentialSearch::new(ArrayInput::Fixed(vec![2, 3, 4, 10, 40]), target)
                .trace(&TraceConfig::default());
            assert!(matches!(trace.outcome(), Outcome::Failure(_)), "target {}", target);
        }
    }
}
