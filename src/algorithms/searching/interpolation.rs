// Interpolation search

use super::{sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct InterpolationSearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl InterpolationSearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        InterpolationSearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        InterpolationSearch::new(input, target)
    }
}

impl Default for InterpolationSearch {
    fn default() -> Self {
        InterpolationSearch::seeded(DEFAULT_SEED)
    }
}

impl Algorithm for InterpolationSearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "interpolation-search",
            name: "Interpolation Search",
            family: Family::Searching,
            complexity: "O(log log n) uniform, O(n) worst",
        }
    }

    fn initial_state(&self) -> SearchState {
        SearchState::new(self.input.values(), self.target)
    }

    fn generate_trace(&self, initial: &SearchState, config: &TraceConfig) -> Trace<SearchState> {
        let mut s = match Searcher::start(
            initial,
            format!("Estimate the position of {} from the value range", initial.target),
            config,
            true,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        let target = s.target();
        let (mut lo, mut hi) = (0usize, s.len() - 1);

        while lo <= hi && target >= s.value(lo) && target <= s.value(hi) {
            s.set_window(lo, hi);
            let (vlo, vhi) = (s.value(lo), s.value(hi));
            let pos = if vhi == vlo {
                lo
            } else {
                let spread = i128::from(vhi) - i128::from(vlo);
                let offset = i128::from(target) - i128::from(vlo);
                lo + (offset * (hi - lo) as i128 / spread) as usize
            };
            let formula = format!(
                "pos = {} + ({} - {}) * ({} - {}) / ({} - {}) = {}",
                lo, target, vlo, hi, lo, vhi, vlo, pos
            );
            match s.check(pos) {
                Ordering::Equal => return s.found(pos),
                Ordering::Less => {
                    lo = pos + 1;
                    s.record_with(
                        format!("array[{}] = {} < {}: low = {}", pos, s.value(pos), target, lo),
                        Annotation::titled("Probe").with_note(formula),
                    );
                }
                Ordering::Greater => {
                    s.record_with(
                        format!(
                            "array[{}] = {} > {}: high = {}",
                            pos,
                            s.value(pos),
                            target,
                            format_high(pos)
                        ),
                        Annotation::titled("Probe").with_note(formula),
                    );
                    if pos == 0 {
                        break;
                    }
                    hi = pos - 1;
                }
            }
        }
        s.not_found("The target falls outside the remaining value range")
    }
}

fn format_high(pos: usize) -> String {
    match pos.checked_sub(1) {
        Some(h) => h.to_string(),
        None => "none".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Outcome;

    #[test]
    fn uniform_values_hit_on_first_probe() {
        let values: Vec<i64> = (1..=10).map(|v| v * 10).collect();
        let trace = InterpolationSearch::new(ArrayInput::Fixed(values), 70)
            .trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(trace.last().state.comparisons, 1);
        assert_eq!(trace.last().state.mid, Some(6));
    }

    #[test]
    fn equal_values_do_not_divide_by_zero() {
        let trace = InterpolationSearch::new(ArrayInput::Fixed(vec![5, 5, 5]), 5)
            .trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
    }

    #[test]
    fn out_of_range_target_fails_without_probing() {
        let trace = InterpolationSearch::new(ArrayInput::Fixed(vec![1, 2, 3]), 10)
            .trace(&TraceConfig::default());
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
        assert_eq!(trace.last().state.comparisons, 0);
    }

    #[test]
    fn full_i64_range_does_not_overflow() {
        let values = vec![i64::MIN, 0, i64::MAX];
        let trace = InterpolationSearch::new(ArrayInput::Fixed(values.clone()), 0)
            .trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(trace.last().state.mid, Some(1));

        let trace = InterpolationSearch::new(ArrayInput::Fixed(values), i64::MAX)
            .trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(trace.last().state.mid, Some(2));
    }
}
