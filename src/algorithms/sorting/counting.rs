// Counting sort for non-negative integers

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};

/// Largest value accepted; bounds the count array
pub const MAX_VALUE: i64 = 1000;

#[derive(Debug, Clone)]
pub struct CountingSort {
    pub input: ArrayInput,
}

impl CountingSort {
    pub fn new(input: ArrayInput) -> Self {
        CountingSort { input }
    }
}

impl Default for CountingSort {
    fn default() -> Self {
        CountingSort::new(sample_input(DEFAULT_SEED))
    }
}

impl Algorithm for CountingSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "counting-sort",
            name: "Counting Sort",
            family: Family::Sorting,
            complexity: "O(n + k)",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        if let Some(&bad) = initial.array.iter().find(|&&v| !(0..=MAX_VALUE).contains(&v)) {
            return Trace::invalid(
                initial.clone(),
                format!("counting sort needs values in 0..={}, found {}", MAX_VALUE, bad),
            );
        }
        let mut sorter = match Sorter::start(
            initial,
            "Count occurrences of each value, then rewrite the array in order",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();
        let max = sorter.state.array.iter().copied().max().unwrap_or(0);

        sorter.state.aux = vec![0; max as usize + 1];
        sorter.record_with(
            format!("Allocate {} counters for values 0..={}", max + 1, max),
            Annotation::titled("Count"),
        );
        for i in 0..n {
            let v = sorter.value(i);
            sorter.state.aux[v as usize] += 1;
            sorter.state.comparing = vec![i];
            sorter.record_with(
                format!("Count {} (now {})", v, sorter.state.aux[v as usize]),
                Annotation::titled("Count"),
            );
        }

        let mut k = 0;
        for v in 0..=max {
            while sorter.state.aux[v as usize] > 0 {
                sorter.state.aux[v as usize] -= 1;
                sorter.write(k, v, format!("Write {} to index {}", v, k));
                sorter.settle(k);
                k += 1;
            }
        }
        sorter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::Outcome;

    #[test]
    fn sorts_small_values() {
        let trace = CountingSort::new(ArrayInput::Fixed(vec![4, 2, 2, 8, 3, 3, 1]))
            .trace(&TraceConfig::default());
        assert_eq!(trace.last().state.array, vec![1, 2, 2, 3, 3, 4, 8]);
    }

    #[test]
    fn negative_values_are_invalid() {
        let trace = CountingSort::new(ArrayInput::Fixed(vec![3, -1]))
            .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }
}
