// Insertion sort (adjacent swaps)

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::Trace;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct InsertionSort {
    pub input: ArrayInput,
}

impl InsertionSort {
    pub fn new(input: ArrayInput) -> Self {
        InsertionSort { input }
    }
}

impl Default for InsertionSort {
    fn default() -> Self {
        InsertionSort::new(sample_input(DEFAULT_SEED))
    }
}

impl Algorithm for InsertionSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "insertion-sort",
            name: "Insertion Sort",
            family: Family::Sorting,
            complexity: "O(n^2)",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        let mut sorter = match Sorter::start(
            initial,
            "Grow a sorted prefix by inserting one element at a time",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();
        sorter.settle(0);

        for i in 1..n {
            sorter.clear_marks();
            sorter.state.pivot = Some(i);
            sorter.record(format!("Insert {} into the sorted prefix 0..{}", sorter.value(i), i));
            let mut j = i;
            while j > 0 && sorter.compare(j - 1, j) == Ordering::Greater {
                sorter.state.pivot = None;
                sorter.swap(j - 1, j);
                j -= 1;
            }
            // The prefix 0..=i is ordered relative to itself
            sorter.settle(i);
        }
        sorter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence::is_sorted;

    #[test]
    fn reverse_input_needs_every_swap() {
        let trace = InsertionSort::new(ArrayInput::Fixed(vec![4, 3, 2, 1]))
            .trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert!(is_sorted(&last.array));
        assert_eq!(last.swaps, 6);
    }

    #[test]
    fn single_element_is_trivially_sorted() {
        let trace = InsertionSort::new(ArrayInput::Fixed(vec![7]))
            .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 2);
        assert!(trace.outcome().is_success());
    }
}
