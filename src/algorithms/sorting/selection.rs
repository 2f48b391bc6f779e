// Selection sort

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::Trace;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct SelectionSort {
    pub input: ArrayInput,
}

impl SelectionSort {
    pub fn new(input: ArrayInput) -> Self {
        SelectionSort { input }
    }
}

impl Default for SelectionSort {
    fn default() -> Self {
        SelectionSort::new(sample_input(DEFAULT_SEED))
    }
}

impl Algorithm for SelectionSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "selection-sort",
            name: "Selection Sort",
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
            "Repeatedly select the smallest remaining element",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();

        for i in 0..n {
            let mut min = i;
            sorter.state.pivot = Some(min);
            for j in i + 1..n {
                if sorter.compare(j, min) == Ordering::Less {
                    min = j;
                    sorter.state.pivot = Some(min);
                    sorter.record(format!("New minimum {} at index {}", sorter.value(min), min));
                }
            }
            if min != i {
                sorter.swap(i, min);
            }
            sorter.settle(i);
            sorter.clear_marks();
            sorter.record(format!("{} is in its final position {}", sorter.value(i), i));
        }
        sorter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence::is_sorted;

    #[test]
    fn sorts_and_swaps_at_most_n_times() {
        let trace = SelectionSort::new(ArrayInput::Fixed(vec![5, 2, 9, 1, 5, 6]))
            .trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert!(is_sorted(&last.array));
        assert!(last.swaps <= 6);
        assert_eq!(last.comparisons, 15);
    }
}
