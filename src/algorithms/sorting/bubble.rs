// Bubble sort with early exit

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::Trace;
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct BubbleSort {
    pub input: ArrayInput,
}

impl BubbleSort {
    pub fn new(input: ArrayInput) -> Self {
        BubbleSort { input }
    }
}

impl Default for BubbleSort {
    fn default() -> Self {
        BubbleSort::new(sample_input(DEFAULT_SEED))
    }
}

impl Algorithm for BubbleSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "bubble-sort",
            name: "Bubble Sort",
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
            "Repeatedly swap adjacent out-of-order pairs",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();

        for pass in 0..n.saturating_sub(1) {
            let mut swapped = false;
            for j in 0..n - 1 - pass {
                if sorter.compare(j, j + 1) == Ordering::Greater {
                    sorter.swap(j, j + 1);
                    swapped = true;
                }
            }
            sorter.settle(n - 1 - pass);
            sorter.clear_marks();
            if !swapped {
                sorter.record(format!(
                    "Pass {} made no swaps: the array is already in order",
                    pass + 1
                ));
                break;
            }
            sorter.record(format!(
                "End of pass {}: {} has bubbled to index {}",
                pass + 1,
                sorter.value(n - 1 - pass),
                n - 1 - pass
            ));
        }
        sorter.finish()
    }
}
