// Heap sort on an implicit max-heap

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct HeapSort {
    pub input: ArrayInput,
}

impl HeapSort {
    pub fn new(input: ArrayInput) -> Self {
        HeapSort { input }
    }
}

impl Default for HeapSort {
    fn default() -> Self {
        HeapSort::new(sample_input(DEFAULT_SEED))
    }
}

/// Restore the heap property below `root` within `0..end`
fn sift_down(sorter: &mut Sorter, mut root: usize, end: usize) {
    loop {
        let left = 2 * root + 1;
        if left >= end {
            return;
        }
        let mut largest = root;
        if sorter.compare(left, largest) == Ordering::Greater {
            largest = left;
        }
        let right = left + 1;
        if right < end && sorter.compare(right, largest) == Ordering::Greater {
            largest = right;
        }
        if largest == root {
            return;
        }
        sorter.swap(root, largest);
        root = largest;
    }
}

impl Algorithm for HeapSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "heap-sort",
            name: "Heap Sort",
            family: Family::Sorting,
            complexity: "O(n log n)",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        let mut sorter = match Sorter::start(
            initial,
            "Build a max-heap, then repeatedly move the maximum to the end",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();

        sorter.record_with("Build the max-heap bottom-up", Annotation::titled("Heapify"));
        for root in (0..n / 2).rev() {
            sift_down(&mut sorter, root, n);
        }
        sorter.clear_marks();
        sorter.record_with(
            format!("Max-heap built; the maximum {} is at the root", sorter.value(0)),
            Annotation::titled("Heapify"),
        );

        for end in (1..n).rev() {
            sorter.swap(0, end);
            sorter.settle(end);
            sorter.state.range = Some((0, end));
            sift_down(&mut sorter, 0, end);
            sorter.clear_marks();
            sorter.record_with(
                format!("Heap shrinks to 0..{}; index {} is final", end, end),
                Annotation::titled("Extract"),
            );
        }
        sorter.settle(0);
        sorter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::sequence::is_sorted;

    #[test]
    fn sorts_sample_and_fixed() {
        let config = TraceConfig::default();
        assert!(is_sorted(&HeapSort::default().trace(&config).last().state.array));
        let trace = HeapSort::new(ArrayInput::Fixed(vec![12, 11, 13, 5, 6, 7])).trace(&config);
        assert_eq!(trace.last().state.array, vec![5, 6, 7, 11, 12, 13]);
    }
}
