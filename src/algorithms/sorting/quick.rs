// Quicksort with Lomuto partitioning

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct QuickSort {
    pub input: ArrayInput,
}

impl QuickSort {
    pub fn new(input: ArrayInput) -> Self {
        QuickSort { input }
    }
}

impl Default for QuickSort {
    fn default() -> Self {
        QuickSort::new(sample_input(DEFAULT_SEED))
    }
}

/// Partition `lo..=hi` around `array[hi]`, returning the pivot's final index
fn partition(sorter: &mut Sorter, lo: usize, hi: usize) -> usize {
    sorter.clear_marks();
    sorter.state.range = Some((lo, hi + 1));
    sorter.state.pivot = Some(hi);
    sorter.record_with(
        format!("Partition {}..={} around pivot {}", lo, hi, sorter.value(hi)),
        Annotation::titled("Partition"),
    );
    let mut store = lo;
    for j in lo..hi {
        if sorter.compare(j, hi) == Ordering::Less {
            if store != j {
                sorter.swap(store, j);
            }
            store += 1;
        }
    }
    if store != hi {
        sorter.swap(store, hi);
    }
    sorter.settle(store);
    sorter.clear_marks();
    sorter.record(format!(
        "Pivot {} is in its final position {}",
        sorter.value(store),
        store
    ));
    store
}

fn sort_range(sorter: &mut Sorter, lo: usize, hi: usize) {
    if lo > hi {
        return;
    }
    if lo == hi {
        sorter.settle(lo);
        return;
    }
    let p = partition(sorter, lo, hi);
    if p > 0 {
        sort_range(sorter, lo, p - 1);
    }
    sort_range(sorter, p + 1, hi);
}

impl Algorithm for QuickSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "quick-sort",
            name: "Quick Sort",
            family: Family::Sorting,
            complexity: "O(n log n) average, O(n^2) worst",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        let mut sorter = match Sorter::start(
            initial,
            "Partition around a pivot, then sort both sides",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();
        sort_range(&mut sorter, 0, n - 1);
        sorter.finish()
    }
}
