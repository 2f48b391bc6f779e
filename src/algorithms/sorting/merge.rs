// Top-down merge sort with an auxiliary merge buffer

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct MergeSort {
    pub input: ArrayInput,
}

impl MergeSort {
    pub fn new(input: ArrayInput) -> Self {
        MergeSort { input }
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        MergeSort::new(sample_input(DEFAULT_SEED))
    }
}

/// Sort `lo..hi`
fn sort_range(sorter: &mut Sorter, lo: usize, hi: usize, depth: usize) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    sorter.clear_marks();
    sorter.state.range = Some((lo, hi));
    sorter.record_with(
        format!("Split {}..{} into {}..{} and {}..{}", lo, hi, lo, mid, mid, hi),
        Annotation::titled(format!("Depth {}", depth)),
    );
    sort_range(sorter, lo, mid, depth + 1);
    sort_range(sorter, mid, hi, depth + 1);
    merge(sorter, lo, mid, hi);
}

/// Merge the sorted runs `lo..mid` and `mid..hi`.
///
/// Comparisons read the untouched array; merged values collect in `aux`
/// and are written back once both runs are consumed.
fn merge(sorter: &mut Sorter, lo: usize, mid: usize, hi: usize) {
    sorter.state.range = Some((lo, hi));
    sorter.state.aux.clear();
    let (mut i, mut j) = (lo, mid);
    while i < mid && j < hi {
        let taken = if sorter.compare(i, j) != Ordering::Greater {
            i += 1;
            i - 1
        } else {
            j += 1;
            j - 1
        };
        let value = sorter.value(taken);
        sorter.state.aux.push(value);
    }
    let rest: Vec<i64> = sorter.state.array[i..mid]
        .iter()
        .chain(&sorter.state.array[j..hi])
        .copied()
        .collect();
    if !rest.is_empty() {
        sorter.state.aux.extend(rest);
        sorter.clear_marks();
        sorter.record("One run is exhausted: append the rest of the other run");
    }

    let merged = sorter.state.aux.clone();
    for (offset, value) in merged.into_iter().enumerate() {
        let k = lo + offset;
        sorter.write(k, value, format!("Write {} back to index {}", value, k));
    }
    sorter.state.aux.clear();
    sorter.clear_marks();
    sorter.record(format!("Range {}..{} is merged", lo, hi));
}

impl Algorithm for MergeSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "merge-sort",
            name: "Merge Sort",
            family: Family::Sorting,
            complexity: "O(n log n)",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        let mut sorter = match Sorter::start(initial, "Divide, sort each half, merge", config) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();
        sort_range(&mut sorter, 0, n, 0);
        sorter.finish()
    }
}
