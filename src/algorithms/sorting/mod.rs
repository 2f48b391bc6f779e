//! Sorting algorithm family
//!
//! Every sorter works on the same [`SortState`] and drives it through a
//! [`Sorter`], which owns the working state and the recorder and turns each
//! comparison, swap and write into its own step.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;
pub mod shell;

pub use bubble::BubbleSort;
pub use counting::CountingSort;
pub use heap::HeapSort;
pub use insertion::InsertionSort;
pub use merge::MergeSort;
pub use quick::QuickSort;
pub use selection::SelectionSort;
pub use shell::ShellSort;

use crate::engine::TraceConfig;
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;
use std::cmp::Ordering;

/// Length of generated sample arrays
pub const SAMPLE_LEN: usize = 10;
/// Largest value in generated sample arrays
pub const SAMPLE_MAX: i64 = 99;

/// Seeded random array used by every sorter by default
pub fn sample_input(seed: u64) -> ArrayInput {
    ArrayInput::Random {
        len: SAMPLE_LEN,
        max: SAMPLE_MAX,
        seed,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub array: Vec<i64>,
    pub comparing: Vec<usize>,
    pub swapping: Vec<usize>,
    /// Indices known to hold their final value
    pub sorted: Vec<usize>,
    pub pivot: Option<usize>,
    /// Half-open range the algorithm is working on
    pub range: Option<(usize, usize)>,
    /// Merge buffer or counting array
    pub aux: Vec<i64>,
    pub comparisons: usize,
    /// Swaps and writes
    pub swaps: usize,
}

impl SortState {
    pub fn new(array: Vec<i64>) -> Self {
        SortState {
            array,
            ..SortState::default()
        }
    }

    fn mark(&self, i: usize) -> Mark {
        if self.swapping.contains(&i) {
            Mark::Active
        } else if self.comparing.contains(&i) {
            Mark::Compare
        } else if self.pivot == Some(i) {
            Mark::Alert
        } else if self.sorted.contains(&i) {
            Mark::Done
        } else if self.range.is_some_and(|(lo, hi)| i < lo || i >= hi) {
            Mark::Muted
        } else {
            Mark::Plain
        }
    }
}

impl Visualize for SortState {
    fn view(&self) -> Vec<Row> {
        let mut rows = vec![
            format::index_row("Index:", self.array.len()),
            format::marked_row("Array:", &self.array, |i| self.mark(i)),
        ];
        if !self.aux.is_empty() {
            rows.push(format::marked_row("Aux:", &self.aux, |_| Mark::Plain));
        }
        rows.push(
            Row::labeled("Comparisons:")
                .cell(self.comparisons.to_string(), Mark::Plain)
                .cell("Swaps/writes:", Mark::Label)
                .cell(self.swaps.to_string(), Mark::Plain),
        );
        rows
    }
}

/// Working state plus recorder for one sorting run
pub(crate) struct Sorter {
    pub state: SortState,
    recorder: TraceRecorder<SortState>,
}

impl Sorter {
    /// Start a run, or hand back the single-step trace for an empty array
    pub fn start(
        initial: &SortState,
        description: impl Into<String>,
        config: &TraceConfig,
    ) -> Result<Sorter, Trace<SortState>> {
        if initial.array.is_empty() {
            return Err(Trace::invalid(initial.clone(), "array is empty"));
        }
        Ok(Sorter {
            state: SortState::new(initial.array.clone()),
            recorder: TraceRecorder::new(initial, description, config.max_steps),
        })
    }

    pub fn len(&self) -> usize {
        self.state.array.len()
    }

    pub fn value(&self, i: usize) -> i64 {
        self.state.array[i]
    }

    pub fn record(&mut self, description: impl Into<String>) {
        self.recorder.record(&self.state, description);
    }

    pub fn record_with(&mut self, description: impl Into<String>, annotation: Annotation) {
        self.recorder.record_with(&self.state, description, annotation);
    }

    /// Compare `array[i]` with `array[j]` as its own step
    pub fn compare(&mut self, i: usize, j: usize) -> Ordering {
        self.state.comparing = vec![i, j];
        self.state.swapping.clear();
        self.state.comparisons += 1;
        let (a, b) = (self.value(i), self.value(j));
        let ordering = a.cmp(&b);
        let relation = match ordering {
            Ordering::Less => "<",
            Ordering::Equal => "=",
            Ordering::Greater => ">",
        };
        self.record(format!(
            "Compare {} (index {}) with {} (index {}): {} {} {}",
            a, i, b, j, a, relation, b
        ));
        ordering
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.state.comparing.clear();
        self.state.swapping = vec![i, j];
        self.state.swaps += 1;
        self.state.array.swap(i, j);
        self.record(format!(
            "Swap {} (index {}) and {} (index {})",
            self.value(j),
            i,
            self.value(i),
            j
        ));
    }

    /// Overwrite `array[i]` as its own step
    pub fn write(&mut self, i: usize, value: i64, description: impl Into<String>) {
        self.state.comparing.clear();
        self.state.swapping = vec![i];
        self.state.swaps += 1;
        self.state.array[i] = value;
        self.record(description);
    }

    /// Mark `i` as final without recording
    pub fn settle(&mut self, i: usize) {
        if !self.state.sorted.contains(&i) {
            self.state.sorted.push(i);
        }
    }

    pub fn clear_marks(&mut self) {
        self.state.comparing.clear();
        self.state.swapping.clear();
        self.state.pivot = None;
    }

    /// Terminal step: every index settled
    pub fn finish(mut self) -> Trace<SortState> {
        self.clear_marks();
        self.state.range = None;
        self.state.aux.clear();
        self.state.sorted = (0..self.len()).collect();
        let description = format!(
            "Array is sorted: [{}] ({} comparisons, {} swaps/writes)",
            format::list(&self.state.array),
            self.state.comparisons,
            self.state.swaps
        );
        self.recorder.finish(&self.state, description, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorter_rejects_empty_array() {
        let initial = SortState::new(Vec::new());
        let trace = match Sorter::start(&initial, "start", &TraceConfig::default()) {
            Ok(_) => panic!("empty array accepted"),
            Err(trace) => trace,
        };
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }

    #[test]
    fn compare_and_swap_are_steps() {
        let initial = SortState::new(vec![2, 1]);
        let mut sorter = Sorter::start(&initial, "start", &TraceConfig::default())
            .unwrap_or_else(|_| panic!("rejected"));
        assert_eq!(sorter.compare(0, 1), Ordering::Greater);
        sorter.swap(0, 1);
        let trace = sorter.finish();
        assert_eq!(trace.len(), 4);
        assert_eq!(trace[1].state.comparing, vec![0, 1]);
        assert_eq!(trace[2].state.array, vec![1, 2]);
        assert_eq!(trace[2].state.swaps, 1);
        assert_eq!(trace.last().state.sorted, vec![0, 1]);
    }

    #[test]
    fn view_marks_sorted_cells() {
        let mut state = SortState::new(vec![3, 1]);
        state.sorted = vec![1];
        state.comparing = vec![0];
        let rows = state.view();
        assert_eq!(rows[1].to_string(), "Array: <3> 1*");
    }
}
