//! Searching algorithm family
//!
//! All searches share [`SearchState`]. A [`Searcher`] validates the input,
//! performs comparisons against the target and ends the trace: the comparison
//! that finds the target is itself the terminal step, every other comparison
//! is recorded by the caller with its own narrative.

pub mod binary;
pub mod exponential;
pub mod fibonacci;
pub mod interpolation;
pub mod jump;
pub mod linear;

pub use binary::BinarySearch;
pub use exponential::ExponentialSearch;
pub use fibonacci::FibonacciSearch;
pub use interpolation::InterpolationSearch;
pub use jump::JumpSearch;
pub use linear::LinearSearch;

use crate::engine::TraceConfig;
use crate::model::seeded_rng;
use crate::model::sequence::{is_sorted, ArrayInput};
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use rand::Rng;
use serde::Serialize;
use std::cmp::Ordering;

pub const SAMPLE_LEN: usize = 15;
pub const SAMPLE_MAX: i64 = 99;

/// Seeded sorted array plus a target drawn from it
pub fn sample(seed: u64) -> (ArrayInput, i64) {
    let values = ArrayInput::Random {
        len: SAMPLE_LEN,
        max: SAMPLE_MAX,
        seed,
    }
    .sorted_values();
    let mut rng = seeded_rng(seed.wrapping_add(1));
    let target = values[rng.gen_range(0..values.len())];
    (ArrayInput::Fixed(values), target)
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SearchState {
    pub array: Vec<i64>,
    pub target: i64,
    /// Inclusive search window
    pub low: Option<usize>,
    pub high: Option<usize>,
    /// Index compared most recently
    pub mid: Option<usize>,
    pub checked: Vec<usize>,
    pub found: bool,
    /// Jump search block, computed once up front
    pub block_size: Option<usize>,
    /// Fibonacci search `(fib_m2, fib_m1, fib_m)`
    pub fib: Option<(usize, usize, usize)>,
    /// Exponential search upper bound
    pub bound: Option<usize>,
    pub comparisons: usize,
}

impl SearchState {
    pub fn new(array: Vec<i64>, target: i64) -> Self {
        SearchState {
            array,
            target,
            ..SearchState::default()
        }
    }

    fn mark(&self, i: usize) -> Mark {
        if self.mid == Some(i) {
            if self.found {
                Mark::Done
            } else {
                Mark::Active
            }
        } else if self.low.is_some_and(|lo| i < lo) || self.high.is_some_and(|hi| i > hi) {
            Mark::Muted
        } else if self.checked.contains(&i) {
            Mark::Compare
        } else {
            Mark::Plain
        }
    }
}

impl Visualize for SearchState {
    fn view(&self) -> Vec<Row> {
        let mut rows = vec![
            format::index_row("Index:", self.array.len()),
            format::marked_row("Array:", &self.array, |i| self.mark(i)),
            Row::labeled("Target:")
                .cell(self.target.to_string(), Mark::Active)
                .cell("low:", Mark::Label)
                .cell(format::optional(self.low), Mark::Plain)
                .cell("high:", Mark::Label)
                .cell(format::optional(self.high), Mark::Plain)
                .cell("mid:", Mark::Label)
                .cell(format::optional(self.mid), Mark::Plain),
        ];
        if let Some(block) = self.block_size {
            rows.push(Row::labeled("Block size:").cell(block.to_string(), Mark::Plain));
        }
        if let Some((m2, m1, m)) = self.fib {
            rows.push(
                Row::labeled("Fibonacci:")
                    .cell(format!("F(m-2)={}", m2), Mark::Plain)
                    .cell(format!("F(m-1)={}", m1), Mark::Plain)
                    .cell(format!("F(m)={}", m), Mark::Plain),
            );
        }
        if let Some(bound) = self.bound {
            rows.push(Row::labeled("Bound:").cell(bound.to_string(), Mark::Plain));
        }
        rows.push(Row::labeled("Comparisons:").cell(self.comparisons.to_string(), Mark::Plain));
        rows
    }
}

/// Working state plus recorder for one search run
pub(crate) struct Searcher {
    pub state: SearchState,
    recorder: TraceRecorder<SearchState>,
}

impl Searcher {
    /// Start a run. Empty arrays, and unsorted arrays when `sorted` is
    /// required, come back as single-step invalid traces.
    pub fn start(
        initial: &SearchState,
        description: impl Into<String>,
        config: &TraceConfig,
        sorted: bool,
    ) -> Result<Searcher, Trace<SearchState>> {
        if initial.array.is_empty() {
            return Err(Trace::invalid(initial.clone(), "array is empty"));
        }
        if sorted && !is_sorted(&initial.array) {
            return Err(Trace::invalid(
                initial.clone(),
                "array must be sorted ascending",
            ));
        }
        Ok(Searcher {
            state: SearchState::new(initial.array.clone(), initial.target),
            recorder: TraceRecorder::new(initial, description, config.max_steps),
        })
    }

    pub fn len(&self) -> usize {
        self.state.array.len()
    }

    pub fn value(&self, i: usize) -> i64 {
        self.state.array[i]
    }

    pub fn target(&self) -> i64 {
        self.state.target
    }

    pub fn set_window(&mut self, low: usize, high: usize) {
        self.state.low = Some(low);
        self.state.high = Some(high);
    }

    /// Compare `array[i]` with the target. Does not record; the caller
    /// narrates the outcome or calls [`found`](Self::found).
    pub fn check(&mut self, i: usize) -> Ordering {
        self.state.mid = Some(i);
        if !self.state.checked.contains(&i) {
            self.state.checked.push(i);
        }
        self.state.comparisons += 1;
        self.value(i).cmp(&self.state.target)
    }

    pub fn record(&mut self, description: impl Into<String>) {
        self.recorder.record(&self.state, description);
    }

    pub fn record_with(&mut self, description: impl Into<String>, annotation: Annotation) {
        self.recorder.record_with(&self.state, description, annotation);
    }

    /// Terminal step for a successful comparison at `i`
    pub fn found(mut self, i: usize) -> Trace<SearchState> {
        self.state.mid = Some(i);
        self.state.found = true;
        let description = format!(
            "array[{}] = {} equals the target: found at index {} after {} comparison(s)",
            i,
            self.value(i),
            i,
            self.state.comparisons
        );
        self.recorder.finish(&self.state, description, Outcome::Success)
    }

    /// Terminal step when the target is absent
    pub fn not_found(self, reason: impl Into<String>) -> Trace<SearchState> {
        let description = format!(
            "{}: {} is not in the array ({} comparison(s))",
            reason.into(),
            self.state.target,
            self.state.comparisons
        );
        let outcome = Outcome::Failure(format!("{} not found", self.state.target));
        self.recorder.finish(&self.state, description, outcome)
    }
}

/// Phrase for a non-matching comparison
pub(crate) fn relation(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Equal => "=",
        Ordering::Greater => ">",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_target_is_present() {
        let (input, target) = sample(7);
        let values = input.values();
        assert!(is_sorted(&values));
        assert!(values.contains(&target));
        assert_eq!(sample(7), (input, target));
    }

    #[test]
    fn unsorted_input_is_rejected_when_order_matters() {
        let initial = SearchState::new(vec![3, 1, 2], 1);
        let config = TraceConfig::default();
        assert!(Searcher::start(&initial, "s", &config, false).is_ok());
        match Searcher::start(&initial, "s", &config, true) {
            Ok(_) => panic!("unsorted array accepted"),
            Err(trace) => assert!(matches!(trace.outcome(), Outcome::Invalid(_))),
        }
    }
}
