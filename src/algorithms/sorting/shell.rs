// Shell sort with the halving gap sequence

use super::{sample_input, SortState, Sorter};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct ShellSort {
    pub input: ArrayInput,
}

impl ShellSort {
    pub fn new(input: ArrayInput) -> Self {
        ShellSort { input }
    }
}

impl Default for ShellSort {
    fn default() -> Self {
        ShellSort::new(sample_input(DEFAULT_SEED))
    }
}

impl Algorithm for ShellSort {
    type State = SortState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "shell-sort",
            name: "Shell Sort",
            family: Family::Sorting,
            complexity: "O(n^2) worst, gap dependent",
        }
    }

    fn initial_state(&self) -> SortState {
        SortState::new(self.input.values())
    }

    fn generate_trace(&self, initial: &SortState, config: &TraceConfig) -> Trace<SortState> {
        let mut sorter = match Sorter::start(
            initial,
            "Insertion-sort elements that are a shrinking gap apart",
            config,
        ) {
            Ok(sorter) => sorter,
            Err(trace) => return trace,
        };
        let n = sorter.len();

        let mut gap = n / 2;
        while gap > 0 {
            sorter.clear_marks();
            sorter.record_with(
                format!("Gap = {}: sort every {}-th element", gap, gap),
                Annotation::titled(format!("gap {}", gap)),
            );
            for i in gap..n {
                let mut j = i;
                while j >= gap && sorter.compare(j - gap, j) == Ordering::Greater {
                    sorter.swap(j - gap, j);
                    j -= gap;
                }
            }
            gap /= 2;
        }
        sorter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_gap() {
        let trace = ShellSort::new(ArrayInput::Fixed(vec![23, 12, 1, 8, 34, 54, 2, 3]))
            .trace(&TraceConfig::default());
        let gaps: Vec<_> = trace
            .iter()
            .filter_map(|s| s.annotation.title.clone())
            .collect();
        assert_eq!(gaps, vec!["gap 4", "gap 2", "gap 1"]);
        assert_eq!(trace.last().state.array, vec![1, 2, 3, 8, 12, 23, 34, 54]);
    }
}
