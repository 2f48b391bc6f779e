// Jump search with block size floor(sqrt(n))

use super::{sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct JumpSearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl JumpSearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        JumpSearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        JumpSearch::new(input, target)
    }
}

impl Default for JumpSearch {
    fn default() -> Self {
        JumpSearch::seeded(DEFAULT_SEED)
    }
}

fn block_size(n: usize) -> usize {
    ((n as f64).sqrt().floor() as usize).max(1)
}

impl Algorithm for JumpSearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "jump-search",
            name: "Jump Search",
            family: Family::Searching,
            complexity: "O(sqrt n)",
        }
    }

    fn initial_state(&self) -> SearchState {
        SearchState::new(self.input.values(), self.target)
    }

    fn generate_trace(&self, initial: &SearchState, config: &TraceConfig) -> Trace<SearchState> {
        let mut s = match Searcher::start(
            initial,
            format!("Jump ahead block by block looking for {}", initial.target),
            config,
            true,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        let n = s.len();
        let block = block_size(n);
        s.state.block_size = Some(block);
        s.record_with(
            format!("Block size = floor(sqrt({})) = {}", n, block),
            Annotation::titled("Jump"),
        );

        let mut prev = 0;
        let mut end = block.min(n);
        loop {
            let probe = end - 1;
            match s.check(probe) {
                Ordering::Equal => return s.found(probe),
                Ordering::Greater => {
                    s.record_with(
                        format!(
                            "array[{}] = {} > {}: the target lies in block {}..={}",
                            probe,
                            s.value(probe),
                            s.target(),
                            prev,
                            probe
                        ),
                        Annotation::titled("Jump"),
                    );
                    break;
                }
                Ordering::Less => {
                    if end == n {
                        return s.not_found("The last block ends below the target");
                    }
                    prev = end;
                    end = (end + block).min(n);
                    s.set_window(prev, n - 1);
                    s.record_with(
                        format!(
                            "array[{}] = {} < {}: jump to the next block",
                            probe,
                            s.value(probe),
                            s.target()
                        ),
                        Annotation::titled("Jump"),
                    );
                }
            }
        }

        s.set_window(prev, end - 1);
        for i in prev..end - 1 {
            match s.check(i) {
                Ordering::Equal => return s.found(i),
                Ordering::Greater => break,
                Ordering::Less => s.record_with(
                    format!("array[{}] = {} < {}: step forward", i, s.value(i), s.target()),
                    Annotation::titled("Linear scan"),
                ),
            }
        }
        s.not_found("The block was scanned without a match")
    }
}
