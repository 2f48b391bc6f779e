// Fibonacci search

use super::{sample, SearchState, Searcher};
use crate::engine::constants::DEFAULT_SEED;
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::model::sequence::ArrayInput;
use crate::snapshot::{Annotation, Trace};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct FibonacciSearch {
    pub input: ArrayInput,
    pub target: i64,
}

impl FibonacciSearch {
    pub fn new(input: ArrayInput, target: i64) -> Self {
        FibonacciSearch { input, target }
    }

    pub fn seeded(seed: u64) -> Self {
        let (input, target) = sample(seed);
        FibonacciSearch::new(input, target)
    }
}

impl Default for FibonacciSearch {
    fn default() -> Self {
        FibonacciSearch::seeded(DEFAULT_SEED)
    }
}

impl Algorithm for FibonacciSearch {
    type State = SearchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "fibonacci-search",
            name: "Fibonacci Search",
            family: Family::Searching,
            complexity: "O(log n)",
        }
    }

    fn initial_state(&self) -> SearchState {
        SearchState::new(self.input.values(), self.target)
    }

    fn generate_trace(&self, initial: &SearchState, config: &TraceConfig) -> Trace<SearchState> {
        let mut s = match Searcher::start(
            initial,
            format!("Split by Fibonacci numbers while looking for {}", initial.target),
            config,
            true,
        ) {
            Ok(s) => s,
            Err(trace) => return trace,
        };
        let n = s.len();

        let (mut m2, mut m1) = (0usize, 1usize);
        let mut m = m1 + m2;
        while m < n {
            m2 = m1;
            m1 = m;
            m = m1 + m2;
        }
        s.state.fib = Some((m2, m1, m));
        s.record_with(
            format!("Smallest Fibonacci number >= {} is {}", n, m),
            Annotation::titled("Setup"),
        );

        // Index of the last element known to be below the target
        let mut offset: Option<usize> = None;
        while m > 1 {
            let i = (offset.map_or(0, |o| o + 1) + m2).saturating_sub(1).min(n - 1);
            match s.check(i) {
                Ordering::Equal => return s.found(i),
                Ordering::Less => {
                    m = m1;
                    m1 = m2;
                    m2 = m - m1;
                    offset = Some(i);
                    s.state.fib = Some((m2, m1, m));
                    s.set_window(i + 1, n - 1);
                    s.record(format!(
                        "array[{}] = {} < {}: drop everything up to {}, \
                         move down one Fibonacci number",
                        i,
                        s.value(i),
                        s.target(),
                        i
                    ));
                }
                Ordering::Greater => {
                    m = m2;
                    m1 -= m2;
                    m2 = m - m1;
                    s.state.fib = Some((m2, m1, m));
                    s.state.high = i.checked_sub(1);
                    s.record(format!(
                        "array[{}] = {} > {}: drop everything from {}, \
                         move down two Fibonacci numbers",
                        i,
                        s.value(i),
                        s.target(),
                        i
                    ));
                }
            }
        }

        let last = offset.map_or(0, |o| o + 1);
        if m1 == 1
            && last < n
            && !s.state.checked.contains(&last)
            && s.check(last) == Ordering::Equal
        {
            return s.found(last);
        }
        s.not_found("No Fibonacci split is left")
    }
}
