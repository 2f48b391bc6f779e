// Naive pattern matching: try every alignment left to right

use super::{Matcher, MatchState, SAMPLE_PATTERN, SAMPLE_TEXT};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::Trace;

#[derive(Debug, Clone)]
pub struct NaiveMatch {
    pub text: String,
    pub pattern: String,
}

impl NaiveMatch {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        NaiveMatch {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for NaiveMatch {
    fn default() -> Self {
        NaiveMatch::new(SAMPLE_TEXT, SAMPLE_PATTERN)
    }
}

impl Algorithm for NaiveMatch {
    type State = MatchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "naive-match",
            name: "Naive String Matching",
            family: Family::StringMatching,
            complexity: "O(n m)",
        }
    }

    fn initial_state(&self) -> MatchState {
        MatchState::new(&self.text, &self.pattern)
    }

    fn generate_trace(&self, initial: &MatchState, config: &TraceConfig) -> Trace<MatchState> {
        let mut m = match Matcher::start(
            initial,
            "Slide the pattern over the text one position at a time",
            config,
        ) {
            Ok(m) => m,
            Err(trace) => return trace,
        };
        let (n, len) = (m.text_len(), m.pattern_len());

        for offset in 0..=n - len {
            m.align(offset, format!("Align the pattern at index {}", offset));
            let mut j = 0;
            while j < len && m.compare(offset + j, j) {
                j += 1;
            }
            if j == len {
                m.report(offset);
            }
            if offset < n - len {
                m.shift(1, "slide by one", "Shift the pattern one position right");
            }
        }
        m.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::occurrences;
    use super::*;
    use crate::snapshot::Outcome;

    #[test]
    fn finds_every_sample_occurrence() {
        let trace = NaiveMatch::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(trace.last().state.matches, vec![0, 9, 12]);
    }

    #[test]
    fn overlapping_matches() {
        let trace = NaiveMatch::new("aaaa", "aa").trace(&TraceConfig::default());
        assert_eq!(trace.last().state.matches, occurrences("aaaa", "aa"));
    }

    #[test]
    fn absent_pattern_fails() {
        let trace = NaiveMatch::new("abcabc", "abd").trace(&TraceConfig::default());
        assert_eq!(
            trace.outcome(),
            &Outcome::Failure("pattern not found".to_string())
        );
    }

    #[test]
    fn every_comparison_is_a_step() {
        let trace = NaiveMatch::new("ab", "b").trace(&TraceConfig::default());
        let compares = trace
            .iter()
            .filter(|s| s.description.starts_with("Compare"))
            .count();
        assert_eq!(compares, 2);
        assert_eq!(trace.last().state.comparisons, 2);
    }
}
