// Rabin-Karp matching with a rolling polynomial hash

use super::{MatchPhase, Matcher, MatchState, SAMPLE_PATTERN, SAMPLE_TEXT};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::Trace;

/// Radix of the hash polynomial
pub const BASE: i64 = 256;
/// Prime modulus; small so that spurious hits actually show up
pub const MODULUS: i64 = 101;

const SPURIOUS: &str = "spurious hit";

#[derive(Debug, Clone)]
pub struct RabinKarp {
    pub text: String,
    pub pattern: String,
}

impl RabinKarp {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        RabinKarp {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for RabinKarp {
    fn default() -> Self {
        RabinKarp::new(SAMPLE_TEXT, SAMPLE_PATTERN)
    }
}

fn code(c: char) -> i64 {
    i64::from(u32::from(c))
}

impl Algorithm for RabinKarp {
    type State = MatchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "rabin-karp",
            name: "Rabin-Karp",
            family: Family::StringMatching,
            complexity: "O(n + m) expected",
        }
    }

    fn initial_state(&self) -> MatchState {
        MatchState::new(&self.text, &self.pattern)
    }

    fn generate_trace(&self, initial: &MatchState, config: &TraceConfig) -> Trace<MatchState> {
        let mut m = match Matcher::start(
            initial,
            format!(
                "Hash the pattern and slide a rolling hash (base {}, mod {}) over the text",
                BASE, MODULUS
            ),
            config,
        ) {
            Ok(m) => m,
            Err(trace) => return trace,
        };
        let (n, len) = (m.text_len(), m.pattern_len());

        // Weight of the leading character: BASE^(len-1) mod MODULUS
        let lead = (1..len).fold(1, |acc, _| acc * BASE % MODULUS);
        m.state.phase = MatchPhase::Preprocess;
        let (mut pattern_hash, mut window_hash) = (0i64, 0i64);
        for i in 0..len {
            let (p, t) = (m.pattern_at(i), m.text_at(i));
            pattern_hash = (pattern_hash * BASE + code(p)) % MODULUS;
            window_hash = (window_hash * BASE + code(t)) % MODULUS;
            m.state.pattern_hash = Some(pattern_hash);
            m.state.window_hash = Some(window_hash);
            m.record(format!(
                "Fold in pattern '{}' and text '{}': pattern hash {}, window hash {}",
                p, t, pattern_hash, window_hash
            ));
        }

        for offset in 0..=n - len {
            m.align(
                offset,
                format!(
                    "Window at index {}: hash {} vs pattern hash {}",
                    offset, window_hash, pattern_hash
                ),
            );
            if window_hash == pattern_hash {
                let mut j = 0;
                while j < len && m.compare(offset + j, j) {
                    j += 1;
                }
                if j == len {
                    m.report(offset);
                } else {
                    m.record_noted(
                        format!(
                            "Hashes agree at index {} but the characters differ",
                            offset
                        ),
                        SPURIOUS,
                    );
                }
            }
            if offset < n - len {
                let (out, inc) = (m.text_at(offset), m.text_at(offset + len));
                window_hash =
                    (BASE * (window_hash - code(out) * lead) + code(inc)).rem_euclid(MODULUS);
                m.state.window_hash = Some(window_hash);
                m.shift(
                    1,
                    "rolling hash",
                    format!(
                        "Roll the hash: drop '{}', add '{}', window hash {}",
                        out, inc, window_hash
                    ),
                );
            }
        }
        m.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::occurrences;
    use super::*;

    #[test]
    fn sample_occurrences() {
        let trace = RabinKarp::default().trace(&TraceConfig::default());
        assert_eq!(trace.last().state.matches, vec![0, 9, 12]);
        assert_eq!(trace.last().state.pattern_hash, Some(79));
    }

    #[test]
    fn spurious_hits_are_noted() {
        // "ju" and "ab" share hash 84
        let trace = RabinKarp::new("xjuab", "ab").trace(&TraceConfig::default());
        assert_eq!(trace.last().state.matches, vec![3]);
        let spurious = trace
            .iter()
            .filter(|s| s.annotation.note.as_deref() == Some(SPURIOUS))
            .count();
        assert_eq!(spurious, 1);
    }

    #[test]
    fn rolling_hash_matches_direct_hash() {
        let text = "the quick brown fox";
        let trace = RabinKarp::new(text, "own").trace(&TraceConfig::default());
        let chars: Vec<char> = text.chars().collect();
        for step in trace.iter().filter(|s| s.description.starts_with("Window")) {
            let offset = step.state.offset.unwrap();
            let direct = chars[offset..offset + 3]
                .iter()
                .fold(0, |h, &c| (h * BASE + code(c)) % MODULUS);
            assert_eq!(step.state.window_hash, Some(direct));
        }
        assert_eq!(trace.last().state.matches, occurrences(text, "own"));
    }
}
