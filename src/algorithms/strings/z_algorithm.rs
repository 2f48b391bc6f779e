// Z-algorithm matching over `pattern + '$' + text`

use super::{char_keys, Matcher, MatchState, SAMPLE_PATTERN, SAMPLE_TEXT};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::Trace;

const SEPARATOR: char = '$';

#[derive(Debug, Clone)]
pub struct ZAlgorithm {
    pub text: String,
    pub pattern: String,
}

impl ZAlgorithm {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        ZAlgorithm {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for ZAlgorithm {
    fn default() -> Self {
        ZAlgorithm::new(SAMPLE_TEXT, SAMPLE_PATTERN)
    }
}

/// Z-array of `s`, one preprocessing step per entry. `z[0]` is left at 0.
fn build_z_array(m: &mut Matcher, s: &[char]) -> Vec<usize> {
    let table = m.add_table("Z", char_keys(s));
    let mut z = vec![0usize; s.len()];
    m.set_entry(table, 0, 0, "Z[0] is not used: it would be the whole string");

    // [left, right) is the rightmost segment known to match a prefix
    let (mut left, mut right) = (0usize, 0usize);
    for i in 1..s.len() {
        let (reused, source) = if i < right {
            (z[i - left].min(right - i), i - left)
        } else {
            (0, 0)
        };
        let mut len = reused;
        while i + len < s.len() && s[len] == s[i + len] {
            len += 1;
        }
        z[i] = len;
        if i + len > right {
            left = i;
            right = i + len;
        }
        let description = if reused > 0 {
            format!(
                "Z[{}] = {}: reuse {} from Z[{}] inside the window, then extend by {}",
                i,
                len,
                reused,
                source,
                len - reused
            )
        } else {
            format!("Z[{}] = {}: compare against the prefix from scratch", i, len)
        };
        m.set_entry(table, i, len as i64, description);
    }
    z
}

impl Algorithm for ZAlgorithm {
    type State = MatchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "z-algorithm",
            name: "Z-Algorithm",
            family: Family::StringMatching,
            complexity: "O(n + m)",
        }
    }

    fn initial_state(&self) -> MatchState {
        MatchState::new(&self.text, &self.pattern)
    }

    fn generate_trace(&self, initial: &MatchState, config: &TraceConfig) -> Trace<MatchState> {
        let mut m = match Matcher::start(
            initial,
            format!(
                "Compute the Z-array of pattern {} text, then read off full-length entries",
                SEPARATOR
            ),
            config,
        ) {
            Ok(m) => m,
            Err(trace) => return trace,
        };
        let (n, len) = (m.text_len(), m.pattern_len());
        let joined: Vec<char> = m
            .state
            .pattern
            .iter()
            .copied()
            .chain(std::iter::once(SEPARATOR))
            .chain(m.state.text.iter().copied())
            .collect();
        let z = build_z_array(&mut m, &joined);

        for offset in 0..=n - len {
            let value = z[len + 1 + offset];
            let known = value.min(len);
            m.align_known(
                offset,
                known,
                format!(
                    "Text index {} has Z = {}: {} of {} pattern characters match",
                    offset, value, known, len
                ),
            );
            if value >= len {
                m.report(offset);
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
        let trace = ZAlgorithm::default().trace(&TraceConfig::default());
        assert_eq!(trace.last().state.matches, vec![0, 9, 12]);
    }

    #[test]
    fn z_values_of_small_input() {
        let trace = ZAlgorithm::new("aab", "a").trace(&TraceConfig::default());
        let z = &trace.last().state.tables[0];
        assert_eq!(z.keys, vec!["a", "$", "a", "a", "b"]);
        assert_eq!(
            z.values,
            vec![Some(0), Some(0), Some(1), Some(1), Some(0)]
        );
        assert_eq!(trace.last().state.matches, vec![0, 1]);
    }

    #[test]
    fn agrees_with_direct_search() {
        for (text, pattern) in [("aaaa", "aa"), ("abababab", "aba"), ("xyz", "q")] {
            let trace = ZAlgorithm::new(text, pattern).trace(&TraceConfig::default());
            assert_eq!(trace.last().state.matches, occurrences(text, pattern));
        }
    }
}
