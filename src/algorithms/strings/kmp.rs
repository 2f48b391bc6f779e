// Knuth-Morris-Pratt matching with a prefix-function table

use super::{char_keys, Matcher, MatchState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::Trace;

#[derive(Debug, Clone)]
pub struct KnuthMorrisPratt {
    pub text: String,
    pub pattern: String,
}

impl KnuthMorrisPratt {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        KnuthMorrisPratt {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for KnuthMorrisPratt {
    fn default() -> Self {
        KnuthMorrisPratt::new("ABABDABACDABABCABAB", "ABABCABAB")
    }
}

/// Fill the longest-proper-prefix-suffix table, one step per entry
fn build_prefix_table(m: &mut Matcher) -> Vec<usize> {
    let len = m.pattern_len();
    let keys = char_keys(&m.state.pattern);
    let table = m.add_table("LPS", keys);
    let mut lps = vec![0usize; len];
    m.set_entry(table, 0, 0, "LPS[0] = 0: a single character has no proper border");

    let (mut border, mut i) = (0usize, 1usize);
    while i < len {
        let (a, b) = (m.pattern_at(i), m.pattern_at(border));
        if a == b {
            border += 1;
            lps[i] = border;
            m.set_entry(
                table,
                i,
                border as i64,
                format!(
                    "pattern[{}] = '{}' extends the border: LPS[{}] = {}",
                    i, a, i, border
                ),
            );
            i += 1;
        } else if border > 0 {
            let fallback = lps[border - 1];
            m.record(format!(
                "pattern[{}] = '{}' differs from pattern[{}] = '{}': fall back to border {}",
                i, a, border, b, fallback
            ));
            border = fallback;
        } else {
            lps[i] = 0;
            m.set_entry(
                table,
                i,
                0,
                format!("pattern[{}] = '{}' starts no border: LPS[{}] = 0", i, a, i),
            );
            i += 1;
        }
    }
    lps
}

impl Algorithm for KnuthMorrisPratt {
    type State = MatchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "kmp",
            name: "Knuth-Morris-Pratt",
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
            "Build the prefix function, then scan without re-reading matched text",
            config,
        ) {
            Ok(m) => m,
            Err(trace) => return trace,
        };
        let lps = build_prefix_table(&mut m);
        let (n, len) = (m.text_len(), m.pattern_len());

        let (mut i, mut j) = (0usize, 0usize);
        m.align(0, "Align the pattern at index 0");
        while i < n {
            if m.compare(i, j) {
                i += 1;
                j += 1;
                if j < len {
                    continue;
                }
                m.report(i - len);
                j = lps[len - 1];
                if i - j > n - len {
                    break;
                }
                m.shift(
                    len - j,
                    "prefix function",
                    format!("Reuse the border of length {}: shift by {}", j, len - j),
                );
            } else if j > 0 {
                let border = lps[j - 1];
                m.shift(
                    j - border,
                    "prefix function",
                    format!(
                        "LPS[{}] = {}: keep {} matched character(s), shift by {}",
                        j - 1,
                        border,
                        border,
                        j - border
                    ),
                );
                j = border;
            } else {
                i += 1;
                m.shift(1, "no border", "Nothing matched at this alignment: shift by 1");
            }
            if i - j > n - len {
                break;
            }
            m.align_known(
                i - j,
                j,
                format!("Align the pattern at index {} with {} known match(es)", i - j, j),
            );
        }
        m.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::occurrences;
    use super::*;

    #[test]
    fn prefix_table_of_sample() {
        let trace = KnuthMorrisPratt::default().trace(&TraceConfig::default());
        let table = &trace.last().state.tables[0];
        let values: Vec<i64> = table.values.iter().flatten().copied().collect();
        assert_eq!(values, vec![0, 0, 1, 2, 0, 1, 2, 3, 4]);
        assert_eq!(trace.last().state.matches, vec![10]);
    }

    #[test]
    fn table_is_built_before_scanning() {
        let trace = KnuthMorrisPratt::default().trace(&TraceConfig::default());
        let first_scan = trace
            .iter()
            .position(|s| s.annotation.title.as_deref() == Some("Scanning"))
            .unwrap();
        assert!(trace.steps()[..first_scan]
            .iter()
            .skip(1)
            .all(|s| s.annotation.title.as_deref() == Some("Preprocessing")));
        assert!(trace[first_scan - 1]
            .state
            .tables[0]
            .values
            .iter()
            .all(Option::is_some));
    }

    #[test]
    fn agrees_with_direct_search() {
        for (text, pattern) in [
            ("aaaa", "aa"),
            ("abababab", "abab"),
            ("abcabcabd", "abcabd"),
            ("xyz", "q"),
            ("aabaabaaa", "aabaaa"),
        ] {
            let trace = KnuthMorrisPratt::new(text, pattern).trace(&TraceConfig::default());
            assert_eq!(
                trace.last().state.matches,
                occurrences(text, pattern),
                "{} / {}",
                text,
                pattern
            );
        }
    }

    #[test]
    fn each_text_character_is_read_a_bounded_number_of_times() {
        let text = "aaaaaaaaab";
        let trace = KnuthMorrisPratt::new(text, "aaab").trace(&TraceConfig::default());
        assert!(trace.last().state.comparisons <= 2 * text.len());
    }
}
