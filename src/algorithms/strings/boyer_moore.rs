// Boyer-Moore matching with bad-character and strong good-suffix rules

use super::{Matcher, MatchState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::Trace;

#[derive(Debug, Clone)]
pub struct BoyerMoore {
    pub text: String,
    pub pattern: String,
}

impl BoyerMoore {
    pub fn new(text: impl Into<String>, pattern: impl Into<String>) -> Self {
        BoyerMoore {
            text: text.into(),
            pattern: pattern.into(),
        }
    }
}

impl Default for BoyerMoore {
    fn default() -> Self {
        BoyerMoore::new("GCATCGCAGAGAGTATACAGTACG", "GCAGAGAG")
    }
}

/// Last index of every pattern character
struct BadCharacter {
    table: usize,
    alphabet: Vec<char>,
}

impl BadCharacter {
    fn build(m: &mut Matcher) -> Self {
        let mut alphabet: Vec<char> = Vec::new();
        for &c in &m.state.pattern {
            if !alphabet.contains(&c) {
                alphabet.push(c);
            }
        }
        let keys = alphabet.iter().map(|c| c.to_string()).collect();
        let table = m.add_table("Last occurrence", keys);
        for i in 0..m.pattern_len() {
            let c = m.pattern_at(i);
            if let Some(k) = alphabet.iter().position(|&a| a == c) {
                m.set_entry(
                    table,
                    k,
                    i as i64,
                    format!("'{}' occurs at pattern index {}: last['{}'] = {}", c, i, c, i),
                );
            }
        }
        BadCharacter { table, alphabet }
    }

    /// Last index of `c` in the pattern, -1 when absent
    fn last(&self, m: &Matcher, c: char) -> i64 {
        self.alphabet
            .iter()
            .position(|&a| a == c)
            .and_then(|k| m.table_value(self.table, k))
            .unwrap_or(-1)
    }
}

/// Strong good-suffix shifts, indexed by the position after the mismatch
fn build_good_suffix(m: &mut Matcher) -> Vec<usize> {
    let len = m.pattern_len();
    let keys = (0..=len).map(|i| i.to_string()).collect();
    let table = m.add_table("Good suffix", keys);
    let mut shift = vec![0usize; len + 1];
    let mut border = vec![0usize; len + 1];

    // Suffixes whose border is preceded by a different character
    let (mut i, mut j) = (len, len + 1);
    border[i] = j;
    while i > 0 {
        while j <= len && m.pattern_at(i - 1) != m.pattern_at(j - 1) {
            if shift[j] == 0 {
                shift[j] = j - i;
                m.set_entry(
                    table,
                    j,
                    shift[j] as i64,
                    format!(
                        "Suffix from {} reoccurs after a different character: shift[{}] = {}",
                        j,
                        j,
                        j - i
                    ),
                );
            }
            j = border[j];
        }
        i -= 1;
        j -= 1;
        border[i] = j;
    }

    // Remaining entries fall back to the widest border of the whole pattern
    let mut widest = border[0];
    for i in 0..=len {
        if shift[i] == 0 {
            shift[i] = widest;
            m.set_entry(
                table,
                i,
                widest as i64,
                format!(
                    "No reoccurring suffix at {}: shift to the widest border, shift[{}] = {}",
                    i, i, widest
                ),
            );
        }
        if i == widest {
            widest = border[widest];
        }
    }
    shift
}

impl Algorithm for BoyerMoore {
    type State = MatchState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "boyer-moore",
            name: "Boyer-Moore",
            family: Family::StringMatching,
            complexity: "O(n m) worst, sublinear typical",
        }
    }

    fn initial_state(&self) -> MatchState {
        MatchState::new(&self.text, &self.pattern)
    }

    fn generate_trace(&self, initial: &MatchState, config: &TraceConfig) -> Trace<MatchState> {
        let mut m = match Matcher::start(
            initial,
            "Build the bad-character and good-suffix tables, then compare right to left",
            config,
        ) {
            Ok(m) => m,
            Err(trace) => return trace,
        };
        let bad = BadCharacter::build(&mut m);
        let good = build_good_suffix(&mut m);
        let (n, len) = (m.text_len(), m.pattern_len());

        let mut offset = 0;
        while offset <= n - len {
            m.align(offset, format!("Align the pattern at index {}", offset));
            let mut j = len;
            while j > 0 && m.compare(offset + j - 1, j - 1) {
                j -= 1;
            }

            let (by, rule, description) = if j == 0 {
                m.report(offset);
                let by = good[0].max(1);
                (
                    by,
                    "good suffix",
                    format!("Full match: shift by the widest border rule, {}", by),
                )
            } else {
                let miss = j - 1;
                let c = m.text_at(offset + miss);
                let bad_shift = miss as i64 - bad.last(&m, c);
                let good_shift = good[j] as i64;
                let by = bad_shift.max(good_shift).max(1) as usize;
                let rule = if bad_shift >= good_shift && bad_shift >= 1 {
                    "bad character"
                } else if good_shift >= 1 {
                    "good suffix"
                } else {
                    "minimum shift"
                };
                (
                    by,
                    rule,
                    format!(
                        "Mismatch on '{}': bad character suggests {}, \
                         good suffix suggests {}; shift by {}",
                        c, bad_shift, good_shift, by
                    ),
                )
            };
            m.shift(by, rule, description);
            offset += by;
        }
        m.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::super::occurrences;
    use super::*;

    #[test]
    fn sample_match_and_tables() {
        let trace = BoyerMoore::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.matches, vec![5]);
        let good: Vec<i64> = last.tables[1].values.iter().flatten().copied().collect();
        assert_eq!(good, vec![7, 7, 7, 7, 2, 7, 4, 7, 1]);
        let keys: Vec<&str> = last.tables[0].keys.iter().map(String::as_str).collect();
        assert_eq!(keys, vec!["G", "C", "A"]);
        assert_eq!(last.tables[0].values, vec![Some(7), Some(1), Some(6)]);
    }

    #[test]
    fn shifts_name_their_rule() {
        let trace = BoyerMoore::default().trace(&TraceConfig::default());
        let notes: Vec<&str> = trace
            .iter()
            .filter(|s| s.description.contains("shift by"))
            .filter_map(|s| s.annotation.note.as_deref())
            .collect();
        assert!(notes.contains(&"bad character"));
        assert!(notes.contains(&"good suffix"));
        assert!(trace.iter().all(|s| s.state.shift.map_or(true, |by| by >= 1)));
    }

    #[test]
    fn agrees_with_direct_search() {
        for (text, pattern) in [
            ("AABAACAADAABAABA", "AABA"),
            ("aaaa", "aa"),
            ("abababab", "abab"),
            ("abcabcabd", "abcabd"),
            ("hello world", "xyz"),
            ("abbabbabba", "bba"),
        ] {
            let trace = BoyerMoore::new(text, pattern).trace(&TraceConfig::default());
            assert_eq!(
                trace.last().state.matches,
                occurrences(text, pattern),
                "{} / {}",
                text,
                pattern
            );
        }
    }
}
