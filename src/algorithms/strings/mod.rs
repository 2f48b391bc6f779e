//! String-matching family
//!
//! Matchers share [`MatchState`]: the text, the pattern, the current
//! alignment and per-character highlights. Lookup tables are built in a
//! labeled preprocessing phase before scanning starts; every character
//! comparison and every shift is its own step.

pub mod boyer_moore;
pub mod kmp;
pub mod naive;
pub mod rabin_karp;
pub mod z_algorithm;

pub use boyer_moore::BoyerMoore;
pub use kmp::KnuthMorrisPratt;
pub use naive::NaiveMatch;
pub use rabin_karp::RabinKarp;
pub use z_algorithm::ZAlgorithm;

use crate::engine::TraceConfig;
use crate::snapshot::{Annotation, Outcome, Trace, TraceRecorder};
use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;

/// Text and pattern used by every matcher by default
pub const SAMPLE_TEXT: &str = "AABAACAADAABAABA";
pub const SAMPLE_PATTERN: &str = "AABA";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Setup,
    Preprocess,
    Scan,
    Done,
}

impl MatchPhase {
    pub fn title(self) -> &'static str {
        match self {
            MatchPhase::Setup => "Setup",
            MatchPhase::Preprocess => "Preprocessing",
            MatchPhase::Scan => "Scanning",
            MatchPhase::Done => "Done",
        }
    }
}

/// A precomputed lookup table, one value per key
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LookupTable {
    pub name: String,
    pub keys: Vec<String>,
    pub values: Vec<Option<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchState {
    pub phase: MatchPhase,
    pub text: Vec<char>,
    pub pattern: Vec<char>,
    /// Text index the pattern is currently aligned at
    pub offset: Option<usize>,
    /// `(text index, pattern index)` being compared
    pub compare: Option<(usize, usize)>,
    /// Text indices matched at the current alignment
    pub matched: Vec<usize>,
    pub mismatched: Vec<usize>,
    /// Offsets of complete occurrences found so far
    pub matches: Vec<usize>,
    pub tables: Vec<LookupTable>,
    /// `(table, entry)` written most recently
    pub table_cell: Option<(usize, usize)>,
    pub shift: Option<usize>,
    /// Rule that produced `shift`
    pub shift_rule: Option<String>,
    pub pattern_hash: Option<i64>,
    pub window_hash: Option<i64>,
    pub comparisons: usize,
}

impl MatchState {
    pub fn new(text: &str, pattern: &str) -> Self {
        MatchState {
            text: text.chars().collect(),
            pattern: pattern.chars().collect(),
            ..MatchState::default()
        }
    }

    pub fn text_string(&self) -> String {
        self.text.iter().collect()
    }

    pub fn pattern_string(&self) -> String {
        self.pattern.iter().collect()
    }

    fn text_mark(&self, i: usize) -> Mark {
        if self.compare.is_some_and(|(t, _)| t == i) {
            Mark::Active
        } else if self.mismatched.contains(&i) {
            Mark::Alert
        } else if self.matched.contains(&i) {
            Mark::Compare
        } else if self
            .matches
            .iter()
            .any(|&m| i >= m && i < m + self.pattern.len())
        {
            Mark::Done
        } else {
            Mark::Plain
        }
    }

    fn pattern_row(&self) -> Row {
        let mut row = Row::labeled("Pattern:");
        let offset = self.offset.unwrap_or(0);
        for _ in 0..offset {
            row.push(" ", Mark::Muted);
        }
        for (j, c) in self.pattern.iter().enumerate() {
            let mark = match self.compare {
                Some((_, p)) if p == j => Mark::Active,
                _ if self.mismatched.contains(&(offset + j)) => Mark::Alert,
                _ if self.matched.contains(&(offset + j)) => Mark::Compare,
                _ => Mark::Plain,
            };
            row.push(c.to_string(), mark);
        }
        row
    }
}

impl Visualize for MatchState {
    fn view(&self) -> Vec<Row> {
        let mut rows = vec![
            Row::labeled("Phase:").cell(self.phase.title(), Mark::Active),
            format::index_row("Index:", self.text.len()),
            format::marked_row("Text:", &self.text, |i| self.text_mark(i)),
            self.pattern_row(),
        ];
        for (t, table) in self.tables.iter().enumerate() {
            let mut keys = Row::labeled(format!("{}:", table.name));
            let mut values = Row::labeled("");
            for (k, (key, value)) in table.keys.iter().zip(&table.values).enumerate() {
                let mark = if self.table_cell == Some((t, k)) {
                    Mark::Active
                } else {
                    Mark::Plain
                };
                keys.push(key.clone(), Mark::Label);
                values.push(format::optional(*value), mark);
            }
            rows.push(keys);
            rows.push(values);
        }
        if let (Some(shift), Some(rule)) = (self.shift, &self.shift_rule) {
            rows.push(Row::labeled("Shift:").cell(format!("{} ({})", shift, rule), Mark::Compare));
        }
        if let Some(hash) = self.pattern_hash {
            rows.push(
                Row::labeled("Hash:")
                    .cell(format!("pattern {}", hash), Mark::Plain)
                    .cell(format!("window {}", format::optional(self.window_hash)), Mark::Plain),
            );
        }
        rows.push(
            Row::labeled("Matches:")
                .cell(format::list(&self.matches), Mark::Done)
                .cell("comparisons:", Mark::Label)
                .cell(self.comparisons.to_string(), Mark::Plain),
        );
        rows
    }
}

/// Working state plus recorder for one matching run
pub(crate) struct Matcher {
    pub state: MatchState,
    recorder: TraceRecorder<MatchState>,
}

impl Matcher {
    /// Start a run. An empty pattern is invalid; a pattern longer than the
    /// text cannot occur and ends the trace at once.
    pub fn start(
        initial: &MatchState,
        description: impl Into<String>,
        config: &TraceConfig,
    ) -> Result<Matcher, Trace<MatchState>> {
        if initial.pattern.is_empty() {
            return Err(Trace::invalid(initial.clone(), "pattern is empty"));
        }
        let recorder = TraceRecorder::new(initial, description, config.max_steps);
        let state = MatchState::new(&initial.text_string(), &initial.pattern_string());
        if initial.pattern.len() > initial.text.len() {
            let description = format!(
                "Pattern of length {} cannot occur in a text of length {}",
                initial.pattern.len(),
                initial.text.len()
            );
            let outcome = Outcome::Failure("pattern is longer than text".to_string());
            return Err(recorder.finish(&state, description, outcome));
        }
        Ok(Matcher { state, recorder })
    }

    pub fn text_len(&self) -> usize {
        self.state.text.len()
    }

    pub fn pattern_len(&self) -> usize {
        self.state.pattern.len()
    }

    pub fn text_at(&self, i: usize) -> char {
        self.state.text[i]
    }

    pub fn pattern_at(&self, j: usize) -> char {
        self.state.pattern[j]
    }

    pub fn record(&mut self, description: impl Into<String>) {
        let annotation = Annotation::titled(self.state.phase.title());
        self.recorder.record_with(&self.state, description, annotation);
    }

    pub fn record_noted(&mut self, description: impl Into<String>, note: impl Into<String>) {
        let annotation = Annotation::titled(self.state.phase.title()).with_note(note);
        self.recorder.record_with(&self.state, description, annotation);
    }

    /// Add an empty table and return its index
    pub fn add_table(&mut self, name: &str, keys: Vec<String>) -> usize {
        let values = vec![None; keys.len()];
        self.state.tables.push(LookupTable {
            name: name.to_string(),
            keys,
            values,
        });
        self.state.tables.len() - 1
    }

    pub fn table_value(&self, table: usize, entry: usize) -> Option<i64> {
        self.state.tables[table].values[entry]
    }

    /// Write one table entry as a preprocessing step
    pub fn set_entry(
        &mut self,
        table: usize,
        entry: usize,
        value: i64,
        description: impl Into<String>,
    ) {
        self.state.phase = MatchPhase::Preprocess;
        self.state.tables[table].values[entry] = Some(value);
        self.state.table_cell = Some((table, entry));
        self.record(description);
    }

    /// Move the pattern to `offset`, clearing the previous alignment
    pub fn align(&mut self, offset: usize, description: impl Into<String>) {
        self.align_known(offset, 0, description);
    }

    /// Move the pattern to `offset` with its first `known` characters
    /// already known to match
    pub fn align_known(&mut self, offset: usize, known: usize, description: impl Into<String>) {
        self.state.phase = MatchPhase::Scan;
        self.state.table_cell = None;
        self.state.offset = Some(offset);
        self.state.compare = None;
        self.state.matched = (offset..offset + known).collect();
        self.state.mismatched.clear();
        self.record(description);
    }

    /// Compare `text[t]` with `pattern[p]` as its own step
    pub fn compare(&mut self, t: usize, p: usize) -> bool {
        self.state.phase = MatchPhase::Scan;
        self.state.compare = Some((t, p));
        self.state.comparisons += 1;
        let (a, b) = (self.text_at(t), self.pattern_at(p));
        let equal = a == b;
        if equal {
            self.state.matched.push(t);
        } else {
            self.state.mismatched.push(t);
        }
        let verdict = if equal { "match" } else { "mismatch" };
        self.record(format!(
            "Compare text[{}] = '{}' with pattern[{}] = '{}': {}",
            t, a, p, b, verdict
        ));
        equal
    }

    /// Record a complete occurrence at `offset`
    pub fn report(&mut self, offset: usize) {
        self.state.compare = None;
        if !self.state.matches.contains(&offset) {
            self.state.matches.push(offset);
        }
        self.record(format!("Pattern found at index {}", offset));
    }

    /// Record the chosen shift and the rule that produced it
    pub fn shift(&mut self, by: usize, rule: &str, description: impl Into<String>) {
        self.state.shift = Some(by);
        self.state.shift_rule = Some(rule.to_string());
        self.state.compare = None;
        self.record_noted(description, rule);
    }

    /// Terminal step: success when at least one occurrence was found
    pub fn finish(mut self) -> Trace<MatchState> {
        self.state.phase = MatchPhase::Done;
        self.state.compare = None;
        self.state.table_cell = None;
        self.state.matched.clear();
        self.state.mismatched.clear();
        let (description, outcome) = if self.state.matches.is_empty() {
            (
                format!(
                    "Scan complete: pattern does not occur ({} comparisons)",
                    self.state.comparisons
                ),
                Outcome::Failure("pattern not found".to_string()),
            )
        } else {
            (
                format!(
                    "Scan complete: {} occurrence(s) at index {} ({} comparisons)",
                    self.state.matches.len(),
                    format::list(&self.state.matches),
                    self.state.comparisons
                ),
                Outcome::Success,
            )
        };
        let annotation = Annotation::titled(self.state.phase.title());
        self.recorder
            .finish_with(&self.state, description, annotation, outcome)
    }
}

/// One key per pattern character
pub(crate) fn char_keys(chars: &[char]) -> Vec<String> {
    chars.iter().map(|c| c.to_string()).collect()
}

/// Every occurrence of `pattern` in `text`, by direct comparison
#[cfg(test)]
pub(crate) fn occurrences(text: &str, pattern: &str) -> Vec<usize> {
    let (t, p): (Vec<char>, Vec<char>) = (text.chars().collect(), pattern.chars().collect());
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    (0..=t.len() - p.len())
        .filter(|&s| t[s..s + p.len()] == p[..])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pattern_is_invalid() {
        let initial = MatchState::new("abc", "");
        match Matcher::start(&initial, "start", &TraceConfig::default()) {
            Ok(_) => panic!("empty pattern accepted"),
            Err(trace) => {
                assert_eq!(trace.len(), 1);
                assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
            }
        }
    }

    #[test]
    fn long_pattern_fails_immediately() {
        let initial = MatchState::new("ab", "abc");
        match Matcher::start(&initial, "start", &TraceConfig::default()) {
            Ok(_) => panic!("long pattern accepted"),
            Err(trace) => {
                assert_eq!(trace.len(), 2);
                assert_eq!(
                    trace.outcome(),
                    &Outcome::Failure("pattern is longer than text".to_string())
                );
            }
        }
    }

    #[test]
    fn compare_highlights_both_sequences() {
        let initial = MatchState::new("abc", "bc");
        let mut matcher = Matcher::start(&initial, "start", &TraceConfig::default())
            .unwrap_or_else(|_| panic!("rejected"));
        matcher.align(1, "align");
        assert!(matcher.compare(1, 0));
        assert!(matcher.state.matched.contains(&1));
        let rows = matcher.state.view();
        assert_eq!(rows[2].to_string(), "Text: a [b] c");
        assert_eq!(rows[3].to_string(), "Pattern:   [b] c");
    }

    #[test]
    fn reference_occurrences() {
        assert_eq!(occurrences(SAMPLE_TEXT, SAMPLE_PATTERN), vec![0, 9, 12]);
        assert_eq!(occurrences("aaaa", "aa"), vec![0, 1, 2]);
    }
}
