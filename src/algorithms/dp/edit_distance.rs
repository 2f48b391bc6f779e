// Levenshtein edit distance with the edit script

use super::lcs::label_chars;
use super::{prefix_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

#[derive(Debug, Clone)]
pub struct EditDistance {
    pub source: String,
    pub target: String,
}

impl Default for EditDistance {
    fn default() -> Self {
        EditDistance {
            source: "kitten".to_string(),
            target: "sitting".to_string(),
        }
    }
}

impl Algorithm for EditDistance {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "edit-distance",
            name: "Edit Distance",
            family: Family::DynamicProgramming,
            complexity: "O(m n)",
        }
    }

    fn initial_state(&self) -> TableState {
        TableState::new(prefix_labels(&self.source), prefix_labels(&self.target))
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        if initial.row_labels.is_empty() || initial.col_labels.is_empty() {
            return Trace::invalid(initial.clone(), "table has no cells");
        }
        let a = label_chars(&initial.row_labels);
        let b = label_chars(&initial.col_labels);
        let (m, n) = (a.len(), b.len());
        let mut f = Filler::start(
            initial,
            "Count the fewest insertions, deletions and substitutions",
            config,
        );

        for i in 0..=m {
            f.set((i, 0), Some(i as i64));
        }
        for j in 0..=n {
            f.set((0, j), Some(j as i64));
        }
        f.initialized("Turning a prefix into the empty string (or back) costs its length");

        for i in 1..=m {
            for j in 1..=n {
                let diag = f.get((i - 1, j - 1)).unwrap_or(0);
                if a[i - 1] == b[j - 1] {
                    f.write(
                        (i, j),
                        Some(diag),
                        vec![(i - 1, j - 1)],
                        format!("'{}' = '{}': no edit, copy {}", a[i - 1], b[j - 1], diag),
                    );
                    continue;
                }
                let up = f.get((i - 1, j)).unwrap_or(0);
                let left = f.get((i, j - 1)).unwrap_or(0);
                let value = 1 + diag.min(up).min(left);
                f.write(
                    (i, j),
                    Some(value),
                    vec![(i - 1, j - 1), (i - 1, j), (i, j - 1)],
                    format!(
                        "'{}' ≠ '{}': 1 + min(substitute {}, delete {}, insert {}) = {}",
                        a[i - 1],
                        b[j - 1],
                        diag,
                        up,
                        left,
                        value
                    ),
                );
            }
        }

        let distance = f.get((m, n)).unwrap_or(0);
        f.state.result = Some(distance);
        let (mut i, mut j) = (m, n);
        let mut script: Vec<String> = Vec::new();
        f.visit((i, j), format!("Walk back from the answer {}", distance));
        while i > 0 || j > 0 {
            let here = f.get((i, j)).unwrap_or(0);
            let (op, note) = if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                i -= 1;
                j -= 1;
                (None, format!("keep '{}'", a[i]))
            } else if i > 0 && j > 0 && f.get((i - 1, j - 1)) == Some(here - 1) {
                i -= 1;
                j -= 1;
                let op = format!("{}→{}", a[i], b[j]);
                (Some(op.clone()), format!("substitute {}", op))
            } else if i > 0 && f.get((i - 1, j)) == Some(here - 1) {
                i -= 1;
                (Some(format!("-{}", a[i])), format!("delete '{}'", a[i]))
            } else {
                j -= 1;
                (Some(format!("+{}", b[j])), format!("insert '{}'", b[j]))
            };
            if let Some(op) = op {
                script.insert(0, op);
                f.state.solution = script.clone();
            }
            f.visit((i, j), note);
        }

        f.finish(
            format!("Edit distance is {}: {}", distance, script.join(", ")),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kitten_to_sitting() {
        let trace = EditDistance::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(3));
        assert_eq!(last.solution.len(), 3);
    }

    #[test]
    fn identical_strings_need_no_edits() {
        let ed = EditDistance {
            source: "abc".to_string(),
            target: "abc".to_string(),
        };
        let trace = ed.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.result, Some(0));
        assert!(trace.last().state.solution.is_empty());
    }

    #[test]
    fn empty_source_inserts_everything() {
        let ed = EditDistance {
            source: String::new(),
            target: "ab".to_string(),
        };
        let trace = ed.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.solution, vec!["+a".to_string(), "+b".to_string()]);
    }
}
