// Longest common subsequence with reconstruction

use super::{prefix_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

#[derive(Debug, Clone)]
pub struct LongestCommonSubsequence {
    pub first: String,
    pub second: String,
}

impl Default for LongestCommonSubsequence {
    fn default() -> Self {
        LongestCommonSubsequence {
            first: "ABCBDAB".to_string(),
            second: "BDCABA".to_string(),
        }
    }
}

/// Characters of the strings encoded in the table labels (skipping `ε`)
pub(crate) fn label_chars(labels: &[String]) -> Vec<char> {
    labels
        .iter()
        .skip(1)
        .filter_map(|l| l.chars().next())
        .collect()
}

impl Algorithm for LongestCommonSubsequence {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "lcs",
            name: "Longest Common Subsequence",
            family: Family::DynamicProgramming,
            complexity: "O(m n)",
        }
    }

    fn initial_state(&self) -> TableState {
        TableState::new(prefix_labels(&self.first), prefix_labels(&self.second))
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
            "Find the longest subsequence common to both strings",
            config,
        );

        for i in 0..=m {
            f.set((i, 0), Some(0));
        }
        for j in 0..=n {
            f.set((0, j), Some(0));
        }
        f.initialized("An empty prefix shares nothing: row 0 and column 0 are 0");

        for i in 1..=m {
            for j in 1..=n {
                if a[i - 1] == b[j - 1] {
                    let diag = f.get((i - 1, j - 1)).unwrap_or(0);
                    f.write(
                        (i, j),
                        Some(diag + 1),
                        vec![(i - 1, j - 1)],
                        format!(
                            "'{}' matches: LCS[{}][{}] = LCS[{}][{}] + 1 = {}",
                            a[i - 1],
                            i,
                            j,
                            i - 1,
                            j - 1,
                            diag + 1
                        ),
                    );
                } else {
                    let up = f.get((i - 1, j)).unwrap_or(0);
                    let left = f.get((i, j - 1)).unwrap_or(0);
                    f.write(
                        (i, j),
                        Some(up.max(left)),
                        vec![(i - 1, j), (i, j - 1)],
                        format!(
                            "'{}' ≠ '{}': LCS[{}][{}] = max({}, {}) = {}",
                            a[i - 1],
                            b[j - 1],
                            i,
                            j,
                            up,
                            left,
                            up.max(left)
                        ),
                    );
                }
            }
        }

        let length = f.get((m, n)).unwrap_or(0);
        f.state.result = Some(length);
        let (mut i, mut j) = (m, n);
        let mut picked = Vec::new();
        f.visit((i, j), format!("Start reconstruction at LCS[{}][{}] = {}", m, n, length));
        while i > 0 && j > 0 {
            if a[i - 1] == b[j - 1] {
                picked.push(a[i - 1]);
                i -= 1;
                j -= 1;
                f.state.solution = picked.iter().rev().map(|c| c.to_string()).collect();
                f.visit((i, j), format!("'{}' is part of the LCS: move diagonally", a[i]));
            } else if f.get((i - 1, j)) >= f.get((i, j - 1)) {
                i -= 1;
                f.visit((i, j), "Move up to the larger neighbour");
            } else {
                j -= 1;
                f.visit((i, j), "Move left to the larger neighbour");
            }
        }

        let lcs: String = picked.iter().rev().collect();
        f.finish(
            format!("Longest common subsequence: \"{}\" (length {})", lcs, length),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_pair_has_length_four() {
        let trace = LongestCommonSubsequence::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(4));
        assert_eq!(last.solution.len(), 4);
        assert_eq!(last.solution.concat(), "BCBA");
    }

    #[test]
    fn every_cell_write_is_a_step() {
        let lcs = LongestCommonSubsequence {
            first: "AB".to_string(),
            second: "B".to_string(),
        };
        let trace = lcs.trace(&TraceConfig::default());
        let writes = trace
            .iter()
            .filter(|s| s.annotation.title.as_deref() == Some("Fill"))
            .count();
        assert_eq!(writes, 2);
    }

    #[test]
    fn disjoint_strings_share_nothing() {
        let lcs = LongestCommonSubsequence {
            first: "ABC".to_string(),
            second: "XYZ".to_string(),
        };
        let trace = lcs.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.result, Some(0));
        assert!(trace.last().state.solution.is_empty());
    }
}
