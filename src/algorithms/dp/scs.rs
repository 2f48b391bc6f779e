// Shortest common supersequence with reconstruction

use super::lcs::label_chars;
use super::{prefix_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

#[derive(Debug, Clone)]
pub struct ShortestCommonSupersequence {
    pub first: String,
    pub second: String,
}

impl Default for ShortestCommonSupersequence {
    fn default() -> Self {
        ShortestCommonSupersequence {
            first: "AGGTAB".to_string(),
            second: "GXTXAYB".to_string(),
        }
    }
}

impl Algorithm for ShortestCommonSupersequence {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "scs",
            name: "Shortest Common Supersequence",
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
            "Find the shortest string containing both strings as subsequences",
            config,
        );

        for i in 0..=m {
            f.set((i, 0), Some(i as i64));
        }
        for j in 0..=n {
            f.set((0, j), Some(j as i64));
        }
        f.initialized(
            "Against an empty prefix the supersequence is the other prefix: \
             SCS[i][0] = i, SCS[0][j] = j",
        );

        for i in 1..=m {
            for j in 1..=n {
                if a[i - 1] == b[j - 1] {
                    let diag = f.get((i - 1, j - 1)).unwrap_or(0);
                    f.write(
                        (i, j),
                        Some(diag + 1),
                        vec![(i - 1, j - 1)],
                        format!(
                            "'{}' matches: SCS[{}][{}] = SCS[{}][{}] + 1 = {}",
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
                    let value = up.min(left) + 1;
                    f.write(
                        (i, j),
                        Some(value),
                        vec![(i - 1, j), (i, j - 1)],
                        format!(
                            "'{}' ≠ '{}': SCS[{}][{}] = min({}, {}) + 1 = {}",
                            a[i - 1],
                            b[j - 1],
                            i,
                            j,
                            up,
                            left,
                            value
                        ),
                    );
                }
            }
        }

        let length = f.get((m, n)).unwrap_or(0);
        f.state.result = Some(length);
        let (mut i, mut j) = (m, n);
        let mut built: Vec<char> = Vec::new();
        f.visit((i, j), format!("Start reconstruction at SCS[{}][{}] = {}", m, n, length));
        while i > 0 || j > 0 {
            let description = if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
                built.push(a[i - 1]);
                i -= 1;
                j -= 1;
                format!("'{}' is shared: take it once and move diagonally", built[built.len() - 1])
            } else if j == 0 || (i > 0 && f.get((i - 1, j)) <= f.get((i, j - 1))) {
                built.push(a[i - 1]);
                i -= 1;
                format!("Take '{}' from the first string and move up", a[i])
            } else {
                built.push(b[j - 1]);
                j -= 1;
                format!("Take '{}' from the second string and move left", b[j])
            };
            f.state.solution = built.iter().rev().map(|c| c.to_string()).collect();
            f.visit((i, j), description);
        }

        let scs: String = built.iter().rev().collect();
        f.finish(
            format!("Shortest common supersequence: \"{}\" (length {})", scs, length),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut chars = haystack.chars();
        needle.chars().all(|c| chars.any(|h| h == c))
    }

    #[test]
    fn classic_pair() {
        let scs = ShortestCommonSupersequence::default();
        let trace = scs.trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(9));
        let built = last.solution.concat();
        assert_eq!(built.len(), 9);
        assert!(is_subsequence(&scs.first, &built));
        assert!(is_subsequence(&scs.second, &built));
    }

    #[test]
    fn empty_second_string() {
        let scs = ShortestCommonSupersequence {
            first: "AB".to_string(),
            second: String::new(),
        };
        let trace = scs.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.solution.concat(), "AB");
    }
}
