// Longest increasing subsequence (quadratic DP)

use super::{index_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

#[derive(Debug, Clone)]
pub struct LongestIncreasingSubsequence {
    pub sequence: Vec<i64>,
}

impl Default for LongestIncreasingSubsequence {
    fn default() -> Self {
        LongestIncreasingSubsequence {
            sequence: vec![10, 9, 2, 5, 3, 7, 101, 18],
        }
    }
}

impl Algorithm for LongestIncreasingSubsequence {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "lis",
            name: "Longest Increasing Subsequence",
            family: Family::DynamicProgramming,
            complexity: "O(n^2)",
        }
    }

    fn initial_state(&self) -> TableState {
        TableState::new(vec!["LIS".to_string()], index_labels(self.sequence.len()))
            .with_input("sequence", self.sequence.clone())
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        let seq = match initial.input("sequence") {
            Some(s) if !s.is_empty() && initial.col_labels.len() == s.len() => s.to_vec(),
            _ => return Trace::invalid(initial.clone(), "sequence is empty"),
        };
        let n = seq.len();
        let mut f = Filler::start(
            initial,
            "Find the longest strictly increasing subsequence",
            config,
        );
        f.state.secondary = vec![vec![None; n]];
        f.state.secondary_name = "Previous index:".to_string();

        for i in 0..n {
            f.set((0, i), Some(1));
        }
        f.initialized("Every element on its own is an increasing subsequence of length 1");

        for i in 1..n {
            for j in 0..i {
                let (li, lj) = (f.get((0, i)).unwrap_or(1), f.get((0, j)).unwrap_or(1));
                if seq[j] < seq[i] && lj + 1 > li {
                    f.state.secondary[0][i] = Some(j as i64);
                    f.write(
                        (0, i),
                        Some(lj + 1),
                        vec![(0, j)],
                        format!(
                            "{} < {}: extend the run ending at index {}, LIS[{}] = {} + 1 = {}",
                            seq[j],
                            seq[i],
                            j,
                            i,
                            lj,
                            lj + 1
                        ),
                    );
                }
            }
        }

        let mut end = 0;
        for i in 1..n {
            if f.get((0, i)) > f.get((0, end)) {
                end = i;
            }
        }
        let length = f.get((0, end)).unwrap_or(1);
        f.state.result = Some(length);

        let mut picked = vec![seq[end]];
        f.state.solution = vec![seq[end].to_string()];
        f.visit((0, end), format!("The longest run ends at index {} ({})", end, seq[end]));
        let mut at = end;
        while let Some(prev) = f.state.secondary[0][at] {
            at = prev as usize;
            picked.insert(0, seq[at]);
            f.state.solution = picked.iter().map(|v| v.to_string()).collect();
            f.visit((0, at), format!("Follow the predecessor to index {} ({})", at, seq[at]));
        }

        let description = format!(
            "Longest increasing subsequence has length {}: {}",
            length,
            f.state.solution.join(", ")
        );
        f.finish(description, Outcome::Success)
    }
}
