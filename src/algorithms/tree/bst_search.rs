// Binary search tree lookup

use super::{TreeState, SAMPLE_VALUES};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct BstSearch {
    pub values: Vec<i64>,
    pub target: i64,
}

impl Default for BstSearch {
    fn default() -> Self {
        BstSearch {
            values: SAMPLE_VALUES.to_vec(),
            target: 60,
        }
    }
}

impl Algorithm for BstSearch {
    type State = TreeState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "bst-search",
            name: "BST Search",
            family: Family::Tree,
            complexity: "O(h)",
        }
    }

    fn initial_state(&self) -> TreeState {
        TreeState {
            target: Some(self.target),
            ..TreeState::from_values(&self.values)
        }
    }

    fn generate_trace(&self, initial: &TreeState, config: &TraceConfig) -> Trace<TreeState> {
        let Some(target) = initial.target else {
            return Trace::invalid(initial.clone(), "no target to search for");
        };
        let mut state = initial.clone();
        let mut recorder = TraceRecorder::new(
            initial,
            format!("Search the tree for {}", target),
            config.max_steps,
        );

        let mut at = state.root;
        while let Some(node) = at {
            state.current = Some(node);
            state.visited.push(node);
            let here = state.value(node);
            match target.cmp(&here) {
                Ordering::Equal => {
                    state.found = Some(node);
                    let description = format!(
                        "{} equals the target: found after {} node(s)",
                        here,
                        state.visited.len()
                    );
                    return recorder.finish(&state, description, Outcome::Success);
                }
                Ordering::Less => {
                    recorder.record(&state, format!("{} < {}: go left", target, here));
                    at = state.nodes[node].left;
                }
                Ordering::Greater => {
                    recorder.record(&state, format!("{} > {}: go right", target, here));
                    at = state.nodes[node].right;
                }
            }
        }

        state.current = None;
        let description = match state.visited.last() {
            Some(&last) => format!(
                "Reached an empty child of {}: {} is not in the tree",
                state.value(last),
                target
            ),
            None => format!("Tree is empty: {} is not in the tree", target),
        };
        recorder.finish(
            &state,
            description,
            Outcome::Failure(format!("{} not found", target)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_sample_target() {
        let trace = BstSearch::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        let last = &trace.last().state;
        let path: Vec<i64> = last.visited.iter().map(|&n| last.value(n)).collect();
        assert_eq!(path, vec![50, 70, 60]);
        assert_eq!(last.found.map(|n| last.value(n)), Some(60));
        assert_eq!(trace.len(), 4);
    }

    #[test]
    fn missing_target_fails() {
        let search = BstSearch {
            target: 65,
            ..BstSearch::default()
        };
        let trace = search.trace(&TraceConfig::default());
        assert_eq!(trace.outcome(), &Outcome::Failure("65 not found".to_string()));
        assert!(trace.last().description.contains("empty child of 60"));
    }

    #[test]
    fn empty_tree_fails_without_comparisons() {
        let search = BstSearch {
            values: Vec::new(),
            target: 1,
        };
        let trace = search.trace(&TraceConfig::default());
        assert_eq!(trace.len(), 2);
        assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    }
}
