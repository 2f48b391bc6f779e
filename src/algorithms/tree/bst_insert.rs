// Build a binary search tree by inserting values one at a time

use super::{TreeState, SAMPLE_VALUES};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
pub struct BstInsert {
    pub values: Vec<i64>,
}

impl Default for BstInsert {
    fn default() -> Self {
        BstInsert {
            values: SAMPLE_VALUES.to_vec(),
        }
    }
}

impl Algorithm for BstInsert {
    type State = TreeState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "bst-insert",
            name: "BST Insertion",
            family: Family::Tree,
            complexity: "O(h) per insert",
        }
    }

    fn initial_state(&self) -> TreeState {
        TreeState {
            pending: self.values.clone(),
            ..TreeState::default()
        }
    }

    fn generate_trace(&self, initial: &TreeState, config: &TraceConfig) -> Trace<TreeState> {
        if initial.pending.is_empty() {
            return Trace::invalid(initial.clone(), "no values to insert");
        }
        let mut state = initial.clone();
        let mut recorder = TraceRecorder::new(
            initial,
            format!("Insert {} value(s) into an empty tree", initial.pending.len()),
            config.max_steps,
        );

        let values = std::mem::take(&mut state.pending);
        for (k, &value) in values.iter().enumerate() {
            state.pending = values[k + 1..].to_vec();
            state.target = Some(value);
            state.current = None;

            let Some(mut at) = state.root else {
                let node = state.add_node(value);
                state.root = Some(node);
                state.current = Some(node);
                state.visited.push(node);
                recorder.record(&state, format!("Tree is empty: {} becomes the root", value));
                continue;
            };

            loop {
                state.current = Some(at);
                let here = state.value(at);
                let (side, next) = match value.cmp(&here) {
                    Ordering::Equal => {
                        recorder.record(
                            &state,
                            format!("{} is already in the tree: skip it", value),
                        );
                        break;
                    }
                    Ordering::Less => ("left", state.nodes[at].left),
                    Ordering::Greater => ("right", state.nodes[at].right),
                };
                let relation = if side == "left" { "<" } else { ">" };
                match next {
                    Some(child) => {
                        recorder.record(
                            &state,
                            format!("{} {} {}: go {}", value, relation, here, side),
                        );
                        at = child;
                    }
                    None => {
                        recorder.record(
                            &state,
                            format!(
                                "{} {} {} and the {} slot is free",
                                value, relation, here, side
                            ),
                        );
                        let node = state.add_node(value);
                        state.link(at, node);
                        state.current = Some(node);
                        state.visited.push(node);
                        recorder.record(
                            &state,
                            format!("Attach {} as the {} child of {}", value, side, here),
                        );
                        break;
                    }
                }
            }
        }

        state.current = None;
        state.target = None;
        let description = format!(
            "All values inserted: in-order reading is {}",
            crate::view::format::list(&state.sorted_values())
        );
        recorder.finish(&state, description, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_sample_tree() {
        let trace = BstInsert::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        let last = &trace.last().state;
        assert_eq!(last, &{
            let mut expected = TreeState::from_values(&SAMPLE_VALUES);
            expected.visited = (0..7).collect();
            expected
        });
        assert!(last.pending.is_empty());
    }

    #[test]
    fn each_comparison_and_link_is_a_step() {
        let trace = BstInsert { values: vec![2, 1] }.trace(&TraceConfig::default());
        let descriptions: Vec<&str> = trace.iter().map(|s| s.description.as_str()).collect();
        assert_eq!(
            descriptions[1..],
            [
                "Tree is empty: 2 becomes the root",
                "1 < 2 and the left slot is free",
                "Attach 1 as the left child of 2",
                "All values inserted: in-order reading is 1, 2",
            ]
        );
    }

    #[test]
    fn initial_step_shows_empty_tree() {
        let trace = BstInsert::default().trace(&TraceConfig::default());
        assert!(trace[0].state.nodes.is_empty());
        assert_eq!(trace[0].state.pending, SAMPLE_VALUES.to_vec());
    }
}
