// Breadth-first (level-order) traversal with a visible queue

use super::{TreeState, SAMPLE_VALUES};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::format;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct LevelOrder {
    pub values: Vec<i64>,
}

impl Default for LevelOrder {
    fn default() -> Self {
        LevelOrder {
            values: SAMPLE_VALUES.to_vec(),
        }
    }
}

impl Algorithm for LevelOrder {
    type State = TreeState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "level-order-traversal",
            name: "Level-order Traversal",
            family: Family::Tree,
            complexity: "O(n)",
        }
    }

    fn initial_state(&self) -> TreeState {
        TreeState::from_values(&self.values)
    }

    fn generate_trace(&self, initial: &TreeState, config: &TraceConfig) -> Trace<TreeState> {
        let Some(root) = initial.root else {
            return Trace::invalid(initial.clone(), "tree is empty");
        };
        let mut state = initial.clone();
        let mut recorder =
            TraceRecorder::new(initial, "Traverse the tree level by level", config.max_steps);

        let mut queue = VecDeque::from([root]);
        state.queue = queue.iter().copied().collect();
        recorder.record(&state, format!("Enqueue the root {}", state.value(root)));

        while let Some(node) = queue.pop_front() {
            let value = state.value(node);
            state.current = Some(node);
            state.visited.push(node);
            state.output.push(value);
            state.queue = queue.iter().copied().collect();
            recorder.record(
                &state,
                format!(
                    "Dequeue and visit {}: output is now {}",
                    value,
                    format::list(&state.output)
                ),
            );

            let children: Vec<usize> = [state.nodes[node].left, state.nodes[node].right]
                .into_iter()
                .flatten()
                .collect();
            if children.is_empty() {
                continue;
            }
            queue.extend(&children);
            state.queue = queue.iter().copied().collect();
            let names: Vec<i64> = children.iter().map(|&c| state.value(c)).collect();
            recorder.record(
                &state,
                format!(
                    "Enqueue the children of {}: {}",
                    value,
                    format::list(&names)
                ),
            );
        }

        state.current = None;
        let description = format!(
            "Queue is empty: level-order output {}",
            format::list(&state.output)
        );
        recorder.finish(&state, description, Outcome::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_level_order() {
        let trace = LevelOrder::default().trace(&TraceConfig::default());
        assert!(trace.outcome().is_success());
        assert_eq!(
            trace.last().state.output,
            vec![50, 30, 70, 20, 40, 60, 80]
        );
        assert!(trace.last().state.queue.is_empty());
    }

    #[test]
    fn queue_contents_are_recorded() {
        let trace = LevelOrder::default().trace(&TraceConfig::default());
        let after_root_children = trace
            .iter()
            .find(|s| s.description.starts_with("Enqueue the children of 50"))
            .map(|s| {
                s.state
                    .queue
                    .iter()
                    .map(|&n| s.state.value(n))
                    .collect::<Vec<_>>()
            });
        assert_eq!(after_root_children, Some(vec![30, 70]));
    }
}
