// Depth-first traversals: in-order, pre-order, post-order

use super::{TreeState, SAMPLE_VALUES};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace, TraceRecorder};
use crate::view::format;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    /// Left, node, right
    InOrder,
    /// Node, left, right
    PreOrder,
    /// Left, right, node
    PostOrder,
}

impl Order {
    pub fn name(self) -> &'static str {
        match self {
            Order::InOrder => "in-order",
            Order::PreOrder => "pre-order",
            Order::PostOrder => "post-order",
        }
    }
}

#[derive(Debug, Clone)]
pub struct DepthFirst {
    pub values: Vec<i64>,
    pub order: Order,
}

impl DepthFirst {
    pub fn new(order: Order) -> Self {
        DepthFirst {
            values: SAMPLE_VALUES.to_vec(),
            order,
        }
    }
}

struct Walker {
    state: TreeState,
    recorder: TraceRecorder<TreeState>,
    order: Order,
}

impl Walker {
    fn visit(&mut self, node: usize) {
        self.state.current = Some(node);
        self.state.visited.push(node);
        let value = self.state.value(node);
        self.state.output.push(value);
        let description = format!(
            "Visit {}: output is now {}",
            value,
            format::list(&self.state.output)
        );
        self.recorder.record(&self.state, description);
    }

    fn walk(&mut self, node: Option<usize>) {
        let Some(node) = node else {
            return;
        };
        let (left, right) = (self.state.nodes[node].left, self.state.nodes[node].right);
        match self.order {
            Order::PreOrder => {
                self.visit(node);
                self.walk(left);
                self.walk(right);
            }
            Order::InOrder => {
                self.walk(left);
                self.visit(node);
                self.walk(right);
            }
            Order::PostOrder => {
                self.walk(left);
                self.walk(right);
                self.visit(node);
            }
        }
    }
}

impl Algorithm for DepthFirst {
    type State = TreeState;

    fn info(&self) -> AlgorithmInfo {
        let (id, name) = match self.order {
            Order::InOrder => ("inorder-traversal", "In-order Traversal"),
            Order::PreOrder => ("preorder-traversal", "Pre-order Traversal"),
            Order::PostOrder => ("postorder-traversal", "Post-order Traversal"),
        };
        AlgorithmInfo {
            id,
            name,
            family: Family::Tree,
            complexity: "O(n)",
        }
    }

    fn initial_state(&self) -> TreeState {
        TreeState::from_values(&self.values)
    }

    fn generate_trace(&self, initial: &TreeState, config: &TraceConfig) -> Trace<TreeState> {
        if initial.root.is_none() {
            return Trace::invalid(initial.clone(), "tree is empty");
        }
        let mut walker = Walker {
            state: initial.clone(),
            recorder: TraceRecorder::new(
                initial,
                format!("Traverse the tree {}", self.order.name()),
                config.max_steps,
            ),
            order: self.order,
        };
        walker.walk(initial.root);

        let Walker {
            mut state,
            recorder,
            ..
        } = walker;
        state.current = None;
        let description = format!(
            "{} traversal complete: {}",
            self.order.name(),
            format::list(&state.output)
        );
        recorder.finish(&state, description, Outcome::Success)
    }
}
