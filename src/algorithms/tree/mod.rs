//! Binary search tree family
//!
//! Trees live in an arena: [`TreeState::nodes`] owns every node and links
//! are indices into it, so a snapshot is a plain clone.

pub mod bst_insert;
pub mod bst_search;
pub mod level_order;
pub mod traversal;

pub use bst_insert::BstInsert;
pub use bst_search::BstSearch;
pub use level_order::LevelOrder;
pub use traversal::{DepthFirst, Order};

use crate::view::{format, Mark, Row, Visualize};
use serde::Serialize;
use std::cmp::Ordering;

/// Insertion order of the sample tree
pub const SAMPLE_VALUES: [i64; 7] = [50, 30, 70, 20, 40, 60, 80];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TreeState {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
    pub current: Option<usize>,
    /// Nodes visited so far, in visiting order
    pub visited: Vec<usize>,
    /// Values emitted by a traversal
    pub output: Vec<i64>,
    /// Level-order queue, front first
    pub queue: Vec<usize>,
    /// Values still waiting to be inserted
    pub pending: Vec<i64>,
    pub target: Option<i64>,
    pub found: Option<usize>,
}

impl TreeState {
    /// Build a tree by inserting `values` in order, skipping duplicates
    pub fn from_values(values: &[i64]) -> Self {
        let mut tree = TreeState::default();
        for &value in values {
            tree.insert(value);
        }
        tree
    }

    pub fn value(&self, node: usize) -> i64 {
        self.nodes[node].value
    }

    /// Plain insert, returning the new node or `None` for a duplicate
    pub fn insert(&mut self, value: i64) -> Option<usize> {
        let Some(mut at) = self.root else {
            self.root = Some(self.push(value));
            return self.root;
        };
        loop {
            let node = self.nodes[at];
            let next = match value.cmp(&node.value) {
                Ordering::Equal => return None,
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
            };
            match next {
                Some(child) => at = child,
                None => {
                    let child = self.push(value);
                    self.link(at, child);
                    return Some(child);
                }
            }
        }
    }

    fn push(&mut self, value: i64) -> usize {
        self.nodes.push(TreeNode {
            value,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    /// Attach `child` on the side of `parent` its value belongs to
    pub(crate) fn link(&mut self, parent: usize, child: usize) {
        if self.value(child) < self.value(parent) {
            self.nodes[parent].left = Some(child);
        } else {
            self.nodes[parent].right = Some(child);
        }
    }

    pub(crate) fn add_node(&mut self, value: i64) -> usize {
        self.push(value)
    }

    /// Node indices grouped by depth, left to right
    pub fn levels(&self) -> Vec<Vec<usize>> {
        let mut levels = Vec::new();
        let mut frontier: Vec<usize> = self.root.into_iter().collect();
        while !frontier.is_empty() {
            let next = frontier
                .iter()
                .flat_map(|&n| [self.nodes[n].left, self.nodes[n].right])
                .flatten()
                .collect();
            levels.push(std::mem::replace(&mut frontier, next));
        }
        levels
    }

    /// Values in sorted (in-order) order
    pub fn sorted_values(&self) -> Vec<i64> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut stack = Vec::new();
        let mut at = self.root;
        while at.is_some() || !stack.is_empty() {
            while let Some(n) = at {
                stack.push(n);
                at = self.nodes[n].left;
            }
            if let Some(n) = stack.pop() {
                out.push(self.nodes[n].value);
                at = self.nodes[n].right;
            }
        }
        out
    }

    fn mark(&self, node: usize) -> Mark {
        if self.found == Some(node) {
            Mark::Done
        } else if self.current == Some(node) {
            Mark::Active
        } else if self.queue.contains(&node) {
            Mark::Compare
        } else if self.visited.contains(&node) {
            Mark::Done
        } else {
            Mark::Plain
        }
    }
}

impl Visualize for TreeState {
    fn view(&self) -> Vec<Row> {
        let mut rows: Vec<Row> = self
            .levels()
            .iter()
            .enumerate()
            .map(|(depth, level)| {
                let mut row = Row::labeled(format!("Depth {}:", depth));
                for &n in level {
                    row.push(self.value(n).to_string(), self.mark(n));
                }
                row
            })
            .collect();
        if rows.is_empty() {
            rows.push(Row::text("(empty tree)"));
        }
        if !self.pending.is_empty() {
            rows.push(format::marked_row("Pending:", &self.pending, |_| Mark::Muted));
        }
        if let Some(target) = self.target {
            rows.push(Row::labeled("Target:").cell(target.to_string(), Mark::Active));
        }
        if !self.queue.is_empty() {
            let queued: Vec<i64> = self.queue.iter().map(|&n| self.value(n)).collect();
            rows.push(format::marked_row("Queue:", &queued, |_| Mark::Compare));
        }
        if !self.output.is_empty() {
            rows.push(format::marked_row("Output:", &self.output, |_| Mark::Done));
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_tree_shape() {
        let tree = TreeState::from_values(&SAMPLE_VALUES);
        let levels: Vec<Vec<i64>> = tree
            .levels()
            .iter()
            .map(|l| l.iter().map(|&n| tree.value(n)).collect())
            .collect();
        assert_eq!(levels, vec![vec![50], vec![30, 70], vec![20, 40, 60, 80]]);
        assert_eq!(tree.sorted_values(), vec![20, 30, 40, 50, 60, 70, 80]);
    }

    #[test]
    fn duplicates_are_skipped() {
        let mut tree = TreeState::from_values(&[5, 3]);
        assert_eq!(tree.insert(3), None);
        assert_eq!(tree.nodes.len(), 2);
    }

    #[test]
    fn view_lists_levels() {
        let mut tree = TreeState::from_values(&[2, 1, 3]);
        tree.current = Some(0);
        let rows = tree.view();
        assert_eq!(rows[0].to_string(), "Depth 0: [2]");
        assert_eq!(rows[1].to_string(), "Depth 1: 1 3");
    }
}
