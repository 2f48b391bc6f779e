// 0/1 knapsack with item selection

use super::{index_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

/// Largest capacity accepted; bounds the table width
pub const MAX_CAPACITY: i64 = 200;
/// Largest accepted item value
pub const MAX_VALUE: i64 = 1_000_000;

#[derive(Debug, Clone)]
pub struct Knapsack {
    pub weights: Vec<i64>,
    pub values: Vec<i64>,
    pub capacity: i64,
}

impl Default for Knapsack {
    fn default() -> Self {
        Knapsack {
            weights: vec![1, 3, 4, 5],
            values: vec![1, 4, 5, 7],
            capacity: 7,
        }
    }
}

impl Algorithm for Knapsack {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "knapsack",
            name: "0/1 Knapsack",
            family: Family::DynamicProgramming,
            complexity: "O(n W)",
        }
    }

    fn initial_state(&self) -> TableState {
        let mut rows = vec!["none".to_string()];
        rows.extend(
            self.weights
                .iter()
                .zip(&self.values)
                .enumerate()
                .map(|(i, (w, v))| format!("#{} w{} v{}", i + 1, w, v)),
        );
        let width = usize::try_from(self.capacity.clamp(0, MAX_CAPACITY)).unwrap_or(0) + 1;
        TableState::new(rows, index_labels(width))
            .with_input("weights", self.weights.clone())
            .with_input("values", self.values.clone())
            .with_input("capacity", vec![self.capacity])
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        let (Some(weights), Some(values), Some(&[capacity])) = (
            initial.input("weights"),
            initial.input("values"),
            initial.input("capacity"),
        ) else {
            return Trace::invalid(initial.clone(), "weights, values and capacity are required");
        };
        if weights.len() != values.len() {
            return Trace::invalid(initial.clone(), "weights and values differ in length");
        }
        if weights.iter().any(|&x| x < 0)
            || values.iter().any(|x| !(0..=MAX_VALUE).contains(x))
            || !(0..=MAX_CAPACITY).contains(&capacity)
        {
            return Trace::invalid(
                initial.clone(),
                format!(
                    "weights must be non-negative, values in 0..={}, capacity in 0..={}",
                    MAX_VALUE, MAX_CAPACITY
                ),
            );
        }
        let (weights, values) = (weights.to_vec(), values.to_vec());
        let n = weights.len();
        let cap = capacity as usize;
        let mut f = Filler::start(
            initial,
            format!("Pack the most value into capacity {}", capacity),
            config,
        );

        for c in 0..=cap {
            f.set((0, c), Some(0));
        }
        f.initialized("With no items the best value is 0 for every capacity");

        for i in 1..=n {
            let (w, v) = (weights[i - 1], values[i - 1]);
            for c in 0..=cap {
                let skip = f.get((i - 1, c)).unwrap_or(0);
                if w as usize > c {
                    f.write(
                        (i, c),
                        Some(skip),
                        vec![(i - 1, c)],
                        format!("Item {} (w{}) does not fit in {}: keep {}", i, w, c, skip),
                    );
                    continue;
                }
                let rest = c - w as usize;
                let take = f.get((i - 1, rest)).unwrap_or(0) + v;
                f.write(
                    (i, c),
                    Some(skip.max(take)),
                    vec![(i - 1, c), (i - 1, rest)],
                    format!(
                        "Capacity {}: skip item {} = {}, take it = {} + {} = {}, best {}",
                        c,
                        i,
                        skip,
                        take - v,
                        v,
                        take,
                        skip.max(take)
                    ),
                );
            }
        }

        let best = f.get((n, cap)).unwrap_or(0);
        f.state.result = Some(best);
        let mut c = cap;
        let mut chosen = Vec::new();
        for i in (1..=n).rev() {
            if f.get((i, c)) != f.get((i - 1, c)) {
                chosen.push(i);
                f.state.solution = chosen.iter().rev().map(|i| format!("#{}", i)).collect();
                f.visit(
                    (i, c),
                    format!("Value changed from row {}: item {} is packed", i - 1, i),
                );
                c -= weights[i - 1] as usize;
            } else {
                f.visit(
                    (i, c),
                    format!("Value unchanged from row {}: item {} is left out", i - 1, i),
                );
            }
        }

        let items = if chosen.is_empty() {
            "none".to_string()
        } else {
            f.state.solution.join(", ")
        };
        f.finish(
            format!("Best value {} using item(s) {}", best, items),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_best_value() {
        let trace = Knapsack::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(9));
        assert_eq!(last.solution, vec!["#2".to_string(), "#3".to_string()]);
    }

    #[test]
    fn mismatched_inputs_are_invalid() {
        let knapsack = Knapsack {
            weights: vec![1, 2],
            values: vec![3],
            capacity: 4,
        };
        assert_eq!(knapsack.trace(&TraceConfig::default()).len(), 1);
    }

    #[test]
    fn nothing_fits() {
        let knapsack = Knapsack {
            weights: vec![5],
            values: vec![10],
            capacity: 2,
        };
        let trace = knapsack.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.result, Some(0));
        assert!(trace.last().state.solution.is_empty());
    }

    #[test]
    fn huge_values_are_invalid() {
        let knapsack = Knapsack {
            weights: vec![1, 1],
            values: vec![i64::MAX, i64::MAX],
            capacity: 2,
        };
        let trace = knapsack.trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));
    }
}
