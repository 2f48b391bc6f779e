// Matrix chain multiplication order with optimal parenthesization

use super::{Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

/// Largest accepted matrix dimension
pub const MAX_DIMENSION: i64 = 10_000;

#[derive(Debug, Clone)]
pub struct MatrixChain {
    /// Matrix `i` is `dims[i] x dims[i + 1]`
    pub dims: Vec<i64>,
}

impl Default for MatrixChain {
    fn default() -> Self {
        MatrixChain {
            dims: vec![40, 20, 30, 10, 30],
        }
    }
}

fn matrix_labels(count: usize) -> Vec<String> {
    (1..=count).map(|i| format!("A{}", i)).collect()
}

fn parenthesize(split: &[Vec<Option<i64>>], i: usize, j: usize) -> String {
    if i == j {
        return format!("A{}", i + 1);
    }
    let k = split[i][j].map_or(i, |k| k as usize);
    format!("({}{})", parenthesize(split, i, k), parenthesize(split, k + 1, j))
}

impl Algorithm for MatrixChain {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "matrix-chain",
            name: "Matrix Chain Multiplication",
            family: Family::DynamicProgramming,
            complexity: "O(n^3)",
        }
    }

    fn initial_state(&self) -> TableState {
        let count = self.dims.len().saturating_sub(1);
        TableState::new(matrix_labels(count), matrix_labels(count))
            .with_input("dims", self.dims.clone())
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        let dims = match initial.input("dims") {
            Some(d) if d.len() >= 2 && d.iter().all(|x| (1..=MAX_DIMENSION).contains(x)) => {
                d.to_vec()
            }
            _ => {
                return Trace::invalid(
                    initial.clone(),
                    format!(
                        "need at least two dimensions, each in 1..={}",
                        MAX_DIMENSION
                    ),
                )
            }
        };
        let n = dims.len() - 1;
        if initial.table.len() != n {
            return Trace::invalid(initial.clone(), "table size does not match the dimensions");
        }
        let mut f = Filler::start(
            initial,
            format!("Find the cheapest order to multiply {} matrices", n),
            config,
        );
        f.state.secondary = vec![vec![None; n]; n];
        f.state.secondary_name = "Split k (after A(k+1)):".to_string();

        for i in 0..n {
            f.set((i, i), Some(0));
        }
        f.initialized("A single matrix needs no multiplication: the diagonal is 0");

        for len in 2..=n {
            for i in 0..=n - len {
                let j = i + len - 1;
                for k in i..j {
                    let left = f.get((i, k)).unwrap_or(0);
                    let right = f.get((k + 1, j)).unwrap_or(0);
                    let product = dims[i] * dims[k + 1] * dims[j + 1];
                    let cost = left + right + product;
                    let description = format!(
                        "A{}..A{} split after A{}: {} + {} + {}x{}x{} = {}",
                        i + 1,
                        j + 1,
                        k + 1,
                        left,
                        right,
                        dims[i],
                        dims[k + 1],
                        dims[j + 1],
                        cost
                    );
                    if f.get((i, j)).map_or(true, |best| cost < best) {
                        f.state.secondary[i][j] = Some(k as i64);
                        f.write(
                            (i, j),
                            Some(cost),
                            vec![(i, k), (k + 1, j)],
                            format!("{} (new best)", description),
                        );
                    } else {
                        f.consider(
                            (i, j),
                            vec![(i, k), (k + 1, j)],
                            format!("{} (not better)", description),
                        );
                    }
                }
            }
        }

        let cost = f.get((0, n - 1)).unwrap_or(0);
        f.state.result = Some(cost);

        let mut stack = vec![(0, n - 1)];
        while let Some((i, j)) = stack.pop() {
            if i == j {
                continue;
            }
            let k = f.state.secondary[i][j].map_or(i, |k| k as usize);
            f.visit(
                (i, j),
                format!(
                    "A{}..A{} splits into A{}..A{} and A{}..A{}",
                    i + 1,
                    j + 1,
                    i + 1,
                    k + 1,
                    k + 2,
                    j + 1
                ),
            );
            stack.push((k + 1, j));
            stack.push((i, k));
        }
        let order = parenthesize(&f.state.secondary, 0, n - 1);
        f.state.solution = vec![order.clone()];
        f.finish(
            format!("Optimal order {} costs {} scalar multiplications", order, cost),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_chain() {
        let trace = MatrixChain::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(26000));
        assert_eq!(last.solution, vec!["((A1(A2A3))A4)".to_string()]);
    }

    #[test]
    fn single_matrix_costs_nothing() {
        let trace = MatrixChain { dims: vec![3, 4] }.trace(&TraceConfig::default());
        assert_eq!(trace.last().state.result, Some(0));
        assert_eq!(trace.last().state.solution, vec!["A1".to_string()]);
    }

    #[test]
    fn zero_dimension_is_invalid() {
        let trace = MatrixChain { dims: vec![3, 0, 2] }.trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
    }

    #[test]
    fn oversized_dimensions_are_invalid() {
        let trace = MatrixChain {
            dims: vec![10_000_000; 4],
        }
        .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Outcome::Invalid(_)));

        let trace = MatrixChain {
            dims: vec![MAX_DIMENSION; 4],
        }
        .trace(&TraceConfig::default());
        assert_eq!(trace.last().state.result, Some(2 * MAX_DIMENSION.pow(3)));
    }
}
