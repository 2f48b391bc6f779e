// Tabulated Fibonacci numbers

use super::{index_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

/// Largest index whose Fibonacci number fits in an i64
pub const MAX_N: usize = 92;

#[derive(Debug, Clone)]
pub struct Fibonacci {
    pub n: usize,
}

impl Default for Fibonacci {
    fn default() -> Self {
        Fibonacci { n: 10 }
    }
}

impl Algorithm for Fibonacci {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "fibonacci",
            name: "Fibonacci (Tabulation)",
            family: Family::DynamicProgramming,
            complexity: "O(n)",
        }
    }

    fn initial_state(&self) -> TableState {
        TableState::new(vec!["F".to_string()], index_labels(self.n + 1))
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        let Some(width) = initial.table.first().map(Vec::len).filter(|&w| w > 0) else {
            return Trace::invalid(initial.clone(), "table has no cells");
        };
        let n = width - 1;
        if n > MAX_N {
            return Trace::invalid(initial.clone(), format!("n must be at most {}", MAX_N));
        }
        let mut f = Filler::start(initial, format!("Compute F({}) bottom-up", n), config);

        f.set((0, 0), Some(0));
        if n >= 1 {
            f.set((0, 1), Some(1));
        }
        f.initialized("Base cases: F(0) = 0, F(1) = 1");

        for i in 2..=n {
            let a = f.get((0, i - 1)).unwrap_or(0);
            let b = f.get((0, i - 2)).unwrap_or(0);
            f.write(
                (0, i),
                Some(a + b),
                vec![(0, i - 1), (0, i - 2)],
                format!("F({}) = F({}) + F({}) = {} + {} = {}", i, i - 1, i - 2, a, b, a + b),
            );
        }

        let result = f.get((0, n)).unwrap_or(0);
        f.state.result = Some(result);
        f.finish(format!("F({}) = {}", n, result), Outcome::Success)
    }
}
