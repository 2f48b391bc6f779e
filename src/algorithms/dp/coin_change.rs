// Minimum-coin change with the coins used

use super::{index_labels, Filler, TableState};
use crate::engine::{Algorithm, AlgorithmInfo, Family, TraceConfig};
use crate::snapshot::{Outcome, Trace};

/// Largest amount accepted; bounds the table width
pub const MAX_AMOUNT: i64 = 500;

#[derive(Debug, Clone)]
pub struct CoinChange {
    pub coins: Vec<i64>,
    pub amount: i64,
}

impl Default for CoinChange {
    fn default() -> Self {
        CoinChange {
            coins: vec![1, 2, 5],
            amount: 11,
        }
    }
}

impl Algorithm for CoinChange {
    type State = TableState;

    fn info(&self) -> AlgorithmInfo {
        AlgorithmInfo {
            id: "coin-change",
            name: "Coin Change (Minimum Coins)",
            family: Family::DynamicProgramming,
            complexity: "O(amount x coins)",
        }
    }

    fn initial_state(&self) -> TableState {
        let width = usize::try_from(self.amount.clamp(0, MAX_AMOUNT)).unwrap_or(0) + 1;
        TableState::new(vec!["coins".to_string()], index_labels(width))
            .with_input("coins", self.coins.clone())
            .with_input("amount", vec![self.amount])
    }

    fn generate_trace(&self, initial: &TableState, config: &TraceConfig) -> Trace<TableState> {
        let (Some(coins), Some(&[amount])) = (initial.input("coins"), initial.input("amount"))
        else {
            return Trace::invalid(initial.clone(), "coins and amount are required");
        };
        if coins.is_empty() || coins.iter().any(|&c| c <= 0) {
            return Trace::invalid(initial.clone(), "coins must be positive");
        }
        if !(0..=MAX_AMOUNT).contains(&amount) {
            return Trace::invalid(
                initial.clone(),
                format!("amount must be in 0..={}", MAX_AMOUNT),
            );
        }
        let coins = coins.to_vec();
        let total = amount as usize;
        let mut f = Filler::start(
            initial,
            format!("Make {} with as few coins as possible", amount),
            config,
        );
        f.state.secondary = vec![vec![None; total + 1]];
        f.state.secondary_name = "Last coin:".to_string();

        f.set((0, 0), Some(0));
        f.initialized("Amount 0 needs 0 coins; every other amount starts unreachable");

        for a in 1..=total {
            for &coin in &coins {
                let c = coin as usize;
                if c > a {
                    continue;
                }
                let Some(prev) = f.get((0, a - c)) else {
                    continue;
                };
                let candidate = prev + 1;
                if f.get((0, a)).map_or(true, |best| candidate < best) {
                    f.state.secondary[0][a] = Some(coin);
                    f.write(
                        (0, a),
                        Some(candidate),
                        vec![(0, a - c)],
                        format!(
                            "Amount {}: coin {} after amount {} ({} coins) gives {}",
                            a, coin, a - c, prev, candidate
                        ),
                    );
                }
            }
        }

        let Some(best) = f.get((0, total)) else {
            return f.finish(
                format!("Amount {} cannot be made from coins {:?}", amount, coins),
                Outcome::Failure("amount cannot be made".to_string()),
            );
        };
        f.state.result = Some(best);

        let mut at = total;
        let mut used = Vec::new();
        f.visit((0, at), format!("Walk back from amount {}", at));
        while at > 0 {
            let coin = f.state.secondary[0][at].unwrap_or(0);
            if coin <= 0 {
                break;
            }
            used.push(coin.to_string());
            f.state.solution = used.clone();
            at -= coin as usize;
            f.visit((0, at), format!("Use coin {}, {} left", coin, at));
        }

        f.finish(
            format!("{} coin(s) make {}: {}", best, amount, used.join(" + ")),
            Outcome::Success,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eleven_from_one_two_five() {
        let trace = CoinChange::default().trace(&TraceConfig::default());
        let last = &trace.last().state;
        assert_eq!(last.result, Some(3));
        let sum: i64 = last.solution.iter().map(|c| c.parse::<i64>().unwrap()).sum();
        assert_eq!(sum, 11);
    }

    #[test]
    fn impossible_amount_fails() {
        let trace = CoinChange {
            coins: vec![2],
            amount: 3,
        }
        .trace(&TraceConfig::default());
        assert_eq!(
            trace.outcome(),
            &Outcome::Failure("amount cannot be made".to_string())
        );
    }

    #[test]
    fn zero_coin_is_invalid() {
        let trace = CoinChange {
            coins: vec![0, 1],
            amount: 3,
        }
        .trace(&TraceConfig::default());
        assert_eq!(trace.len(), 1);
    }
}
