// Dynamic programming family: phases and cross-problem identities

use algotrace::algorithms::dp::{
    EditDistance, LongestCommonSubsequence, ShortestCommonSupersequence,
};
use algotrace::engine::{Algorithm, DynAlgorithm, Family, TraceConfig};
use algotrace::registry::Registry;
use proptest::prelude::*;

const PHASES: [&str; 5] = ["setup", "initialize", "fill", "reconstruct", "done"];

#[test]
fn phases_only_move_forward() {
    let config = TraceConfig::default();
    let registry = Registry::new(&config);
    for algorithm in registry.iter() {
        if algorithm.metadata().family != Family::DynamicProgramming {
            continue;
        }
        let trace = algorithm.render(&config).unwrap();
        let ranks: Vec<usize> = trace
            .steps
            .iter()
            .map(|step| {
                let phase = step.data["phase"].as_str().unwrap_or_default();
                PHASES.iter().position(|p| *p == phase).unwrap()
            })
            .collect();
        assert!(
            ranks.windows(2).all(|w| w[0] <= w[1]),
            "{} phases {:?}",
            algorithm.metadata().id,
            ranks
        );
        assert_eq!(ranks.last(), Some(&4), "{}", algorithm.metadata().id);
    }
}

#[test]
fn written_cells_are_never_cleared() {
    let trace = LongestCommonSubsequence::default().trace(&TraceConfig::default());
    for pair in trace.steps().windows(2) {
        let (before, after) = (&pair[0].state.table, &pair[1].state.table);
        for (r, row) in before.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if cell.is_some() {
                    assert_eq!(*cell, after[r][c], "cell ({}, {})", r, c);
                }
            }
        }
    }
}

fn word() -> impl Strategy<Value = String> {
    "[ABCD]{1,6}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn supersequence_length_follows_from_lcs(first in word(), second in word()) {
        let config = TraceConfig::default();
        let lcs = LongestCommonSubsequence { first: first.clone(), second: second.clone() }
            .trace(&config);
        let scs = ShortestCommonSupersequence { first: first.clone(), second: second.clone() }
            .trace(&config);
        let lcs_len = lcs.last().state.result.unwrap();
        let scs_len = scs.last().state.result.unwrap();
        prop_assert_eq!(scs_len, (first.len() + second.len()) as i64 - lcs_len);
        prop_assert_eq!(lcs.last().state.solution.len() as i64, lcs_len);
        prop_assert_eq!(scs.last().state.solution.len() as i64, scs_len);
    }

    #[test]
    fn edit_distance_is_bounded_by_lengths(source in word(), target in word()) {
        let trace = EditDistance { source: source.clone(), target: target.clone() }
            .trace(&TraceConfig::default());
        let distance = trace.last().state.result.unwrap();
        let (a, b) = (source.len() as i64, target.len() as i64);
        prop_assert!(distance >= (a - b).abs());
        prop_assert!(distance <= a.max(b));
        prop_assert_eq!(distance == 0, source == target);
    }
}
