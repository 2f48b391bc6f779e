// Trace invariants checked across the whole catalogue

use algotrace::algorithms::searching::BinarySearch;
use algotrace::algorithms::sorting::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
    ShellSort,
};
use algotrace::engine::{Algorithm, DynAlgorithm, Family, TraceConfig};
use algotrace::model::sequence::ArrayInput;
use algotrace::registry::Registry;
use algotrace::snapshot::Outcome;
use proptest::prelude::*;
use serde_json::Value;

fn registry() -> Registry {
    Registry::new(&TraceConfig::default())
}

#[test]
fn every_trace_ends_with_exactly_one_terminal_step() {
    let config = TraceConfig::default();
    for algorithm in registry().iter() {
        let id = algorithm.metadata().id;
        let trace = algorithm.render(&config).unwrap();
        assert!(!trace.is_empty(), "{} produced no steps", id);
        let (last, earlier) = trace.steps.split_last().unwrap();
        assert!(last.outcome.is_some(), "{} has no terminal step", id);
        assert!(
            earlier.iter().all(|step| step.outcome.is_none()),
            "{} completes before its last step",
            id
        );
        for (i, step) in trace.steps.iter().enumerate() {
            assert_eq!(step.index, i, "{} step numbering", id);
            assert!(!step.description.is_empty(), "{} step {} has no description", id, i);
        }
    }
}

#[test]
fn default_instances_are_well_formed() {
    let config = TraceConfig::default();
    for algorithm in registry().iter() {
        let trace = algorithm.render(&config).unwrap();
        assert!(
            !matches!(trace.outcome(), Some(Outcome::Invalid(_))),
            "{} rejects its own sample input",
            algorithm.metadata().id
        );
    }
}

#[test]
fn step_zero_is_the_initial_state() {
    let config = TraceConfig::default();
    for algorithm in registry().iter() {
        let trace = algorithm.render(&config).unwrap();
        assert_eq!(
            trace.steps[0].data,
            algorithm.initial_data().unwrap(),
            "{} records progress in step 0",
            algorithm.metadata().id
        );
    }
}

#[test]
fn generation_is_deterministic() {
    let config = TraceConfig::default();
    let first = registry();
    let second = registry();
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(
            a.render(&config).unwrap(),
            b.render(&config).unwrap(),
            "{} differs between runs",
            a.metadata().id
        );
    }
}

#[test]
fn traces_respect_the_step_limit() {
    let config = TraceConfig::default()
        .with_max_steps(10)
        .with_search_max_steps(10);
    for algorithm in Registry::new(&config).iter() {
        let trace = algorithm.render(&config).unwrap();
        assert!(
            trace.len() <= 10,
            "{} produced {} steps",
            algorithm.metadata().id,
            trace.len()
        );
        assert!(trace.outcome().is_some());
    }
}

#[test]
fn backtracking_searches_are_truncated_under_a_tight_limit() {
    let config = TraceConfig::default().with_search_max_steps(5);
    let registry = Registry::new(&config);
    for id in ["n-queens", "knights-tour", "sudoku"] {
        let trace = registry.get(id).unwrap().render(&config).unwrap();
        assert_eq!(trace.len(), 5, "{}", id);
        assert!(trace.truncated, "{}", id);
        assert_eq!(trace.outcome(), Some(&Outcome::Truncated), "{}", id);
    }
}

/// Edges of a rendered best-path field, if the value has that shape
fn edge_pairs(value: &Value) -> Option<Vec<(u64, u64)>> {
    value
        .as_array()?
        .iter()
        .map(|pair| {
            let pair = pair.as_array()?;
            match pair.as_slice() {
                [from, to] => Some((from.as_u64()?, to.as_u64()?)),
                _ => None,
            }
        })
        .collect()
}

#[test]
fn best_paths_hold_one_edge_per_target() {
    let config = TraceConfig::default();
    for algorithm in registry().iter() {
        if algorithm.metadata().family != Family::Graph {
            continue;
        }
        let trace = algorithm.render(&config).unwrap();
        for step in &trace.steps {
            for key in ["path", "tree_edges"] {
                let Some(edges) = step.data.get(key).and_then(edge_pairs) else {
                    continue;
                };
                let mut targets: Vec<u64> = edges.iter().map(|&(_, to)| to).collect();
                targets.sort_unstable();
                let before = targets.len();
                targets.dedup();
                assert_eq!(
                    before,
                    targets.len(),
                    "{} step {} has two best edges into one node",
                    algorithm.metadata().id,
                    step.index
                );
            }
        }
    }
}

fn sorters(values: &[i64]) -> Vec<Box<dyn DynAlgorithm>> {
    let input = || ArrayInput::Fixed(values.to_vec());
    vec![
        Box::new(BubbleSort::new(input())),
        Box::new(SelectionSort::new(input())),
        Box::new(InsertionSort::new(input())),
        Box::new(MergeSort::new(input())),
        Box::new(QuickSort::new(input())),
        Box::new(HeapSort::new(input())),
        Box::new(ShellSort::new(input())),
        Box::new(CountingSort::new(input())),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn sorters_end_sorted_with_the_same_values(values in prop::collection::vec(0i64..100, 1..12)) {
        let mut expected = values.clone();
        expected.sort_unstable();
        for sorter in sorters(&values) {
            let trace = sorter.render(&TraceConfig::default()).unwrap();
            prop_assert_eq!(trace.outcome(), Some(&Outcome::Success));
            let last = &trace.steps[trace.len() - 1].data;
            let array: Vec<i64> = serde_json::from_value(last["array"].clone()).unwrap();
            prop_assert_eq!(&array, &expected, "{}", sorter.metadata().id);
        }
    }

    #[test]
    fn mutating_one_step_leaves_the_others_alone(
        values in prop::collection::vec(0i64..100, 2..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let algorithm = BubbleSort::new(ArrayInput::Fixed(values));
        let reference = algorithm.trace(&TraceConfig::default());
        let mut steps = algorithm.trace(&TraceConfig::default()).into_steps();
        let i = pick.index(steps.len());
        steps[i].state.array.push(-1);
        steps[i].state.sorted.clear();
        steps[i].state.comparisons += 1000;
        for (j, step) in steps.iter().enumerate() {
            if j != i {
                prop_assert_eq!(&step.state, &reference[j].state);
            }
        }
    }

    #[test]
    fn identical_input_gives_identical_traces(
        mut values in prop::collection::vec(-50i64..50, 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        values.sort_unstable();
        let target = values[pick.index(values.len())];
        let a = BinarySearch::new(ArrayInput::Fixed(values.clone()), target)
            .trace(&TraceConfig::default());
        let b = BinarySearch::new(ArrayInput::Fixed(values), target)
            .trace(&TraceConfig::default());
        prop_assert_eq!(a.steps(), b.steps());
        prop_assert!(a.outcome().is_success());
    }
}
