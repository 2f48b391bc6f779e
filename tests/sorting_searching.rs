// Sorting and searching families over arbitrary arrays

use algotrace::algorithms::searching::{
    BinarySearch, ExponentialSearch, FibonacciSearch, InterpolationSearch, JumpSearch,
    LinearSearch,
};
use algotrace::algorithms::sorting::{
    BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort, SelectionSort,
    ShellSort,
};
use algotrace::engine::{DynAlgorithm, TraceConfig};
use algotrace::model::sequence::ArrayInput;
use algotrace::snapshot::Outcome;
use proptest::prelude::*;

fn searches(values: &[i64], target: i64) -> Vec<Box<dyn DynAlgorithm>> {
    let input = || ArrayInput::Fixed(values.to_vec());
    vec![
        Box::new(LinearSearch::new(input(), target)),
        Box::new(BinarySearch::new(input(), target)),
        Box::new(JumpSearch::new(input(), target)),
        Box::new(FibonacciSearch::new(input(), target)),
        Box::new(InterpolationSearch::new(input(), target)),
        Box::new(ExponentialSearch::new(input(), target)),
    ]
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

#[test]
fn empty_arrays_are_invalid_for_every_module() {
    let config = TraceConfig::default();
    for algorithm in sorters(&[]).into_iter().chain(searches(&[], 3)) {
        let trace = algorithm.render(&config).unwrap();
        assert_eq!(trace.len(), 1, "{}", algorithm.metadata().id);
        assert!(
            matches!(trace.outcome(), Some(Outcome::Invalid(_))),
            "{}",
            algorithm.metadata().id
        );
    }
}

#[test]
fn already_sorted_input_stays_put() {
    let values = [1, 2, 3, 4, 5];
    for sorter in sorters(&values) {
        let trace = sorter.render(&TraceConfig::default()).unwrap();
        let last = &trace.steps[trace.len() - 1];
        assert_eq!(last.data["array"], serde_json::json!(values), "{}", sorter.metadata().id);
        assert_eq!(last.data["sorted"].as_array().map(Vec::len), Some(5));
    }
}

#[test]
fn comparison_counters_never_decrease() {
    for sorter in sorters(&[9, 4, 7, 1, 8, 2]) {
        let trace = sorter.render(&TraceConfig::default()).unwrap();
        let counts: Vec<u64> = trace
            .steps
            .iter()
            .map(|s| s.data["comparisons"].as_u64().unwrap_or(0))
            .collect();
        assert!(
            counts.windows(2).all(|w| w[0] <= w[1]),
            "{}",
            sorter.metadata().id
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn every_search_finds_a_present_value(
        set in prop::collection::btree_set(-100i64..100, 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let values: Vec<i64> = set.into_iter().collect();
        let index = pick.index(values.len());
        for search in searches(&values, values[index]) {
            let trace = search.render(&TraceConfig::default()).unwrap();
            prop_assert_eq!(trace.outcome(), Some(&Outcome::Success), "{}", search.metadata().id);
            let last = &trace.steps[trace.len() - 1].data;
            prop_assert_eq!(&last["found"], &serde_json::json!(true));
            prop_assert_eq!(&last["mid"], &serde_json::json!(index), "{}", search.metadata().id);
        }
    }

    #[test]
    fn every_search_reports_an_absent_value(
        set in prop::collection::btree_set(0i64..50, 1..20),
        above in 51i64..100,
    ) {
        let values: Vec<i64> = set.into_iter().collect();
        for target in [-1, above] {
            for search in searches(&values, target) {
                let trace = search.render(&TraceConfig::default()).unwrap();
                prop_assert!(
                    matches!(trace.outcome(), Some(Outcome::Failure(_))),
                    "{} target {}",
                    search.metadata().id,
                    target
                );
            }
        }
    }
}
