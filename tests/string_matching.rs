// String-matching family: all matchers agree with a brute-force scan

use algotrace::algorithms::strings::{
    BoyerMoore, KnuthMorrisPratt, NaiveMatch, RabinKarp, ZAlgorithm, SAMPLE_PATTERN, SAMPLE_TEXT,
};
use algotrace::engine::{DynAlgorithm, TraceConfig};
use algotrace::snapshot::Outcome;
use proptest::prelude::*;

fn matchers(text: &str, pattern: &str) -> Vec<Box<dyn DynAlgorithm>> {
    vec![
        Box::new(NaiveMatch::new(text, pattern)),
        Box::new(KnuthMorrisPratt::new(text, pattern)),
        Box::new(BoyerMoore::new(text, pattern)),
        Box::new(ZAlgorithm::new(text, pattern)),
        Box::new(RabinKarp::new(text, pattern)),
    ]
}

fn brute_force(text: &str, pattern: &str) -> Vec<usize> {
    let (t, p): (Vec<char>, Vec<char>) = (text.chars().collect(), pattern.chars().collect());
    if p.is_empty() || p.len() > t.len() {
        return Vec::new();
    }
    (0..=t.len() - p.len())
        .filter(|&i| t[i..i + p.len()] == p[..])
        .collect()
}

fn found(algorithm: &dyn DynAlgorithm) -> (Option<Outcome>, Vec<usize>) {
    let trace = algorithm.render(&TraceConfig::default()).unwrap();
    let last = &trace.steps[trace.len() - 1].data;
    let matches = serde_json::from_value(last["matches"].clone()).unwrap();
    (trace.outcome().cloned(), matches)
}

#[test]
fn sample_occurrences() {
    for matcher in matchers(SAMPLE_TEXT, SAMPLE_PATTERN) {
        let (outcome, matches) = found(matcher.as_ref());
        assert_eq!(outcome, Some(Outcome::Success), "{}", matcher.metadata().id);
        assert_eq!(matches, vec![0, 9, 12], "{}", matcher.metadata().id);
    }
}

#[test]
fn empty_pattern_is_invalid() {
    for matcher in matchers("ABC", "") {
        let trace = matcher.render(&TraceConfig::default()).unwrap();
        assert_eq!(trace.len(), 1);
        assert!(matches!(trace.outcome(), Some(Outcome::Invalid(_))));
    }
}

#[test]
fn long_pattern_is_not_found() {
    for matcher in matchers("AB", "ABC") {
        let (outcome, matches) = found(matcher.as_ref());
        assert!(matches!(outcome, Some(Outcome::Failure(_))), "{}", matcher.metadata().id);
        assert!(matches.is_empty());
    }
}

#[test]
fn preprocessing_comes_before_scanning() {
    for matcher in matchers(SAMPLE_TEXT, SAMPLE_PATTERN) {
        let trace = matcher.render(&TraceConfig::default()).unwrap();
        let phases: Vec<&str> = trace
            .steps
            .iter()
            .filter_map(|s| s.data["phase"].as_str())
            .collect();
        let first_scan = phases.iter().position(|p| *p == "scan");
        let last_preprocess = phases.iter().rposition(|p| *p == "preprocess");
        if let (Some(scan), Some(pre)) = (first_scan, last_preprocess) {
            assert!(pre < scan, "{}", matcher.metadata().id);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn matchers_agree_with_brute_force(text in "[AB]{1,16}", pattern in "[AB]{1,4}") {
        let expected = brute_force(&text, &pattern);
        for matcher in matchers(&text, &pattern) {
            let (outcome, matches) = found(matcher.as_ref());
            prop_assert_eq!(&matches, &expected, "{}", matcher.metadata().id);
            prop_assert_eq!(
                outcome.as_ref().is_some_and(Outcome::is_success),
                !expected.is_empty()
            );
        }
    }
}
