// Reference scenarios with known answers

use algotrace::algorithms::backtracking::RatInMaze;
use algotrace::algorithms::graph::{BellmanFord, BreadthFirstSearch, Kruskal};
use algotrace::algorithms::searching::BinarySearch;
use algotrace::engine::{Algorithm, TraceConfig};
use algotrace::model::sequence::ArrayInput;
use algotrace::snapshot::Outcome;

#[test]
fn binary_search_finds_seven() {
    let values = vec![1, 3, 5, 7, 9, 11];
    let expected_steps = (values.len() as f64).log2().ceil() as usize + 1;
    let trace = BinarySearch::new(ArrayInput::Fixed(values), 7).trace(&TraceConfig::default());

    let last = &trace.last().state;
    assert!(last.found);
    let mid = last.mid.unwrap();
    assert_eq!(last.array[mid], 7);
    assert_eq!(trace.len(), expected_steps);
    assert!(trace.outcome().is_success());
}

#[test]
fn bfs_visits_every_node_level_by_level() {
    let trace = BreadthFirstSearch::default().trace(&TraceConfig::default());
    let visited = &trace.last().state.visited;

    let mut all = visited.clone();
    all.sort_unstable();
    assert_eq!(all, (0..8).collect::<Vec<_>>());

    let position = |node: usize| visited.iter().position(|&v| v == node).unwrap();
    assert!(position(1) < position(3));
    assert!(position(2) < position(3));
    assert_eq!(visited[0], 0);
}

#[test]
fn bellman_ford_handles_negative_edges() {
    let trace = BellmanFord::default().trace(&TraceConfig::default());
    let last = &trace.last().state;
    assert_eq!(
        last.distances,
        vec![Some(0), Some(3), Some(2), Some(-1), Some(2)]
    );
    assert!(!last.has_negative_cycle);
    assert!(trace.outcome().is_success());
}

#[test]
fn kruskal_spans_seven_nodes_with_six_edges() {
    let trace = Kruskal::default().trace(&TraceConfig::default());
    let last = &trace.last().state;
    assert_eq!(last.mst_edges.len(), 6);
    let recomputed: i64 = last
        .mst_edges
        .iter()
        .map(|&e| last.graph.edges[e].weight())
        .sum();
    assert_eq!(recomputed, last.total_weight);
    assert_eq!(recomputed, 39);
}

#[test]
fn fully_blocked_maze_has_no_solution() {
    let rat = RatInMaze::with_maze(&[
        &[1, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 0],
        &[0, 0, 0, 1],
    ]);
    let trace = rat.trace(&TraceConfig::default());
    assert_eq!(
        trace.outcome(),
        &Outcome::Failure("No solution exists".to_string())
    );
    assert!(trace.last().description.contains("No solution exists"));
    assert!(trace.iter().rev().skip(1).all(|step| !step.is_complete()));
}
