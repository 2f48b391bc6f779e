// Graph family: cross-checks between algorithms and malformed input

use algotrace::algorithms::graph::{
    AStar, BellmanFord, BreadthFirstSearch, DepthFirstSearch, Dijkstra, FloydWarshall,
    FordFulkerson, Johnson, Kruskal, Prim, TopologicalSort,
};
use algotrace::engine::{Algorithm, DynAlgorithm, TraceConfig};
use algotrace::model::graph::{Edge, Graph, MAX_WEIGHT};
use algotrace::model::samples;
use algotrace::snapshot::Outcome;

/// The Dijkstra sample with every edge made one-way
fn directed_sample() -> Graph {
    let mut graph = samples::dijkstra_graph();
    for edge in &mut graph.edges {
        edge.directed = Some(true);
    }
    graph
}

#[test]
fn dijkstra_agrees_with_bellman_ford_on_non_negative_weights() {
    let config = TraceConfig::default();
    let dijkstra = Dijkstra {
        graph: directed_sample(),
        source: 0,
        goal: None,
    }
    .trace(&config);
    let bellman_ford = BellmanFord {
        graph: directed_sample(),
        source: 0,
    }
    .trace(&config);

    assert!(dijkstra.outcome().is_success());
    assert!(bellman_ford.outcome().is_success());
    assert_eq!(
        dijkstra.last().state.distances,
        bellman_ford.last().state.distances
    );
}

#[test]
fn dfs_and_bfs_reach_the_same_nodes() {
    let config = TraceConfig::default();
    let mut bfs = BreadthFirstSearch::default().trace(&config).last().state.visited.clone();
    let mut dfs = DepthFirstSearch::default().trace(&config).last().state.visited.clone();
    bfs.sort_unstable();
    dfs.sort_unstable();
    assert_eq!(bfs, dfs);
}

#[test]
fn cyclic_graph_has_no_topological_order() {
    let graph = Graph::from_labels(
        &["a", "b", "c"],
        vec![Edge::arc(0, 1, 1), Edge::arc(1, 2, 1), Edge::arc(2, 0, 1)],
    );
    let trace = TopologicalSort { graph }.trace(&TraceConfig::default());
    assert!(matches!(trace.outcome(), Outcome::Failure(_)));
    assert!(trace.last().state.order.is_empty());
}

fn every_graph_algorithm(graph: impl Fn() -> Graph) -> Vec<Box<dyn DynAlgorithm>> {
    vec![
        Box::new(BreadthFirstSearch { graph: graph(), start: 0 }),
        Box::new(DepthFirstSearch { graph: graph(), start: 0 }),
        Box::new(Dijkstra { graph: graph(), source: 0, goal: None }),
        Box::new(AStar { graph: graph(), start: 0, goal: 1 }),
        Box::new(BellmanFord { graph: graph(), source: 0 }),
        Box::new(FloydWarshall { graph: graph() }),
        Box::new(Johnson { graph: graph() }),
        Box::new(Kruskal { graph: graph() }),
        Box::new(Prim { graph: graph(), start: 0 }),
        Box::new(TopologicalSort { graph: graph() }),
        Box::new(FordFulkerson { graph: graph(), source: 0, sink: 1 }),
    ]
}

fn assert_all_invalid(algorithms: Vec<Box<dyn DynAlgorithm>>) {
    for algorithm in algorithms {
        let trace = algorithm.render(&TraceConfig::default()).unwrap();
        assert_eq!(trace.len(), 1, "{}", algorithm.metadata().id);
        assert!(
            matches!(trace.outcome(), Some(Outcome::Invalid(_))),
            "{}",
            algorithm.metadata().id
        );
    }
}

#[test]
fn edges_to_missing_nodes_are_rejected_everywhere() {
    assert_all_invalid(every_graph_algorithm(|| {
        Graph::from_labels(&["a", "b"], vec![Edge::weighted(0, 5, 1)])
    }));
}

#[test]
fn oversized_weights_are_rejected_everywhere() {
    assert_all_invalid(every_graph_algorithm(|| {
        Graph::from_labels(
            &["a", "b", "c"],
            vec![Edge::arc(0, 1, i64::MAX), Edge::arc(1, 2, i64::MAX)],
        )
    }));
}

#[test]
fn weights_at_the_bound_relax_without_overflow() {
    let graph = Graph::from_labels(
        &["a", "b", "c"],
        vec![Edge::arc(0, 1, MAX_WEIGHT), Edge::arc(1, 2, MAX_WEIGHT)],
    );
    let dijkstra = Dijkstra { graph: graph.clone(), source: 0, goal: None }
        .trace(&TraceConfig::default());
    let bellman = BellmanFord { graph, source: 0 }.trace(&TraceConfig::default());
    assert!(dijkstra.outcome().is_success());
    assert!(bellman.outcome().is_success());
    let expected = vec![Some(0), Some(MAX_WEIGHT), Some(2 * MAX_WEIGHT)];
    assert_eq!(dijkstra.last().state.distances, expected);
    assert_eq!(bellman.last().state.distances, expected);
}

#[test]
fn rendered_graph_steps_carry_node_rows() {
    let trace = Dijkstra::default().render(&TraceConfig::default()).unwrap();
    let first = &trace.steps[0];
    assert!(first.rows[0].to_string().starts_with("Nodes:"));
    assert_eq!(first.data["source"], 0);
}
