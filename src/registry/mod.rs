//! The algorithm catalogue
//!
//! Maps stable ids (`"bfs"`, `"quick-sort"`, `"n-queens"`, ...) to
//! type-erased algorithms. Randomized modules are built from the configured
//! seed, so one [`TraceConfig`] always produces one catalogue.

use crate::algorithms::backtracking::{HamiltonianCycle, KnightsTour, NQueens, RatInMaze, Sudoku};
use crate::algorithms::dp::{
    CoinChange, EditDistance, Fibonacci, Knapsack, LongestCommonSubsequence,
    LongestIncreasingSubsequence, MatrixChain, ShortestCommonSupersequence,
};
use crate::algorithms::graph::{
    AStar, BellmanFord, BreadthFirstSearch, DepthFirstSearch, Dijkstra, FloydWarshall,
    FordFulkerson, Johnson, Kruskal, Prim, TopologicalSort,
};
use crate::algorithms::searching::{
    BinarySearch, ExponentialSearch, FibonacciSearch, InterpolationSearch, JumpSearch,
    LinearSearch,
};
use crate::algorithms::sorting::{
    sample_input, BubbleSort, CountingSort, HeapSort, InsertionSort, MergeSort, QuickSort,
    SelectionSort, ShellSort,
};
use crate::algorithms::strings::{BoyerMoore, KnuthMorrisPratt, NaiveMatch, RabinKarp, ZAlgorithm};
use crate::algorithms::tree::{BstInsert, BstSearch, DepthFirst, LevelOrder, Order};
use crate::engine::{AlgorithmInfo, DynAlgorithm, Family, TraceConfig, TraceError};
use rustc_hash::FxHashMap;

/// Every algorithm with its default instance, in listing order
pub fn catalogue(config: &TraceConfig) -> Vec<Box<dyn DynAlgorithm>> {
    let seed = config.seed;
    vec![
        // Graph
        Box::new(BreadthFirstSearch::default()),
        Box::new(DepthFirstSearch::default()),
        Box::new(Dijkstra::default()),
        Box::new(AStar::default()),
        Box::new(BellmanFord::default()),
        Box::new(FloydWarshall::default()),
        Box::new(Johnson::default()),
        Box::new(Kruskal::default()),
        Box::new(Prim::default()),
        Box::new(TopologicalSort::default()),
        Box::new(FordFulkerson::default()),
        // Sorting
        Box::new(BubbleSort::new(sample_input(seed))),
        Box::new(SelectionSort::new(sample_input(seed))),
        Box::new(InsertionSort::new(sample_input(seed))),
        Box::new(MergeSort::new(sample_input(seed))),
        Box::new(QuickSort::new(sample_input(seed))),
        Box::new(HeapSort::new(sample_input(seed))),
        Box::new(ShellSort::new(sample_input(seed))),
        Box::new(CountingSort::new(sample_input(seed))),
        // Searching
        Box::new(LinearSearch::seeded(seed)),
        Box::new(BinarySearch::seeded(seed)),
        Box::new(JumpSearch::seeded(seed)),
        Box::new(FibonacciSearch::seeded(seed)),
        Box::new(InterpolationSearch::seeded(seed)),
        Box::new(ExponentialSearch::seeded(seed)),
        // Dynamic programming
        Box::new(Fibonacci::default()),
        Box::new(LongestCommonSubsequence::default()),
        Box::new(ShortestCommonSupersequence::default()),
        Box::new(MatrixChain::default()),
        Box::new(Knapsack::default()),
        Box::new(EditDistance::default()),
        Box::new(LongestIncreasingSubsequence::default()),
        Box::new(CoinChange::default()),
        // Backtracking
        Box::new(NQueens::default()),
        Box::new(RatInMaze::seeded(seed)),
        Box::new(KnightsTour::default()),
        Box::new(Sudoku::default()),
        Box::new(HamiltonianCycle::default()),
        // String matching
        Box::new(NaiveMatch::default()),
        Box::new(KnuthMorrisPratt::default()),
        Box::new(BoyerMoore::default()),
        Box::new(ZAlgorithm::default()),
        Box::new(RabinKarp::default()),
        // Tree
        Box::new(BstInsert::default()),
        Box::new(BstSearch::default()),
        Box::new(DepthFirst::new(Order::InOrder)),
        Box::new(DepthFirst::new(Order::PreOrder)),
        Box::new(DepthFirst::new(Order::PostOrder)),
        Box::new(LevelOrder::default()),
    ]
}

/// Catalogue indexed by id
pub struct Registry {
    entries: Vec<Box<dyn DynAlgorithm>>,
    index: FxHashMap<&'static str, usize>,
}

impl Registry {
    pub fn new(config: &TraceConfig) -> Self {
        let entries = catalogue(config);
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.metadata().id, i))
            .collect();
        Registry { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Result<&dyn DynAlgorithm, TraceError> {
        self.index
            .get(id)
            .map(|&i| self.entries[i].as_ref())
            .ok_or_else(|| TraceError::UnknownAlgorithm { id: id.to_string() })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn DynAlgorithm> {
        self.entries.iter().map(|entry| entry.as_ref())
    }

    /// Metadata grouped by family, families in [`Family::ALL`] order
    pub fn by_family(&self) -> Vec<(Family, Vec<AlgorithmInfo>)> {
        let mut groups: FxHashMap<Family, Vec<AlgorithmInfo>> = FxHashMap::default();
        for entry in &self.entries {
            let info = entry.metadata();
            groups.entry(info.family).or_default().push(info);
        }
        Family::ALL
            .iter()
            .filter_map(|family| groups.remove(family).map(|infos| (*family, infos)))
            .collect()
    }
}

/// Look up a single algorithm by id
pub fn find(id: &str, config: &TraceConfig) -> Result<Box<dyn DynAlgorithm>, TraceError> {
    catalogue(config)
        .into_iter()
        .find(|entry| entry.metadata().id == id)
        .ok_or_else(|| TraceError::UnknownAlgorithm { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn ids_are_unique() {
        let registry = Registry::new(&TraceConfig::default());
        let ids: FxHashSet<&str> = registry.iter().map(|a| a.metadata().id).collect();
        assert_eq!(ids.len(), registry.len());
        assert_eq!(registry.len(), 49);
    }

    #[test]
    fn every_family_is_listed() {
        let registry = Registry::new(&TraceConfig::default());
        let families: Vec<Family> = registry.by_family().into_iter().map(|(f, _)| f).collect();
        assert_eq!(families, Family::ALL.to_vec());
    }

    #[test]
    fn unknown_id_is_an_error() {
        let registry = Registry::new(&TraceConfig::default());
        assert!(matches!(
            registry.get("bogo-sort"),
            Err(TraceError::UnknownAlgorithm { .. })
        ));
        assert!(find("bogo-sort", &TraceConfig::default()).is_err());
        assert_eq!(
            find("dijkstra", &TraceConfig::default())
                .map(|a| a.metadata().name)
                .ok(),
            Some("Dijkstra's Algorithm")
        );
    }
}
