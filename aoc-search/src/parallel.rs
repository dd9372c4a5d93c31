//! Batch evaluation of independent searches on Rayon.

use std::collections::HashMap;
use std::sync::Arc;

use rayon::ThreadPool;
use rayon::prelude::*;
use tracing::debug;

use crate::bfs::Bfs;
use crate::dijkstra::Dijkstra;
use crate::goal::Goal;
use crate::problem::{Cost, Neighbors, State, WeightedNeighbors};

/// Runs many independent queries in parallel.
///
/// Each query owns its frontier and cost map, so the engines only need to be
/// `Sync`. Results are returned in input order. Without an explicit pool the
/// global Rayon pool is used.
///
/// # Example
///
/// ```rust
/// use aoc_search::{Dijkstra, ParallelSearch, Target};
///
/// let dijkstra = Dijkstra::new(|n: &u32| if *n < 50 { vec![(n + 1, 1), (n + 5, 3)] } else { vec![] });
/// let costs = ParallelSearch::new().costs_from(&dijkstra, &[0, 10, 45], Target(50));
/// assert_eq!(costs, vec![Some(30), Some(24), Some(3)]);
/// ```
#[derive(Clone, Default)]
pub struct ParallelSearch {
    pool: Option<Arc<ThreadPool>>,
}

impl ParallelSearch {
    /// Uses the global Rayon pool.
    pub fn new() -> Self {
        Self { pool: None }
    }

    /// Uses a caller-provided Rayon thread pool.
    pub fn with_pool(pool: Arc<ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }

    fn install<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    /// Applies `query` to every input in parallel, preserving input order.
    ///
    /// This is the building block for "try every candidate modification"
    /// style problems where each candidate builds its own search.
    pub fn map<T, R, F>(&self, inputs: Vec<T>, query: F) -> Vec<R>
    where
        T: Send,
        R: Send,
        F: Fn(T) -> R + Send + Sync,
    {
        let count = inputs.len();
        let results = self.install(|| inputs.into_par_iter().map(query).collect::<Vec<R>>());
        debug!(count, "parallel batch finished");
        results
    }

    /// Returns the earliest input (by position) whose query yields a value,
    /// with its index.
    ///
    /// Later inputs may be evaluated speculatively, but the reported match is
    /// always the first one in input order.
    pub fn first_match<T, R, F>(&self, inputs: &[T], query: F) -> Option<(usize, R)>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Option<R> + Send + Sync,
    {
        self.install(|| {
            inputs
                .par_iter()
                .enumerate()
                .find_map_first(|(index, input)| query(input).map(|found| (index, found)))
        })
    }

    /// Minimum cost from each start to `goal`.
    pub fn costs_from<S, P, G>(
        &self,
        dijkstra: &Dijkstra<S, P>,
        starts: &[S],
        goal: G,
    ) -> Vec<Option<Cost>>
    where
        S: State + Send + Sync,
        P: WeightedNeighbors<S> + Sync,
        G: Goal<S> + Sync,
    {
        self.install(|| {
            starts
                .par_iter()
                .map(|start| dijkstra.cost_to_reach(start, |state: &S| goal.is_goal(state)))
                .collect()
        })
    }

    /// Hop count from each start to `goal`.
    pub fn hops_from<S, P, G>(&self, bfs: &Bfs<S, P>, starts: &[S], goal: G) -> Vec<Option<usize>>
    where
        S: State + Send + Sync,
        P: Neighbors<S> + Sync,
        G: Goal<S> + Sync,
    {
        self.install(|| {
            starts
                .par_iter()
                .map(|start| bfs.hops_to_reach(start, |state: &S| goal.is_goal(state)))
                .collect()
        })
    }

    /// Full reachability map from each start.
    pub fn reachable_from_each<S, P>(&self, bfs: &Bfs<S, P>, starts: &[S]) -> Vec<HashMap<S, usize>>
    where
        S: State + Send + Sync,
        P: Neighbors<S> + Sync,
    {
        self.install(|| starts.par_iter().map(|start| bfs.reachable(start)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::Target;

    fn line(n: &i32) -> Vec<i32> {
        [n - 1, n + 1]
            .into_iter()
            .filter(|m| (0..100).contains(m))
            .collect()
    }

    #[test]
    fn test_hops_from_matches_sequential() {
        let bfs = Bfs::new(line);
        let starts: Vec<i32> = (0..100).step_by(7).collect();
        let parallel = ParallelSearch::new().hops_from(&bfs, &starts, Target(50));
        let sequential: Vec<_> = starts
            .iter()
            .map(|s| bfs.hops_to_reach(s, Target(50)))
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_custom_pool() {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(2)
            .build()
            .unwrap();
        let search = ParallelSearch::with_pool(Arc::new(pool));
        let bfs = Bfs::new(line);
        let maps = search.reachable_from_each(&bfs, &[0, 99]);
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0][&99], 99);
        assert_eq!(maps[1][&0], 99);
    }

    #[test]
    fn test_first_match_respects_input_order() {
        // each candidate blocks one cell; report the first that disconnects 0 from 9
        let candidates: Vec<i32> = vec![-5, 20, 4, 7, 3];
        let found = ParallelSearch::new().first_match(&candidates, |&blocked| {
            let bfs = Bfs::new(|n: &i32| {
                [n - 1, n + 1]
                    .into_iter()
                    .filter(|m| (0..10).contains(m))
                    .collect::<Vec<_>>()
            })
            .with_visited([blocked]);
            bfs.hops_to_reach(&0, Target(9)).is_none().then_some(blocked)
        });
        assert_eq!(found, Some((2, 4)));
    }

    #[test]
    fn test_map_preserves_order() {
        let out = ParallelSearch::new().map((0..50).collect(), |n: u64| n * n);
        assert_eq!(out, (0..50).map(|n: u64| n * n).collect::<Vec<_>>());
    }
}
