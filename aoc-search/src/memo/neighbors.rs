//! Caching wrapper around a neighbor function.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::problem::{Cost, Neighbors, State, WeightedNeighbors};

/// Remembers the neighbor list of every state it has expanded.
///
/// Worth it when enumerating a state's neighbors is expensive (simulating a
/// machine step, scanning a large grid) and several queries walk the same
/// space. `E` is the edge type: `S` for unweighted problems, `(S, Cost)` for
/// weighted ones.
///
/// The cache uses interior mutability and is not `Sync`; give each thread
/// its own instance.
///
/// # Example
///
/// ```rust
/// use aoc_search::{Bfs, FnNeighbors, Target};
/// use aoc_search::memo::CachedNeighbors;
///
/// let cached = CachedNeighbors::new(FnNeighbors(|n: &u32| vec![n + 1, n * 2]));
/// let bfs = Bfs::with_problem(&cached);
///
/// assert_eq!(bfs.hops_to_reach(&1, Target(12)), Some(4));
/// let expanded = cached.len();
/// assert_eq!(bfs.hops_to_reach(&1, Target(12)), Some(4));
/// assert_eq!(cached.len(), expanded);
/// assert!(cached.hits() > 0);
/// ```
pub struct CachedNeighbors<S, E, P> {
    problem: P,
    cache: RefCell<HashMap<S, Vec<E>>>,
    hits: Cell<usize>,
}

impl<S, E, P> CachedNeighbors<S, E, P> {
    pub fn new(problem: P) -> Self {
        Self {
            problem,
            cache: RefCell::new(HashMap::new()),
            hits: Cell::new(0),
        }
    }

    /// Number of states whose neighbors are cached.
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of lookups answered from the cache.
    pub fn hits(&self) -> usize {
        self.hits.get()
    }

    /// Forgets every cached neighbor list.
    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
        self.hits.set(0);
    }
}

impl<S: State, E: Clone, P> CachedNeighbors<S, E, P> {
    fn lookup<I>(&self, state: &S, expand: impl FnOnce() -> I) -> Vec<E>
    where
        I: IntoIterator<Item = E>,
    {
        if let Some(edges) = self.cache.borrow().get(state) {
            self.hits.set(self.hits.get() + 1);
            return edges.clone();
        }
        let edges: Vec<E> = expand().into_iter().collect();
        self.cache.borrow_mut().insert(state.clone(), edges.clone());
        edges
    }
}

impl<S: State, P: Neighbors<S>> Neighbors<S> for CachedNeighbors<S, S, P> {
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = S> {
        self.lookup(state, || self.problem.neighbors(state))
    }
}

impl<S: State, P: WeightedNeighbors<S>> WeightedNeighbors<S> for CachedNeighbors<S, (S, Cost), P> {
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, Cost)> {
        self.lookup(state, || self.problem.neighbors(state))
    }
}
