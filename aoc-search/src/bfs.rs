//! Unweighted breadth-first search.

use std::collections::{HashMap, HashSet, VecDeque};
use std::marker::PhantomData;

use tracing::debug;

use crate::goal::Goal;
use crate::path::Predecessors;
use crate::problem::{FnNeighbors, Neighbors, State};

/// Breadth-first search over an unweighted search space.
///
/// Every edge costs one hop, so the first time a state is dequeued its hop
/// count is minimal. States are marked visited when they are enqueued, which
/// keeps a state from being queued twice through different parents.
///
/// The engine holds no mutable state: each query allocates its own queue and
/// visited set, so one `Bfs` can serve many queries, including concurrent
/// ones when the problem is `Sync`.
///
/// # Example (trait-based)
///
/// ```rust
/// use aoc_search::{Bfs, Neighbors, Target};
///
/// struct Ring(u32);
///
/// impl Neighbors<u32> for Ring {
///     fn neighbors(&self, n: &u32) -> impl IntoIterator<Item = u32> {
///         [(n + 1) % self.0, (n + self.0 - 1) % self.0]
///     }
/// }
///
/// let bfs = Bfs::with_problem(Ring(10));
/// assert_eq!(bfs.shortest_path(&1, Target(8)), Some(vec![1, 0, 9, 8]));
/// assert_eq!(bfs.reachable(&0).len(), 10);
/// ```
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_search::Bfs;
///
/// let bfs = Bfs::new(|n: &u32| if *n < 20 { vec![n * 2, n + 1] } else { vec![] });
/// assert_eq!(bfs.hops_to_reach(&1, |n: &u32| *n == 10), Some(4));
/// ```
pub struct Bfs<S, P> {
    problem: P,
    visited: HashSet<S>,
    capacity: usize,
    _phantom: PhantomData<S>,
}

/// Outcome of one traversal.
struct Run<S> {
    hops: HashMap<S, usize>,
    parents: Predecessors<S>,
    found: Option<(S, usize)>,
}

impl<S, P> Bfs<S, P> {
    /// Creates a search over the given problem definition.
    pub fn with_problem(problem: P) -> Self {
        Self {
            problem,
            visited: HashSet::new(),
            capacity: 0,
            _phantom: PhantomData,
        }
    }

    /// Pre-sizes the per-query visited map.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<S, F> Bfs<S, FnNeighbors<F>> {
    /// Creates a search from a neighbor closure.
    pub fn new(neighbors: F) -> Self {
        Self::with_problem(FnNeighbors(neighbors))
    }
}

impl<S: State, P: Neighbors<S>> Bfs<S, P> {
    /// Marks states as already visited before any query runs.
    ///
    /// These states are never discovered as neighbors, which lets a caller
    /// resume an earlier search or wall off parts of the space without
    /// rebuilding the neighbor function. Start states are always explored.
    pub fn with_visited(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.visited.extend(states);
        self
    }

    /// Finds a shortest path from `start` to the first state satisfying `goal`.
    ///
    /// The path includes both endpoints; a start that already satisfies the
    /// goal yields a single-element path. Returns `None` when no goal state
    /// is reachable.
    pub fn shortest_path(&self, start: &S, goal: impl Goal<S>) -> Option<Vec<S>> {
        self.shortest_path_from([start.clone()], goal)
    }

    /// Multi-source variant of [`Bfs::shortest_path`]: the path starts at
    /// whichever start state is nearest to a goal.
    pub fn shortest_path_from(
        &self,
        starts: impl IntoIterator<Item = S>,
        goal: impl Goal<S>,
    ) -> Option<Vec<S>> {
        let run = self.run(starts, &goal, true);
        run.found.map(|(end, _)| run.parents.path_to(end))
    }

    /// Number of hops from `start` to the nearest state satisfying `goal`.
    pub fn hops_to_reach(&self, start: &S, goal: impl Goal<S>) -> Option<usize> {
        self.run([start.clone()], &goal, false).found.map(|(_, hops)| hops)
    }

    /// Every state reachable from `start`, with its hop count.
    pub fn reachable(&self, start: &S) -> HashMap<S, usize> {
        self.reachable_from([start.clone()])
    }

    /// Every state reachable from any of `starts`, with its hop count from the
    /// nearest start.
    pub fn reachable_from(&self, starts: impl IntoIterator<Item = S>) -> HashMap<S, usize> {
        self.run(starts, &|_: &S| false, false).hops
    }

    fn run<G: Goal<S>>(
        &self,
        starts: impl IntoIterator<Item = S>,
        goal: &G,
        track_paths: bool,
    ) -> Run<S> {
        let mut hops: HashMap<S, usize> = HashMap::with_capacity(self.capacity);
        let mut parents = if track_paths {
            Predecessors::with_capacity(self.capacity)
        } else {
            Predecessors::new()
        };
        let mut queue = VecDeque::new();

        for start in starts {
            if !hops.contains_key(&start) {
                hops.insert(start.clone(), 0);
                queue.push_back((start, 0));
            }
        }

        while let Some((state, depth)) = queue.pop_front() {
            if goal.is_goal(&state) {
                debug!(visited = hops.len(), hops = depth, "bfs reached goal");
                return Run {
                    hops,
                    parents,
                    found: Some((state, depth)),
                };
            }

            for next in self.problem.neighbors(&state) {
                if hops.contains_key(&next) || self.visited.contains(&next) {
                    continue;
                }
                hops.insert(next.clone(), depth + 1);
                if track_paths {
                    parents.set(next.clone(), state.clone());
                }
                queue.push_back((next, depth + 1));
            }
        }

        debug!(visited = hops.len(), "bfs exhausted queue");
        Run {
            hops,
            parents,
            found: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::Target;

    fn grid_neighbors(size: i32) -> impl Fn(&(i32, i32)) -> Vec<(i32, i32)> {
        move |&(r, c): &(i32, i32)| {
            [(r - 1, c), (r + 1, c), (r, c - 1), (r, c + 1)]
                .into_iter()
                .filter(|&(r, c)| (0..size).contains(&r) && (0..size).contains(&c))
                .collect()
        }
    }

    #[test]
    fn test_start_satisfying_goal_returns_single_state() {
        let bfs = Bfs::new(grid_neighbors(3));
        assert_eq!(bfs.shortest_path(&(1, 1), Target((1, 1))), Some(vec![(1, 1)]));
        assert_eq!(bfs.hops_to_reach(&(1, 1), Target((1, 1))), Some(0));
    }

    #[test]
    fn test_shortest_path_on_open_grid() {
        let bfs = Bfs::new(grid_neighbors(4));
        let path = bfs.shortest_path(&(0, 0), Target((3, 3))).unwrap();
        assert_eq!(path.len(), 7);
        assert_eq!(path.first(), Some(&(0, 0)));
        assert_eq!(path.last(), Some(&(3, 3)));
        for pair in path.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert_eq!((a.0 - b.0).abs() + (a.1 - b.1).abs(), 1);
        }
    }

    #[test]
    fn test_unreachable_goal_is_none() {
        let bfs = Bfs::new(|_: &u8| Vec::<u8>::new());
        assert_eq!(bfs.shortest_path(&0, Target(1)), None);
        assert_eq!(bfs.hops_to_reach(&0, Target(1)), None);
        assert_eq!(bfs.reachable(&0), HashMap::from([(0, 0)]));
    }

    #[test]
    fn test_reachable_counts_hops() {
        let bfs = Bfs::new(grid_neighbors(3));
        let hops = bfs.reachable(&(0, 0));
        assert_eq!(hops.len(), 9);
        assert_eq!(hops[&(0, 0)], 0);
        assert_eq!(hops[&(1, 1)], 2);
        assert_eq!(hops[&(2, 2)], 4);
    }

    #[test]
    fn test_multi_source_uses_nearest_start() {
        let bfs = Bfs::new(|n: &i32| vec![n - 1, n + 1]);
        let hops = bfs.with_capacity(16).hops_to_reach(&0, Target(5));
        assert_eq!(hops, Some(5));

        let bfs = Bfs::new(|n: &i32| if n.abs() < 20 { vec![n - 1, n + 1] } else { vec![] });
        let path = bfs.shortest_path_from([0, 10], Target(7)).unwrap();
        assert_eq!(path, vec![10, 9, 8, 7]);

        let hops = bfs.reachable_from([0, 10]);
        assert_eq!(hops[&5], 5);
        assert_eq!(hops[&6], 4);
        assert_eq!(hops[&-3], 3);
    }

    #[test]
    fn test_visited_states_are_walls() {
        // 0..=9 line; blocking 5 cuts the line in half
        let bfs = Bfs::new(|n: &i32| {
            [n - 1, n + 1]
                .into_iter()
                .filter(|m| (0..10).contains(m))
                .collect::<Vec<_>>()
        })
        .with_visited([5]);

        assert_eq!(bfs.hops_to_reach(&0, Target(9)), None);
        assert_eq!(bfs.reachable(&0).len(), 5);
        assert_eq!(bfs.hops_to_reach(&9, Target(6)), Some(3));
    }

    #[test]
    fn test_self_loops_are_ignored() {
        let bfs = Bfs::new(|n: &u8| if *n < 3 { vec![*n, n + 1] } else { vec![*n] });
        assert_eq!(bfs.hops_to_reach(&0, Target(3)), Some(3));
        assert_eq!(bfs.reachable(&0).len(), 4);
    }
}
