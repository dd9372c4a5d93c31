//! Weighted best-first search (Dijkstra's algorithm).

use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, HashSet};
use std::marker::PhantomData;

use tracing::debug;

use crate::goal::Goal;
use crate::path::{PredecessorSets, Predecessors};
use crate::problem::{Cost, FnWeighted, State, WeightedNeighbors};

/// Frontier entry, ordered by cumulative cost only.
#[derive(Debug, Clone)]
struct HeapEntry<S> {
    cost: Cost,
    state: S,
}

impl<S> PartialEq for HeapEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<S> Eq for HeapEntry<S> {}

impl<S> PartialOrd for HeapEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for HeapEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost.cmp(&other.cost)
    }
}

type Frontier<S> = BinaryHeap<Reverse<HeapEntry<S>>>;

/// Dijkstra search over a weighted search space with non-negative costs.
///
/// The frontier is a binary min-heap keyed by cumulative cost. Superseded
/// heap entries are not removed eagerly; an entry whose state is already
/// settled is discarded when it is popped. Once a state is settled its cost
/// is final, which relies on every edge cost being non-negative.
///
/// Extraction order among states of equal cost is unspecified. Returned
/// costs are deterministic; which of several equally cheap paths is returned
/// is not.
///
/// # Example (trait-based)
///
/// ```rust
/// use aoc_search::{Cost, Dijkstra, Target, WeightedNeighbors};
///
/// struct Roads;
///
/// impl WeightedNeighbors<char> for Roads {
///     fn neighbors(&self, town: &char) -> impl IntoIterator<Item = (char, Cost)> {
///         match town {
///             'a' => vec![('b', 5), ('c', 1)],
///             'c' => vec![('b', 1)],
///             _ => vec![],
///         }
///     }
/// }
///
/// let dijkstra = Dijkstra::with_problem(Roads);
/// assert_eq!(dijkstra.cost_to_reach(&'a', Target('b')), Some(2));
/// assert_eq!(
///     dijkstra.shortest_path(&'a', Target('b')),
///     Some((vec!['a', 'c', 'b'], 2))
/// );
/// ```
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_search::Dijkstra;
///
/// let dijkstra = Dijkstra::new(|n: &u64| [(n + 1, 1), (n * 2, 1)]);
/// assert_eq!(dijkstra.cost_to_reach(&1, |n: &u64| *n == 20), Some(5));
/// ```
pub struct Dijkstra<S, P> {
    problem: P,
    settled: HashSet<S>,
    capacity: usize,
    _phantom: PhantomData<S>,
}

/// Outcome of one traversal.
struct Run<S> {
    best: HashMap<S, Cost>,
    parents: Predecessors<S>,
    found: Option<(S, Cost)>,
}

impl<S, P> Dijkstra<S, P> {
    /// Creates a search over the given problem definition.
    pub fn with_problem(problem: P) -> Self {
        Self {
            problem,
            settled: HashSet::new(),
            capacity: 0,
            _phantom: PhantomData,
        }
    }

    /// Pre-sizes the per-query cost map.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Returns the problem definition.
    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<S, F> Dijkstra<S, FnWeighted<F>> {
    /// Creates a search from a weighted neighbor closure.
    pub fn new(neighbors: F) -> Self {
        Self::with_problem(FnWeighted(neighbors))
    }
}

impl<S: State, P: WeightedNeighbors<S>> Dijkstra<S, P> {
    /// Treats states as settled before any query runs.
    ///
    /// Settled states are never relaxed, so they act as removed from the
    /// graph. The start state of a query is always explored.
    pub fn with_settled(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.settled.extend(states);
        self
    }

    /// Minimum total cost from `start` to any state satisfying `goal`.
    ///
    /// `None` means no goal state is reachable; a reachable goal at cost zero
    /// is `Some(0)`.
    pub fn cost_to_reach(&self, start: &S, goal: impl Goal<S>) -> Option<Cost> {
        self.run(start, &goal, false).found.map(|(_, cost)| cost)
    }

    /// Cheapest path from `start` to a state satisfying `goal`, inclusive of
    /// both endpoints, together with its total cost.
    pub fn shortest_path(&self, start: &S, goal: impl Goal<S>) -> Option<(Vec<S>, Cost)> {
        let run = self.run(start, &goal, true);
        run.found.map(|(end, cost)| (run.parents.path_to(end), cost))
    }

    /// Every state reachable from `start`, with its minimum total cost.
    pub fn reachable(&self, start: &S) -> HashMap<S, Cost> {
        self.run(start, &|_: &S| false, false).best
    }

    /// Minimum cost to a goal together with every state lying on at least one
    /// minimum-cost path from `start` to a goal state.
    ///
    /// When several goal states are reached at the same minimum cost, paths
    /// into all of them are included. Paths end at the first goal state they
    /// meet.
    pub fn best_path_states(&self, start: &S, goal: impl Goal<S>) -> Option<(Cost, HashSet<S>)> {
        let mut best: HashMap<S, Cost> = HashMap::with_capacity(self.capacity);
        let mut settled = self.seeded(start);
        let mut parents = PredecessorSets::new();
        let mut frontier: Frontier<S> = BinaryHeap::new();
        let mut goal_cost: Option<Cost> = None;
        let mut ends = Vec::new();

        best.insert(start.clone(), 0);
        frontier.push(Reverse(HeapEntry {
            cost: 0,
            state: start.clone(),
        }));

        while let Some(Reverse(HeapEntry { cost, state })) = frontier.pop() {
            if let Some(limit) = goal_cost
                && cost > limit
            {
                break;
            }
            if !settled.insert(state.clone()) {
                continue;
            }
            if goal.is_goal(&state) {
                goal_cost = Some(cost);
                ends.push(state);
                continue;
            }

            for (next, step) in self.problem.neighbors(&state) {
                let candidate = cost + step;
                // A settled state can still gain an equal-cost parent over a zero-cost edge
                match best.get(&next) {
                    Some(&known) if candidate > known => {}
                    Some(&known) if candidate == known => parents.add(next, state.clone()),
                    _ if settled.contains(&next) => {}
                    _ => {
                        best.insert(next.clone(), candidate);
                        parents.replace(next.clone(), state.clone());
                        frontier.push(Reverse(HeapEntry {
                            cost: candidate,
                            state: next,
                        }));
                    }
                }
            }
        }

        debug!(settled = settled.len(), goals = ends.len(), "dijkstra collected best paths");
        goal_cost.map(|cost| (cost, parents.states_on_paths(ends)))
    }

    /// Per-query settled set: the caller's seed minus the start state.
    fn seeded(&self, start: &S) -> HashSet<S> {
        let mut settled = self.settled.clone();
        settled.remove(start);
        settled.reserve(self.capacity);
        settled
    }

    fn run<G: Goal<S>>(&self, start: &S, goal: &G, track_paths: bool) -> Run<S> {
        let mut best: HashMap<S, Cost> = HashMap::with_capacity(self.capacity);
        let mut settled = self.seeded(start);
        let mut parents = if track_paths {
            Predecessors::with_capacity(self.capacity)
        } else {
            Predecessors::new()
        };
        let mut frontier: Frontier<S> = BinaryHeap::new();

        best.insert(start.clone(), 0);
        frontier.push(Reverse(HeapEntry {
            cost: 0,
            state: start.clone(),
        }));

        while let Some(Reverse(HeapEntry { cost, state })) = frontier.pop() {
            if !settled.insert(state.clone()) {
                continue;
            }
            if goal.is_goal(&state) {
                debug!(settled = settled.len(), cost, "dijkstra reached goal");
                return Run {
                    best,
                    parents,
                    found: Some((state, cost)),
                };
            }

            for (next, step) in self.problem.neighbors(&state) {
                if settled.contains(&next) {
                    continue;
                }
                let candidate = cost + step;
                if best.get(&next).is_some_and(|&known| known <= candidate) {
                    continue;
                }
                best.insert(next.clone(), candidate);
                if track_paths {
                    parents.set(next.clone(), state.clone());
                }
                frontier.push(Reverse(HeapEntry {
                    cost: candidate,
                    state: next,
                }));
            }
        }

        debug!(settled = settled.len(), "dijkstra exhausted frontier");
        Run {
            best,
            parents,
            found: None,
        }
    }
}
