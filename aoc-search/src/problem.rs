//! Trait-based definition of a search space.

use std::hash::Hash;

/// Cumulative and per-edge cost of a weighted search.
///
/// Unsigned, so the non-negative edge precondition of Dijkstra's algorithm
/// holds by construction. Sums are added without an overflow guard.
pub type Cost = u64;

/// Marker for values usable as search states.
///
/// States are compared by value: two states are the same node of the search
/// space iff they are equal. Extra per-state metadata (facing direction,
/// streak counters, elapsed time) belongs inside the state itself.
pub trait State: Clone + Eq + Hash {}

impl<T> State for T where T: Clone + Eq + Hash {}

/// An unweighted search space: every edge costs one hop.
///
/// # Example
///
/// ```rust
/// use aoc_search::{Bfs, Neighbors, Target};
///
/// struct Line {
///     len: u32,
/// }
///
/// impl Neighbors<u32> for Line {
///     fn neighbors(&self, n: &u32) -> impl IntoIterator<Item = u32> {
///         [n.checked_sub(1), Some(n + 1).filter(|next| *next < self.len)]
///             .into_iter()
///             .flatten()
///     }
/// }
///
/// let bfs = Bfs::with_problem(Line { len: 10 });
/// assert_eq!(bfs.hops_to_reach(&2, Target(7)), Some(5));
/// ```
pub trait Neighbors<S> {
    /// Returns the states reachable from `state` in one step.
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = S>;
}

/// A weighted search space.
///
/// Every edge cost must be non-negative, which `Cost` being unsigned
/// enforces. A state listed as its own neighbor is tolerated and never
/// improves its recorded cost.
pub trait WeightedNeighbors<S> {
    /// Returns the states reachable from `state` in one step, each paired
    /// with the cost of that step.
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, Cost)>;
}

impl<S, P> Neighbors<S> for &P
where
    P: Neighbors<S> + ?Sized,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = S> {
        (**self).neighbors(state)
    }
}

impl<S, P> WeightedNeighbors<S> for &P
where
    P: WeightedNeighbors<S> + ?Sized,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, Cost)> {
        (**self).neighbors(state)
    }
}

/// Adapts a closure `Fn(&S) -> impl IntoIterator<Item = S>` to [`Neighbors`].
#[derive(Debug, Clone, Copy)]
pub struct FnNeighbors<F>(pub F);

impl<S, F, I> Neighbors<S> for FnNeighbors<F>
where
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = S> {
        (self.0)(state)
    }
}

/// Adapts a closure `Fn(&S) -> impl IntoIterator<Item = (S, Cost)>` to
/// [`WeightedNeighbors`].
#[derive(Debug, Clone, Copy)]
pub struct FnWeighted<F>(pub F);

impl<S, F, I> WeightedNeighbors<S> for FnWeighted<F>
where
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, Cost)>,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, Cost)> {
        (self.0)(state)
    }
}

/// Lifts an unweighted problem into a weighted one where every edge costs 1.
#[derive(Debug, Clone, Copy)]
pub struct UnitCost<P>(pub P);

impl<S, P> WeightedNeighbors<S> for UnitCost<P>
where
    P: Neighbors<S>,
{
    fn neighbors(&self, state: &S) -> impl IntoIterator<Item = (S, Cost)> {
        self.0.neighbors(state).into_iter().map(|next| (next, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edges_of<P: WeightedNeighbors<u8>>(problem: P, state: u8) -> Vec<(u8, Cost)> {
        problem.neighbors(&state).into_iter().collect()
    }

    #[test]
    fn test_unit_cost_assigns_one_to_every_edge() {
        let problem = UnitCost(FnNeighbors(|n: &u8| vec![n + 1, n + 2]));
        assert_eq!(edges_of(problem, 3), vec![(4, 1), (5, 1)]);
    }

    #[test]
    fn test_reference_forwards_to_problem() {
        let problem = FnWeighted(|n: &u8| [(n * 2, 7)]);
        assert_eq!(edges_of(&problem, 4), vec![(8, 7)]);
        assert_eq!(edges_of(&problem, 5), vec![(10, 7)]);
    }
}
