//! Closure-first query surface.
//!
//! Thin wrappers that build a one-off [`Bfs`] or [`Dijkstra`] from a neighbor
//! closure. Use the engine types directly to share one problem definition
//! across many queries or to seed visited/settled states.

use std::collections::HashMap;

use crate::bfs::Bfs;
use crate::dijkstra::Dijkstra;
use crate::goal::Goal;
use crate::problem::{Cost, State};

/// Minimum total cost from `start` to a state satisfying `goal` over a
/// weighted graph. `None` when unreachable.
///
/// ```rust
/// use aoc_search::cost_to_reach;
///
/// let cost = cost_to_reach(&0u32, |n: &u32| *n >= 7, |n: &u32| [(n + 1, 1), (n + 2, 1)]);
/// assert_eq!(cost, Some(4));
/// ```
pub fn cost_to_reach<S, G, F, I>(start: &S, goal: G, neighbors: F) -> Option<Cost>
where
    S: State,
    G: Goal<S>,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, Cost)>,
{
    Dijkstra::new(neighbors).cost_to_reach(start, goal)
}

/// Cheapest path (inclusive of both endpoints) and its cost over a weighted
/// graph.
pub fn shortest_path_weighted<S, G, F, I>(
    start: &S,
    goal: G,
    neighbors: F,
) -> Option<(Vec<S>, Cost)>
where
    S: State,
    G: Goal<S>,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, Cost)>,
{
    Dijkstra::new(neighbors).shortest_path(start, goal)
}

/// Every state reachable over a weighted graph, with its minimum cost.
pub fn reachable_states_weighted<S, F, I>(start: &S, neighbors: F) -> HashMap<S, Cost>
where
    S: State,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = (S, Cost)>,
{
    Dijkstra::new(neighbors).reachable(start)
}

/// Shortest path (inclusive of both endpoints) over an unweighted graph.
///
/// ```rust
/// use aoc_search::{shortest_path, Target};
///
/// let path = shortest_path(&1u32, Target(6), |n: &u32| vec![n + 1, n * 3]);
/// assert_eq!(path, Some(vec![1, 2, 6]));
/// ```
pub fn shortest_path<S, G, F, I>(start: &S, goal: G, neighbors: F) -> Option<Vec<S>>
where
    S: State,
    G: Goal<S>,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Bfs::new(neighbors).shortest_path(start, goal)
}

/// Hop count from `start` to the nearest state satisfying `goal`.
pub fn hops_to_reach<S, G, F, I>(start: &S, goal: G, neighbors: F) -> Option<usize>
where
    S: State,
    G: Goal<S>,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Bfs::new(neighbors).hops_to_reach(start, goal)
}

/// Every state reachable over an unweighted graph, with its hop count.
pub fn reachable_states<S, F, I>(start: &S, neighbors: F) -> HashMap<S, usize>
where
    S: State,
    F: Fn(&S) -> I,
    I: IntoIterator<Item = S>,
{
    Bfs::new(neighbors).reachable(start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::goal::Target;

    #[test]
    fn test_two_by_two_grid() {
        let neighbors = |&(r, c): &(u8, u8)| {
            let mut out = Vec::new();
            if r > 0 {
                out.push((r - 1, c));
            }
            if r < 1 {
                out.push((r + 1, c));
            }
            if c > 0 {
                out.push((r, c - 1));
            }
            if c < 1 {
                out.push((r, c + 1));
            }
            out
        };
        let weighted = |p: &(u8, u8)| neighbors(p).into_iter().map(|q| (q, 1));

        assert_eq!(cost_to_reach(&(0, 0), Target((1, 1)), weighted), Some(2));
        let path = shortest_path(&(0, 0), Target((1, 1)), neighbors).unwrap();
        assert_eq!(path.len(), 3);
        assert!(path[1] == (0, 1) || path[1] == (1, 0));
    }

    #[test]
    fn test_no_neighbors() {
        let none = |_: &i32| Vec::<i32>::new();
        let none_weighted = |_: &i32| Vec::<(i32, Cost)>::new();
        assert_eq!(shortest_path(&0, Target(1), none), None);
        assert_eq!(hops_to_reach(&0, Target(1), none), None);
        assert_eq!(cost_to_reach(&0, Target(1), none_weighted), None);
        assert_eq!(shortest_path_weighted(&0, Target(1), none_weighted), None);
        assert_eq!(reachable_states(&0, none), HashMap::from([(0, 0)]));
        assert_eq!(reachable_states_weighted(&0, none_weighted), HashMap::from([(0, 0)]));
    }
}
