//! Generic state-space search for Advent of Code puzzle solutions
//!
//! Puzzles describe a search space as states plus a neighbor function and
//! get back shortest paths, minimum costs, or full reachability maps.
//!
//! # Overview
//!
//! - [`Bfs`]: breadth-first search for unit-cost edges
//! - [`Dijkstra`]: best-first search for non-negative integer edge costs
//! - [`cost_to_reach`], [`shortest_path`], [`reachable_states`] and friends:
//!   one-shot closure wrappers
//! - [`ParallelSearch`]: many independent queries on Rayon
//! - [`grid`]: rectangular grid geometry for building neighbor functions
//! - [`memo`]: caller-owned memoization caches
//!
//! # Quick Example
//!
//! ```
//! use aoc_search::{Dijkstra, Target};
//!
//! // A state carries everything the rules depend on: here, position and
//! // how many consecutive moves were made in the current direction.
//! #[derive(Clone, PartialEq, Eq, Hash)]
//! struct Crucible {
//!     pos: i32,
//!     streak: u8,
//! }
//!
//! // Moving forward costs 1 but at most 3 times in a row; a pause costs 2.
//! let dijkstra = Dijkstra::new(|c: &Crucible| {
//!     let mut next = vec![(Crucible { pos: c.pos, streak: 0 }, 2)];
//!     if c.streak < 3 {
//!         next.push((Crucible { pos: c.pos + 1, streak: c.streak + 1 }, 1));
//!     }
//!     next
//! });
//!
//! let start = Crucible { pos: 0, streak: 0 };
//! let cost = dijkstra.cost_to_reach(&start, |c: &Crucible| c.pos == 7);
//! assert_eq!(cost, Some(11));
//! ```
//!
//! # Contract
//!
//! States are compared by value (`Clone + Eq + Hash`). Rules that depend on
//! history (facing direction, streaks, elapsed time) are encoded in the state
//! so the engines stay stateless. Edge costs are unsigned, so Dijkstra's
//! non-negative precondition always holds. There is no step cap: a neighbor
//! function over an infinite space must bound itself through its states.
//!
//! An unreachable goal is reported as `None` (or absence from a reachability
//! map), never as a sentinel cost and never as an error.

mod bfs;
mod dijkstra;
mod error;
mod goal;
mod parallel;
mod path;
mod problem;
mod query;

pub mod grid;
pub mod memo;

// Re-export public API
pub use bfs::Bfs;
pub use dijkstra::Dijkstra;
pub use error::{GridError, MemoError};
pub use goal::{AnyOf, Goal, Target};
pub use parallel::ParallelSearch;
pub use problem::{Cost, FnNeighbors, FnWeighted, Neighbors, State, UnitCost, WeightedNeighbors};
pub use query::{
    cost_to_reach, hops_to_reach, reachable_states, reachable_states_weighted, shortest_path,
    shortest_path_weighted,
};
