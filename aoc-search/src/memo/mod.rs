//! Consumer-owned memoization for work layered on top of the search engines.
//!
//! Some puzzles answer many similar queries by combining searches with a
//! memoized recursion (for example, the cost of typing a sequence through
//! nested keypads, where each layer's cost is a shortest path on the layer
//! below). This module provides the caches for that, as ordinary values the
//! caller owns and hands to its neighbor closures. Nothing is cached
//! process-wide, so independent searches never observe each other.
//!
//! # Cache Types
//!
//! - [`Memo`]: lazily resolved recurrence with cycle detection
//! - [`CachedNeighbors`]: remembers each state's neighbor list across queries
//!
//! # Backend Types
//!
//! - [`VecBackend`]: dense `usize` indices (auto-growing)
//! - [`HashMapBackend`]: arbitrary hashable indices
//!
//! # Example: memoized edge costs inside a search
//!
//! ```rust
//! use aoc_search::{Dijkstra, Target};
//! use aoc_search::memo::{HashMapBackend, Memo, Recurrence};
//!
//! /// Cost of a jump of length `n`: triangular numbers, computed recursively.
//! struct JumpCost;
//!
//! impl Recurrence<u64, u64> for JumpCost {
//!     fn deps(&self, n: &u64) -> Vec<u64> {
//!         if *n == 0 { vec![] } else { vec![n - 1] }
//!     }
//!     fn compute(&self, n: &u64, deps: Vec<u64>) -> u64 {
//!         deps.first().map_or(0, |prev| prev + n)
//!     }
//! }
//!
//! let costs = Memo::with_problem(HashMapBackend::new(), JumpCost);
//! let dijkstra = Dijkstra::new(|pos: &u64| {
//!     (1..=3)
//!         .filter_map(|len| costs.get(&len).ok().map(|cost| (pos + len, cost)))
//!         .collect::<Vec<_>>()
//! });
//!
//! // Unit jumps (cost 1 each) beat longer jumps (3 and 6)
//! assert_eq!(dijkstra.cost_to_reach(&0, Target(6)), Some(6));
//! assert_eq!(costs.len(), 4);
//! ```
//!
//! # Example: cycles are reported, not overflowed
//!
//! ```rust
//! use aoc_search::MemoError;
//! use aoc_search::memo::{Memo, VecBackend};
//!
//! let memo = Memo::new(
//!     VecBackend::new(),
//!     |n: &usize| vec![(n + 1) % 3],
//!     |_: &usize, deps: Vec<u32>| deps[0] + 1,
//! );
//! assert_eq!(memo.get(&0), Err(MemoError::Cycle));
//! ```

mod backend;
mod cache;
mod neighbors;
mod problem;

pub use backend::{HashMapBackend, MemoBackend, VecBackend};
pub use cache::Memo;
pub use neighbors::CachedNeighbors;
pub use problem::{ClosureRecurrence, Recurrence};
