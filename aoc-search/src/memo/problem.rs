//! Trait-based recurrence definition.

use std::marker::PhantomData;

/// A recurrence whose values depend on other values of the same recurrence.
///
/// Implement this trait to describe the dependency structure and the
/// combining step; [`Memo`](super::Memo) resolves dependencies recursively
/// and computes each index at most once.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type
///
/// # Example
///
/// ```rust
/// use aoc_search::memo::{HashMapBackend, Memo, Recurrence};
///
/// /// Ways to climb `n` stairs taking one or two steps at a time.
/// struct Stairs;
///
/// impl Recurrence<u32, u64> for Stairs {
///     fn deps(&self, n: &u32) -> Vec<u32> {
///         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
///     }
///
///     fn compute(&self, _n: &u32, deps: Vec<u64>) -> u64 {
///         if deps.is_empty() { 1 } else { deps[0] + deps[1] }
///     }
/// }
///
/// let memo = Memo::with_problem(HashMapBackend::new(), Stairs);
/// assert_eq!(memo.get(&10), Ok(89));
/// ```
pub trait Recurrence<I, K> {
    /// Returns the indices that `index` depends on.
    ///
    /// Base cases return an empty vector.
    fn deps(&self, index: &I) -> Vec<I>;

    /// Computes the value for `index` from its resolved dependencies, given in
    /// the same order as [`Recurrence::deps`] returned them.
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Adapts a dependency closure and a compute closure to [`Recurrence`].
pub struct ClosureRecurrence<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    dep_fn: D,
    compute_fn: C,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, D, C> ClosureRecurrence<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    pub fn new(dep_fn: D, compute_fn: C) -> Self {
        Self {
            dep_fn,
            compute_fn,
            _phantom: PhantomData,
        }
    }
}

impl<I, K, D, C> Recurrence<I, K> for ClosureRecurrence<I, K, D, C>
where
    D: Fn(&I) -> Vec<I>,
    C: Fn(&I, Vec<K>) -> K,
{
    fn deps(&self, index: &I) -> Vec<I> {
        (self.dep_fn)(index)
    }

    fn compute(&self, index: &I, deps: Vec<K>) -> K {
        (self.compute_fn)(index, deps)
    }
}
