//! Single-threaded memo cache.

use std::cell::RefCell;
use std::collections::HashSet;
use std::hash::Hash;
use std::marker::PhantomData;

use tracing::trace;

use super::backend::MemoBackend;
use super::problem::{ClosureRecurrence, Recurrence};
use crate::error::MemoError;

/// A memo cache for recursive computations with lazy dependency resolution.
///
/// Each value is computed at most once; dependencies are resolved on demand.
/// The cache is a plain value owned by the caller, typically captured by a
/// neighbor closure or kept next to a search engine, so independent caches
/// never share state.
///
/// Unlike a bare recursive function, a dependency cycle is detected and
/// reported as [`MemoError::Cycle`]; the cache remains usable afterwards.
///
/// # Type Parameters
///
/// - `I`: Index type
/// - `K`: Value type
/// - `B`: Backend storage type
/// - `P`: Recurrence type
///
/// # Example (closure-based)
///
/// ```rust
/// use aoc_search::memo::{Memo, VecBackend};
///
/// let memo = Memo::new(
///     VecBackend::new(),
///     |n: &usize| if *n == 0 { vec![] } else { vec![n - 1] },
///     |n: &usize, deps: Vec<u64>| if *n == 0 { 1 } else { (*n as u64) * deps[0] },
/// );
///
/// assert_eq!(memo.get(&5), Ok(120));
/// ```
pub struct Memo<I, K, B, P>
where
    B: MemoBackend<I, K>,
    P: Recurrence<I, K>,
{
    backend: RefCell<B>,
    in_progress: RefCell<HashSet<I>>,
    problem: P,
    _phantom: PhantomData<K>,
}

impl<I, K, B, P> Memo<I, K, B, P>
where
    I: Hash + Eq + Clone,
    K: Clone,
    B: MemoBackend<I, K>,
    P: Recurrence<I, K>,
{
    /// Creates a cache over `problem`, storing values in `backend`.
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            in_progress: RefCell::new(HashSet::new()),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Retrieves the value for `index`, computing it and its dependencies if
    /// necessary.
    ///
    /// # Errors
    ///
    /// [`MemoError::Cycle`] when `index` transitively depends on itself.
    pub fn get(&self, index: &I) -> Result<K, MemoError> {
        if let Some(value) = self.backend.borrow().get(index) {
            return Ok(value.clone());
        }

        if !self.in_progress.borrow_mut().insert(index.clone()) {
            trace!("memo dependency cycle");
            return Err(MemoError::Cycle);
        }
        // No borrow is held while dependencies recurse
        let resolved: Result<Vec<K>, MemoError> = self
            .problem
            .deps(index)
            .iter()
            .map(|dep| self.get(dep))
            .collect();
        self.in_progress.borrow_mut().remove(index);

        let value = self.problem.compute(index, resolved?);
        Ok(self
            .backend
            .borrow_mut()
            .get_or_insert(index.clone(), || value)
            .clone())
    }

    /// Number of values computed so far.
    pub fn len(&self) -> usize {
        self.backend.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}

impl<I, K, B> Memo<I, K, B, ClosureRecurrence<I, K, fn(&I) -> Vec<I>, fn(&I, Vec<K>) -> K>>
where
    I: Hash + Eq + Clone,
    K: Clone,
    B: MemoBackend<I, K>,
{
    /// Creates a cache from a dependency closure and a compute closure.
    pub fn new<D, C>(
        backend: B,
        dep_fn: D,
        compute_fn: C,
    ) -> Memo<I, K, B, ClosureRecurrence<I, K, D, C>>
    where
        D: Fn(&I) -> Vec<I>,
        C: Fn(&I, Vec<K>) -> K,
    {
        Memo::with_problem(backend, ClosureRecurrence::new(dep_fn, compute_fn))
    }
}
