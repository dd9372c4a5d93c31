//! Storage backends for [`Memo`](super::Memo).

use std::collections::HashMap;
use std::hash::Hash;

/// Storage for memoized values.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never stored
/// - `get_or_insert` stores the value produced by `init` only if the index is
///   absent; an existing value is kept and returned
pub trait MemoBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K>;

    fn get_or_insert(&mut self, index: I, init: impl FnOnce() -> K) -> &K;

    /// Number of stored values.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for dense `usize` indices starting at 0.
///
/// The Vec grows to the largest index stored.
#[derive(Debug, Clone)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    stored: usize,
}

impl<K> VecBackend<K> {
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            stored: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            stored: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> MemoBackend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_insert(&mut self, index: usize, init: impl FnOnce() -> K) -> &K {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }
        let slot = &mut self.data[index];
        if slot.is_none() {
            self.stored += 1;
        }
        slot.get_or_insert_with(init)
    }

    fn len(&self) -> usize {
        self.stored
    }
}

/// A HashMap-based backend for arbitrary hashable indices.
#[derive(Debug, Clone)]
pub struct HashMapBackend<I, K> {
    data: HashMap<I, K>,
}

impl<I, K> HashMapBackend<I, K> {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
        }
    }
}

impl<I, K> Default for HashMapBackend<I, K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Hash + Eq, K> MemoBackend<I, K> for HashMapBackend<I, K> {
    fn get(&self, index: &I) -> Option<&K> {
        self.data.get(index)
    }

    fn get_or_insert(&mut self, index: I, init: impl FnOnce() -> K) -> &K {
        self.data.entry(index).or_insert_with(init)
    }

    fn len(&self) -> usize {
        self.data.len()
    }
}
