//! Predecessor bookkeeping and path reconstruction.

use std::collections::{HashMap, HashSet};

use crate::problem::State;

/// Records, for every discovered state, the state it was reached from.
///
/// Start states have no entry. Walking entries back from any recorded state
/// always ends at a start state because a predecessor is only written when a
/// state is discovered from an already discovered one.
#[derive(Debug, Clone)]
pub(crate) struct Predecessors<S> {
    parents: HashMap<S, S>,
}

impl<S: State> Predecessors<S> {
    pub(crate) fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            parents: HashMap::with_capacity(capacity),
        }
    }

    /// Records (or replaces) the predecessor of `state`.
    pub(crate) fn set(&mut self, state: S, parent: S) {
        self.parents.insert(state, parent);
    }

    /// Builds the path ending at `end`, ordered from its start state to `end`.
    pub(crate) fn path_to(&self, end: S) -> Vec<S> {
        let mut path = vec![end];
        while let Some(parent) = path.last().and_then(|state| self.parents.get(state)) {
            path.push(parent.clone());
        }
        path.reverse();
        path
    }
}

/// Records every predecessor through which a state is reached at its minimal
/// cost, for queries over all optimal paths.
#[derive(Debug, Clone)]
pub(crate) struct PredecessorSets<S> {
    parents: HashMap<S, Vec<S>>,
}

impl<S: State> PredecessorSets<S> {
    pub(crate) fn new() -> Self {
        Self {
            parents: HashMap::new(),
        }
    }

    /// Drops previously recorded predecessors: a strictly cheaper route was found.
    pub(crate) fn replace(&mut self, state: S, parent: S) {
        self.parents.insert(state, vec![parent]);
    }

    /// Adds another predecessor reaching `state` at the same cost.
    pub(crate) fn add(&mut self, state: S, parent: S) {
        self.parents.entry(state).or_default().push(parent);
    }

    /// Collects every state lying on a recorded route into any of `ends`.
    pub(crate) fn states_on_paths(&self, ends: impl IntoIterator<Item = S>) -> HashSet<S> {
        let mut seen = HashSet::new();
        let mut stack: Vec<S> = ends.into_iter().collect();
        while let Some(state) = stack.pop() {
            if !seen.insert(state.clone()) {
                continue;
            }
            if let Some(parents) = self.parents.get(&state) {
                stack.extend(parents.iter().cloned());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_to_start_is_single_state() {
        let preds: Predecessors<char> = Predecessors::new();
        assert_eq!(preds.path_to('a'), vec!['a']);
    }

    #[test]
    fn test_path_to_follows_latest_parent() {
        let mut preds = Predecessors::new();
        preds.set('b', 'a');
        preds.set('c', 'b');
        preds.set('c', 'a');
        assert_eq!(preds.path_to('c'), vec!['a', 'c']);
        assert_eq!(preds.path_to('b'), vec!['a', 'b']);
    }

    #[test]
    fn test_states_on_paths_merges_branches() {
        // a -> b -> d and a -> c -> d, both optimal; e was superseded
        let mut sets = PredecessorSets::new();
        sets.replace('b', 'a');
        sets.replace('c', 'a');
        sets.replace('d', 'e');
        sets.replace('d', 'b');
        sets.add('d', 'c');

        let states = sets.states_on_paths(['d']);
        assert_eq!(states, HashSet::from(['a', 'b', 'c', 'd']));
    }
}
