//! Termination conditions for goal-directed searches.

/// Decides whether a state ends a goal-directed search.
///
/// Implemented for any `Fn(&S) -> bool` and for [`Target`], so callers can
/// pass either a predicate or a fixed state.
///
/// ```rust
/// use aoc_search::{Goal, Target};
///
/// assert!(Target(3).is_goal(&3));
/// assert!((|n: &i32| *n >= 7).is_goal(&9));
/// ```
pub trait Goal<S> {
    fn is_goal(&self, state: &S) -> bool;
}

impl<S, F> Goal<S> for F
where
    F: Fn(&S) -> bool,
{
    fn is_goal(&self, state: &S) -> bool {
        self(state)
    }
}

/// Goal satisfied by exactly one state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Target<S>(pub S);

impl<S: PartialEq> Goal<S> for Target<S> {
    fn is_goal(&self, state: &S) -> bool {
        self.0 == *state
    }
}

/// Goal satisfied by any of several states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf<S>(pub Vec<S>);

impl<S: PartialEq> Goal<S> for AnyOf<S> {
    fn is_goal(&self, state: &S) -> bool {
        self.0.contains(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check<S>(goal: impl Goal<S>, state: &S) -> bool {
        goal.is_goal(state)
    }

    #[test]
    fn test_target_matches_single_state() {
        assert!(check(Target('E'), &'E'));
        assert!(!check(Target('E'), &'S'));
    }

    #[test]
    fn test_any_of() {
        let exits = AnyOf(vec![(0, 0), (3, 4)]);
        assert!(check(exits.clone(), &(3, 4)));
        assert!(!check(exits, &(1, 1)));
        assert!(!check(AnyOf(Vec::<u8>::new()), &0));
    }

    #[test]
    fn test_predicate_goal() {
        assert!(check(|n: &u32| n % 5 == 0, &25));
        assert!(!check(|n: &u32| n % 5 == 0, &26));
    }
}
