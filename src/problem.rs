use std::hash::Hash;

/// Caller contract for a search space.
///
/// The engine never inspects state contents; it only stores states in
/// hash-keyed tables, so `State` needs equality and a stable hash and
/// nothing else. Equal states must be interchangeable for cost and
/// backpointer bookkeeping.
///
/// Correctness contract (documented, not runtime-checked):
/// - `heuristic` must be admissible for optimality guarantees to hold:
///   never overestimate the remaining cost when minimizing, never
///   underestimate the remaining reward when maximizing. A non-admissible
///   heuristic silently yields suboptimal results, it is not an error.
/// - Step costs are accumulated with plain `i64` arithmetic; guarding
///   against overflow is the caller's job.
pub trait SearchProblem {
    type State: Clone + Eq + Hash;

    /// Estimate of the remaining cost (or reward) from `state` to a goal.
    fn heuristic(&self, state: &Self::State) -> i64;

    /// Legal transitions out of `state`. May be empty; the explored space
    /// must be finite for the search to terminate.
    fn neighbors(&self, state: &Self::State) -> Vec<Self::State>;

    /// Cost of the `from -> to` transition. Uniform cost 1 unless overridden.
    #[inline]
    fn step_cost(&self, from: &Self::State, to: &Self::State) -> i64 {
        let _ = (from, to);
        1
    }

    /// Goal test, evaluated once per live popped state.
    fn is_goal(&self, state: &Self::State) -> bool;
}

/// A terminal search result: accumulated cost plus the start-to-goal path.
/// Owned by the caller; the engine keeps no reference after returning it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<S> {
    pub cost: i64,
    pub path: Vec<S>,
}

impl<S> Solution<S> {
    /// Number of states on the path, start and goal included.
    #[inline]
    pub fn len(&self) -> usize {
        self.path.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// The goal state the path ends at, if any.
    #[inline]
    pub fn goal(&self) -> Option<&S> {
        self.path.last()
    }
}
