use crate::objective::Objective;
use crate::problem::{SearchProblem, Solution};

use super::core::SearchCore;

/// Synchronous best-first search over a caller-supplied problem.
///
/// Classic A*: with an admissible heuristic the first goal popped from the
/// frontier is optimal under the configured objective, so the engine stops
/// there. An exhausted frontier without a goal returns `None` — a
/// legitimate "no solution" outcome, not an error.
///
/// The solver holds no state across calls; repeated `solve` calls with the
/// same inputs return identical results.
#[derive(Debug)]
pub struct AStarSolver<P: SearchProblem> {
    problem: P,
    objective: Objective,
}

impl<P: SearchProblem> AStarSolver<P> {
    #[inline]
    pub fn new(problem: P, objective: Objective) -> Self {
        Self { problem, objective }
    }

    /// Shorthand for the common shortest-path direction.
    #[inline]
    pub fn minimizing(problem: P) -> Self {
        Self::new(problem, Objective::Minimize)
    }

    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    #[inline]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Run the search from `start` until the first live goal pop or
    /// frontier exhaustion.
    pub fn solve(&self, start: P::State) -> Option<Solution<P::State>> {
        let mut core = SearchCore::new(&self.problem, self.objective, start);

        while let Some((current, current_g)) = core.pop_live() {
            if self.problem.is_goal(&current) {
                return Some(Solution {
                    cost: current_g,
                    path: core.reconstruct_path(&current),
                });
            }

            core.begin_expand(&current);
            let evals = core.eval_neighbors(&current, current_g);
            core.absorb(&current, evals);
            core.finish_expand(current);
        }

        None
    }
}
