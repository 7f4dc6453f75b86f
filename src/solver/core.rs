// Shared A* loop body. Both engines (synchronous stop-at-first-goal and
// streaming emit-all-improving) drive this one structure; direction-aware
// comparisons live in Objective and are never duplicated per engine.

use std::hash::BuildHasherDefault;

use hashbrown::HashMap as HbHashMap;
use hashbrown::HashSet as HbHashSet;

use crate::frontier::Frontier;
use crate::objective::Objective;
use crate::problem::SearchProblem;

pub(crate) type FastHasher = BuildHasherDefault<ahash::AHasher>;
pub(crate) type FastMap<K, V> = HbHashMap<K, V, FastHasher>;
pub(crate) type FastSet<T> = HbHashSet<T, FastHasher>;

/// Engine-owned search bookkeeping: best-known g-scores, backpointers,
/// open/closed sets, and the priority frontier. Single-writer by
/// construction — one `SearchCore` is owned by exactly one loop, and all
/// mutation happens through it.
pub(crate) struct SearchCore<'p, P: SearchProblem> {
    problem: &'p P,
    objective: Objective,
    frontier: Frontier<P::State>,
    g_score: FastMap<P::State, i64>,
    came_from: FastMap<P::State, P::State>,
    open: FastSet<P::State>,
    closed: FastSet<P::State>,
    stale_pops: u64,
}

impl<'p, P: SearchProblem> SearchCore<'p, P> {
    pub(crate) fn new(problem: &'p P, objective: Objective, start: P::State) -> Self {
        let mut frontier = Frontier::new(objective);
        let mut g_score = FastMap::default();
        let mut open = FastSet::default();

        g_score.insert(start.clone(), 0);
        frontier.push(start.clone(), problem.heuristic(&start));
        open.insert(start);

        Self {
            problem,
            objective,
            frontier,
            g_score,
            came_from: FastMap::default(),
            open,
            closed: FastSet::default(),
            stale_pops: 0,
        }
    }

    /// Pop the best live frontier entry and its g-score.
    ///
    /// Entries whose state has left the open set are stale leftovers from a
    /// superseded priority; they are counted and skipped. `None` means the
    /// frontier is exhausted.
    pub(crate) fn pop_live(&mut self) -> Option<(P::State, i64)> {
        while let Some((state, _priority)) = self.frontier.pop() {
            if !self.open.contains(&state) {
                self.stale_pops += 1;
                continue;
            }
            if let Some(&g) = self.g_score.get(&state) {
                return Some((state, g));
            }
            // Open states always carry a g-score; tolerate a miss as stale.
            self.stale_pops += 1;
        }
        None
    }

    /// Take `current` off the open set ahead of expanding it.
    #[inline]
    pub(crate) fn begin_expand(&mut self, current: &P::State) {
        self.open.remove(current);
    }

    /// Sequential neighbor evaluation: (neighbor, tentative g, h) triples.
    pub(crate) fn eval_neighbors(
        &self,
        current: &P::State,
        current_g: i64,
    ) -> Vec<(P::State, i64, i64)> {
        self.problem
            .neighbors(current)
            .into_iter()
            .map(|neighbor| {
                let g = current_g + self.problem.step_cost(current, &neighbor);
                let h = self.problem.heuristic(&neighbor);
                (neighbor, g, h)
            })
            .collect()
    }

    /// Fold evaluated neighbors into the shared tables. This is the single
    /// join point where mutation happens, whether the evaluations were
    /// computed inline or in parallel.
    pub(crate) fn absorb(&mut self, current: &P::State, evals: Vec<(P::State, i64, i64)>) {
        for (neighbor, g, h) in evals {
            let incumbent = self.g_score.get(&neighbor).copied();
            if !self.objective.improves_over(g, incumbent) {
                continue;
            }
            self.came_from.insert(neighbor.clone(), current.clone());
            self.g_score.insert(neighbor.clone(), g);
            self.frontier.push(neighbor.clone(), g + h);
            // Might already be open from an earlier discovery.
            self.open.insert(neighbor);
        }
    }

    /// Close out `current` once its neighbors are absorbed.
    #[inline]
    pub(crate) fn finish_expand(&mut self, current: P::State) {
        self.closed.insert(current);
    }

    /// Walk the backpointers from `goal` to the start and return the path
    /// in start-to-goal order. The map only ever points backward in
    /// discovery order, so the walk terminates.
    pub(crate) fn reconstruct_path(&self, goal: &P::State) -> Vec<P::State> {
        let mut path = vec![goal.clone()];
        let mut current = goal;
        while let Some(prev) = self.came_from.get(current) {
            path.push(prev.clone());
            current = prev;
        }
        path.reverse();
        path
    }

    #[inline]
    pub(crate) fn stale_pops(&self) -> u64 {
        self.stale_pops
    }
}
