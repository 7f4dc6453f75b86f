// Streaming engine: one background worker per solve() owns all search
// bookkeeping (single-writer); improving solutions cross to the consumer
// over a channel. Neighbor evaluation fans out through rayon and is joined
// before any shared table is touched.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use crossbeam_channel::{unbounded, Receiver};
use rayon::prelude::*;

use crate::objective::Objective;
use crate::problem::{SearchProblem, Solution};

use super::core::SearchCore;

/// Counters reported by the worker when a stream finishes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States taken off the frontier and expanded.
    pub states_expanded: u64,
    /// Improving solutions handed to the stream.
    pub solutions_emitted: u64,
    /// Stale frontier entries discarded at pop time. High counts mean high
    /// state-revisitation rates and a heap full of superseded duplicates.
    pub stale_pops: u64,
}

/// Streaming best-score search over a caller-supplied problem.
///
/// Unlike [`super::AStarSolver`] this engine does not stop at the first
/// goal: every terminal state that strictly improves on the best solution
/// found so far is emitted, and the search runs until the frontier is
/// exhausted or the consumer cancels. Natural fit for maximize-style
/// searches where exhaustion, not first-goal-pop, is the stopping point.
#[derive(Debug)]
pub struct StreamSolver<P: SearchProblem> {
    problem: Arc<P>,
    objective: Objective,
}

impl<P> StreamSolver<P>
where
    P: SearchProblem + Send + Sync + 'static,
    P::State: Send + Sync,
{
    #[inline]
    pub fn new(problem: P, objective: Objective) -> Self {
        Self {
            problem: Arc::new(problem),
            objective,
        }
    }

    #[inline]
    pub fn objective(&self) -> Objective {
        self.objective
    }

    #[inline]
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Launch the background search and hand back the consuming end.
    ///
    /// Cancellation is cooperative: the worker checks a shared flag at the
    /// top of every expansion iteration, so dropping (or cancelling) the
    /// stream stops the search within one iteration. In-flight parallel
    /// neighbor evaluations run to completion and their results are
    /// discarded with the rest of the bookkeeping.
    pub fn solve(&self, start: P::State) -> SolutionStream<P::State> {
        let problem = Arc::clone(&self.problem);
        let objective = self.objective;
        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_worker = Arc::clone(&cancel);
        let (tx, rx) = unbounded::<Solution<P::State>>();

        let worker = thread::spawn(move || {
            let mut stats = SearchStats::default();
            let mut core = SearchCore::new(problem.as_ref(), objective, start);
            let mut best_cost: Option<i64> = None;

            while let Some((current, current_g)) = core.pop_live() {
                if cancel_worker.load(Ordering::Relaxed) {
                    break;
                }

                if problem.is_goal(&current) && objective.improves_over(current_g, best_cost) {
                    best_cost = Some(current_g);
                    let solution = Solution {
                        cost: current_g,
                        path: core.reconstruct_path(&current),
                    };
                    if tx.send(solution).is_err() {
                        // Consumer hung up; stop searching.
                        break;
                    }
                    stats.solutions_emitted += 1;
                }

                // A goal may still have improving successors when maximizing,
                // so it is expanded like any other state.
                core.begin_expand(&current);
                let evals: Vec<(P::State, i64, i64)> = problem
                    .neighbors(&current)
                    .into_par_iter()
                    .map(|neighbor| {
                        let g = current_g + problem.step_cost(&current, &neighbor);
                        let h = problem.heuristic(&neighbor);
                        (neighbor, g, h)
                    })
                    .collect();
                core.absorb(&current, evals);
                core.finish_expand(current);
                stats.states_expanded += 1;
            }

            stats.stale_pops = core.stale_pops();
            stats
            // tx drops here; the receiver sees a normal end of stream.
        });

        SolutionStream {
            rx,
            cancel,
            worker: Some(worker),
        }
    }
}

/// Consuming end of a streaming search.
///
/// Iterate it to receive each improving solution; the iterator ends when
/// the frontier is exhausted or the stream is cancelled. Dropping the
/// stream cancels the search.
#[derive(Debug)]
pub struct SolutionStream<S> {
    rx: Receiver<Solution<S>>,
    cancel: Arc<AtomicBool>,
    worker: Option<thread::JoinHandle<SearchStats>>,
}

impl<S> SolutionStream<S> {
    /// Ask the worker to stop. Observed within one expansion iteration;
    /// nothing further is delivered once set, even if solutions were
    /// already buffered.
    #[inline]
    pub fn cancel(&self) {
        self.cancel.store(true, Ordering::Relaxed);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancel.load(Ordering::Relaxed)
    }

    /// Block for the next improving solution. `None` ends the stream:
    /// either the search ran to exhaustion or it was cancelled.
    pub fn recv(&self) -> Option<Solution<S>> {
        if self.is_cancelled() {
            return None;
        }
        self.rx.recv().ok()
    }

    /// Stop the search if it is still running and return the worker's
    /// counters.
    pub fn finish(mut self) -> SearchStats {
        self.cancel();
        self.worker
            .take()
            .and_then(|worker| worker.join().ok())
            .unwrap_or_default()
    }
}

impl<S> Iterator for SolutionStream<S> {
    type Item = Solution<S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.recv()
    }
}

impl<S> Drop for SolutionStream<S> {
    fn drop(&mut self) {
        self.cancel();
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}
