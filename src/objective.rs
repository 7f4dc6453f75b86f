use serde::{Deserialize, Serialize};

/// Direction of optimization threaded through every engine comparison.
///
/// `Minimize` is classic A* (smaller accumulated cost wins, frontier pops
/// the smallest f-score); `Maximize` mirrors it for reward-accumulation
/// searches (total pressure released, geodes cracked, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Objective {
    Minimize,
    Maximize,
}

impl Objective {
    /// True when `candidate` is strictly better than `incumbent`.
    #[inline]
    pub fn improves(self, candidate: i64, incumbent: i64) -> bool {
        match self {
            Objective::Minimize => candidate < incumbent,
            Objective::Maximize => candidate > incumbent,
        }
    }

    /// Improvement check against a possibly-absent incumbent.
    /// Absent means +inf (minimize) / -inf (maximize), so anything improves.
    #[inline]
    pub fn improves_over(self, candidate: i64, incumbent: Option<i64>) -> bool {
        incumbent.map_or(true, |best| self.improves(candidate, best))
    }
}
