#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

pub mod objective;
pub mod problem;
pub mod frontier;
pub mod grid;

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::frontier::Frontier;
pub use crate::grid::{Cell, GridMap};
pub use crate::objective::Objective;
pub use crate::problem::{SearchProblem, Solution};
pub use crate::solver::{AStarSolver, SearchStats, SolutionStream, StreamSolver};
