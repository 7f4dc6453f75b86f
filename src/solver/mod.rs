mod core;

pub mod astar;
pub mod stream;

pub use astar::AStarSolver;
pub use stream::{SearchStats, SolutionStream, StreamSolver};
