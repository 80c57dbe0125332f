//! Best-first search over boards.

pub mod astar;
pub mod movegen;
pub mod node;
pub mod resources;
pub mod solver;
