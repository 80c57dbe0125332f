//! Optimal sliding-tile puzzle solving with A*.
//!
//! A [`Solver`] runs two best-first searches in lockstep, one from the initial
//! board and one from its twin (the board with one pair of tiles exchanged).
//! Whichever reaches the goal first decides the answer: a shortest solution, or
//! a proof that the initial board is unsolvable.

pub mod config;
pub mod core;
pub mod format;
pub mod puzzles;
pub mod search;
pub mod solution;

pub use crate::config::{
    DuplicatePolicy, Heuristic, ResourceCounts, ResourceLimits, SearchError, SolverConfig,
};
pub use crate::core::board::{Board, BoardError};
pub use crate::search::solver::{Outcome, Solver};
