//! Puzzle primitives.
//!
//! - [`coord`]: grid cells and the fixed blank-move order.
//! - [`board`]: the immutable n×n tile configuration with its heuristics,
//!   neighbours, twin and parity oracle.

pub mod board;
pub mod coord;
