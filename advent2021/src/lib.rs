//! Advent of Code 2021 solutions with automatic registration
//!
//! [`utils`] holds the grid and graph traversal toolkit the puzzles are
//! built on. Each solution in `my_solutions` uses the `AutoRegisterSolver`
//! derive macro for automatic plugin registration with the solver
//! framework.

pub mod utils;

#[cfg(feature = "my-solutions")]
pub mod my_solutions;
