//! Shared building blocks for the puzzle solutions

pub mod graph;
pub mod grid;
