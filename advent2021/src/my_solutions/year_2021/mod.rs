//! Advent of Code 2021

pub mod day_09;
pub mod day_11;
pub mod day_12;
