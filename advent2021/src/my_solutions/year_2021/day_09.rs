//! Smoke Basin: low points and basins of a height map.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, RegionFinder};

/// Height that never belongs to a basin
const BASIN_WALL: u8 = 9;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 9, tags = ["grid", "region"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::from_digits(input)
            .context("height map")
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if grid.is_empty() {
            return Err(ParseError::MissingData("height map has no rows".to_string()));
        }
        Ok(grid)
    }
}

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let risk: u32 = RegionFinder::new(grid)
            .low_points()
            .into_iter()
            .map(|point| u32::from(grid[point]) + 1)
            .sum();
        Ok(risk.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: usize = RegionFinder::new(grid)
            .basins(&BASIN_WALL)
            .iter()
            .map(|basin| basin.len())
            .sorted_unstable_by(|a, b| b.cmp(a))
            .take(3)
            .product();
        Ok(product.to_string())
    }
}
