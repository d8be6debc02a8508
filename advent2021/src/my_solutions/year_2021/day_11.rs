//! Dumbo Octopus: flash cascades on an energy grid.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, PropagationSimulator};

const STEPS: usize = 100;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 11, tags = ["grid", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Grid<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::from_digits(input)
            .context("energy grid")
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;
        if grid.is_empty() {
            return Err(ParseError::MissingData("energy grid has no rows".to_string()));
        }
        Ok(grid)
    }
}

// Both parts simulate from the parsed state, so each works on its own copy.

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut octopuses = grid.clone();
        let flashes = PropagationSimulator::default().run(&mut octopuses, STEPS);
        Ok(flashes.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut octopuses = grid.clone();
        let step = PropagationSimulator::default().first_synchronized_step(&mut octopuses);
        Ok(step.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
5483143223
2745854711
5264556173
6141336146
6357385478
4167524645
2176841721
6882881134
4846848554
5283751526
";

    #[test]
    fn test_sample() {
        let mut grid = Solver::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut grid).unwrap(), "1656");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut grid).unwrap(), "195");
    }

    #[test]
    fn test_parts_do_not_disturb_shared_grid() {
        let mut grid = Solver::parse(SAMPLE).unwrap();
        let parsed = grid.clone();
        <Solver as PartSolver<2>>::solve(&mut grid).unwrap();
        assert_eq!(grid, parsed);
        assert_eq!(<Solver as PartSolver<1>>::solve(&mut grid).unwrap(), "1656");
    }
}
