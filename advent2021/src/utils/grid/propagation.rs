//! Increment-and-flash chain reactions over a grid.

use std::collections::HashSet;
use std::ops::AddAssign;

use super::{Grid, MoveSet, Point};

/// Simulates discrete steps of a chain reaction.
///
/// Each step raises every cell by one. A cell that goes above `threshold`
/// flashes, raising its neighbors by one, which may make them flash in
/// turn. When the cascade settles, every cell that flashed drops to
/// `baseline`.
///
/// A cell flashes at most once per step and is not raised again until the
/// reset. The threshold may be `T`'s maximum value. Since flashing is monotone within
/// a step, the set of flashed cells and the final grid do not depend on the
/// order in which neighbors are visited.
///
/// ```rust
/// use advent2021::utils::grid::{Grid, PropagationSimulator};
///
/// let mut grid = Grid::from_digits("11111\n19991\n19191\n19991\n11111").unwrap();
/// let simulator = PropagationSimulator::default();
///
/// assert_eq!(simulator.step(&mut grid), 9);
/// assert_eq!(grid.to_string(), "34543\n40004\n50005\n40004\n34543\n");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PropagationSimulator<'m, T> {
    threshold: T,
    baseline: T,
    moves: MoveSet<'m>,
}

impl<T: From<u8>> Default for PropagationSimulator<'static, T> {
    /// Threshold 9, baseline 0, all eight neighbors.
    fn default() -> Self {
        Self::new(T::from(9), T::from(0))
    }
}

impl<T> PropagationSimulator<'static, T> {
    pub fn new(threshold: T, baseline: T) -> Self {
        Self {
            threshold,
            baseline,
            moves: MoveSet::ALL_AROUND,
        }
    }
}

impl<'m, T> PropagationSimulator<'m, T>
where
    T: Copy + PartialOrd + AddAssign + From<u8>,
{
    pub fn with_moves<'n>(self, moves: MoveSet<'n>) -> PropagationSimulator<'n, T> {
        PropagationSimulator {
            threshold: self.threshold,
            baseline: self.baseline,
            moves,
        }
    }

    /// Run one step and return how many distinct cells flashed.
    pub fn step(&self, grid: &mut Grid<T>) -> usize {
        let all_points: Vec<Point> = grid.points().collect();
        let mut flashed = HashSet::new();
        let mut flashing = self.raise(grid, all_points, &mut flashed);

        while !flashing.is_empty() {
            let mut newly_flashing = Vec::new();
            for point in flashing {
                let neighbors = grid.neighbors(point, &self.moves);
                newly_flashing.extend(self.raise(grid, neighbors, &mut flashed));
            }
            flashing = newly_flashing;
        }

        for &point in &flashed {
            grid[point] = self.baseline;
        }
        flashed.len()
    }

    /// Run `steps` steps and return the total number of flashes.
    pub fn run(&self, grid: &mut Grid<T>, steps: usize) -> usize {
        (0..steps).map(|_| self.step(grid)).sum()
    }

    /// Step until a single step flashes every cell, returning that step's
    /// 1-based number. Does not return if the grid never synchronizes; an
    /// empty grid synchronizes on step 1.
    pub fn first_synchronized_step(&self, grid: &mut Grid<T>) -> usize {
        let cell_count = grid.len();
        let mut step = 1;
        while self.step(grid) != cell_count {
            step += 1;
        }
        step
    }

    /// Raise each point by one and return the ones that crossed the
    /// threshold, adding them to `flashed`.
    ///
    /// A cell at the threshold flashes without being incremented, so a
    /// threshold of `T`'s maximum cannot overflow; it is reset at the end of
    /// the step either way. Flashed cells and cells already above the
    /// threshold are left alone.
    fn raise<I>(&self, grid: &mut Grid<T>, points: I, flashed: &mut HashSet<Point>) -> Vec<Point>
    where
        I: IntoIterator<Item = Point>,
    {
        let mut crossed = Vec::new();
        for point in points {
            if flashed.contains(&point) {
                continue;
            }
            let value = &mut grid[point];
            if *value < self.threshold {
                *value += T::from(1);
            } else if *value == self.threshold {
                flashed.insert(point);
                crossed.push(point);
            }
        }
        crossed
    }
}
