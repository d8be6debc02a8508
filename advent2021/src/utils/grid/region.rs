//! Low points and flood-filled regions.

use std::collections::BTreeSet;

use super::{Grid, MoveSet, Point};

/// Grows connected regions over a read-only grid.
///
/// Adjacency defaults to [`MoveSet::ORTHOGONAL`].
#[derive(Debug, Clone, Copy)]
pub struct RegionFinder<'g, 'm, T> {
    grid: &'g Grid<T>,
    moves: MoveSet<'m>,
}

impl<'g, T> RegionFinder<'g, 'static, T> {
    pub fn new(grid: &'g Grid<T>) -> Self {
        Self {
            grid,
            moves: MoveSet::ORTHOGONAL,
        }
    }
}

impl<'g, 'm, T> RegionFinder<'g, 'm, T> {
    pub fn with_moves<'n>(self, moves: MoveSet<'n>) -> RegionFinder<'g, 'n, T> {
        RegionFinder {
            grid: self.grid,
            moves,
        }
    }

    /// The region reachable from `seed`.
    ///
    /// From each absorbed point, a neighbor not yet in the region is absorbed
    /// when `include(current, neighbor)` holds for their values. The seed is
    /// always part of the result.
    pub fn grow_region<F>(&self, seed: Point, include: F) -> BTreeSet<Point>
    where
        F: Fn(&T, &T) -> bool,
    {
        let mut region = BTreeSet::from([seed]);
        let mut pending = vec![seed];

        while let Some(point) = pending.pop() {
            let current = &self.grid[point];
            for next in self.grid.neighbors(point, &self.moves) {
                if !region.contains(&next) && include(current, &self.grid[next]) {
                    region.insert(next);
                    pending.push(next);
                }
            }
        }
        region
    }
}

impl<T: PartialOrd> RegionFinder<'_, '_, T> {
    /// Points strictly lower than every neighbor, row by row.
    pub fn low_points(&self) -> Vec<Point> {
        self.grid.points_matching(|point, value| {
            self.grid
                .neighbors(point, &self.moves)
                .all(|n| self.grid[n] > *value)
        })
    }

    /// The basin draining into `seed`: neighbors are absorbed while they keep
    /// rising and are not the `boundary` value.
    pub fn basin(&self, seed: Point, boundary: &T) -> BTreeSet<Point> {
        self.grow_region(seed, |current, next| next != boundary && next > current)
    }

    /// One basin per low point, in low point order.
    pub fn basins(&self, boundary: &T) -> Vec<BTreeSet<Point>> {
        self.low_points()
            .into_iter()
            .map(|seed| self.basin(seed, boundary))
            .collect()
    }
}
