//! Dense row-major grid storage.

use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use thiserror::Error;

use super::{MoveSet, Point};

/// Errors raised while building a grid or a move set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// A row's length differs from the width fixed by the first row
    #[error("row {row} has {actual} cells, expected {expected}")]
    ShapeMismatch {
        row: usize,
        expected: usize,
        actual: usize,
    },
    /// The first row was empty, so no width could be fixed
    #[error("the first row of a grid cannot be empty")]
    EmptyRow,
    #[error("invalid digit {found:?} at row {row}, column {col}")]
    InvalidDigit { row: usize, col: usize, found: char },
    #[error("a move set cannot contain the zero offset")]
    ZeroOffset,
}

/// A rectangular grid of `T`, stored row after row in one `Vec`.
///
/// Built once by appending rows; the first row fixes the width and every
/// later row must match it. Cells can be overwritten afterwards but the
/// grid never changes shape.
///
/// Indexing with a [`Point`] outside the grid panics; use [`Grid::get`] to
/// probe coordinates that may be out of range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T> {
    values: Vec<T>,
    row_count: usize,
    col_count: usize,
}

impl<T> Grid<T> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            row_count: 0,
            col_count: 0,
        }
    }

    /// Build a grid from rows, failing on the first ragged row.
    pub fn from_rows<I, R>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = T>,
    {
        rows.into_iter().try_fold(Self::new(), |mut grid, row| {
            grid.add_row(row)?;
            Ok(grid)
        })
    }

    /// Append a row below the existing ones.
    pub fn add_row<R: IntoIterator<Item = T>>(&mut self, row: R) -> Result<(), GridError> {
        let start = self.values.len();
        self.values.extend(row);
        let actual = self.values.len() - start;

        let expected = if self.row_count == 0 {
            if actual == 0 {
                return Err(GridError::EmptyRow);
            }
            actual
        } else {
            self.col_count
        };

        if actual != expected {
            self.values.truncate(start);
            return Err(GridError::ShapeMismatch {
                row: self.row_count,
                expected,
                actual,
            });
        }

        self.col_count = expected;
        self.row_count += 1;
        Ok(())
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn contains(&self, point: Point) -> bool {
        in_bounds(point, self.row_count, self.col_count)
    }

    fn index_of(&self, point: Point) -> Option<usize> {
        self.contains(point)
            .then(|| point.y as usize * self.col_count + point.x as usize)
    }

    pub fn get(&self, point: Point) -> Option<&T> {
        self.index_of(point).map(|i| &self.values[i])
    }

    pub fn get_mut(&mut self, point: Point) -> Option<&mut T> {
        self.index_of(point).map(|i| &mut self.values[i])
    }

    /// Overwrite a cell.
    ///
    /// # Panics
    ///
    /// Panics if `point` is outside the grid.
    pub fn set(&mut self, point: Point, value: T) {
        self[point] = value;
    }

    /// Every point, row by row. The iterator does not borrow the grid, so
    /// cells can be updated while walking it.
    pub fn points(&self) -> Points {
        Points {
            next: Point::new(0, 0),
            row_count: self.row_count,
            col_count: self.col_count,
        }
    }

    /// The points whose cells satisfy `predicate`, row by row.
    pub fn points_matching<F>(&self, mut predicate: F) -> Vec<Point>
    where
        F: FnMut(Point, &T) -> bool,
    {
        self.points().filter(|&p| predicate(p, &self[p])).collect()
    }

    /// In-bounds neighbors of `point` under `moves`, in move-set order.
    pub fn neighbors<'m>(&self, point: Point, moves: &MoveSet<'m>) -> Neighbors<'m> {
        Neighbors {
            origin: point,
            offsets: moves.offsets().iter(),
            row_count: self.row_count,
            col_count: self.col_count,
        }
    }

    /// Neighbors of `point` under `moves` accepted by `predicate`, which sees
    /// the neighbor and its value.
    pub fn find_neighbors<F>(&self, point: Point, moves: &MoveSet<'_>, mut predicate: F) -> Vec<Point>
    where
        F: FnMut(Point, &T) -> bool,
    {
        self.neighbors(point, moves)
            .filter(|&n| predicate(n, &self[n]))
            .collect()
    }

    /// Row `y` as a slice.
    pub fn row(&self, y: usize) -> Option<&[T]> {
        (y < self.row_count).then(|| &self.values[y * self.col_count..(y + 1) * self.col_count])
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }
}

impl Grid<u8> {
    /// Parse lines of decimal digits, one cell per digit. Blank lines are
    /// skipped; surrounding whitespace on a line is ignored.
    pub fn from_digits(input: &str) -> Result<Self, GridError> {
        input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .try_fold(Self::new(), |mut grid, (row, line)| {
                let digits = line
                    .chars()
                    .enumerate()
                    .map(|(col, c)| {
                        c.to_digit(10).map(|d| d as u8).ok_or(GridError::InvalidDigit {
                            row,
                            col,
                            found: c,
                        })
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                grid.add_row(digits)?;
                Ok(grid)
            })
    }
}

impl<T> Default for Grid<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Index<Point> for Grid<T> {
    type Output = T;

    fn index(&self, point: Point) -> &T {
        match self.index_of(point) {
            Some(i) => &self.values[i],
            None => panic!(
                "point {point} is outside a {}x{} grid",
                self.col_count, self.row_count
            ),
        }
    }
}

impl<T> IndexMut<Point> for Grid<T> {
    fn index_mut(&mut self, point: Point) -> &mut T {
        match self.index_of(point) {
            Some(i) => &mut self.values[i],
            None => panic!(
                "point {point} is outside a {}x{} grid",
                self.col_count, self.row_count
            ),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.values.chunks(self.col_count.max(1)) {
            for value in row {
                write!(f, "{value}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

fn in_bounds(point: Point, row_count: usize, col_count: usize) -> bool {
    point.x >= 0
        && point.y >= 0
        && (point.x as usize) < col_count
        && (point.y as usize) < row_count
}

/// Row-major walk over a grid's coordinates, see [`Grid::points`].
#[derive(Debug, Clone)]
pub struct Points {
    next: Point,
    row_count: usize,
    col_count: usize,
}

impl Iterator for Points {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if !in_bounds(self.next, self.row_count, self.col_count) {
            return None;
        }
        let current = self.next;
        self.next = if current.x as usize + 1 < self.col_count {
            Point::new(current.x + 1, current.y)
        } else {
            Point::new(0, current.y + 1)
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if in_bounds(self.next, self.row_count, self.col_count) {
            (self.row_count - self.next.y as usize) * self.col_count - self.next.x as usize
        } else {
            0
        };
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Points {}

/// In-bounds neighbors of one point, see [`Grid::neighbors`].
#[derive(Debug, Clone)]
pub struct Neighbors<'m> {
    origin: Point,
    offsets: slice::Iter<'m, (i32, i32)>,
    row_count: usize,
    col_count: usize,
}

impl Iterator for Neighbors<'_> {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        self.offsets.by_ref().find_map(|&offset| {
            let candidate = self.origin.offset(offset)?;
            in_bounds(candidate, self.row_count, self.col_count).then_some(candidate)
        })
    }
}
