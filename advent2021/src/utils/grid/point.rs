//! Grid coordinates and neighbor offsets.

use std::cmp::Ordering;
use std::fmt;

use super::GridError;

/// A cell coordinate: `x` is the column, `y` the row.
///
/// Points order row-major (by `y`, then `x`), which is also the order in
/// which [`Grid::points`](super::Grid::points) yields them, so a
/// `BTreeSet<Point>` iterates like the grid does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The point shifted by `offset`, or `None` if a coordinate overflows.
    pub fn offset(self, (dx, dy): Offset) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl Ord for Point {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.y, self.x).cmp(&(other.y, other.x))
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Relative move `(dx, dy)`.
pub type Offset = (i32, i32);

/// The offsets that count as "adjacent" for a neighbor query.
///
/// Adjacency belongs to the query, not to the grid: the same grid can be
/// walked orthogonally by one algorithm and with diagonals by another.
/// Neighbors come back in the order the offsets are listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveSet<'a> {
    offsets: &'a [Offset],
}

impl MoveSet<'static> {
    /// Up, down, left, right.
    pub const ORTHOGONAL: Self = Self {
        offsets: &[(0, -1), (0, 1), (-1, 0), (1, 0)],
    };

    /// The eight surrounding cells.
    pub const ALL_AROUND: Self = Self {
        offsets: &[
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ],
    };
}

impl<'a> MoveSet<'a> {
    /// A caller-defined move set. The zero offset is rejected, a cell is
    /// never its own neighbor.
    pub fn new(offsets: &'a [Offset]) -> Result<Self, GridError> {
        if offsets.contains(&(0, 0)) {
            return Err(GridError::ZeroOffset);
        }
        Ok(Self { offsets })
    }

    pub fn offsets(&self) -> &'a [Offset] {
        self.offsets
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }
}
