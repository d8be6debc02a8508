//! 2-D grids and the traversals built on them
//!
//! - [`Grid`]: dense row-major storage addressed by [`Point`]
//! - [`MoveSet`]: which offsets count as neighbors for a query
//! - [`RegionFinder`]: low points and flood-filled regions (basins)
//! - [`PropagationSimulator`]: increment-and-flash chain reactions
//!
//! # Example
//!
//! ```rust
//! use advent2021::utils::grid::{Grid, MoveSet, Point, RegionFinder};
//!
//! let grid = Grid::from_digits("919\n111\n999").unwrap();
//! assert_eq!(grid.neighbors(Point::new(0, 0), &MoveSet::ORTHOGONAL).count(), 2);
//!
//! let finder = RegionFinder::new(&grid);
//! let region = finder.grow_region(Point::new(1, 0), |_, &next| next != 9);
//! assert_eq!(region.len(), 4);
//! ```

mod dense;
mod point;
mod propagation;
mod region;

pub use dense::{Grid, GridError, Neighbors, Points};
pub use point::{MoveSet, Offset, Point};
pub use propagation::PropagationSimulator;
pub use region::RegionFinder;
