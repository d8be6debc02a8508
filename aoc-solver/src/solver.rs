//! Parser and solver traits

use crate::error::{ParseError, SolveError};

/// Parses raw puzzle input into the data every part works from.
///
/// `SharedData` may borrow from the input (`&'a str`, slices of lines) or own
/// its contents. It is handed to each part mutably, so a part can cache
/// intermediate results for later parts or mutate a grid in place.
///
/// # Example
///
/// ```
/// use aoc_solver::{AocParser, ParseError};
///
/// struct Lines;
///
/// impl AocParser for Lines {
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
///
/// assert_eq!(Lines::parse("a\nb").unwrap(), vec!["a", "b"]);
/// ```
pub trait AocParser {
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Answers part `N` of a puzzle.
///
/// The part number is a const generic so that `#[derive(AocSolver)]` can
/// check at compile time that every part up to `max_parts` exists.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime part dispatch for a puzzle.
///
/// Normally derived:
///
/// ```
/// use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
///
/// #[derive(AocSolver)]
/// #[aoc_solver(max_parts = 1)]
/// struct Count;
///
/// impl AocParser for Count {
///     type SharedData<'a> = &'a str;
///
///     fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
///         Ok(input)
///     }
/// }
///
/// impl PartSolver<1> for Count {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.lines().count().to_string())
///     }
/// }
///
/// let mut shared = Count::parse("x\ny\nz").unwrap();
/// assert_eq!(Count::solve_part(&mut shared, 1).unwrap(), "3");
/// assert!(matches!(Count::solve_part(&mut shared, 2), Err(SolveError::PartNotImplemented(2))));
/// ```
pub trait Solver: AocParser {
    /// Number of parts, parts are numbered `1..=PARTS`
    const PARTS: u8;

    /// Solve `part`, returning `PartNotImplemented` for unknown part numbers.
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`] but rejects parts outside `1..=PARTS`
    /// with `PartOutOfRange` before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
