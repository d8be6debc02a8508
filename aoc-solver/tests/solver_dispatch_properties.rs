//! Property tests for derived part dispatch and part range checks

use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};
use proptest::prelude::*;

/// Keeps a running total so part 2 can observe what part 1 stored
#[derive(Debug)]
struct Tally {
    values: Vec<i64>,
    total: Option<i64>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 3)]
struct TallySolver;

impl AocParser for TallySolver {
    type SharedData<'a> = Tally;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let values = input
            .split_whitespace()
            .map(|t| {
                t.parse()
                    .map_err(|_| ParseError::InvalidFormat(format!("not a number: {t}")))
            })
            .collect::<Result<_, _>>()?;
        Ok(Tally {
            values,
            total: None,
        })
    }
}

impl PartSolver<1> for TallySolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total = shared.values.iter().sum::<i64>();
        shared.total = Some(total);
        Ok(total.to_string())
    }
}

impl PartSolver<2> for TallySolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .total
            .map(|t| (t * 2).to_string())
            .ok_or_else(|| SolveError::SolveFailed("part 1 has not run".into()))
    }
}

impl PartSolver<3> for TallySolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.values.len().to_string())
    }
}

fn render(values: &[i64]) -> String {
    values.iter().map(i64::to_string).collect::<Vec<_>>().join(" ")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn solve_part_matches_direct_part_solver(values in prop::collection::vec(-50i64..50, 0..8), part in prop_oneof![Just(1u8), Just(3u8)]) {
        let input = render(&values);
        let mut via_dispatch = TallySolver::parse(&input).unwrap();
        let mut direct = TallySolver::parse(&input).unwrap();

        let dispatched = TallySolver::solve_part(&mut via_dispatch, part).unwrap();
        let expected = match part {
            1 => <TallySolver as PartSolver<1>>::solve(&mut direct).unwrap(),
            _ => <TallySolver as PartSolver<3>>::solve(&mut direct).unwrap(),
        };
        prop_assert_eq!(dispatched, expected);
    }

    #[test]
    fn unknown_parts_are_not_implemented(part in prop_oneof![Just(0u8), 4u8..=255]) {
        let mut shared = TallySolver::parse("1 2").unwrap();
        match TallySolver::solve_part(&mut shared, part) {
            Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartNotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn checked_range_rejects_before_dispatch(part in prop_oneof![Just(0u8), 4u8..=255]) {
        let mut shared = TallySolver::parse("1 2").unwrap();
        match TallySolver::solve_part_checked_range(&mut shared, part) {
            Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
            other => prop_assert!(false, "expected PartOutOfRange, got {:?}", other),
        }
    }
}

#[test]
fn test_parts_constant_comes_from_attribute() {
    assert_eq!(<TallySolver as Solver>::PARTS, 3);
}

#[test]
fn test_later_part_sees_earlier_mutation() {
    let mut shared = TallySolver::parse("4 5 6").unwrap();
    assert!(TallySolver::solve_part(&mut shared, 2).is_err());
    assert_eq!(TallySolver::solve_part(&mut shared, 1).unwrap(), "15");
    assert_eq!(shared.total, Some(15));
    assert_eq!(TallySolver::solve_part(&mut shared, 2).unwrap(), "30");
}

#[test]
fn test_parse_error_surfaces() {
    assert!(matches!(
        TallySolver::parse("1 x 3"),
        Err(ParseError::InvalidFormat(_))
    ));
}
