//! Registry behaviour with solvers discovered through `inventory`

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, ParseError, PartSolver, SolveError,
    SolverError, SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2016, day = 4, tags = ["registry-test", "words"])]
pub struct WordCount;

impl AocParser for WordCount {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        if input.trim().is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(input.split_whitespace().collect())
    }
}

impl PartSolver<1> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.len().to_string())
    }
}

impl PartSolver<2> for WordCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|w| w.len()).max().unwrap_or(0).to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2016, day = 5, tags = ["registry-test"])]
pub struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"words"))
        .unwrap()
        .build();

    assert!(registry.storage().contains(2016, 4));
    assert!(!registry.storage().contains(2016, 5));
    assert_eq!(registry.storage().len(), 1);
}

#[test]
fn test_plugin_parts_are_reported() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|p| p.tags.contains(&"registry-test"))
        .unwrap()
        .build();

    let infos: Vec<_> = registry.storage().iter_info().collect();
    assert_eq!(infos.len(), 2);
    assert_eq!((infos[0].year, infos[0].day, infos[0].parts), (2016, 4, 2));
    assert_eq!((infos[1].year, infos[1].day, infos[1].parts), (2016, 5, 1));
}

#[test]
fn test_created_solver_answers_and_times_parts() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    let mut solver = registry
        .create_solver(2016, 4, "alpha be gamma")
        .unwrap();
    assert_eq!((solver.year(), solver.day(), solver.parts()), (2016, 4, 2));
    assert!(solver.parse_duration() >= chrono::TimeDelta::zero());

    let first = solver.solve(1).unwrap();
    assert_eq!(first.answer, "3");
    assert!(first.duration() >= chrono::TimeDelta::zero());
    assert_eq!(solver.solve(2).unwrap().answer, "5");
    assert!(matches!(solver.solve(3), Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_parse_failure_is_reported_by_registry() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .unwrap()
        .build();

    assert!(matches!(
        registry.create_solver(2016, 4, "   "),
        Err(SolverError::ParseError(ParseError::MissingData(_)))
    ));
}

#[test]
fn test_manual_registration_conflicts_with_plugin() {
    let builder = SolverRegistryBuilder::new().register_all_plugins().unwrap();
    assert!(builder.register_solver::<LineCount>(2016, 5).is_err());
}
