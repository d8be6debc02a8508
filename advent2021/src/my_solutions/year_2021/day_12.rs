//! Passage Pathing: counting routes through a cave system.

use anyhow::Context;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::graph::{Edge, Graph, OneSmallCaveTwice, PathEnumerator, SmallCavesOnce, Vertex};

const START: &str = "start";
const END: &str = "end";

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2021, day = 12, tags = ["graph", "paths"])]
pub struct Solver;

pub struct SharedData {
    caves: Graph,
    start: Vertex,
    end: Vertex,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let caves = input
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(line_idx, line)| {
                line.parse::<Edge>()
                    .with_context(|| format!("line {}", line_idx + 1))
            })
            .collect::<anyhow::Result<Graph>>()
            .map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))?;

        let (start, end) = (Vertex::from(START), Vertex::from(END));
        for cave in [&start, &end] {
            if !caves.contains_vertex(cave) {
                return Err(ParseError::MissingData(format!("no passage touches `{cave}`")));
            }
        }
        Ok(SharedData { caves, start, end })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let paths = PathEnumerator::new(&shared.caves, SmallCavesOnce)
            .count_paths(&shared.start, &shared.end);
        Ok(paths.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let policy = OneSmallCaveTwice::new(shared.start.clone());
        let paths =
            PathEnumerator::new(&shared.caves, policy).count_paths(&shared.start, &shared.end);
        Ok(paths.to_string())
    }
}
