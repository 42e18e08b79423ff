//! Red-Nosed Reports: which level reports are safe

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["lists"])]
pub struct Solver;

/// Strictly increasing or decreasing, each step between 1 and 3
fn is_safe(levels: &[i32]) -> bool {
    let ascending = levels.windows(2).all(|w| (1..=3).contains(&(w[1] - w[0])));
    let descending = levels.windows(2).all(|w| (1..=3).contains(&(w[0] - w[1])));
    ascending || descending
}

/// Safe after removing at most one level
fn is_safe_dampened(levels: &[i32]) -> bool {
    is_safe(levels)
        || (0..levels.len()).any(|skip| {
            let rest: Vec<i32> = levels
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip)
                .map(|(_, &l)| l)
                .collect();
            is_safe(&rest)
        })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                line.split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<i32>, _>>()
                    .map_err(|e| ParseError::at_line(idx + 1, e))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().filter(|r| is_safe(r)).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared
            .iter()
            .filter(|r| is_safe_dampened(r))
            .count()
            .to_string())
    }
}
