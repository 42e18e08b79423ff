//! Mull It Over: recovering `mul(X,Y)` instructions from corrupted memory

use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["parsing"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("valid instruction regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(x), Some(y)) => {
                    let x = x.as_str().parse().map_err(|e| ParseError::Other(format!("{e}")))?;
                    let y = y.as_str().parse().map_err(|e| ParseError::Other(format!("{e}")))?;
                    Ok(Instruction::Mul(x, y))
                }
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|ins| match *ins {
                Instruction::Mul(x, y) => u64::from(x * y),
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (_, total) = shared
            .iter()
            .fold((true, 0u64), |(enabled, total), ins| match *ins {
                Instruction::Do => (true, total),
                Instruction::Dont => (false, total),
                Instruction::Mul(x, y) if enabled => (enabled, total + u64::from(x * y)),
                Instruction::Mul(..) => (enabled, total),
            });
        Ok(total.to_string())
    }
}
