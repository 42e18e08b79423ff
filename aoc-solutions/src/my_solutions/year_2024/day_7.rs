//! Bridge Repair: restoring the operators of calibration equations

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["search"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

/// `Some(head)` when `value` ends with the decimal digits of `tail`
fn strip_digits(value: u64, tail: u64) -> Option<u64> {
    let mut modulus = 10;
    while modulus <= tail {
        modulus *= 10;
    }
    (value > tail && value % modulus == tail).then(|| value / modulus)
}

impl Equation {
    /// Works backwards from the target, undoing the last operator each step
    fn solvable(&self, concat: bool) -> bool {
        fn undo(target: u64, operands: &[u64], concat: bool) -> bool {
            match operands {
                [] => false,
                [first] => target == *first,
                [rest @ .., last] => {
                    (target >= *last && undo(target - last, rest, concat))
                        || (*last != 0 && target % last == 0 && undo(target / last, rest, concat))
                        || (concat
                            && strip_digits(target, *last)
                                .is_some_and(|head| undo(head, rest, concat)))
                }
            }
        }
        undo(self.target, &self.operands, concat)
    }
}

fn parse_equation(line: &str) -> anyhow::Result<Equation> {
    let (target, operands) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `target: operands`"))?;
    let target = target.trim().parse().context("bad target")?;
    let operands = operands
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<Vec<u64>, _>>()
        .context("bad operand")?;
    if operands.is_empty() {
        return Err(anyhow!("no operands"));
    }
    Ok(Equation { target, operands })
}

fn calibration(equations: &[Equation], concat: bool) -> u64 {
    equations
        .par_iter()
        .filter(|eq| eq.solvable(concat))
        .map(|eq| eq.target)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Equation>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_equation(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(calibration(shared, true).to_string())
    }
}
