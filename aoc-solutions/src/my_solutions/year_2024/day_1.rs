//! Historian Hysteria: comparing two lists of location IDs

use std::collections::HashMap;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["lists"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    left: Vec<u32>,
    right: Vec<u32>,
}

fn parse_pair(line: &str) -> anyhow::Result<(u32, u32)> {
    let mut fields = line.split_whitespace();
    let left = fields.next().ok_or_else(|| anyhow!("missing left ID"))?;
    let right = fields.next().ok_or_else(|| anyhow!("missing right ID"))?;
    if fields.next().is_some() {
        return Err(anyhow!("expected exactly two IDs"));
    }
    Ok((
        left.parse().with_context(|| format!("bad ID {left:?}"))?,
        right.parse().with_context(|| format!("bad ID {right:?}"))?,
    ))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (mut left, mut right): (Vec<u32>, Vec<u32>) = input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| parse_pair(line).map_err(|e| ParseError::at_line(idx + 1, e)))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unzip();

        left.sort_unstable();
        right.sort_unstable();
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let distance: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(&l, &r)| u64::from(l.abs_diff(r)))
            .sum();
        Ok(distance.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut counts: HashMap<u32, u64> = HashMap::new();
        for &id in &shared.right {
            *counts.entry(id).or_default() += 1;
        }

        let similarity: u64 = shared
            .left
            .iter()
            .map(|&id| u64::from(id) * counts.get(&id).copied().unwrap_or(0))
            .sum();
        Ok(similarity.to_string())
    }
}
