//! Print Queue: page ordering rules

use std::cmp::Ordering;
use std::collections::HashSet;

use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["sorting"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `(a, b)` means page `a` must print before page `b`
    rules: HashSet<(u32, u32)>,
    updates: Vec<Vec<u32>>,
}

impl SharedData {
    fn compare(&self, a: u32, b: u32) -> Ordering {
        if self.rules.contains(&(a, b)) {
            Ordering::Less
        } else if self.rules.contains(&(b, a)) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u32]) -> bool {
        update.is_sorted_by(|&a, &b| self.compare(a, b) != Ordering::Greater)
    }
}

fn middle(update: &[u32]) -> u32 {
    update[update.len() / 2]
}

fn parse_rule(line: &str) -> anyhow::Result<(u32, u32)> {
    let (before, after) = line
        .split_once('|')
        .ok_or_else(|| anyhow!("expected a rule like 47|53"))?;
    Ok((before.trim().parse()?, after.trim().parse()?))
}

fn parse_update(line: &str) -> anyhow::Result<Vec<u32>> {
    let pages = line
        .split(',')
        .map(|p| p.trim().parse())
        .collect::<Result<Vec<u32>, _>>()?;
    if pages.is_empty() {
        return Err(anyhow!("empty update"));
    }
    Ok(pages)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut rules = HashSet::new();
        let mut updates = Vec::new();
        let mut in_updates = false;

        for (idx, line) in input.trim().lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                in_updates = true;
                continue;
            }
            let at_line = |e: anyhow::Error| ParseError::at_line(idx + 1, e);
            if in_updates {
                updates.push(parse_update(line).map_err(at_line)?);
            } else {
                rules.insert(parse_rule(line).map_err(at_line)?);
            }
        }

        if !in_updates {
            return Err(ParseError::MissingData(
                "expected a blank line between rules and updates".into(),
            ));
        }
        Ok(SharedData { rules, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| shared.is_ordered(u))
            .map(|u| middle(u))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| !shared.is_ordered(u))
            .map(|u| {
                let mut fixed = u.clone();
                fixed.sort_by(|&a, &b| shared.compare(a, b));
                middle(&fixed)
            })
            .sum();
        Ok(total.to_string())
    }
}
