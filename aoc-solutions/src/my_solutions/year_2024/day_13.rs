//! Claw Contraption: cheapest button presses to reach each prize

use std::sync::LazyLock;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["math"])]
pub struct Solver;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;
const PRESS_LIMIT: i64 = 100;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"Button A: X\+(\d+), Y\+(\d+)\s*",
        r"Button B: X\+(\d+), Y\+(\d+)\s*",
        r"Prize: X=(\d+), Y=(\d+)",
    ))
    .expect("valid machine regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Tokens for the unique (A, B) press count reaching the prize, if it is
    /// a non-negative integer solution within `limit` presses per button
    fn min_tokens(&self, offset: i64, limit: Option<i64>) -> Option<i64> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);

        // Cramer's rule on the 2x2 system
        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }
        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (a, b) = (a_num / det, b_num / det);
        let in_limit = |n: i64| n >= 0 && limit.is_none_or(|max| n <= max);
        (in_limit(a) && in_limit(b)).then_some(3 * a + b)
    }
}

fn parse_machine(block: &str) -> anyhow::Result<Machine> {
    let caps = MACHINE
        .captures(block)
        .ok_or_else(|| anyhow!("expected `Button A`, `Button B` and `Prize` lines"))?;
    let num = |i: usize| -> anyhow::Result<i64> {
        caps[i].parse().with_context(|| format!("bad number {:?}", &caps[i]))
    };
    Ok(Machine {
        a: (num(1)?, num(2)?),
        b: (num(3)?, num(4)?),
        prize: (num(5)?, num(6)?),
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let normalized = input.replace("\r\n", "\n");
        normalized
            .trim()
            .split("\n\n")
            .enumerate()
            .map(|(idx, block)| {
                parse_machine(block)
                    .map_err(|e| ParseError::InvalidFormat(format!("(machine {}) {e}", idx + 1)))
            })
            .collect()
    }
}

fn total_tokens(machines: &[Machine], offset: i64, limit: Option<i64>) -> i64 {
    machines
        .iter()
        .filter_map(|m| m.min_tokens(offset, limit))
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, 0, Some(PRESS_LIMIT)).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, PRIZE_OFFSET, None).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        Button A: X+94, Y+34
        Button B: X+22, Y+67
        Prize: X=8400, Y=5400

        Button A: X+26, Y+66
        Button B: X+67, Y+21
        Prize: X=12748, Y=12176

        Button A: X+17, Y+86
        Button B: X+84, Y+37
        Prize: X=7870, Y=6450

        Button A: X+69, Y+23
        Button B: X+27, Y+71
        Prize: X=18641, Y=10279
    "};

    #[test]
    fn test_example_part1() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "480");
    }

    #[test]
    fn test_example_part2_winnable_machines() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        let winnable: Vec<bool> = machines
            .iter()
            .map(|m| m.min_tokens(PRIZE_OFFSET, None).is_some())
            .collect();
        assert_eq!(winnable, vec![false, true, false, true]);
    }

    #[test]
    fn test_first_machine_cost() {
        let machines = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(machines[0].min_tokens(0, Some(PRESS_LIMIT)), Some(280));
    }

    #[test]
    fn test_bad_block_names_machine() {
        let err = Solver::parse("Button A: X+1, Y+2\nPrize: X=3, Y=4").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(msg) if msg.starts_with("(machine 1)")));
    }
}
