//! Restroom Redoubt: robots patrolling a wrapping bathroom floor

use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;
use tracing::debug;

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["simulation"])]
pub struct Solver;

pub const WIDTH: i64 = 101;
pub const HEIGHT: i64 = 103;
const SAFETY_SECONDS: i64 = 100;
/// Robots stacked in one column for at least this many rows mark the picture
const TREE_RUN: usize = 10;

static ROBOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)$").expect("valid robot regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pos: (i64, i64),
    vel: (i64, i64),
}

#[derive(Debug)]
pub struct SharedData {
    robots: Vec<Robot>,
    width: i64,
    height: i64,
}

impl SharedData {
    /// Use a floor other than the puzzle's 101 x 103
    pub fn with_area(mut self, width: i64, height: i64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    fn positions_at(&self, seconds: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.robots.iter().map(move |r| {
            (
                (r.pos.0 + r.vel.0 * seconds).rem_euclid(self.width),
                (r.pos.1 + r.vel.1 * seconds).rem_euclid(self.height),
            )
        })
    }

    fn safety_factor(&self, seconds: i64) -> usize {
        let (mid_x, mid_y) = (self.width / 2, self.height / 2);
        let mut quadrants = [0usize; 4];
        for (x, y) in self.positions_at(seconds) {
            if x == mid_x || y == mid_y {
                continue;
            }
            let index = usize::from(x > mid_x) + 2 * usize::from(y > mid_y);
            quadrants[index] += 1;
        }
        quadrants.iter().product()
    }

    /// Longest vertical line of occupied cells in any column
    fn longest_vertical_run(&self, seconds: i64) -> usize {
        let mut floor = Grid::new(self.width as usize, self.height as usize, false);
        for (x, y) in self.positions_at(seconds) {
            floor[Pos::new(y as usize, x as usize)] = true;
        }

        (0..floor.width())
            .map(|col| {
                let mut best = 0;
                let mut run = 0;
                for row in 0..floor.height() {
                    run = if floor[Pos::new(row, col)] { run + 1 } else { 0 };
                    best = best.max(run);
                }
                best
            })
            .max()
            .unwrap_or(0)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let robots = input
            .trim()
            .lines()
            .enumerate()
            .map(|(idx, line)| {
                let caps = ROBOT
                    .captures(line.trim())
                    .ok_or_else(|| ParseError::at_line(idx + 1, "expected `p=X,Y v=DX,DY`"))?;
                let num = |i: usize| {
                    caps[i]
                        .parse::<i64>()
                        .map_err(|e| ParseError::at_line(idx + 1, e))
                };
                Ok(Robot {
                    pos: (num(1)?, num(2)?),
                    vel: (num(3)?, num(4)?),
                })
            })
            .collect::<Result<Vec<_>, ParseError>>()?;

        Ok(SharedData {
            robots,
            width: WIDTH,
            height: HEIGHT,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.safety_factor(SAFETY_SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // Positions repeat after width * height seconds
        let period = shared.width * shared.height;
        (1..=period)
            .find(|&t| shared.longest_vertical_run(t) >= TREE_RUN)
            .map(|t| {
                debug!(seconds = t, "robots line up");
                t.to_string()
            })
            .ok_or_else(|| SolveError::SolveFailed("robots never line up".into()))
    }
}
