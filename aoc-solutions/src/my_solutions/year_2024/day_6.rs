//! Guard Gallivant: predicting a patrolling guard's path

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    /// `true` where there is an obstruction
    obstacles: Grid<bool>,
    start: Pos,
    /// Cells on the unobstructed patrol route, filled by part 1
    route: Option<Vec<Pos>>,
}

enum Patrol {
    Exits(Vec<Pos>),
    Loops,
}

fn bit(dir: Direction) -> u8 {
    match dir {
        Direction::Up => 1,
        Direction::Right => 2,
        Direction::Down => 4,
        Direction::Left => 8,
    }
}

/// Walk the guard until it leaves the map or repeats a (cell, heading) state
fn patrol(obstacles: &Grid<bool>, start: Pos, extra: Option<Pos>) -> Patrol {
    let mut headings = Grid::new(obstacles.width(), obstacles.height(), 0u8);
    let mut pos = start;
    let mut dir = Direction::Up;

    loop {
        if headings[pos] & bit(dir) != 0 {
            return Patrol::Loops;
        }
        headings[pos] |= bit(dir);

        let Some(next) = obstacles.step(pos, dir) else {
            let visited = headings
                .iter()
                .filter(|(_, h)| **h != 0)
                .map(|(p, _)| p)
                .collect();
            return Patrol::Exits(visited);
        };
        if obstacles[next] || extra == Some(next) {
            dir = dir.turn_right();
        } else {
            pos = next;
        }
    }
}

impl SharedData {
    fn route(&mut self) -> Result<&[Pos], SolveError> {
        if self.route.is_none() {
            match patrol(&self.obstacles, self.start, None) {
                Patrol::Exits(visited) => self.route = Some(visited),
                Patrol::Loops => {
                    return Err(SolveError::SolveFailed(
                        "guard never leaves the map".into(),
                    ));
                }
            }
        }
        Ok(self.route.as_deref().unwrap_or_default())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut start = None;
        let obstacles = Grid::parse(input.trim(), |pos, c| match c {
            '#' => Ok(true),
            '.' => Ok(false),
            '^' => match start.replace(pos) {
                None => Ok(false),
                Some(_) => Err("more than one guard".to_string()),
            },
            other => Err(format!("unexpected character {other:?}")),
        })?;
        let start = start.ok_or_else(|| ParseError::MissingData("no guard on the map".into()))?;

        Ok(SharedData {
            obstacles,
            start,
            route: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route()?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let route = shared.route()?.to_vec();
        let (obstacles, start) = (&shared.obstacles, shared.start);

        // Only cells on the original route can change the patrol
        let loops = route
            .par_iter()
            .filter(|&&pos| pos != start)
            .filter(|&&pos| matches!(patrol(obstacles, start, Some(pos)), Patrol::Loops))
            .count();
        Ok(loops.to_string())
    }
}
