//! Garden Groups: fencing regions of garden plots

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Direction, Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    /// Number of straight fence sides, counted as corners
    sides: usize,
}

fn same_region(plots: &Grid<char>, pos: Pos, dir: Direction) -> bool {
    plots
        .step(pos, dir)
        .is_some_and(|next| plots[next] == plots[pos])
}

fn diagonal_same(plots: &Grid<char>, pos: Pos, a: Direction, b: Direction) -> bool {
    let (ar, ac) = a.delta();
    let (br, bc) = b.delta();
    plots
        .offset(pos, ar + br, ac + bc)
        .is_some_and(|next| plots[next] == plots[pos])
}

/// Flood fill every region and measure it
fn regions(plots: &Grid<char>) -> Vec<Region> {
    let mut visited = Grid::new(plots.width(), plots.height(), false);
    let mut regions = Vec::new();

    for origin in plots.positions() {
        if visited[origin] {
            continue;
        }
        visited[origin] = true;

        let mut region = Region::default();
        let mut stack = vec![origin];
        while let Some(pos) = stack.pop() {
            region.area += 1;
            for dir in Direction::ALL {
                let turned = dir.turn_right();
                let inside = same_region(plots, pos, dir);
                let turned_inside = same_region(plots, pos, turned);

                if !inside {
                    region.perimeter += 1;
                }
                // Outer corner, or inner corner where the diagonal is foreign
                if (!inside && !turned_inside)
                    || (inside && turned_inside && !diagonal_same(plots, pos, dir, turned))
                {
                    region.sides += 1;
                }

                if let Some(next) = plots.step(pos, dir).filter(|_| inside) {
                    if !visited[next] {
                        visited[next] = true;
                        stack.push(next);
                    }
                }
            }
        }
        regions.push(region);
    }

    regions
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Region>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let plots = Grid::parse(input.trim(), |_, c| {
            if c.is_ascii_uppercase() {
                Ok(c)
            } else {
                Err(format!("expected a plant letter, found {c:?}"))
            }
        })?;
        Ok(regions(&plots))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.perimeter).sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}
