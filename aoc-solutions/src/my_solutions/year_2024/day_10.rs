//! Hoof It: scoring hiking trails on a topographic map

use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};
use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["grid", "graph"])]
pub struct Solver;

/// Heights 0 through 9; `None` marks impassable cells
type Map = Grid<Option<u8>>;

fn uphill(map: &Map, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
    let height = map[pos];
    map.neighbors(pos)
        .filter(move |&next| matches!((height, map[next]), (Some(h), Some(n)) if n == h + 1))
}

fn trailheads(map: &Map) -> impl Iterator<Item = Pos> + '_ {
    map.iter()
        .filter(|(_, h)| **h == Some(0))
        .map(|(pos, _)| pos)
}

/// Number of distinct uphill trails from a cell to any height 9.
///
/// Every step climbs by one, so the dependency graph is acyclic.
struct Ratings<'m> {
    map: &'m Map,
}

impl DpProblem<Pos, u64> for Ratings<'_> {
    fn deps(&self, pos: &Pos) -> Vec<Pos> {
        uphill(self.map, *pos).collect()
    }

    fn compute(&self, pos: &Pos, deps: Vec<u64>) -> u64 {
        if self.map[*pos] == Some(9) {
            1
        } else {
            deps.iter().sum()
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Map;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input.trim(), |_, c| match c {
            '.' => Ok(None),
            _ => c
                .to_digit(10)
                .map(|d| Some(d as u8))
                .ok_or_else(|| format!("expected a height, found {c:?}")),
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Map = shared;
        let score: usize = trailheads(map)
            .map(|head| {
                let mut seen = HashSet::from([head]);
                let mut stack = vec![head];
                let mut peaks = 0;
                while let Some(pos) = stack.pop() {
                    if map[pos] == Some(9) {
                        peaks += 1;
                    }
                    for next in uphill(map, pos) {
                        if seen.insert(next) {
                            stack.push(next);
                        }
                    }
                }
                peaks
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let map: &Map = shared;
        let ratings = DpCache::with_problem(HashMapBackend::new(), Ratings { map });
        let total: u64 = trailheads(map).map(|head| ratings.get(&head)).sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        89010123
        78121874
        87430965
        96549874
        45678903
        32019012
        01329801
        10456732
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "36");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "81");
    }

    #[test]
    fn test_impassable_cells() {
        let mut shared = Solver::parse(indoc! {"
            ...0...
            ...1...
            ...2...
            6543456
            7.....7
            8.....8
            9.....9
        "})
        .unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "2");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "2");
    }
}
