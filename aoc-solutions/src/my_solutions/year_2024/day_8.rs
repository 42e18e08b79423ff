//! Resonant Collinearity: antinodes of same-frequency antennas

use std::collections::{HashMap, HashSet};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["grid", "geometry"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData {
    map: Grid<char>,
    antennas: HashMap<char, Vec<Pos>>,
}

fn delta(from: Pos, to: Pos) -> (isize, isize) {
    (
        to.row as isize - from.row as isize,
        to.col as isize - from.col as isize,
    )
}

impl SharedData {
    fn antinodes(&self, harmonics: bool) -> usize {
        let mut found = HashSet::new();

        for positions in self.antennas.values() {
            for (&a, &b) in positions.iter().tuple_combinations() {
                for (origin, (dr, dc)) in [(b, delta(a, b)), (a, delta(b, a))] {
                    if harmonics {
                        // Every grid point on the line, the antennas included
                        let mut pos = Some(origin);
                        while let Some(p) = pos {
                            found.insert(p);
                            pos = self.map.offset(p, dr, dc);
                        }
                    } else if let Some(p) = self.map.offset(origin, dr, dc) {
                        found.insert(p);
                    }
                }
            }
        }

        found.len()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let map = Grid::parse(input.trim(), |_, c| {
            if c == '.' || c.is_ascii_alphanumeric() {
                Ok(c)
            } else {
                Err(format!("unexpected character {c:?}"))
            }
        })?;
        let antennas = map
            .iter()
            .filter(|(_, c)| **c != '.')
            .map(|(pos, &c)| (c, pos))
            .into_group_map();

        Ok(SharedData { map, antennas })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.antinodes(true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        ............
        ........0...
        .....0......
        .......0....
        ....0.......
        ......A.....
        ............
        ............
        ........A...
        .........A..
        ............
        ............
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "14");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "34");
    }

    #[test]
    fn test_t_frequency_harmonics() {
        let mut shared = Solver::parse(indoc! {"
            T.........
            ...T......
            .T........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
            ..........
        "})
        .unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }
}
