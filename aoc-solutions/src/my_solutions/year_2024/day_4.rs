//! Ceres Search: word search for XMAS

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Pos};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["grid"])]
pub struct Solver;

const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn spells(grid: &Grid<char>, start: Pos, (dr, dc): (isize, isize), word: &str) -> bool {
    word.chars().enumerate().all(|(i, expected)| {
        let i = i as isize;
        grid.offset(start, dr * i, dc * i)
            .is_some_and(|pos| grid[pos] == expected)
    })
}

/// `MAS` or `SAM` on both diagonals through an `A`
fn is_x_mas(grid: &Grid<char>, center: Pos) -> bool {
    if grid[center] != 'A' {
        return false;
    }
    let corner = |dr, dc| grid.offset(center, dr, dc).map(|p| grid[p]);
    let diagonal = |a: Option<char>, b: Option<char>| {
        matches!((a, b), (Some('M'), Some('S')) | (Some('S'), Some('M')))
    };
    diagonal(corner(-1, -1), corner(1, 1)) && diagonal(corner(-1, 1), corner(1, -1))
}

impl AocParser for Solver {
    type SharedData<'a> = Grid<char>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse_chars(input.trim())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count = grid
            .positions()
            .filter(|&pos| grid[pos] == 'X')
            .map(|pos| {
                DIRECTIONS
                    .iter()
                    .filter(|&&dir| spells(grid, pos, dir, "XMAS"))
                    .count()
            })
            .sum::<usize>();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid: &Grid<char> = shared;
        let count = grid
            .positions()
            .filter(|&pos| is_x_mas(grid, pos))
            .count();
        Ok(count.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aoc_solver::Solver as _;
    use indoc::indoc;

    const EXAMPLE: &str = indoc! {"
        MMMSXXMASM
        MSAMXMSMSA
        AMXSXMAAMM
        MSAMASMSMX
        XMASAMXAMM
        XXAMMXXAMA
        SMSMSASXSS
        SAXAMASAAA
        MAMMMXMMMM
        MXMXAXMASX
    "};

    #[test]
    fn test_example() {
        let mut shared = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "18");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "9");
    }

    #[test]
    fn test_word_at_edge_does_not_wrap() {
        let mut shared = Solver::parse("MASX\nXMAS").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "1");
    }
}
