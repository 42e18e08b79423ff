//! Warehouse Woes: a robot pushing boxes around a walled warehouse

mod warehouse;

pub use warehouse::{ExecutionReport, Layout, Obstruction, Push, Tile, Warehouse};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["grid", "simulation"])]
pub struct Solver;

#[derive(Debug)]
pub struct SharedData<'a> {
    narrow: Warehouse,
    wide: Warehouse,
    moves: &'a str,
}

/// Split the input at the first blank line into (map, moves)
fn split_sections(input: &str) -> Result<(&str, &str), ParseError> {
    let mut offset = 0;
    for line in input.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']).is_empty() {
            return Ok((&input[..offset], &input[offset + line.len()..]));
        }
        offset += line.len();
    }
    Err(ParseError::MissingData(
        "expected a blank line between the map and the moves".into(),
    ))
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (map, moves) = split_sections(input)?;
        let rows: Vec<&str> = map.lines().map(|l| l.trim_end_matches('\r')).collect();

        Ok(SharedData {
            narrow: Warehouse::new(&rows, Layout::Narrow)?,
            wide: Warehouse::new(&rows, Layout::Wide)?,
            moves,
        })
    }
}

fn run(warehouse: &Warehouse, moves: &str) -> String {
    let mut warehouse = warehouse.clone();
    warehouse.execute(moves);
    warehouse.score().to_string()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(&shared.narrow, shared.moves))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(run(&shared.wide, shared.moves))
    }
}
