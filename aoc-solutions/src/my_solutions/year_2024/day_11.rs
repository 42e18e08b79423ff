//! Plutonian Pebbles: counting stones that split as you blink

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::dp_cache::{DpCache, DpProblem, HashMapBackend};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["dp"])]
pub struct Solver;

/// What one stone turns into after a single blink
fn blink(stone: u64) -> Vec<u64> {
    if stone == 0 {
        return vec![1];
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        vec![stone / half, stone % half]
    } else {
        vec![stone * 2024]
    }
}

/// Stones produced by `(stone, blinks)`
struct StoneCount;

impl DpProblem<(u64, u8), u64> for StoneCount {
    fn deps(&self, &(stone, blinks): &(u64, u8)) -> Vec<(u64, u8)> {
        if blinks == 0 {
            return Vec::new();
        }
        blink(stone).into_iter().map(|s| (s, blinks - 1)).collect()
    }

    fn compute(&self, &(_, blinks): &(u64, u8), deps: Vec<u64>) -> u64 {
        if blinks == 0 { 1 } else { deps.iter().sum() }
    }
}

type StoneCache = DpCache<(u64, u8), u64, HashMapBackend<(u64, u8), u64>, StoneCount>;

#[derive(Debug)]
pub struct SharedData {
    stones: Vec<u64>,
}

impl SharedData {
    fn count_after(&self, cache: &StoneCache, blinks: u8) -> u64 {
        self.stones.iter().map(|&s| cache.get(&(s, blinks))).sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|s| {
                s.parse()
                    .map_err(|e| ParseError::InvalidFormat(format!("bad stone {s:?}: {e}")))
            })
            .collect::<Result<Vec<u64>, _>>()?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }
        Ok(SharedData { stones })
    }
}

fn solve_for(shared: &SharedData, blinks: u8) -> String {
    let cache = DpCache::with_problem(HashMapBackend::new(), StoneCount);
    shared.count_after(&cache, blinks).to_string()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_for(shared, 25))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(solve_for(shared, 75))
    }
}
