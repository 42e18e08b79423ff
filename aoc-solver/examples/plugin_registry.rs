//! Auto-registered solvers, tag filtering and a part that reuses earlier work
//!
//! Run with: cargo run --example plugin_registry

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, DynSolver, ParseError, PartSolver, RegistryBuilder,
    SolveError,
};

/// Word lists borrowed from the input, plus a tally part 1 leaves behind
#[derive(Debug)]
pub struct Tally<'a> {
    words: Vec<&'a str>,
    longest: Option<&'a str>,
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["example", "dependent"])]
pub struct WordTally;

impl AocParser for WordTally {
    type SharedData<'a> = Tally<'a>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let words: Vec<&str> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(Tally {
            words,
            longest: None,
        })
    }
}

impl PartSolver<1> for WordTally {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.longest = shared.words.iter().copied().max_by_key(|w| w.len());
        Ok(shared.words.len().to_string())
    }
}

impl PartSolver<2> for WordTally {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = match shared.longest {
            Some(word) => word,
            None => shared
                .words
                .iter()
                .copied()
                .max_by_key(|w| w.len())
                .ok_or_else(|| SolveError::SolveFailed("no words".into()))?,
        };
        Ok(longest.to_uppercase())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 1, tags = ["example"])]
pub struct LineCount;

impl AocParser for LineCount {
    type SharedData<'a> = usize;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input.lines().count())
    }
}

impl PartSolver<1> for LineCount {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.to_string())
    }
}

fn run(solver: &mut dyn DynSolver) -> Result<(), SolveError> {
    for part in 1..=solver.parts() {
        let result = solver.solve(part)?;
        println!(
            "{}/{:02} part {}: {} ({}µs)",
            solver.year(),
            solver.day(),
            part,
            result.answer,
            result.duration().num_microseconds().unwrap_or_default()
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "alpha beta\ngamma epsilon";

    let registry = RegistryBuilder::new().register_all_plugins()?.build();
    for info in registry.iter_info() {
        println!("registered {}/{:02} tags {:?}", info.year, info.day, info.tags);
    }
    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        run(&mut *solver)?;
    }

    let dependent_only = RegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"dependent"))?
        .build();
    println!("solvers tagged \"dependent\": {}", dependent_only.len());

    Ok(())
}
