//! Replays a warehouse puzzle move by move, printing the grid after each push.
//!
//! Usage: `cargo run --example warehouse_replay [--wide] [INPUT]`
//!
//! Without an input file the small puzzle example is used. Set
//! `RUST_LOG=debug` to see boundary and summary events.

use std::env;
use std::fs;

use aoc_solutions::my_solutions::year_2024::day_15::{Layout, Push, Warehouse};
use aoc_solutions::utils::grid::Direction;
use tracing_subscriber::EnvFilter;

const SMALL_EXAMPLE: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let mut layout = Layout::Narrow;
    let mut path = None;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--wide" => layout = Layout::Wide,
            _ => path = Some(arg),
        }
    }

    let input = match path {
        Some(path) => fs::read_to_string(path)?,
        None => SMALL_EXAMPLE.to_string(),
    };

    let (map, moves) = input
        .split_once("\n\n")
        .ok_or_else(|| anyhow::anyhow!("expected a blank line between map and moves"))?;
    let rows: Vec<&str> = map.lines().collect();
    let mut warehouse = Warehouse::new(&rows, layout)?;

    println!("Initial state:\n{warehouse}\n");
    for (step, symbol) in moves.chars().filter(|c| !c.is_whitespace()).enumerate() {
        let Some(dir) = Direction::from_arrow(symbol) else {
            println!("Move {}: skipping {symbol:?}", step + 1);
            continue;
        };
        let outcome = match warehouse.try_move(dir) {
            Push::Moved => "moved".to_string(),
            Push::Blocked(obstruction) => format!("blocked by {obstruction:?}"),
        };
        println!("Move {} {symbol}: {outcome}\n{warehouse}\n", step + 1);
    }

    println!("Score: {}", warehouse.score());
    Ok(())
}
