//! Warehouse grid where a robot pushes rows and stacks of boxes

use std::collections::{HashSet, VecDeque};
use std::fmt;

use aoc_solver::ParseError;
use tracing::{debug, warn};

use crate::utils::grid::{Direction, Grid, Pos};

/// How map characters are laid out on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One grid cell per map character
    Narrow,
    /// Two grid cells per map character; boxes become `[]`
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Empty,
    Wall,
    Robot,
    Box,
    BoxLeft,
    BoxRight,
}

impl Tile {
    pub const fn symbol(self) -> char {
        match self {
            Tile::Empty => '.',
            Tile::Wall => '#',
            Tile::Robot => '@',
            Tile::Box => 'O',
            Tile::BoxLeft => '[',
            Tile::BoxRight => ']',
        }
    }

    /// Cells that count towards the score
    pub const fn is_box_anchor(self) -> bool {
        matches!(self, Tile::Box | Tile::BoxLeft)
    }

    fn expand(self, layout: Layout) -> &'static [Tile] {
        match (layout, self) {
            (Layout::Narrow, Tile::Empty) => &[Tile::Empty],
            (Layout::Narrow, Tile::Wall) => &[Tile::Wall],
            (Layout::Narrow, Tile::Robot) => &[Tile::Robot],
            (Layout::Narrow, _) => &[Tile::Box],
            (Layout::Wide, Tile::Empty) => &[Tile::Empty, Tile::Empty],
            (Layout::Wide, Tile::Wall) => &[Tile::Wall, Tile::Wall],
            (Layout::Wide, Tile::Robot) => &[Tile::Robot, Tile::Empty],
            (Layout::Wide, _) => &[Tile::BoxLeft, Tile::BoxRight],
        }
    }

    fn from_map_char(c: char) -> Option<Tile> {
        match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Wall),
            '@' => Some(Tile::Robot),
            'O' => Some(Tile::Box),
            _ => None,
        }
    }
}

/// What stopped a push
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Obstruction {
    /// A wall cell at this position
    Wall(Pos),
    /// The push would leave the grid
    Boundary,
}

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Push {
    Moved,
    Blocked(Obstruction),
}

/// Counts from [`Warehouse::execute`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExecutionReport {
    pub moved: usize,
    pub blocked: usize,
    pub skipped: usize,
}

/// A warehouse map with exactly one robot.
///
/// Every `BoxLeft` sits immediately left of a `BoxRight`, and the robot
/// position always points at the single `Robot` tile. Moves keep both true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    grid: Grid<Tile>,
    robot: Pos,
    layout: Layout,
}

impl Warehouse {
    /// Build a warehouse from map rows made of `#`, `.`, `@` and `O`.
    ///
    /// Errors name the 1-based row that broke the map: unknown characters,
    /// rows of differing width, or a second robot. A map without rows is
    /// `MissingData`; a map without a robot is `InvalidFormat`.
    pub fn new<S: AsRef<str>>(rows: &[S], layout: Layout) -> Result<Self, ParseError> {
        let mut robot: Option<Pos> = None;
        let mut tiles = Vec::with_capacity(rows.len());

        for (row_idx, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let mut cells = Vec::with_capacity(row.len() * 2);
            for c in row.chars() {
                let tile = Tile::from_map_char(c).ok_or_else(|| {
                    ParseError::at_line(row_idx + 1, format!("unexpected map character {c:?}"))
                })?;
                if tile == Tile::Robot {
                    let pos = Pos::new(row_idx, cells.len());
                    if let Some(first) = robot.replace(pos) {
                        return Err(ParseError::at_line(
                            row_idx + 1,
                            format!("second robot, first one at {first}"),
                        ));
                    }
                }
                cells.extend_from_slice(tile.expand(layout));
            }
            tiles.push(cells);
        }

        let grid = Grid::from_rows(tiles)?;
        let robot =
            robot.ok_or_else(|| ParseError::InvalidFormat("map has no robot".into()))?;

        Ok(Self {
            grid,
            robot,
            layout,
        })
    }

    pub fn robot(&self) -> Pos {
        self.robot
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn grid(&self) -> &Grid<Tile> {
        &self.grid
    }

    pub fn tile(&self, pos: Pos) -> Option<Tile> {
        self.grid.get(pos).copied()
    }

    /// Move the robot one step, pushing every box in the way.
    ///
    /// The push first collects every cell that has to move, starting at the
    /// robot and spreading one step in `dir` (both halves of each wide box
    /// join). If any of those cells would land on a wall or off the grid,
    /// nothing changes. Otherwise all collected cells shift together.
    pub fn try_move(&mut self, dir: Direction) -> Push {
        // (from, to) for every cell that moves, robot first
        let mut moving: Vec<(Pos, Pos)> = Vec::new();
        let mut seen = HashSet::from([self.robot]);
        let mut frontier = VecDeque::from([self.robot]);

        while let Some(pos) = frontier.pop_front() {
            let Some(next) = self.grid.step(pos, dir) else {
                debug!(%pos, ?dir, "push runs off the grid");
                return Push::Blocked(Obstruction::Boundary);
            };
            moving.push((pos, next));

            let partner = match self.grid[next] {
                Tile::Empty | Tile::Robot => continue,
                Tile::Wall => return Push::Blocked(Obstruction::Wall(next)),
                Tile::Box => None,
                Tile::BoxLeft => self.grid.step(next, Direction::Right),
                Tile::BoxRight => self.grid.step(next, Direction::Left),
            };

            for cell in std::iter::once(next).chain(partner) {
                if seen.insert(cell) {
                    frontier.push_back(cell);
                }
            }
        }

        let carried: Vec<(Pos, Tile)> = moving
            .iter()
            .map(|&(from, to)| (to, self.grid[from]))
            .collect();
        for &(from, _) in &moving {
            self.grid[from] = Tile::Empty;
        }
        for (to, tile) in carried {
            self.grid[to] = tile;
        }

        self.robot = moving[0].1;
        Push::Moved
    }

    /// Apply a string of `^ > v <` moves in order.
    ///
    /// Line breaks are ignored. Any other unknown symbol is logged and
    /// skipped.
    pub fn execute(&mut self, commands: &str) -> ExecutionReport {
        let mut report = ExecutionReport::default();

        for c in commands.chars() {
            if matches!(c, '\n' | '\r') {
                continue;
            }
            let Some(dir) = Direction::from_arrow(c) else {
                warn!(symbol = ?c, "skipping unknown move");
                report.skipped += 1;
                continue;
            };
            match self.try_move(dir) {
                Push::Moved => report.moved += 1,
                Push::Blocked(_) => report.blocked += 1,
            }
        }

        debug!(
            moved = report.moved,
            blocked = report.blocked,
            skipped = report.skipped,
            layout = ?self.layout,
            "executed moves"
        );
        report
    }

    /// Sum of `100 * row + col` over every box, measured at its left edge
    pub fn score(&self) -> usize {
        self.grid
            .iter()
            .filter(|(_, tile)| tile.is_box_anchor())
            .map(|(pos, _)| 100 * pos.row + pos.col)
            .sum()
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.grid.render(|tile| tile.symbol()))
    }
}
