//! Fixed-size 2D grids addressed by (row, column)
//!
//! Most grid puzzles parse a block of text into a [`Grid`], walk it with
//! [`Direction`] steps and render it back for debugging. Storage is row-major
//! and the dimensions never change after construction.

use std::fmt;
use std::ops::{Index, IndexMut};

use aoc_solver::ParseError;

/// Cell coordinate, row 0 at the top and column 0 at the left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// One step in `dir`; `None` when it would leave the non-negative quadrant.
    ///
    /// There is no upper bound here; use [`Grid::step`] for a bounds-checked step.
    pub fn step(self, dir: Direction) -> Option<Pos> {
        let (dr, dc) = dir.delta();
        self.offset(dr, dc)
    }

    pub fn offset(self, dr: isize, dc: isize) -> Option<Pos> {
        Some(Pos {
            row: self.row.checked_add_signed(dr)?,
            col: self.col.checked_add_signed(dc)?,
        })
    }

    pub fn manhattan(self, other: Pos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four cardinal directions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// Clockwise from `Up`
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// (row, column) offset of a single step
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Right => (0, 1),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
        }
    }

    pub const fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    pub const fn turn_left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    pub const fn opposite(self) -> Self {
        self.turn_right().turn_right()
    }

    pub const fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }

    /// Parse an arrow symbol: `^`, `>`, `v` or `<`
    pub const fn from_arrow(c: char) -> Option<Self> {
        match c {
            '^' => Some(Direction::Up),
            '>' => Some(Direction::Right),
            'v' => Some(Direction::Down),
            '<' => Some(Direction::Left),
            _ => None,
        }
    }

    pub const fn arrow(self) -> char {
        match self {
            Direction::Up => '^',
            Direction::Right => '>',
            Direction::Down => 'v',
            Direction::Left => '<',
        }
    }
}

/// Rectangular grid with row-major storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Grid of `width` x `height` cells, all set to `fill`
    pub fn new(width: usize, height: usize, fill: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Build a grid from rows of equal length.
    ///
    /// Fails with `MissingData` when there are no rows (or the first row is
    /// empty), and with `InvalidFormat` naming the first row whose length
    /// differs from the first row's.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ParseError> {
        let width = rows.first().map_or(0, Vec::len);
        if width == 0 {
            return Err(ParseError::MissingData("grid has no cells".into()));
        }

        let height = rows.len();
        let mut cells = Vec::with_capacity(width * height);
        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != width {
                return Err(ParseError::at_line(
                    row_idx + 1,
                    format!("expected {} columns, found {}", width, row.len()),
                ));
            }
            cells.extend(row);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Parse a block of text, one line per row, converting each character
    /// with `cell`. Errors name the 1-based line they occurred on.
    pub fn parse<F>(input: &str, mut cell: F) -> Result<Self, ParseError>
    where
        F: FnMut(Pos, char) -> Result<T, String>,
    {
        let rows = input
            .lines()
            .map(|line| line.trim_end_matches('\r'))
            .take_while(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| {
                line.chars()
                    .enumerate()
                    .map(|(col, c)| cell(Pos::new(row, col), c))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|reason| ParseError::at_line(row + 1, reason))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_rows(rows)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    pub fn get(&self, pos: Pos) -> Option<&T> {
        self.contains(pos)
            .then(|| &self.cells[pos.row * self.width + pos.col])
    }

    pub fn get_mut(&mut self, pos: Pos) -> Option<&mut T> {
        if self.contains(pos) {
            Some(&mut self.cells[pos.row * self.width + pos.col])
        } else {
            None
        }
    }

    /// Bounds-checked single step
    pub fn step(&self, pos: Pos, dir: Direction) -> Option<Pos> {
        pos.step(dir).filter(|&next| self.contains(next))
    }

    /// Bounds-checked arbitrary offset
    pub fn offset(&self, pos: Pos, dr: isize, dc: isize) -> Option<Pos> {
        pos.offset(dr, dc).filter(|&next| self.contains(next))
    }

    /// In-bounds orthogonal neighbours of `pos`
    pub fn neighbors(&self, pos: Pos) -> impl Iterator<Item = Pos> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |dir| self.step(pos, dir))
    }

    /// Every position in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Pos> + use<T> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Pos::new(row, col)))
    }

    pub fn iter(&self) -> impl Iterator<Item = (Pos, &T)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// First position (row-major) whose cell matches
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Pos> {
        self.iter().find(|(_, cell)| pred(cell)).map(|(pos, _)| pos)
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.cells[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        self.cells.chunks(self.width)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            width: self.width,
            height: self.height,
            cells: self.cells.iter().map(f).collect(),
        }
    }

    /// Render one line per row using `f` for each cell
    pub fn render(&self, mut f: impl FnMut(&T) -> char) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            out.extend(row.iter().map(&mut f));
        }
        out
    }
}

impl Grid<char> {
    /// Parse text into a grid of its raw characters
    pub fn parse_chars(input: &str) -> Result<Self, ParseError> {
        Self::parse(input, |_, c| Ok(c))
    }
}

impl<T> Index<Pos> for Grid<T> {
    type Output = T;

    fn index(&self, pos: Pos) -> &T {
        assert!(self.contains(pos), "{pos} outside {}x{} grid", self.width, self.height);
        &self.cells[pos.row * self.width + pos.col]
    }
}

impl<T> IndexMut<Pos> for Grid<T> {
    fn index_mut(&mut self, pos: Pos) -> &mut T {
        assert!(self.contains(pos), "{pos} outside {}x{} grid", self.width, self.height);
        &mut self.cells[pos.row * self.width + pos.col]
    }
}
