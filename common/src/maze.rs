pub mod editor;
pub mod maker;

use std::fmt;

use glam::IVec2;
use strum::EnumIter;

use crate::constants::MIN_MAZE_SIDE;

pub use maker::{MazeParams, generate, generate_seeded};

/// A grid coordinate. Also used for unit directions.
pub type Point = IVec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Cell {
    Wall,
    Path,
    Item,
    Goal,
}

impl Cell {
    pub fn is_walkable(self) -> bool {
        self != Cell::Wall
    }

    pub fn symbol(self) -> char {
        match self {
            Cell::Wall => '#',
            Cell::Path => ' ',
            Cell::Item => '*',
            Cell::Goal => 'G',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Cell> {
        match symbol {
            '#' => Some(Cell::Wall),
            ' ' | '.' => Some(Cell::Path),
            '*' => Some(Cell::Item),
            'G' => Some(Cell::Goal),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    InvalidArgument(String),
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MazeError::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            MazeError::OutOfBounds {
                x,
                y,
                width,
                height,
            } => write!(f, "cell ({}, {}) is outside the {}x{} maze", x, y, width, height),
        }
    }
}

impl std::error::Error for MazeError {}

/// Row-major grid of cells. Both sides are at least `MIN_MAZE_SIDE`.
#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Maze {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Result<Self, MazeError> {
        if width < MIN_MAZE_SIDE || height < MIN_MAZE_SIDE {
            return Err(MazeError::InvalidArgument(format!(
                "maze must be at least {}x{}, got {}x{}",
                MIN_MAZE_SIDE, MIN_MAZE_SIDE, width, height
            )));
        }

        // Coordinates are `i32`, so every cell must be addressable by one.
        if i32::try_from(width).is_err() || i32::try_from(height).is_err() {
            return Err(MazeError::InvalidArgument(format!(
                "maze of {}x{} is too large",
                width, height
            )));
        }

        Ok(Self {
            width,
            height,
            cells: vec![cell; width * height],
        })
    }

    /// Builds a maze from rows of `Cell::symbol` characters. Handy for fixtures.
    pub fn from_ascii(text: &str) -> Result<Self, MazeError> {
        let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count()).unwrap_or(0);

        let mut maze = Maze::filled(width, height, Cell::Path)?;

        for (y, row) in rows.iter().enumerate() {
            if row.chars().count() != width {
                return Err(MazeError::InvalidArgument(format!(
                    "row {} has {} cells, expected {}",
                    y,
                    row.chars().count(),
                    width
                )));
            }

            for (x, symbol) in row.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or_else(|| {
                    MazeError::InvalidArgument(format!("unknown cell symbol '{}'", symbol))
                })?;
                maze.cells[y * width + x] = cell;
            }
        }

        Ok(maze)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    pub fn is_border(&self, x: i32, y: i32) -> bool {
        self.is_in_bounds(x, y)
            && (x == 0 || y == 0 || x as usize == self.width - 1 || y as usize == self.height - 1)
    }

    pub fn get(&self, x: i32, y: i32) -> Result<Cell, MazeError> {
        self.index(x, y)
            .map(|i| self.cells[i])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> Result<(), MazeError> {
        let i = self.index(x, y).ok_or_else(|| self.out_of_bounds(x, y))?;
        self.cells[i] = cell;
        Ok(())
    }

    /// Like `get`, but absorbs out-of-bounds lookups as `None`.
    pub fn cell(&self, point: Point) -> Option<Cell> {
        self.index(point.x, point.y).map(|i| self.cells[i])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    pub fn positions_of(&self, cell: Cell) -> Vec<Point> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c == cell)
            .map(|(i, _)| Point::new((i % self.width) as i32, (i / self.width) as i32))
            .collect()
    }

    pub fn log(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<String>>()
            .join("\n")
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }

        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return None;
        }

        Some(y * self.width + x)
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> MazeError {
        MazeError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
