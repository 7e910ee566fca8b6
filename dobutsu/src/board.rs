mod cell;
mod error;

use std::ops::{Index, IndexMut};
use std::str::FromStr;

pub use cell::*;
pub use error::*;

use crate::{Piece, Point, Rect};

/// The starting position, top row first.
///
/// Uppercase pieces face forward, lowercase pieces face backward.
pub const STANDARD_LAYOUT: [&str; 4] = ["gle", ".c.", ".C.", "ELG"];

/// A fixed-size grid of cells.
///
/// The board has no rule knowledge, it just stores pieces and highlight
/// flags. Callers are expected to check [`Self::contains()`] before
/// accessing a cell by coordinate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    // Row-major, indexed by [y * cols + x]. Row 0 is the forward player's
    // back rank.
    cells: Vec<Cell>,
    cols: usize,
    rows: usize,
}

impl Board {
    /// Creates a board without any pieces on it.
    ///
    /// Panics if either dimension is zero.
    pub fn empty(cols: usize, rows: usize) -> Self {
        assert!(cols > 0 && rows > 0, "a board needs at least one cell");
        Self {
            cells: vec![Cell::default(); cols * rows],
            cols,
            rows,
        }
    }

    /// The 3 x 4 starting position.
    pub fn standard() -> Self {
        // The layout is a constant that is covered by tests
        Self::from_rows(&STANDARD_LAYOUT).unwrap()
    }

    /// Builds a board from lines of text, top row first.
    ///
    /// Every character is one cell: `.` is empty, and a piece symbol is a
    /// piece (uppercase for forward pieces, lowercase for backward ones).
    pub fn from_rows<S: AsRef<str>>(lines: &[S]) -> Result<Self, LayoutError> {
        let first = lines.first().ok_or(LayoutError::NoRows)?;
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(LayoutError::EmptyRow);
        }
        let rows = lines.len();
        let mut board = Self::empty(cols, rows);

        for (row, line) in lines.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found == 0 {
                return Err(LayoutError::EmptyRow);
            }
            if found != cols {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            let y = (rows - 1 - row) as i32;
            for (col, symbol) in line.chars().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let piece = Piece::from_symbol(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                board[Point::new(col as i32, y)].piece = Some(piece);
            }
        }
        Ok(board)
    }

    /// The inverse of [`Self::from_rows()`].
    pub fn to_rows(&self) -> Vec<String> {
        (0..self.rows)
            .rev()
            .map(|y| {
                self.row(y)
                    .iter()
                    .map(|cell| cell.piece.map_or('.', |p| p.symbol()))
                    .collect()
            })
            .collect()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The area of valid coordinates.
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Point::new(0, 0),
            Point::new(self.cols as i32 - 1, self.rows as i32 - 1),
        )
    }

    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The cell at a coordinate.
    ///
    /// # Panics
    ///
    /// If `p` is not on the board.
    pub fn cell(&self, p: Point) -> &Cell {
        &self.cells[self.idx(p)]
    }

    /// The cell at a coordinate.
    ///
    /// # Panics
    ///
    /// If `p` is not on the board.
    pub fn cell_mut(&mut self, p: Point) -> &mut Cell {
        let idx = self.idx(p);
        &mut self.cells[idx]
    }

    /// Like [`Self::cell()`], but returns `None` for coordinates off the board.
    pub fn get(&self, p: Point) -> Option<&Cell> {
        self.contains(p).then(|| self.cell(p))
    }

    pub fn piece_at(&self, p: Point) -> Option<Piece> {
        self.get(p).and_then(|cell| cell.piece)
    }

    /// One row of cells, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        &self.cells[y * self.cols..(y + 1) * self.cols]
    }

    pub fn clear_highlights(&mut self) {
        for cell in &mut self.cells {
            cell.unhighlight();
        }
    }

    /// All cells with their coordinates, row by row starting at `y = 0`.
    pub fn cells(&self) -> impl Iterator<Item = (Point, &Cell)> + '_ {
        self.bounds().points().zip(self.cells.iter())
    }

    pub fn empty_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells()
            .filter(|(_, cell)| !cell.contains_piece())
            .map(|(p, _)| p)
    }

    pub fn highlighted_cells(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells()
            .filter(|(_, cell)| cell.is_highlighted())
            .map(|(p, _)| p)
    }

    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.contains_piece()).count()
    }

    fn idx(&self, p: Point) -> usize {
        assert!(self.contains(p), "{} is not on the board", p);
        p.y as usize * self.cols + p.x as usize
    }
}

impl Index<Point> for Board {
    type Output = Cell;

    fn index(&self, p: Point) -> &Cell {
        self.cell(p)
    }
}

impl IndexMut<Point> for Board {
    fn index_mut(&mut self, p: Point) -> &mut Cell {
        self.cell_mut(p)
    }
}

impl FromStr for Board {
    type Err = LayoutError;

    /// Parses one row per line. Leading/trailing whitespace and blank
    /// lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&lines)
    }
}
