// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Character grids and single-word grid search.
//!
//! A word is found when its letters can be read along a path of
//! 4-directionally adjacent cells that never visits a cell twice. The search
//! marks visited cells in place by overwriting them with [`VISITED`]; every
//! mark is recorded on the trail, so the grid is restored whether the
//! search finds the word, fails, or is suspended and then rewound.
//!
//! ```
//! use backtrack_search::grid::{word_exists, Grid};
//!
//! let mut grid = Grid::from_rows(&["ABCE", "SFCS", "ADEE"]).unwrap();
//! assert!(word_exists(&mut grid, "ABCCED"));
//! assert!(!word_exists(&mut grid, "ABCB"));
//! assert_eq!(grid, Grid::from_rows(&["ABCE", "SFCS", "ADEE"]).unwrap());
//! ```

pub mod walk;

pub use walk::{word_exists, word_path};

use crate::errors::GridError;

/// Marker written over a cell while it is on the current path.
pub const VISITED: char = '#';

/// The four neighbours of a cell, in the order searches try them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];
}

/// A rectangular grid of characters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<char>,
}

impl Grid {
    /// Build a grid from rows of characters.
    pub fn new<R: AsRef<[char]>>(rows: &[R]) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        let mut cells = Vec::with_capacity(rows.len() * cols);

        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(GridError::Ragged {
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            if let Some(c) = row.iter().position(|&cell| cell == VISITED) {
                return Err(GridError::ReservedMarker {
                    row: r,
                    col: c,
                    marker: VISITED,
                });
            }
            cells.extend_from_slice(row);
        }

        let rows = if cols == 0 { 0 } else { rows.len() };
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid from strings, one character per cell.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = rows.iter().map(|row| row.as_ref().chars().collect()).collect();
        Self::new(&rows)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The character at (row, col), if in bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Row-major index of (row, col), if in bounds.
    pub fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// (row, col) of a row-major index.
    pub fn coordinates(&self, idx: usize) -> (usize, usize) {
        (idx / self.cols, idx % self.cols)
    }

    /// The neighbour of `idx` in `direction`, if it is inside the grid.
    pub fn step(&self, idx: usize, direction: Direction) -> Option<usize> {
        let (row, col) = self.coordinates(idx);
        match direction {
            Direction::Up => row.checked_sub(1).and_then(|r| self.index(r, col)),
            Direction::Left => col.checked_sub(1).and_then(|c| self.index(row, c)),
            Direction::Down => self.index(row + 1, col),
            Direction::Right => self.index(row, col + 1),
        }
    }

    pub(crate) fn cell(&self, idx: usize) -> char {
        self.cells[idx]
    }

    /// Overwrite a cell and return what was there.
    pub(crate) fn replace(&mut self, idx: usize, value: char) -> char {
        std::mem::replace(&mut self.cells[idx], value)
    }

    /// Rows as strings.
    pub fn to_rows(&self) -> Vec<String> {
        if self.cols == 0 {
            return Vec::new();
        }
        self.cells
            .chunks(self.cols)
            .map(|row| row.iter().collect())
            .collect()
    }
}

/// A visited mark on the trail: the cell and the character it covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    pub cell: usize,
    pub original: char,
}
