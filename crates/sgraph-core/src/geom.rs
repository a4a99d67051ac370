//! Grid geometry: [`GridShape`] and [`Direction`].
//!
//! Nodes are addressed by a flat row-major index `0 <= i < rows * columns`,
//! with `row = i / columns` and `column = i % columns`. Row 0 is the top row,
//! so "down" means increasing row.

use std::fmt;

use crate::error::{GraphError, Result};

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// A single step between two 4-neighbours.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Left,
    Right,
    Down,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::Down,
    ];

    /// Whether the step changes the row.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Up => "up",
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}

// ---------------------------------------------------------------------------
// GridShape
// ---------------------------------------------------------------------------

/// Fixed dimensions of a grid and the index arithmetic that goes with them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridShape {
    columns: usize,
    rows: usize,
}

impl GridShape {
    /// Largest node count whose per-node adjacency lists can be allocated.
    pub const MAX_NODES: usize = isize::MAX as usize / std::mem::size_of::<Vec<usize>>();

    /// Create a shape. Both dimensions must be positive and their product
    /// at most [`GridShape::MAX_NODES`].
    pub fn new(columns: usize, rows: usize) -> Result<Self> {
        match columns.checked_mul(rows) {
            Some(n) if n > 0 && n <= Self::MAX_NODES => Ok(Self { columns, rows }),
            _ => Err(GraphError::InvalidDimension { columns, rows }),
        }
    }

    #[inline]
    pub fn columns(self) -> usize {
        self.columns
    }

    #[inline]
    pub fn rows(self) -> usize {
        self.rows
    }

    /// Total number of nodes.
    #[inline]
    pub fn node_count(self) -> usize {
        self.columns * self.rows
    }

    #[inline]
    pub fn contains(self, i: usize) -> bool {
        i < self.node_count()
    }

    #[inline]
    pub fn row(self, i: usize) -> usize {
        i / self.columns
    }

    #[inline]
    pub fn column(self, i: usize) -> usize {
        i % self.columns
    }

    /// Flat index of `(row, column)`, or `None` outside the grid.
    #[inline]
    pub fn index(self, row: usize, column: usize) -> Option<usize> {
        if row < self.rows && column < self.columns {
            Some(row * self.columns + column)
        } else {
            None
        }
    }

    /// Check that `i` addresses a node.
    pub fn check(self, i: usize) -> Result<()> {
        if self.contains(i) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                index: i,
                node_count: self.node_count(),
            })
        }
    }

    /// The neighbour of `i` one step in `dir`, if it is on the grid.
    pub fn step(self, i: usize, dir: Direction) -> Option<usize> {
        if !self.contains(i) {
            return None;
        }
        let (row, column) = (self.row(i), self.column(i));
        match dir {
            Direction::Up => row.checked_sub(1).and_then(|r| self.index(r, column)),
            Direction::Left => column.checked_sub(1).and_then(|c| self.index(row, c)),
            Direction::Right => self.index(row, column + 1),
            Direction::Down => self.index(row + 1, column),
        }
    }

    /// Direction of the step from `from` to `to`, or `None` when the two
    /// nodes are not 4-neighbours (or either is off the grid).
    pub fn direction(self, from: usize, to: usize) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(from, dir) == Some(to))
    }

    /// Whether `a` and `b` are distinct 4-neighbours.
    #[inline]
    pub fn are_adjacent(self, a: usize, b: usize) -> bool {
        self.direction(a, b).is_some()
    }
}

impl fmt::Display for GridShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.columns)
    }
}
