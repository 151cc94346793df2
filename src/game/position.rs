use derive_more::{Display, Error};

use crate::config::{GRID, CELLS};

/// Index of a board cell, 0–8, left-to-right then top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct Position(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("cell index {index} is outside the board (0-{})", CELLS - 1)]
pub struct PositionError {
    pub index: usize,
}

impl Position {
    pub const CENTER: Position = Position(4);

    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < GRID && col < GRID {
            Some(Self((row * GRID + col) as u8))
        } else {
            None
        }
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / GRID
    }

    pub fn col(self) -> usize {
        self.index() % GRID
    }

    pub fn all() -> impl Iterator<Item = Position> {
        (0..CELLS as u8).map(Position)
    }
}

impl TryFrom<usize> for Position {
    type Error = PositionError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        if index < CELLS {
            Ok(Self(index as u8))
        } else {
            Err(PositionError { index })
        }
    }
}
