use derive_more::Display;

use crate::config::CELLS;

use super::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Symbol {
    #[display("O")]
    O,
    #[display("X")]
    X,
}

impl Symbol {
    pub fn other(self) -> Self {
        match self {
            Symbol::O => Symbol::X,
            Symbol::X => Symbol::O,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled(Symbol),
}

impl Cell {
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Filled(s) => Some(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.index()]
    }

    // Only the state machine writes cells, and only into empty ones.
    pub(super) fn set(&mut self, pos: Position, value: Cell) {
        self.cells[pos.index()] = value;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Cell::Empty
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| **c != Cell::Empty).count()
    }

    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }
}
