use crate::config::CELLS;
use crate::game::{Position, Symbol};
use crate::session::{BoardDisplay, StatusDisplay};

/// What the grid currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardView {
    pub symbols: [Option<Symbol>; CELLS],
    pub locked: [bool; CELLS],
}

impl BoardView {
    pub fn symbol(&self, pos: Position) -> Option<Symbol> {
        self.symbols[pos.index()]
    }

    pub fn is_locked(&self, pos: Position) -> bool {
        self.locked[pos.index()]
    }
}

impl BoardDisplay for BoardView {
    fn show_symbol(&mut self, pos: Position, symbol: Symbol) {
        self.symbols[pos.index()] = Some(symbol);
    }

    fn lock_cell(&mut self, pos: Position) {
        self.locked[pos.index()] = true;
    }

    fn lock_all(&mut self) {
        self.locked = [true; CELLS];
    }

    fn clear_all(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusView {
    pub text: String,
    pub visible: bool,
}

impl StatusDisplay for StatusView {
    fn show_message(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn reveal(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }
}
