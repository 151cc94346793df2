//! Terminal-state evaluation.

use crate::config::CELLS;

use super::{Board, Position, Status, Symbol};

/// The eight winning lines, checked in this order.
pub const WIN_PATTERNS: [[usize; 3]; 8] = [
    [0, 1, 2],
    [0, 3, 6],
    [0, 4, 8],
    [1, 4, 7],
    [2, 4, 6],
    [2, 5, 8],
    [3, 4, 5],
    [6, 7, 8],
];

/// Returns the symbol of the first fully matched line, if any.
pub fn winner(board: &Board) -> Option<Symbol> {
    WIN_PATTERNS.iter().find_map(|line| {
        let [a, b, c] = line.map(|i| board.cells()[i]);
        match a.symbol() {
            Some(s) if a == b && b == c => Some(s),
            _ => None,
        }
    })
}

/// Status after `moves` accepted moves have produced `board`.
pub fn evaluate(board: &Board, moves: usize) -> Status {
    if let Some(s) = winner(board) {
        Status::Won(s)
    } else if moves == CELLS {
        Status::Draw
    } else {
        Status::InProgress
    }
}

/// Whether `pos` lies on any line that `symbol` currently owns.
pub fn on_winning_line(board: &Board, pos: Position, symbol: Symbol) -> bool {
    WIN_PATTERNS.iter().any(|line| {
        line.contains(&pos.index())
            && line
                .iter()
                .all(|&i| board.cells()[i].symbol() == Some(symbol))
    })
}
