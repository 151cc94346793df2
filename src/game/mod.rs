pub mod board;
pub mod position;
pub mod rules;
pub mod state;

pub use board::{Board, Cell, Symbol};
pub use position::Position;
pub use state::{Game, Status};
