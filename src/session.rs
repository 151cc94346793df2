//! Inbound events and outbound display capabilities around [`Game`].
//!
//! `Game` knows nothing about rendering. `Session` feeds it inputs and
//! translates each result into calls on the two display traits.

use tracing::{debug, info, instrument};

use crate::config::{winner_msg, DRAW_MSG};
use crate::game::{Game, Position, Status, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    CellChosen(Position),
    Reset,
}

/// Where the grid is drawn.
pub trait BoardDisplay {
    fn show_symbol(&mut self, pos: Position, symbol: Symbol);
    /// Stop accepting selections on one cell.
    fn lock_cell(&mut self, pos: Position);
    fn lock_all(&mut self);
    /// Empty and unlock every cell.
    fn clear_all(&mut self);
}

/// Where the end-of-game message is drawn.
pub trait StatusDisplay {
    fn show_message(&mut self, text: &str);
    fn reveal(&mut self);
    fn hide(&mut self);
}

#[derive(Debug, Default)]
pub struct Session {
    game: Game,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    #[instrument(level = "debug", skip(self, board, status))]
    pub fn handle(
        &mut self,
        input: Input,
        board: &mut impl BoardDisplay,
        status: &mut impl StatusDisplay,
    ) -> Status {
        match input {
            Input::CellChosen(pos) => {
                let Some(placed) = self.game.try_move(pos) else {
                    debug!(%pos, "move ignored");
                    return self.game.status();
                };
                debug!(%pos, symbol = %placed.symbol, moves = self.game.moves(), "move accepted");

                board.show_symbol(placed.position, placed.symbol);
                board.lock_cell(placed.position);

                match placed.status {
                    Status::InProgress => {}
                    Status::Won(symbol) => {
                        info!(%symbol, moves = self.game.moves(), "game won");
                        board.lock_all();
                        status.show_message(&winner_msg(symbol));
                        status.reveal();
                    }
                    Status::Draw => {
                        info!("game drawn");
                        board.lock_all();
                        status.show_message(DRAW_MSG);
                        status.reveal();
                    }
                }
                placed.status
            }
            Input::Reset => {
                info!("reset");
                self.game.reset();
                board.clear_all();
                status.show_message("");
                status.hide();
                self.game.status()
            }
        }
    }
}
