use super::rules;
use super::{Board, Cell, Position, Symbol};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    InProgress,
    Won(Symbol),
    Draw,
}

impl Status {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

/// An accepted move and the status it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub position: Position,
    pub symbol: Symbol,
    pub status: Status,
}

/// The turn loop. O moves first; the turn only passes on a non-terminal move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    turn: Symbol,
    moves: usize,
    status: Status,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Symbol::O,
            moves: 0,
            status: Status::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Symbol {
        self.turn
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Places the current symbol at `pos`. Returns `None` without touching
    /// any state when the game is over or the cell is taken.
    pub fn try_move(&mut self, pos: Position) -> Option<Placement> {
        if self.status.is_terminal() || !self.board.is_empty_at(pos) {
            return None;
        }

        let symbol = self.turn;
        self.board.set(pos, Cell::Filled(symbol));
        self.moves += 1;

        self.status = rules::evaluate(&self.board, self.moves);
        if !self.status.is_terminal() {
            self.turn = symbol.other();
        }

        Some(Placement {
            position: pos,
            symbol,
            status: self.status,
        })
    }

    /// Like [`Game::try_move`], reporting only the resulting status.
    #[allow(dead_code)]
    pub fn attempt_move(&mut self, pos: Position) -> Status {
        self.try_move(pos).map_or(self.status, |p| p.status)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn pos(i: usize) -> Position {
        Position::try_from(i).unwrap()
    }

    fn play(game: &mut Game, seq: &[usize]) -> Status {
        let mut last = game.status();
        for &i in seq {
            last = game.attempt_move(pos(i));
        }
        last
    }

    #[test]
    fn initial_state() {
        let game = Game::new();
        assert_eq!(game.turn(), Symbol::O);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.status(), Status::InProgress);
        assert_eq!(game.board().filled_count(), 0);
    }

    #[test]
    fn top_row_win_for_o() {
        let mut game = Game::new();
        let status = play(&mut game, &[0, 3, 1, 4]);
        assert_eq!(status, Status::InProgress);
        assert_eq!(game.attempt_move(pos(2)), Status::Won(Symbol::O));
        assert_eq!(game.moves(), 5);
        // Turn does not flip on the winning move.
        assert_eq!(game.turn(), Symbol::O);
    }

    #[test]
    fn full_board_without_line_is_draw() {
        let mut game = Game::new();
        let seq = [0, 1, 2, 3, 5, 4, 6, 8, 7];
        for (n, &i) in seq.iter().enumerate() {
            let status = game.attempt_move(pos(i));
            if n < seq.len() - 1 {
                assert_eq!(status, Status::InProgress, "after move {n}");
            } else {
                assert_eq!(status, Status::Draw);
            }
        }
        assert_eq!(game.moves(), 9);
    }

    #[test]
    fn occupied_cell_is_ignored() {
        let mut game = Game::new();
        assert_eq!(game.attempt_move(pos(0)), Status::InProgress);
        let before = game.clone();
        assert_eq!(game.try_move(pos(0)), None);
        assert_eq!(game.attempt_move(pos(0)), Status::InProgress);
        assert_eq!(game, before);
        assert_eq!(game.board().get(pos(0)), Cell::Filled(Symbol::O));
        assert_eq!(game.moves(), 1);
        assert_eq!(game.turn(), Symbol::X);
    }

    #[test]
    fn reset_after_win_starts_fresh() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(game.status(), Status::Won(Symbol::O));

        game.reset();
        let placed = game.try_move(pos(0));
        assert_eq!(
            placed,
            Some(Placement {
                position: pos(0),
                symbol: Symbol::O,
                status: Status::InProgress,
            })
        );
        assert_eq!(game.moves(), 1);
    }

    #[test]
    fn moves_after_win_are_ignored() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.clone();
        for i in 0..9 {
            assert_eq!(game.attempt_move(pos(i)), Status::Won(Symbol::O));
        }
        assert_eq!(game, before);
    }

    #[test]
    fn x_can_win() {
        let mut game = Game::new();
        let status = play(&mut game, &[0, 2, 1, 4, 8, 6]);
        assert_eq!(status, Status::Won(Symbol::X));
        assert_eq!(game.turn(), Symbol::X);
    }

    #[test]
    fn random_playouts_hold_invariants() {
        let mut rng = StdRng::seed_from_u64(0x7ac7ac);
        for _ in 0..500 {
            let mut game = Game::new();
            let mut expected_turn = Symbol::O;
            for _ in 0..rng.gen_range(1..20) {
                let cells: Vec<usize> = (0..9).collect();
                let i = *cells.choose(&mut rng).unwrap();
                let before = game.clone();

                match game.try_move(pos(i)) {
                    None => assert_eq!(game, before),
                    Some(p) => {
                        assert!(!before.status().is_terminal());
                        assert_eq!(p.symbol, expected_turn);
                        if !p.status.is_terminal() {
                            expected_turn = expected_turn.other();
                        }
                    }
                }
                assert_eq!(game.moves(), game.board().filled_count());
                assert_eq!(game.turn(), expected_turn);
                if before.status().is_terminal() {
                    assert_eq!(game, before);
                }
            }

            if rng.gen_bool(0.5) {
                game.reset();
                assert_eq!(game, Game::new());
            }
        }
    }
}
