// Shared board/UI constants.
pub const GRID: usize = 3;
pub const CELLS: usize = GRID * GRID;

pub const CELL_W: u16 = 11; // each cell is a bordered box, symbol centered inside
pub const CELL_H: u16 = 5;
pub const BOARD_W: u16 = CELL_W * GRID as u16;
pub const BOARD_H: u16 = CELL_H * GRID as u16;

pub const INFO_H: u16 = 3;
pub const STATUS_H: u16 = 3;
pub const CONTROLS_H: u16 = 5;
pub const PANEL_W: u16 = BOARD_W + 8;
pub const PANEL_H: u16 = INFO_H + BOARD_H + STATUS_H + CONTROLS_H;
// Panel plus the cabinet border.
pub const MIN_PANE_WIDTH: u16 = PANEL_W + 2;
pub const MIN_PANE_HEIGHT: u16 = PANEL_H + 2;

pub const TITLE: &str = "TIC-TAC-TOE";
pub const DRAW_MSG: &str = "It's a Draw! Try Again.";

pub fn winner_msg(symbol: impl std::fmt::Display) -> String {
    format!("Congratulations! Winner is {symbol}")
}
