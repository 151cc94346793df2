pub mod render;
pub mod view;

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::config::{
    BOARD_H, BOARD_W, CELL_H, CELL_W, CONTROLS_H, INFO_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH,
    PANEL_H, PANEL_W, STATUS_H, TITLE,
};
use crate::game::Position;

pub use render::draw_game;
pub use view::{BoardView, StatusView};

/// Screen areas for one frame, derived from the full terminal area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Regions {
    pub info: Rect,
    pub board: Rect,
    pub status: Rect,
    pub controls: Rect,
}

pub fn fits(area: Rect) -> bool {
    area.width >= MIN_PANE_WIDTH && area.height >= MIN_PANE_HEIGHT
}

pub(crate) fn cabinet() -> Block<'static> {
    Block::default()
        .title(TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left)
}

pub fn regions(area: Rect) -> Regions {
    let panel = centered(cabinet().inner(area), PANEL_W, PANEL_H);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(INFO_H),
            Constraint::Length(BOARD_H),
            Constraint::Length(STATUS_H),
            Constraint::Length(CONTROLS_H),
        ])
        .split(panel);

    Regions {
        info: rows[0],
        board: centered(rows[1], BOARD_W, BOARD_H),
        status: rows[2],
        controls: rows[3],
    }
}

pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn cell_rect(board: Rect, pos: Position) -> Rect {
    Rect {
        x: board.x + pos.col() as u16 * CELL_W,
        y: board.y + pos.row() as u16 * CELL_H,
        width: CELL_W,
        height: CELL_H,
    }
}

/// Maps a terminal coordinate to the cell drawn there.
pub fn cell_at(board: Rect, column: u16, row: u16) -> Option<Position> {
    if column < board.x || row < board.y {
        return None;
    }
    let (dx, dy) = (column - board.x, row - board.y);
    if dx >= board.width || dy >= board.height {
        return None;
    }
    Position::from_row_col((dy / CELL_H) as usize, (dx / CELL_W) as usize)
}
