use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::app::App;
use crate::config::{CELLS, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, TITLE};
use crate::game::{rules, Position, Status, Symbol};

use super::{cabinet, cell_rect, fits, regions, StatusView};

pub fn draw_game(frame: &mut Frame, app: &App) {
    let area = frame.size();

    if !fits(area) {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(msg, area);
        return;
    }

    frame.render_widget(cabinet(), area);

    let r = regions(area);
    draw_info(frame, app, r.info);
    draw_board(frame, app, r.board);
    draw_status(frame, &app.status, r.status);
    draw_controls(frame, app.mouse, r.controls);
}

fn symbol_style(symbol: Symbol) -> Style {
    let color = match symbol {
        Symbol::X => Color::Red,
        Symbol::O => Color::Cyan,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, app: &App, board_rect: Rect) {
    let game = app.session.game();
    let winner = match game.status() {
        Status::Won(s) => Some(s),
        _ => None,
    };

    for pos in Position::all() {
        let is_cursor = pos == app.cursor;
        let locked = app.board.is_locked(pos);

        let mut block = Block::default().borders(Borders::ALL);
        block = if is_cursor {
            block
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::Yellow))
        } else if locked {
            block.border_style(Style::default().fg(Color::DarkGray))
        } else {
            block
        };

        // Middle row of the three inner rows.
        let mark = match app.board.symbol(pos) {
            Some(s) => {
                let mut style = symbol_style(s);
                if winner == Some(s) && rules::on_winning_line(game.board(), pos, s) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                Line::styled(format!(" {s} "), style)
            }
            None if locked => Line::raw(""),
            None => Line::styled(
                (pos.index() + 1).to_string(),
                Style::default().fg(Color::DarkGray),
            ),
        };

        let cell = Paragraph::new(vec![Line::raw(""), mark])
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(cell, cell_rect(board_rect, pos));
    }
}

fn draw_info(frame: &mut Frame, app: &App, area: Rect) {
    let game = app.session.game();
    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let turn = match game.status() {
        Status::InProgress => Line::from(vec![
            Span::raw("TURN:  "),
            Span::styled(game.turn().to_string(), symbol_style(game.turn())),
        ]),
        Status::Won(_) | Status::Draw => Line::raw("TURN:  -"),
    };
    frame.render_widget(Paragraph::new(turn), cols[0]);

    let moves = Paragraph::new(format!("MOVES: {}/{}", game.moves(), CELLS));
    frame.render_widget(moves, cols[1]);
}

fn draw_status(frame: &mut Frame, status: &StatusView, area: Rect) {
    if !status.visible {
        return;
    }
    let msg = Paragraph::new(status.text.as_str())
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        );
    frame.render_widget(msg, area);
}

fn draw_controls(frame: &mut Frame, mouse: bool, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);

    let left = Paragraph::new(vec![
        Line::raw("←↑↓→ move"),
        Line::raw("enter/space mark"),
        Line::raw("1-9 mark cell"),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(left, cols[0]);

    let right = Paragraph::new(vec![
        Line::raw("r reset  n new"),
        Line::raw("q/esc quit"),
        Line::raw(if mouse { "click mark" } else { "" }),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(right, cols[1]);
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::session::Input;

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw_game(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn choose(app: &mut App, i: usize) {
        app.send(Input::CellChosen(Position::try_from(i).unwrap()));
    }

    #[test]
    fn fresh_board_shows_hints_and_turn() {
        let app = App::new(true);
        let screen = render(&app, 60, 34);
        assert!(screen.contains(TITLE));
        assert!(screen.contains("TURN:  O"));
        assert!(screen.contains("MOVES: 0/9"));
        assert!(!screen.contains("Congratulations"));
        assert!(screen.contains("click mark"));
    }

    #[test]
    fn win_message_is_rendered() {
        let mut app = App::new(false);
        for i in [0, 3, 1, 4, 2] {
            choose(&mut app, i);
        }
        let screen = render(&app, 60, 34);
        assert!(screen.contains("Congratulations! Winner is O"));
        assert!(screen.contains("MOVES: 5/9"));
        assert!(!screen.contains("click mark"));
    }

    #[test]
    fn reset_hides_message() {
        let mut app = App::new(true);
        for i in [0, 3, 1, 4, 2] {
            choose(&mut app, i);
        }
        app.send(Input::Reset);
        let screen = render(&app, 60, 34);
        assert!(!screen.contains("Congratulations"));
        assert!(screen.contains("MOVES: 0/9"));
    }

    #[test]
    fn small_pane_asks_for_resize() {
        let app = App::new(true);
        let screen = render(&app, 30, 10);
        assert!(screen.contains("RESIZE PANE"));
    }
}
