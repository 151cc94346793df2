use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::GRID;
use crate::game::{Position, Status};
use crate::session::{Input, Session};
use crate::ui::{self, draw_game, BoardView, StatusView};

type Term = Terminal<CrosstermBackend<Stdout>>;

const POLL: Duration = Duration::from_millis(250);

/// Everything one running game needs: the session plus what the screen shows.
pub struct App {
    pub session: Session,
    pub board: BoardView,
    pub status: StatusView,
    pub cursor: Position,
    pub mouse: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

impl App {
    pub fn new(mouse: bool) -> Self {
        Self {
            session: Session::new(),
            board: BoardView::default(),
            status: StatusView::default(),
            cursor: Position::CENTER,
            mouse,
        }
    }

    pub fn send(&mut self, input: Input) -> Status {
        self.session.handle(input, &mut self.board, &mut self.status)
    }

    /// Chooses a cell unless the display has locked it.
    pub fn choose(&mut self, pos: Position) {
        if self.board.is_locked(pos) {
            debug!(%pos, "cell locked");
            return;
        }
        self.send(Input::CellChosen(pos));
    }

    pub fn move_cursor(&mut self, drow: isize, dcol: isize) {
        let clamp = |v: usize, d: isize| v.saturating_add_signed(d).min(GRID - 1);
        let row = clamp(self.cursor.row(), drow);
        let col = clamp(self.cursor.col(), dcol);
        if let Some(pos) = Position::from_row_col(row, col) {
            self.cursor = pos;
        }
    }
}

pub fn run(cli: &Cli) -> Result<()> {
    let mouse = !cli.no_mouse;
    info!(mouse, "starting terminal ui");
    let mut tui = TuiGuard::new(mouse)?;
    let result = run_loop(tui.terminal_mut(), App::new(mouse));
    info!("terminal ui stopped");
    result
}

fn run_loop(terminal: &mut Term, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|frame| draw_game(frame, &app))?;

        if event::poll(POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_input(key.code, &mut app) == Flow::Quit {
                        break;
                    }
                }
                Event::Mouse(mouse) if app.mouse => {
                    let area = terminal.size()?;
                    handle_mouse(mouse, area, &mut app);
                }
                _ => {}
            }
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
    mouse: bool,
}

impl TuiGuard {
    fn new(mouse: bool) -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        if mouse {
            execute!(stdout, EnableMouseCapture)?;
        }
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal, mouse })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        if self.mouse {
            let _ = execute!(self.terminal.backend_mut(), DisableMouseCapture);
        }
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

fn handle_input(code: KeyCode, app: &mut App) -> Flow {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Left => app.move_cursor(0, -1),
        KeyCode::Right => app.move_cursor(0, 1),
        KeyCode::Up => app.move_cursor(-1, 0),
        KeyCode::Down => app.move_cursor(1, 0),
        KeyCode::Enter | KeyCode::Char(' ') => app.choose(app.cursor),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if let Ok(pos) = Position::try_from(idx) {
                app.cursor = pos;
                app.choose(pos);
            }
        }
        // Both reset-style controls start over.
        KeyCode::Char('r') | KeyCode::Char('n') => {
            app.send(Input::Reset);
        }
        _ => {}
    }
    Flow::Continue
}

fn handle_mouse(ev: MouseEvent, area: Rect, app: &mut App) {
    if !matches!(ev.kind, MouseEventKind::Down(MouseButton::Left)) || !ui::fits(area) {
        return;
    }
    let board = ui::regions(area).board;
    if let Some(pos) = ui::cell_at(board, ev.column, ev.row) {
        app.cursor = pos;
        app.choose(pos);
    }
}
