//! Tests for the terminal app state and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, layout::Rect};
use tictactoe_duel::tui::{Action, App, board_rect, cell_at, draw};
use tictactoe_duel::{
    GameController, GameSession, Mark, Mode, Position, Square, Theme, ThinkingDelay,
};

fn app(mode: Mode) -> App {
    App::new(GameSession::new(
        GameController::new(mode, Theme::Light),
        ThinkingDelay::default(),
    ))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn screen(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(70, 30)).unwrap();
    terminal.draw(|f| draw(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

#[tokio::test]
async fn test_cursor_and_enter_place_mark() {
    let mut app = app(Mode::PlayerVsPlayer);
    assert_eq!(app.cursor(), Position::Center);

    app.handle_key(key(KeyCode::Up));
    app.handle_key(key(KeyCode::Enter));

    let board = app.snapshot().board().clone();
    assert_eq!(board.get(Position::TopCenter), Square::Occupied(Mark::X));
}

#[tokio::test]
async fn test_taken_cell_sets_notice() {
    let mut app = app(Mode::PlayerVsPlayer);
    app.perform(Action::SelectCell(4));
    app.perform(Action::SelectCell(4));
    assert!(app.notice().is_some());

    app.perform(Action::SelectCell(0));
    assert!(app.notice().is_none());
}

#[tokio::test]
async fn test_mode_toggle_locked_during_game() {
    let mut app = app(Mode::PlayerVsPlayer);
    app.perform(Action::ToggleMode);
    assert_eq!(*app.snapshot().mode(), Mode::PlayerVsAi);

    app.perform(Action::SelectCell(4));
    app.perform(Action::ToggleMode);
    assert_eq!(*app.snapshot().mode(), Mode::PlayerVsAi);
    assert!(app.notice().is_some());

    app.perform(Action::Restart);
    app.perform(Action::ToggleMode);
    assert_eq!(*app.snapshot().mode(), Mode::PlayerVsPlayer);
}

#[tokio::test]
async fn test_board_locked_while_ai_thinks() {
    let mut app = app(Mode::PlayerVsAi);
    app.perform(Action::SelectCell(0));
    assert!(app.session().is_thinking());

    app.perform(Action::SelectCell(8));
    assert!(app.snapshot().board().is_empty(Position::BottomRight));
    assert!(app.notice().is_none());
}

#[tokio::test]
async fn test_mouse_click_places_mark() {
    let mut app = app(Mode::PlayerVsPlayer);
    let area = Rect::new(0, 0, 70, 30);
    let board = board_rect(area);
    let (column, row) = (board.x + board.width / 2, board.y + board.height / 2);
    assert_eq!(cell_at(area, column, row), Some(Position::Center));

    app.handle_mouse(
        area,
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        },
    );
    assert_eq!(app.snapshot().board().get(Position::Center), Square::Occupied(Mark::X));
    assert_eq!(app.cursor(), Position::Center);
}

#[tokio::test]
async fn test_quit_keys() {
    let mut app = app(Mode::PlayerVsPlayer);
    assert!(!app.should_quit());
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit());
}

#[tokio::test]
async fn test_renders_title_status_and_theme_toggle() {
    let mut app = app(Mode::PlayerVsPlayer);
    let text = screen(&app);
    assert!(text.contains("Tic Tac Toe"));
    assert!(text.contains("Player 1's Turn (X)"));
    assert!(text.contains("[t] Dark"));

    app.perform(Action::ToggleTheme);
    let text = screen(&app);
    assert!(text.contains("[t] Light"));
}
