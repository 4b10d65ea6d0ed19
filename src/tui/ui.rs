//! Stateless UI rendering for tic-tac-toe.

use std::rc::Rc;

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameSnapshot, Mode, Position, Square};

use super::app::App;
use super::palette::Palette;
use crate::status::{board_locked, cell_label, mode_hint, mode_locked, restart_label, status_message};

const CELL_WIDTH: u16 = 9;
const CELL_HEIGHT: u16 = 3;

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();
    let palette = Palette::for_theme(*snapshot.theme());
    let area = frame.area();

    let background = Block::default().style(
        Style::default()
            .bg(palette.background)
            .fg(palette.text_primary),
    );
    frame.render_widget(background, area);

    let chunks = screen_layout(area);

    let toggle = Paragraph::new(format!("[t] {} ", snapshot.theme().toggle_label()))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Right);
    frame.render_widget(toggle, chunks[0]);

    let title = Paragraph::new("Tic Tac Toe")
        .style(
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[1]);

    let subtitle = Paragraph::new(snapshot.mode().label())
        .style(Style::default().fg(palette.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(subtitle, chunks[2]);

    draw_mode_selector(frame, chunks[3], &snapshot, &palette);

    let status = Paragraph::new(status_message(&snapshot))
        .style(
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(status, chunks[4]);

    draw_board(frame, board_in(chunks[5]), &snapshot, app.cursor(), &palette);

    let restart = Paragraph::new(format!("[r] {}", restart_label(&snapshot)))
        .style(Style::default().fg(palette.accent))
        .alignment(Alignment::Center);
    frame.render_widget(restart, chunks[6]);

    let hint = Paragraph::new(mode_hint(*snapshot.mode()))
        .style(Style::default().fg(palette.text_secondary))
        .alignment(Alignment::Center);
    frame.render_widget(hint, chunks[7]);

    let footer = app
        .notice()
        .map(str::to_string)
        .unwrap_or_else(|| {
            format!(
                "{}  |  arrows/1-9: move  enter: place  q: quit",
                cell_label(&snapshot, app.cursor())
            )
        });
    let footer = Paragraph::new(footer)
        .style(Style::default().fg(palette.border))
        .alignment(Alignment::Center);
    frame.render_widget(footer, chunks[8]);
}

/// Board rectangle (borders included) for a screen of size `area`.
pub fn board_rect(area: Rect) -> Rect {
    board_in(screen_layout(area)[5])
}

/// Cell under a mouse position, if the position falls inside the grid.
pub fn cell_at(area: Rect, column: u16, row: u16) -> Option<Position> {
    let grid = board_rect(area).inner(Margin::new(1, 1));
    let inside = column >= grid.x
        && column < grid.x + grid.width
        && row >= grid.y
        && row < grid.y + grid.height;
    if !inside {
        return None;
    }
    Position::from_row_col(
        usize::from((row - grid.y) / CELL_HEIGHT),
        usize::from((column - grid.x) / CELL_WIDTH),
    )
}

fn screen_layout(area: Rect) -> Rc<[Rect]> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Theme toggle
            Constraint::Length(1), // Title
            Constraint::Length(1), // Subtitle
            Constraint::Length(2), // Mode selector
            Constraint::Length(2), // Status
            Constraint::Min(CELL_HEIGHT * 3 + 2), // Board
            Constraint::Length(2), // Restart
            Constraint::Length(1), // Hint
            Constraint::Length(1), // Notice / help
        ])
        .split(area)
}

fn board_in(area: Rect) -> Rect {
    center_rect(area, CELL_WIDTH * 3 + 2, CELL_HEIGHT * 3 + 2)
}

fn draw_mode_selector(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, palette: &Palette) {
    let locked = mode_locked(snapshot);
    let option = |mode: Mode| {
        let mut style = Style::default().fg(palette.text_secondary);
        if mode == *snapshot.mode() {
            style = style.fg(palette.accent).add_modifier(Modifier::BOLD);
        }
        if locked {
            style = style.add_modifier(Modifier::DIM);
        }
        Span::styled(format!("[ {} ]", mode.label()), style)
    };

    let line = Line::from(vec![
        Span::styled("[m] Mode: ", Style::default().fg(palette.text_primary)),
        option(Mode::PlayerVsPlayer),
        Span::raw(" "),
        option(Mode::PlayerVsAi),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(
    frame: &mut Frame,
    board_area: Rect,
    snapshot: &GameSnapshot,
    cursor: Position,
    palette: &Palette,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.border));
    let inner = block.inner(board_area);
    frame.render_widget(block, board_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CELL_HEIGHT); 3])
        .split(inner);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CELL_WIDTH); 3])
            .split(*row_area);
        for (col, cell_area) in cols.iter().enumerate() {
            if let Some(pos) = Position::from_row_col(row, col) {
                draw_cell(frame, *cell_area, snapshot, cursor, pos, palette);
            }
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &GameSnapshot,
    cursor: Position,
    pos: Position,
    palette: &Palette,
) {
    let (symbol, mut style) = match snapshot.board().get(pos) {
        Square::Empty => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(palette.border),
        ),
        Square::Occupied(mark) => (
            mark.to_string(),
            Style::default()
                .fg(palette.mark(mark))
                .add_modifier(Modifier::BOLD),
        ),
    };

    if pos == cursor && !board_locked(snapshot) {
        style = style.bg(palette.cursor).add_modifier(Modifier::REVERSED);
    }

    let cell = Paragraph::new(vec![Line::raw(""), Line::from(Span::styled(symbol, style))])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::NONE)
                .style(Style::default().bg(palette.background)),
        );
    frame.render_widget(cell, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}
