//! Terminal UI: the presentation layer over a [`GameSession`].

mod app;
mod input;
mod palette;
mod ui;

pub use app::App;
pub use input::{Action, action_for, mouse_action, move_cursor};
pub use palette::Palette;
pub use ui::{board_rect, cell_at, draw};

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use std::time::Duration;
use tictactoe_core::GameController;
use tracing::{error, info, instrument};

use crate::config::AppConfig;
use crate::session::GameSession;

/// How long to wait for a key before checking the automated-move timer.
const INPUT_POLL: Duration = Duration::from_millis(50);

/// Runs the terminal UI until the user quits.
#[instrument(skip_all, fields(mode = config.mode().label(), theme = config.theme().label()))]
pub async fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting terminal UI");

    let controller = GameController::new(*config.mode(), *config.theme());
    let mut app = App::new(GameSession::new(controller, config.thinking_delay()));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Terminal UI closed");
    res
}

/// Draw/input loop.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    while !app.should_quit() {
        let area = terminal.draw(|f| draw(f, app))?.area;

        // Short poll keeps the automated move responsive.
        if event::poll(INPUT_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(area, mouse),
                _ => {}
            }
        }

        app.tick();
        tokio::task::yield_now().await;
    }

    Ok(())
}
