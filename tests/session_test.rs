//! Tests for the automated player's delayed move.

use std::time::Duration;
use tictactoe_duel::{
    Command, GameController, GameSession, Mark, Mode, Outcome, Position, Square, Theme,
    ThinkingDelay,
};
use tokio::time::{Instant, sleep};

fn ai_session() -> GameSession {
    GameSession::new(
        GameController::new(Mode::PlayerVsAi, Theme::Light),
        ThinkingDelay::default(),
    )
}

#[tokio::test(start_paused = true)]
async fn test_automated_move_lands_within_delay_window() {
    let mut session = ai_session();
    assert!(!session.is_thinking());

    assert!(session.dispatch(Command::CellClicked(0)));
    assert!(session.is_thinking());

    let start = Instant::now();
    let played = session.next_automated_move().await;
    let elapsed = start.elapsed();

    assert_eq!(played, Some(Position::Center));
    assert!(elapsed >= Duration::from_millis(450), "{:?}", elapsed);
    assert!(elapsed < Duration::from_millis(700), "{:?}", elapsed);
    assert!(!session.is_thinking());
    assert_eq!(session.controller().turn(), Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_restart_cancels_pending_move() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(0));
    assert!(session.is_thinking());

    session.dispatch(Command::Restart);
    assert!(!session.is_thinking());

    sleep(Duration::from_secs(1)).await;
    assert_eq!(session.poll_automated_move(), None);
    assert!(session.controller().board().is_blank());
}

#[tokio::test(start_paused = true)]
async fn test_mode_change_cancels_pending_move() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(4));

    session.dispatch(Command::SetMode(Mode::PlayerVsPlayer));
    assert!(!session.is_thinking());

    sleep(Duration::from_secs(1)).await;
    assert_eq!(session.poll_automated_move(), None);
    assert!(session.controller().board().is_blank());
    assert_eq!(session.next_automated_move().await, None);
}

#[tokio::test(start_paused = true)]
async fn test_reselecting_current_mode_cancels_pending_move() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(0));
    let epoch = session.controller().epoch();
    assert!(session.is_thinking());

    session.dispatch(Command::SetMode(Mode::PlayerVsAi));
    assert!(!session.is_thinking());
    assert!(session.controller().epoch() > epoch);

    sleep(Duration::from_secs(1)).await;
    assert_eq!(session.poll_automated_move(), None);
    assert!(session.controller().board().is_blank());
    assert_eq!(session.controller().turn(), Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_fired_timer_from_old_game_is_ignored() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(0));

    // Let the timer fire without consuming it.
    sleep(Duration::from_secs(1)).await;
    session.dispatch(Command::Restart);

    assert_eq!(session.poll_automated_move(), None);
    assert!(session.controller().board().is_blank());
    assert_eq!(session.controller().turn(), Mark::X);
}

#[tokio::test(start_paused = true)]
async fn test_theme_toggle_keeps_pending_move() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(0));
    let epoch = session.pending_epoch();
    assert!(epoch.is_some());

    session.dispatch(Command::ToggleTheme);
    assert_eq!(session.pending_epoch(), epoch);
    assert_eq!(session.next_automated_move().await, Some(Position::Center));
    assert_eq!(session.controller().theme(), Theme::Dark);
}

#[tokio::test(start_paused = true)]
async fn test_at_most_one_move_per_turn() {
    let mut session = ai_session();
    session.dispatch(Command::CellClicked(0));
    session.dispatch(Command::ToggleTheme);
    session.dispatch(Command::ToggleTheme);

    sleep(Duration::from_secs(2)).await;
    assert_eq!(session.poll_automated_move(), Some(Position::Center));

    let occupied = session
        .controller()
        .board()
        .squares()
        .iter()
        .filter(|s| **s == Square::Occupied(Mark::O))
        .count();
    assert_eq!(occupied, 1);
    assert!(!session.is_thinking());
}

#[tokio::test(start_paused = true)]
async fn test_full_game_against_automated_player_terminates() {
    let mut session = ai_session();

    while session.controller().outcome() == Outcome::Undecided {
        let pos = Position::valid_moves(session.controller().board())[0];
        assert!(session.dispatch(Command::CellClicked(pos.to_index())));
        if session.controller().outcome().is_decided() {
            break;
        }
        assert!(session.next_automated_move().await.is_some());
    }

    assert!(!session.is_thinking());
    assert!(!session.dispatch(Command::CellClicked(0)));
}

#[tokio::test]
async fn test_player_vs_player_never_schedules() {
    let mut session = GameSession::new(GameController::default(), ThinkingDelay::default());
    session.dispatch(Command::CellClicked(4));
    session.dispatch(Command::CellClicked(0));
    assert!(!session.is_thinking());
    assert_eq!(session.next_automated_move().await, None);
}
