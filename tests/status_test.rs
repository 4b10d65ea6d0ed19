//! Tests for status text and control labels.

use tictactoe_duel::status::{
    board_locked, cell_label, mode_hint, mode_locked, restart_label, status_message,
};
use tictactoe_duel::{Command, GameController, Mark, Mode, Position, Theme};

fn controller(mode: Mode, cells: &[usize]) -> GameController {
    let mut controller = GameController::new(mode, Theme::Light);
    for &index in cells {
        assert!(controller.handle(Command::CellClicked(index)));
    }
    controller
}

#[test]
fn test_turn_messages_in_player_vs_player() {
    let fresh = controller(Mode::PlayerVsPlayer, &[]);
    assert_eq!(status_message(&fresh.snapshot()), "Player 1's Turn (X)");

    let after_x = controller(Mode::PlayerVsPlayer, &[4]);
    assert_eq!(status_message(&after_x.snapshot()), "Player 2's Turn (O)");
}

#[test]
fn test_turn_messages_in_player_vs_ai() {
    let fresh = controller(Mode::PlayerVsAi, &[]);
    assert_eq!(status_message(&fresh.snapshot()), "Your Turn (X)");

    let after_x = controller(Mode::PlayerVsAi, &[4]);
    assert_eq!(status_message(&after_x.snapshot()), "AI is thinking...");
    assert!(board_locked(&after_x.snapshot()));
}

#[test]
fn test_end_messages() {
    let x_wins = controller(Mode::PlayerVsPlayer, &[0, 3, 1, 4, 2]);
    assert_eq!(status_message(&x_wins.snapshot()), "Player 1 wins!");

    let o_wins = controller(Mode::PlayerVsPlayer, &[0, 3, 1, 4, 8, 5]);
    assert_eq!(status_message(&o_wins.snapshot()), "Player 2 wins!");

    let draw = controller(Mode::PlayerVsPlayer, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(status_message(&draw.snapshot()), "It's a draw!");
}

#[test]
fn test_ai_win_message() {
    // X@0, O@4, X@1, O@2 (block), X@3, O@6 completes the anti-diagonal.
    let mut game = controller(Mode::PlayerVsAi, &[]);
    for human in [0, 1, 3] {
        assert!(game.handle(Command::CellClicked(human)));
        let epoch = game.automated_turn().unwrap();
        game.play_automated_move(epoch).unwrap();
    }

    assert_eq!(game.board().get(Position::BottomLeft).mark(), Some(Mark::O));
    assert_eq!(game.outcome().winner(), Some(Mark::O));
    assert_eq!(status_message(&game.snapshot()), "AI wins!");
}

#[test]
fn test_restart_label_changes_when_decided() {
    assert_eq!(restart_label(&controller(Mode::PlayerVsPlayer, &[4]).snapshot()), "Reset");
    let won = controller(Mode::PlayerVsPlayer, &[0, 3, 1, 4, 2]);
    assert_eq!(restart_label(&won.snapshot()), "Restart Game");
}

#[test]
fn test_mode_locked_once_play_starts() {
    assert!(!mode_locked(&controller(Mode::PlayerVsPlayer, &[]).snapshot()));
    assert!(mode_locked(&controller(Mode::PlayerVsPlayer, &[4]).snapshot()));
}

#[test]
fn test_hints_and_cell_labels() {
    assert_eq!(mode_hint(Mode::PlayerVsAi), "You play as X. AI plays as O.");
    assert_eq!(mode_hint(Mode::PlayerVsPlayer), "Player 1 = X, Player 2 = O.");

    let game = controller(Mode::PlayerVsPlayer, &[4]);
    assert_eq!(cell_label(&game.snapshot(), Position::Center), "Cell 5: X");
    assert_eq!(cell_label(&game.snapshot(), Position::TopLeft), "Cell 1: empty");
}
