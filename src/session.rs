//! Game session: a controller plus the automated player's delayed move.
//!
//! The session keeps at most one pending timer. After every command it asks
//! the controller whether the automated player is due and at which epoch;
//! a pending timer for any other epoch is aborted before a new one is armed.
//! A timer that fires anyway is re-checked by the controller and dropped if
//! stale.

use derive_getters::Getters;
use derive_new::new;
use rand::Rng;
use std::time::Duration;
use tictactoe_core::{Command, Epoch, GameController, GameSnapshot, Position};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info, instrument};

/// Range the automated player's "thinking" delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, new)]
pub struct ThinkingDelay {
    /// Inclusive lower bound.
    min: Duration,
    /// Exclusive upper bound.
    max: Duration,
}

impl ThinkingDelay {
    /// Draws a delay uniformly from `[min, max)`.
    ///
    /// Degenerate ranges collapse to `min`.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        rng.random_range(self.min..self.max)
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(450), Duration::from_millis(700))
    }
}

#[derive(Debug)]
struct PendingMove {
    epoch: Epoch,
    handle: JoinHandle<()>,
}

/// A running game with its automated-move timer.
///
/// Scheduling spawns onto the current tokio runtime, so commands that can
/// hand the turn to the automated player must be dispatched from within one.
#[derive(Debug)]
pub struct GameSession {
    controller: GameController,
    delay: ThinkingDelay,
    pending: Option<PendingMove>,
    fired_tx: mpsc::UnboundedSender<Epoch>,
    fired_rx: mpsc::UnboundedReceiver<Epoch>,
}

impl GameSession {
    /// Creates a session around `controller`.
    #[instrument(skip(controller))]
    pub fn new(controller: GameController, delay: ThinkingDelay) -> Self {
        info!(mode = ?controller.mode(), "Creating game session");
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let mut session = Self {
            controller,
            delay,
            pending: None,
            fired_tx,
            fired_rx,
        };
        session.sync_timer();
        session
    }

    /// Returns the controller.
    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    /// Captures the current state for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        self.controller.snapshot()
    }

    /// Returns true while an automated move is scheduled.
    pub fn is_thinking(&self) -> bool {
        self.pending.is_some()
    }

    /// Epoch the pending timer is bound to, if any.
    pub fn pending_epoch(&self) -> Option<Epoch> {
        self.pending.as_ref().map(|p| p.epoch)
    }

    /// Applies a command and re-synchronizes the timer.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> bool {
        let accepted = self.controller.handle(command);
        self.sync_timer();
        accepted
    }

    /// Applies any automated move whose timer has fired, without waiting.
    pub fn poll_automated_move(&mut self) -> Option<Position> {
        let mut played = None;
        while let Ok(epoch) = self.fired_rx.try_recv() {
            if let Some(pos) = self.on_timer_fired(epoch) {
                played = Some(pos);
            }
        }
        played
    }

    /// Waits for the pending timer and applies the automated move.
    ///
    /// Returns `None` immediately if nothing is scheduled.
    pub async fn next_automated_move(&mut self) -> Option<Position> {
        while self.pending.is_some() {
            let epoch = self.fired_rx.recv().await?;
            if let Some(pos) = self.on_timer_fired(epoch) {
                return Some(pos);
            }
        }
        None
    }

    #[instrument(skip(self), fields(pending = ?self.pending_epoch()))]
    fn on_timer_fired(&mut self, epoch: Epoch) -> Option<Position> {
        if self.pending_epoch() == Some(epoch) {
            self.pending = None;
        }
        let played = self.controller.play_automated_move(epoch);
        if let Some(pos) = played {
            info!(position = %pos, "Automated player moved");
        }
        self.sync_timer();
        played
    }

    fn sync_timer(&mut self) {
        let due = self.controller.automated_turn();
        if due.is_some() && due == self.pending_epoch() {
            return;
        }

        self.cancel_pending();
        if let Some(epoch) = due {
            self.schedule(epoch);
        }
    }

    fn schedule(&mut self, epoch: Epoch) {
        let delay = self.delay.sample(&mut rand::rng());
        debug!(epoch, ?delay, "Scheduling automated move");

        let tx = self.fired_tx.clone();
        let handle = tokio::spawn(async move {
            sleep(delay).await;
            // The session may be gone; nothing to do then.
            let _ = tx.send(epoch);
        });
        self.pending = Some(PendingMove { epoch, handle });
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(epoch = pending.epoch, "Cancelling pending automated move");
            pending.handle.abort();
        }
    }
}

impl Drop for GameSession {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}
