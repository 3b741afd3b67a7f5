//! The single owner of the current board.

use tokio::time::Instant;
use tracing::{debug, info};

use super::reset::PendingReset;
use crate::cards::{CardDefinition, CardSet};
use crate::core::{BoardIndex, BoardState, FlipOutcome, GameConfig, GameId, GameRng};
use crate::error::BoardError;
use crate::rules::BoardEngine;

/// Holds the current board and applies events to it one at a time.
///
/// Each started game gets a new [`GameId`] and its own RNG stream. The flip
/// reset is tracked here rather than in a detached timer, so starting a new
/// game cancels it, and a reset that somehow survives still cannot touch a
/// board from another game.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    engine: BoardEngine,
    rng: GameRng,
    board: BoardState,
    pending_reset: Option<PendingReset>,
}

impl GameSession {
    /// Create a session with an empty, inactive board.
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        info!(seed = rng.seed(), "game session created");

        Self {
            engine: BoardEngine::new(config.move_policy),
            config,
            rng,
            board: BoardState::default(),
            pending_reset: None,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Seed of the session RNG, for replaying a session.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Replace the board with a new game built from `definitions`.
    ///
    /// On error the current board and any pending reset are kept.
    pub fn start_game(
        &mut self,
        definitions: Vec<CardDefinition>,
    ) -> Result<&BoardState, BoardError> {
        let cards = CardSet::new(definitions)?;
        let game = self.board.game().next();
        let mut game_rng = self.rng.fork();

        if let Some(stale) = self.pending_reset.take() {
            debug!(game = %stale.game, "pending flip reset cancelled by new game");
        }
        self.board = self.engine.initialize(&cards, game, &mut game_rng);

        info!(%game, pairs = cards.len(), "game started");
        Ok(&self.board)
    }

    /// Click a slot at time `now`.
    ///
    /// When the click completes a pair, a flip reset is scheduled
    /// `flip_reset_delay` after `now`.
    pub fn flip(&mut self, index: BoardIndex, now: Instant) -> FlipOutcome {
        let transition = self.engine.flip(&self.board, index);
        let was_complete = self.board.is_complete();
        self.board = transition.state;

        if transition.outcome.starts_evaluation() {
            let reset = PendingReset::new(self.board.game(), now + self.config.flip_reset_delay);
            let delay_ms = self.config.flip_reset_delay.as_millis() as u64;
            debug!(game = %reset.game, delay_ms, "flip reset scheduled");
            self.pending_reset = Some(reset);
        }

        if self.board.is_complete() && !was_complete {
            info!(game = %self.board.game(), moves = self.board.move_count(), "game complete");
        }

        transition.outcome
    }

    /// The pending reset, if any.
    #[must_use]
    pub fn pending_reset(&self) -> Option<PendingReset> {
        self.pending_reset
    }

    /// When the pending reset becomes due.
    #[must_use]
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.pending_reset.map(|reset| reset.due)
    }

    /// Apply the pending reset if it is due at `now`.
    ///
    /// Returns true if the board changed.
    pub fn fire_due_reset(&mut self, now: Instant) -> bool {
        match self.pending_reset {
            Some(reset) if reset.is_due(now) => {
                self.pending_reset = None;
                self.apply_reset(reset.game)
            }
            _ => false,
        }
    }

    /// Apply a reset scheduled by `game` immediately.
    ///
    /// Returns true if the board changed. A reset from another game is ignored.
    pub fn apply_reset(&mut self, game: GameId) -> bool {
        if self.pending_reset.is_some_and(|reset| reset.game == game) {
            self.pending_reset = None;
        }
        let before = self.board.flipped().len();
        self.board = self.engine.clear_flipped(&self.board, game);
        before != self.board.flipped().len()
    }

    /// Drop the pending reset without applying it.
    pub fn cancel_pending_reset(&mut self) -> Option<PendingReset> {
        self.pending_reset.take()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
