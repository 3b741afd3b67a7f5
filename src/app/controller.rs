//! Start/restart and click handling on top of a card source.

use tokio::time::Instant;
use tracing::{error, info, warn};

use super::notification::Notification;
use crate::core::{BoardIndex, BoardState, FlipOutcome, GameConfig};
use crate::error::FailureKind;
use crate::session::GameSession;
use crate::source::CardSource;

/// Result of a start/restart request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new board is in play.
    Started { pairs: usize },
    /// The previous board (if any) is still in play.
    NotStarted(Notification),
}

impl StartOutcome {
    #[must_use]
    pub fn is_started(&self) -> bool {
        matches!(self, StartOutcome::Started { .. })
    }
}

/// Glue between a card source and a game session.
pub struct GameController<S> {
    source: S,
    session: GameSession,
}

impl<S: CardSource> GameController<S> {
    /// Controller with a fresh session built from `config`.
    #[must_use]
    pub fn new(source: S, config: GameConfig) -> Self {
        Self::with_session(source, GameSession::new(config))
    }

    /// Controller around an existing session.
    #[must_use]
    pub fn with_session(source: S, session: GameSession) -> Self {
        Self { source, session }
    }

    /// The card source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// The session.
    #[must_use]
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// The current board.
    #[must_use]
    pub fn board(&self) -> &BoardState {
        self.session.board()
    }

    /// Fetch cards for `topic` and start a new game with them.
    ///
    /// Every failure is turned into a notification and leaves the current
    /// board in play. An empty card list does not start a game.
    pub async fn start_game(&mut self, topic: Option<&str>) -> StartOutcome {
        let definitions = match self.source.fetch_cards(topic).await {
            Ok(definitions) => definitions,
            Err(err) => {
                match err.kind() {
                    FailureKind::Network => error!(error = %err, "card source failed"),
                    FailureKind::NoResults | FailureKind::InvalidRequest => {
                        warn!(error = %err, "no game started")
                    }
                }
                return StartOutcome::NotStarted(Notification::from(&err));
            }
        };

        if definitions.is_empty() {
            warn!(?topic, "card source returned an empty list");
            return StartOutcome::NotStarted(Notification::no_cards());
        }

        match self.session.start_game(definitions) {
            Ok(board) => {
                let pairs = board.len() / 2;
                info!(?topic, pairs, "new game ready");
                StartOutcome::Started { pairs }
            }
            Err(err) => {
                error!(error = %err, "card source returned an unusable card list");
                StartOutcome::NotStarted(Notification::from(&err))
            }
        }
    }

    /// Click a slot.
    pub fn flip(&mut self, index: BoardIndex, now: Instant) -> FlipOutcome {
        self.session.flip(index, now)
    }

    /// When the pending flip reset becomes due.
    #[must_use]
    pub fn reset_deadline(&self) -> Option<Instant> {
        self.session.reset_deadline()
    }

    /// Apply the pending flip reset if it is due at `now`.
    pub fn fire_due_reset(&mut self, now: Instant) -> bool {
        self.session.fire_due_reset(now)
    }
}
