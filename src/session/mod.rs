//! Game session: the board owner and its flip-reset timer.
//!
//! The session is driven by discrete events (start, click, timer) and never
//! sleeps itself. Callers ask for [`GameSession::reset_deadline`], wait for it
//! however their event loop waits (the CLI uses `tokio::time::sleep_until`),
//! and then call [`GameSession::fire_due_reset`].
//!
//! ```
//! use std::time::Duration;
//! use memory_cards::cards::{CardDefinition, CardId};
//! use memory_cards::core::{BoardIndex, GameConfig};
//! use memory_cards::session::GameSession;
//! use tokio::time::Instant;
//!
//! let mut session = GameSession::new(GameConfig::default().with_seed(7));
//! session
//!     .start_game(vec![
//!         CardDefinition::new(CardId::new(1), "owl", "https://img.example/owl.png"),
//!         CardDefinition::new(CardId::new(2), "fox", "https://img.example/fox.png"),
//!     ])
//!     .unwrap();
//!
//! let now = Instant::now();
//! session.flip(BoardIndex(0), now);
//! session.flip(BoardIndex(1), now);
//! assert!(session.reset_deadline().is_some());
//!
//! session.fire_due_reset(now + Duration::from_secs(1));
//! assert!(session.board().flipped().is_empty());
//! ```

mod game_session;
mod reset;

pub use game_session::GameSession;
pub use reset::PendingReset;
