//! # memory-cards
//!
//! A memory-matching (concentration) card game engine. Cards come from a
//! remote image catalog; the engine lays every card out twice, shuffled,
//! and tracks flips, matches and moves until every pair is found.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: A board is a value. Transitions take a
//!    `BoardState` and return a new one; nothing is mutated behind the
//!    caller's back.
//!
//! 2. **Single Owner**: `GameSession` holds the current board and applies
//!    events one at a time. Deferred work (the flip reset) is tracked by
//!    the session and scoped to the game that scheduled it.
//!
//! 3. **Uniform Shuffles**: Fisher–Yates over a seeded ChaCha8 stream, so
//!    boards are fair and reproducible.
//!
//! ## Modules
//!
//! - `core`: Slot and game ids, board state, flip outcomes, RNG, configuration
//! - `cards`: Card definitions, board cards, validated card sets
//! - `rules`: The board engine (layout, flips, resets, completion)
//! - `session`: The board owner and its flip-reset timer
//! - `source`: Remote card catalogs
//! - `app`: Starting games from a catalog, user notifications
//! - `render`: Text rendering for terminal play

pub mod app;
pub mod cards;
pub mod core;
pub mod error;
pub mod render;
pub mod rules;
pub mod session;
pub mod source;

// Re-export commonly used types
pub use crate::core::{
    BoardIndex, BoardState, FlipOutcome, GameConfig, GameId, GameRng, IgnoreReason, MovePolicy,
};

pub use crate::cards::{BoardCard, CardDefinition, CardId, CardSet};

pub use crate::rules::{BoardEngine, Transition};

pub use crate::session::{GameSession, PendingReset};

pub use crate::source::{CardSource, CreatureCatalog, ImageSearchCatalog};

pub use crate::app::{GameController, Notification, Severity, StartOutcome};

pub use crate::error::{BoardError, FailureKind, SourceError, SourceResult};
