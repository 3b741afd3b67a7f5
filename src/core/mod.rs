//! Core types: slot and game identifiers, board state, flip outcomes, RNG,
//! configuration.

pub mod action;
pub mod config;
pub mod entity;
pub mod rng;
pub mod state;

pub use action::{FlipOutcome, IgnoreReason};
pub use config::{GameConfig, MovePolicy, DEFAULT_FLIP_RESET_DELAY};
pub use entity::{BoardIndex, GameId};
pub use rng::GameRng;
pub use state::BoardState;
