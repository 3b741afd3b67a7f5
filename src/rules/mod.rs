//! Board rules.
//!
//! `BoardEngine` defines:
//! - How a board is laid out from a set of definitions
//! - What a click on a slot does
//! - When a flipped pair turns back and when the game is won
//!
//! The engine never owns a board. `session::GameSession` holds the current
//! state and feeds it through the engine one event at a time.

pub mod engine;

pub use engine::{BoardEngine, Transition};
