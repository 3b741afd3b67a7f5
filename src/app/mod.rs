//! Host-side glue: starting games from a card source and reporting failures.
//!
//! Catalog failures never reach the player as errors. They become
//! [`Notification`]s and the board that was in play stays in play.

mod controller;
mod notification;

pub use controller::{GameController, StartOutcome};
pub use notification::{Notification, Severity};
