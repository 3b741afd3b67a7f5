//! Text rendering of the board for terminal play.

use std::fmt::Write;

use crate::app::{Notification, Severity};
use crate::core::{BoardIndex, BoardState};

/// Widest card name shown in a cell; longer names are cut.
const CELL_WIDTH: usize = 14;

/// Default number of cells per row.
pub const DEFAULT_COLUMNS: usize = 3;

/// Render the card grid. Face-down slots show `?`.
#[must_use]
pub fn render_board(state: &BoardState, columns: usize) -> String {
    let columns = columns.max(1);
    let mut out = String::new();

    for (position, card) in state.cards().enumerate() {
        let label = if state.is_face_up(card.board_index) {
            truncate(&card.display_name, CELL_WIDTH)
        } else {
            "?".to_string()
        };
        let slot = card.board_index.raw();
        let _ = write!(out, "[{slot:>2}] {label:<width$}", width = CELL_WIDTH);

        if (position + 1) % columns == 0 || position + 1 == state.len() {
            out.push('\n');
        } else {
            out.push(' ');
        }
    }

    out
}

/// Image references of the face-up slots, one per line.
#[must_use]
pub fn render_card_images(state: &BoardState) -> String {
    let mut out = String::new();
    for card in state.cards().filter(|c| state.is_face_up(c.board_index)) {
        let slot = card.board_index.raw();
        let _ = writeln!(out, "  {slot:>2}: {} <{}>", card.display_name, card.image_ref);
    }
    out
}

/// Move counter and, once won, the completion banner.
#[must_use]
pub fn render_status(state: &BoardState) -> String {
    let mut out = format!("Moves: {}\n", state.move_count());
    if state.is_complete() {
        let _ = writeln!(out, "Game Over! You won in {} moves.", state.move_count());
        out.push_str("Type `restart` to play again.\n");
    }
    out
}

/// One-line notification.
#[must_use]
pub fn render_notification(notification: &Notification) -> String {
    let tag = match notification.severity {
        Severity::Warning => "warning",
        Severity::Error => "error",
    };
    format!("[{tag}] {}\n", notification.message)
}

/// Parse a slot number typed by the player.
#[must_use]
pub fn parse_slot(input: &str) -> Option<BoardIndex> {
    input.trim().parse::<u32>().ok().map(BoardIndex::new)
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut cut: String = text.chars().take(max.saturating_sub(1)).collect();
        cut.push('~');
        cut
    }
}
