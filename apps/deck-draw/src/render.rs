//! Console lines the program prints.
//!
//! These strings are the user-visible contract of the tool; keep them stable.

use std::io::{self, Write};

use crate::domain::{sort_for_display, Card};

pub const NO_CARDS: &str = "No cards to display.";
pub const NO_DECK: &str = "Error: Deck ID not found. Please shuffle the cards first.";

pub fn shuffle_failed(detail: impl std::fmt::Display) -> String {
    format!("Error shuffling cards: {detail}")
}

pub fn draw_failed(detail: impl std::fmt::Display) -> String {
    format!("Error drawing cards: {detail}")
}

/// Lines for `cards` in display order, or the single "no cards" notice when
/// there is nothing to show.
///
/// An input made only of unrecognised ranks produces no lines at all: the
/// notice is for an empty draw, not for a fully filtered one.
pub fn sorted_lines(cards: &[Card]) -> Vec<String> {
    if cards.is_empty() {
        return vec![NO_CARDS.to_string()];
    }
    sort_for_display(cards)
        .into_iter()
        .map(ToString::to_string)
        .collect()
}

/// Write [`sorted_lines`] to `out`, one per line. Returns how many card lines
/// were written.
pub fn render_sorted<W: Write>(cards: &[Card], out: &mut W) -> io::Result<usize> {
    let lines = sorted_lines(cards);
    for line in &lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(if cards.is_empty() { 0 } else { lines.len() })
}
