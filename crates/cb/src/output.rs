//! Output formatting helpers for the `cb` CLI.
//!
//! Provides JSON output, table formatting, and view models that keep the
//! `--json` contract stable regardless of internal struct layout.

use std::io::{self, Write};

use serde::Serialize;

use corkboard_core::document::{Board, Card, List};
use corkboard_core::ids::{BoardId, CardId, ListId};

/// JSON view of a board: identity plus child counts.
#[derive(Serialize)]
pub struct BoardView {
    pub id: BoardId,
    pub name: String,
    pub lists: usize,
    pub cards: usize,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl BoardView {
    pub fn from_board(board: &Board) -> Self {
        Self {
            id: board.id,
            name: board.name.clone(),
            lists: board.lists.len(),
            cards: board.card_count(),
            created_at: board.created_at.to_rfc3339(),
        }
    }
}

/// JSON view of a list: identity plus card count.
#[derive(Serialize)]
pub struct ListView {
    pub id: ListId,
    pub name: String,
    pub cards: usize,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl ListView {
    pub fn from_list(list: &List) -> Self {
        Self {
            id: list.id,
            name: list.name.clone(),
            cards: list.cards.len(),
            created_at: list.created_at.to_rfc3339(),
        }
    }
}

/// JSON view of a card.
#[derive(Serialize)]
pub struct CardView {
    pub id: CardId,
    pub title: String,
    pub description: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl CardView {
    pub fn from_card(card: &Card) -> Self {
        Self {
            id: card.id,
            title: card.title.clone(),
            description: card.description.clone(),
            created_at: card.created_at.to_rfc3339(),
        }
    }
}

/// Print a value as pretty-printed JSON to stdout.
///
/// Terminates the process with exit code 1 if serialization fails.
pub fn output_json<T: Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            // Ignore broken pipe errors (e.g., piped to `head`)
            let _ = writeln!(handle, "{}", json);
        }
        Err(e) => {
            eprintln!("Error: failed to serialize JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print a simple table with headers and rows.
///
/// Column widths are computed from the data for alignment.
pub fn output_table(headers: &[&str], rows: &[Vec<String>]) {
    if rows.is_empty() {
        return;
    }

    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.len());
            }
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for (i, header) in headers.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{:<width$}", header, width = widths[i]);
    }
    let _ = writeln!(handle);

    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            let _ = write!(handle, "  ");
        }
        let _ = write!(handle, "{}", "-".repeat(*width));
    }
    let _ = writeln!(handle);

    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                let _ = write!(handle, "  ");
            }
            if i < widths.len() {
                let _ = write!(handle, "{:<width$}", cell, width = widths[i]);
            } else {
                let _ = write!(handle, "{}", cell);
            }
        }
        let _ = writeln!(handle);
    }
}

/// Row for `cb board list` table output.
pub fn format_board_row(board: &Board) -> Vec<String> {
    vec![
        board.id.to_string(),
        board.name.clone(),
        board.lists.len().to_string(),
        board.card_count().to_string(),
        board.created_at.format("%Y-%m-%d %H:%M").to_string(),
    ]
}
