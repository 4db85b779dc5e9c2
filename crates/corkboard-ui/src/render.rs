//! Column rendering of a board.
//!
//! Lists run left to right, cards top to bottom -- the same layout the
//! drag-and-drop surface of a kanban board uses, drawn with plain text.

use corkboard_core::document::{Board, List};

use crate::styles;

const MIN_COLUMN_WIDTH: usize = 16;
const MAX_COLUMN_WIDTH: usize = 32;
const COLUMN_GUTTER: usize = 2;

/// Truncates `s` to at most `max` characters, ending with an ellipsis when
/// anything was cut.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('\u{2026}');
    out
}

/// One-line summary used above the column layout.
pub fn format_board_header(board: &Board) -> String {
    let lists = board.lists.len();
    let cards = board.card_count();
    format!(
        "{}  {}",
        styles::render_bold(&board.name),
        styles::render_muted(&format!(
            "({} list{}, {} card{})",
            lists,
            if lists == 1 { "" } else { "s" },
            cards,
            if cards == 1 { "" } else { "s" },
        ))
    )
}

/// Renders a whole board as columns sized to `terminal_width`.
pub fn render_board(board: &Board, terminal_width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format_board_header(board));
    out.push('\n');

    if board.lists.is_empty() {
        out.push_str(&styles::render_muted("  (no lists yet)"));
        out.push('\n');
        return out;
    }

    let cols = board.lists.len();
    let avail = terminal_width.saturating_sub(COLUMN_GUTTER * (cols - 1));
    let col_width = (avail / cols).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH);

    let columns: Vec<Vec<String>> = board
        .lists
        .iter()
        .map(|list| list_column(list, col_width))
        .collect();
    let rows = columns.iter().map(Vec::len).max().unwrap_or(0);

    let gutter = " ".repeat(COLUMN_GUTTER);
    out.push('\n');
    for row in 0..rows {
        let mut cells = Vec::with_capacity(cols);
        for column in &columns {
            let text = column.get(row).map(String::as_str).unwrap_or("");
            let padded = format!("{:<width$}", text, width = col_width);
            cells.push(match row {
                0 => styles::render_bold(&padded),
                1 => styles::render_muted(&padded),
                _ => padded,
            });
        }
        // Trailing whitespace is invisible and annoys diffs; trim it.
        let line = cells.join(&gutter);
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Builds the plain-text cell lines for one list: header, separator, cards.
fn list_column(list: &List, width: usize) -> Vec<String> {
    let mut lines = Vec::with_capacity(list.cards.len() + 2);
    lines.push(truncate(
        &format!("{} ({})", list.name, list.cards.len()),
        width,
    ));
    lines.push("-".repeat(width));
    for card in &list.cards {
        lines.push(truncate(
            &format!("{} {}", styles::ICON_CARD, card.title),
            width,
        ));
    }
    lines
}
