//! Plain-text card rendering for terminals.

use crate::cards::{Card, GRID_SIZE};

/// Width of one cell, in characters.
///
/// Widths count `char`s, not terminal columns, so double-width glyphs
/// (CJK, most emoji) push their row out of alignment.
pub const CELL_WIDTH: usize = 14;

const HEADER: [char; GRID_SIZE] = ['B', 'I', 'N', 'G', 'O'];

/// Render one card as a boxed grid under a `B I N G O` header.
///
/// `index` is 0-based; the title shows it 1-based.
#[must_use]
pub fn render_card<M, T>(card: &Card<M, T>, index: usize, total: usize) -> String {
    let border = border_line();
    let mut out = String::new();

    out.push_str(&format!("Card {} of {}\n", index + 1, total));
    out.push_str(&border);
    push_row(&mut out, HEADER.iter().map(|c| c.to_string()));
    out.push_str(&border);
    for row in card.rows() {
        push_row(&mut out, row.iter().map(|s| fit(s, CELL_WIDTH)));
        out.push_str(&border);
    }
    out
}

/// Render every card, separated by blank lines.
#[must_use]
pub fn render_cards<M, T>(cards: &[Card<M, T>]) -> String {
    cards
        .iter()
        .enumerate()
        .map(|(i, card)| render_card(card, i, cards.len()))
        .collect::<Vec<_>>()
        .join("\n")
}

fn border_line() -> String {
    let mut line = String::from("+");
    for _ in 0..GRID_SIZE {
        line.push_str(&"-".repeat(CELL_WIDTH));
        line.push('+');
    }
    line.push('\n');
    line
}

fn push_row(out: &mut String, cells: impl Iterator<Item = String>) {
    out.push('|');
    for cell in cells {
        out.push_str(&center(&cell, CELL_WIDTH));
        out.push('|');
    }
    out.push('\n');
}

/// Truncate to `width` characters (not columns), marking the cut with `…`.
fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(width - 1).collect();
    cut.push('…');
    cut
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    let pad = width.saturating_sub(len);
    let left = pad / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(pad - left))
}
