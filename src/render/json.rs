//! JSON output.

use serde::Serialize;

use crate::cards::Card;

/// Pretty-printed JSON array of cards.
pub fn render_cards<M, T>(cards: &[Card<M, T>]) -> serde_json::Result<String>
where
    M: Serialize,
    T: Serialize,
{
    serde_json::to_string_pretty(cards)
}
