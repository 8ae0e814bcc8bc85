//! Generated bingo cards.
//!
//! A `Card` is built once by the generator and never mutated. The free
//! space marker and theme are opaque: the card carries them for the
//! renderer but never looks inside.

use serde::Serialize;

use super::{FREE_INDEX, FREE_LABEL, GRID_SIZE, WORDS_PER_CARD};

/// One 5×5 bingo card.
///
/// `squares` is row-major. Index 12 always holds `"FREE"`, whether or not a
/// visual marker is attached.
///
/// ## Example
///
/// ```
/// use bingo_cards::{generate_cards, CardRng, WordPool};
///
/// let pool = WordPool::new((1..=24).map(|i| format!("w{i}")));
/// let mut rng = CardRng::new(1);
/// let cards = generate_cards(&pool, 1, None::<()>, "#4F46E5", &mut rng).unwrap();
///
/// assert_eq!(cards[0].squares()[12], "FREE");
/// assert_eq!(cards[0].row(2).len(), 5);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Card<M, T> {
    squares: Vec<String>,
    free_space: Option<M>,
    theme: T,
}

impl<M, T> Card<M, T> {
    /// Assemble a card from 24 drawn words, inserting the free square.
    pub(crate) fn from_draws(mut drawn: Vec<String>, free_space: Option<M>, theme: T) -> Self {
        debug_assert_eq!(drawn.len(), WORDS_PER_CARD);
        drawn.insert(FREE_INDEX, FREE_LABEL.to_string());
        Self {
            squares: drawn,
            free_space,
            theme,
        }
    }

    /// All 25 squares, row-major.
    #[must_use]
    pub fn squares(&self) -> &[String] {
        &self.squares
    }

    /// Optional free space marker.
    #[must_use]
    pub fn free_space(&self) -> Option<&M> {
        self.free_space.as_ref()
    }

    /// Theme token.
    #[must_use]
    pub fn theme(&self) -> &T {
        &self.theme
    }

    /// Squares in row `row` (0-based).
    ///
    /// # Panics
    ///
    /// Panics if `row >= 5`.
    #[must_use]
    pub fn row(&self, row: usize) -> &[String] {
        let start = row * GRID_SIZE;
        &self.squares[start..start + GRID_SIZE]
    }

    /// Iterate over the five rows.
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.squares.chunks(GRID_SIZE)
    }

    /// The 24 drawn words, skipping the free square.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.squares
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != FREE_INDEX)
            .map(|(_, w)| w.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_card() -> Card<(), &'static str> {
        let drawn: Vec<String> = (0..24).map(|i| format!("w{i}")).collect();
        Card::from_draws(drawn, None, "#000000")
    }

    #[test]
    fn test_free_inserted_at_center() {
        let card = sample_card();
        assert_eq!(card.squares().len(), 25);
        assert_eq!(card.squares()[12], "FREE");
        assert_eq!(card.squares()[11], "w11");
        // Draws at index >= 12 shift up by one
        assert_eq!(card.squares()[13], "w12");
        assert_eq!(card.squares()[24], "w23");
    }

    #[test]
    fn test_rows() {
        let card = sample_card();
        let rows: Vec<_> = card.rows().collect();
        assert_eq!(rows.len(), 5);
        assert!(rows.iter().all(|r| r.len() == 5));
        assert_eq!(card.row(2)[2], "FREE");
        assert_eq!(card.row(0)[0], "w0");
    }

    #[test]
    fn test_words_skips_free() {
        let card = sample_card();
        let words: Vec<_> = card.words().collect();
        assert_eq!(words.len(), 24);
        assert!(!words.contains(&"FREE"));
    }

    #[test]
    fn test_marker_and_theme_pass_through() {
        let drawn: Vec<String> = (0..24).map(|i| i.to_string()).collect();
        let card = Card::from_draws(drawn, Some(vec![1u8, 2, 3]), 7u32);
        assert_eq!(card.free_space(), Some(&vec![1u8, 2, 3]));
        assert_eq!(*card.theme(), 7);
    }

    #[test]
    fn test_serialization() {
        let card = sample_card();
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(json["squares"][12], "FREE");
        assert_eq!(json["theme"], "#000000");
        assert!(json["free_space"].is_null());
    }
}
