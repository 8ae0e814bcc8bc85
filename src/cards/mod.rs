//! Card data model: cards, word pools, and presentation tokens.
//!
//! ## Key Types
//!
//! - `Card`: One generated 5×5 grid with a fixed free square
//! - `WordPool`: Candidate words squares are drawn from
//! - `ThemeColor`: Validated `#RRGGBB` style token
//! - `FreeSpaceImage`: Center-square image as a `data:` URI
//!
//! `Card` is generic over its marker and theme, so the generator never
//! depends on `ThemeColor` or `FreeSpaceImage`.

pub mod card;
pub mod image;
pub mod theme;
pub mod words;

pub use card::Card;
pub use image::FreeSpaceImage;
pub use theme::{ThemeColor, ThemeColorError};
pub use words::WordPool;

/// Squares per row and column.
pub const GRID_SIZE: usize = 5;

/// Squares per card.
pub const SQUARE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Index of the center square.
pub const FREE_INDEX: usize = SQUARE_COUNT / 2;

/// Words drawn per card.
pub const WORDS_PER_CARD: usize = SQUARE_COUNT - 1;

/// Text of the center square.
pub const FREE_LABEL: &str = "FREE";

/// Is `index` the free square?
#[must_use]
pub const fn is_free_index(index: usize) -> bool {
    index == FREE_INDEX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_constants() {
        assert_eq!(SQUARE_COUNT, 25);
        assert_eq!(FREE_INDEX, 12);
        assert_eq!(WORDS_PER_CARD, 24);
    }

    #[test]
    fn test_is_free_index() {
        assert!(is_free_index(12));
        assert!(!is_free_index(0));
        assert!(!is_free_index(24));
    }
}
