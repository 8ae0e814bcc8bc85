//! # bingo-cards
//!
//! Printable bingo card generator.
//!
//! Given a word pool, the generator produces 5×5 cards with a fixed
//! `"FREE"` center square. Each card samples its 24 words from the pool
//! without replacement, so no word repeats within a card. Cards are
//! independent: two cards may share words or even be identical.
//!
//! ## Design Principles
//!
//! 1. **Injected Randomness**: Every call takes a `CardRng`. Fix the seed
//!    for reproducible output, or use `CardRng::from_entropy()`.
//!
//! 2. **All-or-Nothing**: Input is validated before any card is built.
//!    A `ValidationError` means no cards.
//!
//! 3. **Opaque Presentation**: `Card<M, T>` carries the free space marker
//!    and theme without interpreting them. Renderers decide what they mean.
//!
//! ## Modules
//!
//! - `core`: Seedable RNG and generator configuration
//! - `cards`: Cards, word pools, theme colors, free space images
//! - `generator`: Card generation and validation
//! - `render`: Text, JSON, and HTML output

pub mod cards;
pub mod core;
pub mod generator;
pub mod render;

// Re-export commonly used types
pub use crate::core::{CardRng, ConfigError, GeneratorConfig};

pub use crate::cards::{
    Card, FreeSpaceImage, ThemeColor, ThemeColorError, WordPool, FREE_INDEX, FREE_LABEL,
    GRID_SIZE, SQUARE_COUNT, WORDS_PER_CARD,
};

pub use crate::generator::{generate_cards, CardGenerator, ValidationError};

pub use crate::render::{CardCursor, OutputFormat};
