//! Bingo card generation.
//!
//! - `CardGenerator`: Validates input and builds cards
//! - `generate_cards`: Shorthand using the default config
//! - `ValidationError`: The only failure mode

pub mod engine;
pub mod error;

pub use engine::{generate_cards, CardGenerator};
pub use error::ValidationError;
