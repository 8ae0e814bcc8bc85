//! Errors raised by card generation.

use thiserror::Error;

/// Input rejected before any card is built.
///
/// Generation is all-or-nothing: when this is returned, no cards were
/// produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("At least {required} words are required to generate a bingo card (got {found})")]
    InsufficientWords { required: usize, found: usize },

    #[error("card count must be at least 1")]
    InvalidCount,

    #[error("cannot generate {requested} cards: the limit is {max}")]
    TooManyCards { requested: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ValidationError>;
