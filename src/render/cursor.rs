//! Paging through a list of cards.

/// Position in a non-empty card list. Stepping past either end wraps.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardCursor {
    index: usize,
    total: usize,
}

impl CardCursor {
    /// Start at the first of `total` cards. `None` if there are no cards.
    #[must_use]
    pub fn new(total: usize) -> Option<Self> {
        (total > 0).then_some(Self { index: 0, total })
    }

    /// Current 0-based index.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// `(1-based position, total)`, for "Card i of n" labels.
    #[must_use]
    pub fn position(&self) -> (usize, usize) {
        (self.index + 1, self.total)
    }

    /// Step forward, wrapping from the last card to the first.
    pub fn forward(&mut self) -> usize {
        self.index = if self.index + 1 < self.total { self.index + 1 } else { 0 };
        self.index
    }

    /// Step back, wrapping from the first card to the last.
    pub fn back(&mut self) -> usize {
        self.index = if self.index > 0 { self.index - 1 } else { self.total - 1 };
        self.index
    }
}
