//! Card generation.
//!
//! Each card samples 24 words from its own copy of the pool, without
//! replacement, then gets `"FREE"` inserted at index 12. Cards are
//! independent of each other: every card draws from a fresh fork of the
//! caller's RNG and a fresh scratch copy of the pool.

use tracing::{debug, trace};

use crate::cards::{Card, WordPool, WORDS_PER_CARD};
use crate::core::{CardRng, GeneratorConfig};

use super::error::{Result, ValidationError};

/// Builds bingo cards under a [`GeneratorConfig`].
///
/// ## Example
///
/// ```
/// use bingo_cards::{CardGenerator, CardRng, GeneratorConfig, ThemeColor, WordPool};
///
/// let pool = WordPool::new((1..=30).map(|i| format!("word {i}")));
/// let generator = CardGenerator::new(GeneratorConfig::default());
/// let mut rng = CardRng::new(7);
///
/// let cards = generator
///     .generate(&pool, 3, None::<()>, ThemeColor::default(), &mut rng)
///     .unwrap();
///
/// assert_eq!(cards.len(), 3);
/// assert!(cards.iter().all(|c| c.squares()[12] == "FREE"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardGenerator {
    config: GeneratorConfig,
}

impl CardGenerator {
    /// Create a generator with the given config.
    ///
    /// A `max_cards` of 0 is raised to 1, matching
    /// [`GeneratorConfig::with_max_cards`].
    #[must_use]
    pub fn new(mut config: GeneratorConfig) -> Self {
        config.max_cards = config.max_cards.max(1);
        Self { config }
    }

    /// The active config.
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Check inputs without generating anything.
    pub fn validate(&self, words: &WordPool, count: usize) -> Result<()> {
        if words.len() < WORDS_PER_CARD {
            return Err(ValidationError::InsufficientWords {
                required: WORDS_PER_CARD,
                found: words.len(),
            });
        }
        if count == 0 {
            return Err(ValidationError::InvalidCount);
        }
        if count > self.config.max_cards {
            return Err(ValidationError::TooManyCards {
                requested: count,
                max: self.config.max_cards,
            });
        }
        Ok(())
    }

    /// Generate `count` cards.
    ///
    /// `free_space` and `theme` are cloned onto every card unchanged. The
    /// caller's pool is never modified.
    pub fn generate<M, T>(
        &self,
        words: &WordPool,
        count: usize,
        free_space: Option<M>,
        theme: T,
        rng: &mut CardRng,
    ) -> Result<Vec<Card<M, T>>>
    where
        M: Clone,
        T: Clone,
    {
        self.validate(words, count)?;
        debug!(
            pool = words.len(),
            distinct = words.distinct_len(),
            count,
            seed = rng.seed(),
            "generating bingo cards"
        );

        let cards = (0..count)
            .map(|index| {
                let mut card_rng = rng.fork();
                let drawn = draw_words(words.words(), &mut card_rng);
                trace!(index, seed = card_rng.seed(), "card drawn");
                Card::from_draws(drawn, free_space.clone(), theme.clone())
            })
            .collect();
        Ok(cards)
    }
}

/// Sample 24 words without replacement.
///
/// Draws from a scratch copy: each pick takes a uniform index into the
/// remaining words and swap-removes it.
fn draw_words(pool: &[String], rng: &mut CardRng) -> Vec<String> {
    debug_assert!(pool.len() >= WORDS_PER_CARD);
    let mut remaining = pool.to_vec();
    (0..WORDS_PER_CARD)
        .map(|_| {
            let pick = rng.gen_index(remaining.len());
            remaining.swap_remove(pick)
        })
        .collect()
}

/// Generate cards with the default config.
pub fn generate_cards<M, T>(
    words: &WordPool,
    count: usize,
    free_space: Option<M>,
    theme: T,
    rng: &mut CardRng,
) -> Result<Vec<Card<M, T>>>
where
    M: Clone,
    T: Clone,
{
    CardGenerator::default().generate(words, count, free_space, theme, rng)
}
