//! Word pools.
//!
//! A `WordPool` is the candidate list squares are drawn from. Entries are
//! trimmed and empty entries dropped on construction; duplicates are kept.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// Ordered list of non-empty, trimmed words.
///
/// ## Example
///
/// ```
/// use bingo_cards::WordPool;
///
/// let pool = WordPool::parse("apple\n  banana \n\ncherry\n");
/// assert_eq!(pool.words(), ["apple", "banana", "cherry"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct WordPool {
    words: Vec<String>,
}

impl WordPool {
    /// Build a pool from arbitrary strings, trimming each and dropping blanks.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let trimmed = w.as_ref().trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .collect();
        Self { words }
    }

    /// Parse newline-delimited text, one word or phrase per line.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::new(text.split('\n'))
    }

    /// The words, in input order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Iterate over the words.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Number of words, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Is the pool empty?
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of distinct words.
    #[must_use]
    pub fn distinct_len(&self) -> usize {
        self.words.iter().collect::<FxHashSet<_>>().len()
    }

    /// Does the pool contain `word`?
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl From<Vec<String>> for WordPool {
    fn from(words: Vec<String>) -> Self {
        Self::new(words)
    }
}

impl From<WordPool> for Vec<String> {
    fn from(pool: WordPool) -> Self {
        pool.words
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordPool {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a WordPool {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
