//! `letter_counts` — per-word letter-frequency maps.
//!
//! A `LetterCounts` is built fresh for a single word and discarded after use;
//! nothing here is persisted or shared across calls. Counting is
//! case-insensitive: the word is lowercased once up front, so `'A'` and `'a'`
//! land on the same key. Any character counts, not just ASCII letters — the
//! map's keys are whatever `char`s the lowercased word contains.

use std::collections::HashMap;

/// Mapping from lowercase character to its number of occurrences in one word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterCounts {
    counts: HashMap<char, usize>,
}

impl LetterCounts {
    /// Count the case-insensitive occurrences of each character in `word`.
    ///
    /// An empty string yields an empty map.
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut counts = HashMap::new();
        for c in word.to_lowercase().chars() {
            *counts.entry(c).or_insert(0) += 1;
        }

        LetterCounts { counts }
    }

    /// Number of occurrences recorded for `c` (0 if absent).
    #[must_use]
    pub fn count(&self, c: char) -> usize {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    /// Total number of characters counted — the length of the lowercased word.
    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Iterate over `(character, count)` entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (char, usize)> + '_ {
        self.counts.iter().map(|(&c, &n)| (c, n))
    }

    /// True iff every character counted here appears with the same count in
    /// `other`.
    ///
    /// One-sided on purpose: keys present only in `other` are not examined.
    /// When the two words have equal length this cannot produce a false
    /// positive, since matching counts for all of `self`'s keys already
    /// account for every character of `other`.
    #[must_use]
    pub(crate) fn agrees_with(&self, other: &LetterCounts) -> bool {
        self.counts.iter().all(|(&c, &n)| other.count(c) == n)
    }
}
