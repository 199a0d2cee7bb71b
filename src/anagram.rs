//! `anagram` — the pairwise anagram predicate.

use crate::letter_counts::LetterCounts;

/// Decide whether two candidate words are anagrams of each other.
///
/// Missing (`None`) or empty words are never anagrams of anything, including
/// themselves; that short-circuit comes before everything else. Words of
/// different lengths are rejected next, without building frequency maps.
/// The remaining comparison is case-insensitive: "Listen" and "Silent" are
/// anagrams.
///
/// # Examples
///
/// ```
/// use anagroup::are_anagrams;
///
/// assert!(are_anagrams(Some("listen"), Some("silent")));
/// assert!(!are_anagrams(Some("abc"), Some("abcd")));
/// assert!(!are_anagrams(None, Some("abc")));
/// assert!(!are_anagrams(Some(""), Some("")));
/// ```
#[must_use]
pub fn are_anagrams(first: Option<&str>, second: Option<&str>) -> bool {
    let (Some(first), Some(second)) = (first, second) else {
        return false;
    };
    if first.is_empty() || second.is_empty() {
        return false;
    }
    if first.chars().count() != second.chars().count() {
        return false;
    }

    LetterCounts::of(first).agrees_with(&LetterCounts::of(second))
}
