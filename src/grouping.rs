//! `grouping` — partitioning a word list into clusters of mutual anagrams.
//!
//! The scan works on a lexicographically sorted copy of the input, so group
//! membership order reflects sorted order, not the caller's input order; the
//! order of the groups themselves is the order in which each group was
//! completed during the scan. Both orderings are part of the observable
//! contract, which is why this module keeps the straightforward O(n²)
//! pairwise scan instead of bucketing by sorted-letter key (that rewrite
//! would change group order).

use crate::anagram::are_anagrams;

/// Partition `words` into groups of mutual anagrams.
///
/// Returns `None` for a missing input list — deliberately distinct from
/// `Some(vec![])`, which is what an input with no anagram pairs produces.
/// Singleton "groups" are never emitted: a word with no anagram partner
/// simply appears in no group. The caller's slice is never mutated; the scan
/// sorts its own copy.
///
/// # Examples
///
/// ```
/// use anagroup::group_anagrams;
///
/// let words = ["eat", "tea", "tan", "ate", "nat", "bat"];
/// let groups = group_anagrams(Some(&words)).unwrap();
/// assert_eq!(groups, vec![vec!["ate", "eat", "tea"], vec!["nat", "tan"]]);
///
/// assert_eq!(group_anagrams(None), None);
/// ```
#[must_use]
pub fn group_anagrams(words: Option<&[&str]>) -> Option<Vec<Vec<String>>> {
    let input = words?;

    // Work on a sorted copy; byte-wise str ordering, case-sensitive.
    let mut sorted: Vec<&str> = input.to_vec();
    sorted.sort_unstable();

    // Entries already claimed by an earlier group are flagged consumed and
    // match nothing for the rest of the scan.
    let mut consumed = vec![false; sorted.len()];
    let mut result: Vec<Vec<String>> = Vec::new();
    let mut group: Vec<String> = Vec::new();

    for i in 0..sorted.len() {
        if !consumed[i] {
            for j in 0..sorted.len() {
                if consumed[j] || !are_anagrams(Some(sorted[i]), Some(sorted[j])) {
                    continue;
                }
                group.push(sorted[j].to_string());
                // The first match is the word itself (j == i); it stays
                // unconsumed until the end of this outer step. Every later
                // match joins the group and is consumed on the spot.
                if group.len() > 1 {
                    consumed[j] = true;
                }
            }

            if group.len() > 1 {
                log::debug!("completed group of {}: {:?}", group.len(), group);
                result.push(std::mem::take(&mut group));
            } else {
                group.clear();
            }
        }
        consumed[i] = true;
    }

    Some(result)
}
