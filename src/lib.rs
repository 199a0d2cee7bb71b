// Reusable library API — typed core plus the untyped JSON boundary
pub mod anagram;
pub mod dynamic;
pub mod errors;
pub mod grouping;
pub mod letter_counts;
pub mod log;

pub use anagram::are_anagrams;
pub use grouping::group_anagrams;
pub use letter_counts::LetterCounts;
