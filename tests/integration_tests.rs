//! Integration tests for the anagroup library.
//!
//! These tests exercise the public API end to end: the typed core
//! (`LetterCounts`, `are_anagrams`, `group_anagrams`) and the untyped JSON
//! boundary (`dynamic`), including the null/empty/error distinctions the two
//! surfaces must agree on.

use std::sync::Once;

use serde_json::{json, Value};

use anagroup::dynamic::{are_anagrams_value, group_anagrams_value, letter_frequency_value};
use anagroup::errors::ArgumentError;
use anagroup::{are_anagrams, group_anagrams, LetterCounts};

static INIT_LOGGER: Once = Once::new();

/// Install the logger once for the whole test binary.
fn setup() {
    INIT_LOGGER.call_once(|| anagroup::log::init_logger(true));
}

mod letter_frequency_properties {
    use super::*;

    #[test]
    fn test_counts_sum_to_word_length() {
        setup();
        for word in ["listen", "banana", "a", "Tea"] {
            assert_eq!(LetterCounts::of(word).total(), word.len());
        }
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        setup();
        for word in ["listen", "Banana", "tEa"] {
            assert_eq!(LetterCounts::of(word), LetterCounts::of(&word.to_uppercase()));
        }
    }

    #[test]
    fn test_empty_word_has_empty_counts() {
        setup();
        assert!(LetterCounts::of("").is_empty());
    }
}

mod typed_and_untyped_surfaces_agree {
    use super::*;

    #[test]
    fn test_predicate_agrees_across_surfaces() {
        setup();
        let pairs = [("listen", "silent"), ("Listen", "Silent"), ("abc", "abcd"), ("cat", "dog")];
        for (a, b) in pairs {
            let typed = are_anagrams(Some(a), Some(b));
            let untyped = are_anagrams_value(&json!(a), &json!(b)).unwrap();
            assert_eq!(typed, untyped, "surfaces disagree on ({a}, {b})");
        }
    }

    #[test]
    fn test_grouping_agrees_across_surfaces() {
        setup();
        let words = ["eat", "tea", "tan", "ate", "nat", "bat"];
        let typed = group_anagrams(Some(&words)).unwrap();

        let untyped = group_anagrams_value(&json!(words)).unwrap();
        let expected: Value = json!(typed);
        assert_eq!(untyped, expected);
    }

    #[test]
    fn test_null_input_maps_to_null_output_on_both_surfaces() {
        setup();
        assert_eq!(group_anagrams(None), None);
        assert_eq!(group_anagrams_value(&Value::Null), Ok(Value::Null));
        // ...and empty input maps to empty output, never to null
        assert_eq!(group_anagrams(Some(&[])), Some(vec![]));
        assert_eq!(group_anagrams_value(&json!([])), Ok(json!([])));
    }
}

mod grouping_contract {
    use super::*;

    #[test]
    fn test_classic_fixture_with_exact_ordering() {
        setup();
        let groups = group_anagrams(Some(&["eat", "tea", "tan", "ate", "nat", "bat"])).unwrap();

        // membership order follows the sorted word list; "bat" has no partner
        // and appears nowhere
        assert_eq!(groups, vec![vec!["ate", "eat", "tea"], vec!["nat", "tan"]]);
    }

    #[test]
    fn test_identical_words_form_one_group() {
        setup();
        let groups = group_anagrams(Some(&["a", "a", "a"])).unwrap();
        assert_eq!(groups, vec![vec!["a", "a", "a"]]);
    }

    #[test]
    fn test_grouping_is_deterministic() {
        setup();
        let words = ["pots", "stop", "tops", "spot", "opts", "post", "other"];
        let first = group_anagrams(Some(&words)).unwrap();
        let second = group_anagrams(Some(&words)).unwrap();
        assert_eq!(first, second);

        // all six permutations land in a single group, in sorted order
        assert_eq!(first, vec![vec!["opts", "post", "pots", "spot", "stop", "tops"]]);
    }

    #[test]
    fn test_larger_mixed_word_list() {
        setup();
        // every character counts, spaces included, so phrase pairs must match
        // on full length
        let words = [
            "debit card", "bad credit", "the eyes", "they see", "night",
            "thing", "below", "elbow", "lonely",
        ];
        let groups = group_anagrams(Some(&words)).unwrap();

        assert_eq!(groups.len(), 4);
        assert!(groups.contains(&vec!["bad credit".to_string(), "debit card".to_string()]));
        assert!(groups.contains(&vec!["the eyes".to_string(), "they see".to_string()]));
        assert!(groups.contains(&vec!["night".to_string(), "thing".to_string()]));
        assert!(groups.contains(&vec!["below".to_string(), "elbow".to_string()]));
    }
}

mod error_signals {
    use super::*;

    #[test]
    fn test_type_errors_are_errors_not_false_results() {
        setup();
        // a false/null result and a raised error are two different signals
        assert_eq!(are_anagrams_value(&json!(null), &json!("abc")), Ok(false));
        assert!(are_anagrams_value(&json!(123), &json!("abc")).is_err());

        assert!(letter_frequency_value(&json!(123)).is_err());
        assert!(group_anagrams_value(&json!(["abc", 123])).is_err());
    }

    #[test]
    fn test_error_display_is_detailed() {
        setup();
        let err = group_anagrams_value(&json!("not a list")).unwrap_err();
        assert_eq!(err, ArgumentError::NotAnArray { found: "a string" });

        let detailed = err.display_detailed();
        assert!(detailed.contains("argument must be an array of strings"));
        assert!(detailed.contains(err.code()));
    }
}
