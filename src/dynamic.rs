//! `dynamic` — the three anagram operations over untyped JSON values.
//!
//! The typed core (`LetterCounts::of`, [`are_anagrams`], [`group_anagrams`])
//! makes "wrong argument type" unrepresentable, so its functions are
//! infallible. Callers holding *untyped* input — a deserialized
//! `serde_json::Value` from a config file, an HTTP body, FFI glue — still
//! need those checks at runtime. This module is that boundary: the same three
//! operations, each returning `Result<_, ArgumentError>` with the runtime
//! argument checks the typed signatures collapse away.
//!
//! Semantics worth calling out:
//! - [`are_anagrams_value`] answers `Ok(false)` for *falsy* arguments (JSON
//!   `null`, `""`, `false`, numeric 0) before any type checking, so
//!   `are_anagrams_value(&json!(0), &json!("abc"))` is `Ok(false)` while
//!   `are_anagrams_value(&json!(123), &json!("abc"))` is an error.
//! - [`group_anagrams_value`] maps JSON `null` to JSON `null`, never to `[]`;
//!   the two are different answers.

use serde_json::Value;

use crate::anagram::are_anagrams;
use crate::errors::ArgumentError;
use crate::grouping::group_anagrams;
use crate::letter_counts::LetterCounts;

/// Name of a JSON value's type, for error messages.
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// JSON analogue of falsiness: null, false, zero, and the empty string.
/// (Arrays and objects are always truthy, even when empty.)
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn as_word(value: &Value) -> Result<&str, ArgumentError> {
    value.as_str().ok_or(ArgumentError::NotAString { found: type_name(value) })
}

/// Compute the letter-frequency map of a single untyped word.
///
/// # Errors
///
/// Returns [`ArgumentError::NotAString`] if `word` is not a JSON string.
pub fn letter_frequency_value(word: &Value) -> Result<LetterCounts, ArgumentError> {
    Ok(LetterCounts::of(as_word(word)?))
}

/// Decide whether two untyped values are anagrams.
///
/// # Errors
///
/// Returns [`ArgumentError::NotAString`] if either argument is truthy but not
/// a JSON string. Falsy arguments short-circuit to `Ok(false)` first.
pub fn are_anagrams_value(first: &Value, second: &Value) -> Result<bool, ArgumentError> {
    // Falsy inputs are a defined "no", not an argument error; this takes
    // priority over the type check.
    if is_falsy(first) || is_falsy(second) {
        return Ok(false);
    }

    Ok(are_anagrams(Some(as_word(first)?), Some(as_word(second)?)))
}

/// Group an untyped word list into clusters of mutual anagrams.
///
/// JSON `null` input yields JSON `null` output (not an empty array). Any
/// other input must be an array of strings; the result is an array of arrays
/// of strings, in the order described by [`group_anagrams`].
///
/// # Errors
///
/// Returns [`ArgumentError::NotAnArray`] if `words` is neither `null` nor an
/// array, or if any element of the array is not a string.
pub fn group_anagrams_value(words: &Value) -> Result<Value, ArgumentError> {
    if words.is_null() {
        return Ok(Value::Null);
    }

    let Some(items) = words.as_array() else {
        return Err(ArgumentError::NotAnArray { found: type_name(words) });
    };
    let word_refs = items
        .iter()
        .map(|item| {
            item.as_str()
                .ok_or(ArgumentError::NotAnArray { found: type_name(item) })
        })
        .collect::<Result<Vec<&str>, _>>()?;

    let groups = group_anagrams(Some(&word_refs)).unwrap_or_default();
    let encoded = groups
        .into_iter()
        .map(|group| Value::Array(group.into_iter().map(Value::String).collect()))
        .collect();

    Ok(Value::Array(encoded))
}
