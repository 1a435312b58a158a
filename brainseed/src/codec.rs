//! Radix encoding between seed integers and word sequences.
//!
//! A seed integer is written in base `B` (the word list size) with the
//! least significant digit first:
//!
//! ```text
//! 2049 = 1 + 1 * 2048  ->  "ability ability"
//! 2048 = 0 + 1 * 2048  ->  "abandon ability"
//! ```
//!
//! The digit order is fixed by existing seeds and must not change.

use num_bigint::BigUint;
use num_traits::Zero;
use zeroize::Zeroizing;

use crate::stretch::normalize;
use crate::wordlist::Language;
use crate::{Error, Result};

/// Encode a non-zero integer as words of the given language.
///
/// Produces the minimal number of words for the value.
///
/// # Errors
///
/// Returns [`Error::ZeroSeed`] for zero, which has no encoding.
pub fn encode(value: &BigUint, language: Language) -> Result<Vec<&'static str>> {
    if value.is_zero() {
        return Err(Error::ZeroSeed);
    }

    let list = language.word_list();
    let radix = BigUint::from(list.len());
    let mut words = Vec::with_capacity(value.bits().div_ceil(11) as usize);
    let mut rest = value.clone();

    while !rest.is_zero() {
        // The remainder is below the radix, so it fits in the first digit.
        let digit = (&rest % &radix).iter_u64_digits().next().unwrap_or(0) as usize;
        words.push(list[digit]);
        rest /= &radix;
    }

    Ok(words)
}

/// Encode a non-zero integer as a space-joined phrase.
///
/// # Errors
///
/// Returns [`Error::ZeroSeed`] for zero.
pub fn encode_phrase(value: &BigUint, language: Language) -> Result<Zeroizing<String>> {
    Ok(Zeroizing::new(encode(value, language)?.join(" ")))
}

/// Decode a phrase back into its seed integer.
///
/// # Errors
///
/// Returns [`Error::EmptyPhrase`] for an empty phrase and
/// [`Error::UnknownWord`] for a word outside the language's list.
pub fn decode(phrase: &str, language: Language) -> Result<BigUint> {
    let normalized = normalize(phrase);
    if normalized.is_empty() {
        return Err(Error::EmptyPhrase);
    }

    let radix = BigUint::from(language.radix());
    let mut value = BigUint::zero();
    for word in normalized.split(' ').rev() {
        let digit = language
            .find_word(word)
            .ok_or_else(|| Error::UnknownWord(word.into()))?;
        value = value * &radix + BigUint::from(digit);
    }
    Ok(value)
}
