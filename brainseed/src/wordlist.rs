//! Word lists used as the radix alphabet for brain seeds.
//!
//! The lists themselves come from the `bip39` crate. Every list holds 2048
//! unique words stored in Unicode NFKD form, so phrases must be normalized
//! with [`normalize`](crate::normalize) before lookup.
//!
//! # Prefix Expansion
//!
//! Users often write only the first few letters of each word. [`expand_in`]
//! resolves such abbreviations back to full words when the prefix is long
//! enough and matches exactly one word.
//!
//! ```
//! use brainseed::wordlist::{self, Language};
//!
//! let expanded = wordlist::expand_in(Language::English, "powe juic gest").unwrap();
//! assert_eq!(expanded, "power juice gesture");
//! ```

use core::fmt;
use core::str::FromStr;

use crate::stretch::normalize;
use crate::{Error, Result};

/// Minimum prefix length, in characters, accepted for word expansion.
const MIN_PREFIX_LEN: usize = 4;

/// A supported seed language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Language {
    /// English (the legacy default).
    #[default]
    English,
    /// Simplified Chinese.
    ChineseSimplified,
    /// Traditional Chinese.
    ChineseTraditional,
    /// Czech.
    Czech,
    /// French.
    French,
    /// Italian.
    Italian,
    /// Japanese.
    Japanese,
    /// Korean.
    Korean,
    /// Portuguese.
    Portuguese,
    /// Spanish.
    Spanish,
}

impl Language {
    /// All supported languages.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::English,
            Self::ChineseSimplified,
            Self::ChineseTraditional,
            Self::Czech,
            Self::French,
            Self::Italian,
            Self::Japanese,
            Self::Korean,
            Self::Portuguese,
            Self::Spanish,
        ]
    }

    /// Key used to select this language in configuration and on the CLI.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::English => "english",
            Self::ChineseSimplified => "chinese_simplified",
            Self::ChineseTraditional => "chinese_traditional",
            Self::Czech => "czech",
            Self::French => "french",
            Self::Italian => "italian",
            Self::Japanese => "japanese",
            Self::Korean => "korean",
            Self::Portuguese => "portuguese",
            Self::Spanish => "spanish",
        }
    }

    const fn bip39(self) -> bip39::Language {
        match self {
            Self::English => bip39::Language::English,
            Self::ChineseSimplified => bip39::Language::SimplifiedChinese,
            Self::ChineseTraditional => bip39::Language::TraditionalChinese,
            Self::Czech => bip39::Language::Czech,
            Self::French => bip39::Language::French,
            Self::Italian => bip39::Language::Italian,
            Self::Japanese => bip39::Language::Japanese,
            Self::Korean => bip39::Language::Korean,
            Self::Portuguese => bip39::Language::Portuguese,
            Self::Spanish => bip39::Language::Spanish,
        }
    }

    /// The ordered word list for this language.
    #[inline]
    #[must_use]
    pub fn word_list(self) -> &'static [&'static str; 2048] {
        self.bip39().word_list()
    }

    /// Number of words in the list, the radix of the word encoding.
    #[inline]
    #[must_use]
    pub fn radix(self) -> usize {
        self.word_list().len()
    }

    /// Position of an NFKD-normalized word in the list.
    #[inline]
    #[must_use]
    pub fn find_word(self, word: &str) -> Option<usize> {
        self.bip39().find_word(word).map(usize::from)
    }

    /// Whether an NFKD-normalized word belongs to the list.
    #[inline]
    #[must_use]
    pub fn contains(self, word: &str) -> bool {
        self.find_word(word).is_some()
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "english" | "en" => Ok(Self::English),
            "chinese_simplified" | "zh_cn" | "zh_hans" => Ok(Self::ChineseSimplified),
            "chinese_traditional" | "zh_tw" | "zh_hant" => Ok(Self::ChineseTraditional),
            "czech" | "cs" => Ok(Self::Czech),
            "french" | "fr" => Ok(Self::French),
            "italian" | "it" => Ok(Self::Italian),
            "japanese" | "ja" => Ok(Self::Japanese),
            "korean" | "ko" => Ok(Self::Korean),
            "portuguese" | "pt" => Ok(Self::Portuguese),
            "spanish" | "es" => Ok(Self::Spanish),
            _ => Err(Error::UnknownLanguage(s.into())),
        }
    }
}

/// Return the first word of `phrase` that is not in the language's list.
///
/// The phrase is normalized before lookup.
pub fn first_unknown_word(phrase: &str, language: Language) -> Option<String> {
    normalize(phrase)
        .split(' ')
        .filter(|w| !w.is_empty())
        .find(|w| !language.contains(w))
        .map(String::from)
}

/// Check that every word of `phrase` belongs to the language's list.
pub fn words_valid(phrase: &str, language: Language) -> bool {
    first_unknown_word(phrase, language).is_none()
}

/// Expand abbreviated words in an English phrase.
///
/// See [`expand_in`] for details.
pub fn expand(phrase: &str) -> Result<String> {
    expand_in(Language::English, phrase)
}

/// Expand abbreviated words to their full form in the given language.
///
/// Each whitespace-separated token is matched against the word list:
/// - If the token is an exact match, it is kept as-is.
/// - If the token is a prefix (>= 4 characters) that uniquely identifies
///   a single word, it is expanded to that word.
/// - Otherwise, an error is returned.
///
/// # Errors
///
/// Returns [`Error::UnknownPrefix`] if a token does not match any word.
/// Returns [`Error::AmbiguousPrefix`] if a token matches multiple words.
/// Returns [`Error::PrefixTooShort`] if a non-exact token has fewer than 4 characters.
pub fn expand_in(language: Language, phrase: &str) -> Result<String> {
    let normalized = normalize(phrase);
    let word_list = language.word_list();

    let mut result = String::with_capacity(normalized.len());
    for (i, token) in normalized.split(' ').filter(|t| !t.is_empty()).enumerate() {
        let word = resolve_token(language, word_list, token)?;
        if i > 0 {
            result.push(' ');
        }
        result.push_str(word);
    }
    Ok(result)
}

/// Resolve a single token to a full word.
fn resolve_token(
    language: Language,
    word_list: &'static [&'static str; 2048],
    token: &str,
) -> Result<&'static str> {
    if let Some(index) = language.find_word(token) {
        return Ok(word_list[index]);
    }

    if token.chars().count() < MIN_PREFIX_LEN {
        return Err(Error::PrefixTooShort {
            prefix: token.into(),
            min_len: MIN_PREFIX_LEN,
        });
    }

    let matches: Vec<&'static str> = word_list
        .iter()
        .copied()
        .filter(|word| word.starts_with(token))
        .collect();

    match matches.as_slice() {
        [] => Err(Error::UnknownPrefix(token.into())),
        [word] => Ok(*word),
        _ => Err(Error::AmbiguousPrefix {
            prefix: token.into(),
            candidates: matches.iter().map(|w| String::from(*w)).collect(),
        }),
    }
}
