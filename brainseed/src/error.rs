//! Error types for brain seed generation and validation.

use core::fmt;

/// Word count below which a version mismatch is reported as a likely
/// truncated seed.
pub(crate) const SHORT_SEED_WORDS: usize = 11;

/// Errors that can occur while generating, encoding or checking a brain seed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// Entropy was supplied in a form that is not text, bytes or 32-bit words.
    InvalidEntropyType(String),
    /// Generation was requested without entropy and without a collector.
    MissingEntropySource,
    /// Entropy collection finished without delivering any bytes.
    EntropyCollectionFailed,
    /// Requested bit strength is zero or larger than the combiner can produce.
    InvalidStrength(u32),
    /// Version string is empty, too long or not hexadecimal.
    InvalidVersion(String),
    /// Language key does not name a supported word list.
    UnknownLanguage(String),
    /// Phrase is empty after normalization.
    EmptyPhrase,
    /// Phrase contains a word that is not in the word list.
    UnknownWord(String),
    /// Version tag of the phrase does not match the expected version.
    VersionMismatch {
        /// Version the phrase was expected to carry.
        expected: String,
        /// Version tag actually computed from the phrase.
        actual: String,
        /// Number of words in the checked phrase.
        words: usize,
    },
    /// The value zero has no word encoding.
    ZeroSeed,
    /// The nonce search ran out of nonces without finding the version.
    MiningExhausted {
        /// Last nonce tried.
        nonce: u64,
    },
    /// Keyed hash or key stretching failed.
    CryptoError,
    /// Abbreviated word is too short for unambiguous expansion.
    PrefixTooShort {
        /// The prefix that was too short.
        prefix: String,
        /// Minimum required prefix length.
        min_len: usize,
    },
    /// Abbreviated word does not match any word in the word list.
    UnknownPrefix(String),
    /// Abbreviated word matches several words in the word list.
    AmbiguousPrefix {
        /// The ambiguous prefix.
        prefix: String,
        /// Words that match the prefix.
        candidates: Vec<String>,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEntropyType(input) => write!(
                f,
                "invalid entropy \"{input}\", expected text:, hex: or u32: input"
            ),
            Self::MissingEntropySource => {
                write!(f, "no entropy supplied and no entropy collector given")
            }
            Self::EntropyCollectionFailed => write!(f, "entropy collection failed"),
            Self::InvalidStrength(bits) => {
                write!(f, "invalid bit strength {bits}, must be between 1 and 256")
            }
            Self::InvalidVersion(v) => {
                write!(f, "invalid version \"{v}\", expected 1 to 3 hex characters")
            }
            Self::UnknownLanguage(lang) => write!(f, "unknown language \"{lang}\""),
            Self::EmptyPhrase => write!(f, "seed phrase is empty"),
            Self::UnknownWord(word) => write!(f, "\"{word}\" is not in the word list"),
            Self::VersionMismatch {
                expected,
                actual,
                words,
            } => {
                write!(f, "version mismatch, expected {expected} but found {actual}")?;
                if *words < SHORT_SEED_WORDS {
                    write!(f, " (seed is too short ({words} words), is it complete?)")?;
                }
                Ok(())
            }
            Self::ZeroSeed => write!(f, "cannot encode a zero seed value"),
            Self::MiningExhausted { nonce } => {
                write!(f, "version search exhausted after nonce {nonce}")
            }
            Self::CryptoError => write!(f, "cryptographic operation failed"),
            Self::PrefixTooShort { prefix, min_len } => {
                write!(f, "prefix \"{prefix}\" is too short (minimum {min_len} characters)")
            }
            Self::UnknownPrefix(prefix) => {
                write!(f, "prefix \"{prefix}\" does not match any word")
            }
            Self::AmbiguousPrefix { prefix, candidates } => {
                write!(f, "prefix \"{prefix}\" is ambiguous, matches: {}", candidates.join(", "))
            }
        }
    }
}

impl std::error::Error for Error {}

/// A convenient Result type alias for brainseed operations.
pub type Result<T> = core::result::Result<T, Error>;
