//! The brain seed value produced by generation.

use core::fmt;

use zeroize::Zeroizing;

use crate::stretch::stretch;
use crate::validate::{SeedValidator, Validity};
use crate::version::Version;
use crate::wordlist::Language;

/// A generated brain seed.
///
/// Holds the phrase together with the language and version it was mined
/// for. The phrase is zeroized on drop and redacted from `Debug` output.
#[derive(Clone)]
pub struct BrainSeed {
    phrase: Zeroizing<String>,
    language: Language,
    version: Version,
    nonce: u64,
}

impl BrainSeed {
    pub(crate) const fn new(
        phrase: Zeroizing<String>,
        language: Language,
        version: Version,
        nonce: u64,
    ) -> Self {
        Self {
            phrase,
            language,
            version,
            nonce,
        }
    }

    /// Get the seed phrase.
    ///
    /// **Security Warning**: the phrase alone reconstructs every key
    /// derived from it.
    #[inline]
    #[must_use]
    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    /// Language of the words.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Version the seed carries.
    #[inline]
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Nonce the search settled on, the attempts spent finding the version.
    #[inline]
    #[must_use]
    pub const fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Number of words in the phrase.
    #[inline]
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.phrase.split(' ').count()
    }

    /// Stretch the phrase into 64 bytes of key material.
    #[must_use]
    pub fn to_seed(&self, passphrase: Option<&str>) -> Zeroizing<[u8; 64]> {
        stretch(&self.phrase, passphrase)
    }

    /// Re-check the phrase against its own language and version.
    #[must_use]
    pub fn validity(&self) -> Validity {
        SeedValidator::new(self.language, self.version.clone()).check(&self.phrase)
    }
}

impl fmt::Debug for BrainSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BrainSeed")
            .field("phrase", &"[REDACTED]")
            .field("language", &self.language)
            .field("version", &self.version)
            .field("nonce", &self.nonce)
            .finish()
    }
}
