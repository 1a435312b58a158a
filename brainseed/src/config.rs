//! Generation settings.

use crate::entropy::{check_strength, Entropy};
use crate::version::Version;
use crate::wordlist::Language;
use crate::Result;

/// Bit strength used when none is given.
pub const DEFAULT_STRENGTH: u32 = 132;

/// Settings for one generation call.
///
/// The default is version `"01"`, 132 bits, English, no entropy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Version the generated seed must carry.
    pub version: Version,
    /// Significant bits of the starting value.
    pub bits: u32,
    /// Word list to encode with.
    pub language: Language,
    /// Caller entropy, mixed with fresh randomness.
    pub entropy: Option<Entropy>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            version: Version::default(),
            bits: DEFAULT_STRENGTH,
            language: Language::default(),
            entropy: None,
        }
    }
}

impl GenerateConfig {
    /// Default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the target version.
    #[must_use]
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set the bit strength.
    #[must_use]
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits;
        self
    }

    /// Set the language.
    #[must_use]
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Supply caller entropy.
    #[must_use]
    pub fn with_entropy(mut self, entropy: impl Into<Entropy>) -> Self {
        self.entropy = Some(entropy.into());
        self
    }

    /// Check the settings before any work is done.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidStrength`](crate::Error::InvalidStrength) for
    /// an unusable bit strength.
    pub fn validate(&self) -> Result<()> {
        check_strength(self.bits)
    }
}
