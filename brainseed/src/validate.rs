//! Seed validation.
//!
//! Validation answers "is this a seed of version V in language L?" without
//! ever failing for bad user input: every problem is reported inside a
//! [`Validity`] value.

use crate::stretch::normalize;
use crate::version::{version_tag, Version};
use crate::wordlist::Language;
use crate::{Error, Result};

/// Outcome of checking a phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validity {
    /// Whether the phrase passed every check.
    pub valid: bool,
    /// Why the phrase was rejected.
    pub error: Option<Error>,
}

impl Validity {
    const fn ok() -> Self {
        Self {
            valid: true,
            error: None,
        }
    }

    const fn invalid(error: Error) -> Self {
        Self {
            valid: false,
            error: Some(error),
        }
    }

    /// Whether the phrase passed every check.
    #[inline]
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Human-readable reason for rejection.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}

impl From<Result<()>> for Validity {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::ok(),
            Err(err) => Self::invalid(err),
        }
    }
}

/// Checks phrases against one language and expected version.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SeedValidator {
    language: Language,
    version: Version,
}

impl SeedValidator {
    /// Create a validator.
    #[must_use]
    pub const fn new(language: Language, version: Version) -> Self {
        Self { language, version }
    }

    /// Check a phrase, folding every failure into the result.
    pub fn check(&self, phrase: &str) -> Validity {
        let validity = Validity::from(self.verify(phrase));
        if let Some(err) = &validity.error {
            log::debug!("seed rejected: {err}");
        }
        validity
    }

    /// Check a phrase, returning the first failure as an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPhrase`], [`Error::UnknownWord`] or
    /// [`Error::VersionMismatch`] for the first failed check.
    pub fn verify(&self, phrase: &str) -> Result<()> {
        let normalized = normalize(phrase);
        if normalized.is_empty() {
            return Err(Error::EmptyPhrase);
        }

        let mut words = 0;
        for word in normalized.split(' ') {
            if !self.language.contains(word) {
                return Err(Error::UnknownWord(word.into()));
            }
            words += 1;
        }

        let actual = version_tag(&normalized, self.version.len())?;
        if actual != self.version.as_str() {
            return Err(Error::VersionMismatch {
                expected: self.version.to_string(),
                actual,
                words,
            });
        }
        Ok(())
    }
}

/// Check that `phrase` is a `language` seed carrying `version`.
pub fn validate(phrase: &str, version: &Version, language: Language) -> Validity {
    SeedValidator::new(language, version.clone()).check(phrase)
}
