//! Version tags: the keyed-hash prefix that replaces a checksum.
//!
//! A phrase's tag is `HMAC-SHA512("Seed version", phrase)` in lowercase hex.
//! A seed carries version `V` when its tag starts with `V`. The tag depends
//! on the phrase text alone, not on which language the words came from.

use core::fmt;
use core::str::FromStr;

use crate::hash::hmac_sha512;
use crate::stretch::normalize;
use crate::{Error, Result};

/// HMAC key shared with the legacy seed format.
pub const SEED_VERSION_KEY: &[u8] = b"Seed version";

/// Longest accepted version string.
pub const MAX_VERSION_LEN: usize = 3;

/// Tag length used when none is requested.
pub const DEFAULT_TAG_LEN: usize = 2;

/// Full length of a tag in hex characters.
pub const FULL_TAG_LEN: usize = 128;

/// Target version a seed must carry: 1 to 3 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Version(String);

impl Version {
    /// Parse a version, lowercasing it first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVersion`] if the input is empty, longer than
    /// three characters or not hexadecimal.
    pub fn new(version: &str) -> Result<Self> {
        let lowered = version.trim().to_lowercase();
        if lowered.is_empty()
            || lowered.len() > MAX_VERSION_LEN
            || !lowered.chars().all(|c| c.is_ascii_hexdigit())
        {
            return Err(Error::InvalidVersion(version.into()));
        }
        Ok(Self(lowered))
    }

    /// The version as a hex string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of hex characters, which is also the compared tag length.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false, a version holds at least one character.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether `phrase`, taken verbatim, carries this version.
    #[must_use]
    pub fn matches(&self, phrase: &str) -> bool {
        version_tag(phrase, self.len()).is_ok_and(|tag| tag == self.0)
    }
}

impl Default for Version {
    fn default() -> Self {
        Self("01".into())
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Version {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

/// First `len` hex characters of the phrase's tag, without normalization.
///
/// `len` is clamped to `1..=128`.
pub fn version_tag(phrase: &str, len: usize) -> Result<String> {
    let len = len.clamp(1, FULL_TAG_LEN);
    let mac = hmac_sha512(SEED_VERSION_KEY, phrase.as_bytes())?;
    let mut tag = hex::encode(&mac[..len.div_ceil(2)]);
    tag.truncate(len);
    Ok(tag)
}

/// Version tag of a phrase after normalization, two characters by default.
pub fn version_of(phrase: &str, len: Option<usize>) -> Result<String> {
    version_tag(&normalize(phrase), len.unwrap_or(DEFAULT_TAG_LEN))
}
