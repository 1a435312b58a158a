//! Nonce search for a phrase carrying the target version.
//!
//! Starting from the trimmed entropy value, the miner tries
//! `value + 1`, `value + 2`, ... until the encoded phrase's tag starts with
//! the target version. Tags behave like uniform random hex, so a version of
//! `k` characters takes about `16^k` attempts (256 for the default `"01"`).
//! The work spent is a small proof-of-search baked into the seed.

use num_bigint::BigUint;
use zeroize::Zeroizing;

use crate::codec::encode_phrase;
use crate::version::Version;
use crate::wordlist::Language;
use crate::{Error, Result};

/// Largest nonce tried by default (2^53 - 1).
///
/// Reaching it is not expected in practice; it keeps the search total.
pub const MAX_NONCE: u64 = (1 << 53) - 1;

/// Result of a successful search.
#[derive(Debug)]
pub struct Mined {
    /// Phrase whose tag matches the version.
    pub phrase: Zeroizing<String>,
    /// Nonce added to the starting value.
    pub nonce: u64,
}

/// Searches for the first nonce whose phrase carries a version.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionMiner {
    language: Language,
    version: Version,
    max_nonce: u64,
}

impl VersionMiner {
    /// Create a miner for the given language and target version.
    #[must_use]
    pub const fn new(language: Language, version: Version) -> Self {
        Self {
            language,
            version,
            max_nonce: MAX_NONCE,
        }
    }

    /// Lower the nonce limit.
    #[must_use]
    pub fn with_max_nonce(mut self, max_nonce: u64) -> Self {
        self.max_nonce = max_nonce;
        self
    }

    /// Language the phrases are encoded in.
    #[inline]
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Target version.
    #[inline]
    #[must_use]
    pub const fn version(&self) -> &Version {
        &self.version
    }

    /// Find the smallest `nonce >= 1` such that `encode(start + nonce)`
    /// carries the target version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MiningExhausted`] when no nonce up to the limit
    /// matches. This is an internal failure, not a user error.
    pub fn mine(&self, start: &BigUint) -> Result<Mined> {
        let mut candidate = start.clone();

        for nonce in 1..=self.max_nonce {
            candidate += 1u32;
            let phrase = encode_phrase(&candidate, self.language)?;

            if self.version.matches(&phrase) {
                log::debug!(
                    "found version {} after {nonce} attempts ({} words)",
                    self.version,
                    phrase.split(' ').count()
                );
                return Ok(Mined { phrase, nonce });
            }
            log::trace!("nonce {nonce} rejected");
        }

        Err(Error::MiningExhausted {
            nonce: self.max_nonce,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::version::version_tag;

    fn start() -> BigUint {
        BigUint::parse_bytes(b"1175154635650215791186718261289034855689", 10).unwrap()
    }

    #[test]
    fn mines_default_version() {
        let miner = VersionMiner::new(Language::English, Version::default());
        let mined = miner.mine(&start()).unwrap();
        assert_eq!(mined.nonce, 65);
        assert_eq!(
            mined.phrase.as_str(),
            "power juice gesture elegant stairs napkin health merit exchange cricket area dance"
        );
    }

    #[test]
    fn mines_one_and_three_char_versions() {
        let one = VersionMiner::new(Language::English, Version::new("1").unwrap())
            .mine(&start())
            .unwrap();
        assert_eq!(one.nonce, 17);
        assert!(one.phrase.starts_with("person juice"));

        let three = VersionMiner::new(Language::English, Version::new("abc").unwrap())
            .mine(&start())
            .unwrap();
        assert_eq!(three.nonce, 3401);
        assert_eq!(version_tag(&three.phrase, 3).unwrap(), "abc");
    }

    #[test]
    fn first_match_is_returned() {
        let miner = VersionMiner::new(Language::English, Version::default());
        let mined = miner.mine(&start()).unwrap();
        let mut candidate = start();
        for _ in 1..mined.nonce {
            candidate += 1u32;
            let phrase = encode_phrase(&candidate, Language::English).unwrap();
            assert!(!miner.version().matches(&phrase));
        }
    }

    #[test]
    fn mines_from_zero() {
        let mined = VersionMiner::new(Language::English, Version::new("0").unwrap())
            .mine(&BigUint::from(0u32))
            .unwrap();
        assert_eq!(mined.nonce, 43);
        assert_eq!(mined.phrase.as_str(), "air");
        assert_eq!(version_tag(&mined.phrase, 1).unwrap(), "0");
    }

    #[test]
    fn exhaustion_is_reported() {
        let miner = VersionMiner::new(Language::English, Version::default()).with_max_nonce(0);
        assert_eq!(
            miner.mine(&start()).unwrap_err(),
            Error::MiningExhausted { nonce: 0 }
        );

        // The default version first matches at nonce 65.
        let miner = VersionMiner::new(Language::English, Version::default()).with_max_nonce(64);
        assert_eq!(
            miner.mine(&start()).unwrap_err(),
            Error::MiningExhausted { nonce: 64 }
        );
    }
}
