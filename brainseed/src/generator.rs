//! Brain seed generation.
//!
//! # Process
//!
//! 1. Hash caller entropy together with `ceil(bits / 8)` random bytes.
//! 2. Keep the top `bits` bits of the digest as the starting value.
//! 3. Search nonces until the encoded phrase carries the target version.

use rand_core::{CryptoRng, RngCore};

use crate::collector::EntropyCollector;
use crate::config::GenerateConfig;
use crate::entropy::{combine, trim, Entropy};
use crate::miner::VersionMiner;
use crate::seed::BrainSeed;
use crate::{Error, Result};

/// Generate a seed from the configured entropy and the system RNG.
///
/// # Errors
///
/// Returns [`Error::MissingEntropySource`] when `config.entropy` is unset;
/// use [`generate_with_collector`] to gather entropy instead.
#[cfg(feature = "rand")]
pub fn generate(config: &GenerateConfig) -> Result<BrainSeed> {
    generate_with_rng(config, &mut rand_core::OsRng)
}

/// Generate a seed using the given random source.
///
/// # Errors
///
/// Returns [`Error::InvalidStrength`] for an unusable bit strength and
/// [`Error::MissingEntropySource`] when `config.entropy` is unset or empty.
pub fn generate_with_rng<R: RngCore + CryptoRng>(
    config: &GenerateConfig,
    rng: &mut R,
) -> Result<BrainSeed> {
    config.validate()?;
    let entropy = supplied_entropy(config).ok_or(Error::MissingEntropySource)?;
    mine_seed(config, entropy, rng)
}

/// Generate a seed, waiting on `collector` when the config has no entropy.
///
/// Configured entropy takes precedence and the collector is not started.
/// Empty configured entropy counts as none.
///
/// # Errors
///
/// Returns [`Error::EntropyCollectionFailed`] if the collector stops
/// without delivering, plus every error of [`generate_with_rng`].
pub async fn generate_with_collector<C, R>(
    config: &GenerateConfig,
    collector: &C,
    rng: &mut R,
) -> Result<BrainSeed>
where
    C: EntropyCollector + ?Sized,
    R: RngCore + CryptoRng,
{
    config.validate()?;
    if let Some(entropy) = supplied_entropy(config) {
        return mine_seed(config, entropy, rng);
    }

    let collected = collector.collect(config.bits).await.map_err(|err| {
        log::warn!("entropy collection failed: {err}");
        err
    })?;
    let entropy = Entropy::Bytes(collected.to_vec());
    mine_seed(config, &entropy, rng)
}

/// Caller entropy that actually carries bytes.
fn supplied_entropy(config: &GenerateConfig) -> Option<&Entropy> {
    config.entropy.as_ref().filter(|entropy| !entropy.is_empty())
}

fn mine_seed<R: RngCore + CryptoRng>(
    config: &GenerateConfig,
    entropy: &Entropy,
    rng: &mut R,
) -> Result<BrainSeed> {
    let seed = combine(entropy, config.bits, rng)?;
    let start = trim(&seed, config.bits)?;

    let miner = VersionMiner::new(config.language, config.version.clone());
    let mined = miner.mine(&start)?;

    Ok(BrainSeed::new(
        mined.phrase,
        config.language,
        config.version.clone(),
        mined.nonce,
    ))
}
