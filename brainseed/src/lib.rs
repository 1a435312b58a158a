//! # Brainseed - Versioned Brain Seed Mnemonics
//!
//! Generates and validates human-memorable seed phrases in the legacy
//! "brain seed" format. Instead of a checksum, every seed carries a short
//! version tag: the prefix of `HMAC-SHA512("Seed version", phrase)`.
//! Generation searches nonces until the phrase's tag matches the target
//! version, so any bit strength works, not only multiples of 32.
//!
//! ## Features
//!
//! - **Any strength**: 1 to 256 bits, 132 by default
//! - **Ten languages**: every BIP-39 word list
//! - **BIP-39 stretching**: the same 64-byte key as a BIP-39 wallet
//! - **Async entropy**: wait on a collector when no entropy is supplied
//!
//! ## Example
//!
//! ```
//! use brainseed::{GenerateConfig, Language, Version};
//!
//! let config = GenerateConfig::new().with_entropy("dice: 3 6 1 4 4 2");
//! let seed = brainseed::generate(&config)?;
//!
//! let validity = brainseed::validate(seed.phrase(), &Version::default(), Language::English);
//! assert!(validity.valid);
//!
//! let key = brainseed::stretch(seed.phrase(), Some("extra words"));
//! assert_eq!(key.len(), 64);
//! # Ok::<(), brainseed::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::doc_markdown,
    clippy::missing_const_for_fn,
    clippy::cast_possible_truncation,
    clippy::uninlined_format_args,
    clippy::return_self_not_must_use,
    clippy::option_if_let_else,
    clippy::needless_pass_by_value
)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod collector;
pub mod config;
pub mod entropy;
pub mod error;
pub mod hash;
pub mod miner;
pub mod seed;
pub mod stretch;
pub mod validate;
pub mod version;
pub mod wordlist;

mod generator;
#[cfg(test)]
mod testing;

pub use collector::{EntropyCollector, EntropyRequest, EntropySender, JitterCollector};
pub use config::GenerateConfig;
pub use entropy::Entropy;
pub use error::{Error, Result};
#[cfg(feature = "rand")]
pub use generator::generate;
pub use generator::{generate_with_collector, generate_with_rng};
pub use miner::VersionMiner;
pub use seed::BrainSeed;
pub use stretch::{normalize, stretch};
pub use validate::{validate, SeedValidator, Validity};
pub use version::{version_of, Version};
pub use wordlist::Language;
