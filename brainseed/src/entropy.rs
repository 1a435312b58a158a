//! Entropy combination and bit-exact trimming.
//!
//! Caller entropy is never trusted on its own. It is hashed together with a
//! fresh buffer from a secure random source, and the digest is cut down to
//! exactly the requested number of bits:
//!
//! ```text
//! seed  = SHA-256(entropy || random[n])[..n]      n = ceil(bits / 8)
//! value = big_endian(seed) >> (8n - bits)
//! ```

use core::fmt;
use core::str::FromStr;

use num_bigint::BigUint;
use rand_core::{CryptoRng, RngCore};
use zeroize::{Zeroize, Zeroizing};

use crate::hash::sha256;
use crate::{Error, Result};

/// Largest strength the combiner can serve: one SHA-256 digest.
pub const MAX_STRENGTH: u32 = 256;

/// Caller-supplied entropy.
#[derive(Clone, PartialEq, Eq)]
pub enum Entropy {
    /// Free-form text, hashed as UTF-8.
    Text(String),
    /// Raw bytes, hashed as-is.
    Bytes(Vec<u8>),
    /// 32-bit words, hashed as their little-endian byte representation.
    Words(Vec<u32>),
}

impl Entropy {
    /// Byte representation fed into the combiner.
    ///
    /// Words keep their full 32-bit value: `[256]` becomes `00 01 00 00`.
    pub fn to_bytes(&self) -> Zeroizing<Vec<u8>> {
        let bytes = match self {
            Self::Text(text) => text.as_bytes().to_vec(),
            Self::Bytes(bytes) => bytes.clone(),
            Self::Words(words) => words.iter().flat_map(|w| w.to_le_bytes()).collect(),
        };
        Zeroizing::new(bytes)
    }

    /// Whether the entropy carries no bytes at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Bytes(bytes) => bytes.is_empty(),
            Self::Words(words) => words.is_empty(),
        }
    }
}

impl Drop for Entropy {
    fn drop(&mut self) {
        match self {
            Self::Text(text) => text.zeroize(),
            Self::Bytes(bytes) => bytes.zeroize(),
            Self::Words(words) => words.zeroize(),
        }
    }
}

impl fmt::Debug for Entropy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Text(_) => "Text",
            Self::Bytes(_) => "Bytes",
            Self::Words(_) => "Words",
        };
        write!(f, "Entropy::{kind}[REDACTED]")
    }
}

impl From<&str> for Entropy {
    fn from(text: &str) -> Self {
        Self::Text(text.into())
    }
}

impl From<String> for Entropy {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&[u8]> for Entropy {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for Entropy {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<Vec<u32>> for Entropy {
    fn from(words: Vec<u32>) -> Self {
        Self::Words(words)
    }
}

/// Parses tagged entropy input: `text:<utf8>`, `hex:<bytes>` or `u32:<n,n,...>`.
///
/// Untagged input such as a bare number is rejected rather than guessed at.
impl FromStr for Entropy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidEntropyType(s.into());
        let (tag, payload) = s.split_once(':').ok_or_else(invalid)?;

        match tag.trim().to_lowercase().as_str() {
            "text" | "str" => Ok(Self::Text(payload.into())),
            "hex" | "bytes" => {
                let payload = payload.trim();
                let payload = payload.strip_prefix("0x").unwrap_or(payload);
                hex::decode(payload).map(Self::Bytes).map_err(|_| invalid())
            }
            "u32" | "words" => payload
                .split(',')
                .map(|n| n.trim().parse::<u32>())
                .collect::<core::result::Result<Vec<_>, _>>()
                .map(Self::Words)
                .map_err(|_| invalid()),
            _ => Err(invalid()),
        }
    }
}

/// Number of bytes needed to hold `bits` bits.
#[inline]
pub const fn byte_len(bits: u32) -> usize {
    bits.div_ceil(8) as usize
}

/// Reject strengths the combiner cannot produce.
pub(crate) fn check_strength(bits: u32) -> Result<()> {
    if bits == 0 || bits > MAX_STRENGTH {
        return Err(Error::InvalidStrength(bits));
    }
    Ok(())
}

/// Merge caller entropy with `ceil(bits / 8)` fresh random bytes.
///
/// # Errors
///
/// Returns [`Error::InvalidStrength`] if `bits` is zero or above [`MAX_STRENGTH`].
pub fn combine<R: RngCore + CryptoRng>(
    entropy: &Entropy,
    bits: u32,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u8>>> {
    check_strength(bits)?;
    let n = byte_len(bits);

    let mut random = Zeroizing::new(vec![0u8; n]);
    rng.fill_bytes(&mut random);

    let input = entropy.to_bytes();
    let mut digest = sha256(&[&input, &random]);
    let seed = Zeroizing::new(digest[..n].to_vec());
    digest.zeroize();

    Ok(seed)
}

/// Reduce a big-endian buffer to its top `bits` bits.
///
/// # Errors
///
/// Returns [`Error::InvalidStrength`] if `bits` is zero or exceeds the buffer size.
pub fn trim(buf: &[u8], bits: u32) -> Result<BigUint> {
    let available = buf.len() * 8;
    if bits == 0 || bits as usize > available {
        return Err(Error::InvalidStrength(bits));
    }
    Ok(BigUint::from_bytes_be(buf) >> (available - bits as usize))
}
