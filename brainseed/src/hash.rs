//! Hash primitives used by entropy combination and version tagging.

use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::{Error, Result};

type HmacSha512 = Hmac<Sha512>;

/// Compute SHA-256 over the concatenation of `parts`.
#[inline]
pub fn sha256(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    hasher.finalize().into()
}

/// Compute HMAC-SHA512 of `data` under `key`.
pub fn hmac_sha512(key: &[u8], data: &[u8]) -> Result<[u8; 64]> {
    let mut mac = HmacSha512::new_from_slice(key).map_err(|_| Error::CryptoError)?;
    mac.update(data);
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod sha256_tests {
        use super::*;

        #[test]
        fn test_sha256_empty() {
            let hash = sha256(&[]);
            assert_eq!(
                hex::encode(hash),
                "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
            );
        }

        #[test]
        fn test_sha256_parts_concatenate() {
            let split = sha256(&[b"hel", b"lo"]);
            assert_eq!(
                hex::encode(split),
                "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
            );
        }
    }

    mod hmac_tests {
        use super::*;

        #[test]
        fn test_hmac_sha512_fox() {
            let mac = hmac_sha512(b"key", b"The quick brown fox jumps over the lazy dog").unwrap();
            assert_eq!(
                hex::encode(mac),
                "b42af09057bac1e2d41708e48a902e09b5ff7f12ab428a4fe86653c73dd248fb\
                 82f948a549f7b791a5b41915ee4d1ec3935357e4e2317250d0372afa2ebeeb3a"
            );
        }

        #[test]
        fn test_hmac_sha512_seed_version_empty() {
            let mac = hmac_sha512(b"Seed version", b"").unwrap();
            assert_eq!(
                hex::encode(mac),
                "d71e0e7caffa74ba39d387337d551213fb905d18d039a3405efda4456fdc3783\
                 85b4766392f2dfa1d973ec04437c923700c094ba78b3a0820529e8a1626aefc2"
            );
        }
    }
}
