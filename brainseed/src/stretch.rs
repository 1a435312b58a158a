//! Phrase normalization and key stretching.
//!
//! Stretching is BIP-39 compatible: PBKDF2-HMAC-SHA512 with 2048 rounds,
//! the normalized phrase as password and `"mnemonic" || passphrase` as salt.
//! Brain seeds therefore stretch to the same 64 bytes a BIP-39 wallet
//! would derive from the same words.

use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use unicode_normalization::UnicodeNormalization;
use zeroize::{Zeroize, Zeroizing};

/// Number of PBKDF2 rounds for seed derivation.
const PBKDF2_ROUNDS: u32 = 2048;

/// Salt prefix shared with BIP-39.
const SALT_PREFIX: &str = "mnemonic";

/// Canonicalize a phrase: Unicode NFKD, whitespace collapsed to single spaces.
///
/// Case is preserved.
pub fn normalize(phrase: &str) -> String {
    let decomposed: String = phrase.nfkd().collect();
    decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Stretch a phrase and optional passphrase into 64 bytes of key material.
pub fn stretch(phrase: &str, passphrase: Option<&str>) -> Zeroizing<[u8; 64]> {
    let password = Zeroizing::new(normalize(phrase));

    let mut salt: String = SALT_PREFIX.into();
    salt.extend(passphrase.unwrap_or("").nfkd());

    let mut key = Zeroizing::new([0u8; 64]);
    pbkdf2_hmac::<Sha512>(password.as_bytes(), salt.as_bytes(), PBKDF2_ROUNDS, &mut *key);
    salt.zeroize();

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    const PHRASE: &str =
        "possible mother domain sweet brown strategy element school february merit silver edit";

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  lazy\t\tdog \n"), "lazy dog");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \u{3000} "), "");
    }

    #[test]
    fn normalize_decomposes() {
        assert_eq!(normalize("acci\u{f3}n"), "accio\u{301}n");
    }

    #[test]
    fn normalize_preserves_case() {
        assert_eq!(normalize("Lazy DOG"), "Lazy DOG");
    }

    #[test]
    fn stretch_known_vector() {
        let key = stretch(PHRASE, Some("passphrase"));
        assert_eq!(key.len(), 64);
        assert_eq!(&key[..4], &[0x0c, 0x61, 0x9b, 0x5d]);
        assert_eq!(
            hex::encode(key.as_slice()),
            "0c619b5d17fca49d9cd8530f0616785f6f6a0ebad79ec6e94e629864686f5403\
             773e226c9eaa3e02659d7ae9cb8090df76301685a3489c1c432881fb5f2004f4"
        );
    }

    #[test]
    fn stretch_without_passphrase() {
        let none = stretch(PHRASE, None);
        let empty = stretch(PHRASE, Some(""));
        assert_eq!(none, empty);
        assert_eq!(
            hex::encode(none.as_slice()),
            "cc8fb402eb8ac0a8b0cd9fbfa13837fb74aaed6537099a4078ceffd0b169aa46\
             c9ffb7ea641b821551c2a5af8142452bb2b2adaf82add521870adb7f6d2a331c"
        );
    }

    #[test]
    fn stretch_ignores_extra_whitespace() {
        let spaced = format!("  {}  ", PHRASE.replace(' ', "   "));
        assert_eq!(stretch(&spaced, Some("passphrase")), stretch(PHRASE, Some("passphrase")));
    }

    #[test]
    fn passphrase_changes_key() {
        assert_ne!(stretch(PHRASE, Some("a")), stretch(PHRASE, Some("b")));
    }
}
