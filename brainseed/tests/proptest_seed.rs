use proptest::prelude::*;
use rand_core::{CryptoRng, RngCore};

use brainseed::codec::{decode, encode, encode_phrase};
use brainseed::entropy::{byte_len, trim};
use brainseed::version::version_tag;
use brainseed::{generate_with_rng, validate, GenerateConfig, Language, Version};
use num_bigint::BigUint;

/// Replays a fixed byte stream, so each proptest case is reproducible.
struct ReplayRng {
    bytes: Vec<u8>,
    pos: usize,
}

impl ReplayRng {
    fn new(bytes: Vec<u8>) -> Self {
        Self { bytes, pos: 0 }
    }
}

impl RngCore for ReplayRng {
    fn next_u32(&mut self) -> u32 {
        let mut buf = [0u8; 4];
        self.fill_bytes(&mut buf);
        u32::from_le_bytes(buf)
    }

    fn next_u64(&mut self) -> u64 {
        let mut buf = [0u8; 8];
        self.fill_bytes(&mut buf);
        u64::from_le_bytes(buf)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for byte in dest {
            *byte = self.bytes[self.pos % self.bytes.len()];
            self.pos += 1;
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for ReplayRng {}

fn any_language() -> impl Strategy<Value = Language> {
    prop::sample::select(Language::all().to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn decode_inverts_encode(
        bytes in prop::collection::vec(any::<u8>(), 1..40),
        language in any_language(),
    ) {
        let value = BigUint::from_bytes_be(&bytes) + 1u32;
        let phrase = encode_phrase(&value, language).unwrap();
        prop_assert_eq!(decode(&phrase, language).unwrap(), value);
    }

    #[test]
    fn word_count_is_minimal(bytes in prop::collection::vec(any::<u8>(), 1..40)) {
        let value = BigUint::from_bytes_be(&bytes) + 1u32;
        let words = encode(&value, Language::English).unwrap();
        // 2048 = 2^11, so each word carries exactly 11 bits.
        prop_assert_eq!(words.len() as u64, value.bits().div_ceil(11));
    }

    #[test]
    fn trim_respects_strength(
        bytes in prop::collection::vec(any::<u8>(), 1..33),
        cut in 0u32..8,
    ) {
        let bits = (bytes.len() as u32 * 8).saturating_sub(cut).max(1);
        let value = trim(&bytes, bits).unwrap();
        prop_assert!(value.bits() <= u64::from(bits));
        prop_assert_eq!(byte_len(bits), bytes.len());
    }

    #[test]
    fn version_tag_prefixes_are_consistent(phrase in "[a-z]{1,8}( [a-z]{1,8}){0,11}") {
        let full = version_tag(&phrase, 3).unwrap();
        prop_assert_eq!(version_tag(&phrase, 1).unwrap(), &full[..1]);
        prop_assert_eq!(version_tag(&phrase, 2).unwrap(), &full[..2]);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn generated_seeds_carry_their_version(
        entropy in prop::collection::vec(any::<u8>(), 1..64),
        random in prop::collection::vec(any::<u8>(), 1..64),
        version in "[0-9a-f]{1,2}",
        bits in 16u32..=256,
        language in any_language(),
    ) {
        let version = Version::new(&version).unwrap();
        let config = GenerateConfig::new()
            .with_entropy(entropy)
            .with_bits(bits)
            .with_version(version.clone())
            .with_language(language);

        let seed = generate_with_rng(&config, &mut ReplayRng::new(random)).unwrap();
        prop_assert_eq!(
            version_tag(seed.phrase(), version.len()).unwrap(),
            version.as_str()
        );
        prop_assert!(validate(seed.phrase(), &version, language).valid);
        prop_assert!(seed.nonce() >= 1);
    }
}
