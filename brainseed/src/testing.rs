//! Test doubles shared by unit tests.

use rand_core::{CryptoRng, RngCore};

/// A "random" source that returns the same byte forever.
///
/// Fixes the combiner's random buffer so generation becomes reproducible.
#[derive(Debug, Clone, Copy)]
pub struct FixedRng(u8);

impl FixedRng {
    pub const fn new(byte: u8) -> Self {
        Self(byte)
    }
}

impl RngCore for FixedRng {
    fn next_u32(&mut self) -> u32 {
        u32::from_le_bytes([self.0; 4])
    }

    fn next_u64(&mut self) -> u64 {
        u64::from_le_bytes([self.0; 8])
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(self.0);
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl CryptoRng for FixedRng {}
