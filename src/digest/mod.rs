//! Digest combiners: the entropy feeding the generator.
//!
//! A combiner accumulates every byte written since the last reset and exposes
//! two independent views of it, a 64-bit checksum and a byte digest. Reads
//! never disturb the running state.

mod fnv;

use std::io;

use sha2::{Digest, Sha512};

pub use fnv::Fnv1;

pub trait DigestCombiner {
    /// Append `data` to the accumulated input.
    fn write(&mut self, data: &[u8]) -> io::Result<()>;

    /// 64-bit checksum of everything written so far.
    fn checksum64(&self) -> u64;

    /// Byte digest of everything written so far, `digest_size()` bytes long.
    fn digest(&self) -> Vec<u8>;

    fn digest_size(&self) -> usize;

    fn reset(&mut self);
}

/// FNV-1 checksum paired with a SHA-512 digest.
#[derive(Clone, Default)]
pub struct Fnv1Sha512 {
    checksum: Fnv1,
    digest: Sha512,
}

impl std::fmt::Debug for Fnv1Sha512 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fnv1Sha512").finish_non_exhaustive()
    }
}

impl Fnv1Sha512 {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DigestCombiner for Fnv1Sha512 {
    fn write(&mut self, data: &[u8]) -> io::Result<()> {
        self.checksum.update(data);
        Digest::update(&mut self.digest, data);
        Ok(())
    }

    fn checksum64(&self) -> u64 {
        self.checksum.sum64()
    }

    fn digest(&self) -> Vec<u8> {
        self.digest.clone().finalize().to_vec()
    }

    fn digest_size(&self) -> usize {
        <Sha512 as Digest>::output_size()
    }

    fn reset(&mut self) {
        self.checksum = Fnv1::new();
        Digest::reset(&mut self.digest);
    }
}
