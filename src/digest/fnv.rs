//! FNV-1 64-bit checksum.

const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const PRIME: u64 = 0x0000_0100_0000_01b3;

/// Running FNV-1 state: multiply by the prime, then XOR each byte.
///
/// This is FNV-1, not FNV-1a; the order of the two steps matters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fnv1(u64);

impl Default for Fnv1 {
    fn default() -> Self {
        Self(OFFSET_BASIS)
    }
}

impl Fnv1 {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, data: &[u8]) {
        for &byte in data {
            self.0 = self.0.wrapping_mul(PRIME);
            self.0 ^= u64::from(byte);
        }
    }

    pub fn sum64(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fnv1(data: &[u8]) -> u64 {
        let mut h = Fnv1::new();
        h.update(data);
        h.sum64()
    }

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(fnv1(b""), 0xcbf29ce484222325);
    }

    #[test]
    fn known_vectors() {
        assert_eq!(fnv1(b"a"), 0xaf63bd4c8601b7be);
        assert_eq!(fnv1(b"salthint"), 0x7a0117df031f7642);
    }

    #[test]
    fn updates_accumulate() {
        let mut h = Fnv1::new();
        h.update(b"salt");
        h.update(b"hint");
        assert_eq!(h.sum64(), fnv1(b"salthint"));
    }
}
