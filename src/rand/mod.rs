//! Deterministic random source.
//!
//! An additive lagged Fibonacci generator over wrapping 64-bit integers,
//! seeded through a Park-Miller minimal standard generator and a fixed seed
//! table. The stream is part of the output contract: a given seed must shuffle
//! an alphabet the same way on every platform and in every release.

mod cooked;

use cooked::COOKED;

/// Length of the feedback register.
const LEN: usize = 607;
/// Lag between the feed and the tap.
const TAP: usize = 273;
const MASK: u64 = (1 << 63) - 1;
const INT32_MAX: i64 = (1 << 31) - 1;
/// Replacement for seeds that reduce to zero.
const ZERO_SEED: i64 = 89_482_311;

/// Seed of a fresh or reset source.
pub const INITIAL_SEED: i64 = 1;

// =============================================================================
// Seeding
// =============================================================================

/// x[n+1] = 48271 * x[n] mod (2^31 - 1), using Schrage's method to stay in i32.
#[inline]
fn seed_step(x: i32) -> i32 {
    const A: i32 = 48_271;
    const Q: i32 = 44_488;
    const R: i32 = 3_399;

    let hi = x / Q;
    let lo = x % Q;
    let x = A * lo - R * hi;
    if x < 0 { x + INT32_MAX as i32 } else { x }
}

// =============================================================================
// Source
// =============================================================================

/// Reseedable pseudo-random source with a fixed, reproducible stream.
///
/// Not suitable for anything an adversary must not predict.
#[derive(Clone)]
pub struct AdditiveSource {
    tap: usize,
    feed: usize,
    vec: [i64; LEN],
}

impl std::fmt::Debug for AdditiveSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdditiveSource")
            .field("tap", &self.tap)
            .field("feed", &self.feed)
            .finish_non_exhaustive()
    }
}

impl Default for AdditiveSource {
    fn default() -> Self {
        Self::new(INITIAL_SEED)
    }
}

impl AdditiveSource {
    pub fn new(seed: i64) -> Self {
        let mut source = Self {
            tap: 0,
            feed: LEN - TAP,
            vec: [0; LEN],
        };
        source.seed(seed);
        source
    }

    /// Reset the register to the state determined by `seed`.
    ///
    /// Seeds are reduced modulo 2^31 - 1, so seeds congruent under that
    /// modulus produce the same stream.
    pub fn seed(&mut self, seed: i64) {
        self.tap = 0;
        self.feed = LEN - TAP;

        let mut seed = seed % INT32_MAX;
        if seed < 0 {
            seed += INT32_MAX;
        }
        if seed == 0 {
            seed = ZERO_SEED;
        }

        let mut x = seed as i32;
        for i in -20..LEN as isize {
            x = seed_step(x);
            if i >= 0 {
                let mut u = i64::from(x) << 40;
                x = seed_step(x);
                u ^= i64::from(x) << 20;
                x = seed_step(x);
                u ^= i64::from(x);
                u ^= COOKED[i as usize];
                self.vec[i as usize] = u;
            }
        }
    }

    /// Next raw 64-bit value.
    #[inline]
    pub fn uint64(&mut self) -> u64 {
        self.tap = self.tap.checked_sub(1).unwrap_or(LEN - 1);
        self.feed = self.feed.checked_sub(1).unwrap_or(LEN - 1);

        let x = self.vec[self.feed].wrapping_add(self.vec[self.tap]);
        self.vec[self.feed] = x;
        x as u64
    }

    /// Next non-negative 63-bit value.
    #[inline]
    pub fn int63(&mut self) -> i64 {
        (self.uint64() & MASK) as i64
    }

    #[inline]
    pub fn uint32(&mut self) -> u32 {
        (self.int63() >> 31) as u32
    }

    /// Uniform value in `[0, n)` for `0 < n <= i32::MAX`.
    ///
    /// Multiply-shift with rejection of the biased low range.
    pub fn int31n(&mut self, n: u32) -> u32 {
        debug_assert!(n > 0 && n <= i32::MAX as u32, "int31n bound out of range: {n}");

        let mut prod = u64::from(self.uint32()) * u64::from(n);
        let mut low = prod as u32;
        if low < n {
            let thresh = n.wrapping_neg() % n;
            while low < thresh {
                prod = u64::from(self.uint32()) * u64::from(n);
                low = prod as u32;
            }
        }
        (prod >> 32) as u32
    }

    /// Uniform value in `[0, n)` for `n > 0`.
    pub fn int63n(&mut self, n: i64) -> i64 {
        debug_assert!(n > 0, "int63n bound must be positive: {n}");

        if n & (n - 1) == 0 {
            return self.int63() & (n - 1);
        }
        let max = ((1u64 << 63) - 1 - (1u64 << 63) % n as u64) as i64;
        let mut v = self.int63();
        while v > max {
            v = self.int63();
        }
        v % n
    }

    /// Fisher-Yates shuffle of `n` elements, drawing from the top index down.
    pub fn shuffle(&mut self, n: usize, mut swap: impl FnMut(usize, usize)) {
        const INT31_LIMIT: usize = (1 << 31) - 2;

        let mut i = n.saturating_sub(1);
        while i > INT31_LIMIT {
            let j = self.int63n(i as i64 + 1) as usize;
            swap(i, j);
            i -= 1;
        }
        while i > 0 {
            let j = self.int31n((i + 1) as u32) as usize;
            swap(i, j);
            i -= 1;
        }
    }
}
