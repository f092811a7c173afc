//! Deterministic random source for domain decisions.
//!
//! Dealing, skill targeting, and session pacing all draw from this
//! generator so that a fixed seed reproduces a whole match, independent of
//! `rand`'s algorithm choices. Policy-level randomness (AI tie-breaking)
//! uses `rand` separately.

/// SplitMix64-style generator with a single `u64` of state.
#[derive(Debug, Clone)]
pub struct MixRng {
    state: u64,
}

impl MixRng {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        let mut z = self.state;
        z ^= z >> 30;
        z = z.wrapping_mul(0xBF58476D1CE4E5B9);
        z ^= z >> 27;
        z = z.wrapping_mul(0x94D049BB133111EB);
        z ^ (z >> 31)
    }

    /// Uniform value in `0..max`. `max` must be nonzero.
    pub fn next_range(&mut self, max: usize) -> usize {
        let m = max as u64;
        // Largest multiple of m that fits in u64; values past it are
        // rejected to avoid modulo bias.
        let limit = u64::MAX - (u64::MAX % m);

        loop {
            let x = self.next_u64();
            if x < limit {
                return (x % m) as usize;
            }
        }
    }

    /// Uniform value in `lo..=hi`.
    pub fn next_between(&mut self, lo: u64, hi: u64) -> u64 {
        if hi <= lo {
            return lo;
        }
        lo + self.next_range((hi - lo + 1) as usize) as u64
    }

    /// True with probability `p` (clamped to [0, 1]).
    pub fn chance(&mut self, p: f64) -> bool {
        // 53 high bits give a uniform float in [0, 1).
        let unit = (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64;
        unit < p
    }
}
