//! Tiny, fast LCG + Box-Muller for the demo distributions.
//! Avoids rand dependency

#[derive(Clone, Debug)]
pub struct Lcg(u64);

impl Lcg {
    #[must_use]
    pub fn seed(seed: u64) -> Self {
        Self(seed)
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn seed_from_time() -> Self {
        use std::time::{SystemTime, UNIX_EPOCH};
        // A clock before 1970 still gets a usable (constant) seed.
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0x5eed, |d| d.as_nanos());
        Self(nanos as u64)
    }

    #[inline]
    fn next_u32(&mut self) -> u32 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Uniform sample in `[0, 1]`.
    #[inline]
    pub fn uniform(&mut self) -> f64 {
        f64::from(self.next_u32()) / f64::from(u32::MAX)
    }

    /// Uniform integer in `low..=high`.
    #[inline]
    pub fn int_inclusive(&mut self, low: u32, high: u32) -> u32 {
        debug_assert!(low <= high);
        let span = u64::from(high - low) + 1;
        // multiply-shift keeps the result below `span` without a modulo
        low + ((u64::from(self.next_u32()) * span) >> 32) as u32
    }

    /// Standard normal 𝒩(0, 1) sample.
    #[inline]
    pub fn randn(&mut self) -> f64 {
        let u1 = self.uniform().max(f64::MIN_POSITIVE);
        let u2 = self.uniform();
        (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
    }
}
