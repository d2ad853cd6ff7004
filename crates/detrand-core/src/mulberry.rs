use crate::{RandError, RandResult, Seed};

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4294967296.0;

/// Mulberry32: a single 32-bit word of state, every step is wrapping.
///
/// Not cryptographic. Re-seeding means building a new generator; the state
/// cannot be resumed from anything but the original seed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    pub fn from_seed(seed: impl Into<Seed>) -> Self {
        Self::new(seed.into().to_u32())
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Uniform in [0, 1).
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / TWO_POW_32
    }

    /// Inclusive on both ends. Always consumes exactly one step, even for
    /// `low == high`; an inverted range consumes none.
    pub fn randint(&mut self, low: i64, high: i64) -> RandResult<i64> {
        if low > high {
            return Err(RandError::InvalidRange(low, high));
        }
        let span = (high as i128 - low as i128 + 1) as f64;
        let offset = (self.next_f64() * span).floor() as i128;
        // f64 rounding on spans beyond 2^53 may land one past the end
        Ok((low as i128 + offset).min(high as i128) as i64)
    }

    /// Fisher-Yates over a copy of `seq`, walking from the back.
    pub fn shuffle<T: Clone>(&mut self, seq: &[T]) -> Vec<T> {
        let mut out = seq.to_vec();
        for i in (1..out.len()).rev() {
            let j = (self.next_f64() * (i + 1) as f64) as usize;
            out.swap(i, j);
        }
        out
    }
}

impl Default for Mulberry32 {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Iterator for Mulberry32 {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_outputs() {
        let mut rng = Mulberry32::new(0);
        assert_eq!(
            [rng.next_u32(), rng.next_u32(), rng.next_u32()],
            [0x4434_B462, 0x0015_9C37, 0x3928_5B08]
        );
        let mut rng = Mulberry32::new(42);
        assert_eq!(
            [rng.next_u32(), rng.next_u32(), rng.next_u32()],
            [0x99E1_EF7C, 0x72C3_2B8A, 0xDA3B_32C0]
        );
    }

    #[test]
    fn state_advances_by_gamma() {
        let mut rng = Mulberry32::new(u32::MAX);
        rng.next_u32();
        assert_eq!(rng.state(), u32::MAX.wrapping_add(GOLDEN_GAMMA));
    }

    #[test]
    fn float_matches_raw() {
        let mut a = Mulberry32::new(0);
        let mut b = Mulberry32::new(0);
        assert_eq!(a.next_f64(), b.next_u32() as f64 / 4294967296.0);
        assert_eq!(Mulberry32::new(0).next_f64(), 0.26642920868471265);
    }

    #[test]
    fn inverted_range_consumes_nothing() {
        let mut rng = Mulberry32::new(5);
        assert_eq!(rng.randint(3, 2), Err(RandError::InvalidRange(3, 2)));
        assert_eq!(rng.state(), 5);
    }

    #[test]
    fn degenerate_range_consumes_one_step() {
        let mut rng = Mulberry32::new(5);
        assert_eq!(rng.randint(-9, -9), Ok(-9));
        assert_eq!(rng.state(), 5u32.wrapping_add(GOLDEN_GAMMA));
    }

    #[test]
    fn full_i64_range() {
        let mut rng = Mulberry32::new(77);
        for _ in 0..1000 {
            rng.randint(i64::MIN, i64::MAX).unwrap();
        }
        assert_eq!(rng.randint(i64::MAX, i64::MAX), Ok(i64::MAX));
    }

    #[test]
    fn iterator_yields_floats() {
        let from_iter: Vec<f64> = Mulberry32::new(9).take(4).collect();
        let mut rng = Mulberry32::new(9);
        let manual: Vec<f64> = (0..4).map(|_| rng.next_f64()).collect();
        assert_eq!(from_iter, manual);
    }
}
