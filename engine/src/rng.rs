use std::time::{SystemTime, UNIX_EPOCH};

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Size of the raw draw space (`next_u32` covers `0..2^32`).
const DRAW_SPACE: f64 = 4_294_967_296.0;

/// Anything that can produce a uniformly distributed integer in `[min, max]`.
///
/// `Dice` is the real source. Closures implement it too, so tests can script
/// exact draws (`|_, _| 1` always wins the escape coin).
pub trait Roll {
    fn range(&mut self, min: i32, max: i32) -> i32;
}

impl<F> Roll for F
where
    F: FnMut(i32, i32) -> i32,
{
    fn range(&mut self, min: i32, max: i32) -> i32 {
        self(min, max)
    }
}

pub struct Dice {
    rng: ChaCha8Rng,
}

impl Dice {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Seed from the wall clock and throw away the first draw.
    pub fn from_clock() -> Self {
        let mut dice = Self::from_seed(clock_seed());
        dice.rng.next_u32();
        dice
    }

    /// Uniform integer in `[min, max]`.
    ///
    /// Scales one full-range draw instead of taking a remainder, so no
    /// value in the range is favoured.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max, "empty range {min}..={max}");
        let span = (max as i64 - min as i64 + 1) as f64;
        let fraction = self.rng.next_u32() as f64 / DRAW_SPACE;
        (min as i64 + (span * fraction) as i64) as i32
    }
}

impl Roll for Dice {
    fn range(&mut self, min: i32, max: i32) -> i32 {
        Dice::range(self, min, max)
    }
}

/// Seconds since the Unix epoch, or 0 if the clock is before it.
fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}
