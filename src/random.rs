//! Injectable random number provider
//!
//! Code that needs randomness takes a `&mut impl Randomiser` (or
//! `&mut dyn Randomiser`) instead of reaching for a global generator. The
//! application owns one [`LiveRandomiser`] for the life of the process;
//! tests hand in a [`StubRandomiser`] to pin the outcome.

use std::future::{Ready, ready};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::{RANDOM_DEFAULT_MAX, RANDOM_DEFAULT_MIN};
use crate::error::{MathsError, MathsResult};

/// Source of random integers
pub trait Randomiser {
    /// Integer in `[min, max)`
    fn random_in_range(&mut self, min: i32, max: i32) -> MathsResult<i32>;

    /// Integer in `[0, 100)`
    fn random_default(&mut self) -> i32;

    /// Same range as [`Randomiser::random_default`], as an already
    /// resolved future for async call sites. No work is deferred.
    fn random_async(&mut self) -> Ready<i32> {
        ready(self.random_default())
    }
}

/// PCG-backed generator, created once and reused for every call
///
/// Not `Clone`: a copy would replay the same sequence as the original.
#[derive(Debug)]
pub struct LiveRandomiser {
    rng: Pcg32,
}

impl LiveRandomiser {
    /// Seed from operating system entropy
    pub fn new() -> Self {
        log::debug!("Live randomiser seeded from OS entropy");
        Self {
            rng: Pcg32::from_os_rng(),
        }
    }

    /// Reproducible generator: equal seeds yield equal sequences
    pub fn from_seed(seed: u64) -> Self {
        log::debug!("Live randomiser created with seed: {}", seed);
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl Default for LiveRandomiser {
    fn default() -> Self {
        Self::new()
    }
}

impl Randomiser for LiveRandomiser {
    fn random_in_range(&mut self, min: i32, max: i32) -> MathsResult<i32> {
        if min >= max {
            log::warn!("Rejected empty random range [{}, {})", min, max);
            return Err(MathsError::InvalidRange { min, max });
        }
        Ok(self.rng.random_range(min..max))
    }

    fn random_default(&mut self) -> i32 {
        self.rng.random_range(RANDOM_DEFAULT_MIN..RANDOM_DEFAULT_MAX)
    }
}

/// Test double returning one fixed value from every query
///
/// Bounds are ignored on purpose: `StubRandomiser::new(42)` answers 42 even
/// when asked for a value in `[0, 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StubRandomiser {
    value: i32,
}

impl StubRandomiser {
    pub fn new(value: i32) -> Self {
        Self { value }
    }

    pub fn value(&self) -> i32 {
        self.value
    }
}

impl Randomiser for StubRandomiser {
    fn random_in_range(&mut self, _min: i32, _max: i32) -> MathsResult<i32> {
        Ok(self.value)
    }

    fn random_default(&mut self) -> i32 {
        self.value
    }

    fn random_async(&mut self) -> Ready<i32> {
        ready(self.value)
    }
}
