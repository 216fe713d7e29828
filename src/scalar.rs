//! Floating point abstraction shared by easing and interpolation
//!
//! Curves are written once against [`Real`] so `f32` and `f64` evaluate the
//! exact same formula.

use std::fmt::Debug;
use std::ops::{Add, Mul, Neg, Sub};

/// A floating point scalar usable by the easing and interpolation code
pub trait Real:
    Copy
    + Debug
    + PartialOrd
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    const ZERO: Self;
    const HALF: Self;
    const ONE: Self;
    const TWO: Self;
    const FOUR: Self;
}

macro_rules! impl_real {
    ($t:ty) => {
        impl Real for $t {
            const ZERO: Self = 0.0;
            const HALF: Self = 0.5;
            const ONE: Self = 1.0;
            const TWO: Self = 2.0;
            const FOUR: Self = 4.0;
        }
    };
}

impl_real!(f32);
impl_real!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn midpoint<T: Real>(a: T, b: T) -> T {
        (a + b) * T::HALF
    }

    #[test]
    fn test_constants_match_literals() {
        assert_eq!(<f32 as Real>::FOUR, 4.0_f32);
        assert_eq!(<f64 as Real>::HALF, 0.5_f64);
    }

    #[test]
    fn test_generic_arithmetic_both_precisions() {
        assert_eq!(midpoint(2.0_f32, 4.0), 3.0);
        assert_eq!(midpoint(-1.0_f64, 1.0), 0.0);
    }
}
