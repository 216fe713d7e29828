//! Easing curves
//!
//! Each curve maps normalized progress `t` (nominally 0..=1) to shaped
//! progress. Input is never clamped: values outside 0..=1 extrapolate along
//! the polynomial, and NaN propagates.
//!
//! The InOut curves run a doubled-speed In curve over the first half. For
//! cubic, quart and quint the second half is `0.5 * f^n + 0.5` with
//! `f = 2(t - 1)`: it restarts at 0 (cubic, quint) or 1 (quart) when
//! `t` reaches 0.5 and settles at 0.5 when `t` reaches 1. Callers relying on
//! these curves get that jump and end value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MathsError;
use crate::interpolate::ease_interpolate;
use crate::scalar::Real;

/// Function pointer shape shared by every curve in this module
pub type EasingFunction<T> = fn(T) -> T;

#[inline]
pub fn linear<T: Real>(t: T) -> T {
    t
}

#[inline]
pub fn ease_in_quad<T: Real>(t: T) -> T {
    t * t
}

#[inline]
pub fn ease_out_quad<T: Real>(t: T) -> T {
    t * (T::TWO - t)
}

#[inline]
pub fn ease_in_out_quad<T: Real>(t: T) -> T {
    if t < T::HALF {
        T::TWO * t * t
    } else {
        -T::ONE + (T::FOUR - T::TWO * t) * t
    }
}

#[inline]
pub fn ease_in_cubic<T: Real>(t: T) -> T {
    t * t * t
}

#[inline]
pub fn ease_out_cubic<T: Real>(t: T) -> T {
    let f = t - T::ONE;
    f * f * f + T::ONE
}

pub fn ease_in_out_cubic<T: Real>(t: T) -> T {
    if t < T::HALF {
        let f = T::TWO * t;
        T::HALF * f * f * f
    } else {
        let f = T::TWO * (t - T::ONE);
        T::HALF * f * f * f + T::HALF
    }
}

#[inline]
pub fn ease_in_quart<T: Real>(t: T) -> T {
    t * t * t * t
}

#[inline]
pub fn ease_out_quart<T: Real>(t: T) -> T {
    let f = t - T::ONE;
    f * f * f * (T::ONE - t) + T::ONE
}

pub fn ease_in_out_quart<T: Real>(t: T) -> T {
    if t < T::HALF {
        let f = T::TWO * t;
        T::HALF * f * f * f * f
    } else {
        let f = T::TWO * (t - T::ONE);
        T::HALF * f * f * f * f + T::HALF
    }
}

#[inline]
pub fn ease_in_quint<T: Real>(t: T) -> T {
    t * t * t * t * t
}

#[inline]
pub fn ease_out_quint<T: Real>(t: T) -> T {
    let f = t - T::ONE;
    f * f * f * f * f + T::ONE
}

pub fn ease_in_out_quint<T: Real>(t: T) -> T {
    if t < T::HALF {
        let f = T::TWO * t;
        T::HALF * f * f * f * f * f
    } else {
        let f = T::TWO * (t - T::ONE);
        T::HALF * f * f * f * f * f + T::HALF
    }
}

/// A named easing curve
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Easing {
    #[default]
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuart,
    EaseOutQuart,
    EaseInOutQuart,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl Easing {
    /// Every curve, in declaration order
    pub const ALL: [Easing; 13] = [
        Easing::Linear,
        Easing::EaseInQuad,
        Easing::EaseOutQuad,
        Easing::EaseInOutQuad,
        Easing::EaseInCubic,
        Easing::EaseOutCubic,
        Easing::EaseInOutCubic,
        Easing::EaseInQuart,
        Easing::EaseOutQuart,
        Easing::EaseInOutQuart,
        Easing::EaseInQuint,
        Easing::EaseOutQuint,
        Easing::EaseInOutQuint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Easing::Linear => "Linear",
            Easing::EaseInQuad => "EaseInQuad",
            Easing::EaseOutQuad => "EaseOutQuad",
            Easing::EaseInOutQuad => "EaseInOutQuad",
            Easing::EaseInCubic => "EaseInCubic",
            Easing::EaseOutCubic => "EaseOutCubic",
            Easing::EaseInOutCubic => "EaseInOutCubic",
            Easing::EaseInQuart => "EaseInQuart",
            Easing::EaseOutQuart => "EaseOutQuart",
            Easing::EaseInOutQuart => "EaseInOutQuart",
            Easing::EaseInQuint => "EaseInQuint",
            Easing::EaseOutQuint => "EaseOutQuint",
            Easing::EaseInOutQuint => "EaseInOutQuint",
        }
    }

    /// The free function implementing this curve
    pub fn function<T: Real>(self) -> EasingFunction<T> {
        match self {
            Easing::Linear => linear,
            Easing::EaseInQuad => ease_in_quad,
            Easing::EaseOutQuad => ease_out_quad,
            Easing::EaseInOutQuad => ease_in_out_quad,
            Easing::EaseInCubic => ease_in_cubic,
            Easing::EaseOutCubic => ease_out_cubic,
            Easing::EaseInOutCubic => ease_in_out_cubic,
            Easing::EaseInQuart => ease_in_quart,
            Easing::EaseOutQuart => ease_out_quart,
            Easing::EaseInOutQuart => ease_in_out_quart,
            Easing::EaseInQuint => ease_in_quint,
            Easing::EaseOutQuint => ease_out_quint,
            Easing::EaseInOutQuint => ease_in_out_quint,
        }
    }

    /// Evaluate the curve at `t`
    #[inline]
    pub fn apply<T: Real>(self, t: T) -> T {
        (self.function::<T>())(t)
    }

    /// Blend `start` to `end` with this curve shaping `fraction`
    #[inline]
    pub fn interpolate<T: Real>(self, start: T, end: T, fraction: T) -> T {
        ease_interpolate(start, end, fraction, self.function::<T>())
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Easing {
    type Err = MathsError;

    /// Accepts `EaseInQuad`, `ease_in_quad`, `ease-in-quad` and similar
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_lowercase();

        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.as_str().to_lowercase() == key)
            .ok_or_else(|| MathsError::UnknownEasing(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    #[test]
    fn test_quad_formulas() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert_eq!(ease_in_quad(t), t * t);
            assert_eq!(ease_out_quad(t), t * (2.0 - t));
        }
    }

    #[test]
    fn test_linear_is_identity_outside_unit_range() {
        for t in [-3.5_f32, -1.0, 0.0, 0.25, 1.0, 7.0] {
            assert_eq!(linear(t), t);
        }
        assert_eq!(linear(-2.0_f64), -2.0);
    }

    /// Curves whose right half is `0.5 * f^n + 0.5`
    const OFFSET_IN_OUT: [Easing; 3] = [
        Easing::EaseInOutCubic,
        Easing::EaseInOutQuart,
        Easing::EaseInOutQuint,
    ];

    #[test]
    fn test_all_curves_start_at_zero() {
        for easing in Easing::ALL {
            assert!(approx(easing.apply(0.0_f32), 0.0), "{easing} at 0");
        }
    }

    #[test]
    fn test_end_values() {
        for easing in Easing::ALL {
            let expected = if OFFSET_IN_OUT.contains(&easing) { 0.5 } else { 1.0 };
            assert!(approx(easing.apply(1.0_f32), expected), "{easing} at 1");
        }
    }

    #[test]
    fn test_in_out_quad_is_continuous_at_half() {
        let left = ease_in_out_quad(0.5_f32 - 1e-4);
        let mid = ease_in_out_quad(0.5_f32);
        let right = ease_in_out_quad(0.5_f32 + 1e-4);
        assert!(approx(mid, 0.5));
        assert!((left - mid).abs() < 1e-3);
        assert!((right - mid).abs() < 1e-3);
    }

    #[test]
    fn test_in_out_values_at_three_quarters() {
        assert_eq!(ease_in_out_cubic(0.75_f64), 0.4375);
        assert_eq!(ease_in_out_quart(0.75_f64), 0.53125);
        assert_eq!(ease_in_out_quint(0.75_f64), 0.484375);
    }

    #[test]
    fn test_in_out_right_half_jumps_at_half() {
        // Left of 0.5 every curve approaches 0.5; at 0.5 the right half takes over
        assert_eq!(ease_in_out_cubic(0.5_f32), 0.0);
        assert_eq!(ease_in_out_quart(0.5_f32), 1.0);
        assert_eq!(ease_in_out_quint(0.5_f32), 0.0);
        for easing in OFFSET_IN_OUT {
            assert!((easing.apply(0.5_f32 - 1e-4) - 0.5).abs() < 1e-3, "{easing}");
        }
    }

    #[test]
    fn test_in_out_halves_follow_table() {
        let curves: [(EasingFunction<f64>, i32); 3] = [
            (ease_in_out_cubic, 3),
            (ease_in_out_quart, 4),
            (ease_in_out_quint, 5),
        ];
        for (curve, n) in curves {
            for i in 0..=20 {
                let t = i as f64 / 20.0;
                let expected = if t < 0.5 {
                    0.5 * (2.0 * t).powi(n)
                } else {
                    0.5 * (2.0 * (t - 1.0)).powi(n) + 0.5
                };
                assert!((curve(t) - expected).abs() < 1e-12, "n={n} t={t}");
            }
        }
    }

    #[test]
    fn test_in_out_quad_halves_are_scaled_in_and_out() {
        for i in 0..10 {
            let t = i as f64 / 20.0;
            assert!((ease_in_out_quad(t) - 0.5 * ease_in_quad(2.0 * t)).abs() < 1e-12);
            let u = 0.5 + t;
            let out = 0.5 + 0.5 * ease_out_quad(2.0 * u - 1.0);
            assert!((ease_in_out_quad(u) - out).abs() < 1e-12);
        }
    }

    #[test]
    fn test_out_quart_matches_power_form() {
        let t = 0.3_f64;
        assert!((ease_out_quart(t) - (1.0 - (1.0 - t).powi(4))).abs() < 1e-12);
    }

    #[test]
    fn test_extrapolates_without_clamping() {
        assert_eq!(ease_in_quad(2.0_f32), 4.0);
        assert_eq!(ease_in_cubic(-1.0_f32), -1.0);
        assert!(ease_out_quad(f32::NAN).is_nan());
    }

    #[test]
    fn test_precisions_agree() {
        for easing in Easing::ALL {
            let single = easing.apply(0.37_f32);
            let double = easing.apply(0.37_f64);
            assert!((single as f64 - double).abs() < 1e-5, "{easing}");
        }
    }

    #[test]
    fn test_name_parsing() {
        for easing in Easing::ALL {
            assert_eq!(easing.as_str().parse::<Easing>(), Ok(easing));
        }
        assert_eq!("ease_in_out_cubic".parse::<Easing>(), Ok(Easing::EaseInOutCubic));
        assert_eq!("ease-out-quint".parse::<Easing>(), Ok(Easing::EaseOutQuint));
        assert_eq!("LINEAR".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!(
            "bounce".parse::<Easing>(),
            Err(MathsError::UnknownEasing("bounce".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_variant_names() {
        let json = serde_json::to_string(&Easing::EaseInOutQuart).unwrap();
        assert_eq!(json, "\"EaseInOutQuart\"");
        let back: Easing = serde_json::from_str("\"EaseOutCubic\"").unwrap();
        assert_eq!(back, Easing::EaseOutCubic);
        assert_eq!(Easing::default(), Easing::Linear);
    }
}
