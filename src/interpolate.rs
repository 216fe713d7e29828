//! Linear and eased interpolation between two scalars
//!
//! `fraction` is never clamped. Values outside 0..=1 extrapolate past the
//! endpoints, for both `f32` and `f64`.

use crate::scalar::Real;

/// Linearly interpolate from `start` to `end`
#[inline]
pub fn lerp<T: Real>(start: T, end: T, fraction: T) -> T {
    start + (end - start) * fraction
}

/// Interpolate with `easing` reshaping `fraction` before the blend
#[inline]
pub fn ease_interpolate<T, F>(start: T, end: T, fraction: T, easing: F) -> T
where
    T: Real,
    F: Fn(T) -> T,
{
    start + (end - start) * easing(fraction)
}
