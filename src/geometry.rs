//! Angle, direction and distance helpers on the plane
//!
//! Angles are radians measured counter-clockwise from +X, as returned by
//! `atan2`. Vectors come back as `glam::Vec2`.
//!
//! Lengths are accumulated in `f64` and narrowed at the end, so squaring a
//! finite `f32` can neither overflow nor flush to zero.

use std::f32::consts::PI;

use glam::Vec2;

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};

/// Angle of the line from (x1, y1) to (x2, y2), in (-π, π]
#[inline]
pub fn angle_between_points(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let angle = (y2 - y1).atan2(x2 - x1);
    // atan2 reports -π for a negative-zero `dy`
    if angle == -PI { PI } else { angle }
}

/// Unit direction vector pointing along `radians`
#[inline]
pub fn radians_to_vector(radians: f32) -> Vec2 {
    normalize(radians.cos(), radians.sin())
}

/// Scale (x, y) to unit length; the zero vector stays zero
pub fn normalize(x: f32, y: f32) -> Vec2 {
    let (x, y) = (f64::from(x), f64::from(y));
    let length = (x * x + y * y).sqrt();

    if length > 0.0 {
        let inv_length = 1.0 / length;
        Vec2::new((x * inv_length) as f32, (y * inv_length) as f32)
    } else {
        Vec2::ZERO
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let dx = f64::from(x2) - f64::from(x1);
    let dy = f64::from(y2) - f64::from(y1);
    (dx * dx + dy * dy).sqrt() as f32
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    DEG_TO_RAD * degrees
}

#[inline]
pub fn radians_to_degrees(radians: f32) -> f32 {
    RAD_TO_DEG * radians
}
