//! Tween Maths - small numeric helpers for animation and gameplay code
//!
//! Core modules:
//! - `easing`: Normalized progress curves (quad, cubic, quart, quint)
//! - `interpolate`: Linear and eased blending between two values
//! - `geometry`: Angle, direction vector and distance helpers
//! - `random`: Injectable random provider with a fixed-value test stub

pub mod easing;
pub mod error;
pub mod geometry;
pub mod interpolate;
pub mod random;
pub mod scalar;

pub use easing::{Easing, EasingFunction};
pub use error::{MathsError, MathsResult};
pub use geometry::{
    angle_between_points, degrees_to_radians, distance, normalize, radians_to_degrees,
    radians_to_vector,
};
pub use interpolate::{ease_interpolate, lerp};
pub use random::{LiveRandomiser, Randomiser, StubRandomiser};
pub use scalar::Real;

/// Library constants
pub mod consts {
    /// Inclusive lower bound of `Randomiser::random_default`
    pub const RANDOM_DEFAULT_MIN: i32 = 0;
    /// Exclusive upper bound of `Randomiser::random_default`
    pub const RANDOM_DEFAULT_MAX: i32 = 100;

    /// Degrees to radians factor
    pub const DEG_TO_RAD: f32 = std::f32::consts::PI / 180.0;
    /// Radians to degrees factor
    pub const RAD_TO_DEG: f32 = 180.0 / std::f32::consts::PI;
}
