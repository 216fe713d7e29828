use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathsError {
    #[error("Invalid random range: min={min} must be less than max={max}")]
    InvalidRange { min: i32, max: i32 },

    #[error("Unknown easing function: {0}")]
    UnknownEasing(String),
}

pub type MathsResult<T> = Result<T, MathsError>;
