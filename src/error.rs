//! Error types for the fitstat application.

use thiserror::Error;

use crate::workout::WorkoutKind;

/// Errors that can occur when parsing a sensor package file.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("cannot read file: {0}")]
    CannotRead(String),

    #[error("line {row}: expected a workout type code, found number: {value}")]
    MissingTypeCode { row: usize, value: String },

    #[error("line {row}: invalid number: {value}")]
    InvalidNumber { row: usize, value: String },
}

/// Errors that can occur when assembling a workout from a sensor package.
#[derive(Debug, Error)]
pub enum PackageError {
    #[error("unknown workout type code: {0}")]
    UnknownWorkoutType(String),

    #[error("{kind} takes {expected} parameters, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    #[error("invalid value for {name}: {value}")]
    BadParameter { name: &'static str, value: f64 },

    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Errors that can occur when constructing a workout from raw measurements.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("duration must be positive: {0} h")]
    BadDuration(f64),

    #[error("weight must be positive: {0} kg")]
    BadWeight(f64),

    #[error("height must be positive: {0} cm")]
    BadHeight(u32),

    #[error("pool length must be positive: {0} m")]
    BadPoolLength(u32),
}
