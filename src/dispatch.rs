//! Assembles workouts from raw sensor packages.

use std::str::FromStr;

use crate::error::PackageError;
use crate::workout::{Workout, WorkoutKind};

/// Builds a workout from a sensor package: a type code and the flat list of
/// numeric parameters the sensor unit delivered.
///
/// Parameters are applied positionally:
/// - `RUN`: action count, duration (h), weight (kg)
/// - `WLK`: action count, duration (h), weight (kg), height (cm)
/// - `SWM`: action count, duration (h), weight (kg), pool length (m), laps
///
/// The code → workout mapping is a pure constant mapping; nothing here
/// holds state between calls.
///
/// # Errors
/// Fails on an unknown code, on a parameter count that does not match the
/// kind, on integer-typed fields that are not whole non-negative numbers,
/// and on any constructor validation failure. No partially constructed
/// workout is observable.
pub fn read_package(code: &str, params: &[f64]) -> Result<Workout, PackageError> {
    let kind = WorkoutKind::from_str(code)?;

    let expected = kind.param_count();
    if params.len() != expected {
        return Err(PackageError::ArityMismatch {
            kind,
            expected,
            actual: params.len(),
        });
    }

    // Common prefix shared by all kinds.
    let action_count = as_count(params[0], "action count")?;
    let duration_h = params[1];
    let weight_kg = params[2];

    let workout = match kind {
        WorkoutKind::Running => Workout::running(action_count, duration_h, weight_kg)?,
        WorkoutKind::SportsWalking => {
            let height_cm = as_count(params[3], "height")?;
            Workout::sports_walking(action_count, duration_h, weight_kg, height_cm)?
        }
        WorkoutKind::Swimming => {
            let pool_length_m = as_count(params[3], "pool length")?;
            let pool_laps = as_count(params[4], "lap count")?;
            Workout::swimming(action_count, duration_h, weight_kg, pool_length_m, pool_laps)?
        }
    };

    Ok(workout)
}

/// Coerces a raw sensor value into a count field.
///
/// Sensor packages carry every value as a float; count fields must still be
/// whole non-negative numbers. Fractional values are rejected rather than
/// truncated — truncating would silently change the computed distance or
/// calories.
fn as_count(value: f64, name: &'static str) -> Result<u32, PackageError> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value > f64::from(u32::MAX) {
        return Err(PackageError::BadParameter { name, value });
    }

    Ok(value as u32)
}
