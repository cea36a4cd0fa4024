//! Distance, speed and calorie formulas for the supported workout types.

/// Distance covered by a single step when running or walking (meters).
pub const STEP_LENGTH_M: f64 = 0.65;

/// Distance covered by a single swimming stroke (meters).
pub const STROKE_LENGTH_M: f64 = 1.38;

/// Meters in one kilometer.
pub const METERS_PER_KM: f64 = 1000.0;

/// Minutes in one hour.
pub const MINUTES_PER_HOUR: f64 = 60.0;

/// Calorie coefficients for running.
mod running {
    /// Multiplier applied to the mean speed.
    pub const SPEED_FACTOR: f64 = 18.0;
    /// Subtracted from the scaled mean speed.
    pub const SPEED_SHIFT: f64 = 20.0;
}

/// Calorie coefficients for sports walking.
mod walking {
    /// Multiplier applied to the bare weight term.
    pub const WEIGHT_FACTOR: f64 = 0.035;
    /// Multiplier applied to the speed-over-height term.
    pub const SPEED_HEIGHT_FACTOR: f64 = 0.029;
}

/// Calorie coefficients for swimming.
mod swimming {
    /// Added to the mean speed.
    pub const SPEED_SHIFT: f64 = 1.1;
    /// Multiplier applied to the weight.
    pub const WEIGHT_FACTOR: f64 = 2.0;
}

/// Calculates the distance covered, in km, from an action count and the
/// per-action length in meters.
pub fn calculate_distance_km(action_count: u32, action_length_m: f64) -> f64 {
    f64::from(action_count) * action_length_m / METERS_PER_KM
}

/// Calculates the mean speed in km/h over the whole session.
///
/// `duration_h` must be positive; workout construction guarantees this.
pub fn calculate_mean_speed(distance_km: f64, duration_h: f64) -> f64 {
    distance_km / duration_h
}

/// Calculates spent calories for a running workout.
///
/// Formula: `(18 × v − 20) × weight / 1000 × (duration × 60)`
///
/// The speed term goes negative below 20/18 ≈ 1.11 km/h, and so does the
/// result; the formula is reproduced as-is, without clamping.
///
/// # Arguments
/// * `mean_speed_kmh` - Mean speed over the session in km/h
/// * `weight_kg` - Participant weight in kilograms
/// * `duration_h` - Session duration in hours
///
/// # Returns
/// Spent calories in kcal
pub fn calculate_running_calories(mean_speed_kmh: f64, weight_kg: f64, duration_h: f64) -> f64 {
    (running::SPEED_FACTOR * mean_speed_kmh - running::SPEED_SHIFT) * weight_kg / METERS_PER_KM
        * (duration_h * MINUTES_PER_HOUR)
}

/// Calculates spent calories for a sports walking workout.
///
/// Formula: `(0.035 × weight + ⌊v² / height⌋ × 0.029 × weight) × (duration × 60)`
///
/// The squared speed over height is floored, not rounded; the integer
/// truncation is part of the calorie contract and must not be smoothed out.
///
/// # Arguments
/// * `mean_speed_kmh` - Mean speed over the session in km/h
/// * `weight_kg` - Participant weight in kilograms
/// * `height_cm` - Participant height in centimeters
/// * `duration_h` - Session duration in hours
///
/// # Returns
/// Spent calories in kcal
pub fn calculate_walking_calories(
    mean_speed_kmh: f64,
    weight_kg: f64,
    height_cm: u32,
    duration_h: f64,
) -> f64 {
    let speed_term = (mean_speed_kmh * mean_speed_kmh / f64::from(height_cm)).floor();

    (walking::WEIGHT_FACTOR * weight_kg + speed_term * walking::SPEED_HEIGHT_FACTOR * weight_kg)
        * (duration_h * MINUTES_PER_HOUR)
}

/// Calculates the mean speed for a swimming workout from pool geometry.
///
/// Formula: `(pool length × laps) / 1000 / duration`
///
/// Independent of the stroke count; the stroke-based distance and the
/// pool-based speed deliberately coexist.
///
/// `duration_h` must be positive; workout construction guarantees this.
pub fn calculate_swimming_speed(pool_length_m: u32, pool_laps: u32, duration_h: f64) -> f64 {
    f64::from(pool_length_m) * f64::from(pool_laps) / METERS_PER_KM / duration_h
}

/// Calculates spent calories for a swimming workout.
///
/// Formula: `(v + 1.1) × (2 × weight)`
pub fn calculate_swimming_calories(mean_speed_kmh: f64, weight_kg: f64) -> f64 {
    (mean_speed_kmh + swimming::SPEED_SHIFT) * (swimming::WEIGHT_FACTOR * weight_kg)
}
