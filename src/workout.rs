//! Domain types for recorded workout sessions.

use std::fmt;
use std::str::FromStr;

use crate::error::{PackageError, ValidationError};
use crate::formulas;
use crate::report::Summary;

/// Workout types recognized by the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkoutKind {
    Running,
    SportsWalking,
    Swimming,
}

impl WorkoutKind {
    /// Returns the display name used in workout summaries.
    pub fn display_name(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::SportsWalking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Returns the number of values a sensor package of this kind carries.
    pub fn param_count(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::SportsWalking => 4,
            WorkoutKind::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutKind {
    type Err = PackageError;

    /// Sensor units send the code verbatim, so matching is exact: no case
    /// folding, no trimming.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SWM" => Ok(WorkoutKind::Swimming),
            "RUN" => Ok(WorkoutKind::Running),
            "WLK" => Ok(WorkoutKind::SportsWalking),
            _ => Err(PackageError::UnknownWorkoutType(s.to_string())),
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Discipline-specific measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Discipline {
    Running,
    SportsWalking { height_cm: u32 },
    Swimming { pool_length_m: u32, pool_laps: u32 },
}

impl Discipline {
    /// Returns the workout kind this discipline reports as.
    pub fn kind(&self) -> WorkoutKind {
        match self {
            Discipline::Running => WorkoutKind::Running,
            Discipline::SportsWalking { .. } => WorkoutKind::SportsWalking,
            Discipline::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    /// Distance covered by one action (a step or a stroke), in meters.
    fn action_length_m(&self) -> f64 {
        match self {
            Discipline::Swimming { .. } => formulas::STROKE_LENGTH_M,
            _ => formulas::STEP_LENGTH_M,
        }
    }
}

/// A single recorded workout session.
///
/// Construction validates the measurements (positive finite duration and
/// weight, positive height and pool length), so every existing `Workout`
/// can compute its statistics without failure conditions.
#[derive(Debug, Clone)]
pub struct Workout {
    action_count: u32,
    duration_h: f64,
    weight_kg: f64,
    discipline: Discipline,
}

impl Workout {
    /// Creates a running workout.
    pub fn running(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
    ) -> Result<Self, ValidationError> {
        Self::new(action_count, duration_h, weight_kg, Discipline::Running)
    }

    /// Creates a sports walking workout.
    pub fn sports_walking(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        height_cm: u32,
    ) -> Result<Self, ValidationError> {
        if height_cm == 0 {
            return Err(ValidationError::BadHeight(height_cm));
        }

        Self::new(
            action_count,
            duration_h,
            weight_kg,
            Discipline::SportsWalking { height_cm },
        )
    }

    /// Creates a swimming workout.
    ///
    /// A lap count of zero is valid (a session can be recorded before the
    /// first lap completes); a zero-length pool is not.
    pub fn swimming(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        pool_length_m: u32,
        pool_laps: u32,
    ) -> Result<Self, ValidationError> {
        if pool_length_m == 0 {
            return Err(ValidationError::BadPoolLength(pool_length_m));
        }

        Self::new(
            action_count,
            duration_h,
            weight_kg,
            Discipline::Swimming {
                pool_length_m,
                pool_laps,
            },
        )
    }

    fn new(
        action_count: u32,
        duration_h: f64,
        weight_kg: f64,
        discipline: Discipline,
    ) -> Result<Self, ValidationError> {
        if !duration_h.is_finite() || duration_h <= 0.0 {
            return Err(ValidationError::BadDuration(duration_h));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(ValidationError::BadWeight(weight_kg));
        }

        Ok(Self {
            action_count,
            duration_h,
            weight_kg,
            discipline,
        })
    }

    /// Returns the workout kind.
    pub fn kind(&self) -> WorkoutKind {
        self.discipline.kind()
    }

    /// Returns the distance covered, in kilometers.
    ///
    /// Always derived from the action count — including for swimming, where
    /// the stroke-based distance deliberately differs from the pool-based
    /// mean speed.
    pub fn distance_km(&self) -> f64 {
        formulas::calculate_distance_km(self.action_count, self.discipline.action_length_m())
    }

    /// Returns the mean speed over the whole session, in km/h.
    pub fn mean_speed_kmh(&self) -> f64 {
        match self.discipline {
            Discipline::Swimming {
                pool_length_m,
                pool_laps,
            } => formulas::calculate_swimming_speed(pool_length_m, pool_laps, self.duration_h),
            _ => formulas::calculate_mean_speed(self.distance_km(), self.duration_h),
        }
    }

    /// Returns the calories spent over the session, in kcal.
    pub fn calories_kcal(&self) -> f64 {
        match self.discipline {
            Discipline::Running => formulas::calculate_running_calories(
                self.mean_speed_kmh(),
                self.weight_kg,
                self.duration_h,
            ),
            Discipline::SportsWalking { height_cm } => formulas::calculate_walking_calories(
                self.mean_speed_kmh(),
                self.weight_kg,
                height_cm,
                self.duration_h,
            ),
            Discipline::Swimming { .. } => {
                formulas::calculate_swimming_calories(self.mean_speed_kmh(), self.weight_kg)
            }
        }
    }

    /// Builds the summary for this workout.
    pub fn summary(&self) -> Summary {
        Summary::new(
            self.kind().display_name(),
            self.duration_h,
            self.distance_km(),
            self.mean_speed_kmh(),
            self.calories_kcal(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper to check floating point equality with tolerance
    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!(WorkoutKind::from_str("SWM").unwrap(), WorkoutKind::Swimming);
        assert_eq!(WorkoutKind::from_str("RUN").unwrap(), WorkoutKind::Running);
        assert_eq!(
            WorkoutKind::from_str("WLK").unwrap(),
            WorkoutKind::SportsWalking
        );
    }

    #[test]
    fn test_kind_from_str_unknown() {
        let err = WorkoutKind::from_str("BIKE").unwrap_err();
        assert!(matches!(
            err,
            PackageError::UnknownWorkoutType(code) if code == "BIKE"
        ));
    }

    #[test]
    fn test_kind_from_str_is_exact() {
        assert!(WorkoutKind::from_str("swm").is_err());
        assert!(WorkoutKind::from_str(" SWM").is_err());
        assert!(WorkoutKind::from_str("").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(WorkoutKind::Running.display_name(), "Running");
        assert_eq!(WorkoutKind::SportsWalking.display_name(), "SportsWalking");
        assert_eq!(WorkoutKind::Swimming.display_name(), "Swimming");
    }

    #[test]
    fn test_param_counts() {
        assert_eq!(WorkoutKind::Running.param_count(), 3);
        assert_eq!(WorkoutKind::SportsWalking.param_count(), 4);
        assert_eq!(WorkoutKind::Swimming.param_count(), 5);
    }

    #[test]
    fn test_rejects_non_positive_duration() {
        assert!(matches!(
            Workout::running(1000, 0.0, 75.0),
            Err(ValidationError::BadDuration(_))
        ));
        assert!(matches!(
            Workout::running(1000, -1.0, 75.0),
            Err(ValidationError::BadDuration(_))
        ));
    }

    #[test]
    fn test_rejects_non_finite_duration() {
        assert!(matches!(
            Workout::running(1000, f64::NAN, 75.0),
            Err(ValidationError::BadDuration(_))
        ));
        assert!(matches!(
            Workout::running(1000, f64::INFINITY, 75.0),
            Err(ValidationError::BadDuration(_))
        ));
    }

    #[test]
    fn test_rejects_bad_weight() {
        assert!(matches!(
            Workout::running(1000, 1.0, 0.0),
            Err(ValidationError::BadWeight(_))
        ));
        assert!(matches!(
            Workout::running(1000, 1.0, -70.0),
            Err(ValidationError::BadWeight(_))
        ));
    }

    #[test]
    fn test_rejects_zero_height() {
        assert!(matches!(
            Workout::sports_walking(9000, 1.0, 75.0, 0),
            Err(ValidationError::BadHeight(0))
        ));
    }

    #[test]
    fn test_rejects_zero_pool_length() {
        assert!(matches!(
            Workout::swimming(720, 1.0, 80.0, 0, 40),
            Err(ValidationError::BadPoolLength(0))
        ));
    }

    #[test]
    fn test_zero_laps_allowed() {
        let workout = Workout::swimming(720, 1.0, 80.0, 25, 0).unwrap();
        assert_eq!(workout.mean_speed_kmh(), 0.0);
    }

    #[test]
    fn test_running_distance_uses_step_length() {
        let workout = Workout::running(15000, 1.0, 75.0).unwrap();
        assert!(approx_eq(workout.distance_km(), 9.75, 1e-9));
        assert!(approx_eq(workout.mean_speed_kmh(), 9.75, 1e-9));
    }

    #[test]
    fn test_swimming_distance_uses_stroke_length() {
        let workout = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();
        assert!(approx_eq(workout.distance_km(), 0.9936, 1e-9));
    }

    #[test]
    fn test_swimming_speed_ignores_action_count() {
        let few_strokes = Workout::swimming(7, 1.0, 80.0, 25, 40).unwrap();
        let many_strokes = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();

        // Same pool geometry, same speed; only the distance moves.
        assert_eq!(few_strokes.mean_speed_kmh(), many_strokes.mean_speed_kmh());
        assert!(few_strokes.distance_km() < many_strokes.distance_km());
    }

    #[test]
    fn test_swimming_distance_ignores_pool() {
        let short_pool = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();
        let long_pool = Workout::swimming(720, 1.0, 80.0, 50, 40).unwrap();

        assert_eq!(short_pool.distance_km(), long_pool.distance_km());
        assert!(short_pool.mean_speed_kmh() < long_pool.mean_speed_kmh());
    }

    #[test]
    fn test_walking_mean_speed() {
        let workout = Workout::sports_walking(9000, 1.0, 75.0, 180).unwrap();
        assert!(approx_eq(workout.mean_speed_kmh(), 5.85, 1e-9));
    }

    #[test]
    fn test_summary_fields() {
        let workout = Workout::swimming(720, 1.0, 80.0, 25, 40).unwrap();
        let summary = workout.summary();

        assert_eq!(summary.workout_type, "Swimming");
        assert!(approx_eq(summary.duration_h, 1.0, 1e-9));
        assert!(approx_eq(summary.distance_km, 0.9936, 1e-9));
        assert!(approx_eq(summary.mean_speed_kmh, 1.0, 1e-9));
        assert!(approx_eq(summary.calories_kcal, 336.0, 1e-9));
    }
}
