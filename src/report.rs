//! Per-workout summary rendering.

use std::fmt;

use serde::Serialize;

/// Summary of a single workout session.
///
/// Immutable once built; created per reporting call and rendered to the
/// fixed message template. The Russian labels and the punctuation are the
/// output contract of the original sensor-unit firmware and must match
/// byte for byte.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Display name of the workout type.
    pub workout_type: &'static str,
    /// Session duration in hours.
    pub duration_h: f64,
    /// Distance covered in kilometers.
    pub distance_km: f64,
    /// Mean speed over the session in km/h.
    pub mean_speed_kmh: f64,
    /// Spent calories in kcal.
    pub calories_kcal: f64,
}

impl Summary {
    pub fn new(
        workout_type: &'static str,
        duration_h: f64,
        distance_km: f64,
        mean_speed_kmh: f64,
        calories_kcal: f64,
    ) -> Self {
        Self {
            workout_type,
            duration_h,
            distance_km,
            mean_speed_kmh,
            calories_kcal,
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Тип тренировки: {}; \
             Длительность: {:.3} ч.; \
             Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; \
             Потрачено ккал: {:.3}.",
            self.workout_type,
            self.duration_h,
            self.distance_km,
            self.mean_speed_kmh,
            self.calories_kcal
        )
    }
}
