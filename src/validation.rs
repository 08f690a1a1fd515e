// ✅ Trip Validation - Speed threshold check
//
// A trip counts toward a driver's summary only if its own average speed
// sits inside the closed range [min, max]. Trips outside are excluded
// entirely, never clamped.

use serde::{Deserialize, Serialize};

use crate::entities::Trip;

/// Slowest eligible average speed (mph)
pub const MIN_AVERAGE_SPEED: f64 = 5.0;

/// Fastest eligible average speed (mph)
pub const MAX_AVERAGE_SPEED: f64 = 100.0;

// ============================================================================
// VALIDATION RESULT
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum TripVerdict {
    Eligible,
    TooSlow,
    TooFast,
    /// Zero or negative duration; speed is not meaningful
    InvalidDuration,
}

impl TripVerdict {
    pub fn is_eligible(&self) -> bool {
        matches!(self, TripVerdict::Eligible)
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripValidator {
    min_average_speed: f64,
    max_average_speed: f64,
}

impl TripValidator {
    /// Validator with the standard [5, 100] mph range
    pub fn new() -> Self {
        Self::with_bounds(MIN_AVERAGE_SPEED, MAX_AVERAGE_SPEED)
    }

    /// Validator with custom bounds. Bounds are checked by `TrackerConfig`.
    pub fn with_bounds(min_average_speed: f64, max_average_speed: f64) -> Self {
        TripValidator {
            min_average_speed,
            max_average_speed,
        }
    }

    pub fn min_average_speed(&self) -> f64 {
        self.min_average_speed
    }

    pub fn max_average_speed(&self) -> f64 {
        self.max_average_speed
    }

    pub fn check(&self, trip: &Trip) -> TripVerdict {
        let speed = trip.average_speed();

        if trip.elapsed_seconds() <= 0 || !speed.is_finite() {
            return TripVerdict::InvalidDuration;
        }

        if speed < self.min_average_speed {
            TripVerdict::TooSlow
        } else if speed > self.max_average_speed {
            TripVerdict::TooFast
        } else {
            TripVerdict::Eligible
        }
    }

    pub fn is_eligible(&self, trip: &Trip) -> bool {
        self.check(trip).is_eligible()
    }
}

impl Default for TripValidator {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
