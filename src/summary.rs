// 📊 Driving Summary - Totals across a driver's eligible trips
//
// Two accumulators (distance, elapsed seconds) plus an average speed that is
// derived on first read and cached. Any mutation clears the cache.

use std::cell::OnceCell;

use crate::entities::Trip;
use crate::validation::TripValidator;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Default)]
pub struct DrivingSummary {
    total_distance: f64,
    total_seconds: i64,
    trip_count: usize,
    average_speed: OnceCell<Option<f64>>,
}

impl DrivingSummary {
    /// Empty summary: no trips, zero distance, undefined speed
    pub fn no_data() -> Self {
        Self::default()
    }

    /// Fold `trips` in order, keeping only those the validator accepts
    pub fn aggregate<'a, I>(trips: I, validator: &TripValidator) -> Self
    where
        I: IntoIterator<Item = &'a Trip>,
    {
        trips
            .into_iter()
            .filter(|trip| validator.is_eligible(trip))
            .fold(Self::no_data(), |mut summary, trip| {
                summary.add_trip(trip);
                summary
            })
    }

    /// Add one trip's distance and duration. Does not validate.
    pub fn add_trip(&mut self, trip: &Trip) {
        self.total_distance += trip.distance();
        self.total_seconds += trip.elapsed_seconds();
        self.trip_count += 1;
        self.average_speed = OnceCell::new();
    }

    /// Total miles across counted trips
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Total seconds across counted trips
    pub fn total_seconds(&self) -> i64 {
        self.total_seconds
    }

    /// Number of trips that were counted
    pub fn trip_count(&self) -> usize {
        self.trip_count
    }

    /// Average mph across counted trips, `None` when no time has elapsed
    pub fn average_speed(&self) -> Option<f64> {
        *self.average_speed.get_or_init(|| {
            if self.total_seconds == 0 {
                None
            } else {
                Some(self.total_distance / (self.total_seconds as f64 / SECONDS_PER_HOUR))
            }
        })
    }
}

impl PartialEq for DrivingSummary {
    fn eq(&self, other: &Self) -> bool {
        self.total_distance == other.total_distance
            && self.total_seconds == other.total_seconds
            && self.trip_count == other.trip_count
    }
}

// ============================================================================
// TESTS
// ============================================================================
