// 🛣️ Trip Entity - One immutable driving record
//
// A Trip is a VALUE: start, end, distance. It never changes after
// construction and carries no identity of its own.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::parser::{parse_distance, parse_time};

const SECONDS_PER_HOUR: f64 = 3600.0;

// ============================================================================
// TRIP
// ============================================================================

/// Trip - start/end time of day plus distance in miles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    start: NaiveTime,
    end: NaiveTime,
    distance: f64,
}

impl Trip {
    /// Create a trip from already-typed values
    pub fn new(start: NaiveTime, end: NaiveTime, distance: f64) -> Self {
        Trip { start, end, distance }
    }

    /// Parse a trip from its three value tokens (`HH:MM`, `HH:MM`, miles)
    pub fn parse(start: &str, end: &str, distance: &str) -> Result<Self, ParseError> {
        Ok(Trip {
            start: parse_time(start)?,
            end: parse_time(end)?,
            distance: parse_distance(distance)?,
        })
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Seconds between start and end.
    ///
    /// Negative when `end` is earlier than `start` (no midnight rollover).
    pub fn elapsed_seconds(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_seconds()
    }

    /// Miles per hour for this trip alone.
    ///
    /// Not finite for a zero-length trip; negative when end precedes start.
    pub fn average_speed(&self) -> f64 {
        self.distance / (self.elapsed_seconds() as f64 / SECONDS_PER_HOUR)
    }
}

// ============================================================================
// TESTS
// ============================================================================
