// 🔁 Driver Tracker - Dispatch loop with bounded reprocessing
//
// Pass 1 walks every input line in order. Trips whose driver is not known yet
// are set aside and retried in later passes, at most one pass per command
// kind. Whatever is still unresolved after that is dropped WITHOUT an error.
//
// NOTE: the silent drop is deliberate and matches the established behavior of
// this tool. A trip for a driver that never appears simply does not count.

use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::commands::{CommandKind, Outcome};
use crate::entities::DriverRegistry;
use crate::error::TrackerError;
use crate::report::{rank_drivers, DriverReport};
use crate::validation::TripValidator;

/// Maximum number of reprocessing passes after the first one
pub const MAX_REPROCESS_PASSES: usize = CommandKind::ALL.len();

// ============================================================================
// PROCESS STATS
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Lines consumed from the input
    pub lines_read: usize,

    /// Blank lines skipped
    pub blank_lines: usize,

    /// Passes run, including the first
    pub passes: usize,

    /// Lines still deferred when the pass budget ran out (dropped)
    pub unresolved: usize,
}

// ============================================================================
// DRIVER TRACKER
// ============================================================================

pub struct DriverTracker {
    registry: DriverRegistry,
    validator: TripValidator,
}

impl DriverTracker {
    pub fn new(validator: TripValidator) -> Self {
        DriverTracker {
            registry: DriverRegistry::new(),
            validator,
        }
    }

    pub fn registry(&self) -> &DriverRegistry {
        &self.registry
    }

    pub fn validator(&self) -> &TripValidator {
        &self.validator
    }

    /// Run every line through classification and execution.
    ///
    /// Stops at the first fatal error; nothing after it is attempted.
    pub fn process<I, S>(&mut self, lines: I) -> Result<ProcessStats, TrackerError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.process_results(lines.into_iter().map(|line| Ok(line.into())))
    }

    /// Same as `process`, reading lines lazily from a buffered reader
    pub fn process_reader<R: BufRead>(&mut self, reader: R) -> Result<ProcessStats, TrackerError> {
        self.process_results(reader.lines().map(|line| line.map_err(TrackerError::from)))
    }

    fn process_results<I>(&mut self, lines: I) -> Result<ProcessStats, TrackerError>
    where
        I: Iterator<Item = Result<String, TrackerError>>,
    {
        let mut stats = ProcessStats::default();
        let mut deferred = Vec::new();

        // First pass: every line, in input order
        stats.passes = 1;
        for line in lines {
            let line = line?;
            stats.lines_read += 1;
            if !self.process_line(line, &mut deferred)? {
                stats.blank_lines += 1;
            }
        }

        // Reprocess until nothing is deferred or the budget is spent
        let mut reprocess_pass = 0;
        while !deferred.is_empty() && reprocess_pass < MAX_REPROCESS_PASSES {
            reprocess_pass += 1;
            stats.passes += 1;
            debug!(pass = stats.passes, lines = deferred.len(), "reprocessing deferred lines");

            let pending = std::mem::take(&mut deferred);
            for line in pending {
                self.process_line(line, &mut deferred)?;
            }
        }

        for line in &deferred {
            debug!(line = line.as_str(), "dropping unresolved line");
        }
        stats.unresolved = deferred.len();

        info!(
            lines = stats.lines_read,
            drivers = self.registry.count(),
            passes = stats.passes,
            unresolved = stats.unresolved,
            "input processed"
        );

        Ok(stats)
    }

    /// Returns `false` for a blank line, `true` otherwise
    fn process_line(&mut self, line: String, deferred: &mut Vec<String>) -> Result<bool, TrackerError> {
        let Some(kind) = CommandKind::classify(&line)? else {
            return Ok(false);
        };

        match kind.attempt(&line, &mut self.registry)? {
            Outcome::Applied => {}
            Outcome::Deferred(line) => deferred.push(line),
        }

        Ok(true)
    }

    /// Aggregate every driver and return them ranked by distance
    pub fn summarize(&mut self) -> Vec<DriverReport> {
        self.registry.aggregate_all(&self.validator);
        rank_drivers(self.registry.drivers())
    }
}

impl Default for DriverTracker {
    fn default() -> Self {
        Self::new(TripValidator::new())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ParseError;
    use std::io::Cursor;

    #[test]
    fn test_process_register_and_trip() {
        let mut tracker = DriverTracker::default();

        tracker
            .process(["Driver Yossarian", "Trip Yossarian 00:00 05:00 100.0"])
            .unwrap();

        let driver = tracker.registry().get("yossarian").unwrap();
        assert_eq!(driver.name(), "Yossarian");
        assert_eq!(driver.trips().len(), 1);
    }

    #[test]
    fn test_duplicate_registration_single_driver() {
        let mut tracker = DriverTracker::default();

        tracker.process(["Driver Aaron", "Driver AARON"]).unwrap();

        assert_eq!(tracker.registry().count(), 1);
        assert_eq!(tracker.registry().drivers()[0].name(), "Aaron");
    }

    #[test]
    fn test_forward_reference_resolved() {
        let mut tracker = DriverTracker::default();

        let stats = tracker
            .process(["Trip Aaron 07:00 08:00 30.0", "Driver Aaron"])
            .unwrap();

        assert_eq!(tracker.registry().get("aaron").unwrap().trips().len(), 1);
        assert_eq!(stats.passes, 2);
        assert_eq!(stats.unresolved, 0);
    }

    #[test]
    fn test_deferred_lines_keep_order() {
        let mut tracker = DriverTracker::default();

        tracker
            .process([
                "Trip Dan 07:00 08:00 30.0",
                "Trip Dan 09:00 10:00 40.0",
                "Driver Dan",
            ])
            .unwrap();

        let trips = tracker.registry().get("dan").unwrap().trips();
        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].distance(), 30.0);
        assert_eq!(trips[1].distance(), 40.0);
    }

    #[test]
    fn test_unregistered_driver_silently_dropped() {
        // Unresolved trips are dropped without an error. This is intentional
        // behavior, not an oversight; callers see only `stats.unresolved`.
        let mut tracker = DriverTracker::default();

        let stats = tracker
            .process(["Driver Dan", "Trip Ghost 07:00 08:00 30.0"])
            .unwrap();

        assert_eq!(stats.unresolved, 1);
        assert_eq!(stats.passes, 1 + MAX_REPROCESS_PASSES);
        assert_eq!(tracker.registry().count(), 1);
        assert!(tracker.registry().get("ghost").is_none());
    }

    #[test]
    fn test_malformed_trip_for_unknown_driver_never_parsed() {
        // Lookup happens before value parsing, so bad values on a trip that
        // never resolves are dropped along with it.
        let mut tracker = DriverTracker::default();

        let stats = tracker.process(["Trip Ghost nope 08:00 30.0"]).unwrap();

        assert_eq!(stats.unresolved, 1);
    }

    #[test]
    fn test_blank_lines_ignored() {
        let mut tracker = DriverTracker::default();

        let stats = tracker.process(["", "Driver Dan", "   ", "\t"]).unwrap();

        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.blank_lines, 3);
        assert_eq!(stats.passes, 1);
        assert_eq!(tracker.registry().count(), 1);
    }

    #[test]
    fn test_malformed_trip_is_fatal() {
        let mut tracker = DriverTracker::default();

        let err = tracker
            .process(["Driver Aaron", "Trip Aaron not-a-time 08:00 30.0"])
            .unwrap_err();

        assert!(matches!(
            err,
            TrackerError::InvalidTrip { source: ParseError::InvalidTime { .. }, .. }
        ));
    }

    #[test]
    fn test_malformed_deferred_trip_is_fatal_once_resolved() {
        let mut tracker = DriverTracker::default();

        let err = tracker
            .process(["Trip Aaron 07:00 08:00 lots", "Driver Aaron"])
            .unwrap_err();

        assert!(matches!(err, TrackerError::InvalidTrip { .. }));
    }

    #[test]
    fn test_wrong_arity_is_fatal() {
        let mut tracker = DriverTracker::default();

        let err = tracker.process(["Driver Aaron", "Trip Aaron 07:00 08:00"]).unwrap_err();

        assert!(matches!(err, TrackerError::TripArity { found: 4, .. }));
    }

    #[test]
    fn test_fatal_error_stops_processing() {
        let mut tracker = DriverTracker::default();

        let err = tracker
            .process(["Driver Dan", "Fly Dan", "Driver Alex"])
            .unwrap_err();

        assert!(matches!(err, TrackerError::UnexpectedCommand { .. }));
        assert!(tracker.registry().get("alex").is_none());
    }

    #[test]
    fn test_process_reader() {
        let input = "Driver Dan\nDriver Lauren\nDriver Kumi\n\
                     Trip Dan 07:15 07:45 17.3\n\
                     Trip Dan 06:12 06:32 21.8\n\
                     Trip Lauren 12:01 13:16 42.0\n";
        let mut tracker = DriverTracker::default();

        let stats = tracker.process_reader(Cursor::new(input)).unwrap();

        assert_eq!(stats.lines_read, 6);
        assert_eq!(tracker.registry().count(), 3);
    }

    #[test]
    fn test_summarize_ranks_by_distance() {
        let mut tracker = DriverTracker::default();
        tracker
            .process([
                "Driver Dan",
                "Driver Lauren",
                "Driver Kumi",
                "Trip Dan 07:15 07:45 17.3",
                "Trip Dan 06:12 06:32 21.8",
                "Trip Lauren 12:01 13:16 42.0",
            ])
            .unwrap();

        let reports = tracker.summarize();

        let names: Vec<&str> = reports.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Lauren", "Dan", "Kumi"]);
        assert!((reports[0].total_distance - 42.0).abs() < 1e-9);
        assert!((reports[1].total_distance - 39.1).abs() < 1e-9);
        assert_eq!(reports[2].total_distance, 0.0);
        assert_eq!(reports[2].average_speed, None);
    }

    #[test]
    fn test_summarize_uses_configured_validator() {
        let mut tracker = DriverTracker::new(TripValidator::with_bounds(50.0, 100.0));
        tracker
            .process(["Driver Dan", "Trip Dan 07:00 08:00 30.0", "Trip Dan 09:00 10:00 60.0"])
            .unwrap();

        let reports = tracker.summarize();

        assert_eq!(reports[0].total_distance, 60.0);
    }
}
