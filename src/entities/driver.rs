// 🚗 Driver Entity - Named actor owning trips + a derived summary
//
// Identity is the name, compared case-insensitively. "Dan", "DAN" and "dan"
// are the same driver; the spelling from the first registration is kept.

use std::collections::HashMap;

use crate::entities::Trip;
use crate::summary::DrivingSummary;
use crate::validation::TripValidator;

/// Registry lookup key for a driver name
pub fn driver_key(name: &str) -> String {
    name.to_lowercase()
}

// ============================================================================
// DRIVER ENTITY
// ============================================================================

#[derive(Debug, Clone)]
pub struct Driver {
    name: String,
    trips: Vec<Trip>,
    summary: DrivingSummary,
}

impl Driver {
    pub fn new(name: impl Into<String>) -> Self {
        Driver {
            name: name.into(),
            trips: Vec::new(),
            summary: DrivingSummary::no_data(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trips in the order they were attached
    pub fn trips(&self) -> &[Trip] {
        &self.trips
    }

    pub fn add_trip(&mut self, trip: Trip) {
        self.trips.push(trip);
    }

    /// Summary from the last `aggregate_trips` call
    pub fn summary(&self) -> &DrivingSummary {
        &self.summary
    }

    /// Rebuild the summary from scratch over the current trips
    pub fn aggregate_trips(&mut self, validator: &TripValidator) -> &DrivingSummary {
        self.summary = DrivingSummary::aggregate(&self.trips, validator);
        &self.summary
    }
}

// ============================================================================
// DRIVER REGISTRY
// ============================================================================

/// All known drivers, keyed by lower-cased name.
///
/// Insertion order is kept so that iteration (and ranking ties) follow the
/// order in which drivers were first registered.
#[derive(Debug, Default)]
pub struct DriverRegistry {
    drivers: Vec<Driver>,
    index: HashMap<String, usize>,
}

impl DriverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a driver by name. Returns `false` if the name was already known.
    pub fn register(&mut self, name: &str) -> bool {
        let key = driver_key(name);
        if self.index.contains_key(&key) {
            return false;
        }

        self.index.insert(key, self.drivers.len());
        self.drivers.push(Driver::new(name));
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(&driver_key(name))
    }

    pub fn get(&self, name: &str) -> Option<&Driver> {
        self.index.get(&driver_key(name)).map(|&i| &self.drivers[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Driver> {
        match self.index.get(&driver_key(name)) {
            Some(&i) => self.drivers.get_mut(i),
            None => None,
        }
    }

    /// Drivers in registration order
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Re-aggregate every driver's summary
    pub fn aggregate_all(&mut self, validator: &TripValidator) {
        for driver in &mut self.drivers {
            driver.aggregate_trips(validator);
        }
    }

    pub fn count(&self) -> usize {
        self.drivers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
