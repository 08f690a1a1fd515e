// 🧭 Commands - Classify a raw line and apply it to the registry
//
// Exactly two command kinds exist. `CommandKind` is a closed enum and every
// dispatch is an exhaustive match, so a new kind shows up at compile time.
//
// Grammar (keyword is case-insensitive):
//   Driver <name>
//   Trip <name> <HH:MM> <HH:MM> <miles>

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::entities::{DriverRegistry, Trip};
use crate::error::TrackerError;
use crate::parser::split_command;

// ============================================================================
// OUTCOME
// ============================================================================

/// Result of attempting one command against the registry
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The registry now reflects the command
    Applied,

    /// The command references a driver that does not exist yet.
    /// Carries the original line, untouched, for a later pass.
    Deferred(String),
}

impl Outcome {
    pub fn is_deferred(&self) -> bool {
        matches!(self, Outcome::Deferred(_))
    }
}

// ============================================================================
// COMMAND KIND
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    /// Registers a driver
    Driver,

    /// Records a trip for a registered driver
    Trip,
}

impl CommandKind {
    /// Every command kind, in classification order
    pub const ALL: [CommandKind; 2] = [CommandKind::Driver, CommandKind::Trip];

    /// Keyword as written in the input
    pub fn keyword(&self) -> &'static str {
        match self {
            CommandKind::Driver => "Driver",
            CommandKind::Trip => "Trip",
        }
    }

    /// Work out which command a line holds.
    ///
    /// Returns `Ok(None)` for blank lines. An unrecognised keyword is fatal.
    pub fn classify(line: &str) -> Result<Option<CommandKind>, TrackerError> {
        let Some((keyword, _)) = split_command(line) else {
            return Ok(None);
        };

        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.keyword().eq_ignore_ascii_case(keyword))
            .map(Some)
            .ok_or_else(|| TrackerError::UnexpectedCommand {
                line: line.to_string(),
            })
    }

    /// Apply `line` to the registry, or report that it has to wait.
    pub fn attempt(&self, line: &str, registry: &mut DriverRegistry) -> Result<Outcome, TrackerError> {
        match self {
            CommandKind::Driver => register_driver(line, registry),
            CommandKind::Trip => attach_trip(line, registry),
        }
    }
}

// ============================================================================
// EXECUTORS
// ============================================================================

fn register_driver(line: &str, registry: &mut DriverRegistry) -> Result<Outcome, TrackerError> {
    let name = split_command(line).map(|(_, rest)| rest).unwrap_or_default();
    if name.is_empty() {
        return Err(TrackerError::MissingDriverName {
            line: line.to_string(),
        });
    }

    if registry.register(name) {
        info!(driver = name, "registering driver");
    } else {
        warn!(driver = name, "driver already registered");
    }

    Ok(Outcome::Applied)
}

fn attach_trip(line: &str, registry: &mut DriverRegistry) -> Result<Outcome, TrackerError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let &[_, name, start, end, distance] = fields.as_slice() else {
        return Err(TrackerError::TripArity {
            line: line.to_string(),
            found: fields.len(),
        });
    };

    let Some(driver) = registry.get_mut(name) else {
        debug!(driver = name, "driver not registered yet, deferring trip");
        return Ok(Outcome::Deferred(line.to_string()));
    };

    let trip = Trip::parse(start, end, distance).map_err(|source| TrackerError::InvalidTrip {
        line: line.to_string(),
        source,
    })?;

    info!(
        driver = driver.name(),
        start = %trip.start(),
        end = %trip.end(),
        distance = trip.distance(),
        "adding trip"
    );
    driver.add_trip(trip);

    Ok(Outcome::Applied)
}

// ============================================================================
// TESTS
// ============================================================================
