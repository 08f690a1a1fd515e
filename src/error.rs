// ⚠️ Error Types - Fatal run errors, token parse errors, config errors
//
// Deferral is NOT an error: a Trip waiting for its Driver comes back as
// `Outcome::Deferred` from the command layer. Everything here ends the run.

use thiserror::Error;

// ============================================================================
// PARSE ERRORS (single token)
// ============================================================================

/// A single value token could not be turned into its typed form.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("invalid time '{token}' (expected HH:MM)")]
    InvalidTime { token: String },

    #[error("invalid distance '{token}' (expected a real number)")]
    InvalidDistance { token: String },

    #[error("distance '{token}' must be a finite, non-negative number")]
    DistanceOutOfRange { token: String },
}

// ============================================================================
// TRACKER ERRORS (whole run)
// ============================================================================

/// Unrecoverable conditions that terminate a tracking run.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Unexpected command: {line}")]
    UnexpectedCommand { line: String },

    #[error("Driver registration is missing a name: {line}")]
    MissingDriverName { line: String },

    #[error("Trip data in an unexpected format (expected 5 fields, found {found}): {line}")]
    TripArity { line: String, found: usize },

    #[error("Trip data in an unexpected format: {line}")]
    InvalidTrip {
        line: String,
        #[source]
        source: ParseError,
    },

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// The offending input line, when the error came from a command.
    pub fn line(&self) -> Option<&str> {
        match self {
            TrackerError::UnexpectedCommand { line }
            | TrackerError::MissingDriverName { line }
            | TrackerError::TripArity { line, .. }
            | TrackerError::InvalidTrip { line, .. } => Some(line),
            TrackerError::Io(_) => None,
        }
    }
}

// ============================================================================
// CONFIG ERRORS
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("Speed bound '{field}' must be finite and non-negative, got {value}")]
    InvalidSpeedBound { field: &'static str, value: f64 },

    #[error("Minimum speed {min} is greater than maximum speed {max}")]
    InvertedSpeedBounds { min: f64, max: f64 },
}

// ============================================================================
// TESTS
// ============================================================================
