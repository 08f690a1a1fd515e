// Drive Tracker - Core Library
// Turns Driver/Trip command lines into a ranked per-driver driving report

pub mod commands;
pub mod config;
pub mod entities;
pub mod error;
pub mod parser;
pub mod report;
pub mod summary;
pub mod tracker;
pub mod validation;

// Re-export commonly used types
pub use commands::{CommandKind, Outcome};
pub use config::TrackerConfig;
pub use entities::{Driver, DriverRegistry, Trip};
pub use error::{ConfigError, ParseError, TrackerError};
pub use parser::{parse_distance, parse_time, split_command};
pub use report::{rank_drivers, render, DriverReport, OutputFormat};
pub use summary::DrivingSummary;
pub use tracker::{DriverTracker, ProcessStats, MAX_REPROCESS_PASSES};
pub use validation::{TripValidator, TripVerdict, MAX_AVERAGE_SPEED, MIN_AVERAGE_SPEED};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
