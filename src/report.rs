// 🏁 Driving Report - Ranked per-driver summaries + rendering
//
// Ranking: descending total distance. Ties keep registration order
// (stable sort over the registry's insertion order).

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::entities::Driver;

// ============================================================================
// DRIVER REPORT
// ============================================================================

/// One output row: (name, total distance, average speed or undefined)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverReport {
    pub name: String,
    pub total_distance: f64,
    pub average_speed: Option<f64>,
}

impl DriverReport {
    pub fn from_driver(driver: &Driver) -> Self {
        let summary = driver.summary();
        DriverReport {
            name: driver.name().to_string(),
            total_distance: summary.total_distance(),
            average_speed: summary.average_speed(),
        }
    }

    /// `Dan: 39 miles @ 47 mph`, or `Kumi: 0 miles` when nothing was driven
    pub fn summary(&self) -> String {
        let miles = self.total_distance.round() as i64;

        match self.average_speed {
            Some(speed) if miles != 0 => {
                format!("{}: {} miles @ {} mph", self.name, miles, speed.round() as i64)
            }
            _ => format!("{}: {} miles", self.name, miles),
        }
    }
}

/// Build reports for `drivers` ordered by descending total distance
pub fn rank_drivers(drivers: &[Driver]) -> Vec<DriverReport> {
    let mut reports: Vec<DriverReport> = drivers.iter().map(DriverReport::from_driver).collect();
    reports.sort_by(|a, b| b.total_distance.total_cmp(&a.total_distance));
    reports
}

// ============================================================================
// OUTPUT FORMAT
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One human-readable line per driver
    #[default]
    Text,

    /// Pretty-printed JSON array
    Json,

    /// CSV with a header row
    Csv,
}

/// Write `reports` to `out` in the requested format
pub fn render<W: Write>(reports: &[DriverReport], format: OutputFormat, mut out: W) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for report in reports {
                writeln!(out, "{}", report.summary()).context("Failed to write report")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, reports).context("Failed to serialize report as JSON")?;
            writeln!(out).context("Failed to write report")?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(&mut out);
            for report in reports {
                writer.serialize(report).context("Failed to serialize report as CSV")?;
            }
            writer.flush().context("Failed to write report")?;
        }
    }

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
