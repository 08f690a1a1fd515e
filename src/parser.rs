// 🔤 Token Parsers - Raw text → typed values
//
// Leaf layer of the pipeline. Every function here is pure and fails with a
// `ParseError` naming the offending token.

use chrono::NaiveTime;

use crate::error::ParseError;

/// Accepted time-of-day layouts, tried in order.
const TIME_FORMATS: [&str; 2] = ["%H:%M", "%H:%M:%S"];

// ============================================================================
// LINE SPLITTING
// ============================================================================

/// Split a command line into its leading keyword and the rest of the line.
///
/// Returns `None` for blank or whitespace-only lines. The remainder has its
/// surrounding whitespace stripped, so `"Driver   Dan "` yields
/// `("Driver", "Dan")`.
pub fn split_command(line: &str) -> Option<(&str, &str)> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    match trimmed.find(char::is_whitespace) {
        Some(pos) => Some((&trimmed[..pos], trimmed[pos..].trim())),
        None => Some((trimmed, "")),
    }
}

// ============================================================================
// VALUE PARSERS
// ============================================================================

/// Parse a time-of-day token such as `07:15` (seconds are optional).
pub fn parse_time(token: &str) -> Result<NaiveTime, ParseError> {
    TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(token, format).ok())
        .ok_or_else(|| ParseError::InvalidTime {
            token: token.to_string(),
        })
}

/// Parse a distance token in miles.
///
/// Rejects anything that is not a finite, non-negative real number
/// (`NaN`, `inf` and negative values parse as `f64` but are not distances).
pub fn parse_distance(token: &str) -> Result<f64, ParseError> {
    let distance: f64 = token.parse().map_err(|_| ParseError::InvalidDistance {
        token: token.to_string(),
    })?;

    if !distance.is_finite() || distance < 0.0 {
        return Err(ParseError::DistanceOutOfRange {
            token: token.to_string(),
        });
    }

    Ok(distance)
}

// ============================================================================
// TESTS
// ============================================================================
