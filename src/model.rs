//! Core data types for current-conditions conversion.
//!
//! This module defines the shared domain model imported by the converter
//! and by callers. It contains no logic and no I/O — only types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record types
// ---------------------------------------------------------------------------

/// One set of current weather conditions, as reported by the vendor feed.
///
/// Every field starts absent and is filled in only when the corresponding
/// tag appears in the fragment. There are no cross-field invariants: a
/// fragment with just a temperature produces a record with just a
/// temperature.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Current {
    /// Air temperature, whole degrees.
    pub temperature: Option<i32>,
    /// Barometric pressure. `None` when the tag is missing or when the
    /// vendor sends the `"Unknown"` sentinel.
    pub pressure: Option<f64>,
    /// Relative humidity percentage, parsed from a `"<number>%"` string.
    pub humidity: Option<f64>,
    /// Free-text sky condition, copied verbatim.
    pub condition: Option<String>,
    /// Vendor icon identifier, copied verbatim.
    pub icon: Option<String>,
    /// Wind speed, decimal.
    pub wind_speed: Option<f64>,
    /// Compass wind direction, copied verbatim.
    pub wind_direction: Option<String>,
}

/// Values that appear inside the current-conditions fragment but do not
/// belong on [`Current`] itself; the parent parser picks these up after
/// conversion.
///
/// Returned alongside the record, fresh per call, owned by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConditionsContext {
    /// "More information" link for the observed location.
    pub more_information_link: Option<String>,
    /// Observation timestamp, local to the station. `None` when the tag is
    /// missing or when the text matched none of the known formats.
    pub observation_time: Option<NaiveDateTime>,
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors that can arise when converting a current-conditions fragment.
///
/// A date that matches no known format is deliberately *not* here — that
/// case is recoverable and only logged. Everything below aborts the call;
/// no partial record is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The supplied text is not well-formed XML.
    Xml(String),
    /// The document contains no element with the expected name.
    ElementNotFound(&'static str),
    /// A numeric field (pressure, temperature, humidity, wind speed)
    /// could not be parsed.
    NumberFormat { tag: &'static str, value: String },
    /// The humidity string has no `%` delimiter to split on.
    MissingDelimiter { tag: &'static str, value: String },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::Xml(msg) => write!(f, "Malformed XML: {}", msg),
            ConvertError::ElementNotFound(tag) => write!(f, "Element not found: <{}>", tag),
            ConvertError::NumberFormat { tag, value } => {
                write!(f, "Invalid number for <{}>: {:?}", tag, value)
            }
            ConvertError::MissingDelimiter { tag, value } => {
                write!(f, "Missing '%' delimiter in <{}>: {:?}", tag, value)
            }
        }
    }
}

impl std::error::Error for ConvertError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_is_fully_absent() {
        let current = Current::default();
        assert_eq!(current.temperature, None);
        assert_eq!(current.pressure, None);
        assert_eq!(current.humidity, None);
        assert_eq!(current.condition, None);
        assert_eq!(current.icon, None);
        assert_eq!(current.wind_speed, None);
        assert_eq!(current.wind_direction, None);
    }

    #[test]
    fn test_error_display_names_the_tag() {
        let err = ConvertError::NumberFormat {
            tag: "temperature",
            value: "warm".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("temperature"), "got: {}", msg);
        assert!(msg.contains("warm"), "got: {}", msg);

        let err = ConvertError::MissingDelimiter {
            tag: "humidity",
            value: "55".to_string(),
        };
        assert!(err.to_string().contains('%'));
    }
}
