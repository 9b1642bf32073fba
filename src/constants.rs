//! Vendor feed constants for the current-conditions fragment.
//!
//! The upstream weather service labels every value with a lowercase tag
//! under a `currentconditions` element. Tag names and the pressure
//! sentinel are fixed by the vendor; the date patterns reflect the
//! timestamp formats the feed has been observed to send.

// ---------------------------------------------------------------------------
// Element and tag names
// ---------------------------------------------------------------------------

/// Enclosing element for the current-conditions fragment.
pub const CURRENT_CONDITIONS_TAG: &str = "currentconditions";

/// "More information" link for the observed location.
pub const URL_TAG: &str = "url";

/// Local timestamp of the observation.
pub const OBS_TIME_TAG: &str = "observationtime";

/// Barometric pressure, in inches of mercury.
pub const PRESSURE_TAG: &str = "pressure";

/// Air temperature, whole degrees.
pub const TEMPERATURE_TAG: &str = "temperature";

/// Relative humidity as a percentage string, e.g. `"55%"`.
pub const HUMIDITY_TAG: &str = "humidity";

/// Free-text sky condition, e.g. "Partly Cloudy".
pub const CONDITION_TAG: &str = "weathertext";

/// Vendor icon identifier for the condition.
pub const ICON_TAG: &str = "weathericon";

/// Wind speed, decimal.
pub const WIND_SPEED_TAG: &str = "windspeed";

/// Compass wind direction, e.g. "NNW".
pub const WIND_DIRECTION_TAG: &str = "winddirection";

// ---------------------------------------------------------------------------
// Sentinels
// ---------------------------------------------------------------------------

/// Pressure value the vendor sends when the station reports no reading.
pub const PRESSURE_UNKNOWN: &str = "Unknown";

// ---------------------------------------------------------------------------
// Observation time formats
// ---------------------------------------------------------------------------

/// Timestamp patterns tried in order until one parses.
///
/// The feed usually sends U.S.-style local times with seconds
/// (`6/10/2008 4:08:00 PM`) but has been seen dropping the seconds and,
/// rarely, switching to an ISO-like form.
pub const DATE_FORMAT_PATTERNS: &[&str] = &[
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
    "%Y-%m-%d %H:%M:%S",
];
