//! Current-conditions fragment converter.
//!
//! Walks the children of a `currentconditions` element in document order
//! and maps each recognized tag onto a [`Current`] field or onto the
//! [`ConditionsContext`]. Unknown tags are skipped. Malformed numerics
//! abort the call; an observation time that matches no known format is
//! logged at warning level and left absent.

use chrono::NaiveDateTime;
use roxmltree::{Document, Node};

use crate::constants::{
    CONDITION_TAG, CURRENT_CONDITIONS_TAG, DATE_FORMAT_PATTERNS, HUMIDITY_TAG, ICON_TAG,
    OBS_TIME_TAG, PRESSURE_TAG, PRESSURE_UNKNOWN, TEMPERATURE_TAG, URL_TAG, WIND_DIRECTION_TAG,
    WIND_SPEED_TAG,
};
use crate::logging::{self, Source};
use crate::model::{ConditionsContext, ConvertError, Current};

// ---------------------------------------------------------------------------
// Tag dispatch table
// ---------------------------------------------------------------------------

/// Semantic destination of one recognized tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Link,
    ObservationTime,
    Pressure,
    Temperature,
    Humidity,
    Condition,
    Icon,
    WindSpeed,
    WindDirection,
}

/// Look up the destination for a tag name. `None` means the tag is not
/// part of the mapping and must be skipped without error.
fn field_for(tag: &str) -> Option<Field> {
    match tag {
        URL_TAG => Some(Field::Link),
        OBS_TIME_TAG => Some(Field::ObservationTime),
        PRESSURE_TAG => Some(Field::Pressure),
        TEMPERATURE_TAG => Some(Field::Temperature),
        HUMIDITY_TAG => Some(Field::Humidity),
        CONDITION_TAG => Some(Field::Condition),
        ICON_TAG => Some(Field::Icon),
        WIND_SPEED_TAG => Some(Field::WindSpeed),
        WIND_DIRECTION_TAG => Some(Field::WindDirection),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

/// Parse raw XML text, locate the `currentconditions` element, and convert
/// it.
///
/// The vendor nests the fragment inside a larger response envelope, so the
/// element is searched for anywhere in the document. Returns
/// [`ConvertError::Xml`] for malformed documents and
/// [`ConvertError::ElementNotFound`] when the fragment is missing.
pub fn parse_current_conditions(xml: &str) -> Result<(Current, ConditionsContext), ConvertError> {
    let doc = Document::parse(xml).map_err(|e| ConvertError::Xml(e.to_string()))?;
    let node = doc
        .descendants()
        .find(|n| n.has_tag_name(CURRENT_CONDITIONS_TAG))
        .ok_or(ConvertError::ElementNotFound(CURRENT_CONDITIONS_TAG))?;
    convert_current(node)
}

/// Convert one `currentconditions` element into a [`Current`] record and
/// its [`ConditionsContext`].
///
/// Children are visited in document order; a repeated tag overwrites the
/// earlier assignment, so the last occurrence wins. The first malformed
/// numeric field aborts the call with no partial record.
pub fn convert_current(node: Node) -> Result<(Current, ConditionsContext), ConvertError> {
    let mut current = Current::default();
    let mut context = ConditionsContext::default();

    for child in node.children().filter(|c| c.is_element()) {
        let Some(field) = field_for(child.tag_name().name()) else {
            continue;
        };
        let value = child.text().unwrap_or("");

        match field {
            // Not part of the record; the parent parser reads these from
            // the context after conversion.
            Field::Link => context.more_information_link = Some(value.to_string()),
            Field::ObservationTime => {
                let parsed = parse_observation_time(value);
                if parsed.is_none() {
                    logging::warn(
                        Source::Converter,
                        Some(OBS_TIME_TAG),
                        &format!("Unable to parse observation time {:?}", value),
                    );
                }
                context.observation_time = parsed;
            }
            Field::Pressure => {
                current.pressure = if value == PRESSURE_UNKNOWN {
                    None
                } else {
                    Some(parse_f64(PRESSURE_TAG, value)?)
                };
            }
            Field::Temperature => current.temperature = Some(parse_i32(TEMPERATURE_TAG, value)?),
            Field::Humidity => current.humidity = Some(parse_humidity(value)?),
            Field::Condition => current.condition = Some(value.to_string()),
            Field::Icon => current.icon = Some(value.to_string()),
            Field::WindSpeed => current.wind_speed = Some(parse_f64(WIND_SPEED_TAG, value)?),
            Field::WindDirection => current.wind_direction = Some(value.to_string()),
        }
    }

    Ok((current, context))
}

// ---------------------------------------------------------------------------
// Field parsers
// ---------------------------------------------------------------------------

/// Try each known timestamp pattern in priority order against the trimmed
/// text; the first successful parse wins. Returns `None` when no pattern
/// matches.
///
/// Pure function with no shared formatter state, so concurrent callers
/// need no coordination.
pub fn parse_observation_time(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    DATE_FORMAT_PATTERNS
        .iter()
        .find_map(|pattern| NaiveDateTime::parse_from_str(trimmed, pattern).ok())
}

fn parse_f64(tag: &'static str, value: &str) -> Result<f64, ConvertError> {
    value.parse().map_err(|_| ConvertError::NumberFormat {
        tag,
        value: value.to_string(),
    })
}

fn parse_i32(tag: &'static str, value: &str) -> Result<i32, ConvertError> {
    value.parse().map_err(|_| ConvertError::NumberFormat {
        tag,
        value: value.to_string(),
    })
}

/// Humidity arrives as `"<number>%"`; take the portion before the first
/// `%` and parse it. A missing delimiter is fatal for the call.
fn parse_humidity(value: &str) -> Result<f64, ConvertError> {
    let pct = value.find('%').ok_or_else(|| ConvertError::MissingDelimiter {
        tag: HUMIDITY_TAG,
        value: value.to_string(),
    })?;
    parse_f64(HUMIDITY_TAG, &value[..pct])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    /// Wrap a list of child tags in a `currentconditions` element and
    /// convert it.
    fn convert_fragment(children: &str) -> Result<(Current, ConditionsContext), ConvertError> {
        let xml = format!("<currentconditions>{}</currentconditions>", children);
        let doc = Document::parse(&xml).expect("test fragment should be well-formed");
        convert_current(doc.root_element())
    }

    // --- Tag dispatch -------------------------------------------------------

    #[test]
    fn test_every_known_tag_maps_to_a_field() {
        assert_eq!(field_for("url"), Some(Field::Link));
        assert_eq!(field_for("observationtime"), Some(Field::ObservationTime));
        assert_eq!(field_for("pressure"), Some(Field::Pressure));
        assert_eq!(field_for("temperature"), Some(Field::Temperature));
        assert_eq!(field_for("humidity"), Some(Field::Humidity));
        assert_eq!(field_for("weathertext"), Some(Field::Condition));
        assert_eq!(field_for("weathericon"), Some(Field::Icon));
        assert_eq!(field_for("windspeed"), Some(Field::WindSpeed));
        assert_eq!(field_for("winddirection"), Some(Field::WindDirection));
    }

    #[test]
    fn test_unknown_tag_has_no_field() {
        assert_eq!(field_for("daylight"), None);
        assert_eq!(field_for("Temperature"), None, "tag match is case-sensitive");
        assert_eq!(field_for(""), None);
    }

    // --- Observation time parsing -------------------------------------------

    #[test]
    fn test_observation_time_with_seconds_parses() {
        let parsed = parse_observation_time("6/10/2008 4:08:00 PM");
        let expected = NaiveDate::from_ymd_opt(2008, 6, 10)
            .unwrap()
            .and_hms_opt(16, 8, 0)
            .unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn test_observation_time_second_pattern_wins_when_first_fails() {
        // No seconds, so the first pattern fails and the second parses.
        let parsed = parse_observation_time("6/10/2008 4:30 PM");
        let expected = NaiveDate::from_ymd_opt(2008, 6, 10)
            .unwrap()
            .and_hms_opt(16, 30, 0)
            .unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn test_observation_time_iso_fallback_parses() {
        let parsed = parse_observation_time("2008-06-10 16:08:00");
        let expected = NaiveDate::from_ymd_opt(2008, 6, 10)
            .unwrap()
            .and_hms_opt(16, 8, 0)
            .unwrap();
        assert_eq!(parsed, Some(expected));
    }

    #[test]
    fn test_observation_time_is_trimmed_before_parsing() {
        let parsed = parse_observation_time("  6/10/2008 4:08:00 PM \n");
        assert!(parsed.is_some(), "surrounding whitespace should be trimmed");
    }

    #[test]
    fn test_observation_time_matching_no_pattern_is_none() {
        assert_eq!(parse_observation_time("last Tuesday-ish"), None);
        assert_eq!(parse_observation_time(""), None);
    }

    // --- Field conversion ---------------------------------------------------

    #[test]
    fn test_pressure_unknown_sentinel_is_absent_not_error() {
        let (current, _) = convert_fragment("<pressure>Unknown</pressure>")
            .expect("sentinel pressure should not fail the call");
        assert_eq!(current.pressure, None);
    }

    #[test]
    fn test_pressure_numeric_is_parsed() {
        let (current, _) = convert_fragment("<pressure>29.92</pressure>").unwrap();
        assert_eq!(current.pressure, Some(29.92));
    }

    #[test]
    fn test_pressure_garbage_fails_the_call() {
        let err = convert_fragment("<pressure>N/A</pressure>").unwrap_err();
        assert_eq!(
            err,
            ConvertError::NumberFormat {
                tag: "pressure",
                value: "N/A".to_string(),
            }
        );
    }

    #[test]
    fn test_humidity_percent_string_is_parsed() {
        let (current, _) = convert_fragment("<humidity>55%</humidity>").unwrap();
        assert_eq!(current.humidity, Some(55.0));
    }

    #[test]
    fn test_humidity_without_percent_fails_the_call() {
        let err = convert_fragment("<humidity>55</humidity>").unwrap_err();
        assert_eq!(
            err,
            ConvertError::MissingDelimiter {
                tag: "humidity",
                value: "55".to_string(),
            }
        );
    }

    #[test]
    fn test_humidity_with_garbage_before_percent_fails_the_call() {
        let err = convert_fragment("<humidity>fifty%</humidity>").unwrap_err();
        assert!(matches!(err, ConvertError::NumberFormat { tag: "humidity", .. }));
    }

    #[test]
    fn test_temperature_garbage_fails_the_call() {
        let err = convert_fragment("<temperature>12.5</temperature>").unwrap_err();
        assert!(matches!(err, ConvertError::NumberFormat { tag: "temperature", .. }));
    }

    #[test]
    fn test_wind_speed_garbage_fails_the_call() {
        let err = convert_fragment("<windspeed>calm</windspeed>").unwrap_err();
        assert!(matches!(err, ConvertError::NumberFormat { tag: "windspeed", .. }));
    }

    #[test]
    fn test_link_goes_to_context_not_record() {
        let (current, context) =
            convert_fragment("<url>http://example.com/peoria</url>").unwrap();
        assert_eq!(
            context.more_information_link.as_deref(),
            Some("http://example.com/peoria")
        );
        assert_eq!(current, Current::default());
    }

    #[test]
    fn test_unparseable_observation_time_is_absent_but_call_succeeds() {
        let (_, context) = convert_fragment(
            "<observationtime>whenever</observationtime><temperature>70</temperature>",
        )
        .expect("bad observation time must not fail the call");
        assert_eq!(context.observation_time, None);
    }

    #[test]
    fn test_unknown_tags_are_skipped() {
        let (current, _) = convert_fragment(
            "<daylight>True</daylight><temperature>70</temperature><extra>x</extra>",
        )
        .unwrap();
        assert_eq!(current.temperature, Some(70));
    }

    #[test]
    fn test_repeated_tag_last_occurrence_wins() {
        let (current, _) = convert_fragment(
            "<temperature>65</temperature><temperature>71</temperature>",
        )
        .unwrap();
        assert_eq!(current.temperature, Some(71));
    }

    #[test]
    fn test_empty_element_has_no_text() {
        // <weathertext/> has no text node; verbatim copy of "" is stored.
        let (current, _) = convert_fragment("<weathertext/>").unwrap();
        assert_eq!(current.condition.as_deref(), Some(""));
    }
}
