//! Lenient timestamp parsing for record dates
//!
//! Records written by different clients carry dates as plain calendar dates,
//! local date-times, or RFC 3339 strings. They are all coerced to a local
//! `NaiveDateTime` when a record is deserialized so that the analytics only
//! ever compare instants of one kind.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serializer};

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Parse a date or date-time string into a comparable local instant
///
/// A date without a time means midnight. Strings carrying an offset keep
/// their own wall-clock time.
pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Some(dt);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Parse a calendar date, dropping any time component
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    parse_instant(s).map(|dt| dt.date())
}

fn format_instant(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string()
}

/// Serde adapter for required instants
pub mod instant {
    use super::*;

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&format_instant(dt))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_instant(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {}", raw)))
    }
}

/// Serde adapter for optional instants
pub mod option_instant {
    use super::*;

    pub fn serialize<S: Serializer>(
        dt: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match dt {
            Some(dt) => serializer.serialize_some(&format_instant(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            // An empty string is how the old forms stored "no value"
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_instant(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {}", raw))),
            None => Ok(None),
        }
    }
}

/// Serde adapter for optional calendar dates
pub mod option_date {
    use super::*;

    pub fn serialize<S: Serializer>(d: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
        match d {
            Some(d) => serializer.serialize_some(&d.format("%Y-%m-%d").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw {
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => parse_date(&raw)
                .map(Some)
                .ok_or_else(|| serde::de::Error::custom(format!("unrecognized date: {}", raw))),
            None => Ok(None),
        }
    }
}
