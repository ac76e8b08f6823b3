//! Timestamp scalar for server-reported date-times.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDateTime, SecondsFormat};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Accepted shape for offset-less server times; the fraction is optional.
const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A date-time exactly as the server reported it.
///
/// The server emits two shapes: RFC 3339 with a numeric UTC offset
/// (`2015-10-12T22:55:23.022+02:00`) and offset-less local time
/// (`2021-03-21T13:54:52.383`). Both parse losslessly. The offset is never
/// renormalized to UTC and fractional seconds keep their full precision, so
/// a bound value can be compared or re-serialized without drift.
///
/// Equality follows chrono: two [`Timestamp::Zoned`] values are equal when
/// they name the same instant, and a zoned value never equals a naive one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timestamp {
    /// Date-time carrying an explicit UTC offset.
    Zoned(DateTime<FixedOffset>),
    /// Date-time with no offset information.
    Naive(NaiveDateTime),
}

impl Timestamp {
    /// Parse a server date-time string, trying RFC 3339 before the
    /// offset-less local shape.
    pub fn parse(value: &str) -> Result<Self, TimestampParseError> {
        if let Ok(zoned) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self::Zoned(zoned));
        }
        NaiveDateTime::parse_from_str(value, LOCAL_FORMAT)
            .map(Self::Naive)
            .map_err(|_| TimestampParseError {
                value: value.to_string(),
            })
    }

    /// UTC offset carried by the value, if it had one.
    pub fn offset(&self) -> Option<FixedOffset> {
        match self {
            Self::Zoned(zoned) => Some(*zoned.offset()),
            Self::Naive(_) => None,
        }
    }

    /// Wall-clock date-time with any offset information dropped.
    pub fn naive_local(&self) -> NaiveDateTime {
        match self {
            Self::Zoned(zoned) => zoned.naive_local(),
            Self::Naive(naive) => *naive,
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zoned(zoned) => {
                f.write_str(&zoned.to_rfc3339_opts(SecondsFormat::AutoSi, false))
            }
            Self::Naive(naive) => write!(f, "{}", naive.format(LOCAL_FORMAT)),
        }
    }
}

impl FromStr for Timestamp {
    type Err = TimestampParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl From<DateTime<FixedOffset>> for Timestamp {
    fn from(value: DateTime<FixedOffset>) -> Self {
        Self::Zoned(value)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::Naive(value)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl<'de> Visitor<'de> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("an RFC 3339 or local date-time string")
    }

    fn visit_str<E>(self, value: &str) -> Result<Timestamp, E>
    where
        E: de::Error,
    {
        Timestamp::parse(value).map_err(de::Error::custom)
    }
}

/// Error returned when a string matches neither accepted date-time shape.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp '{value}': expected RFC 3339 or YYYY-MM-DDTHH:MM:SS[.fff]")]
pub struct TimestampParseError {
    /// The rejected input.
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone, Timelike};
    use serde_json::json;

    fn plus_two_hours() -> FixedOffset {
        FixedOffset::east_opt(2 * 3600).unwrap()
    }

    #[test]
    fn parses_offset_bearing_strings() {
        let ts = Timestamp::parse("2015-10-12T22:55:23.022+02:00").unwrap();
        let expected = plus_two_hours()
            .with_ymd_and_hms(2015, 10, 12, 22, 55, 23)
            .unwrap()
            .with_nanosecond(22_000_000)
            .unwrap();
        assert_eq!(ts, Timestamp::Zoned(expected));
        assert_eq!(ts.offset(), Some(plus_two_hours()));
    }

    #[test]
    fn parses_offsetless_strings_as_naive() {
        let ts = Timestamp::parse("2021-03-21T13:54:52.383").unwrap();
        let expected = NaiveDate::from_ymd_opt(2021, 3, 21)
            .unwrap()
            .and_hms_milli_opt(13, 54, 52, 383)
            .unwrap();
        assert_eq!(ts, Timestamp::Naive(expected));
        assert_eq!(ts.offset(), None);
    }

    #[test]
    fn fraction_is_optional_in_the_local_shape() {
        let ts = Timestamp::parse("2021-03-21T13:54:32").unwrap();
        let expected = NaiveDate::from_ymd_opt(2021, 3, 21)
            .unwrap()
            .and_hms_opt(13, 54, 32)
            .unwrap();
        assert_eq!(ts, Timestamp::Naive(expected));
    }

    #[test]
    fn display_reproduces_offset_and_fraction() {
        let zoned = Timestamp::parse("2015-10-12T22:55:23.022+02:00").unwrap();
        assert_eq!(zoned.to_string(), "2015-10-12T22:55:23.022+02:00");

        let naive = Timestamp::parse("2015-09-06T15:49:01.156").unwrap();
        assert_eq!(naive.to_string(), "2015-09-06T15:49:01.156");
    }

    #[test]
    fn serde_round_trips_through_json_strings() {
        let value = json!("2015-10-12T22:55:23.022+02:00");
        let ts: Timestamp = serde_json::from_value(value.clone()).unwrap();
        assert_eq!(serde_json::to_value(ts).unwrap(), value);
    }

    #[test]
    fn rejects_unrecognized_strings() {
        for input in ["12/10/2015", "not-a-time", "2015-10-12", ""] {
            let error = Timestamp::parse(input).unwrap_err();
            assert_eq!(error.value, input);
        }
    }

    #[test]
    fn zoned_never_equals_naive() {
        let zoned = Timestamp::parse("2021-03-21T13:54:52+00:00").unwrap();
        let naive = Timestamp::parse("2021-03-21T13:54:52").unwrap();
        assert_ne!(zoned, naive);
        assert_eq!(zoned.naive_local(), naive.naive_local());
    }

    #[test]
    fn from_str_and_from_conversions_agree() {
        let parsed: Timestamp = "2015-09-06T15:49:01.156".parse().unwrap();
        let constructed = Timestamp::from(
            NaiveDate::from_ymd_opt(2015, 9, 6)
                .unwrap()
                .and_hms_milli_opt(15, 49, 1, 156)
                .unwrap(),
        );
        assert_eq!(parsed, constructed);
    }
}
