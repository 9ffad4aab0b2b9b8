//! # Timestamps
//!
//! A validated, timezone-aware instant. Every `Timestamp` in the crate went
//! through one of the constructors here, so the formatter never has to deal
//! with malformed input.
//!
//! Accepted text forms:
//!
//! - RFC 3339 (`2024-03-05T14:30:00Z`, `2024-03-05T09:30:00-05:00`)
//! - Unix epoch seconds (`1709649000`, `-86400`)
//!
//! Deserializing accepts the same forms, plus bare integers. Serializing
//! always writes RFC 3339 in UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimestampError {
    Empty,
    Malformed(String),
    OutOfRange(i64),
}

impl fmt::Display for TimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampError::Empty => write!(f, "timestamp is empty"),
            TimestampError::Malformed(s) => {
                write!(f, "malformed timestamp '{s}' (expected RFC 3339 or Unix seconds)")
            }
            TimestampError::OutOfRange(secs) => {
                write!(f, "timestamp {secs} is outside the representable range")
            }
        }
    }
}

impl std::error::Error for TimestampError {}

impl Timestamp {
    /// Wrap any timezone-aware `DateTime`. The instant is kept, the zone is not.
    pub fn from_datetime<Tz: TimeZone>(dt: DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }

    pub fn from_unix(secs: i64) -> Result<Self, TimestampError> {
        DateTime::<Utc>::from_timestamp(secs, 0)
            .map(Self)
            .ok_or(TimestampError::OutOfRange(secs))
    }

    /// Parse RFC 3339 text or a (possibly negative) count of Unix seconds.
    pub fn parse(input: &str) -> Result<Self, TimestampError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(TimestampError::Empty);
        }

        let digits = s.strip_prefix('-').unwrap_or(s);
        if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
            let secs = s
                .parse::<i64>()
                .map_err(|_| TimestampError::Malformed(s.to_string()))?;
            return Self::from_unix(secs);
        }

        DateTime::parse_from_rfc3339(s)
            .map(Self::from_datetime)
            .map_err(|_| TimestampError::Malformed(s.to_string()))
    }

    pub fn as_datetime(&self) -> DateTime<Utc> {
        self.0
    }

    pub fn unix_seconds(&self) -> i64 {
        self.0.timestamp()
    }

    /// Whole seconds from `earlier` to `self`. Negative when `earlier` is
    /// actually later.
    pub fn seconds_since(&self, earlier: Timestamp) -> i64 {
        (self.0 - earlier.0).num_seconds()
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Secs, true))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Wire forms accepted when deserializing.
#[derive(Deserialize)]
#[serde(untagged)]
enum TimestampRepr {
    Seconds(i64),
    Text(String),
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match TimestampRepr::deserialize(deserializer)? {
            TimestampRepr::Seconds(secs) => Timestamp::from_unix(secs),
            TimestampRepr::Text(text) => Timestamp::parse(&text),
        }
        .map_err(serde::de::Error::custom)
    }
}
