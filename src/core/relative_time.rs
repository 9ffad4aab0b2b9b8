//! # Relative Time Labels
//!
//! Turns a timestamp into "just now", "5 minutes ago", "3 days ago", or a
//! short calendar date once it is a week old or more.
//!
//! ```text
//! elapsed (s)            label
//! ─────────────────────  ─────────────────────
//! < 60                   just now
//! 60 ..< 3_600           N minute(s) ago
//! 3_600 ..< 86_400       N hour(s) ago
//! 86_400 ..< 604_800     N day(s) ago
//! >= 604_800             M/D/YYYY
//! ```
//!
//! "Now" is always an argument. Nothing in here reads a clock, so the same
//! inputs always give the same label.
//!
//! Timestamps in the future have a negative elapsed time. That is clamped to
//! zero and reads as "just now".

use std::fmt;

use chrono::{FixedOffset, Offset, Utc};
use chrono::format::{Item, StrftimeItems};

use crate::core::timestamp::Timestamp;

pub const MINUTE: i64 = 60;
pub const HOUR: i64 = 60 * MINUTE;
pub const DAY: i64 = 24 * HOUR;
pub const WEEK: i64 = 7 * DAY;

/// US-style short date without zero padding, e.g. `3/5/2024`.
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// The elapsed-time bucket a label falls into, ordered from most recent to oldest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Bucket {
    JustNow,
    Minutes,
    Hours,
    Days,
    Date,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelativeLabel {
    JustNow,
    Minutes(i64),
    Hours(i64),
    Days(i64),
    /// Absolute short date, already rendered with the formatter's pattern.
    Date(String),
}

impl RelativeLabel {
    pub fn bucket(&self) -> Bucket {
        match self {
            RelativeLabel::JustNow => Bucket::JustNow,
            RelativeLabel::Minutes(_) => Bucket::Minutes,
            RelativeLabel::Hours(_) => Bucket::Hours,
            RelativeLabel::Days(_) => Bucket::Days,
            RelativeLabel::Date(_) => Bucket::Date,
        }
    }

    pub fn is_relative(&self) -> bool {
        !matches!(self, RelativeLabel::Date(_))
    }
}

fn write_ago(f: &mut fmt::Formatter<'_>, count: i64, unit: &str) -> fmt::Result {
    if count == 1 {
        write!(f, "1 {unit} ago")
    } else {
        write!(f, "{count} {unit}s ago")
    }
}

impl fmt::Display for RelativeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelativeLabel::JustNow => f.write_str("just now"),
            RelativeLabel::Minutes(n) => write_ago(f, *n, "minute"),
            RelativeLabel::Hours(n) => write_ago(f, *n, "hour"),
            RelativeLabel::Days(n) => write_ago(f, *n, "day"),
            RelativeLabel::Date(date) => f.write_str(date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateFormatError {
    Empty,
    Invalid(String),
}

impl fmt::Display for DateFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateFormatError::Empty => write!(f, "date format is empty"),
            DateFormatError::Invalid(p) => write!(f, "invalid date format pattern '{p}'"),
        }
    }
}

impl std::error::Error for DateFormatError {}

/// Rejects patterns chrono would fail on at render time.
fn validate_date_format(pattern: &str) -> Result<(), DateFormatError> {
    if pattern.trim().is_empty() {
        return Err(DateFormatError::Empty);
    }
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(DateFormatError::Invalid(pattern.to_string()));
    }
    Ok(())
}

/// Relative-time formatter with a configurable fallback date.
///
/// The date pattern and offset only matter for the `>= 1 week` bucket.
/// Both are validated up front by [`RelativeTimeFormatter::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativeTimeFormatter {
    date_format: String,
    offset: FixedOffset,
}

impl Default for RelativeTimeFormatter {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            offset: utc_offset(),
        }
    }
}

fn utc_offset() -> FixedOffset {
    Utc.fix()
}

impl RelativeTimeFormatter {
    pub fn new(date_format: &str, offset: FixedOffset) -> Result<Self, DateFormatError> {
        validate_date_format(date_format)?;
        Ok(Self {
            date_format: date_format.to_string(),
            offset,
        })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn offset(&self) -> FixedOffset {
        self.offset
    }

    pub fn format(&self, timestamp: Timestamp, now: Timestamp) -> RelativeLabel {
        let elapsed = now.seconds_since(timestamp).max(0);

        match elapsed {
            e if e < MINUTE => RelativeLabel::JustNow,
            e if e < HOUR => RelativeLabel::Minutes(e / MINUTE),
            e if e < DAY => RelativeLabel::Hours(e / HOUR),
            e if e < WEEK => RelativeLabel::Days(e / DAY),
            _ => RelativeLabel::Date(self.absolute_date(timestamp)),
        }
    }

    /// The calendar date of `timestamp` in this formatter's offset.
    pub fn absolute_date(&self, timestamp: Timestamp) -> String {
        timestamp
            .as_datetime()
            .with_timezone(&self.offset)
            .format(&self.date_format)
            .to_string()
    }
}

/// Format with the default settings: `M/D/YYYY` dates in UTC.
pub fn format(timestamp: Timestamp, now: Timestamp) -> RelativeLabel {
    RelativeTimeFormatter::default().format(timestamp, now)
}
