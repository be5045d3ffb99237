//! Day-granularity date keys and calendar arithmetic.
//!
//! Every key is a calendar date in UTC. Timestamps are truncated to the UTC
//! calendar day they fall on, so two instants on the same UTC day always map
//! to the same key regardless of time-of-day or the offset they were written
//! with.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Error, Result};

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// A calendar day in UTC, rendered as `YYYY-MM-DD`.
///
/// Ordering follows the calendar, which is also the lexicographic order of
/// the rendered string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Build a key from year, month and day. Returns `None` for impossible dates.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// The key `days` days after this one (`days` may be negative).
    ///
    /// # Panics
    ///
    /// Panics if the result falls outside the range chrono can represent.
    pub fn add_days(self, days: i64) -> Self {
        let midnight = self.midnight_utc() + Duration::days(days);
        to_date_key(midnight)
    }

    /// UTC midnight at the start of this day.
    pub fn midnight_utc(self) -> DateTime<Utc> {
        self.0.and_time(chrono::NaiveTime::MIN).and_utc()
    }

    /// The underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        NaiveDate::parse_from_str(s, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|e| Error::InvalidDate {
                input: s.to_string(),
                message: e.to_string(),
            })
    }
}

/// Truncate an instant to the UTC calendar day it falls on.
pub fn to_date_key(ts: DateTime<Utc>) -> DateKey {
    DateKey(ts.date_naive())
}

/// Parse an ISO-8601 instant.
///
/// Accepts RFC 3339 (`2025-12-01T09:30:00Z`, `...+01:00`), a naive
/// date-time which is read as UTC, or a bare date which is read as UTC
/// midnight.
pub fn parse_instant(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Ok(ts.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(naive.and_utc());
    }
    s.parse::<DateKey>()
        .map(DateKey::midnight_utc)
        .map_err(|_| Error::InvalidDate {
            input: s.to_string(),
            message: "expected an ISO-8601 instant".to_string(),
        })
}

/// Serde adapter for instants written as ISO-8601 strings.
pub(crate) fn deserialize_instant<'de, D>(
    deserializer: D,
) -> std::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_instant(&raw).map_err(serde::de::Error::custom)
}
