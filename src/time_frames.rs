use std::{fmt::Display, slice::Iter, str::FromStr};

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// The windows charts can be looked at over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeRange {
    Hour1,
    #[default]
    Hour24,
    Day7,
}

use TimeRange::*;

impl From<TimeRange> for Duration {
    fn from(time_range: TimeRange) -> Self {
        match time_range {
            Hour1 => Duration::hours(1),
            Hour24 => Duration::hours(24),
            Day7 => Duration::days(7),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseTimeRangeError {
    #[error("failed to parse time range {0}")]
    UnknownTimeRange(String),
}

impl FromStr for TimeRange {
    type Err = ParseTimeRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1h" => Ok(Hour1),
            "24h" => Ok(Hour24),
            "7d" => Ok(Day7),
            unknown_time_range => Err(ParseTimeRangeError::UnknownTimeRange(
                unknown_time_range.to_string(),
            )),
        }
    }
}

impl Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Hour1 => write!(f, "1h"),
            Hour24 => write!(f, "24h"),
            Day7 => write!(f, "7d"),
        }
    }
}

impl Serialize for TimeRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for TimeRange {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl TimeRange {
    /// The earliest instant a sample may have to be shown in this range. The widest range keeps
    /// every sample, so it has no cutoff.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        match self {
            Hour1 | Hour24 => Some(now - Duration::from(self)),
            Day7 => None,
        }
    }

    pub fn contains(self, timestamp: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.cutoff(now) {
            Some(cutoff) => timestamp >= cutoff,
            None => true,
        }
    }
}

static TIME_RANGES: [TimeRange; 3] = [Hour1, Hour24, Day7];

impl TimeRange {
    pub fn iterator() -> Iter<'static, TimeRange> {
        TIME_RANGES.iter()
    }
}
