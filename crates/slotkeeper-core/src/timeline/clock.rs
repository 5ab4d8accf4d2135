//! Time-of-day values.
//!
//! Times arrive as `"HH:mm"` strings and are converted once, at the serde or
//! CLI boundary, into minutes since midnight. Every comparison inside the
//! engine is plain integer arithmetic after that.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::ParseError;

const MINUTES_PER_HOUR: u32 = 60;

/// A time of day with minute precision, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u32);

impl ClockTime {
    /// Build from hour and minute components.
    ///
    /// Returns `None` when either component is out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour < 24 && minute < MINUTES_PER_HOUR {
            Some(Self(hour * MINUTES_PER_HOUR + minute))
        } else {
            None
        }
    }

    /// Build from a raw minutes-since-midnight count.
    pub const fn from_minutes(minutes: u32) -> Self {
        Self(minutes)
    }

    /// Parse a 24-hour `HH:mm` string.
    pub fn parse(value: &str) -> Result<Self, ParseError> {
        NaiveTime::parse_from_str(value.trim(), "%H:%M")
            .map(Self::from)
            .map_err(|_| ParseError::InvalidTime(value.to_string()))
    }

    /// Minutes since midnight
    pub fn minutes(&self) -> u32 {
        self.0
    }

    pub fn hour(&self) -> u32 {
        self.0 / MINUTES_PER_HOUR
    }

    pub fn minute(&self) -> u32 {
        self.0 % MINUTES_PER_HOUR
    }

    /// The time `minutes` later on the same clock.
    pub fn plus_minutes(&self, minutes: u32) -> Self {
        Self(self.0 + minutes)
    }

    /// Signed distance from `self` to `later`, in minutes.
    pub fn minutes_until(&self, later: ClockTime) -> i64 {
        i64::from(later.0) - i64::from(self.0)
    }
}

impl From<NaiveTime> for ClockTime {
    fn from(time: NaiveTime) -> Self {
        Self(time.hour() * MINUTES_PER_HOUR + time.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Parse an ISO `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> Result<NaiveDate, ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| ParseError::InvalidDate(value.to_string()))
}
