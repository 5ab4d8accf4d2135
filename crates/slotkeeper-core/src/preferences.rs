//! User scheduling preferences.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::timeline::{ClockTime, TimeSlot};

/// Daily window outside of which no slot is ever proposed.
///
/// Deserialization goes through [`WorkingHours::try_new`], so `start < end`
/// holds for every value read from JSON or TOML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawWorkingHours")]
pub struct WorkingHours {
    pub start: ClockTime,
    pub end: ClockTime,
}

#[derive(Deserialize)]
struct RawWorkingHours {
    start: ClockTime,
    end: ClockTime,
}

impl TryFrom<RawWorkingHours> for WorkingHours {
    type Error = ParseError;

    fn try_from(raw: RawWorkingHours) -> Result<Self, Self::Error> {
        Self::try_new(raw.start, raw.end)
    }
}

impl WorkingHours {
    pub const DEFAULT_START: ClockTime = ClockTime::from_minutes(8 * 60);
    pub const DEFAULT_END: ClockTime = ClockTime::from_minutes(22 * 60);

    /// Create a working-hours envelope, rejecting `start >= end`.
    pub fn try_new(start: ClockTime, end: ClockTime) -> Result<Self, ParseError> {
        if end <= start {
            return Err(ParseError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Parse an envelope from two `HH:mm` strings.
    pub fn parse(start: &str, end: &str) -> Result<Self, ParseError> {
        Self::try_new(ClockTime::parse(start)?, ClockTime::parse(end)?)
    }

    pub fn span_minutes(&self) -> i64 {
        self.start.minutes_until(self.end)
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start: Self::DEFAULT_START,
            end: Self::DEFAULT_END,
        }
    }
}

/// An hour of the day the user prefers for focused work, written as a
/// two-digit prefix such as `"09"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProductivityHour(u8);

impl ProductivityHour {
    pub fn new(hour: u8) -> Option<Self> {
        (hour < 24).then_some(Self(hour))
    }

    pub fn parse(value: &str) -> Result<Self, ParseError> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseError::InvalidHour(value.to_string()))
    }

    pub fn hour(&self) -> u8 {
        self.0
    }

    /// Whether a slot starting at `time` falls in this hour.
    pub fn matches(&self, time: ClockTime) -> bool {
        time.hour() == u32::from(self.0)
    }
}

impl TryFrom<String> for ProductivityHour {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ProductivityHour> for String {
    fn from(hour: ProductivityHour) -> Self {
        hour.to_string()
    }
}

impl fmt::Display for ProductivityHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

/// Read-only preferences consulted by the conflict engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_hours: Option<WorkingHours>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub productivity_hours: Option<Vec<ProductivityHour>>,
}

impl UserPreferences {
    pub fn with_working_hours(mut self, hours: WorkingHours) -> Self {
        self.working_hours = Some(hours);
        self
    }

    pub fn with_productivity_hours(mut self, hours: Vec<ProductivityHour>) -> Self {
        self.productivity_hours = Some(hours);
        self
    }

    /// Configured working hours, or 08:00-22:00.
    pub fn working_hours(&self) -> WorkingHours {
        self.working_hours.unwrap_or_default()
    }

    /// Declared productivity hours; empty when unset.
    pub fn productivity_hours(&self) -> &[ProductivityHour] {
        self.productivity_hours.as_deref().unwrap_or(&[])
    }

    /// Whether `slot` starts in one of the declared productivity hours.
    pub fn is_productive(&self, slot: &TimeSlot) -> bool {
        self.productivity_hours()
            .iter()
            .any(|hour| hour.matches(slot.start_time))
    }
}
