//! Time slots and interval arithmetic.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;
use super::event::Event;
use crate::error::ParseError;

/// A contiguous interval on a single date.
///
/// Slots carry no identity: two slots are equal when date, start and end match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
}

impl TimeSlot {
    /// Create a slot without checking that `start_time < end_time`.
    pub fn new(date: NaiveDate, start_time: ClockTime, end_time: ClockTime) -> Self {
        Self {
            date,
            start_time,
            end_time,
        }
    }

    /// Create a slot, rejecting empty or inverted intervals.
    pub fn try_new(
        date: NaiveDate,
        start_time: ClockTime,
        end_time: ClockTime,
    ) -> Result<Self, ParseError> {
        if end_time <= start_time {
            return Err(ParseError::InvalidRange {
                start: start_time.to_string(),
                end: end_time.to_string(),
            });
        }
        Ok(Self::new(date, start_time, end_time))
    }

    /// A slot of `minutes` length starting at `start_time`.
    pub fn starting_at(date: NaiveDate, start_time: ClockTime, minutes: u32) -> Self {
        Self::new(date, start_time, start_time.plus_minutes(minutes))
    }

    pub fn duration_minutes(&self) -> u32 {
        self.start_time.minutes_until(self.end_time).unsigned_abs() as u32
    }

    /// Boundary-inclusive overlap test.
    ///
    /// Two slots that merely touch (one ends exactly when the other starts)
    /// count as overlapping.
    pub fn overlaps(&self, other: &TimeSlot) -> bool {
        self.date == other.date
            && self.start_time <= other.end_time
            && other.start_time <= self.end_time
    }
}

impl std::fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}-{}", self.date, self.start_time, self.end_time)
    }
}

/// Check whether two slots overlap. See [`TimeSlot::overlaps`].
pub fn overlaps(a: &TimeSlot, b: &TimeSlot) -> bool {
    a.overlaps(b)
}

/// Length of an event in minutes.
pub fn duration(event: &Event) -> u32 {
    event.slot().duration_minutes()
}
